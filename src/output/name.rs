//! Name-only output formatter

use super::{ContextRow, Formatter};
use crate::error::Result;

/// Prints one context name per line
pub struct NameFormatter;

impl Formatter for NameFormatter {
    fn render(&self, rows: &[ContextRow]) -> Result<String> {
        Ok(rows
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
