//! JSON output formatter

use super::{ContextRow, Formatter};
use crate::contexts::ContextSummary;
use crate::error::Result;

/// Formatter for JSON output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn render(&self, rows: &[ContextRow]) -> Result<String> {
        let summaries: Vec<ContextSummary> = rows.iter().map(ContextRow::summary).collect();
        Ok(serde_json::to_string_pretty(&summaries)?)
    }
}
