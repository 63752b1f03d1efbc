//! YAML output formatter

use super::{ContextRow, Formatter};
use crate::contexts::ContextSummary;
use crate::error::Result;

/// Formatter for YAML output
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn render(&self, rows: &[ContextRow]) -> Result<String> {
        let summaries: Vec<ContextSummary> = rows.iter().map(ContextRow::summary).collect();
        let yaml = serde_yml::to_string(&summaries)?;
        Ok(yaml.trim_end().to_string())
    }
}
