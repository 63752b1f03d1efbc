//! CSV output formatter

use super::{ContextRow, Formatter};
use crate::error::Result;

/// Formatter for CSV output
pub struct CsvFormatter {
    pub no_headers: bool,
}

impl Formatter for CsvFormatter {
    fn render(&self, rows: &[ContextRow]) -> Result<String> {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        if !self.no_headers {
            lines.push("current,name,cluster".to_string());
        }

        for row in rows {
            lines.push(format!(
                "{},{},{}",
                row.current,
                escape_csv(&row.name),
                escape_csv(&row.cluster)
            ));
        }

        Ok(lines.join("\n"))
    }
}

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
