//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::{ContextRow, Formatter};
use crate::error::Result;

/// Formatter for aligned table output
pub struct TableFormatter {
    pub no_headers: bool,
}

impl Formatter for TableFormatter {
    fn render(&self, rows: &[ContextRow]) -> Result<String> {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        if !self.no_headers {
            table.set_header(vec!["CURRENT", "NAME", "CLUSTER"]);
        }

        for row in rows {
            let current = if row.current { "*" } else { "" };
            table.add_row(vec![current, row.name.as_str(), row.cluster.as_str()]);
        }

        Ok(table.to_string())
    }
}
