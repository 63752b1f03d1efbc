//! Output formatting module
//!
//! Renders context query results as table, CSV, JSON, YAML or bare names

mod csv;
mod json;
mod name;
mod table;
mod yaml;

use crate::cli::OutputFormat;
use crate::contexts::{ContextOverview, ContextSummary};
use crate::error::Result;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::name::NameFormatter;
pub use self::table::TableFormatter;
pub use self::yaml::YamlFormatter;

/// Trait for output formatters
pub trait Formatter {
    /// Render the context rows to a printable string
    fn render(&self, rows: &[ContextRow]) -> Result<String>;
}

/// Context data flattened for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextRow {
    pub current: bool,
    pub name: String,
    pub cluster: String,
}

impl ContextRow {
    /// Create a row, marking it current when it matches the selected context
    pub fn new(summary: &ContextSummary, current: bool) -> Self {
        Self {
            current,
            name: summary.name.clone(),
            cluster: summary.cluster.clone(),
        }
    }

    fn summary(&self) -> ContextSummary {
        ContextSummary::new(self.name.as_str(), self.cluster.as_str())
    }
}

/// Build rows from an overview, preserving its order
pub fn rows_from_overview(overview: &ContextOverview) -> Vec<ContextRow> {
    overview
        .contexts
        .iter()
        .map(|c| ContextRow::new(c, overview.is_current(&c.name)))
        .collect()
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat, no_headers: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter { no_headers }),
        OutputFormat::Csv => Box::new(CsvFormatter { no_headers }),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
        OutputFormat::Name => Box::new(NameFormatter),
    }
}
