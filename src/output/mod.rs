//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

/// Lists render as a table for both pretty and table output
impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty | OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "ID")]
        id: i64,
    }

    #[test]
    fn test_vec_table_and_json() {
        let rows = vec![Row { id: 42 }];

        let table = rows.format(OutputFormat::Table).unwrap();
        assert!(table.contains("ID"));
        assert!(table.contains("42"));

        let json = rows.format(OutputFormat::Json).unwrap();
        assert!(json.contains("\"id\": 42"));
    }

    #[test]
    fn test_empty_vec_table() {
        let rows: Vec<Row> = vec![];
        assert_eq!(rows.format(OutputFormat::Pretty).unwrap(), "No results found.");
    }
}
