use crate::core::{SearchHit, SortReport};
use crate::domain::Record;
use crate::utils::error::{CatalogError, Result};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

const RULE: &str = "-----------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

impl DisplayFormat {
    pub const NAMES: [&'static str; 4] = ["table", "csv", "tsv", "json"];
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayFormat::Table => "table",
            DisplayFormat::Csv => "csv",
            DisplayFormat::Tsv => "tsv",
            DisplayFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for DisplayFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(DisplayFormat::Table),
            "csv" => Ok(DisplayFormat::Csv),
            "tsv" => Ok(DisplayFormat::Tsv),
            "json" => Ok(DisplayFormat::Json),
            other => Err(CatalogError::ConfigValidationError {
                field: "display.format".to_string(),
                message: format!(
                    "Unsupported format '{}'. Allowed values: {}",
                    other,
                    DisplayFormat::NAMES.join(", ")
                ),
            }),
        }
    }
}

/// Writes `records` to `out` in the requested format.
pub fn render_records<W: Write>(records: &[Record], format: DisplayFormat, out: &mut W) -> Result<()> {
    match format {
        DisplayFormat::Table => render_table(records, out),
        DisplayFormat::Csv => render_delimited(records, b',', out),
        DisplayFormat::Tsv => render_delimited(records, b'\t', out),
        DisplayFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn render_table<W: Write>(records: &[Record], out: &mut W) -> Result<()> {
    writeln!(out, "\nLISTA DE COMPONENTES ({} itens)", records.len())?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{:<30} {:<15} {}", "Nome", "Tipo", "Prioridade")?;
    writeln!(out, "{}", RULE)?;
    for record in records {
        writeln!(
            out,
            "{:<30} {:<15} {}",
            record.name(),
            record.kind(),
            record.priority()
        )?;
    }
    Ok(())
}

fn render_delimited<W: Write>(records: &[Record], delimiter: u8, out: &mut W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(&mut *out);
    for record in records {
        writer.serialize(record)?;
    }
    if records.is_empty() {
        writer.write_record(["name", "type", "priority"])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn render_sort_report<W: Write>(report: &SortReport, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Comparações: {} | Tempo: {:.6} s",
        report.comparisons(),
        report.measurement.elapsed_secs()
    )?;
    Ok(())
}

pub fn render_search_hit<W: Write>(hit: &SearchHit, out: &mut W) -> Result<()> {
    writeln!(out, "Comparações realizadas: {}", hit.comparisons())?;
    match hit.record() {
        Some(record) => writeln!(
            out,
            "Encontrado: {} | {} | {}",
            record.name(),
            record.kind(),
            record.priority()
        )?,
        None => writeln!(out, "Componente não encontrado.")?,
    }
    Ok(())
}
