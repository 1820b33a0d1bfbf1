//! Command handlers

pub mod evaluate;
pub mod rules;
pub mod scan;

use anyhow::{Context, Result};
use fmsim_reports::{CsvExporter, JsonExporter, MarkdownExporter, ReportData, ReportExporter};
use std::fs;
use std::path::Path;

use crate::OutputFormat;

const MAX_COLUMN_WIDTH: usize = 48;

/// Render a report in the requested format
pub fn render(report: &dyn ReportData, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => render_table(report),
        OutputFormat::Json => JsonExporter::new().export(report),
        OutputFormat::Csv => CsvExporter::new().export(report),
        OutputFormat::Markdown => MarkdownExporter::new().export(report),
    }
}

/// Print to stdout or write to `output`
pub fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).context("Failed to write report file")?;
            println!("✅ Report written: {:?}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn render_table(report: &dyn ReportData) -> String {
    let headers = report.headers();
    let rows = report.rows();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", truncate(cell, *width), width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut output = format!("{}\n", report.title());
    for (key, value) in report.summary() {
        output.push_str(&format!("   {}: {}\n", key, value));
    }
    output.push('\n');

    if rows.is_empty() {
        output.push_str("No entries.\n");
        return output;
    }

    output.push_str(&line(headers.as_slice()));
    output.push('\n');
    output.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
    output.push('\n');
    for row in &rows {
        output.push_str(&line(row.as_slice()));
        output.push('\n');
    }
    output
}

/// Truncate to `max` characters, marking the cut with "..."
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    }
}
