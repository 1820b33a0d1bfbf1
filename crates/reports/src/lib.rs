//! # FMSim Reports
//!
//! Export rule evaluations and compliance scans as CSV, JSON or Markdown.
//!
//! ## Exporters
//!
//! - [`CsvExporter`] - CSV with quoting
//! - [`JsonExporter`] - JSON (pretty or compact)
//! - [`MarkdownExporter`] - Markdown tables
//!
//! ## Reports
//!
//! - [`EvaluationReport`] - one row per rule result for a single context
//! - [`ScanFindingsReport`] - one row per violation found by a scan
//!
//! ## Example
//!
//! ```rust,ignore
//! use fmsim_reports::{EvaluationReport, MarkdownExporter, ReportExporter};
//!
//! let report = EvaluationReport::new("Transfer TR-1", results);
//! let markdown = MarkdownExporter::new().export(&report);
//! ```

pub mod compliance;
pub mod exporters;

pub use compliance::{EvaluationReport, ScanFindingsReport};
pub use exporters::{CsvExporter, JsonExporter, MarkdownExporter, ReportData, ReportExporter};
