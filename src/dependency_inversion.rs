//! Pattern D: Dependency Inversion
//!
//! High-level modules should not depend on low-level modules; both depend
//! on an abstraction. Here the abstraction is the [`DataSaver`] trait.

use crate::error::Result;
use std::io::Write;
use tracing::debug;

pub const REPORT_PAYLOAD: &str = "Report Data";

// ============================================================================
// Violation: the generator owns a concrete file writer
// ============================================================================

pub mod violation {
    use super::*;

    pub struct TightFileManager;

    impl TightFileManager {
        pub fn save_to_file(&self, out: &mut dyn Write, data: &str) -> Result<()> {
            writeln!(out, "Saving data to a file: {}", data)?;
            Ok(())
        }
    }

    /// Hard-wired to [`TightFileManager`]; saving anywhere else means
    /// editing this type.
    pub struct TightReportGenerator {
        file_manager: TightFileManager,
        payload: String,
    }

    impl TightReportGenerator {
        pub fn new(payload: impl Into<String>) -> Self {
            TightReportGenerator {
                file_manager: TightFileManager,
                payload: payload.into(),
            }
        }

        pub fn generate_report(&self, out: &mut dyn Write) -> Result<()> {
            self.file_manager.save_to_file(out, &self.payload)
        }
    }

    pub fn run(out: &mut dyn Write, payload: &str) -> Result<()> {
        TightReportGenerator::new(payload).generate_report(out)
    }
}

// ============================================================================
// Corrected: the generator depends on a trait
// ============================================================================

pub trait DataSaver {
    fn save_data(&self, out: &mut dyn Write, data: &str) -> Result<()>;
}

pub struct FileManager;

impl DataSaver for FileManager {
    fn save_data(&self, out: &mut dyn Write, data: &str) -> Result<()> {
        writeln!(out, "Saving data to a file: {}", data)?;
        Ok(())
    }
}

pub struct DatabaseManager;

impl DataSaver for DatabaseManager {
    fn save_data(&self, out: &mut dyn Write, data: &str) -> Result<()> {
        writeln!(out, "Saving data to a database: {}", data)?;
        Ok(())
    }
}

pub struct ReportGenerator<'a> {
    data_saver: &'a dyn DataSaver,
    payload: String,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(data_saver: &'a dyn DataSaver) -> Self {
        Self::with_payload(data_saver, REPORT_PAYLOAD)
    }

    pub fn with_payload(data_saver: &'a dyn DataSaver, payload: impl Into<String>) -> Self {
        ReportGenerator {
            data_saver,
            payload: payload.into(),
        }
    }

    /// Hands the payload to the injected saver, once.
    pub fn generate_report(&self, out: &mut dyn Write) -> Result<()> {
        debug!(payload = %self.payload, "generating report");
        self.data_saver.save_data(out, &self.payload)
    }
}

pub fn run(out: &mut dyn Write, payload: &str) -> Result<()> {
    let file_manager = FileManager;
    ReportGenerator::with_payload(&file_manager, payload).generate_report(out)?;

    let db_manager = DatabaseManager;
    ReportGenerator::with_payload(&db_manager, payload).generate_report(out)?;
    Ok(())
}
