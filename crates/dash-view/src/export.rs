//! Per-month metrics CSV export (the dashboard's "download data" feature).
//!
//! One row per month: shortages per medicine class, deaths per age band,
//! wastage and treatment rate — the same numbers the charts draw, in a shape
//! workshop participants can open in a spreadsheet.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use dash_core::{AgeGroup, MedicineType};
use dash_scenario::Scenario;

use crate::error::ViewResult;

/// Writes scenario metrics to a CSV stream.
pub struct MetricsCsv<W: Write> {
    inner:    Writer<W>,
    finished: bool,
}

impl MetricsCsv<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> ViewResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> MetricsCsv<W> {
    /// Wrap any `Write` sink and write the header row.
    pub fn from_writer(writer: W) -> ViewResult<Self> {
        let mut inner = Writer::from_writer(writer);

        let mut header = vec!["scenario".to_string(), "month".to_string()];
        for med in MedicineType::ALL {
            header.push(format!("shortages_{}", med.as_str().to_lowercase()));
        }
        for age in AgeGroup::ALL {
            header.push(format!("deaths_{}", age.as_str()));
        }
        header.push("wastage_total".to_string());
        header.push("treatment_rate".to_string());
        inner.write_record(&header)?;

        Ok(Self {
            inner,
            finished: false,
        })
    }

    /// Append one row per month of `scenario`.
    pub fn write_scenario(&mut self, scenario: &Scenario) -> ViewResult<()> {
        for snap in &scenario.months {
            let mut row = vec![
                scenario.scenario_id.to_string(),
                snap.month.to_string(),
            ];
            for med in MedicineType::ALL {
                row.push(snap.shortages.get(&med).copied().unwrap_or(0).to_string());
            }
            for age in AgeGroup::ALL {
                row.push(snap.deaths.get(&age).copied().unwrap_or(0).to_string());
            }
            row.push(snap.wastage_total().to_string());
            row.push(format!("{:.4}", snap.treatment_rate));
            self.inner.write_record(&row)?;
        }
        Ok(())
    }

    /// Flush the underlying writer.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> ViewResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
