use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::error::Result;
use crate::model::record::WordRootRecord;
use crate::model::row::{SourceRow, REQUIRED_COLUMNS};
use crate::model::settings::{AssetSettings, Settings};
use crate::services::{convert, dataset, writer};

#[derive(Debug)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub records: usize,
}

/// Load, check columns, convert every row, write one JSON file.
/// Any error returns before the output file is touched.
pub fn run(settings: &Settings) -> Result<RunReport> {
    let dataset = dataset::load(&settings.input_path)?;
    info!(
        path = %settings.input_path.display(),
        rows = dataset.len(),
        "loaded dataset"
    );

    dataset.require_columns(&REQUIRED_COLUMNS)?;

    let rows = dataset.source_rows();
    let records = convert_all(&rows, &settings.assets);

    let output = settings.output_path();
    info!(path = %output.display(), "writing wordroot json");
    writer::write_records(&records, &output)?;

    Ok(RunReport {
        input: settings.input_path.clone(),
        output,
        rows: rows.len(),
        records: records.len(),
    })
}

fn convert_all(rows: &[SourceRow], assets: &AssetSettings) -> Vec<WordRootRecord> {
    let progress = ProgressBar::new(rows.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    progress.set_message("converting wordroot entries");

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let record = convert::convert_row(row, i, assets);
        debug!(id = %record.id, "converted row {}", i + 1);
        records.push(record);
        progress.inc(1);
    }

    progress.finish_and_clear();
    records
}
