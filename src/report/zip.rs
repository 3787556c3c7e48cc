use crate::core::engine::RunOutput;
use crate::report::{json, text};
use anyhow::{Context, Result};
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Renders the summary and JSON reports straight into an archive rooted at
/// `<root>/`, without touching the filesystem.
pub fn bundle(output: &RunOutput, root: &str) -> Result<Vec<u8>> {
    let epoch = zip::DateTime::from_date_and_time(1980, 1, 1, 0, 0, 0)
        .map_err(|e| anyhow::anyhow!("invalid zip timestamp: {e}"))?;
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(epoch);

    let entries = [
        ("summary.txt", text::summary(output)),
        ("stats.json", json::to_string(output)? + "\n"),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    zip.add_directory(format!("{root}/"), options)
        .context("failed to add directory entry to zip")?;
    for (name, body) in &entries {
        zip.start_file(format!("{root}/{name}"), options)
            .with_context(|| format!("failed to add {name} to zip"))?;
        zip.write_all(body.as_bytes())?;
    }
    let cursor = zip.finish().context("failed to finalize zip")?;
    Ok(cursor.into_inner())
}

/// The archive is assembled in memory, so a failure leaves no partial file.
pub fn write_zip(path: &Path, output: &RunOutput, root: &str) -> Result<()> {
    let bytes = bundle(output, root)?;
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}
