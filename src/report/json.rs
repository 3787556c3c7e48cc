use crate::core::engine::RunOutput;
use crate::core::metrics::{BaseComposition, BasicStats, QualityStats};
use crate::core::model::FinalizeContext;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a FinalizeContext,
    basic: Option<BasicStats>,
    quality: Option<QualityStats>,
    composition: Option<BaseComposition>,
}

fn build(output: &RunOutput) -> JsonReport<'_> {
    let metrics = output.agg.finalize();
    JsonReport {
        file: &output.ctx,
        basic: metrics.basic,
        quality: metrics.quality,
        composition: metrics.composition,
    }
}

pub fn to_string(output: &RunOutput) -> Result<String> {
    serde_json::to_string_pretty(&build(output)).context("failed to serialize statistics")
}

pub fn write(path: &Path, output: &RunOutput) -> Result<()> {
    let mut w = BufWriter::new(File::create(path).with_context(|| "create stats.json failed")?);
    serde_json::to_writer_pretty(&mut w, &build(output))
        .context("failed to serialize statistics")?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}
