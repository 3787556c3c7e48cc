use crate::core::engine::RunOutput;
use crate::report::text;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write(path: &Path, output: &RunOutput) -> Result<()> {
    let mut w = BufWriter::new(File::create(path).with_context(|| "create summary.txt failed")?);
    w.write_all(text::summary(output).as_bytes())?;
    w.flush()?;
    Ok(())
}
