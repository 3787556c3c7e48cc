use crate::core::io;
use crate::core::metrics::Agg;
use crate::core::model::FinalizeContext;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub struct RunConfig {
    pub reads: PathBuf,
    pub sample_name: String,
    pub phred_offset: u8,
}

pub struct RunOutput {
    pub agg: Agg,
    pub ctx: FinalizeContext,
}

pub fn run(cfg: RunConfig) -> Result<RunOutput> {
    let t_total = Instant::now();

    let file_name = cfg
        .reads
        .file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .context("failed to determine input filename")?;

    let mut agg = Agg::with_phred_offset(cfg.phred_offset);
    analyze(&mut agg, &cfg.reads)?;

    let file_size = fs::metadata(&cfg.reads)
        .with_context(|| format!("failed to stat {}", cfg.reads.display()))?
        .len();
    log::info!(
        "input={} bytes={} reads={} bases={}",
        cfg.reads.display(),
        file_size,
        agg.sequences_count,
        agg.total_length
    );
    log_stage("engine.total", t_total);

    Ok(RunOutput {
        agg,
        ctx: FinalizeContext {
            file_name,
            file_size,
            sample_name: cfg.sample_name,
        },
    })
}

/// Resets `agg`, then reads and aggregates every record in `path`. On a read
/// failure `agg` is left empty.
pub fn analyze(agg: &mut Agg, path: &Path) -> Result<()> {
    agg.reset();

    let t_read = Instant::now();
    let lines = io::read_lines(path)?;
    log_stage("engine.read", t_read);
    log::debug!("lines={}", lines.len());

    let t_parse = Instant::now();
    agg.parse_fastq(&lines);
    log_stage("engine.parse", t_parse);
    Ok(())
}

fn log_stage(name: &str, t: Instant) {
    log::debug!("stage={} time={}", name, fmt_dur(t.elapsed()));
}

pub fn fmt_dur(d: Duration) -> String {
    if d.as_secs_f64() < 1.0 {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.3}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_collects_file_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.fq");
        let data = b"@a\nACGT\n+\n!!!!\n@b\nATAT\n+\nIIII\n";
        fs::write(&path, data).unwrap();

        let out = run(RunConfig {
            reads: path,
            sample_name: "sample".to_string(),
            phred_offset: 33,
        })
        .unwrap();
        assert_eq!(out.ctx.file_name, "sample.fq");
        assert_eq!(out.ctx.file_size, data.len() as u64);
        assert_eq!(out.agg.sequences_count, 2);
    }

    #[test]
    fn each_run_returns_its_own_aggregate() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.fq");
        let second = dir.path().join("second.fq");
        fs::write(&first, "@a\nACGT\n+\nIIII\n@b\nAAAA\n+\nIIII\n").unwrap();
        fs::write(&second, "@c\nGG\n+\n!!\n").unwrap();

        let cfg = |reads: PathBuf| RunConfig {
            reads,
            sample_name: "s".to_string(),
            phred_offset: 33,
        };
        let a = run(cfg(first)).unwrap();
        let b = run(cfg(second)).unwrap();
        assert_eq!(a.agg.sequences_count, 2);
        assert_eq!(b.agg.sequences_count, 1);
        assert_eq!(b.agg.quality_scores, vec![0, 0]);
        assert_eq!(a.agg.base_counts.a, 5);
    }

    #[test]
    fn failed_read_leaves_aggregate_empty() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.fastq");
        fs::write(&good, "@a\nACGT\n+\nIIII\n").unwrap();

        let mut agg = Agg::new();
        analyze(&mut agg, &good).unwrap();
        assert_eq!(agg.sequences_count, 1);

        let err = analyze(&mut agg, &dir.path().join("gone.fastq")).unwrap_err();
        assert!(err.downcast_ref::<std::io::Error>().is_some());
        assert_eq!(agg.sequences_count, 0);
        assert!(agg.quality_scores.is_empty());
    }

    #[test]
    fn fmt_dur_switches_units() {
        assert_eq!(fmt_dur(Duration::from_millis(250)), "250ms");
        assert_eq!(fmt_dur(Duration::from_millis(1500)), "1.500s");
    }
}
