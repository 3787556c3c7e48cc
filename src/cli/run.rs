use crate::cli::args::{Cli, Commands, FormatArg, PhredOffsetArg, RunArgs};
use crate::core::engine::{self, RunConfig, fmt_dur};
use crate::report;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

pub fn entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Run(args) => run(args),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env = env_logger::Env::default().default_filter_or(default);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn run(args: RunArgs) -> Result<()> {
    let t0 = Instant::now();

    stage("preflight", || {
        if args.reads.as_os_str() == "-" {
            bail!("stdin is not supported; provide a FASTQ file path");
        }
        if !args.reads.is_file() {
            bail!("input file not found: {}", args.reads.display());
        }
        Ok(())
    })?;

    let sample_name = match args.sample_name {
        Some(s) => s,
        None => args
            .reads
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string())
            .context("failed to determine sample name from input file")?,
    };

    let phred_offset = match args.phred_offset {
        PhredOffsetArg::P33 => 33,
        PhredOffsetArg::P64 => 64,
    };

    let config = RunConfig {
        reads: args.reads.clone(),
        sample_name,
        phred_offset,
    };

    let t_engine = Instant::now();
    let output = engine::run(config)?;
    stage_done("engine", t_engine);

    match args.out {
        None => {
            let t_print = Instant::now();
            let rendered = match args.format {
                FormatArg::Text => report::text::summary(&output),
                FormatArg::Json => report::json::to_string(&output)?,
            };
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", rendered.trim_end())?;
            stdout.flush()?;
            stage_done("print", t_print);
        }
        Some(out) => {
            let root = report::dir_name(&output.ctx.sample_name);
            let out_dir = out.join(&root);
            fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create output dir {}", out_dir.display()))?;

            let summary_path = out_dir.join("summary.txt");
            let json_path = out_dir.join("stats.json");

            let t_summary = Instant::now();
            report::summary_txt::write(&summary_path, &output)
                .with_context(|| format!("failed to write {}", summary_path.display()))?;
            stage_done("summary", t_summary);

            let t_json = Instant::now();
            report::json::write(&json_path, &output)
                .with_context(|| format!("failed to write {}", json_path.display()))?;
            stage_done("json", t_json);

            if !args.no_zip {
                let t_zip = Instant::now();
                let zip_path = out.join(format!("{root}.zip"));
                report::zip::write_zip(&zip_path, &output, &root)
                    .with_context(|| "failed to create zip output")?;
                stage_done("zip", t_zip);
            }
            log::info!("output_dir={}", out_dir.display());
        }
    }

    log::debug!("total={}", fmt_dur(t0.elapsed()));
    Ok(())
}

fn stage<F>(name: &str, f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    let t = Instant::now();
    let res = f();
    stage_done(name, t);
    res
}

fn stage_done(name: &str, t: Instant) {
    log::debug!("stage={} time={}", name, fmt_dur(t.elapsed()));
}
