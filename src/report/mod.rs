pub mod json;
pub mod summary_txt;
pub mod text;
pub mod zip;

/// Per-sample directory (and archive stem) under `--out`.
pub fn dir_name(sample_name: &str) -> String {
    format!("{}_fqstats", sample_name)
}
