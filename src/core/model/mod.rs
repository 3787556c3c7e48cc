use serde::Serialize;

pub const DEFAULT_PHRED_OFFSET: u8 = 33;

/// Report order for base composition.
pub const CANONICAL_BASES: [char; 4] = ['A', 'T', 'G', 'C'];

/// Facts about the input file itself, shown next to the statistics.
#[derive(Clone, Debug, Serialize)]
pub struct FinalizeContext {
    #[serde(rename = "name")]
    pub file_name: String,
    #[serde(rename = "size_bytes")]
    pub file_size: u64,
    #[serde(skip)]
    pub sample_name: String,
}

impl FinalizeContext {
    pub fn file_size_mb(&self) -> f64 {
        self.file_size as f64 / 1024.0 / 1024.0
    }
}
