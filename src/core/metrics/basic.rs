use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BasicStats {
    pub total_sequences: u64,
    pub mean_len: f64,
    pub min_len: u64,
    pub max_len: u64,
    pub total_length: u64,
}

pub fn compute(sequences_count: u64, total_length: u64, lengths: &[u64]) -> Option<BasicStats> {
    if sequences_count == 0 {
        return None;
    }
    let min_len = lengths.iter().copied().min()?;
    let max_len = lengths.iter().copied().max()?;
    Some(BasicStats {
        total_sequences: sequences_count,
        mean_len: total_length as f64 / sequences_count as f64,
        min_len,
        max_len,
        total_length,
    })
}
