use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QualityStats {
    pub mean: f64,
    pub min: i32,
    pub max: i32,
    pub count: u64,
}

/// Phred score of one quality character. Out-of-range characters are not
/// clamped, so anything below the offset comes out negative.
pub fn decode(c: char, phred_offset: u8) -> i32 {
    c as i32 - phred_offset as i32
}

pub fn compute(scores: &[i32]) -> Option<QualityStats> {
    let min = scores.iter().copied().min()?;
    let max = scores.iter().copied().max()?;
    let sum: i64 = scores.iter().map(|&q| q as i64).sum();
    Some(QualityStats {
        mean: sum as f64 / scores.len() as f64,
        min,
        max,
        count: scores.len() as u64,
    })
}
