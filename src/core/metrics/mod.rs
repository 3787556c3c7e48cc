use crate::core::fastq::{self, ReadView};
use crate::core::model::DEFAULT_PHRED_OFFSET;
use serde::Serialize;

mod basic;
mod composition;
mod quality;

pub use basic::BasicStats;
pub use composition::{BaseComposition, BaseCounts};
pub use quality::QualityStats;

/// Running aggregates for one analysis run.
///
/// Everything except the Phred offset is cleared by [`Agg::reset`], which
/// [`Agg::parse_fastq`] calls before it looks at any input, so nothing leaks
/// from one file into the next.
#[derive(Clone, Debug)]
pub struct Agg {
    pub phred_offset: u8,
    pub sequences_count: u64,
    pub total_length: u64,
    pub sequence_lengths: Vec<u64>,
    pub quality_scores: Vec<i32>,
    pub base_counts: BaseCounts,
}

impl Default for Agg {
    fn default() -> Self {
        Self::new()
    }
}

impl Agg {
    pub fn new() -> Self {
        Self::with_phred_offset(DEFAULT_PHRED_OFFSET)
    }

    pub fn with_phred_offset(phred_offset: u8) -> Self {
        Self {
            phred_offset,
            sequences_count: 0,
            total_length: 0,
            sequence_lengths: Vec::new(),
            quality_scores: Vec::new(),
            base_counts: BaseCounts::default(),
        }
    }

    pub fn reset(&mut self) {
        self.sequences_count = 0;
        self.total_length = 0;
        self.sequence_lengths.clear();
        self.quality_scores.clear();
        self.base_counts = BaseCounts::default();
    }

    pub fn parse_fastq<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.reset();
        for read in fastq::records(lines) {
            self.update_read(&read);
        }
    }

    pub fn update_read(&mut self, read: &ReadView<'_>) {
        let len = read.seq.chars().count() as u64;
        self.sequences_count += 1;
        self.total_length += len;
        self.sequence_lengths.push(len);
        self.count_bases(read.seq);
        // Quality length is not checked against `len`.
        self.analyze_quality(read.qual);
    }

    pub fn count_bases(&mut self, seq: &str) {
        for base in seq.chars() {
            self.base_counts.add(base);
        }
    }

    pub fn analyze_quality(&mut self, qual: &str) {
        let offset = self.phred_offset;
        self.quality_scores
            .extend(qual.chars().map(|c| quality::decode(c, offset)));
    }

    pub fn basic(&self) -> Option<BasicStats> {
        basic::compute(
            self.sequences_count,
            self.total_length,
            &self.sequence_lengths,
        )
    }

    pub fn quality(&self) -> Option<QualityStats> {
        quality::compute(&self.quality_scores)
    }

    pub fn composition(&self) -> Option<BaseComposition> {
        composition::compute(&self.base_counts)
    }

    pub fn finalize(&self) -> FinalMetrics {
        FinalMetrics {
            basic: self.basic(),
            quality: self.quality(),
            composition: self.composition(),
        }
    }
}

/// `None` marks a section with no data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FinalMetrics {
    pub basic: Option<BasicStats>,
    pub quality: Option<QualityStats>,
    pub composition: Option<BaseComposition>,
}
