use crate::core::engine::RunOutput;
use crate::core::metrics::{Agg, BaseComposition, BasicStats, QualityStats};
use crate::core::model::FinalizeContext;

pub const NO_BASIC_DATA: &str = "no data to analyze";
pub const NO_QUALITY_DATA: &str = "no quality data";
pub const NO_COMPOSITION_DATA: &str = "no base composition data";

pub fn basic_stats(agg: &Agg) -> String {
    agg.basic()
        .as_ref()
        .map_or_else(|| NO_BASIC_DATA.to_string(), render_basic)
}

pub fn quality_stats(agg: &Agg) -> String {
    agg.quality()
        .as_ref()
        .map_or_else(|| NO_QUALITY_DATA.to_string(), render_quality)
}

pub fn base_composition(agg: &Agg) -> String {
    agg.composition()
        .as_ref()
        .map_or_else(|| NO_COMPOSITION_DATA.to_string(), render_composition)
}

fn render_basic(b: &BasicStats) -> String {
    format!(
        "total sequences: {}\n\
         mean sequence length: {:.1} bp\n\
         minimum length: {} bp\n\
         maximum length: {} bp\n\
         total length of all sequences: {} bp\n",
        b.total_sequences, b.mean_len, b.min_len, b.max_len, b.total_length
    )
}

fn render_quality(q: &QualityStats) -> String {
    format!(
        "mean quality: {:.2}\n\
         minimum quality: {}\n\
         maximum quality: {}\n\
         total quality scores: {}",
        q.mean, q.min, q.max, q.count
    )
}

fn render_composition(c: &BaseComposition) -> String {
    c.bases.iter().fold(String::from("base composition:\n"), |mut s, row| {
        s.push_str(&format!("  {}: {} ({:.1}%)\n", row.base, row.count, row.percent));
        s
    })
}

pub fn file_info(ctx: &FinalizeContext) -> String {
    format!(
        "\n\nfile info:\nfile size: {:.2} MB\nfile name: {}",
        ctx.file_size_mb(),
        ctx.file_name
    )
}

/// All three reports under titled headings, file info after the basic block.
pub fn summary(output: &RunOutput) -> String {
    format!(
        "== basic statistics ==\n{}{}\n\n\
         == sequence quality ==\n{}\n\n\
         == base composition ==\n{}",
        basic_stats(&output.agg),
        file_info(&output.ctx),
        quality_stats(&output.agg),
        base_composition(&output.agg)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg_from(text: &str) -> Agg {
        let lines: Vec<&str> = text.split_inclusive('\n').collect();
        let mut agg = Agg::new();
        agg.parse_fastq(&lines);
        agg
    }

    fn scenario() -> Agg {
        agg_from("@r1\nACGT\n+\n!!!!\n@r2\nATAT\n+\nIIII\n")
    }

    #[test]
    fn basic_report_layout() {
        assert_eq!(
            basic_stats(&scenario()),
            "total sequences: 2\n\
             mean sequence length: 4.0 bp\n\
             minimum length: 4 bp\n\
             maximum length: 4 bp\n\
             total length of all sequences: 8 bp\n"
        );
    }

    #[test]
    fn quality_report_layout() {
        assert_eq!(
            quality_stats(&scenario()),
            "mean quality: 20.00\n\
             minimum quality: 0\n\
             maximum quality: 40\n\
             total quality scores: 8"
        );
    }

    #[test]
    fn composition_report_layout() {
        assert_eq!(
            base_composition(&scenario()),
            "base composition:\n  A: 4 (33.3%)\n  T: 4 (33.3%)\n  G: 2 (16.7%)\n  C: 2 (16.7%)\n"
        );
    }

    #[test]
    fn mixed_lengths_report_mean_min_max() {
        let agg = agg_from("@a\nAC\n+\nII\n@b\nACGTA\n+\nIIIII\n@c\nACGTACGT\n+\nIIIIIIII\n");
        let report = basic_stats(&agg);
        assert!(report.contains("mean sequence length: 5.0 bp\n"));
        assert!(report.contains("minimum length: 2 bp\n"));
        assert!(report.contains("maximum length: 8 bp\n"));
        assert!(report.contains("total length of all sequences: 15 bp\n"));
    }

    #[test]
    fn empty_input_reports_no_data_everywhere() {
        let agg = agg_from("");
        assert_eq!(basic_stats(&agg), NO_BASIC_DATA);
        assert_eq!(quality_stats(&agg), NO_QUALITY_DATA);
        assert_eq!(base_composition(&agg), NO_COMPOSITION_DATA);
    }

    #[test]
    fn partial_record_only_is_no_data() {
        let agg = agg_from("@a\nACGT\n+\n");
        assert_eq!(basic_stats(&agg), NO_BASIC_DATA);
    }

    #[test]
    fn reports_are_idempotent() {
        let agg = scenario();
        assert_eq!(basic_stats(&agg), basic_stats(&agg));
        assert_eq!(quality_stats(&agg), quality_stats(&agg));
        assert_eq!(base_composition(&agg), base_composition(&agg));
        assert_eq!(agg.sequences_count, 2);
    }

    #[test]
    fn file_info_in_megabytes() {
        let ctx = FinalizeContext {
            file_name: "reads.fq.gz".to_string(),
            file_size: 3 * 1024 * 1024 / 2,
            sample_name: "reads".to_string(),
        };
        assert_eq!(
            file_info(&ctx),
            "\n\nfile info:\nfile size: 1.50 MB\nfile name: reads.fq.gz"
        );
    }

    #[test]
    fn summary_has_all_sections_in_order() {
        let output = RunOutput {
            agg: scenario(),
            ctx: FinalizeContext {
                file_name: "s.fq".to_string(),
                file_size: 0,
                sample_name: "s".to_string(),
            },
        };
        let s = summary(&output);
        let basic = s.find("== basic statistics ==").unwrap();
        let info = s.find("file name: s.fq").unwrap();
        let quality = s.find("== sequence quality ==").unwrap();
        let comp = s.find("== base composition ==").unwrap();
        assert!(basic < info && info < quality && quality < comp);
        assert!(s.ends_with("  C: 2 (16.7%)\n"));
    }

    #[test]
    fn empty_summary_layout_is_exact() {
        let output = RunOutput {
            agg: agg_from(""),
            ctx: FinalizeContext {
                file_name: "e.fq".to_string(),
                file_size: 0,
                sample_name: "e".to_string(),
            },
        };
        assert_eq!(
            summary(&output),
            "== basic statistics ==\n\
             no data to analyze\n\nfile info:\nfile size: 0.00 MB\nfile name: e.fq\n\n\
             == sequence quality ==\n\
             no quality data\n\n\
             == base composition ==\n\
             no base composition data"
        );
    }
}
