//! End-to-end segmentation and statistics tests through the public library API.

use std::io::Cursor;

use fasta_stats::segment::{segment_lines, segment_reader};
use fasta_stats::stats::bins::SizeHistogram;
use fasta_stats::stats::summary::{pooled_contigs, N50};
use fasta_stats::{AssemblyReport, Contig, ReportConfig, Scaffold, SegmentConfig};
use proptest::prelude::*;

fn config(gap_threshold: u64, break_length: Option<u64>) -> SegmentConfig {
    SegmentConfig {
        gap_threshold,
        break_length,
    }
}

fn contig_sizes(scaffold: &Scaffold) -> Vec<u64> {
    scaffold.contigs.iter().map(Contig::size).collect()
}

/// Split `sequence` into lines of at most `width` bases under one header.
fn wrapped(name: &str, sequence: &str, width: usize) -> String {
    let mut text = format!(">{name}\n");
    for chunk in sequence.as_bytes().chunks(width) {
        text.push_str(std::str::from_utf8(chunk).unwrap());
        text.push('\n');
    }
    text
}

#[test]
fn test_gap_between_two_contigs() {
    let scaffolds = segment_lines([">s1", "ACGTNNNNNNNNNNNNACGT"], SegmentConfig::default());

    assert_eq!(scaffolds.len(), 1);
    let s = &scaffolds[0];
    assert_eq!(s.name, "s1");
    assert_eq!(s.total_size, 20);
    assert_eq!(contig_sizes(s), vec![4, 4]);
    assert_eq!(s.gaps, vec![12]);
    assert_eq!(s.contig_size, 8);
    assert_eq!(s.gap_size, 12);
    assert_eq!(s.captured_gap_size, 12);
}

#[test]
fn test_break_length_splits_scaffold_and_report() {
    // 5 A, 20 N (break), 3 C, 10 N (gap), 2 G
    let line = format!("AAAAA{}CCC{}GG", "N".repeat(20), "N".repeat(10));
    let scaffolds = segment_lines([">s1", line.as_str()], config(9, Some(20)));

    assert_eq!(scaffolds.len(), 2);
    assert_eq!(scaffolds[0].total_size, 15);
    assert_eq!(contig_sizes(&scaffolds[0]), vec![3, 2]);
    assert_eq!(scaffolds[0].gaps, vec![10]);
    assert_eq!(scaffolds[1].total_size, 5);
    assert_eq!(contig_sizes(&scaffolds[1]), vec![5]);
    assert!(scaffolds.iter().all(|s| s.name == "s1"));

    let report = AssemblyReport::build(&scaffolds, &ReportConfig::default());
    let summary = &report.summary;
    assert_eq!(summary.scaffold_count, 2);
    assert_eq!(summary.contig_count, 3);
    assert_eq!(summary.scaffold_sequence, 20);
    assert_eq!(summary.contig_sequence, 10);
    assert_eq!(summary.gap_sequence, 10);
    assert_eq!(summary.scaffold_n50, N50 { count: 1, length: 15 });
    assert_eq!(summary.contig_n50, N50 { count: 1, length: 5 });
    assert_eq!(summary.big_scaffold_count, 0);
}

#[test]
fn test_break_length_run_across_lines() {
    let first = format!("AAAAA{}", "N".repeat(10));
    let second = format!("{}CCC", "N".repeat(10));
    let scaffolds = segment_lines([">s1", first.as_str(), second.as_str()], config(9, Some(20)));

    let totals: Vec<u64> = scaffolds.iter().map(|s| s.total_size).collect();
    assert_eq!(totals, vec![5, 3]);
}

#[test]
fn test_segment_reader_multiple_records() {
    let text = ">chr2 second\nACGT\nACGT\n>chr1 first\nACGTACGTNNNNNNNNNN\nACGTACGTAC\n>empty\n";
    let scaffolds = segment_reader(Cursor::new(text), SegmentConfig::default()).unwrap();

    // The empty record is dropped; chr1 comes first by size
    assert_eq!(scaffolds.len(), 2);
    assert_eq!(scaffolds[0].name, "chr1");
    assert_eq!(scaffolds[0].total_size, 28);
    assert_eq!(contig_sizes(&scaffolds[0]), vec![8, 10]);
    assert_eq!(scaffolds[1].name, "chr2");
    assert_eq!(scaffolds[1].total_size, 8);
}

#[test]
fn test_empty_input_report() {
    let scaffolds = segment_reader(Cursor::new(""), SegmentConfig::default()).unwrap();
    assert!(scaffolds.is_empty());

    let report = AssemblyReport::build(&scaffolds, &ReportConfig::default());
    assert_eq!(report.summary.scaffold_count, 0);
    assert_eq!(report.summary.scaffold_n50, N50::default());
    assert_eq!(report.size_bins.len(), 1);
    assert_eq!(report.size_bins[0].floor, 0);
    assert!(report.size_bins[0].coverage.abs() < f64::EPSILON);
}

fn sequence_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            3 => Just('A'),
            2 => Just('C'),
            4 => Just('N'),
            1 => Just('n'),
        ],
        0..200,
    )
    .prop_map(|bases| bases.into_iter().collect())
}

fn config_strategy() -> impl Strategy<Value = SegmentConfig> {
    (0u64..12, proptest::option::of(1u64..8)).prop_map(|(gap_threshold, break_length)| {
        SegmentConfig {
            gap_threshold,
            break_length,
        }
    })
}

proptest! {
    #[test]
    fn line_width_does_not_change_result(
        sequence in sequence_strategy(),
        width in 1usize..30,
        config in config_strategy(),
    ) {
        let single = segment_reader(Cursor::new(wrapped("s", &sequence, sequence.len().max(1))), config).unwrap();
        let wrapped = segment_reader(Cursor::new(wrapped("s", &sequence, width)), config).unwrap();
        prop_assert_eq!(single, wrapped);
    }

    #[test]
    fn scaffold_structure_is_consistent(
        sequences in proptest::collection::vec(sequence_strategy(), 0..5),
        config in config_strategy(),
    ) {
        let text: String = sequences
            .iter()
            .enumerate()
            .map(|(i, seq)| wrapped(&format!("s{i}"), seq, 60))
            .collect();
        let scaffolds = segment_reader(Cursor::new(text), config).unwrap();

        for s in &scaffolds {
            prop_assert_eq!(s.gaps.len() + 1, s.contigs.len());
            prop_assert_eq!(s.contig_size, s.contigs.iter().map(Contig::size).sum::<u64>());
            prop_assert_eq!(s.captured_gap_size, s.gaps.iter().sum::<u64>());
            let contig_total: u64 = s.contigs.iter().map(|c| c.total_size).sum();
            prop_assert!(contig_total <= s.total_size);
            prop_assert!(s.contigs.iter().all(|c| c.ambiguous_count <= c.total_size));
            prop_assert!(s.gaps.iter().all(|&g| g >= config.gap_threshold));
        }

        prop_assert!(scaffolds.windows(2).all(|w| w[0].total_size >= w[1].total_size));
        let contigs = pooled_contigs(&scaffolds);
        prop_assert!(contigs.windows(2).all(|w| w[0].size() >= w[1].size()));

        let histogram = SizeHistogram::compute(&scaffolds);
        let bins = histogram.bins();
        prop_assert_eq!(bins[0].scaffold_count, scaffolds.len() as u64);
        let monotonic = bins.windows(2).all(|w| {
            w[0].scaffold_count >= w[1].scaffold_count && w[0].scaffold_size >= w[1].scaffold_size
        });
        prop_assert!(monotonic);
    }
}
