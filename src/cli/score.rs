//! Score command - compare a hypothesis label file against a reference label file.
//!
//! Label files hold one label per line, or a JSON array when the file name
//! ends in `.json`.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::{MatchArgs, OutputFormat};
use crate::core::label::{Label, UnknownFactory};
use crate::core::types::{MatchKind, MatchOutcome};
use crate::matching::engine::AssignmentEngine;
use crate::matching::matcher::MatcherKind;
use crate::parsing::labels::parse_labels_file;

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Reference label file (ground truth)
    #[arg(required = true)]
    pub reference: PathBuf,

    /// Hypothesis label file (predictions to evaluate)
    #[arg(required = true)]
    pub hypothesis: PathBuf,

    #[command(flatten)]
    pub matching: MatchArgs,
}

/// Result of one comparison, ready to print
pub struct Report {
    pub reference_source: String,
    pub hypothesis_source: String,
    pub reference_count: usize,
    pub hypothesis_count: usize,
    pub matcher: MatcherKind,
    pub outcome: MatchOutcome<Label>,
}

/// Execute the score command
///
/// # Errors
///
/// Returns an error if inputs cannot be parsed or exceed the label limit.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ScoreArgs, format: OutputFormat) -> anyhow::Result<()> {
    let label_format = args.matching.label_format();
    let mut unknowns = UnknownFactory::new();

    let reference = parse_labels_file(&args.reference, &label_format, &mut unknowns)?;
    let hypothesis = parse_labels_file(&args.hypothesis, &label_format, &mut unknowns)?;

    info!(
        reference = reference.len(),
        hypothesis = hypothesis.len(),
        unknowns = unknowns.issued(),
        matcher = %args.matching.matcher,
        "loaded label files"
    );

    let report = build_report(
        args.reference.display().to_string(),
        args.hypothesis.display().to_string(),
        &reference,
        &hypothesis,
        &args.matching,
    )?;

    print_report(&report, format, args.matching.details)
}

/// Run the engine configured by `matching` and wrap the outcome
///
/// # Errors
///
/// Returns an error if either side exceeds the label limit.
pub fn build_report(
    reference_source: String,
    hypothesis_source: String,
    reference: &[Label],
    hypothesis: &[Label],
    matching: &MatchArgs,
) -> anyhow::Result<Report> {
    let config = matching.matching_config();
    let engine = AssignmentEngine::from_config(&config);
    let outcome = engine.compute(reference, hypothesis)?;

    Ok(Report {
        reference_source,
        hypothesis_source,
        reference_count: reference.len(),
        hypothesis_count: hypothesis.len(),
        matcher: config.matcher,
        outcome,
    })
}

/// Print a report in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn print_report(report: &Report, format: OutputFormat, details: bool) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_text_report(report, details),
        OutputFormat::Json => print_json_report(report, details)?,
        OutputFormat::Tsv => print_tsv_report(report),
    }
    Ok(())
}

fn print_text_report(report: &Report, details: bool) {
    let counts = &report.outcome.counts;

    println!("Label Matching Results");
    println!("{}", "=".repeat(60));

    println!(
        "\nReference: {} ({} labels)",
        report.reference_source, report.reference_count
    );
    println!(
        "Hypothesis: {} ({} labels)",
        report.hypothesis_source, report.hypothesis_count
    );
    println!("Matcher: {}", report.matcher);

    println!("\nCounts:");
    println!("  Correct: {}", counts.correct);
    println!("  Confusion: {}", counts.confusion);
    println!("  Missed detection: {}", counts.missed_detection);
    println!("  False alarm: {}", counts.false_alarm);
    println!("  Total: {}", counts.total);

    if !details {
        return;
    }

    let d = &report.outcome.details;
    println!("\nDetails:");
    for kind in MatchKind::ALL {
        println!("  {kind} ({}):", d.len(kind));
        match kind {
            MatchKind::Correct => {
                for (r, h) in &d.correct {
                    println!("    {} <-> {}", text_label(r), text_label(h));
                }
            }
            MatchKind::Confusion => {
                for (r, h) in &d.confusion {
                    println!("    {} <-> {}", text_label(r), text_label(h));
                }
            }
            MatchKind::MissedDetection => {
                for r in &d.missed_detection {
                    println!("    {}", text_label(r));
                }
            }
            MatchKind::FalseAlarm => {
                for h in &d.false_alarm {
                    println!("    {}", text_label(h));
                }
            }
        }
    }
}

/// Named labels are quoted and unknowns are not, so a named label spelled
/// like a placeholder (`?0`) still reads differently from one.
fn text_label(label: &Label) -> String {
    match label {
        Label::Named(name) => format!("{name:?}"),
        Label::Unknown(id) => format!("?{id}"),
    }
}

fn print_json_report(report: &Report, details: bool) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "reference": {
            "source": report.reference_source,
            "label_count": report.reference_count,
        },
        "hypothesis": {
            "source": report.hypothesis_source,
            "label_count": report.hypothesis_count,
        },
        "matcher": report.matcher,
        "counts": report.outcome.counts,
    });

    // Labels keep their tagged serde shape ({"named": ..} / {"unknown": ..})
    if details {
        output["details"] = serde_json::to_value(&report.outcome.details)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_report(report: &Report) {
    let counts = &report.outcome.counts;
    println!("correct\tconfusion\tmissed_detection\tfalse_alarm\ttotal");
    println!(
        "{}\t{}\t{}\t{}\t{}",
        counts.correct, counts.confusion, counts.missed_detection, counts.false_alarm, counts.total,
    );
}
