use clap::Args;

use crate::cli::score::{build_report, print_report};
use crate::cli::{MatchArgs, OutputFormat};
use crate::core::label::UnknownFactory;
use crate::parsing::labels::parse_labels_inline;

#[derive(Args)]
pub struct CompareArgs {
    /// Reference labels, comma-separated (e.g. "alice,bob,?")
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub reference: String,

    /// Hypothesis labels, comma-separated
    #[arg(short = 'H', long, default_value = "", allow_hyphen_values = true)]
    pub hypothesis: String,

    #[command(flatten)]
    pub matching: MatchArgs,
}

/// Execute the compare command
///
/// # Errors
///
/// Returns an error if a label list is invalid or exceeds the label limit.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: CompareArgs, format: OutputFormat) -> anyhow::Result<()> {
    let label_format = args.matching.label_format();
    let mut unknowns = UnknownFactory::new();

    let reference = parse_labels_inline(&args.reference, &label_format, &mut unknowns)?;
    let hypothesis = parse_labels_inline(&args.hypothesis, &label_format, &mut unknowns)?;

    let report = build_report(
        "<inline>".to_string(),
        "<inline>".to_string(),
        &reference,
        &hypothesis,
        &args.matching,
    )?;

    print_report(&report, format, args.matching.details)
}
