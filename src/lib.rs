//! # label-matcher
//!
//! A library for scoring hypothesis labels against reference labels.
//!
//! When evaluating a labeling or detection system, the predicted labels and
//! the ground truth rarely come with a given correspondence, and the two sets
//! may differ in size. `label-matcher` finds the one-to-one pairing that
//! maximizes the number of matching labels, then classifies every item:
//!
//! - **Correct**: a reference paired with a hypothesis carrying the same label
//! - **Confusion**: a reference paired with a hypothesis carrying another label
//! - **Missed detection**: a reference left without a hypothesis
//! - **False alarm**: a hypothesis left without a reference
//!
//! ## Example
//!
//! ```rust
//! use label_matcher::{compute, Label};
//!
//! let reference = vec![Label::named("A"), Label::named("B")];
//! let hypothesis = vec![Label::named("B"), Label::named("C"), Label::named("A")];
//!
//! let outcome = compute(&reference, &hypothesis).unwrap();
//!
//! assert_eq!(outcome.counts.correct, 2);
//! assert_eq!(outcome.counts.false_alarm, 1);
//! assert_eq!(outcome.counts.total, 2);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Labels and outcome types
//! - [`matching`]: Matchers, match matrix and assignment engine
//! - [`parsing`]: Readers for label files
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::label::{Label, MaybeUnknown, UnknownFactory};
pub use crate::core::types::*;
pub use matching::engine::{compute, compute_labels, AssignmentEngine, MatchError, MatchingConfig};
pub use matching::matcher::{LabelMatcher, MatcherKind, StrictMatcher, UnknownAwareMatcher};
