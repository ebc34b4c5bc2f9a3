//! Core data types for label scoring.
//!
//! - [`Label`]: An identity token, either a concrete name or an unknown placeholder
//! - [`UnknownFactory`]: Issues distinct unknown placeholders
//! - [`MatchKind`], [`MatchCounts`], [`MatchDetails`], [`MatchOutcome`]: Result types
//!
//! ## Outcome Kinds
//!
//! | Kind             | Reference item | Hypothesis item | Labels  |
//! |------------------|----------------|-----------------|---------|
//! | correct          | yes            | yes             | match   |
//! | confusion        | yes            | yes             | differ  |
//! | missed detection | yes            | no              | -       |
//! | false alarm      | no             | yes             | -       |

pub mod label;
pub mod types;

pub use label::{Label, MaybeUnknown, UnknownFactory};
pub use types::{MatchCounts, MatchDetails, MatchKind, MatchOutcome, Side};
