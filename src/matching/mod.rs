//! Label matching engine.
//!
//! This module provides the core matching functionality:
//!
//! - [`LabelMatcher`]: Equality predicate between a reference and a hypothesis label
//! - [`MatchMatrix`]: Padded boolean match matrix and its cost form
//! - [`AssignmentEngine`]: Optimal assignment and outcome classification
//!
//! ## Matching Algorithm
//!
//! 1. **Match matrix**: With `N = max(NR, NH)`, build an `N x N` matrix whose
//!    cell `(r, h)` is the matcher's verdict for real pairs and `false` for
//!    padding.
//! 2. **Assignment**: Solve the minimum-cost assignment on `1 - match`
//!    with the Hungarian algorithm, which maximizes the number of matched
//!    pairs.
//! 3. **Classification**: Each assigned pair is a false alarm (padding
//!    row), a missed detection (padding column), correct, or a confusion.
//!
//! ## Example
//!
//! ```rust
//! use label_matcher::{AssignmentEngine, Label};
//!
//! let reference = vec![Label::named("alice"), Label::named("bob"), Label::unknown(0)];
//! let hypothesis = vec![Label::named("bob"), Label::unknown(1)];
//!
//! let engine = AssignmentEngine::unknown_aware();
//! let outcome = engine.compute(&reference, &hypothesis).unwrap();
//!
//! assert_eq!(outcome.counts.correct, 2);
//! assert_eq!(outcome.counts.missed_detection, 1);
//! assert_eq!(outcome.counts.total, 3);
//! ```

pub mod assignment;
pub mod engine;
pub mod matcher;

pub use assignment::MatchMatrix;
pub use engine::{AssignmentEngine, MatchError, MatchingConfig};
pub use matcher::{LabelMatcher, MatcherKind, StrictMatcher, UnknownAwareMatcher};
