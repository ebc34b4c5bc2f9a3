use serde::{Deserialize, Serialize};

use crate::core::label::{Label, MaybeUnknown};

/// Decides whether a reference label and a hypothesis label denote the
/// same identity.
///
/// Implementations must be total and free of side effects: the engine
/// calls `matches` once for every (reference, hypothesis) pair.
pub trait LabelMatcher<L: ?Sized> {
    fn matches(&self, reference: &L, hypothesis: &L) -> bool;
}

/// Plain value equality
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictMatcher;

impl<L: PartialEq + ?Sized> LabelMatcher<L> for StrictMatcher {
    fn matches(&self, reference: &L, hypothesis: &L) -> bool {
        reference == hypothesis
    }
}

/// Value equality, except that any two unknown placeholders match each
/// other regardless of their instance ids.
///
/// An unknown placeholder never matches a concrete label.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownAwareMatcher;

impl<L: PartialEq + MaybeUnknown + ?Sized> LabelMatcher<L> for UnknownAwareMatcher {
    fn matches(&self, reference: &L, hypothesis: &L) -> bool {
        if reference.is_unknown() && hypothesis.is_unknown() {
            return true;
        }
        reference == hypothesis
    }
}

impl<L: ?Sized, F> LabelMatcher<L> for F
where
    F: Fn(&L, &L) -> bool,
{
    fn matches(&self, reference: &L, hypothesis: &L) -> bool {
        self(reference, hypothesis)
    }
}

/// Selects a built-in matcher from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MatcherKind {
    /// Labels match only when equal
    #[default]
    Strict,
    /// Unknown placeholders also match each other
    UnknownAware,
}

impl LabelMatcher<Label> for MatcherKind {
    fn matches(&self, reference: &Label, hypothesis: &Label) -> bool {
        match self {
            Self::Strict => StrictMatcher.matches(reference, hypothesis),
            Self::UnknownAware => UnknownAwareMatcher.matches(reference, hypothesis),
        }
    }
}

impl std::fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::UnknownAware => write!(f, "unknown-aware"),
        }
    }
}
