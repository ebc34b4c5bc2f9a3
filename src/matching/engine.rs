use thiserror::Error;
use tracing::debug;

use crate::core::label::Label;
use crate::core::types::{MatchCounts, MatchDetails, MatchKind, MatchOutcome, Side};
use crate::matching::assignment::{solve, MatchMatrix};
use crate::matching::matcher::{LabelMatcher, MatcherKind, StrictMatcher, UnknownAwareMatcher};
use crate::utils::validation::MAX_LABELS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Too many {side} labels: {count} exceeds maximum allowed ({max})")]
    TooManyLabels { side: Side, count: usize, max: usize },
}

/// Configuration for the assignment engine
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MatchingConfig {
    /// Label equality predicate
    pub matcher: MatcherKind,
    /// Largest sequence accepted on either side
    pub max_labels: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherKind::default(),
            max_labels: MAX_LABELS,
        }
    }
}

/// Scores a hypothesis label sequence against a reference sequence under
/// the optimal one-to-one assignment.
///
/// The engine holds only its matcher and limits. Every call builds its own
/// matrix and assignment, so one engine can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct AssignmentEngine<M> {
    matcher: M,
    max_labels: usize,
}

impl AssignmentEngine<StrictMatcher> {
    #[must_use]
    pub fn strict() -> Self {
        Self::new(StrictMatcher)
    }
}

impl AssignmentEngine<UnknownAwareMatcher> {
    #[must_use]
    pub fn unknown_aware() -> Self {
        Self::new(UnknownAwareMatcher)
    }
}

impl AssignmentEngine<MatcherKind> {
    /// Create an engine for [`Label`]s from configuration
    #[must_use]
    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new(config.matcher).with_max_labels(config.max_labels)
    }
}

impl<M> AssignmentEngine<M> {
    pub fn new(matcher: M) -> Self {
        Self {
            matcher,
            max_labels: MAX_LABELS,
        }
    }

    #[must_use]
    pub fn with_max_labels(mut self, max_labels: usize) -> Self {
        self.max_labels = max_labels;
        self
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Classify every reference and hypothesis item.
    ///
    /// Counts always satisfy `correct + confusion + missed_detection +
    /// false_alarm == max(NR, NH)` and `total == NR`. The order of detail
    /// entries follows the assignment and is not otherwise meaningful.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::TooManyLabels` if either sequence is longer than
    /// the configured limit.
    pub fn compute<L>(
        &self,
        reference: &[L],
        hypothesis: &[L],
    ) -> Result<MatchOutcome<L>, MatchError>
    where
        L: Clone,
        M: LabelMatcher<L>,
    {
        self.check_len(Side::Reference, reference.len())?;
        self.check_len(Side::Hypothesis, hypothesis.len())?;

        let n_reference = reference.len();
        let n_hypothesis = hypothesis.len();

        if n_reference == 0 && n_hypothesis == 0 {
            return Ok(MatchOutcome::default());
        }

        let matrix = MatchMatrix::build(reference, hypothesis, &self.matcher);
        let mapping = solve(&matrix);

        let mut counts = MatchCounts::default();
        let mut details = MatchDetails::default();

        for (r, h) in mapping {
            let kind = if r >= n_reference {
                details.false_alarm.push(hypothesis[h].clone());
                MatchKind::FalseAlarm
            } else if h >= n_hypothesis {
                details.missed_detection.push(reference[r].clone());
                MatchKind::MissedDetection
            } else if matrix.is_match(r, h) {
                details
                    .correct
                    .push((reference[r].clone(), hypothesis[h].clone()));
                MatchKind::Correct
            } else {
                details
                    .confusion
                    .push((reference[r].clone(), hypothesis[h].clone()));
                MatchKind::Confusion
            };
            counts.record(kind);
        }

        counts.total = n_reference;

        debug!(
            n = matrix.size(),
            n_reference,
            n_hypothesis,
            correct = counts.correct,
            confusion = counts.confusion,
            missed_detection = counts.missed_detection,
            false_alarm = counts.false_alarm,
            "computed label assignment"
        );

        Ok(MatchOutcome { counts, details })
    }

    /// Like [`compute`](Self::compute), but accepts any iterables.
    ///
    /// Each side is materialized up to one element past the limit, so an
    /// endless iterator is rejected instead of exhausting memory.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::TooManyLabels` if either side yields more labels
    /// than the configured limit.
    pub fn compute_iter<L, R, H>(
        &self,
        reference: R,
        hypothesis: H,
    ) -> Result<MatchOutcome<L>, MatchError>
    where
        L: Clone,
        M: LabelMatcher<L>,
        R: IntoIterator<Item = L>,
        H: IntoIterator<Item = L>,
    {
        let reference = self.materialize(Side::Reference, reference)?;
        let hypothesis = self.materialize(Side::Hypothesis, hypothesis)?;
        self.compute(&reference, &hypothesis)
    }

    fn materialize<L>(
        &self,
        side: Side,
        labels: impl IntoIterator<Item = L>,
    ) -> Result<Vec<L>, MatchError> {
        let labels: Vec<L> = labels
            .into_iter()
            .take(self.max_labels.saturating_add(1))
            .collect();
        self.check_len(side, labels.len())?;
        Ok(labels)
    }

    fn check_len(&self, side: Side, count: usize) -> Result<(), MatchError> {
        if count > self.max_labels {
            return Err(MatchError::TooManyLabels {
                side,
                count,
                max: self.max_labels,
            });
        }
        Ok(())
    }
}

impl Default for AssignmentEngine<StrictMatcher> {
    fn default() -> Self {
        Self::strict()
    }
}

/// Score `hypothesis` against `reference` with strict label equality
///
/// # Errors
///
/// Returns `MatchError::TooManyLabels` if either sequence exceeds
/// [`MAX_LABELS`].
pub fn compute<L>(reference: &[L], hypothesis: &[L]) -> Result<MatchOutcome<L>, MatchError>
where
    L: Clone + PartialEq,
{
    AssignmentEngine::strict().compute(reference, hypothesis)
}

/// Score two [`Label`] sequences with the matcher named in `config`
///
/// # Errors
///
/// Returns `MatchError::TooManyLabels` if either sequence exceeds
/// `config.max_labels`.
pub fn compute_labels(
    reference: &[Label],
    hypothesis: &[Label],
    config: &MatchingConfig,
) -> Result<MatchOutcome<Label>, MatchError> {
    AssignmentEngine::from_config(config).compute(reference, hypothesis)
}
