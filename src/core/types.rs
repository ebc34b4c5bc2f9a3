use serde::{Deserialize, Serialize};

/// Outcome of a single reference/hypothesis pair in the assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Reference paired with a hypothesis carrying a matching label
    Correct,
    /// Reference paired with a hypothesis carrying a different label
    Confusion,
    /// Reference item left without a hypothesis
    MissedDetection,
    /// Hypothesis item left without a reference
    FalseAlarm,
}

impl MatchKind {
    pub const ALL: [MatchKind; 4] = [
        Self::Correct,
        Self::Confusion,
        Self::MissedDetection,
        Self::FalseAlarm,
    ];
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::Confusion => write!(f, "confusion"),
            Self::MissedDetection => write!(f, "missed detection"),
            Self::FalseAlarm => write!(f, "false alarm"),
        }
    }
}

/// Per-kind outcome counts.
///
/// `total` is the number of reference items, not the number of assigned pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCounts {
    pub correct: usize,
    pub confusion: usize,
    pub missed_detection: usize,
    pub false_alarm: usize,
    pub total: usize,
}

impl MatchCounts {
    #[must_use]
    pub fn get(&self, kind: MatchKind) -> usize {
        match kind {
            MatchKind::Correct => self.correct,
            MatchKind::Confusion => self.confusion,
            MatchKind::MissedDetection => self.missed_detection,
            MatchKind::FalseAlarm => self.false_alarm,
        }
    }

    pub fn record(&mut self, kind: MatchKind) {
        match kind {
            MatchKind::Correct => self.correct += 1,
            MatchKind::Confusion => self.confusion += 1,
            MatchKind::MissedDetection => self.missed_detection += 1,
            MatchKind::FalseAlarm => self.false_alarm += 1,
        }
    }

    /// Sum of the four outcome kinds, equal to the padded assignment size
    #[must_use]
    pub fn assigned(&self) -> usize {
        self.correct + self.confusion + self.missed_detection + self.false_alarm
    }
}

/// The concrete items realizing each outcome, in assignment order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails<L> {
    /// (reference, hypothesis) pairs whose labels match
    pub correct: Vec<(L, L)>,
    /// (reference, hypothesis) pairs whose labels differ
    pub confusion: Vec<(L, L)>,
    /// Unpaired reference labels
    pub missed_detection: Vec<L>,
    /// Unpaired hypothesis labels
    pub false_alarm: Vec<L>,
}

impl<L> Default for MatchDetails<L> {
    fn default() -> Self {
        Self {
            correct: Vec::new(),
            confusion: Vec::new(),
            missed_detection: Vec::new(),
            false_alarm: Vec::new(),
        }
    }
}

impl<L> MatchDetails<L> {
    #[must_use]
    pub fn len(&self, kind: MatchKind) -> usize {
        match kind {
            MatchKind::Correct => self.correct.len(),
            MatchKind::Confusion => self.confusion.len(),
            MatchKind::MissedDetection => self.missed_detection.len(),
            MatchKind::FalseAlarm => self.false_alarm.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        MatchKind::ALL.iter().all(|&kind| self.len(kind) == 0)
    }
}

/// Counts and details produced by one comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome<L> {
    pub counts: MatchCounts,
    pub details: MatchDetails<L>,
}

impl<L> Default for MatchOutcome<L> {
    fn default() -> Self {
        Self {
            counts: MatchCounts::default(),
            details: MatchDetails::default(),
        }
    }
}

/// Which input sequence a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Reference,
    Hypothesis,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reference => write!(f, "reference"),
            Self::Hypothesis => write!(f, "hypothesis"),
        }
    }
}
