use serde::{Deserialize, Serialize};

/// An identity token attached to a reference or hypothesis item.
///
/// `Unknown` is a placeholder for an unresolved identity. Each placeholder
/// carries its own instance id, so two placeholders are *not* equal under
/// `PartialEq`; only [`UnknownAwareMatcher`](crate::matching::matcher::UnknownAwareMatcher)
/// treats them as the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// A concrete identity
    Named(String),
    /// Unresolved identity placeholder
    Unknown(u64),
}

impl Label {
    pub fn named(s: impl Into<String>) -> Self {
        Self::Named(s.into())
    }

    #[must_use]
    pub fn unknown(id: u64) -> Self {
        Self::Unknown(id)
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::Unknown(id) => write!(f, "?{id}"),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::Named(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Self::Named(s)
    }
}

/// Labels that may be the unknown placeholder.
pub trait MaybeUnknown {
    fn is_unknown(&self) -> bool;
}

impl MaybeUnknown for Label {
    fn is_unknown(&self) -> bool {
        Label::is_unknown(self)
    }
}

impl<T: MaybeUnknown + ?Sized> MaybeUnknown for &T {
    fn is_unknown(&self) -> bool {
        (**self).is_unknown()
    }
}

/// Hands out distinct `Unknown` placeholders.
///
/// Share one factory across the reference and hypothesis inputs of a
/// comparison so that no two placeholders collide.
#[derive(Debug, Default)]
pub struct UnknownFactory {
    next_id: u64,
}

impl UnknownFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_label(&mut self) -> Label {
        let label = Label::Unknown(self.next_id);
        self.next_id += 1;
        label
    }

    /// Number of placeholders created so far
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next_id
    }
}
