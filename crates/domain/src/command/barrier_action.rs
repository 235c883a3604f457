//! Barrier action — what to do with a gate, window, airlock, …

use serde::{Deserialize, Serialize};

/// Operation performed on a barrier. Each action doubles as the verb
/// that starts a barrier command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarrierAction {
    Open,
    Close,
    Lock,
    Unlock,
}

impl BarrierAction {
    /// Resolve a command verb, ignoring ASCII case.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        [Self::Open, Self::Close, Self::Lock, Self::Unlock]
            .into_iter()
            .find(|action| word.eq_ignore_ascii_case(action.keyword()))
    }

    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
        }
    }

    /// Present participle used in execution descriptions ("Opening").
    #[must_use]
    pub fn progressive(self) -> &'static str {
        match self {
            Self::Open => "Opening",
            Self::Close => "Closing",
            Self::Lock => "Locking",
            Self::Unlock => "Unlocking",
        }
    }

    /// The action that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Open => Self::Close,
            Self::Close => Self::Open,
            Self::Lock => Self::Unlock,
            Self::Unlock => Self::Lock,
        }
    }
}

impl std::fmt::Display for BarrierAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
