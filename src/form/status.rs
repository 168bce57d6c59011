use serde::Serialize;

/// Where a form submission currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// Color of the inline status banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Success,
    Error,
}

/// The single value the form renders its banner from.
///
/// `display_text` is empty exactly when `phase` is `Idle`. Fields are private so
/// the only way to build one is through the phase constructors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionStatus {
    phase: Phase,
    display_text: String,
}

impl SubmissionStatus {
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            display_text: String::new(),
        }
    }

    pub fn sending(text: impl Into<String>) -> Self {
        Self::with_text(Phase::Sending, text.into())
    }

    pub fn succeeded(text: impl Into<String>) -> Self {
        Self::with_text(Phase::Succeeded, text.into())
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self::with_text(Phase::Failed, text.into())
    }

    // An empty banner text would collapse into Idle, so it is replaced with a
    // visible placeholder instead.
    fn with_text(phase: Phase, text: String) -> Self {
        let display_text = if text.is_empty() {
            "…".to_string()
        } else {
            text
        };
        Self {
            phase,
            display_text,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn is_sending(&self) -> bool {
        self.phase == Phase::Sending
    }

    /// Banner tone, or `None` when there is nothing to show.
    pub fn tone(&self) -> Option<Tone> {
        match self.phase {
            Phase::Idle => None,
            Phase::Sending => Some(Tone::Info),
            Phase::Succeeded => Some(Tone::Success),
            Phase::Failed => Some(Tone::Error),
        }
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::idle()
    }
}
