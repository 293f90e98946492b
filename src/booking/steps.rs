//! Booking stepper: schedule → personal → payment → summary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One step of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    Schedule,
    Personal,
    Payment,
    Summary,
}

impl BookingStep {
    /// All steps in form order
    pub const ALL: [BookingStep; 4] = [
        BookingStep::Schedule,
        BookingStep::Personal,
        BookingStep::Payment,
        BookingStep::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStep::Schedule => "schedule",
            BookingStep::Personal => "personal",
            BookingStep::Payment => "payment",
            BookingStep::Summary => "summary",
        }
    }

    /// Zero-based position in the stepper
    pub fn index(&self) -> usize {
        match self {
            BookingStep::Schedule => 0,
            BookingStep::Personal => 1,
            BookingStep::Payment => 2,
            BookingStep::Summary => 3,
        }
    }

    pub fn next(&self) -> Option<BookingStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<BookingStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown step id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown booking step '{0}'")]
pub struct UnknownStep(pub String);

impl FromStr for BookingStep {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| UnknownStep(s.to_string()))
    }
}

/// Display state of one step, owned by the form controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStepConfig {
    pub id: BookingStep,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub is_active: bool,
}

impl BookingStepConfig {
    /// A step that is neither active nor completed
    pub fn new(id: BookingStep, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            is_completed: false,
            is_active: false,
        }
    }
}
