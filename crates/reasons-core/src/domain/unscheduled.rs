//! Unscheduled reasons: why a waiting job has not been placed on a host.

use std::fmt;
use std::str::FromStr;

use crate::codes::{COULD_NOT_PLACE_JOB, UNDER_INVESTIGATION};
use crate::error::ReasonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnscheduledReason {
    /// The scheduler has not finished looking into the job yet.
    UnderInvestigation,

    /// No offered host satisfies the job's constraints or resources.
    CouldNotPlaceJob,
}

impl UnscheduledReason {
    pub const ALL: [UnscheduledReason; 2] = [
        UnscheduledReason::UnderInvestigation,
        UnscheduledReason::CouldNotPlaceJob,
    ];

    /// The exact text the scheduler emits.
    pub const fn message(self) -> &'static str {
        match self {
            UnscheduledReason::UnderInvestigation => UNDER_INVESTIGATION,
            UnscheduledReason::CouldNotPlaceJob => COULD_NOT_PLACE_JOB,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            UnscheduledReason::UnderInvestigation => "UNDER_INVESTIGATION",
            UnscheduledReason::CouldNotPlaceJob => "COULD_NOT_PLACE_JOB",
        }
    }

    /// Exact comparison against a reason string.
    pub fn matches(self, text: &str) -> bool {
        self.message() == text
    }

    /// True if the message occurs anywhere in `text`.
    pub fn appears_in(self, text: &str) -> bool {
        text.contains(self.message())
    }

    /// Every reason whose message occurs in `text`, in declaration order.
    pub fn find_in(text: &str) -> Vec<UnscheduledReason> {
        UnscheduledReason::ALL
            .into_iter()
            .filter(|r| r.appears_in(text))
            .collect()
    }
}

impl fmt::Display for UnscheduledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name(), self.message())
    }
}

impl FromStr for UnscheduledReason {
    type Err = ReasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnscheduledReason::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| ReasonError::UnknownName(s.to_string()))
    }
}
