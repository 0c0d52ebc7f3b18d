//! Typed views over the named constants.

pub mod failure;
pub mod unscheduled;

use std::fmt;

pub use self::failure::FailureReason;
pub use self::unscheduled::UnscheduledReason;

/// The two kinds of values the registry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Integer code attached to a failed instance or job.
    FailureCode,

    /// Text explaining why a job has not been placed on a host yet.
    PlacementMessage,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::FailureCode, Family::PlacementMessage];

    /// The external system that owns this family's vocabulary.
    pub const fn upstream(self) -> &'static str {
        match self {
            Family::FailureCode => "Cook/Mesos (scheduler/src/cook/mesos/schema.clj)",
            Family::PlacementMessage => "Cook/Fenzo",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::FailureCode => f.write_str("failure code"),
            Family::PlacementMessage => f.write_str("placement message"),
        }
    }
}
