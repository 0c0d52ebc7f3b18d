//! Failure reasons: why an instance or job failed.

use std::fmt;
use std::str::FromStr;

use crate::codes::{CMD_NON_ZERO_EXIT, EXECUTOR_UNREGISTERED, MAX_RUNTIME_EXCEEDED, ReasonCode};
use crate::error::ReasonError;

/// A failure cause with a known reason code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    MaxRuntimeExceeded,
    ExecutorUnregistered,
    CmdNonZeroExit,
}

impl FailureReason {
    /// Every failure reason, in declaration order.
    pub const ALL: [FailureReason; 3] = [
        FailureReason::MaxRuntimeExceeded,
        FailureReason::ExecutorUnregistered,
        FailureReason::CmdNonZeroExit,
    ];

    pub const fn code(self) -> ReasonCode {
        match self {
            FailureReason::MaxRuntimeExceeded => MAX_RUNTIME_EXCEEDED,
            FailureReason::ExecutorUnregistered => EXECUTOR_UNREGISTERED,
            FailureReason::CmdNonZeroExit => CMD_NON_ZERO_EXIT,
        }
    }

    /// Symbolic name, identical to the constant's identifier.
    pub const fn name(self) -> &'static str {
        match self {
            FailureReason::MaxRuntimeExceeded => "MAX_RUNTIME_EXCEEDED",
            FailureReason::ExecutorUnregistered => "EXECUTOR_UNREGISTERED",
            FailureReason::CmdNonZeroExit => "CMD_NON_ZERO_EXIT",
        }
    }

    /// True if `code` (as reported by the scheduler) is this reason's code.
    pub fn matches(self, code: ReasonCode) -> bool {
        self.code() == code
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

impl FromStr for FailureReason {
    type Err = ReasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FailureReason::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| ReasonError::UnknownName(s.to_string()))
    }
}
