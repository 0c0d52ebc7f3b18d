//! Named constants for failure reasons and unscheduled-job messages.

/// A failure reason code as reported by the scheduler.
pub type ReasonCode = u32;

// Failure reason codes from Cook or Mesos.
// See scheduler/src/cook/mesos/schema.clj for the reason code names.

/// The instance ran longer than the job's max runtime.
pub const MAX_RUNTIME_EXCEEDED: ReasonCode = 2003;

/// The executor running the instance is no longer registered with the agent.
pub const EXECUTOR_UNREGISTERED: ReasonCode = 6002;

/// The job's command exited with a non-zero status.
pub const CMD_NON_ZERO_EXIT: ReasonCode = 99003;

// Unscheduled job reason strings from Cook or Fenzo.
// Compared byte for byte against scheduler output.

pub const UNDER_INVESTIGATION: &str =
    "The job is now under investigation. Check back in a minute for more details!";

pub const COULD_NOT_PLACE_JOB: &str = "The job couldn't be placed on any available hosts.";
