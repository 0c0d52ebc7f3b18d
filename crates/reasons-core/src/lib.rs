//! reasons-core
//!
//! Named failure reason codes and placement messages emitted by the Cook
//! scheduler, for integration tests that assert on job and instance outcomes.
//!
//! # Modules
//! - **codes**: the flat constant block (the only place literals appear)
//! - **domain**: typed views over the constants (`FailureReason`, `UnscheduledReason`, `Family`)
//! - **registry**: the read-only `REGISTRY` for lookup by symbolic name at runtime
//! - **error**: errors of the runtime lookup
//!
//! # Drift
//! Every value here mirrors a definition owned by the scheduler (Cook/Mesos for
//! failure codes, Cook/Fenzo for placement messages). Nothing in this crate can
//! tell when the scheduler changes one of them; that only shows up as failing
//! integration tests. Update `codes` in lockstep with the scheduler.

pub mod codes;
pub mod domain;
pub mod error;
pub mod registry;

pub use codes::*;
pub use domain::{Family, FailureReason, UnscheduledReason};
pub use error::ReasonError;
pub use registry::{Entry, REGISTRY, ReasonRegistry, ReasonValue};
