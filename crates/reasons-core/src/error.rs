use thiserror::Error;

use crate::domain::Family;

/// Errors of the runtime lookup by symbolic name.
///
/// Referring to a constant directly never fails; these only come from
/// `REGISTRY` and the `FromStr` impls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReasonError {
    #[error("unknown reason name: {0}")]
    UnknownName(String),

    #[error("reason {name} is a {actual}, not a {expected}")]
    WrongFamily {
        name: String,
        expected: Family,
        actual: Family,
    },
}
