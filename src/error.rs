// Everything that can go wrong while reconstructing a secret.
//
// Each variant carries the context a caller needs to fix its input: the
// share id for per-share failures, the offending numbers for threshold
// failures.  Errors are terminal; nothing is retried and no partial
// secret is ever produced.

use num::bigint::BigInt;
use thiserror::Error;

use crate::radix::DecodeError;
use crate::share::MAX_SHARES;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("missing 'keys' entry with n and k")]
    MissingThreshold,

    #[error("threshold fields n and k must be numbers")]
    InvalidThresholdType,

    #[error("invalid threshold: need 1 <= k <= n, got k={k}, n={n}")]
    ThresholdOrderViolation { k: u64, n: u64 },

    #[error("share count n={n} exceeds the supported maximum of {MAX_SHARES}")]
    TooManyShares { n: u64 },

    #[error("share {id}: missing or empty 'base' or 'value', or non-integer id")]
    MalformedShare { id: String },

    #[error("share {id}: invalid base {base:?}, must be an integer between 2 and 36")]
    InvalidBase { id: String, base: String },

    #[error("share {id}: invalid value: {source}")]
    InvalidValue { id: String, source: DecodeError },

    #[error("not enough points to solve the polynomial: have {have}, need {need}")]
    InsufficientPoints { have: usize, need: usize },

    #[error("duplicate x coordinate {x} among the selected points")]
    DuplicateAbscissa { x: BigInt },
}

impl Error {
    // The share id this error is about, when there is one.
    pub fn share_id(&self) -> Option<&str> {
        match self {
            Error::MalformedShare { id }
            | Error::InvalidBase { id, .. }
            | Error::InvalidValue { id, .. } => Some(id),
            _ => None,
        }
    }
}
