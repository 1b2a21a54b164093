// Share-set validation: the threshold declaration first, then every
// share entry in document order.
//
// The share scan is exhaustive rather than fail-fast, so a full pass
// over a given input always inspects the same entries; only the first
// failure (left to right) is surfaced to the caller.

use crate::error::Error;
use crate::share::{ShareCollection, Threshold, ThresholdSpec, MAX_SHARES};

pub fn validate(set: &ShareCollection) -> Result<Threshold, Error> {
    let threshold = check_threshold(set.keys.as_ref())?;

    let mut first_err = None;
    for (id, share) in &set.shares {
        if let Err(e) = share.to_point(id) {
            first_err.get_or_insert(e);
        }
    }
    match first_err {
        Some(e) => Err(e),
        None => Ok(threshold),
    }
}

fn check_threshold(keys: Option<&ThresholdSpec>) -> Result<Threshold, Error> {
    let keys = keys.ok_or(Error::MissingThreshold)?;
    let (n_raw, k_raw) = match (&keys.n, &keys.k) {
        (Some(n), Some(k)) => (n, k),
        _ => return Err(Error::MissingThreshold),
    };
    let n = n_raw.as_count().ok_or(Error::InvalidThresholdType)?;
    let k = k_raw.as_count().ok_or(Error::InvalidThresholdType)?;
    if k < 1 || n < 1 || k > n {
        return Err(Error::ThresholdOrderViolation { k, n });
    }
    if n > MAX_SHARES {
        return Err(Error::TooManyShares { n });
    }
    Ok(Threshold { n, k })
}
