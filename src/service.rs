// Orchestrates one reconstruction end to end: validate the share set,
// decode every entry into a point, interpolate the first k points.
//
// A run moves strictly forward; any failure returns at once and nothing
// partial ever reaches the caller.  The whole thing is a pure function
// of its input, so independent share sets can be processed in parallel
// with no shared state.

use num::bigint::BigInt;

use crate::error::Error;
use crate::lagrange;
use crate::share::{Point, Secret, ShareCollection};
use crate::validate;

// One decoded share, kept for the diagnostic trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedPoint {
    pub id: String,
    pub x: BigInt,
    pub y: BigInt,
}

// The terminal outcome of a successful run.  The trace covers every
// decoded share in document order, not just the k that were used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub secret: Secret,
    pub points: Vec<TracedPoint>,
}

pub fn reconstruct(set: &ShareCollection) -> Result<Reconstruction, Error> {
    let threshold = validate::validate(set)?;

    let mut points = Vec::with_capacity(set.shares.len());
    let mut trace = Vec::with_capacity(set.shares.len());
    for (id, share) in &set.shares {
        let p = share.to_point(id)?;
        trace.push(TracedPoint { id: id.clone(), x: p.x.clone(), y: p.y.clone() });
        points.push(p);
    }

    let secret = lagrange::recover_constant(&points, threshold.k as usize)?;
    Ok(Reconstruction { secret, points: trace })
}
