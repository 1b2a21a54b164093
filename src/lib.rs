// Reconstruction half of a Shamir-style secret sharing scheme.
//
// A share set is a JSON object mapping share ids to radix-encoded
// values, plus a "keys" entry declaring the (k, n) threshold.  After
// validation, each share decodes to a point on an unknown polynomial;
// Lagrange interpolation of the first k points at x = 0 recovers the
// constant term -- the secret.

pub mod error;
pub mod lagrange;
pub mod radix;
pub mod service;
pub mod share;
pub mod validate;

pub use error::Error;
pub use service::{reconstruct, Reconstruction, TracedPoint};
pub use share::{Point, RawShare, Secret, ShareCollection, Threshold};
