// Data model for a share set.
//
// A share set arrives as one JSON object: a reserved "keys" entry
// declaring the threshold, and any number of further entries keyed by
// share id.  The sentinel is excluded from the share map structurally
// (a named serde field next to a flattened map) rather than by string
// comparison at every use site, and the map preserves document order so
// "the first k shares" is a well-defined notion.

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use num::bigint::BigInt;
use num::rational::BigRational;
use serde::Deserialize;

use crate::error::Error;
use crate::radix::{self, DecodeError};

// We don't support more than this many shares, although we could.
pub const MAX_SHARES: u64 = 1024;

// A field that may arrive as a JSON number or a string; inputs in the
// wild use both spellings (e.g. "base": 10 and "base": "10").
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(serde_json::Number),
    Text(String),
}

impl RawField {
    // A threshold count.  Only a genuine JSON number qualifies.
    pub fn as_count(&self) -> Option<u64> {
        match self {
            RawField::Number(n) => n.as_u64(),
            RawField::Text(_) => None,
        }
    }

    // A radix, from either spelling.
    pub fn as_base(&self) -> Option<i64> {
        match self {
            RawField::Number(n) => n.as_i64(),
            RawField::Text(s) => s.parse().ok(),
        }
    }

    // The digit string to decode.  A numeric value is taken as its
    // decimal rendering.
    pub fn digits(&self) -> String {
        match self {
            RawField::Number(n) => n.to_string(),
            RawField::Text(s) => s.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RawField::Text(s) if s.is_empty())
    }
}

impl Display for RawField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RawField::Number(n) => Display::fmt(n, f),
            RawField::Text(s) => Display::fmt(s, f),
        }
    }
}

// The raw threshold declaration, before validation.  Fields stay loose
// here so that a wrong type is reported as a threshold error, not as a
// parse failure of the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThresholdSpec {
    pub n: Option<RawField>,
    pub k: Option<RawField>,
}

// A validated threshold: 1 <= k <= n <= MAX_SHARES.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    pub n: u64,
    pub k: u64,
}

// One not-yet-decoded share entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawShare {
    pub base: Option<RawField>,
    pub value: Option<RawField>,
}

impl RawShare {
    // Decode this share into a point, with `id` supplying the x
    // coordinate as a decimal integer.
    pub fn to_point(&self, id: &str) -> Result<Point, Error> {
        let malformed = || Error::MalformedShare { id: id.to_string() };

        let x: BigInt = id.parse().map_err(|_| malformed())?;
        let (base_raw, value_raw) = match (&self.base, &self.value) {
            (Some(b), Some(v)) if !b.is_empty() && !v.is_empty() => (b, v),
            _ => return Err(malformed()),
        };
        let base = base_raw.as_base().ok_or_else(|| Error::InvalidBase {
            id: id.to_string(),
            base: base_raw.to_string(),
        })?;
        let y = radix::decode(base, &value_raw.digits()).map_err(|e| match e {
            DecodeError::InvalidBase(_) => Error::InvalidBase {
                id: id.to_string(),
                base: base_raw.to_string(),
            },
            other => Error::InvalidValue {
                id: id.to_string(),
                source: other,
            },
        })?;
        Ok(Point { x, y })
    }
}

// A whole share set, in document order.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareCollection {
    #[serde(default)]
    pub keys: Option<ThresholdSpec>,
    #[serde(flatten)]
    pub shares: IndexMap<String, RawShare>,
}

impl ShareCollection {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

// A decoded share: one evaluation of the secret polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

// The reconstructed constant term.  Genuine share sets yield integers;
// a rational result means the inputs did not come from one polynomial
// of degree k-1, and is surfaced rather than rounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Secret {
    Integer(BigInt),
    Rational(BigRational),
}

impl Secret {
    pub fn from_ratio(r: BigRational) -> Self {
        if r.is_integer() {
            Secret::Integer(r.to_integer())
        } else {
            Secret::Rational(r)
        }
    }
}

impl Display for Secret {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Secret::Integer(v) => Display::fmt(v, f),
            Secret::Rational(r) => Display::fmt(r, f),
        }
    }
}
