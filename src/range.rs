use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// Range – closed axis interval
// ---------------------------------------------------------------------------

/// An immutable closed interval `[lower, upper]` on an axis.
///
/// `lower <= upper` holds for every observable value, including values built
/// by deserialization; equal bounds form a degenerate single-point range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct Range {
    lower: f64,
    upper: f64,
}

/// Unvalidated mirror used by serde, so deserialized bounds re-enter through
/// the constructor invariant.
#[derive(Deserialize)]
struct RawRange {
    lower: f64,
    upper: f64,
}

impl TryFrom<RawRange> for Range {
    type Error = DataError;

    fn try_from(raw: RawRange) -> Result<Self> {
        Range::new(raw.lower, raw.upper)
    }
}

impl Range {
    /// Build a range from its two bounds.  The bounds must satisfy
    /// `lower <= upper`, so reversed and NaN bounds both fail with
    /// [`DataError::InvertedBounds`]; equal bounds are allowed.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !(lower <= upper) {
            return Err(DataError::InvertedBounds { lower, upper });
        }
        Ok(Range { lower, upper })
    }

    /// The lower bound, exactly as constructed.
    pub fn lower_bound(&self) -> f64 {
        self.lower
    }

    /// The upper bound, exactly as constructed.
    pub fn upper_bound(&self) -> f64 {
        self.upper
    }

    /// Width of the interval; zero for a degenerate range.
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// Closed-interval membership.  Both bounds are contained; comparison is
    /// plain `f64` ordering with no tolerance.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Midpoint of the interval, computed as `lower / 2 + upper / 2` so the
    /// result stays exact for bounds of large magnitude.
    pub fn central_value(&self) -> f64 {
        self.lower / 2.0 + self.upper / 2.0
    }

    /// Whether two closed ranges overlap; a shared endpoint counts.
    pub fn intersects(&self, other: &Range) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Clamp `value` to the range: contained values come back unchanged,
    /// everything else snaps to the nearer bound.
    pub fn constrain(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    /// Smallest range spanning both operands; a `None` operand drops out,
    /// two `None`s give `None`.
    pub fn combine(first: Option<Range>, second: Option<Range>) -> Option<Range> {
        match (first, second) {
            (Some(a), Some(b)) => Some(Range {
                lower: a.lower.min(b.lower),
                upper: a.upper.max(b.upper),
            }),
            (a, None) => a,
            (None, b) => b,
        }
    }

    /// Widen `range` just enough to contain `value`.  `None` becomes the
    /// degenerate range at `value`; a contained value returns the range
    /// untouched.
    pub fn expand_to_include(range: Option<Range>, value: f64) -> Range {
        match range {
            None => Range {
                lower: value,
                upper: value,
            },
            Some(r) if value < r.lower => Range {
                lower: value,
                upper: r.upper,
            },
            Some(r) if value > r.upper => Range {
                lower: r.lower,
                upper: value,
            },
            Some(r) => r,
        }
    }

    /// Translate both bounds by `delta`.
    pub fn shift(&self, delta: f64) -> Range {
        Range {
            lower: self.lower + delta,
            upper: self.upper + delta,
        }
    }

    /// Multiply both bounds by a non-negative `factor`.  Negative factors
    /// would swap the bounds and fail with [`DataError::NegativeScale`].
    pub fn scale(&self, factor: f64) -> Result<Range> {
        if factor < 0.0 {
            return Err(DataError::NegativeScale { factor });
        }
        Ok(Range {
            lower: self.lower * factor,
            upper: self.upper * factor,
        })
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
