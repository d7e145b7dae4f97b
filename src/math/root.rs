use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::exact::{round_non_negative, Precision};

/// The exact square root of a non-negative rational, kept symbolic.
///
/// Distances and magnitudes in the exact substrate are irrational in general, so
/// they are carried as `sqrt(radicand)` and only turned into a rational by
/// [`ExactRoot::round`] when a caller picks an order of magnitude. Ordering and
/// products are exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactRoot {
    radicand: BigRational,
}

impl ExactRoot {
    /// Creates `sqrt(radicand)`.
    ///
    /// # Panics
    ///
    /// Panics if `radicand` is negative.
    #[must_use]
    pub fn new(radicand: BigRational) -> Self {
        assert!(
            !radicand.is_negative(),
            "square root of negative value {radicand}"
        );
        Self { radicand }
    }

    /// The value under the root sign.
    #[must_use]
    pub fn radicand(&self) -> &BigRational {
        &self.radicand
    }

    /// The root as an exact rational if the radicand is a perfect square.
    #[must_use]
    pub fn to_rational(&self) -> Option<BigRational> {
        let numer = exact_isqrt(self.radicand.numer())?;
        let denom = exact_isqrt(self.radicand.denom())?;
        Some(BigRational::new(numer, denom))
    }

    /// Compares the root with a rational without rounding.
    #[must_use]
    pub fn cmp_rational(&self, value: &BigRational) -> Ordering {
        if value.is_negative() {
            return Ordering::Greater;
        }
        self.radicand.cmp(&(value * value))
    }

    /// Rounds the root to a multiple of `10^oom`.
    ///
    /// The result is correctly rounded for every mode: the integer part comes from
    /// an integer square root, and the tie test against one half is done on the
    /// squared values.
    #[must_use]
    pub fn round(&self, precision: Precision) -> BigRational {
        let unit = precision.unit();
        // sqrt(radicand) / unit == sqrt(radicand / unit^2)
        let scaled = &self.radicand / (&unit * &unit);
        let floor = scaled.floor().to_integer().sqrt();
        let floor_sq = BigRational::from_integer(&floor * &floor);
        let exact = floor_sq == scaled;
        // (floor + 1/2)^2 = floor^2 + floor + 1/4
        let quarter = BigRational::new(BigInt::one(), BigInt::from(4u32));
        let half_sq = floor_sq + BigRational::from_integer(floor.clone()) + quarter;
        let cmp_half = scaled.cmp(&half_sq);
        BigRational::from_integer(round_non_negative(floor, exact, cmp_half, precision.rounding))
            * unit
    }

    /// Nearest `f64` to the root.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.radicand.to_f64().map_or(f64::NAN, f64::sqrt)
    }

    /// Returns `true` for the root of zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.radicand.is_zero()
    }
}

impl PartialOrd for ExactRoot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactRoot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.radicand.cmp(&other.radicand)
    }
}

impl std::ops::Mul for &ExactRoot {
    type Output = ExactRoot;

    fn mul(self, rhs: Self) -> ExactRoot {
        ExactRoot {
            radicand: &self.radicand * &rhs.radicand,
        }
    }
}

impl From<BigRational> for ExactRoot {
    /// The root of `value^2`, i.e. `|value|`.
    fn from(value: BigRational) -> Self {
        Self {
            radicand: &value * &value,
        }
    }
}

fn exact_isqrt(n: &BigInt) -> Option<BigInt> {
    let root = n.sqrt();
    (&root * &root == *n).then_some(root)
}
