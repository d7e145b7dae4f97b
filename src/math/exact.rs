use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::real::Real;
use super::root::ExactRoot;
use super::series;

/// Extra decimal digits carried by intermediate transcendental evaluations.
pub const GUARD_DIGITS: i32 = 4;

/// How a value is rounded to an order of magnitude.
///
/// Mirrors the usual decimal rounding modes: `Up`/`Down` round away from/towards
/// zero, `Ceiling`/`Floor` towards positive/negative infinity, and the `Half*`
/// modes round to the nearest neighbour with the named tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    Up,
    Down,
    Ceiling,
    Floor,
    HalfUp,
    HalfDown,
    HalfEven,
}

/// Order of magnitude plus rounding policy for the exact substrate.
///
/// `oom` selects the unit `10^oom` every comparison is rounded to, so `oom = -6`
/// compares values at one millionth. There is no `Default`: callers always pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    pub oom: i32,
    pub rounding: RoundingMode,
}

impl Precision {
    /// Creates a new precision.
    #[must_use]
    pub fn new(oom: i32, rounding: RoundingMode) -> Self {
        Self { oom, rounding }
    }

    /// The same rounding carried `digits` decimal places further.
    #[must_use]
    pub fn refined(self, digits: i32) -> Self {
        Self {
            oom: self.oom - digits,
            rounding: self.rounding,
        }
    }

    /// Precision used for intermediate series evaluation.
    #[must_use]
    pub fn guard(self) -> Self {
        Self {
            oom: self.oom - GUARD_DIGITS,
            rounding: RoundingMode::HalfEven,
        }
    }

    /// The unit `10^oom` as an exact rational.
    #[must_use]
    pub fn unit(self) -> BigRational {
        pow10(self.oom)
    }
}

/// `10^exp` as an exact rational.
#[must_use]
pub fn pow10(exp: i32) -> BigRational {
    let magnitude = BigInt::from(10u32).pow(exp.unsigned_abs());
    if exp >= 0 {
        BigRational::from_integer(magnitude)
    } else {
        BigRational::new(BigInt::one(), magnitude)
    }
}

/// Rounds `value` to a multiple of `10^oom` using the given mode.
#[must_use]
pub fn round_at(value: &BigRational, precision: Precision) -> BigRational {
    let unit = precision.unit();
    let scaled = value / &unit;
    if scaled.is_integer() {
        return value.clone();
    }
    BigRational::from_integer(round_to_integer(&scaled, precision.rounding)) * unit
}

/// Rounds a rational to an integer.
fn round_to_integer(value: &BigRational, mode: RoundingMode) -> BigInt {
    let floor = value.floor().to_integer();
    let frac = value - BigRational::from_integer(floor.clone());
    let half = BigRational::new(BigInt::one(), BigInt::from(2u32));
    round_parts(floor, frac.is_zero(), frac.cmp(&half), value.is_positive(), mode)
}

/// Rounds a non-negative value known only through its floor, whether it is exact,
/// and how its fractional part compares with one half.
pub(crate) fn round_non_negative(
    floor: BigInt,
    exact: bool,
    cmp_half: Ordering,
    mode: RoundingMode,
) -> BigInt {
    round_parts(floor, exact, cmp_half, true, mode)
}

fn round_parts(
    floor: BigInt,
    exact: bool,
    cmp_half: Ordering,
    positive: bool,
    mode: RoundingMode,
) -> BigInt {
    if exact {
        return floor;
    }
    let ceil = &floor + BigInt::one();
    let (towards_zero, away_from_zero) = if positive {
        (floor.clone(), ceil.clone())
    } else {
        (ceil.clone(), floor.clone())
    };
    match mode {
        RoundingMode::Floor => floor,
        RoundingMode::Ceiling => ceil,
        RoundingMode::Up => away_from_zero,
        RoundingMode::Down => towards_zero,
        RoundingMode::HalfUp | RoundingMode::HalfDown | RoundingMode::HalfEven => match cmp_half {
            Ordering::Less => floor,
            Ordering::Greater => ceil,
            Ordering::Equal => match mode {
                RoundingMode::HalfUp => away_from_zero,
                RoundingMode::HalfDown => towards_zero,
                _ if floor.is_even() => floor,
                _ => ceil,
            },
        },
    }
}

impl Real for BigRational {
    type Tolerance = Precision;

    fn from_f64(value: f64) -> Option<Self> {
        BigRational::from_float(value)
    }

    fn to_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    fn rounded(&self, tol: Precision) -> Self {
        round_at(self, tol)
    }

    fn approx_eq(&self, other: &Self, tol: Precision) -> bool {
        self == other || round_at(self, tol) == round_at(other, tol)
    }

    fn approx_sign(&self, tol: Precision) -> Ordering {
        round_at(self, tol).cmp(&BigRational::zero())
    }

    /// # Panics
    ///
    /// Panics if `self` is negative.
    fn sqrt(&self, tol: Precision) -> Self {
        ExactRoot::new(self.clone()).round(tol)
    }

    fn sin_cos(&self, tol: Precision) -> (Self, Self) {
        series::sin_cos(self, tol.guard())
    }

    fn atan2(y: &Self, x: &Self, tol: Precision) -> Self {
        round_at(&series::atan2(y, x, tol.guard()), tol)
    }

    fn pi(tol: Precision) -> Self {
        round_at(&series::pi(tol.guard()), tol)
    }
}
