//! Transcendental functions on exact rationals.
//!
//! Each function evaluates a power series with terms rounded a few digits below
//! the requested precision and returns the sum rounded to that precision. Inputs
//! are range-reduced first so every series converges quickly.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, Signed, Zero};

use super::exact::{round_at, Precision};
use super::real::Real;
use super::root::ExactRoot;

/// Digits carried by series terms below the working precision.
const TERM_DIGITS: i32 = 3;

fn int(n: u32) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Pi via Machin's formula: `16 atan(1/5) - 4 atan(1/239)`.
#[must_use]
pub fn pi(work: Precision) -> BigRational {
    let fine = work.refined(TERM_DIGITS);
    let fifth = BigRational::new(BigInt::one(), BigInt::from(5u32));
    let small = BigRational::new(BigInt::one(), BigInt::from(239u32));
    let value = int(16) * atan_series(&fifth, fine) - int(4) * atan_series(&small, fine);
    round_at(&value, work)
}

/// Arc tangent series `x - x^3/3 + x^5/5 - ...`, for small `|x|`.
fn atan_series(x: &BigRational, fine: Precision) -> BigRational {
    let eps = fine.unit();
    let x2 = x * x;
    let mut power = x.clone();
    let mut sum = BigRational::zero();
    let mut k: u32 = 0;
    loop {
        let term = &power / int(2 * k + 1);
        if term.abs() < eps {
            break;
        }
        if k % 2 == 0 {
            sum += term;
        } else {
            sum -= term;
        }
        power = round_at(&(&power * &x2), fine);
        k += 1;
    }
    sum
}

/// Arc tangent of any rational.
fn atan(x: &BigRational, work: Precision) -> BigRational {
    if x.is_zero() {
        return BigRational::zero();
    }
    if x.abs() > BigRational::one() {
        let quarter_turn = pi(work.refined(TERM_DIGITS)) / int(2);
        let inner = atan(&x.recip(), work);
        return if x.is_positive() {
            quarter_turn - inner
        } else {
            -quarter_turn - inner
        };
    }
    // Two half-angle steps bring |x| <= tan(pi/16) < 0.2.
    let fine = work.refined(TERM_DIGITS);
    let one = BigRational::one();
    let mut y = x.clone();
    for _ in 0..2 {
        let root = ExactRoot::new(&one + &y * &y).round(fine);
        y = round_at(&(&y / (&one + root)), fine);
    }
    atan_series(&y, fine) * int(4)
}

/// Four-quadrant arc tangent of `y / x`, in `(-pi, pi]`.
#[must_use]
pub fn atan2(y: &BigRational, x: &BigRational, work: Precision) -> BigRational {
    if x.is_positive() {
        return round_at(&atan(&(y / x), work), work);
    }
    let half_turn = pi(work.refined(TERM_DIGITS));
    let value = if x.is_negative() {
        let base = atan(&(y / x), work);
        if y.is_negative() {
            base - half_turn
        } else {
            base + half_turn
        }
    } else if y.is_positive() {
        half_turn / int(2)
    } else if y.is_negative() {
        -half_turn / int(2)
    } else {
        BigRational::zero()
    };
    round_at(&value, work)
}

/// Subtracts the nearest multiple of `2 pi` so the angle lies in about `[-pi, pi]`.
fn reduce_angle(angle: &BigRational, work: Precision) -> BigRational {
    let turns = (Real::to_f64(angle) / std::f64::consts::TAU).round();
    match BigInt::from_f64(turns) {
        Some(turns) if !turns.is_zero() => {
            let full_turn = pi(work.refined(TERM_DIGITS)) * int(2);
            angle - BigRational::from_integer(turns) * full_turn
        }
        _ => angle.clone(),
    }
}

/// `(sin, cos)` of an angle via their Taylor series.
#[must_use]
pub fn sin_cos(angle: &BigRational, work: Precision) -> (BigRational, BigRational) {
    let fine = work.refined(TERM_DIGITS);
    let eps = fine.unit();
    let x = reduce_angle(angle, work);
    let x2 = round_at(&(&x * &x), fine);

    let mut sin = BigRational::zero();
    let mut term = x.clone();
    let mut n: u32 = 1;
    while term.abs() >= eps {
        sin += &term;
        term = round_at(&(-(&term * &x2) / int((n + 1) * (n + 2))), fine);
        n += 2;
    }

    let mut cos = BigRational::zero();
    let mut term = BigRational::one();
    let mut n: u32 = 0;
    while term.abs() >= eps {
        cos += &term;
        term = round_at(&(-(&term * &x2) / int((n + 1) * (n + 2))), fine);
        n += 2;
    }

    (round_at(&sin, work), round_at(&cos, work))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::RoundingMode;

    fn work() -> Precision {
        Precision::new(-12, RoundingMode::HalfEven)
    }

    fn close(value: &BigRational, expected: f64) -> bool {
        (Real::to_f64(value) - expected).abs() < 1e-11
    }

    #[test]
    fn pi_digits() {
        assert!(close(&pi(work()), std::f64::consts::PI));
    }

    #[test]
    fn sin_cos_of_common_angles() {
        let third = BigRational::from_float(std::f64::consts::FRAC_PI_3).unwrap();
        let (s, c) = sin_cos(&third, work());
        assert!(close(&s, std::f64::consts::FRAC_PI_3.sin()));
        assert!(close(&c, 0.5));

        let (s, c) = sin_cos(&BigRational::zero(), work());
        assert!(s.is_zero());
        assert_eq!(c, BigRational::one());
    }

    #[test]
    fn sin_cos_reduces_large_angles() {
        let angle = int(20);
        let (s, c) = sin_cos(&angle, work());
        assert!(close(&s, 20f64.sin()));
        assert!(close(&c, 20f64.cos()));
    }

    #[test]
    fn atan2_quadrants() {
        let one = BigRational::one();
        let zero = BigRational::zero();
        let pi = std::f64::consts::PI;
        assert!(close(&atan2(&one, &one, work()), pi / 4.0));
        assert!(close(&atan2(&one, &(-&one), work()), 3.0 * pi / 4.0));
        assert!(close(&atan2(&(-&one), &(-&one), work()), -3.0 * pi / 4.0));
        assert!(close(&atan2(&one, &zero, work()), pi / 2.0));
        assert!(close(&atan2(&zero, &(-&one), work()), pi));
        assert!(atan2(&zero, &zero, work()).is_zero());
    }

    #[test]
    fn atan_of_large_argument() {
        let x = int(1000);
        assert!(close(&atan2(&x, &BigRational::one(), work()), 1000f64.atan()));
    }
}
