// SPDX-License-Identifier: MIT
// Integer k-th root (Newton-Raphson over BigUint)

use core::mem;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::constants::DEFAULT_ROOT_DEGREE;
use crate::error::MathError;

/// When the Newton loop is allowed to stop
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Convergence {
    /// Iterate until the estimate settles at the root. Always exact.
    #[default]
    Unbounded,
    /// Stop after at most `n` refinement steps, settled or not
    MaxIterations(u32),
}

/// Result of a root computation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Root {
    /// Integer whose k-th power is nearest to the input
    pub value: BigUint,
    /// Newton steps performed
    pub iterations: u32,
    /// False when the iteration budget ran out before the estimate settled.
    /// `value` is then a best-effort approximation.
    pub converged: bool,
}

/// Nearest integer k-th root of `val`.
///
/// Newton iteration starts at `val` and decreases strictly while the
/// estimate is above the root. On integers it never lands exactly on an
/// irrational root; once an estimate drops to `x^k <= val` it is the floor
/// root and any further step would only bounce around it, so the
/// unbounded mode stops there. A final neighbour check then picks the
/// closest of `x - 1`, `x`, `x + 1`.
///
/// `k == 1` returns `val`, `k == 0` is rejected.
pub fn root_nth(val: &BigUint, k: u32, convergence: Convergence) -> Result<Root, MathError> {
    if k == 0 {
        return Err(MathError::InvalidRootDegree);
    }
    if k == 1 || val.is_zero() {
        return Ok(Root {
            value: val.clone(),
            iterations: 0,
            converged: true,
        });
    }

    let mut previous = BigUint::zero();
    let mut x = val.clone();
    let mut iterations: u32 = 0;
    let mut converged = false;

    loop {
        if x == previous {
            converged = true;
            break;
        }
        if let Convergence::MaxIterations(limit) = convergence {
            if iterations >= limit {
                break;
            }
        }

        let next = newton_step(val, &x, k)?;
        previous = mem::replace(&mut x, next);
        iterations = iterations.saturating_add(1);

        if convergence == Convergence::Unbounded && x.pow(k) <= *val {
            converged = true;
            break;
        }
    }

    Ok(Root {
        value: nearest_neighbour(val, x, k),
        iterations,
        converged,
    })
}

/// Nearest integer square root, unbounded mode
pub fn sqrt(val: &BigUint) -> Result<BigUint, MathError> {
    root_nth(val, DEFAULT_ROOT_DEGREE, Convergence::Unbounded).map(|root| root.value)
}

/// x' = ((k - 1) * x + val / x^(k - 1)) / k, truncating
fn newton_step(val: &BigUint, x: &BigUint, k: u32) -> Result<BigUint, MathError> {
    if x.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let x_pow = x.pow(k - 1);
    Ok((x * (k - 1) + val / x_pow) / k)
}

/// Shift `x` by one if a neighbour's k-th power is strictly closer to `val`.
/// The upper check runs against the result of the lower check.
fn nearest_neighbour(val: &BigUint, mut x: BigUint, k: u32) -> BigUint {
    if !x.is_zero() {
        let below = &x - 1u32;
        if distance(val, &below.pow(k)) < distance(val, &x.pow(k)) {
            x = below;
        }
    }

    let above = &x + 1u32;
    if distance(val, &above.pow(k)) < distance(val, &x.pow(k)) {
        x = above;
    }
    x
}

#[inline]
fn distance(a: &BigUint, b: &BigUint) -> BigUint {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u128) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_newton_step_from_above_decreases() {
        let val = big(144);
        let next = newton_step(&val, &big(144), 2).unwrap();
        assert_eq!(next, big(72));
    }

    #[test]
    fn test_newton_step_rejects_zero_estimate() {
        assert_eq!(
            newton_step(&big(10), &BigUint::zero(), 2),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn test_nearest_neighbour_moves_down() {
        // 5^2 = 25 is further from 17 than 4^2 = 16
        assert_eq!(nearest_neighbour(&big(17), big(5), 2), big(4));
    }

    #[test]
    fn test_nearest_neighbour_moves_up() {
        // 3 is closer to 2^2 than to 1^2
        assert_eq!(nearest_neighbour(&big(3), big(1), 2), big(2));
    }

    #[test]
    fn test_nearest_neighbour_keeps_closest() {
        // 12 - 9 = 3 < 16 - 12 = 4
        assert_eq!(nearest_neighbour(&big(12), big(3), 2), big(3));
        assert_eq!(nearest_neighbour(&big(2), big(1), 2), big(1));
    }

    #[test]
    fn test_nearest_neighbour_at_zero_only_looks_up() {
        assert_eq!(nearest_neighbour(&big(0), big(0), 3), big(0));
        assert_eq!(nearest_neighbour(&big(1), big(0), 3), big(1));
    }

    #[test]
    fn test_distance_is_symmetric() {
        assert_eq!(distance(&big(3), &big(10)), big(7));
        assert_eq!(distance(&big(10), &big(3)), big(7));
        assert_eq!(distance(&big(5), &big(5)), big(0));
    }

    #[test]
    fn test_root_nth_stops_at_floor_root_for_high_degree() {
        // A unit step during the descent (6 -> 5) must not end the loop:
        // 3^6 = 729 is the closest power to 430.
        let root = root_nth(&big(430), 6, Convergence::Unbounded).unwrap();
        assert_eq!(root.value, big(3));
        assert!(root.converged);
    }

    #[test]
    fn test_default_convergence_is_unbounded() {
        assert_eq!(Convergence::default(), Convergence::Unbounded);
    }
}
