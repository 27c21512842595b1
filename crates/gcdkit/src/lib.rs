//! Greatest common divisor over `i32` operands.
//!
//! Two kernels are provided: the Euclidean modulo loop and the binary
//! (Stein) subtraction loop. Both accept operands of any sign and any
//! arity from two upward, and both reject `i32::MIN` (its magnitude does
//! not fit in `i32`) and all-zero operand sets (the gcd is undefined
//! there) before computing anything.
//!
//! Every `*_timed` variant returns the same value as its untimed
//! counterpart together with the elapsed wall time of the whole call,
//! validation included, measured on the monotonic [`Instant`] clock.

use std::time::{Duration, Instant};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GcdError {
    /// The operand is `i32::MIN`, whose absolute value is not
    /// representable in `i32`.
    #[error("operand {0} has no representable magnitude in i32")]
    OutOfRange(i32),
    /// Every operand in the call was zero.
    #[error("gcd is undefined when every operand is zero")]
    InvalidArgument,
    /// The least common multiple of the two values exceeds `i32::MAX`.
    #[error("lcm of {0} and {1} overflows i32")]
    Overflow(i32, i32),
}

pub type Result<T> = std::result::Result<T, GcdError>;

fn euclid(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Binary (Stein) gcd: strips shared factors of two, then reduces the
/// larger odd value by subtraction. No division anywhere in the loop.
fn stein(mut a: u32, mut b: u32) -> u32 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            return a << shift;
        }
    }
}

fn magnitude(value: i32) -> Result<u32> {
    value
        .checked_abs()
        .map(|m| m as u32)
        .ok_or(GcdError::OutOfRange(value))
}

/// Validates the whole operand list before any reduction step: every
/// operand must have a representable magnitude and at least one must be
/// nonzero.
fn checked_magnitudes(a: i32, b: i32, rest: &[i32]) -> Result<Vec<u32>> {
    let mut magnitudes = Vec::with_capacity(rest.len() + 2);
    for &value in [a, b].iter().chain(rest) {
        magnitudes.push(magnitude(value)?);
    }
    if magnitudes.iter().all(|&m| m == 0) {
        return Err(GcdError::InvalidArgument);
    }
    Ok(magnitudes)
}

fn fold_gcd(kernel: fn(u32, u32) -> u32, a: i32, b: i32, rest: &[i32]) -> Result<i32> {
    let magnitudes = checked_magnitudes(a, b, rest)?;
    let mut acc = magnitudes[0];
    for &m in &magnitudes[1..] {
        acc = kernel(acc, m);
    }
    // Every magnitude is at most i32::MAX, so the gcd is too.
    Ok(acc as i32)
}

fn timed<T>(f: impl FnOnce() -> Result<T>) -> Result<(T, Duration)> {
    let start = Instant::now();
    let value = f()?;
    Ok((value, start.elapsed()))
}

pub fn gcd_euclid(a: i32, b: i32) -> Result<i32> {
    fold_gcd(euclid, a, b, &[])
}

pub fn gcd3_euclid(a: i32, b: i32, c: i32) -> Result<i32> {
    fold_gcd(euclid, a, b, &[c])
}

/// Left fold of the Euclidean gcd over `a`, `b`, and `rest` in argument
/// order.
pub fn gcd_all_euclid(a: i32, b: i32, rest: &[i32]) -> Result<i32> {
    fold_gcd(euclid, a, b, rest)
}

pub fn gcd_stein(a: i32, b: i32) -> Result<i32> {
    fold_gcd(stein, a, b, &[])
}

pub fn gcd3_stein(a: i32, b: i32, c: i32) -> Result<i32> {
    fold_gcd(stein, a, b, &[c])
}

pub fn gcd_all_stein(a: i32, b: i32, rest: &[i32]) -> Result<i32> {
    fold_gcd(stein, a, b, rest)
}

pub fn gcd_euclid_timed(a: i32, b: i32) -> Result<(i32, Duration)> {
    timed(|| gcd_euclid(a, b))
}

pub fn gcd3_euclid_timed(a: i32, b: i32, c: i32) -> Result<(i32, Duration)> {
    timed(|| gcd3_euclid(a, b, c))
}

pub fn gcd_all_euclid_timed(a: i32, b: i32, rest: &[i32]) -> Result<(i32, Duration)> {
    timed(|| gcd_all_euclid(a, b, rest))
}

pub fn gcd_stein_timed(a: i32, b: i32) -> Result<(i32, Duration)> {
    timed(|| gcd_stein(a, b))
}

pub fn gcd3_stein_timed(a: i32, b: i32, c: i32) -> Result<(i32, Duration)> {
    timed(|| gcd3_stein(a, b, c))
}

pub fn gcd_all_stein_timed(a: i32, b: i32, rest: &[i32]) -> Result<(i32, Duration)> {
    timed(|| gcd_all_stein(a, b, rest))
}

fn lcm_step(a: u32, b: u32) -> Result<u32> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let g = euclid(a, b);
    (a / g)
        .checked_mul(b)
        .filter(|&l| l <= i32::MAX as u32)
        .ok_or(GcdError::Overflow(a as i32, b as i32))
}

pub fn lcm_euclid(a: i32, b: i32) -> Result<i32> {
    lcm_all_euclid(a, b, &[])
}

/// Left fold of the least common multiple over `a`, `b`, and `rest`.
/// Zero operands pin the result to zero; an intermediate multiple above
/// `i32::MAX` is reported as [`GcdError::Overflow`].
pub fn lcm_all_euclid(a: i32, b: i32, rest: &[i32]) -> Result<i32> {
    let magnitudes = checked_magnitudes(a, b, rest)?;
    let mut acc = magnitudes[0];
    for &m in &magnitudes[1..] {
        acc = lcm_step(acc, m)?;
    }
    Ok(acc as i32)
}

/// True when the gcd of all operands is exactly one.
pub fn are_coprime(a: i32, b: i32, rest: &[i32]) -> Result<bool> {
    Ok(gcd_all_euclid(a, b, rest)? == 1)
}
