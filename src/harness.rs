//! Cross-checks every kernel against a trusted baseline.
//!
//! Unlike the per-module tests, which stop at the first
//! mismatch, this collects every failing (kernel, input) pair
//! and reports them all at once.

#![cfg(test)]

use std::{error, fmt};

use anyhow::{bail, Result};

use crate::{baseline, digits, ilog};

/// A kernel disagreeing with its baseline for one input.
struct Failure<T, R> {
    kernel: &'static str,
    input: T,
    got: R,
    want: R,
}

impl<T: fmt::Display, R: fmt::Debug> fmt::Display for Failure<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: #{}: got {:?}, want {:?}",
            self.kernel, self.input, self.got, self.want
        )
    }
}

impl<T: fmt::Display, R: fmt::Debug> fmt::Debug for Failure<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T: fmt::Display, R: fmt::Debug> error::Error for Failure<T, R> {}

/// Runs each kernel on each input and compares it with
/// `baseline`.
fn check<T, R>(
    kernels: &[(&'static str, fn(T) -> R)],
    baseline: fn(T) -> R,
    inputs: impl IntoIterator<Item = T>,
) -> Result<()>
where
    T: Copy + fmt::Display,
    R: Copy + PartialEq + fmt::Debug,
{
    let mut failures = Vec::new();
    let mut n = 0;
    for input in inputs {
        let want = baseline(input);
        for &(kernel, f) in kernels {
            let got = f(input);
            if got != want {
                failures.push(Failure {
                    kernel,
                    input,
                    got,
                    want,
                });
            }
        }
        n += 1;
    }
    if failures.is_empty() {
        return Ok(());
    }
    let report = failures
        .iter()
        .map(|f| format!("  {f}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("{} failure(s) over {n} input(s):\n{report}", failures.len())
}

/// Returns 0, 1, every power of 10 up to `max` and its
/// neighbors, and `max - 1` and `max`.
fn boundaries<T: TryFrom<u64>>(max: u64) -> Vec<T> {
    let mut xs = vec![0, 1, max - 1, max];
    for n in 0..u64::MAX.ilog10() + 1 {
        let p = 10u64.pow(n);
        if p > max {
            break;
        }
        xs.extend([p - 1, p]);
        if p < max {
            xs.push(p + 1);
        }
    }
    xs.sort_unstable();
    xs.dedup();
    xs.into_iter().filter_map(|x| T::try_from(x).ok()).collect()
}

/// The inputs the float benchmarks use.
const FLOATS: [f64; 26] = [
    0.000000001,
    0.00000001,
    0.0000001,
    0.000001,
    0.00001,
    0.0001,
    0.001,
    0.01,
    0.1,
    1.0,
    9.0,
    9.999999,
    10.0,
    19.0,
    99.999,
    100.0,
    999.0,
    1000.0,
    9999.0,
    10000.0,
    99999.0,
    999999.0,
    9999999.0,
    10000000.0,
    100000000.0,
    9999999999.0,
];

#[test]
fn test_boundaries() {
    let got: Vec<u8> = boundaries(u8::MAX as u64);
    assert_eq!(got, [0, 1, 2, 9, 10, 11, 99, 100, 101, 254, 255]);
    let got: Vec<u64> = boundaries(u64::MAX);
    assert_eq!(got.first(), Some(&0));
    assert_eq!(got.last(), Some(&u64::MAX));
    assert!(got.contains(&(10u64.pow(19) - 1)));
}

#[test]
fn test_digits8() -> Result<()> {
    let inputs = boundaries(u8::MAX as u64);
    check(&digits::KERNELS8, baseline::text8, inputs.iter().copied())?;
    check(&[("math", baseline::math8 as fn(u8) -> u32)], baseline::text8, inputs)
}

#[test]
fn test_digits16() -> Result<()> {
    let inputs = boundaries(u16::MAX as u64);
    check(&digits::KERNELS16, baseline::text16, inputs.iter().copied())?;
    check(
        &[("math", baseline::math16 as fn(u16) -> u32)],
        baseline::text16,
        inputs,
    )
}

#[test]
fn test_digits32() -> Result<()> {
    let inputs = boundaries(u32::MAX as u64);
    check(&digits::KERNELS32, baseline::math32, inputs.iter().copied())?;
    check(&digits::KERNELS32, baseline::text32, inputs)
}

#[test]
fn test_digits64() -> Result<()> {
    check(&digits::KERNELS64, baseline::text64, boundaries(u64::MAX))
}

#[test]
fn test_non_negative_ilog() -> Result<()> {
    check(
        &ilog::NON_NEGATIVE64[..1],
        ilog::ilog64::math_non_negative_ilog,
        FLOATS,
    )
}

#[test]
fn test_full_ilog() -> Result<()> {
    // Below 1 the truncating baseline is not the floor.
    let inputs = FLOATS.into_iter().filter(|&x| x >= 1.0);
    check(&ilog::FULL64[..2], ilog::ilog64::math_ilog, inputs)
}

#[test]
fn test_split_ilog() -> Result<()> {
    check(
        &[("split", ilog::ilog64::ilog_split as fn(f64) -> i32)],
        ilog::ilog64::ilog,
        FLOATS,
    )?;
    check(
        &[("split", ilog::ilog32::ilog_split as fn(f32) -> i32)],
        ilog::ilog32::ilog,
        FLOATS.map(|x| x as f32),
    )
}

#[test]
fn test_reports_every_failure() {
    fn broken(x: u32) -> u32 {
        digits::digits32::ladder(x) + (x == 10 || x == 1000) as u32
    }
    let inputs = boundaries::<u32>(u32::MAX as u64);
    let err = check(&[("broken", broken as fn(u32) -> u32)], baseline::text32, inputs)
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("2 failure(s)"), "{msg}");
    assert!(msg.contains("broken: #10: got 3, want 2"), "{msg}");
    assert!(msg.contains("broken: #1000: got 5, want 4"), "{msg}");
}

#[test]
#[cfg(feature = "slow-tests")]
fn test_exhaustive16() -> Result<()> {
    check(&digits::KERNELS16, baseline::math16, 0..=u16::MAX)
}

#[test]
#[cfg(feature = "slow-tests")]
fn test_exhaustive32() -> Result<()> {
    let start = std::time::Instant::now();
    check(&digits::KERNELS32, baseline::text32, 0..=u32::MAX)?;
    println!(
        "passed exhaustive u32 check in {:.2} seconds",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
