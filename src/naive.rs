//! Slower reference takes at the perfect-number test, kept for cross-checking
//! the square-root pairing in [`is_perfect`](crate::is_perfect) and for the
//! criterion comparison in benches. All of them scan to n / 2, so they are
//! O(n) where the supported predicate is O(sqrt(n)); none of them is part of
//! the supported API.

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::Error;

// Confirms 8589869056 in roughly 44 seconds.
pub fn for_loop_is_perfect(n: u64) -> Result<bool, Error> {
    check_domain(n)?;

    let mut sum = 0u128;
    for test in 1..=(n / 2) {
        if n % test == 0 {
            sum += u128::from(test);
        }
    }

    Ok(sum == u128::from(n))
}

// Confirms 8589869056 in roughly 50 seconds.
pub fn filtered_is_perfect(n: u64) -> Result<bool, Error> {
    check_domain(n)?;

    Ok((1..=(n / 2))
        .filter(|test| n % test == 0)
        .map(u128::from)
        .sum::<u128>()
        == u128::from(n))
}

// Confirms 8589869056 in roughly 45 seconds.
pub fn reduce_is_perfect(n: u64) -> Result<bool, Error> {
    check_domain(n)?;
    if n == 1 {
        // The fold below starts from 1, which already counts 1 as a divisor
        // and only holds for n > 1.
        return Ok(false);
    }

    Ok((2..=(n / 2)).fold(1u128, |sum, test| {
        if n % test == 0 {
            sum + u128::from(test)
        } else {
            sum
        }
    }) == u128::from(n))
}

// The filtered scan split across rayon workers, each summing a disjoint
// read-only chunk of the range, with a final reduction. Confirms 8589869056
// in roughly 23 seconds; trivial parallelism doesn't make up for an
// asymptotically worse scan.
pub fn parallel_filtered_is_perfect(n: u64) -> Result<bool, Error> {
    check_domain(n)?;

    Ok((1..=(n / 2))
        .into_par_iter()
        .filter(|test| n % test == 0)
        .map(u128::from)
        .sum::<u128>()
        == u128::from(n))
}

fn check_domain(n: u64) -> Result<(), Error> {
    if n == 0 {
        Err(Error::OutOfDomain(n))
    } else {
        Ok(())
    }
}

#[test]
fn variants_confirm_known_perfect_numbers() {
    for n in [28, 496, 8128] {
        assert_eq!(for_loop_is_perfect(n), Ok(true), "{} should be perfect", n);
        assert_eq!(filtered_is_perfect(n), Ok(true), "{} should be perfect", n);
        assert_eq!(reduce_is_perfect(n), Ok(true), "{} should be perfect", n);
        assert_eq!(
            parallel_filtered_is_perfect(n),
            Ok(true),
            "{} should be perfect",
            n
        );
    }
}

#[test]
fn variants_reject_non_perfect_numbers() {
    for n in [16, 29, 100, 495] {
        assert_eq!(for_loop_is_perfect(n), Ok(false));
        assert_eq!(filtered_is_perfect(n), Ok(false));
        assert_eq!(reduce_is_perfect(n), Ok(false));
        assert_eq!(parallel_filtered_is_perfect(n), Ok(false));
    }
}

#[test]
fn variants_share_domain_policy_with_fast_path() {
    for n in [0, 1] {
        let expected = crate::is_perfect(n);
        assert_eq!(for_loop_is_perfect(n), expected);
        assert_eq!(filtered_is_perfect(n), expected);
        assert_eq!(reduce_is_perfect(n), expected);
        assert_eq!(parallel_filtered_is_perfect(n), expected);
    }
}

#[test]
fn parallel_scan_agrees_with_sequential_scan() {
    for n in 1..=2000 {
        assert_eq!(
            parallel_filtered_is_perfect(n),
            filtered_is_perfect(n),
            "parallel and sequential scans disagree on {}",
            n
        );
    }
}
