//! Binary search over a monotone predicate.
//!
//! ## Overview
//!
//! Given a predicate that flips exactly once over an integer range,
//!
//! ```text
//! x:     left ... s-1   s   s+1 ... right
//! pred:  F    ... F     T   T   ... T
//! ```
//!
//! [`first_true`] finds `s` with O(log(right - left)) predicate calls.
//!
//! ## Examples
//!
//! ```
//! use contest_kit::search::first_true;
//!
//! // Smallest x with x * x >= 2000
//! assert_eq!(first_true(0, 100, |x| x * x >= 2000), Some(45));
//!
//! // Never true on the range
//! assert_eq!(first_true(0, 100, |x| x >= 200), None);
//! ```

/// Smallest `x` in `[left, right]` with `pred(x)`
///
/// `pred` must be monotone on the range (all `false`, then all `true`).
///
/// # Returns
///
/// * `Some(left)` - If `pred` already holds at `left`
/// * `Some(x)` - The first `x` where `pred` turns true
/// * `None` - If `pred(right)` is false, or the range is empty (`left > right`)
pub fn first_true<P>(left: i64, right: i64, mut pred: P) -> Option<i64>
where
    P: FnMut(i64) -> bool,
{
    if left > right {
        return None;
    }
    if pred(left) {
        return Some(left);
    }
    if !pred(right) {
        return None;
    }

    // pred(lo) == false, pred(hi) == true
    let (mut lo, mut hi) = (left, right);
    // Unsigned distance: `hi - lo` can exceed i64::MAX
    while hi.abs_diff(lo) > 1 {
        let mid = lo.wrapping_add_unsigned(hi.abs_diff(lo) / 2);
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Some(hi)
}

/// Largest `x` in `[left, right]` with `pred(x)`
///
/// Mirror of [`first_true`] for predicates that are all `true`, then all
/// `false`.
///
/// # Example
///
/// ```
/// use contest_kit::search::last_true;
///
/// // Largest x with x * x <= 2000
/// assert_eq!(last_true(0, 100, |x| x * x <= 2000), Some(44));
/// ```
pub fn last_true<P>(left: i64, right: i64, mut pred: P) -> Option<i64>
where
    P: FnMut(i64) -> bool,
{
    first_true(left, right, |x| !pred(x)).map_or(
        // Never flips to false: either everything holds or the range is empty
        if left <= right { Some(right) } else { None },
        |x| if x == left { None } else { Some(x - 1) },
    )
}

// ============================================================================
// Unit Tests
// ============================================================================
