//! Two-pointer (sliding window) search template.
//!
//! ## Sweep
//!
//! ```text
//! for each left:
//!     advance right while element `right` fits into the window [left, right)
//!     score the maximal window [left, right)
//!     drop element `left` from the window
//! ```
//!
//! Both pointers only move forward, so the sweep is O(n) calls into the
//! window's hooks. Implementors describe the window state (`Memo`) and how
//! it grows, shrinks and scores; [`SlidingWindow::search`] drives the loop.

/// Hooks describing a sliding window over indices `0..size()`.
pub trait SlidingWindow {
    /// Aggregate state of the current window
    type Memo;

    /// Number of elements in the underlying sequence
    fn size(&self) -> usize;

    /// State of the empty window
    fn initial_memo(&self) -> Self::Memo;

    /// Check if element `right` may join the window described by `memo`
    fn fits(&self, memo: &Self::Memo, right: usize) -> bool;

    /// State after element `right` joins the window
    fn push(&self, memo: Self::Memo, right: usize) -> Self::Memo;

    /// State after element `left` leaves the window
    fn pop(&self, memo: Self::Memo, left: usize) -> Self::Memo;

    /// Score of the maximal window `[left, right)`
    fn score(&self, memo: &Self::Memo, left: usize, right: usize) -> i64;

    /// Best (maximum) score over every maximal window
    ///
    /// Returns `None` for an empty sequence. An element that cannot even
    /// start a window is scored as the empty window and skipped.
    fn search(&self) -> Option<i64> {
        let n = self.size();
        let mut best: Option<i64> = None;
        let mut memo = self.initial_memo();
        let mut right = 0;

        for left in 0..n {
            // The previous window was empty; restart it here
            right = right.max(left);

            while right < n && self.fits(&memo, right) {
                memo = self.push(memo, right);
                right += 1;
            }

            let score = self.score(&memo, left, right);
            best = Some(best.map_or(score, |b| b.max(score)));

            if right > left {
                memo = self.pop(memo, left);
            }
        }

        best
    }
}

/// Window whose product must stay at or below `limit`
struct ProductWindow<'a> {
    values: &'a [u64],
    limit: u64,
}

impl SlidingWindow for ProductWindow<'_> {
    type Memo = u64;

    fn size(&self) -> usize {
        self.values.len()
    }

    fn initial_memo(&self) -> u64 {
        1
    }

    fn fits(&self, product: &u64, right: usize) -> bool {
        // Overflow means the product is certainly above the limit
        product
            .checked_mul(self.values[right])
            .is_some_and(|p| p <= self.limit)
    }

    fn push(&self, product: u64, right: usize) -> u64 {
        product * self.values[right]
    }

    fn pop(&self, product: u64, left: usize) -> u64 {
        product / self.values[left]
    }

    fn score(&self, _product: &u64, left: usize, right: usize) -> i64 {
        (right - left) as i64
    }
}

/// Length of the longest contiguous run whose product is at most `k`
///
/// A single zero makes the whole sequence qualify.
///
/// # Example
///
/// ```
/// use contest_kit::two_pointers::longest_product_at_most;
///
/// // [3, 1, 1, 2] has product 6
/// assert_eq!(longest_product_at_most(&[4, 3, 1, 1, 2, 10, 2], 6), 4);
/// assert_eq!(longest_product_at_most(&[10, 10, 10, 10, 0, 10], 10), 6);
/// ```
pub fn longest_product_at_most(values: &[u64], k: u64) -> usize {
    if values.contains(&0) {
        return values.len();
    }
    let window = ProductWindow { values, limit: k };
    window.search().map_or(0, |best| best as usize)
}

// ============================================================================
// Unit Tests
// ============================================================================
