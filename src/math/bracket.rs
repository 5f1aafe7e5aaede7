/// Returns the index of the first element of `grid` strictly greater
/// than `value`, or `None` if no element exceeds it.
///
/// `grid` must be sorted ascending. On success the returned index `i`
/// satisfies `grid[i - 1] <= value < grid[i]` (for `i > 0`), so
/// `grid[i - 1]` and `grid[i]` are the bracketing pair around `value`
/// and their difference is the local grid spacing. A query equal to a
/// grid point brackets into the segment starting at that point.
///
/// Binary search, O(log n).
#[must_use]
pub fn upper_bracket(value: f64, grid: &[f64]) -> Option<usize> {
    let (&first, &last) = (grid.first()?, grid.last()?);
    if first > value {
        return Some(0);
    }
    if last <= value {
        return None;
    }

    // Invariant: grid[start] <= value < grid[end].
    let mut start = 0;
    let mut end = grid.len() - 1;
    while end - start > 1 {
        let mid = start + (end - start) / 2;
        if grid[mid] <= value {
            start = mid;
        } else {
            end = mid;
        }
    }
    Some(end)
}
