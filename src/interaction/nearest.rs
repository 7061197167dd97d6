//! Pure nearest-sample primitives behind hover tracking.
//!
//! Both functions are side-effect free so they can be unit tested and
//! benchmarked independently of scales and rendering.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::Dataset;

/// Leftmost index `i` in `lo..axis.len()` with `axis[i] >= x`.
///
/// Returns `axis.len()` when every element from `lo` on is smaller than `x`.
/// `axis` must be sorted ascending.
#[must_use]
pub fn bisect_left(axis: &[f64], x: f64, lo: usize) -> usize {
    let lo = lo.min(axis.len());
    lo + axis[lo..].partition_point(|value| *value < x)
}

/// Index of the time sample nearest to `xm`.
///
/// Equidistant candidates resolve to the later index. Positions outside the
/// axis clamp to its first or last index. Returns `None` for an empty axis.
#[must_use]
pub fn nearest_time_index(axis: &[f64], xm: f64) -> Option<usize> {
    match axis.len() {
        0 => None,
        1 => Some(0),
        len => {
            let i1 = bisect_left(axis, xm, 1).min(len - 1);
            let candidates: SmallVec<[(OrderedFloat<f64>, Reverse<usize>); 2]> = [i1 - 1, i1]
                .into_iter()
                .map(|i| (OrderedFloat((xm - axis[i]).abs()), Reverse(i)))
                .collect();
            candidates.into_iter().min().map(|(_, Reverse(i))| i)
        }
    }
}

/// Series whose sample at `index` is numerically closest to `ym`.
///
/// Missing samples never win. Exact ties keep the series that comes first in
/// insertion order. Returns `None` when every series is missing at `index`.
#[must_use]
pub fn nearest_series(dataset: &Dataset, index: usize, ym: f64) -> Option<usize> {
    if !ym.is_finite() {
        return None;
    }

    dataset
        .series()
        .iter()
        .enumerate()
        .filter_map(|(series_index, series)| {
            let value = series.value_at(index)?;
            value
                .is_finite()
                .then(|| (OrderedFloat((value - ym).abs()), series_index))
        })
        .min()
        .map(|(_, series_index)| series_index)
}
