//! Point-in-time history for a single storage value.
//!
//! A history is an append-only `VecMapper` of `(timepoint, value)` pairs,
//! sorted by timepoint. Writing twice at the same timepoint overwrites the
//! last entry instead of growing the history.

multiversx_sc::imports!();

use multiversx_sc::api::StorageMapperApi;
use multiversx_sc::codec::{NestedDecode, NestedEncode};

pub type History<SA, T> = VecMapper<SA, (u64, T)>;

pub fn push<SA, T>(history: &mut History<SA, T>, timepoint: u64, value: T)
where
    SA: StorageMapperApi,
    T: NestedEncode + NestedDecode + 'static,
{
    let len = history.len();
    if len > 0 {
        let (last_timepoint, _) = history.get(len);
        if last_timepoint == timepoint {
            history.set(len, &(timepoint, value));
            return;
        }
    }
    history.push(&(timepoint, value));
}

pub fn latest<SA, T>(history: &History<SA, T>) -> Option<T>
where
    SA: StorageMapperApi,
    T: NestedEncode + NestedDecode + 'static,
{
    let len = history.len();
    if len == 0 {
        return None;
    }
    let (_, value) = history.get(len);
    Some(value)
}

/// Value of the last entry written at or before `timepoint`.
pub fn value_at<SA, T>(history: &History<SA, T>, timepoint: u64) -> Option<T>
where
    SA: StorageMapperApi,
    T: NestedEncode + NestedDecode + 'static,
{
    let position = upper_bound(history.len(), timepoint, |index| history.get(index + 1).0);
    if position == 0 {
        return None;
    }
    let (_, value) = history.get(position);
    Some(value)
}

/// Value of the last entry written strictly before `timepoint`.
pub fn value_before<SA, T>(history: &History<SA, T>, timepoint: u64) -> Option<T>
where
    SA: StorageMapperApi,
    T: NestedEncode + NestedDecode + 'static,
{
    if timepoint == 0 {
        return None;
    }
    value_at(history, timepoint - 1)
}

/// Number of leading entries whose timepoint is `<= timepoint`.
///
/// `timepoint_at` reads the zero-based entry's timepoint; entries must be
/// sorted ascending.
pub fn upper_bound<F>(len: usize, timepoint: u64, timepoint_at: F) -> usize
where
    F: Fn(usize) -> u64,
{
    let mut low = 0usize;
    let mut high = len;
    while low < high {
        let mid = low + (high - low) / 2;
        if timepoint_at(mid) > timepoint {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}
