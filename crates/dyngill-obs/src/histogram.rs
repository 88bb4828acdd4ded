//! Distribution of end-of-run infected counts.

use crate::ObsError;

/// Count how many runs ended with each number of infected nodes.
///
/// The result has `node_count + 1` bins; bin `k` holds the number of
/// runs that finished with exactly `k` infected. Bin 0 is the number of
/// runs that went extinct.
///
/// # Errors
///
/// Returns `Err(ObsError::ValueOutOfRange)` if any entry exceeds
/// `node_count`.
///
/// # Examples
///
/// ```
/// use dyngill_obs::final_size_histogram;
///
/// let bins = final_size_histogram(&[0, 2, 2, 3], 3).unwrap();
/// assert_eq!(bins, vec![1, 0, 2, 1]);
/// ```
pub fn final_size_histogram(hist: &[usize], node_count: usize) -> Result<Vec<usize>, ObsError> {
    let mut bins = vec![0usize; node_count + 1];
    for &value in hist {
        let bin = bins.get_mut(value).ok_or(ObsError::ValueOutOfRange {
            value,
            max: node_count,
        })?;
        *bin += 1;
    }
    Ok(bins)
}
