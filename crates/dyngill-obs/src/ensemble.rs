//! Per-frame statistics across runs.
//!
//! Runs are rows, frames are columns; every statistic reduces along the
//! run axis. The standard error is the population standard deviation
//! (ddof = 0) divided by `sqrt(n - 1)`, which equals the sample standard
//! deviation divided by `sqrt(n)`.

use crate::ObsError;

/// A numeric sample that can be reduced as `f64`.
pub trait Sample: Copy {
    /// Widen to `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(impl Sample for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        })*
    };
}

impl_sample!(usize, u32, u64, f32, f64);

/// Mean and standard error of one observable, per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleSummary {
    mean: Vec<f64>,
    standard_error: Vec<f64>,
    runs: usize,
}

impl EnsembleSummary {
    /// Reduce `runs` (one row per run) to per-frame mean and standard error.
    ///
    /// # Errors
    ///
    /// Returns `Err(ObsError::TooFewRuns)` for fewer than two runs (the
    /// standard error is undefined), or `Err(ObsError::RaggedRuns)` if
    /// the runs differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyngill_obs::EnsembleSummary;
    ///
    /// let runs = vec![vec![1usize, 4], vec![3, 4]];
    /// let s = EnsembleSummary::from_runs(&runs).unwrap();
    /// assert_eq!(s.mean(), &[2.0, 4.0]);
    /// assert_eq!(s.standard_error(), &[1.0, 0.0]);
    /// ```
    pub fn from_runs<R, T>(runs: &[R]) -> Result<Self, ObsError>
    where
        R: AsRef<[T]>,
        T: Sample,
    {
        if runs.len() < 2 {
            return Err(ObsError::TooFewRuns {
                required: 2,
                got: runs.len(),
            });
        }
        let mean = mean_trajectory(runs)?;
        let n = runs.len() as f64;

        let mut sq = vec![0.0f64; mean.len()];
        for run in runs {
            for ((acc, &x), m) in sq.iter_mut().zip(run.as_ref()).zip(&mean) {
                let d = x.to_f64() - m;
                *acc += d * d;
            }
        }
        let standard_error = sq
            .into_iter()
            .map(|s| (s / n).sqrt() / (n - 1.0).sqrt())
            .collect();

        Ok(Self {
            mean,
            standard_error,
            runs: runs.len(),
        })
    }

    /// Per-frame mean.
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Per-frame standard error of the mean.
    pub fn standard_error(&self) -> &[f64] {
        &self.standard_error
    }

    /// Number of runs reduced.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Returns `true` if the runs had no frames.
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Iterate over `(mean, standard_error)` per frame.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mean
            .iter()
            .copied()
            .zip(self.standard_error.iter().copied())
    }
}

/// Per-frame mean of `runs`.
///
/// # Errors
///
/// Returns `Err(ObsError::TooFewRuns)` for an empty ensemble, or
/// `Err(ObsError::RaggedRuns)` if the runs differ in length.
pub fn mean_trajectory<R, T>(runs: &[R]) -> Result<Vec<f64>, ObsError>
where
    R: AsRef<[T]>,
    T: Sample,
{
    let first = runs.first().ok_or(ObsError::TooFewRuns {
        required: 1,
        got: 0,
    })?;
    let frames = first.as_ref().len();

    let mut sum = vec![0.0f64; frames];
    for (idx, run) in runs.iter().enumerate() {
        let run = run.as_ref();
        if run.len() != frames {
            return Err(ObsError::RaggedRuns {
                run: idx,
                expected: frames,
                got: run.len(),
            });
        }
        for (acc, &x) in sum.iter_mut().zip(run) {
            *acc += x.to_f64();
        }
    }

    let n = runs.len() as f64;
    Ok(sum.into_iter().map(|s| s / n).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hand_computed_statistics() {
        // Frame 0: 0, 2, 4 → mean 2, pop. std sqrt(8/3), sem sqrt(8/3)/sqrt(2).
        let runs = vec![vec![0usize, 5], vec![2, 5], vec![4, 5]];
        let s = EnsembleSummary::from_runs(&runs).unwrap();
        assert_eq!(s.runs(), 3);
        assert_eq!(s.len(), 2);
        assert!((s.mean()[0] - 2.0).abs() < 1e-12);
        let expected = (8.0f64 / 3.0).sqrt() / 2.0f64.sqrt();
        assert!((s.standard_error()[0] - expected).abs() < 1e-12);
        assert_eq!(s.mean()[1], 5.0);
        assert_eq!(s.standard_error()[1], 0.0);
    }

    #[test]
    fn single_run_has_mean_but_no_error() {
        let runs = vec![vec![1.5f64, 2.5]];
        assert_eq!(mean_trajectory(&runs).unwrap(), vec![1.5, 2.5]);
        assert!(matches!(
            EnsembleSummary::from_runs(&runs),
            Err(ObsError::TooFewRuns {
                required: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn empty_ensemble_is_rejected() {
        let runs: Vec<Vec<u32>> = vec![];
        assert!(matches!(
            mean_trajectory(&runs),
            Err(ObsError::TooFewRuns { required: 1, .. })
        ));
    }

    #[test]
    fn ragged_runs_are_rejected() {
        let runs = vec![vec![1u64, 2, 3], vec![1, 2]];
        match EnsembleSummary::from_runs(&runs) {
            Err(ObsError::RaggedRuns { run, expected, got }) => {
                assert_eq!((run, expected, got), (1, 3, 2));
            }
            other => panic!("expected RaggedRuns, got {other:?}"),
        }
    }

    #[test]
    fn accepts_slices_of_slices() {
        let a = [1u32, 3];
        let b = [3u32, 5];
        let runs: [&[u32]; 2] = [&a, &b];
        let s = EnsembleSummary::from_runs(&runs).unwrap();
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![(2.0, 1.0), (4.0, 1.0)]);
    }

    proptest! {
        #[test]
        fn output_length_matches_frames(
            frames in 0usize..50,
            n_runs in 2usize..10,
            seed in any::<u64>(),
        ) {
            let runs: Vec<Vec<usize>> = (0..n_runs)
                .map(|r| (0..frames).map(|f| ((seed as usize) ^ (r * 31 + f * 7)) % 100).collect())
                .collect();
            let s = EnsembleSummary::from_runs(&runs).unwrap();
            prop_assert_eq!(s.mean().len(), frames);
            prop_assert_eq!(s.standard_error().len(), frames);
            prop_assert!(s.standard_error().iter().all(|&e| e >= 0.0 && e.is_finite()));
        }

        #[test]
        fn mean_lies_between_min_and_max(
            runs in prop::collection::vec(prop::collection::vec(0u32..1000, 8), 2..12),
        ) {
            let s = EnsembleSummary::from_runs(&runs).unwrap();
            for (f, &m) in s.mean().iter().enumerate() {
                let lo = runs.iter().map(|r| r[f]).min().unwrap() as f64;
                let hi = runs.iter().map(|r| r[f]).max().unwrap() as f64;
                prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
            }
        }

        #[test]
        fn constant_frames_have_zero_error(value in 0usize..500, n_runs in 2usize..20) {
            let runs = vec![vec![value; 4]; n_runs];
            let s = EnsembleSummary::from_runs(&runs).unwrap();
            prop_assert!(s.standard_error().iter().all(|&e| e == 0.0));
            prop_assert!(s.mean().iter().all(|&m| m == value as f64));
        }
    }
}
