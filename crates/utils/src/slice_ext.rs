use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use podtools_utils::SliceExt;
    /// # use podtools_utils::Error;
    /// assert_eq!([1.1, 0.5, 2.2].try_min(), Ok(0.5));
    /// assert_eq!([1.1, f64::NAN, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// Floats do not implement `Ord` so `min()` is not available on an
    /// iterator of them. This uses `total_cmp` after rejecting undefined
    /// values, so the ordering is always well defined.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// Same rules as [try_min()](SliceExt::try_min).
    ///
    /// ```rust
    /// # use podtools_utils::SliceExt;
    /// assert_eq!([1.1, 0.5, 2.2].try_max(), Ok(2.2));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Minimum and maximum together as `(min, max)`
    ///
    /// ```rust
    /// # use podtools_utils::SliceExt;
    /// assert_eq!([3.0, -1.0, 2.0].try_range(), Ok((-1.0, 3.0)));
    /// ```
    fn try_range(&self) -> Result<(T, T)>;

    /// Number of NAN or infinite entries in the slice
    ///
    /// ```rust
    /// # use podtools_utils::SliceExt;
    /// assert_eq!([1.0, f64::NAN, f64::INFINITY].count_non_finite(), 2);
    /// ```
    fn count_non_finite(&self) -> usize;
}

impl SliceExt<f64> for [f64] {
    fn try_min(&self) -> Result<f64> {
        check_values(self)?;
        self.iter()
            .copied()
            .min_by(|a, b| a.total_cmp(b))
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<f64> {
        check_values(self)?;
        self.iter()
            .copied()
            .max_by(|a, b| a.total_cmp(b))
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_range(&self) -> Result<(f64, f64)> {
        Ok((self.try_min()?, self.try_max()?))
    }

    fn count_non_finite(&self) -> usize {
        self.iter().filter(|v| !v.is_finite()).count()
    }
}

/// Empty slices and undefined values are both error cases
fn check_values(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::SliceContainsNoValues);
    }

    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::SliceContainsUndefinedValues);
    }

    Ok(())
}
