//! Scalar summary statistics
//!
//! Population formulas (divide by N, not N-1) for parity with the numpy
//! defaults the reference pipeline used.

/// Arithmetic mean. Callers guarantee non-empty input (documents are
/// validated before statistics run), but an empty slice maps to 0 rather
/// than NaN to keep the output serializable.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation: `sqrt(mean((x_i - mean(x))^2))`.
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
        assert_eq!(mean(&[5.0]), 5.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_population_std_divides_by_n() {
        // Sample std of [2, 4] would be sqrt(2); population std is 1
        assert_eq!(population_std(&[2.0, 4.0]), 1.0);
        // numpy: np.array([1, 2, 3, 4]).std() == sqrt(1.25)
        assert!((population_std(&[1.0, 2.0, 3.0, 4.0]) - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_std_zero_for_constant_values() {
        assert_eq!(population_std(&[3.0, 3.0, 3.0]), 0.0);
        assert_eq!(population_std(&[7.0]), 0.0);
    }

    #[test]
    fn test_std_nonnegative() {
        assert!(population_std(&[-5.0, 3.0, 0.1]) >= 0.0);
    }
}
