//! Window function implementations

use std::f64::consts::PI;

const BH_A0: f64 = 0.35875;
const BH_A1: f64 = 0.48829;
const BH_A2: f64 = 0.14128;
const BH_A3: f64 = 0.01168;

/// Symmetric 4-term Blackman-Harris window.
///
/// Endpoints are equal (denominator `size - 1`), which is the form used for
/// one-shot analysis of a whole clip rather than overlapping frames.
pub fn blackman_harris(size: usize) -> Vec<f64> {
    if size <= 1 {
        return vec![1.0; size];
    }
    let n = (size - 1) as f64;
    (0..size)
        .map(|i| {
            let x = 2.0 * PI * i as f64 / n;
            BH_A0 - BH_A1 * x.cos() + BH_A2 * (2.0 * x).cos() - BH_A3 * (3.0 * x).cos()
        })
        .collect()
}

/// Multiply `samples` element-wise by a Blackman-Harris window of equal length
pub fn apply_blackman_harris(samples: &[f64]) -> Vec<f64> {
    samples
        .iter()
        .zip(blackman_harris(samples.len()))
        .map(|(&s, w)| s * w)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blackman_harris_shape() {
        let window = blackman_harris(65);
        assert_eq!(window.len(), 65);
        // a0 - a1 + a2 - a3 at the edges
        assert!((window[0] - 6.0e-5).abs() < 1e-8);
        assert!((window[64] - window[0]).abs() < 1e-12);
        assert!((window[32] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(blackman_harris(0).is_empty());
        assert_eq!(blackman_harris(1), vec![1.0]);
    }

    #[test]
    fn test_apply_scales_samples() {
        let windowed = apply_blackman_harris(&[2.0; 5]);
        assert!((windowed[2] - 2.0).abs() < 1e-9);
        assert!(windowed[0] < 1e-3);
    }
}
