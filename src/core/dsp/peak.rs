//! Sub-sample peak refinement

use crate::error::{PitchError, PitchResult};

/// Refined location of a local maximum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakEstimate {
    /// Fractional index of the vertex
    pub position: f64,
    /// Interpolated height at the vertex
    pub value: f64,
}

/// Fit a parabola through `f[x-1]`, `f[x]`, `f[x+1]` and return its vertex.
///
/// `x` must have a neighbour on both sides. A flat neighbourhood (zero
/// curvature) or a non-finite sample has no vertex and is reported as
/// [`PitchError::DomainError`].
pub fn parabolic(f: &[f64], x: usize) -> PitchResult<PeakEstimate> {
    if x == 0 || x + 1 >= f.len() {
        return Err(PitchError::DomainError {
            index: x,
            reason: "peak has no neighbor on both sides",
        });
    }

    let (left, center, right) = (f[x - 1], f[x], f[x + 1]);
    if !(left.is_finite() && center.is_finite() && right.is_finite()) {
        return Err(PitchError::DomainError {
            index: x,
            reason: "non-finite value in neighborhood",
        });
    }

    let curvature = left - 2.0 * center + right;
    if curvature == 0.0 {
        return Err(PitchError::DomainError {
            index: x,
            reason: "flat neighborhood",
        });
    }

    let position = x as f64 + 0.5 * (left - right) / curvature;
    let value = center - 0.25 * (left - right) * (position - x as f64);

    Ok(PeakEstimate { position, value })
}

/// Index of the first maximum in `values`, NaNs ignored.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, b)| v > b) {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampled_parabola(c: f64, h: f64, len: usize) -> Vec<f64> {
        (0..len).map(|i| -(i as f64 - c).powi(2) + h).collect()
    }

    #[test]
    fn test_exact_on_parabola() {
        let f = sampled_parabola(4.3, 2.5, 10);
        for x in 1..9 {
            let peak = parabolic(&f, x).unwrap();
            assert!((peak.position - 4.3).abs() < 1e-9, "x={} -> {}", x, peak.position);
            assert!((peak.value - 2.5).abs() < 1e-9, "x={} -> {}", x, peak.value);
        }
    }

    #[test]
    fn test_symmetric_neighbors_stay_on_index() {
        let peak = parabolic(&[1.0, 3.0, 1.0], 1).unwrap();
        assert_eq!(peak.position, 1.0);
        assert_eq!(peak.value, 3.0);
    }

    #[test]
    fn test_flat_neighborhood_is_domain_error() {
        let err = parabolic(&[2.0, 2.0, 2.0, 2.0], 1).unwrap_err();
        assert!(matches!(err, PitchError::DomainError { index: 1, .. }));

        // Linear ramp also has zero curvature
        assert!(parabolic(&[0.0, 1.0, 2.0], 1).is_err());
    }

    #[test]
    fn test_boundary_index_rejected() {
        let f = [0.0, 1.0, 0.0];
        assert!(parabolic(&f, 0).is_err());
        assert!(parabolic(&f, 2).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let f = [f64::NEG_INFINITY, 1.0, 0.5];
        assert!(parabolic(&f, 1).is_err());
    }

    #[test]
    fn test_argmax_first_wins() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0, 2.0]), Some(1));
        assert_eq!(argmax(&[f64::NAN, 0.5, 0.1]), Some(1));
        assert_eq!(argmax(&[]), None);
    }
}
