//! Plot data handed to the presentation layer: reference-curve polylines
//! plus the single patient coordinate to mark on top of them.

use serde::{Deserialize, Serialize};

/// One (volume, flow) coordinate on a curve or the patient marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub volume_ml: f64,
    pub flow_ml_s: f64,
}

/// One percentile reference curve, independent of any patient's values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceCurve {
    /// Which population percentile the curve marks (5, 10, 25, 50, 75, 90, 95).
    pub percentile: u8,
    /// Display color token for this curve.
    pub color: &'static str,
    pub points: Vec<CurvePoint>,
}

/// Sample a curve function over an inclusive volume domain.
pub fn sample_curve(
    percentile: u8,
    color: &'static str,
    domain: (f64, f64),
    samples: usize,
    f: impl Fn(f64) -> f64,
) -> ReferenceCurve {
    let (lo, hi) = domain;
    let step = (hi - lo) / (samples - 1) as f64;
    let points = (0..samples)
        .map(|i| {
            let v = lo + step * i as f64;
            CurvePoint { volume_ml: v, flow_ml_s: f(v) }
        })
        .collect();
    ReferenceCurve { percentile, color, points }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_curve_covers_domain_endpoints() {
        let curve = sample_curve(50, "#2ecc71", (50.0, 600.0), 100, |v| v * 2.0);
        assert_eq!(curve.points.len(), 100);
        let first = curve.points.first().unwrap();
        let last = curve.points.last().unwrap();
        assert!((first.volume_ml - 50.0).abs() < 1e-9);
        assert!((last.volume_ml - 600.0).abs() < 1e-9);
        assert!((last.flow_ml_s - 1200.0).abs() < 1e-9);
    }
}
