//! Liverpool nomogram (adult male flow, under 50 years).
//!
//! Classification normalizes flow by the square root of voided volume and
//! walks the 7 published percentile multipliers. The reference curves are
//! the same multipliers drawn as y = t·sqrt(x) over the plot domain.

use serde::Serialize;

use crate::data::{
    liverpool_limits, CURVE_COLORS, CURVE_PERCENTILES, CURVE_SAMPLES, LIVERPOOL_CURVE_DOMAIN,
};
use crate::error::Result;
use crate::models::{sample_curve, FlowMetric, Measurement, PercentileBand, ReferenceCurve};
use crate::nomogram::check_inputs;

/// flow / sqrt(volume), the quantity the thresholds apply to.
pub fn normalized_flow(volume_ml: f64, flow_ml_s: f64) -> Result<f64> {
    check_inputs(volume_ml, flow_ml_s)?;
    Ok(flow_ml_s / volume_ml.sqrt())
}

pub fn classify(volume_ml: f64, flow_ml_s: f64, metric: FlowMetric) -> Result<PercentileBand> {
    let normalized = normalized_flow(volume_ml, flow_ml_s)?;
    Ok(PercentileBand::from_thresholds(normalized, liverpool_limits(metric)))
}

/// Band plus the normalized value it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricClassification {
    pub band: PercentileBand,
    pub normalized: f64,
}

/// Both flow metrics of one measurement, classified together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiverpoolEvaluation {
    pub qmax: MetricClassification,
    pub qave: MetricClassification,
}

pub fn evaluate(measurement: &Measurement) -> Result<LiverpoolEvaluation> {
    Ok(LiverpoolEvaluation {
        qmax: classify_metric(measurement, FlowMetric::Qmax)?,
        qave: classify_metric(measurement, FlowMetric::Qave)?,
    })
}

fn classify_metric(measurement: &Measurement, metric: FlowMetric) -> Result<MetricClassification> {
    let normalized = normalized_flow(measurement.volume_ml, measurement.flow(metric))?;
    Ok(MetricClassification {
        band: PercentileBand::from_thresholds(normalized, liverpool_limits(metric)),
        normalized,
    })
}

/// The 7 percentile curves y = t·sqrt(x) over the plot domain. Independent
/// of any patient's values.
pub fn reference_curves(metric: FlowMetric) -> Vec<ReferenceCurve> {
    let limits = liverpool_limits(metric);
    CURVE_PERCENTILES
        .iter()
        .zip(CURVE_COLORS)
        .zip(limits)
        .map(|((&percentile, color), &factor)| {
            sample_curve(percentile, color, LIVERPOOL_CURVE_DOMAIN, CURVE_SAMPLES, move |v| {
                factor * v.sqrt()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case_qmax() {
        // V=400, Qmax=25: 25 / sqrt(400) = 1.25, inside [1.20, 1.50)
        let band = classify(400.0, 25.0, FlowMetric::Qmax).unwrap();
        assert_eq!(band, PercentileBand::P10To25);
        assert_eq!(band.label(), "10-25th percentile");
        assert_eq!(band.severity().name(), "Moderate");
    }

    #[test]
    fn test_reference_case_qave() {
        // V=400, Qave=15: 15 / 20 = 0.75, inside [0.70, 0.875)
        let band = classify(400.0, 15.0, FlowMetric::Qave).unwrap();
        assert_eq!(band, PercentileBand::P10To25);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(400.0, 0.0, FlowMetric::Qmax).unwrap(), PercentileBand::Below5);
        assert_eq!(classify(400.0, 60.0, FlowMetric::Qmax).unwrap(), PercentileBand::Above95);
    }

    #[test]
    fn test_exact_threshold_goes_to_upper_band() {
        // 24 / sqrt(400) = 1.20 exactly: bands are half-open, [1.20, 1.50)
        assert_eq!(classify(400.0, 24.0, FlowMetric::Qmax).unwrap(), PercentileBand::P10To25);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(classify(0.0, 10.0, FlowMetric::Qmax).is_err());
        assert!(classify(400.0, -1.0, FlowMetric::Qmax).is_err());
    }

    #[test]
    fn test_evaluate_covers_both_metrics() {
        let m = Measurement::new(400.0, 25.0, 15.0).unwrap();
        let eval = evaluate(&m).unwrap();
        assert_eq!(eval.qmax.band, PercentileBand::P10To25);
        assert_eq!(eval.qave.band, PercentileBand::P10To25);
        assert!((eval.qmax.normalized - 1.25).abs() < 1e-12);
        assert!((eval.qave.normalized - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_curves_are_sqrt_shaped_and_ordered() {
        let curves = reference_curves(FlowMetric::Qmax);
        assert_eq!(curves.len(), 7);
        assert_eq!(curves[0].percentile, 5);
        assert_eq!(curves[6].percentile, 95);
        for curve in &curves {
            assert_eq!(curve.points.len(), CURVE_SAMPLES);
            // Monotonically increasing in volume.
            assert!(curve.points.windows(2).all(|w| w[1].flow_ml_s > w[0].flow_ml_s));
        }
        // Every sampled point of the 50th percentile curve lies on t·sqrt(v).
        for point in &curves[3].points {
            assert!((point.flow_ml_s - 1.50 * point.volume_ml.sqrt()).abs() < 1e-9);
        }
    }
}
