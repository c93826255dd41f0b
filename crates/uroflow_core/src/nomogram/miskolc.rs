//! Miskolc nomogram (pediatric male flow, BSA-bucketed).
//!
//! The published model gives 5th- and 95th-percentile regression lines over
//! x = ln(volume + 1). Classification turns those two lines into a normal
//! model (mean, sd) at the measured volume and bands the z-score of the
//! measured flow. The reference curves come from the same model — curves
//! and classification can never disagree.

use serde::Serialize;

use crate::data::{
    miskolc_coefficients, RegressionCoefficients, CURVE_COLORS, CURVE_PERCENTILES, CURVE_SAMPLES,
    MISKOLC_CURVE_DOMAIN, Z_CUTOFFS, Z_SPREAD_5_TO_95,
};
use crate::error::{NomogramError, Result};
use crate::models::{
    sample_curve, FlowMetric, Measurement, MiskolcBsa, PercentileBand, ReferenceCurve,
};
use crate::nomogram::check_inputs;

/// The normal model implied by the 5th/95th regression lines at one volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZScoreModel {
    pub l5: f64,
    pub l95: f64,
    pub mean: f64,
    pub sd: f64,
}

impl ZScoreModel {
    /// Evaluate the regression lines at the given volume.
    ///
    /// Fails with a `Computation` error when the percentile spread collapses
    /// to zero or inverts: a z-score against a non-positive deviation has no
    /// clinical meaning and must not silently divide by zero.
    pub fn at_volume(volume_ml: f64, coefficients: &RegressionCoefficients) -> Result<Self> {
        let x = (volume_ml + 1.0).ln();
        let l5 = coefficients.a5 * x + coefficients.b5;
        let l95 = coefficients.a95 * x + coefficients.b95;
        let sd = (l95 - l5) / Z_SPREAD_5_TO_95;
        if sd <= 0.0 {
            return Err(NomogramError::computation(format!(
                "degenerate percentile spread at {volume_ml} ml (L5={l5:.4}, L95={l95:.4})"
            )));
        }
        Ok(ZScoreModel { l5, l95, mean: (l5 + l95) / 2.0, sd })
    }

    pub fn z_score(&self, flow_ml_s: f64) -> f64 {
        (flow_ml_s - self.mean) / self.sd
    }
}

/// Band for a z-score against the standard 8-band cutoffs.
pub fn band_from_z(z: f64) -> PercentileBand {
    PercentileBand::from_thresholds(z, &Z_CUTOFFS)
}

/// Classify against a caller-supplied coefficient set.
pub fn classify_with_coefficients(
    volume_ml: f64,
    flow_ml_s: f64,
    coefficients: &RegressionCoefficients,
) -> Result<PercentileBand> {
    check_inputs(volume_ml, flow_ml_s)?;
    let model = ZScoreModel::at_volume(volume_ml, coefficients)?;
    Ok(band_from_z(model.z_score(flow_ml_s)))
}

pub fn classify(
    volume_ml: f64,
    flow_ml_s: f64,
    bsa: MiskolcBsa,
    metric: FlowMetric,
) -> Result<PercentileBand> {
    classify_with_coefficients(volume_ml, flow_ml_s, miskolc_coefficients(bsa, metric))
}

/// Band plus the z-score it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricClassification {
    pub band: PercentileBand,
    pub z_score: f64,
}

/// Both flow metrics of one measurement, classified together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MiskolcEvaluation {
    pub qmax: MetricClassification,
    pub qave: MetricClassification,
}

pub fn evaluate(measurement: &Measurement, bsa: MiskolcBsa) -> Result<MiskolcEvaluation> {
    Ok(MiskolcEvaluation {
        qmax: classify_metric(measurement, bsa, FlowMetric::Qmax)?,
        qave: classify_metric(measurement, bsa, FlowMetric::Qave)?,
    })
}

fn classify_metric(
    measurement: &Measurement,
    bsa: MiskolcBsa,
    metric: FlowMetric,
) -> Result<MetricClassification> {
    let flow = measurement.flow(metric);
    check_inputs(measurement.volume_ml, flow)?;
    let model = ZScoreModel::at_volume(measurement.volume_ml, miskolc_coefficients(bsa, metric))?;
    let z_score = model.z_score(flow);
    Ok(MetricClassification { band: band_from_z(z_score), z_score })
}

/// The 7 percentile curves, drawn from the classifier's own model: per
/// z-cutoff interpolated coefficients a_z = mean_a + z·sd_a (and likewise
/// for b), then y = a_z·ln(x+1) + b_z over the plot domain.
pub fn reference_curves(bsa: MiskolcBsa, metric: FlowMetric) -> Vec<ReferenceCurve> {
    let c = miskolc_coefficients(bsa, metric);
    let mean_a = (c.a95 + c.a5) / 2.0;
    let mean_b = (c.b95 + c.b5) / 2.0;
    let sd_a = (c.a95 - c.a5) / Z_SPREAD_5_TO_95;
    let sd_b = (c.b95 - c.b5) / Z_SPREAD_5_TO_95;

    CURVE_PERCENTILES
        .iter()
        .zip(CURVE_COLORS)
        .zip(Z_CUTOFFS)
        .map(|((&percentile, color), z)| {
            let a_z = mean_a + z * sd_a;
            let b_z = mean_b + z * sd_b;
            sample_curve(percentile, color, MISKOLC_CURVE_DOMAIN, CURVE_SAMPLES, move |v| {
                a_z * (v + 1.0).ln() + b_z
            })
        })
        .collect()
}
