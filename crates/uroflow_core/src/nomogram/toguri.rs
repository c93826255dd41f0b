//! Toguri nomogram (pediatric screening, tabular).
//!
//! No curves here: the published data is a volume-banded table of percentile
//! cut points. Rows are transcribed in publication order, which is not
//! monotonic everywhere, so a sorted copy is compared against — the source
//! table itself is never reordered.

use serde::Serialize;

use crate::data::{toguri_rows, ToguriRow};
use crate::error::{NomogramError, Result};
use crate::models::{FlowMetric, Measurement, ScreeningBand, ToguriBsa};
use crate::nomogram::check_inputs;

/// First row whose upper volume bound strictly exceeds the measured volume.
/// The sentinel row makes exhaustion structurally impossible; it is still
/// checked rather than assumed.
fn select_row(rows: &[ToguriRow; 4], volume_ml: f64) -> Result<&ToguriRow> {
    rows.iter().find(|row| volume_ml < row.volume_upper_ml).ok_or_else(|| {
        NomogramError::internal_invariant(format!(
            "no Toguri volume band matched {volume_ml} ml despite the sentinel row"
        ))
    })
}

pub fn classify(
    volume_ml: f64,
    flow_ml_s: f64,
    bsa: ToguriBsa,
    metric: FlowMetric,
) -> Result<ScreeningBand> {
    check_inputs(volume_ml, flow_ml_s)?;
    let row = select_row(toguri_rows(bsa, metric), volume_ml)?;
    let mut thresholds = row.thresholds;
    thresholds.sort_by(f64::total_cmp);
    Ok(ScreeningBand::from_thresholds(flow_ml_s, &thresholds))
}

/// Both flow metrics of one measurement, classified together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToguriEvaluation {
    pub qmax: ScreeningBand,
    pub qave: ScreeningBand,
}

pub fn evaluate(measurement: &Measurement, bsa: ToguriBsa) -> Result<ToguriEvaluation> {
    Ok(ToguriEvaluation {
        qmax: classify(measurement.volume_ml, measurement.qmax_ml_s, bsa, FlowMetric::Qmax)?,
        qave: classify(measurement.volume_ml, measurement.qave_ml_s, bsa, FlowMetric::Qave)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_case_small_qmax() {
        // V=140 selects the 162.5 row of the small-BSA Qmax table:
        // raw (10.0, 12.5, 11.5, 13.0, 14.0), sorted (10.0, 11.5, 12.5, 13.0, 14.0);
        // Qmax=12 lands in [11.5, 12.5)
        let band = classify(140.0, 12.0, ToguriBsa::Small, FlowMetric::Qmax).unwrap();
        assert_eq!(band, ScreeningBand::P10To15);
        assert_eq!(band.label(), "10-15th percentile");
    }

    #[test]
    fn test_row_selection_boundaries() {
        let rows = toguri_rows(ToguriBsa::Small, FlowMetric::Qmax);
        assert_eq!(select_row(rows, 0.1).unwrap().volume_upper_ml, 62.5);
        assert_eq!(select_row(rows, 62.4).unwrap().volume_upper_ml, 62.5);
        assert_eq!(select_row(rows, 62.5).unwrap().volume_upper_ml, 112.5);
        assert_eq!(select_row(rows, 112.5).unwrap().volume_upper_ml, 162.5);
        assert_eq!(select_row(rows, 162.5).unwrap().volume_upper_ml, 9999.0);
        assert_eq!(select_row(rows, 5000.0).unwrap().volume_upper_ml, 9999.0);
    }

    #[test]
    fn test_unsorted_row_is_sorted_before_comparison() {
        // Small-BSA Qmax 112.5 row is (7.3, 9.0, 10.0, 8.5, 10.0) in the
        // source; sorted it is (7.3, 8.5, 9.0, 10.0, 10.0). A flow of 8.7
        // must land in [8.5, 9.0), not be compared against the raw order.
        let band = classify(100.0, 8.7, ToguriBsa::Small, FlowMetric::Qmax).unwrap();
        assert_eq!(band, ScreeningBand::P10To15);
    }

    #[test]
    fn test_band_extremes() {
        assert_eq!(
            classify(140.0, 0.0, ToguriBsa::Small, FlowMetric::Qmax).unwrap(),
            ScreeningBand::Below5
        );
        assert_eq!(
            classify(140.0, 30.0, ToguriBsa::Small, FlowMetric::Qmax).unwrap(),
            ScreeningBand::Above25
        );
    }

    #[test]
    fn test_large_bsa_uses_its_own_table() {
        // Large-BSA Qmax at V=140: sorted 162.5 row is (14.0, 15.0, 16.0, 17.0, 18.0).
        let band = classify(140.0, 12.0, ToguriBsa::Large, FlowMetric::Qmax).unwrap();
        assert_eq!(band, ScreeningBand::Below5);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert!(classify(0.0, 5.0, ToguriBsa::Small, FlowMetric::Qmax).is_err());
        assert!(classify(100.0, -2.0, ToguriBsa::Small, FlowMetric::Qave).is_err());
    }

    #[test]
    fn test_evaluate_both_metrics() {
        let m = Measurement::new(140.0, 12.0, 8.0).unwrap();
        let eval = evaluate(&m, ToguriBsa::Small).unwrap();
        assert_eq!(eval.qmax, ScreeningBand::P10To15);
        // Small-BSA Qave 162.5 row (7.9, 8.3, 8.9, 9.3, 9.6): 8.0 in [7.9, 8.3)
        assert_eq!(eval.qave, ScreeningBand::P5To10);
    }
}
