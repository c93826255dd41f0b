//! The three percentile classifiers.
//!
//! Each is a pure function of (measurement, bucket, constant table):
//! - Liverpool: square-root-of-volume normalization, 8 bands
//! - Miskolc: log-linear regression + z-score banding, 8 bands
//! - Toguri: volume-banded lookup table, 6 screening bands

pub mod liverpool;
pub mod miskolc;
pub mod toguri;


pub use liverpool::LiverpoolEvaluation;
pub use miskolc::{MiskolcEvaluation, ZScoreModel};
pub use toguri::ToguriEvaluation;

use crate::error::{NomogramError, Result};

/// Shared precondition for every classifier: positive finite volume,
/// non-negative finite flow.
pub(crate) fn check_inputs(volume_ml: f64, flow_ml_s: f64) -> Result<()> {
    if !volume_ml.is_finite() || volume_ml <= 0.0 {
        return Err(NomogramError::invalid_input(format!(
            "voided volume must be a positive number of ml, got {volume_ml}"
        )));
    }
    if !flow_ml_s.is_finite() || flow_ml_s < 0.0 {
        return Err(NomogramError::invalid_input(format!(
            "flow must be a non-negative number of ml/s, got {flow_ml_s}"
        )));
    }
    Ok(())
}
