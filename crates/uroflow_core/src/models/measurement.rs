//! Input model: a single voiding measurement plus the caller-selected
//! body-surface-area buckets the pediatric nomograms key on.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{NomogramError, Result};

/// One uroflowmetry evaluation input. Transient: built per call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Voided volume in ml. Must be finite and > 0.
    pub volume_ml: f64,
    /// Maximum flow rate in ml/s. Must be finite and >= 0.
    pub qmax_ml_s: f64,
    /// Average flow rate in ml/s. Must be finite and >= 0.
    pub qave_ml_s: f64,
}

impl Measurement {
    pub fn new(volume_ml: f64, qmax_ml_s: f64, qave_ml_s: f64) -> Result<Self> {
        if !volume_ml.is_finite() || volume_ml <= 0.0 {
            return Err(NomogramError::invalid_input(format!(
                "voided volume must be a positive number of ml, got {volume_ml}"
            )));
        }
        for (name, flow) in [("Qmax", qmax_ml_s), ("Qave", qave_ml_s)] {
            if !flow.is_finite() || flow < 0.0 {
                return Err(NomogramError::invalid_input(format!(
                    "{name} must be a non-negative number of ml/s, got {flow}"
                )));
            }
        }
        Ok(Self { volume_ml, qmax_ml_s, qave_ml_s })
    }

    pub fn flow(&self, metric: FlowMetric) -> f64 {
        match metric {
            FlowMetric::Qmax => self.qmax_ml_s,
            FlowMetric::Qave => self.qave_ml_s,
        }
    }
}

/// Which flow value a classification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowMetric {
    Qmax,
    Qave,
}

impl FlowMetric {
    pub const ALL: [FlowMetric; 2] = [FlowMetric::Qmax, FlowMetric::Qave];

    pub fn name(&self) -> &'static str {
        match self {
            FlowMetric::Qmax => "Qmax",
            FlowMetric::Qave => "Qave",
        }
    }
}

/// Miskolc nomogram body-surface-area bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MiskolcBsa {
    /// BSA < 0.92 m²
    Small,
    /// 0.92 m² <= BSA <= 1.42 m²
    Medium,
    /// BSA > 1.42 m²
    Large,
}

impl MiskolcBsa {
    pub const ALL: [MiskolcBsa; 3] = [MiskolcBsa::Small, MiskolcBsa::Medium, MiskolcBsa::Large];

    /// Bucket a measured body surface area (m²).
    pub fn from_bsa(bsa_m2: f64) -> Result<Self> {
        if !bsa_m2.is_finite() || bsa_m2 <= 0.0 {
            return Err(NomogramError::invalid_input(format!(
                "body surface area must be a positive number of m², got {bsa_m2}"
            )));
        }
        Ok(if bsa_m2 < 0.92 {
            MiskolcBsa::Small
        } else if bsa_m2 <= 1.42 {
            MiskolcBsa::Medium
        } else {
            MiskolcBsa::Large
        })
    }
}

impl FromStr for MiskolcBsa {
    type Err = NomogramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(MiskolcBsa::Small),
            "medium" => Ok(MiskolcBsa::Medium),
            "large" => Ok(MiskolcBsa::Large),
            other => Err(NomogramError::invalid_input(format!(
                "unknown Miskolc BSA category '{other}' (expected small, medium or large)"
            ))),
        }
    }
}

/// Toguri nomogram body-surface-area bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToguriBsa {
    /// BSA < 1.1 m²
    Small,
    /// BSA >= 1.1 m²
    Large,
}

impl ToguriBsa {
    pub const ALL: [ToguriBsa; 2] = [ToguriBsa::Small, ToguriBsa::Large];

    pub fn from_bsa(bsa_m2: f64) -> Result<Self> {
        if !bsa_m2.is_finite() || bsa_m2 <= 0.0 {
            return Err(NomogramError::invalid_input(format!(
                "body surface area must be a positive number of m², got {bsa_m2}"
            )));
        }
        Ok(if bsa_m2 < 1.1 { ToguriBsa::Small } else { ToguriBsa::Large })
    }
}

impl FromStr for ToguriBsa {
    type Err = NomogramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(ToguriBsa::Small),
            "large" => Ok(ToguriBsa::Large),
            other => Err(NomogramError::invalid_input(format!(
                "unknown Toguri BSA category '{other}' (expected small or large)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_rejects_non_positive_volume() {
        assert!(Measurement::new(0.0, 10.0, 5.0).is_err(), "zero volume must be rejected");
        assert!(Measurement::new(-50.0, 10.0, 5.0).is_err(), "negative volume must be rejected");
        assert!(Measurement::new(f64::NAN, 10.0, 5.0).is_err(), "NaN volume must be rejected");
    }

    #[test]
    fn test_measurement_rejects_negative_flow() {
        assert!(Measurement::new(200.0, -1.0, 5.0).is_err());
        assert!(Measurement::new(200.0, 10.0, f64::INFINITY).is_err());
        assert!(Measurement::new(200.0, 0.0, 0.0).is_ok(), "zero flow is a valid measurement");
    }

    #[test]
    fn test_miskolc_bsa_bucketing() {
        assert_eq!(MiskolcBsa::from_bsa(0.80).unwrap(), MiskolcBsa::Small);
        assert_eq!(MiskolcBsa::from_bsa(0.92).unwrap(), MiskolcBsa::Medium);
        assert_eq!(MiskolcBsa::from_bsa(1.42).unwrap(), MiskolcBsa::Medium);
        assert_eq!(MiskolcBsa::from_bsa(1.43).unwrap(), MiskolcBsa::Large);
        assert!(MiskolcBsa::from_bsa(-0.5).is_err());
    }

    #[test]
    fn test_toguri_bsa_bucketing() {
        assert_eq!(ToguriBsa::from_bsa(1.09).unwrap(), ToguriBsa::Small);
        assert_eq!(ToguriBsa::from_bsa(1.1).unwrap(), ToguriBsa::Large);
    }

    #[test]
    fn test_bsa_from_str() {
        assert_eq!("Medium".parse::<MiskolcBsa>().unwrap(), MiskolcBsa::Medium);
        assert!("tiny".parse::<MiskolcBsa>().is_err());
        assert_eq!("large".parse::<ToguriBsa>().unwrap(), ToguriBsa::Large);
        assert!("medium".parse::<ToguriBsa>().is_err(), "Toguri has no medium bucket");
    }
}
