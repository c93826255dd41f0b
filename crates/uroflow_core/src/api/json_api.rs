//! JSON string boundary for embedding UIs.
//!
//! Requests carry a `schema_version` (currently 1) and the raw measurement
//! scalars; responses carry one report per flow metric and, on request, the
//! reference-curve overlay with the patient point to mark. All functions
//! return `Result<String, String>` so the embedding layer only ever deals
//! in strings.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::NomogramError;
use crate::models::{CurvePoint, FlowMetric, Measurement, MiskolcBsa, ReferenceCurve, ToguriBsa};
use crate::nomogram::{liverpool, miskolc, toguri};

const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct LiverpoolRequest {
    pub schema_version: u8,
    /// Voided volume in ml.
    pub volume: f64,
    /// Maximum flow in ml/s.
    pub qmax: f64,
    /// Average flow in ml/s.
    pub qave: f64,
    /// Include the reference-curve overlay in the response.
    #[serde(default)]
    pub include_curves: bool,
}

#[derive(Debug, Deserialize)]
pub struct MiskolcRequest {
    pub schema_version: u8,
    pub volume: f64,
    pub qmax: f64,
    pub qave: f64,
    /// "small" | "medium" | "large"
    pub bsa_category: String,
    #[serde(default)]
    pub include_curves: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToguriRequest {
    pub schema_version: u8,
    pub volume: f64,
    pub qmax: f64,
    pub qave: f64,
    /// "small" | "large"
    pub bsa_category: String,
}

/// One classified flow metric, presentation-ready.
#[derive(Debug, Serialize)]
pub struct BandReport {
    pub label: String,
    pub severity: String,
    pub color: String,
    /// Liverpool only: flow / sqrt(volume).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<f64>,
    /// Miskolc only: z-score under the regression model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_score: Option<f64>,
}

/// Curve families plus the patient coordinates to superimpose.
#[derive(Debug, Serialize)]
pub struct CurveOverlay {
    pub qmax: Vec<ReferenceCurve>,
    pub qave: Vec<ReferenceCurve>,
    pub patient_qmax: CurvePoint,
    pub patient_qave: CurvePoint,
}

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub qmax: BandReport,
    pub qave: BandReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curves: Option<CurveOverlay>,
}

fn parse_request<'a, T: Deserialize<'a>>(request_json: &'a str) -> Result<T, String> {
    serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))
}

fn check_schema_version(version: u8) -> Result<(), String> {
    if version != SCHEMA_VERSION {
        warn!(version, "rejected request with unsupported schema version");
        return Err(format!("Unsupported schema version: {}", version));
    }
    Ok(())
}

fn core_err(e: NomogramError) -> String {
    warn!(error = %e, "evaluation rejected");
    e.to_string()
}

fn to_json(response: &EvaluationResponse) -> Result<String, String> {
    serde_json::to_string(response).map_err(|e| format!("Failed to serialize response: {}", e))
}

fn patient_points(m: &Measurement) -> (CurvePoint, CurvePoint) {
    (
        CurvePoint { volume_ml: m.volume_ml, flow_ml_s: m.qmax_ml_s },
        CurvePoint { volume_ml: m.volume_ml, flow_ml_s: m.qave_ml_s },
    )
}

pub fn evaluate_liverpool_json(request_json: &str) -> Result<String, String> {
    debug!("evaluate_liverpool_json called");
    let request: LiverpoolRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    let measurement =
        Measurement::new(request.volume, request.qmax, request.qave).map_err(core_err)?;
    let evaluation = liverpool::evaluate(&measurement).map_err(core_err)?;

    let curves = request.include_curves.then(|| {
        let (patient_qmax, patient_qave) = patient_points(&measurement);
        CurveOverlay {
            qmax: liverpool::reference_curves(FlowMetric::Qmax),
            qave: liverpool::reference_curves(FlowMetric::Qave),
            patient_qmax,
            patient_qave,
        }
    });

    to_json(&EvaluationResponse {
        qmax: BandReport {
            label: evaluation.qmax.band.label().to_string(),
            severity: evaluation.qmax.band.severity().name().to_string(),
            color: evaluation.qmax.band.color().to_string(),
            normalized: Some(evaluation.qmax.normalized),
            z_score: None,
        },
        qave: BandReport {
            label: evaluation.qave.band.label().to_string(),
            severity: evaluation.qave.band.severity().name().to_string(),
            color: evaluation.qave.band.color().to_string(),
            normalized: Some(evaluation.qave.normalized),
            z_score: None,
        },
        curves,
    })
}

pub fn evaluate_miskolc_json(request_json: &str) -> Result<String, String> {
    debug!("evaluate_miskolc_json called");
    let request: MiskolcRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    let bsa: MiskolcBsa = request.bsa_category.parse().map_err(core_err)?;
    let measurement =
        Measurement::new(request.volume, request.qmax, request.qave).map_err(core_err)?;
    let evaluation = miskolc::evaluate(&measurement, bsa).map_err(core_err)?;

    let curves = request.include_curves.then(|| {
        let (patient_qmax, patient_qave) = patient_points(&measurement);
        CurveOverlay {
            qmax: miskolc::reference_curves(bsa, FlowMetric::Qmax),
            qave: miskolc::reference_curves(bsa, FlowMetric::Qave),
            patient_qmax,
            patient_qave,
        }
    });

    to_json(&EvaluationResponse {
        qmax: BandReport {
            label: evaluation.qmax.band.label().to_string(),
            severity: evaluation.qmax.band.severity().name().to_string(),
            color: evaluation.qmax.band.color().to_string(),
            normalized: None,
            z_score: Some(evaluation.qmax.z_score),
        },
        qave: BandReport {
            label: evaluation.qave.band.label().to_string(),
            severity: evaluation.qave.band.severity().name().to_string(),
            color: evaluation.qave.band.color().to_string(),
            normalized: None,
            z_score: Some(evaluation.qave.z_score),
        },
        curves,
    })
}

pub fn evaluate_toguri_json(request_json: &str) -> Result<String, String> {
    debug!("evaluate_toguri_json called");
    let request: ToguriRequest = parse_request(request_json)?;
    check_schema_version(request.schema_version)?;

    let bsa: ToguriBsa = request.bsa_category.parse().map_err(core_err)?;
    let measurement =
        Measurement::new(request.volume, request.qmax, request.qave).map_err(core_err)?;
    let evaluation = toguri::evaluate(&measurement, bsa).map_err(core_err)?;

    to_json(&EvaluationResponse {
        qmax: BandReport {
            label: evaluation.qmax.label().to_string(),
            severity: evaluation.qmax.severity().name().to_string(),
            color: evaluation.qmax.color().to_string(),
            normalized: None,
            z_score: None,
        },
        qave: BandReport {
            label: evaluation.qave.label().to_string(),
            severity: evaluation.qave.severity().name().to_string(),
            color: evaluation.qave.color().to_string(),
            normalized: None,
            z_score: None,
        },
        curves: None,
    })
}
