//! # uroflow_core - Deterministic Uroflowmetry Classification Engine
//!
//! This library classifies urinary flow measurements (Qmax, Qave) into
//! percentile bands against three published clinical nomograms and, for the
//! curve-based ones, generates the reference curves to plot them with.
//!
//! ## Features
//! - Liverpool nomogram: square-root-of-volume normalization, 8 bands
//! - Miskolc nomogram: log-linear regression + z-score banding, 8 bands,
//!   with curves drawn from the classifier's own model
//! - Toguri nomogram: volume-banded lookup table, 6 screening bands
//! - JSON string API for easy integration with embedding UIs
//!
//! Every classification is a pure function of the measurement, the selected
//! BSA bucket and a fixed constant table. Nothing is persisted, nothing is
//! shared, nothing is random.

pub mod api;
pub mod data;
pub mod error;
pub mod models;
pub mod nomogram;

// Re-export main API functions
pub use api::{evaluate_liverpool_json, evaluate_miskolc_json, evaluate_toguri_json};

// Re-export core model types
pub use error::{NomogramError, Result};
pub use models::{
    CurvePoint, FlowMetric, Measurement, MiskolcBsa, PercentileBand, ReferenceCurve, ScreeningBand,
    Severity, ToguriBsa,
};

// Re-export the classifiers and their evaluation results
pub use nomogram::{liverpool, miskolc, toguri};
pub use nomogram::{LiverpoolEvaluation, MiskolcEvaluation, ToguriEvaluation, ZScoreModel};
