pub mod json_api;

pub use json_api::{
    evaluate_liverpool_json, evaluate_miskolc_json, evaluate_toguri_json, BandReport, CurveOverlay,
    EvaluationResponse, LiverpoolRequest, MiskolcRequest, ToguriRequest,
};
