pub mod band;
pub mod curve;
pub mod measurement;

pub use band::{PercentileBand, ScreeningBand, Severity};
pub use curve::{sample_curve, CurvePoint, ReferenceCurve};
pub use measurement::{FlowMetric, Measurement, MiskolcBsa, ToguriBsa};
