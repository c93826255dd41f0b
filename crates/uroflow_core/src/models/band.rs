//! Output model: percentile bands and their severity tiers.
//!
//! Two band schemes exist: the 8-band scheme shared by the Liverpool and
//! Miskolc nomograms (7 thresholds) and the 6-band Toguri screening scheme
//! (5 thresholds). The original UI renders the three mid 8-band tiers with
//! one green token; that collapse lives only in `color()` — the bands
//! themselves are never merged.

use serde::{Deserialize, Serialize};

/// Ordinal severity tier attached to a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Pathological,
    VeryLow,
    Low,
    Moderate,
    Average,
    Good,
    Excellent,
    Outstanding,
    High,
    Normal,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Pathological => "Pathological",
            Severity::VeryLow => "Very low",
            Severity::Low => "Low",
            Severity::Moderate => "Moderate",
            Severity::Average => "Average",
            Severity::Good => "Good",
            Severity::Excellent => "Excellent",
            Severity::Outstanding => "Outstanding",
            Severity::High => "High",
            Severity::Normal => "Normal",
        }
    }
}

/// 8-band percentile classification used by Liverpool and Miskolc.
/// Variants are declared in ascending percentile order so `PartialOrd`
/// matches clinical ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileBand {
    Below5,
    P5To10,
    P10To25,
    P25To50,
    P50To75,
    P75To90,
    P90To95,
    Above95,
}

impl PercentileBand {
    pub const ALL: [PercentileBand; 8] = [
        PercentileBand::Below5,
        PercentileBand::P5To10,
        PercentileBand::P10To25,
        PercentileBand::P25To50,
        PercentileBand::P50To75,
        PercentileBand::P75To90,
        PercentileBand::P90To95,
        PercentileBand::Above95,
    ];

    /// Band for a value compared against 7 ascending thresholds:
    /// first band whose upper threshold exceeds the value.
    pub fn from_thresholds(value: f64, thresholds: &[f64; 7]) -> Self {
        for (band, upper) in Self::ALL.iter().zip(thresholds.iter()) {
            if value < *upper {
                return *band;
            }
        }
        PercentileBand::Above95
    }

    pub fn label(&self) -> &'static str {
        match self {
            PercentileBand::Below5 => "< 5th percentile",
            PercentileBand::P5To10 => "5-10th percentile",
            PercentileBand::P10To25 => "10-25th percentile",
            PercentileBand::P25To50 => "25-50th percentile",
            PercentileBand::P50To75 => "50-75th percentile",
            PercentileBand::P75To90 => "75-90th percentile",
            PercentileBand::P90To95 => "90-95th percentile",
            PercentileBand::Above95 => "> 95th percentile",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            PercentileBand::Below5 => Severity::Pathological,
            PercentileBand::P5To10 => Severity::Low,
            PercentileBand::P10To25 => Severity::Moderate,
            PercentileBand::P25To50 => Severity::Average,
            PercentileBand::P50To75 => Severity::Good,
            PercentileBand::P75To90 => Severity::Excellent,
            PercentileBand::P90To95 => Severity::Outstanding,
            PercentileBand::Above95 => Severity::High,
        }
    }

    /// Display color token. The three mid bands share one green on purpose.
    pub fn color(&self) -> &'static str {
        match self {
            PercentileBand::Below5 => "#e74c3c",
            PercentileBand::P5To10 => "#e67e22",
            PercentileBand::P10To25 => "#f1c40f",
            PercentileBand::P25To50 | PercentileBand::P50To75 | PercentileBand::P75To90 => {
                "#27ae60"
            }
            PercentileBand::P90To95 | PercentileBand::Above95 => "#2980b9",
        }
    }
}

/// 6-band screening classification used by the Toguri lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningBand {
    Below5,
    P5To10,
    P10To15,
    P15To20,
    P20To25,
    Above25,
}

impl ScreeningBand {
    pub const ALL: [ScreeningBand; 6] = [
        ScreeningBand::Below5,
        ScreeningBand::P5To10,
        ScreeningBand::P10To15,
        ScreeningBand::P15To20,
        ScreeningBand::P20To25,
        ScreeningBand::Above25,
    ];

    /// Band for a value compared against 5 ascending thresholds.
    pub fn from_thresholds(value: f64, thresholds: &[f64; 5]) -> Self {
        for (band, upper) in Self::ALL.iter().zip(thresholds.iter()) {
            if value < *upper {
                return *band;
            }
        }
        ScreeningBand::Above25
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScreeningBand::Below5 => "< 5th percentile",
            ScreeningBand::P5To10 => "5-10th percentile",
            ScreeningBand::P10To15 => "10-15th percentile",
            ScreeningBand::P15To20 => "15-20th percentile",
            ScreeningBand::P20To25 => "20-25th percentile",
            ScreeningBand::Above25 => "> 25th percentile",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ScreeningBand::Below5 => Severity::Pathological,
            ScreeningBand::P5To10 => Severity::VeryLow,
            ScreeningBand::P10To15 | ScreeningBand::P15To20 => Severity::Low,
            ScreeningBand::P20To25 => Severity::Moderate,
            ScreeningBand::Above25 => Severity::Normal,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScreeningBand::Below5 => "#e74c3c",
            ScreeningBand::P5To10 => "#e67e22",
            ScreeningBand::P10To15 | ScreeningBand::P15To20 => "#f1c40f",
            ScreeningBand::P20To25 => "#f39c12",
            ScreeningBand::Above25 => "#27ae60",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_band_threshold_walk() {
        let t = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert_eq!(PercentileBand::from_thresholds(0.5, &t), PercentileBand::Below5);
        assert_eq!(PercentileBand::from_thresholds(1.0, &t), PercentileBand::P5To10);
        assert_eq!(PercentileBand::from_thresholds(6.99, &t), PercentileBand::P90To95);
        assert_eq!(PercentileBand::from_thresholds(7.0, &t), PercentileBand::Above95);
        assert_eq!(PercentileBand::from_thresholds(100.0, &t), PercentileBand::Above95);
    }

    #[test]
    fn test_screening_band_threshold_walk() {
        let t = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(ScreeningBand::from_thresholds(-1.0, &t), ScreeningBand::Below5);
        assert_eq!(ScreeningBand::from_thresholds(4.5, &t), ScreeningBand::P20To25);
        assert_eq!(ScreeningBand::from_thresholds(5.0, &t), ScreeningBand::Above25);
    }

    #[test]
    fn test_band_ordering_matches_declaration() {
        assert!(PercentileBand::Below5 < PercentileBand::Above95);
        assert!(ScreeningBand::P10To15 < ScreeningBand::P15To20);
    }

    #[test]
    fn test_mid_band_color_collapse_keeps_bands_distinct() {
        assert_eq!(PercentileBand::P25To50.color(), PercentileBand::P75To90.color());
        assert_ne!(PercentileBand::P25To50.severity(), PercentileBand::P75To90.severity());
    }
}
