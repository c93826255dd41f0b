//! Clinical reference data for the three nomograms.
//!
//! All tables are fixed values transcribed from the published nomograms,
//! assembled once behind a `Lazy` and never mutated:
//! - Liverpool: 7 percentile multipliers per flow metric
//! - Miskolc: 5th/95th-percentile regression coefficients per BSA bucket
//! - Toguri: volume-banded percentile threshold rows per BSA bucket
//! - Curve palette and plot domains shared by the curve-based nomograms

use once_cell::sync::Lazy;

use crate::error::{NomogramError, Result};
use crate::models::{FlowMetric, MiskolcBsa, ToguriBsa};

/// Percentiles marked by the 7 reference curves / thresholds, ascending.
pub const CURVE_PERCENTILES: [u8; 7] = [5, 10, 25, 50, 75, 90, 95];

/// Display color token per percentile curve, same order as `CURVE_PERCENTILES`.
pub const CURVE_COLORS: [&str; 7] =
    ["#e74c3c", "#e67e22", "#f1c40f", "#2ecc71", "#27ae60", "#3498db", "#2980b9"];

/// z-score cutoffs for the 8-band scheme (5/10/25/50/75/90/95th percentiles
/// of the standard normal distribution).
pub const Z_CUTOFFS: [f64; 7] = [-1.645, -1.28, -0.675, 0.0, 0.675, 1.28, 1.645];

/// z-range between the 5th and 95th percentile (±1.645 each side).
pub const Z_SPREAD_5_TO_95: f64 = 3.29;

/// Volume plot domain (ml) for Liverpool reference curves.
pub const LIVERPOOL_CURVE_DOMAIN: (f64, f64) = (50.0, 600.0);

/// Volume plot domain (ml) for Miskolc reference curves.
pub const MISKOLC_CURVE_DOMAIN: (f64, f64) = (20.0, 600.0);

/// Points sampled per reference curve.
pub const CURVE_SAMPLES: usize = 100;

/// 5th/95th-percentile regression lines over x = ln(volume + 1):
/// L5 = a5·x + b5, L95 = a95·x + b95.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionCoefficients {
    pub a5: f64,
    pub b5: f64,
    pub a95: f64,
    pub b95: f64,
}

/// One Toguri lookup row: thresholds apply to volumes strictly below
/// `volume_upper_ml`. Thresholds are kept in publication order, which is
/// NOT guaranteed ascending — classification sorts a copy before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToguriRow {
    pub volume_upper_ml: f64,
    pub thresholds: [f64; 5],
}

/// Open-ended upper bound of the last Toguri row.
pub const TOGURI_SENTINEL_ML: f64 = 9999.0;

#[derive(Debug)]
pub struct ReferenceTables {
    liverpool_qmax: [f64; 7],
    liverpool_qave: [f64; 7],
    miskolc: [[RegressionCoefficients; 2]; 3],
    toguri: [[[ToguriRow; 4]; 2]; 2],
}

static TABLES: Lazy<ReferenceTables> = Lazy::new(|| ReferenceTables {
    liverpool_qmax: [0.75, 0.95, 1.20, 1.50, 1.80, 2.10, 2.35],
    liverpool_qave: [0.45, 0.55, 0.70, 0.875, 1.05, 1.20, 1.30],
    // Indexed [MiskolcBsa][FlowMetric].
    miskolc: [
        [
            RegressionCoefficients { a5: 5.7244, b5: -13.6033, a95: 3.8131, b95: 6.5131 },
            RegressionCoefficients { a5: 3.4010, b5: -7.4933, a95: 4.9999, b95: -7.8369 },
        ],
        [
            RegressionCoefficients { a5: 5.2440, b5: -14.1997, a95: 4.9923, b95: 3.4560 },
            RegressionCoefficients { a5: 3.1713, b5: -8.5399, a95: 4.0800, b95: -2.6337 },
        ],
        [
            RegressionCoefficients { a5: 5.4150, b5: -16.1122, a95: 8.5447, b95: -7.4559 },
            RegressionCoefficients { a5: 4.3957, b5: -14.5260, a95: 6.8810, b95: -11.0350 },
        ],
    ],
    // Indexed [ToguriBsa][FlowMetric]. Row thresholds in publication order
    // (5th, 10th, 15th, 20th, 25th percentile); some rows are non-monotonic
    // in the source table.
    toguri: [
        [
            [
                ToguriRow { volume_upper_ml: 62.5, thresholds: [4.0, 4.5, 5.0, 5.5, 6.0] },
                ToguriRow { volume_upper_ml: 112.5, thresholds: [7.3, 9.0, 10.0, 8.5, 10.0] },
                ToguriRow { volume_upper_ml: 162.5, thresholds: [10.0, 12.5, 11.5, 13.0, 14.0] },
                ToguriRow {
                    volume_upper_ml: TOGURI_SENTINEL_ML,
                    thresholds: [11.0, 14.0, 13.5, 13.0, 15.0],
                },
            ],
            [
                ToguriRow { volume_upper_ml: 62.5, thresholds: [3.4, 3.8, 4.5, 4.9, 5.0] },
                ToguriRow { volume_upper_ml: 112.5, thresholds: [4.9, 5.6, 6.0, 6.6, 6.9] },
                ToguriRow { volume_upper_ml: 162.5, thresholds: [7.9, 8.3, 8.9, 9.3, 9.6] },
                ToguriRow {
                    volume_upper_ml: TOGURI_SENTINEL_ML,
                    thresholds: [7.4, 7.9, 9.4, 9.7, 10.0],
                },
            ],
        ],
        [
            [
                ToguriRow { volume_upper_ml: 62.5, thresholds: [5.5, 8.0, 6.0, 7.0, 8.0] },
                ToguriRow { volume_upper_ml: 112.5, thresholds: [11.0, 13.0, 13.5, 13.0, 14.0] },
                ToguriRow { volume_upper_ml: 162.5, thresholds: [14.0, 16.0, 15.0, 17.0, 18.0] },
                ToguriRow {
                    volume_upper_ml: TOGURI_SENTINEL_ML,
                    thresholds: [16.0, 19.0, 17.0, 19.0, 20.0],
                },
            ],
            [
                ToguriRow { volume_upper_ml: 62.5, thresholds: [6.0, 6.3, 6.6, 6.8, 7.4] },
                ToguriRow { volume_upper_ml: 112.5, thresholds: [8.2, 8.8, 9.1, 9.4, 10.1] },
                ToguriRow { volume_upper_ml: 162.5, thresholds: [10.1, 11.4, 11.7, 12.0, 12.0] },
                ToguriRow {
                    volume_upper_ml: TOGURI_SENTINEL_ML,
                    thresholds: [11.1, 11.5, 11.7, 12.4, 13.2],
                },
            ],
        ],
    ],
});

fn metric_index(metric: FlowMetric) -> usize {
    match metric {
        FlowMetric::Qmax => 0,
        FlowMetric::Qave => 1,
    }
}

/// Liverpool percentile multipliers for the given metric, ascending.
pub fn liverpool_limits(metric: FlowMetric) -> &'static [f64; 7] {
    match metric {
        FlowMetric::Qmax => &TABLES.liverpool_qmax,
        FlowMetric::Qave => &TABLES.liverpool_qave,
    }
}

/// Miskolc regression coefficients for the given bucket and metric.
pub fn miskolc_coefficients(bsa: MiskolcBsa, metric: FlowMetric) -> &'static RegressionCoefficients {
    let b = match bsa {
        MiskolcBsa::Small => 0,
        MiskolcBsa::Medium => 1,
        MiskolcBsa::Large => 2,
    };
    &TABLES.miskolc[b][metric_index(metric)]
}

/// Toguri lookup rows for the given bucket and metric, ascending volume bounds.
pub fn toguri_rows(bsa: ToguriBsa, metric: FlowMetric) -> &'static [ToguriRow; 4] {
    let b = match bsa {
        ToguriBsa::Small => 0,
        ToguriBsa::Large => 1,
    };
    &TABLES.toguri[b][metric_index(metric)]
}

/// Configuration-time sanity check over every table. Run by tests (and
/// callable by embedders at startup) so a bad transcription fails loudly
/// instead of producing nonsense bands.
pub fn validate_tables() -> Result<()> {
    for metric in FlowMetric::ALL {
        let limits = liverpool_limits(metric);
        if limits.windows(2).any(|w| w[0] >= w[1]) {
            return Err(NomogramError::computation(format!(
                "Liverpool {} multipliers are not strictly ascending",
                metric.name()
            )));
        }
    }

    for bsa in MiskolcBsa::ALL {
        for metric in FlowMetric::ALL {
            let c = miskolc_coefficients(bsa, metric);
            if c.a5 == c.a95 && c.b5 == c.b95 {
                return Err(NomogramError::computation(format!(
                    "Miskolc {bsa:?}/{} coefficients are degenerate (5th and 95th lines coincide)",
                    metric.name()
                )));
            }
            // The 95th line must sit above the 5th line over the plot domain.
            for v in [MISKOLC_CURVE_DOMAIN.0, MISKOLC_CURVE_DOMAIN.1] {
                let x = (v + 1.0).ln();
                let spread = (c.a95 * x + c.b95) - (c.a5 * x + c.b5);
                if spread <= 0.0 {
                    return Err(NomogramError::computation(format!(
                        "Miskolc {bsa:?}/{} percentile spread is non-positive at {v} ml",
                        metric.name()
                    )));
                }
            }
        }
    }

    for bsa in ToguriBsa::ALL {
        for metric in FlowMetric::ALL {
            let rows = toguri_rows(bsa, metric);
            if rows.windows(2).any(|w| w[0].volume_upper_ml >= w[1].volume_upper_ml) {
                return Err(NomogramError::computation(format!(
                    "Toguri {bsa:?}/{} volume bounds are not ascending",
                    metric.name()
                )));
            }
            if rows[3].volume_upper_ml != TOGURI_SENTINEL_ML {
                return Err(NomogramError::computation(format!(
                    "Toguri {bsa:?}/{} table is missing its open-ended sentinel row",
                    metric.name()
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_pass_validation() {
        validate_tables().expect("shipped reference tables must validate");
    }

    #[test]
    fn test_liverpool_limits_match_publication() {
        assert_eq!(liverpool_limits(FlowMetric::Qmax)[2], 1.20);
        assert_eq!(liverpool_limits(FlowMetric::Qave)[3], 0.875);
    }

    #[test]
    fn test_toguri_source_rows_are_not_all_sorted() {
        // The clinical table is transcribed verbatim, quirks included: the
        // small-BSA Qmax 112.5 row dips from 10.0 back to 8.5.
        let rows = toguri_rows(ToguriBsa::Small, FlowMetric::Qmax);
        let row = rows[1];
        assert_eq!(row.thresholds, [7.3, 9.0, 10.0, 8.5, 10.0]);
        assert!(
            row.thresholds.windows(2).any(|w| w[0] > w[1]),
            "transcription quirk disappeared; sort-before-compare may now hide a table edit"
        );
    }

    #[test]
    fn test_palette_and_percentiles_align() {
        assert_eq!(CURVE_PERCENTILES.len(), CURVE_COLORS.len());
        assert_eq!(CURVE_PERCENTILES.len(), Z_CUTOFFS.len());
    }
}
