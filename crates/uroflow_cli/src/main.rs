//! Uroflow CLI
//!
//! Command-line front end for the classification engine: one subcommand per
//! nomogram, printing either a short text report or the raw JSON API
//! response the embedding UIs consume.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use uroflow_core::{liverpool, miskolc, toguri, Measurement, MiskolcBsa, ToguriBsa};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "uroflow")]
#[command(about = "Percentile classification of uroflowmetry measurements", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Liverpool nomogram (adult male flow, under 50 years)
    Liverpool {
        /// Voided volume in ml
        #[arg(long)]
        volume: f64,

        /// Maximum flow rate in ml/s
        #[arg(long)]
        qmax: f64,

        /// Average flow rate in ml/s
        #[arg(long)]
        qave: f64,

        /// Include the reference-curve overlay (JSON output only)
        #[arg(long, default_value = "false")]
        curves: bool,

        /// Print the raw JSON API response instead of a text report
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Miskolc nomogram (pediatric male flow, BSA-bucketed)
    Miskolc {
        #[arg(long)]
        volume: f64,

        #[arg(long)]
        qmax: f64,

        #[arg(long)]
        qave: f64,

        /// Body-surface-area bucket: small, medium or large
        #[arg(long)]
        bsa: String,

        /// Include the reference-curve overlay (JSON output only)
        #[arg(long, default_value = "false")]
        curves: bool,

        /// Print the raw JSON API response instead of a text report
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Toguri nomogram (pediatric screening table, no curves)
    Toguri {
        #[arg(long)]
        volume: f64,

        #[arg(long)]
        qmax: f64,

        #[arg(long)]
        qave: f64,

        /// Body-surface-area bucket: small or large
        #[arg(long)]
        bsa: String,

        /// Print the raw JSON API response instead of a text report
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Liverpool { volume, qmax, qave, curves, json } => {
            if json {
                let request = serde_json::json!({
                    "schema_version": 1,
                    "volume": volume,
                    "qmax": qmax,
                    "qave": qave,
                    "include_curves": curves,
                })
                .to_string();
                let response = uroflow_core::evaluate_liverpool_json(&request)
                    .map_err(|e| anyhow::anyhow!(e))?;
                println!("{response}");
            } else {
                let measurement = Measurement::new(volume, qmax, qave)?;
                let eval = liverpool::evaluate(&measurement)?;
                println!("Liverpool nomogram ({volume} ml void)");
                println!(
                    "  Qmax {qmax} ml/s -> {} ({})  [normalized {:.3}]",
                    eval.qmax.band.label(),
                    eval.qmax.band.severity().name(),
                    eval.qmax.normalized
                );
                println!(
                    "  Qave {qave} ml/s -> {} ({})  [normalized {:.3}]",
                    eval.qave.band.label(),
                    eval.qave.band.severity().name(),
                    eval.qave.normalized
                );
            }
        }

        Commands::Miskolc { volume, qmax, qave, bsa, curves, json } => {
            if json {
                let request = serde_json::json!({
                    "schema_version": 1,
                    "volume": volume,
                    "qmax": qmax,
                    "qave": qave,
                    "bsa_category": bsa,
                    "include_curves": curves,
                })
                .to_string();
                let response = uroflow_core::evaluate_miskolc_json(&request)
                    .map_err(|e| anyhow::anyhow!(e))?;
                println!("{response}");
            } else {
                let bucket: MiskolcBsa = bsa.parse()?;
                let measurement = Measurement::new(volume, qmax, qave)?;
                let eval = miskolc::evaluate(&measurement, bucket)?;
                println!("Miskolc nomogram ({volume} ml void, {bsa} BSA)");
                println!(
                    "  Qmax {qmax} ml/s -> {} ({})  [z {:+.3}]",
                    eval.qmax.band.label(),
                    eval.qmax.band.severity().name(),
                    eval.qmax.z_score
                );
                println!(
                    "  Qave {qave} ml/s -> {} ({})  [z {:+.3}]",
                    eval.qave.band.label(),
                    eval.qave.band.severity().name(),
                    eval.qave.z_score
                );
            }
        }

        Commands::Toguri { volume, qmax, qave, bsa, json } => {
            if json {
                let request = serde_json::json!({
                    "schema_version": 1,
                    "volume": volume,
                    "qmax": qmax,
                    "qave": qave,
                    "bsa_category": bsa,
                })
                .to_string();
                let response = uroflow_core::evaluate_toguri_json(&request)
                    .map_err(|e| anyhow::anyhow!(e))?;
                println!("{response}");
            } else {
                let bucket: ToguriBsa = bsa.parse()?;
                let measurement = Measurement::new(volume, qmax, qave)?;
                let eval = toguri::evaluate(&measurement, bucket)?;
                println!("Toguri nomogram ({volume} ml void, {bsa} BSA)");
                println!("  Qmax {qmax} ml/s -> {} ({})", eval.qmax.label(), eval.qmax.severity().name());
                println!("  Qave {qave} ml/s -> {} ({})", eval.qave.label(), eval.qave.severity().name());
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("uroflow CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
