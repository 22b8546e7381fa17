// Batch description binary
//
// Purpose: describe every polygon of a JSON input file and write the results
// as a JSON array of {id, description, attempts, generated_at}.
// Usage: cargo run --features cli --bin describe_polygons -- <input.json> [output.json]

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Utc;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geo_describer_rust::{load_polygons, Describer, DescriberConfig, RetryOutcome};

#[derive(Debug, Serialize)]
struct OutputRecord {
    id: i64,
    /// `None` when the polygon was skipped or failed.
    description: Option<String>,
    attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    generated_at: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geo_describer_rust=info,describe_polygons=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        bail!("usage: describe_polygons <input.json> [output.json]");
    };
    let output = args.next().map(PathBuf::from);

    // Configuration from environment variables
    let config = DescriberConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  CELL_SIZE: {}", config.cell_size);
    tracing::info!("  MIN_CELLS: {}", config.min_cells);
    tracing::info!("  MAX_ATTEMPTS: {}", config.max_attempts);
    tracing::info!("  SUMMARIES: {}", config.include_summaries);
    tracing::info!("  HTML: {}", config.html);

    let polygons = load_polygons(&input)?;
    tracing::info!("Loaded {} polygons from {}", polygons.len(), input.display());

    let html = config.html;
    let describer = Describer::new(config);
    let records: Vec<OutputRecord> = describer
        .describe_batch(&polygons)
        .into_iter()
        .map(|item| {
            let generated_at = Utc::now().to_rfc3339();
            match item.outcome {
                Ok(RetryOutcome::Described { description, attempts }) => OutputRecord {
                    id: item.id,
                    description: Some(if html { description.to_html() } else { description.text() }),
                    attempts,
                    error: None,
                    generated_at,
                },
                Ok(RetryOutcome::Skipped { attempts, last_error }) => OutputRecord {
                    id: item.id,
                    description: None,
                    attempts,
                    error: Some(last_error.to_string()),
                    generated_at,
                },
                Err(err) => {
                    tracing::warn!(id = item.id, error = %err, "polygon failed");
                    OutputRecord {
                        id: item.id,
                        description: None,
                        attempts: 1,
                        error: Some(err.to_string()),
                        generated_at,
                    }
                }
            }
        })
        .collect();

    let json = serde_json::to_string_pretty(&records).context("Failed to serialize output")?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!("Wrote {} descriptions to {}", records.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
