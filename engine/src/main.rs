//! Land potential analysis runner
//!
//! Runs one analysis for a parcel and prints the result document as JSON.
//! The request-handling and persistence layers that normally invoke the
//! pipeline are external to this crate.

use anyhow::{bail, Context};
use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use land_potential_engine::external::HttpGateway;
use land_potential_engine::services::AnalysisPipeline;
use land_potential_engine::EngineConfig;
use shared::{GeoCoordinates, Parcel, ParcelArea, PvConfig, TimeSpan, WindConfig};

/// Default DC system voltage when not overridden
const DEFAULT_DC_VOLTAGE: f64 = 48.0;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lp_engine=debug,land_potential_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = EngineConfig::load()?;

    tracing::info!("Starting land potential analysis");
    tracing::info!("Environment: {}", config.environment);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 5 {
        bail!("usage: lp-engine <latitude> <longitude> <start YYYY-MM-DD> <end YYYY-MM-DD> <area_ha>");
    }

    let latitude: f64 = args[0].parse().context("invalid latitude")?;
    let longitude: f64 = args[1].parse().context("invalid longitude")?;
    let start: NaiveDate = args[2].parse().context("invalid start date")?;
    let end: NaiveDate = args[3].parse().context("invalid end date")?;
    let area_ha: f64 = args[4].parse().context("invalid area")?;

    let parcel = Parcel::new(
        GeoCoordinates::new(latitude, longitude),
        ParcelArea::from_hectares(area_ha),
    );
    let time_span = TimeSpan::new(start, end);

    let gateway = HttpGateway::new(&config.gateway);
    let pipeline = AnalysisPipeline::new(&config, gateway);

    let document = pipeline
        .run(
            &parcel,
            &time_span,
            &PvConfig::default(),
            &WindConfig::default(),
            DEFAULT_DC_VOLTAGE,
        )
        .await?;

    tracing::info!(
        id = %document.id,
        total_energy_kwh = document.energy_results.energy.total_energy_kwh,
        best_energy_fraction = document
            .energy_results
            .mixed_analysis
            .best_scenario
            .energy_fraction,
        "analysis complete"
    );

    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
