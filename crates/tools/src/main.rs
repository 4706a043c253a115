//! cityscope: headless client for the prediction service.
//!
//! Runs the same fetch/classify/style pipeline as the map view, printing
//! the result instead of drawing it. Useful for smoke-testing a backend.

use std::env;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use classify::Tier;
use client::{HttpApi, MapController, PredictionApi, ViewContext};
use formats::{
    is_known_metric, is_supported_year, Scenario, DEFAULT_METRIC, DEFAULT_YEAR, METRICS,
    SUPPORTED_YEARS,
};
use layers::RecordingSurface;
use symbology::legend_rows;

#[derive(Parser)]
#[command(name = "cityscope", about = "Headless viewer for the prediction service")]
struct Cli {
    /// Service base URL. Falls back to the CITYSCOPE_API env var, then to
    /// the local development default.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a prediction grid and print thresholds, tier counts and legend.
    Summary {
        #[arg(long, default_value = DEFAULT_METRIC)]
        metric: String,
        #[arg(long, default_value_t = DEFAULT_YEAR)]
        year: i32,
        /// "Before" or "After".
        #[arg(long, default_value = "Before")]
        scenario: String,
    },
    /// Fetch and print the impact-analysis report for a year.
    Impact {
        #[arg(long, default_value_t = DEFAULT_YEAR)]
        year: i32,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let base_url = cli
        .base_url
        .or_else(|| env::var("CITYSCOPE_API").ok())
        .unwrap_or_else(|| "http://127.0.0.1:5000".to_string());

    info!("using prediction service at {base_url}");
    let api: Arc<dyn PredictionApi> = Arc::new(HttpApi::new(base_url));

    let result = match cli.command {
        Command::Summary {
            metric,
            year,
            scenario,
        } => cmd_summary(api, metric, year, scenario).await,
        Command::Impact { year } => cmd_impact(api, year).await,
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn check_query(metric: &str, year: i32) -> Result<(), String> {
    if !is_known_metric(metric) {
        return Err(format!(
            "unknown metric {metric:?}; available: {}",
            METRICS.join(", ")
        ));
    }
    check_year(year)
}

fn check_year(year: i32) -> Result<(), String> {
    if !is_supported_year(year) {
        let years: Vec<String> = SUPPORTED_YEARS.iter().map(|y| y.to_string()).collect();
        return Err(format!(
            "unsupported year {year}; supported: {}",
            years.join(", ")
        ));
    }
    Ok(())
}

async fn cmd_summary(
    api: Arc<dyn PredictionApi>,
    metric: String,
    year: i32,
    scenario: String,
) -> Result<(), String> {
    check_query(&metric, year)?;
    let scenario: Scenario = scenario.parse().map_err(|e| format!("{e}"))?;

    let ctx = ViewContext {
        metric,
        year,
        scenario,
    };
    let mut controller = MapController::with_context(api, RecordingSurface::new(), ctx);
    controller.refresh().await;

    if let Some(status) = controller.status() {
        return Err(format!("refresh failed ({status}), see log for details"));
    }
    let Some(layer) = controller.grid() else {
        return Err("refresh produced no grid".to_string());
    };

    println!(
        "{} — {} regions (year {year}, scenario {scenario})",
        layer.metric(),
        layer.len()
    );

    let t = layer.thresholds();
    println!(
        "thresholds: q20={:.3} q40={:.3} q60={:.3} q80={:.3}",
        t.q20, t.q40, t.q60, t.q80
    );

    let counts = layer.tier_counts();
    for tier in Tier::ALL {
        println!(
            "  {:<5} {:>6} regions  {}",
            tier.to_string(),
            counts[tier.index()],
            symbology::fill_color(tier)
        );
    }

    let rows = legend_rows();
    println!(
        "legend: {} {} / {} {} / {} {}",
        rows[0].label, rows[0].swatch, rows[1].label, rows[1].swatch, rows[2].label, rows[2].swatch
    );

    if controller.panel().is_visible() {
        println!();
        match controller.panel().report() {
            Some(report) => print_report(report),
            None => println!("impact analysis: unavailable"),
        }
    }

    Ok(())
}

async fn cmd_impact(api: Arc<dyn PredictionApi>, year: i32) -> Result<(), String> {
    check_year(year)?;
    let report = api
        .fetch_impact_report(year)
        .await
        .map_err(|e| e.to_string())?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &formats::ImpactReport) {
    let m = &report.delta_metrics;
    println!("impact severity: {}", report.severity);
    println!("  temperature: +{:.2} C", m.temperature_rise);
    println!("  traffic:     +{:.0}", m.traffic_increase);
    println!("  PM2.5:       +{:.2}", m.pm25_worsening);
    println!("  green cover: -{:.1}%", m.green_cover_loss);
    for rec in &report.recommendations {
        println!("  - {rec}");
    }
}
