use anyhow::{Context, Result};
use areafit::api::{collection_area, fit_area, FitError, Fitted, MatchCfg, Projector};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod io;
mod provenance;
mod summary;

#[derive(Parser)]
#[command(name = "areafit")]
#[command(about = "Inspect polygon datasets and rescale them to an exact planar (EPSG:3857) area")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print planar statistics of a GeoJSON FeatureCollection
    Inspect {
        #[arg(long)]
        input: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rescale polygons about their bbox midpoint until the rounded area matches
    Fit {
        #[arg(long)]
        input: PathBuf,
        /// Target planar area in m²
        #[arg(long)]
        target: f64,
        /// Decimal places compared (0..=15)
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=15))]
        decimals: u32,
        #[arg(long, default_value_t = 10)]
        max_iter: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print build revision, projection and matcher defaults as JSON
    Report,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    let proj = Projector::default();
    match cmd.action {
        Action::Inspect { input, json } => inspect(&proj, &input, json),
        Action::Fit {
            input,
            target,
            decimals,
            max_iter,
            out,
        } => fit(&proj, &input, target, MatchCfg { decimals, max_iter }, &out).map(|_| ()),
        Action::Report => report(),
    }
}

fn inspect(proj: &Projector, input: &Path, json: bool) -> Result<()> {
    tracing::info!(input = %input.display(), "inspect");
    let ds = io::read_dataset(input)?;
    let s = summary::summarize(proj, &ds.collection);
    if json {
        println!("{}", serde_json::to_string_pretty(&s)?);
    } else {
        println!("{s}");
    }
    Ok(())
}

/// Run the matcher on `input` and write the rescaled collection plus its
/// provenance sidecar. A failed run still leaves a sidecar recording why, but no
/// output. Returns the sidecar path.
fn fit(proj: &Projector, input: &Path, target: f64, cfg: MatchCfg, out: &Path) -> Result<PathBuf> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        target_m2 = target,
        decimals = cfg.decimals,
        max_iter = cfg.max_iter,
        "fit"
    );
    let ds = io::read_dataset(input)?;
    let before = collection_area(proj, &ds.collection);
    tracing::info!(area_m2 = before, features = ds.collection.len(), "input_area");

    let run = fit_area(proj, &ds.collection, target, cfg);
    let payload = provenance::Payload::new(serde_json::json!({
        "target_m2": target,
        "decimals": cfg.decimals,
        "max_iter": cfg.max_iter,
        "projection_radius_m": proj.cfg().radius,
    }))
    .with_result(fit_outcome(before, &run))
    .with_input(input);

    let fitted = match run {
        Ok(fitted) => fitted,
        Err(e) => {
            tracing::warn!(error = %e, "fit_failed");
            provenance::write_sidecar(out, payload)?;
            return Err(e).with_context(|| format!("fitting {} to {target} m²", input.display()));
        }
    };
    tracing::info!(steps = fitted.steps, area_m2 = fitted.area, "fitted");

    io::write_feature_collection(out, &io::to_feature_collection(&ds, &fitted.collection))?;
    provenance::write_sidecar(out, payload.with_output(out))
}

/// Sidecar `result` block for one matcher run.
fn fit_outcome<P, G>(before: f64, run: &Result<Fitted<P, G>, FitError>) -> serde_json::Value {
    use serde_json::json;
    match run {
        Ok(f) => json!({
            "outcome": "matched",
            "steps": f.steps,
            "area_before_m2": before,
            "area_after_m2": f.area,
        }),
        Err(FitError::InvalidInput { target }) => json!({
            "outcome": "invalid_input",
            "target_m2": target,
        }),
        Err(FitError::InvalidPrecision { decimals, max }) => json!({
            "outcome": "invalid_precision",
            "decimals": decimals,
            "max_decimals": max,
        }),
        Err(FitError::DegenerateGeometry { area }) => json!({
            "outcome": "degenerate_geometry",
            "area_m2": area,
        }),
        Err(FitError::ConvergenceFailure {
            achieved,
            target,
            decimals,
        }) => json!({
            "outcome": "convergence_failure",
            "area_before_m2": before,
            "achieved_rounded_m2": achieved,
            "target_rounded_m2": target,
            "decimals": decimals,
        }),
    }
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_json())?);
    Ok(())
}

fn report_json() -> serde_json::Value {
    serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "tool_version": areafit::VERSION,
        "projection": "EPSG:3857 (spherical Web Mercator)",
        "defaults": {
            "decimals": MatchCfg::default().decimals,
            "max_iter": MatchCfg::default().max_iter,
        }
    })
}
