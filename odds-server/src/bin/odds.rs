use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use odds_server::config::{EmpirePlanFile, MissionFile};
use odds_server::logging::init_tracing;
use odds_server::planner::Planner;
use odds_server::routes::SqliteRouteStore;
use odds_server::web::TravelReportResponse;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute the odds of reaching the destination in time")]
struct Cli {
    /// Mission configuration (autonomy, departure, arrival, routes_db).
    mission: PathBuf,

    /// Intercepted empire plan (countdown, bounty_hunters).
    empire: PathBuf,

    /// Print the full travel report as JSON instead of the best odds.
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    init_tracing("warn");
    let cli = Cli::parse();

    let mission = load_mission(&cli.mission)?;
    let config = mission
        .engine_config()
        .context("invalid mission configuration")?;
    let routes = SqliteRouteStore::open(&mission.routes_db).with_context(|| {
        format!(
            "failed to open route database {}",
            mission.routes_db.display()
        )
    })?;

    let plan = EmpirePlanFile::load(&cli.empire)
        .with_context(|| format!("failed to load empire plan from {}", cli.empire.display()))?
        .resolve()
        .context("invalid empire plan")?;

    let report = Planner::new(&routes, &config)
        .evaluate(&plan)
        .context("failed to evaluate travel")?;

    if cli.report {
        let json = serde_json::to_string_pretty(&TravelReportResponse::from_report(&report))
            .context("failed to encode report")?;
        println!("{json}");
    } else {
        println!("{}", report.best_odds);
    }

    Ok(())
}

fn load_mission(path: &Path) -> Result<MissionFile> {
    MissionFile::load(path).with_context(|| {
        format!(
            "failed to load mission configuration from {}",
            path.display()
        )
    })
}
