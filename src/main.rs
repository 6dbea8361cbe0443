//! Pulseboard command-line report
//!
//! Loads configuration from the environment, seeds an in-memory tracker and
//! prints the dashboard, OKR overview, kanban board and this week's note as
//! JSON on stdout.

use std::process::ExitCode;
use std::sync::Arc;

use serde::Serialize;

use pulseboard::adapters::{InMemoryTracker, SeedData};
use pulseboard::application::handlers::{
    GetDashboardOverviewHandler, GetDashboardOverviewQuery, GetDashboardOverviewResult,
    GetKanbanBoardHandler, GetKanbanBoardQuery, GetKanbanBoardResult, GetOkrOverviewHandler,
    GetOkrOverviewQuery, GetOkrOverviewResult, GetWeeklyNoteHandler, GetWeeklyNoteQuery,
    GetWeeklyNoteResult,
};
use pulseboard::config::AppConfig;
use pulseboard::domain::notes::WeekOfYear;
use pulseboard::logging::init_logging;
use pulseboard::ports::TrackerReader;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    dashboard: GetDashboardOverviewResult,
    okr: GetOkrOverviewResult,
    board: GetKanbanBoardResult,
    weekly_note: GetWeeklyNoteResult,
}

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.runtime);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Report failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    let classifier = config.health.classifier()?;
    let today = config.data.today();

    let seed = match &config.data.seed_path {
        Some(path) => SeedData::from_path(path)?,
        None => SeedData::builtin()?,
    };
    let reader: Arc<dyn TrackerReader> = Arc::new(InMemoryTracker::from_seed(seed));

    tracing::info!(
        %today,
        on_track = classifier.thresholds().on_track,
        at_risk = classifier.thresholds().at_risk,
        "Building report"
    );

    let dashboard = GetDashboardOverviewHandler::new(reader.clone(), classifier).handle(
        GetDashboardOverviewQuery {
            today,
            due_soon_days: config.data.due_soon_days,
        },
    )?;
    let okr = GetOkrOverviewHandler::new(reader.clone(), classifier)
        .handle(GetOkrOverviewQuery { today })?;
    let board = GetKanbanBoardHandler::new(reader.clone()).handle(GetKanbanBoardQuery::default())?;
    let weekly_note = GetWeeklyNoteHandler::new(reader).handle(GetWeeklyNoteQuery {
        week: WeekOfYear::containing(today),
    })?;

    let report = Report {
        dashboard,
        okr,
        board,
        weekly_note,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
