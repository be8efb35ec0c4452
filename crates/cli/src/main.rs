// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::NaiveDate;
use clap::Parser;
use planview::{PlanningDataset, PlanningView, RenderModel, ViewMode, build_render_model};
use planview_api::{ApiError, FixtureDataSource, PlanningDataSource, ShiftInstanceQuery};
use planview_client::PlanningApiClient;
use planview_domain::{
    DEFAULT_END_HOUR, DEFAULT_START_HOUR, DayWindow, LifecycleStatus, LocalCalendar,
    PlanningFilters, TimeWindow,
};
use tracing::info;

/// Planview - renders the planning timeline for a day or week
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON fixture file to serve as the data source.
    #[arg(long, conflicts_with = "base_url")]
    fixture: Option<String>,

    /// Base URL of the planning backend (e.g. `https://api.example.com`).
    #[arg(long)]
    base_url: Option<String>,

    /// Anchor date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Show the Monday-first week containing the anchor date.
    #[arg(short, long)]
    week: bool,

    /// IANA display timezone for day boundaries.
    #[arg(short, long, default_value = "UTC")]
    timezone: String,

    /// First visible hour of the day window.
    #[arg(long, default_value_t = DEFAULT_START_HOUR)]
    window_start: u32,

    /// Last visible hour of the day window. Values past 24 extend into the
    /// next day.
    #[arg(long, default_value_t = DEFAULT_END_HOUR)]
    window_end: u32,

    /// Restrict to these site ids.
    #[arg(long = "site-id")]
    site_ids: Vec<i64>,

    /// Restrict to shifts assigned to these collaborator ids.
    #[arg(long = "collaborator-id")]
    collaborator_ids: Vec<i64>,

    /// Restrict to these lifecycle statuses (draft/published/cancelled).
    #[arg(long = "status")]
    statuses: Vec<String>,

    /// Free-text search over shift id, status and source.
    #[arg(long)]
    search: Option<String>,

    /// Print the render model as JSON instead of text.
    #[arg(long)]
    json: bool,
}

/// Fetches a full dataset snapshot from a data source.
async fn load_dataset<S: PlanningDataSource + Sync>(
    source: &S,
    query: &ShiftInstanceQuery,
) -> Result<PlanningDataset, ApiError> {
    let sites = source.fetch_sites().await?;
    let collaborators = source.fetch_collaborators().await?;
    let shifts = source.fetch_shifts(query).await?;
    info!(
        sites = sites.len(),
        collaborators = collaborators.len(),
        shifts = shifts.len(),
        "Loaded dataset snapshot"
    );
    Ok(PlanningDataset {
        sites,
        collaborators,
        shifts,
    })
}

fn print_text(model: &RenderModel) {
    println!("Days: {:?}", model.days);
    for row in &model.rows {
        if row.site_name.is_empty() {
            println!("Site #{}", row.site_id);
        } else {
            println!("Site #{} ({})", row.site_id, row.site_name);
        }
        for lane in &row.lanes {
            println!("  {}: {} block(s)", lane.day, lane.blocks.len());
            for block in &lane.blocks {
                println!(
                    "    shift {} [{}] offset {:.2}% width {:.2}%",
                    block.shift_id,
                    block.display_state.as_str(),
                    block.offset_percent,
                    block.width_percent
                );
            }
        }
    }
    println!("Total blocks: {}", model.block_count());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let calendar: LocalCalendar = LocalCalendar::new(&args.timezone)?;
    let window: TimeWindow = TimeWindow::new(args.window_start, args.window_end)?;
    let anchor: NaiveDate = args
        .date
        .unwrap_or_else(|| chrono::Utc::now().date_naive());
    let mode: ViewMode = if args.week {
        ViewMode::Week
    } else {
        ViewMode::Day
    };

    let mut view: PlanningView = PlanningView::new(anchor, mode, window, calendar);
    view.filters = PlanningFilters {
        site_ids: args.site_ids.clone(),
        collaborator_ids: args.collaborator_ids.clone(),
        statuses: args
            .statuses
            .iter()
            .map(|status| LifecycleStatus::from_api(status))
            .collect(),
        search: args.search.clone().unwrap_or_default(),
    };

    // Query the full visible range so day and week mode fetch exactly what
    // they render.
    let days: Vec<NaiveDate> = view.visible_days();
    let first: DayWindow = DayWindow::resolve(days[0], &view.calendar)?;
    let last: DayWindow = DayWindow::resolve(days[days.len() - 1], &view.calendar)?;
    let query: ShiftInstanceQuery = ShiftInstanceQuery {
        start: Some(first.range.start),
        end: Some(last.range.end),
        site_ids: args.site_ids.clone(),
        collaborator_ids: args.collaborator_ids.clone(),
        statuses: args.statuses.clone(),
    };

    let dataset: PlanningDataset = if let Some(path) = &args.fixture {
        info!(path = %path, "Loading fixture data source");
        let json: String = std::fs::read_to_string(path)?;
        let source: FixtureDataSource = FixtureDataSource::from_json(&json)?;
        load_dataset(&source, &query).await?
    } else if let Some(base_url) = &args.base_url {
        info!(base_url = %base_url, "Connecting to planning backend");
        let client: PlanningApiClient = PlanningApiClient::new(base_url)?;
        load_dataset(&client, &query).await?
    } else {
        return Err("Either --fixture or --base-url is required".into());
    };

    view.replace_dataset(dataset);

    let model: RenderModel = build_render_model(&view)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print_text(&model);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_args_build_a_valid_window() {
        let args: Args = Args::try_parse_from(["planview", "--fixture", "demo.json"]).unwrap();
        assert_eq!(args.window_start, DEFAULT_START_HOUR);
        assert_eq!(args.window_end, DEFAULT_END_HOUR);
        assert!(TimeWindow::new(args.window_start, args.window_end).is_ok());
    }

    #[test]
    fn test_window_args_accept_next_day_wrap() {
        let args: Args = Args::try_parse_from([
            "planview",
            "--fixture",
            "demo.json",
            "--window-start",
            "6",
            "--window-end",
            "26",
        ])
        .unwrap();
        let window = TimeWindow::new(args.window_start, args.window_end).unwrap();
        assert_eq!(window.end_hour(), 26);
    }
}
