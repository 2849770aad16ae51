use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use rootcause::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vfs::{PhysicalFS, VfsPath};

use sortiedb::categories::{AirDefenseRange, AmountN, Category, UnitFamily};
use sortiedb::db::CommonSettings;
use sortiedb::diagnostics::{CollectingSink, TracingSink};

/// Load and validate a mission generator data directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Data root containing the `Database` and `Include` directories
    #[clap(default_value = ".")]
    root: PathBuf,

    /// Print the resolved table as JSON instead of a summary
    #[clap(long)]
    json: bool,

    /// Only log errors
    #[clap(short, long)]
    quiet: bool,
}

/// `--quiet` always wins. Otherwise `RUST_LOG` is used as given, falling back
/// to info-level events from this crate.
fn log_directives(quiet: bool, rust_log: Option<String>) -> String {
    match rust_log {
        _ if quiet => "sortiedb=error".to_string(),
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => "sortiedb=info".to_string(),
    }
}

fn init_logging(quiet: bool) -> Result<(), Report> {
    let directives = log_directives(quiet, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = EnvFilter::try_new(&directives)
        .context_with(|| format!("Invalid log directives: {directives}"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn print_summary(settings: &CommonSettings) {
    println!("Objectives (spacing / distance from takeoff):");
    for level in AmountN::ALL {
        println!(
            "  {:<10} {:>6} / {:>6}",
            level.name(),
            settings.objective_spacing()[*level],
            settings.takeoff_to_first_objective()[*level]
        );
    }

    println!(
        "Enemy CAP: {} from objectives, at least {} from takeoff",
        settings.cap_distance_from_objectives(),
        settings.cap_min_distance_from_takeoff()
    );
    for (level, power) in settings.cap_relative_power().iter() {
        println!("  {:<10} {:>5.0}%", level.name(), power * 100.0);
    }

    println!("Air defense ranges:");
    for range in AirDefenseRange::ALL {
        println!(
            "  {:<10} {} from objectives, at least {} from takeoff",
            range.name(),
            settings.air_defense_distance_from_objectives()[*range],
            settings.air_defense_min_distance_from_takeoff()[*range]
        );
    }

    println!("Air defense presence:");
    for (level, info) in settings.air_defense_presence().iter() {
        let groups = info
            .all_groups_in_area()
            .iter()
            .map(|(range, count)| format!("{range} {count}"))
            .join(", ");
        println!(
            "  {:<10} embedded {:>3.0}% ({} units), groups: {groups}",
            level.name(),
            info.embedded_chance() * 100.0,
            info.embedded_unit_count()
        );
    }

    let parts = settings
        .mission_name_parts()
        .iter()
        .map(|candidates| candidates.len())
        .join("/");
    println!(
        "Mission names: {} ({parts} candidates)",
        settings.mission_name_template()
    );

    let waypoints = settings.waypoint_names();
    println!(
        "Waypoints: {} -> {} -> [{}] -> {}",
        waypoints.initial(),
        waypoints.navigation(),
        waypoints.objectives().iter().join(", "),
        waypoints.final_name()
    );

    println!("Unit families: {}", UnitFamily::ALL.len());
    for (family, name) in settings.unit_briefing_names().iter() {
        println!(
            "  {:<28} {} / {}: {}",
            family.name(),
            name.singular(),
            name.plural(),
            settings.unit_group_name_templates()[family]
        );
    }

    println!(
        "Included audio: {}",
        settings.included_audio_assets().iter().join(", ")
    );
}

fn main() -> Result<(), Report> {
    let args = Args::parse();
    init_logging(args.quiet)?;

    let root = args
        .root
        .canonicalize()
        .context_with(|| format!("Data root not found: {}", args.root.display()))?;
    let files = VfsPath::new(PhysicalFS::new(root.clone()));

    let collected = CollectingSink::new();
    let sink = (TracingSink, &collected);
    let settings = CommonSettings::load(&files, &sink)
        .context_with(|| format!("Failed to load settings from {}", root.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&settings).context("Failed to serialize settings")?;
        println!("{json}");
    } else {
        print_summary(&settings);
    }

    let warnings = collected.warning_count();
    if warnings > 0 {
        info!("loaded with {warnings} warning(s)");
    }

    Ok(())
}
