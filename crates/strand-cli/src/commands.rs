use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use strand_config::{ConfigLayer, ConfigWarning, SyncConfig};
use strand_engine::synchronize;
use strand_model::{JsonNarrativeStore, JsonTimelineStore, NarrativeStore, TimelineStore};
use strand_types::SyncDirection;

use crate::cli::{Cli, Command, MoonphaseArgs, SyncArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::UpdateNarrative(args) => cmd_sync(args, SyncDirection::TimelineToNarrative),
        Command::UpdateTimeline(args) => cmd_sync(args, SyncDirection::NarrativeToTimeline),
        Command::Moonphase(args) => cmd_moonphase(args),
    }
}

fn cmd_sync(args: SyncArgs, direction: SyncDirection) -> anyhow::Result<()> {
    let config = load_config(&args);

    let timeline_store = JsonTimelineStore::new(&args.timeline);
    let narrative_store = JsonNarrativeStore::new(&args.narrative);
    let timeline = timeline_store
        .load()
        .with_context(|| format!("loading timeline from {}", args.timeline.display()))?;
    let narrative = narrative_store
        .load()
        .with_context(|| format!("loading narrative from {}", args.narrative.display()))?;

    let outcome = synchronize(&timeline, &narrative, direction, &config)?;

    for entry in outcome.report.entries() {
        println!("  {entry}");
    }
    for warning in outcome.report.warnings() {
        println!("  {} {warning}", "warning:".yellow());
    }

    if !outcome.report.has_changes() {
        println!("{} Nothing to do.", "✓".green());
        return Ok(());
    }
    if args.dry_run {
        println!("{} Dry run; nothing saved.", "✓".green());
        return Ok(());
    }

    match direction {
        SyncDirection::TimelineToNarrative => narrative_store
            .save(&outcome.narrative)
            .with_context(|| format!("saving narrative to {}", args.narrative.display()))?,
        SyncDirection::NarrativeToTimeline => timeline_store
            .save(&outcome.timeline)
            .with_context(|| format!("saving timeline to {}", args.timeline.display()))?,
    }
    println!(
        "{} Updated the {}.",
        "✓".green().bold(),
        direction.destination().to_string().yellow()
    );
    Ok(())
}

fn cmd_moonphase(args: MoonphaseArgs) -> anyhow::Result<()> {
    println!("{}", strand_calendar::moonphase::phase_display(args.date));
    Ok(())
}

/// Merge the three configuration tiers: built-in defaults, the user-level
/// file, and the per-project file.
fn load_config(args: &SyncArgs) -> SyncConfig {
    let (global, warnings) = match global_config_path() {
        Some(path) => ConfigLayer::from_file(&path),
        None => (ConfigLayer::default(), Vec::new()),
    };
    print_config_warnings(&warnings);

    let project_path = args
        .config
        .clone()
        .unwrap_or_else(|| project_config_path(&args.narrative));
    let (project, warnings) = ConfigLayer::from_file(&project_path);
    print_config_warnings(&warnings);

    SyncConfig::effective(Some(&global), Some(&project))
}

fn global_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        Path::new(&home)
            .join(".config")
            .join("strand")
            .join("strand.toml")
    })
}

fn project_config_path(narrative: &Path) -> PathBuf {
    narrative
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("strand.toml")
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        println!("  {} {warning}", "warning:".yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_config_sits_next_to_the_narrative_file() {
        let path = project_config_path(Path::new("/stories/novel/narrative.json"));
        assert_eq!(path, Path::new("/stories/novel/strand.toml"));

        let path = project_config_path(Path::new("narrative.json"));
        assert_eq!(path, Path::new("strand.toml"));
    }
}
