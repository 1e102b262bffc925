use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "strand",
    about = "Strand — reconcile a timeline and a narrative project",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Update the narrative project from the timeline
    UpdateNarrative(SyncArgs),
    /// Update the timeline from the narrative project
    UpdateTimeline(SyncArgs),
    /// Print the moon phase for a date
    Moonphase(MoonphaseArgs),
}

#[derive(Args)]
pub struct SyncArgs {
    /// Timeline model file (JSON)
    pub timeline: PathBuf,
    /// Narrative model file (JSON)
    pub narrative: PathBuf,
    /// Per-project configuration file; defaults to strand.toml next to the
    /// narrative file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Report what would change without saving anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct MoonphaseArgs {
    /// Date as yyyy-mm-dd
    pub date: NaiveDate,
}
