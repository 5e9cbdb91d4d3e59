//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Indoor wayfinding over a building graph snapshot
#[derive(Debug, Parser)]
#[command(name = "indoornav", version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Graph snapshot to query, overrides the configured one
    #[arg(long, short = 'g', global = true)]
    pub graph: Option<PathBuf>,

    /// Debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a snapshot from a CSV building description
    Import(ImportArgs),
    /// Directions between two named places
    Route(RouteArgs),
    /// List places that can be searched for
    Destinations,
    /// List the floors of the building
    Floors,
    /// List corridor and stair names
    Edges,
    /// Find the place closest to a coordinate
    Nearest(NearestArgs),
    /// Walking distances between places, as JSON
    Matrix(MatrixArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Map name stored in the snapshot
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub vertices: PathBuf,
    #[arg(long)]
    pub edges: PathBuf,
    #[arg(long)]
    pub attachments: Option<PathBuf>,
    /// Snapshot file to write
    #[arg(long, short = 'o')]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct RouteArgs {
    pub from: String,
    pub to: String,
    /// Seed for the instruction wording
    #[arg(long)]
    pub seed: Option<u64>,
    /// Also write the directions as GeoJSON
    #[arg(long)]
    pub geojson: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct NearestArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub floor: Option<i32>,
    /// Include corridor points, stairs and elevators
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Args)]
pub struct MatrixArgs {
    /// Places to include, defaults to every searchable place
    pub names: Vec<String>,
}
