use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use indoornav_core::prelude::*;
use indoornav_core::{Error, model::floor_name};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use tracing::{info, warn};

use crate::cli::{Cli, Commands, ImportArgs, MatrixArgs, NearestArgs, RouteArgs};
use crate::config::AppConfig;

type CliResult = Result<(), Box<dyn std::error::Error>>;

pub fn run(cli: Cli, config: &AppConfig) -> CliResult {
    if let Commands::Import(args) = &cli.command {
        return import(args);
    }

    let path = cli
        .graph
        .as_deref()
        .or(config.graph.as_deref())
        .ok_or("no graph snapshot: pass --graph or set `graph` in the config")?;
    let graph = open_graph(path)?;

    match cli.command {
        Commands::Import(_) => Ok(()),
        Commands::Route(args) => route(&graph, &args, config),
        Commands::Destinations => {
            graph
                .get_searchable_names()
                .iter()
                .for_each(|name| println!("{name}"));
            Ok(())
        }
        Commands::Floors => {
            graph
                .get_floor_names()
                .iter()
                .for_each(|floor| println!("{floor}"));
            Ok(())
        }
        Commands::Edges => {
            graph
                .get_edge_names()
                .iter()
                .for_each(|name| println!("{name}"));
            Ok(())
        }
        Commands::Nearest(args) => nearest(&graph, &args),
        Commands::Matrix(args) => matrix(&graph, &args),
    }
}

fn import(args: &ImportArgs) -> CliResult {
    let source = BuildingSource {
        name: args.name.clone(),
        vertices: args.vertices.clone(),
        edges: args.edges.clone(),
        attachments: args.attachments.clone(),
    };
    let graph = load_building(&source)?;
    let file = File::create(&args.out)
        .map_err(|e| format!("Failed to create '{}': {e}", args.out.display()))?;
    save_graph(BufWriter::new(file), &graph)?;
    info!(
        "Wrote '{}' with {} vertices to {}",
        graph.name(),
        graph.vertex_count(),
        args.out.display()
    );
    Ok(())
}

fn open_graph(path: &Path) -> Result<BuildingGraph, Box<dyn std::error::Error>> {
    let file =
        File::open(path).map_err(|e| format!("Failed to open '{}': {e}", path.display()))?;
    let graph = load_graph(BufReader::new(file))?;
    info!(
        "Loaded '{}': {} vertices, {} edges",
        graph.name(),
        graph.vertex_count(),
        graph.edge_count() / 2
    );
    Ok(graph)
}

fn route(graph: &BuildingGraph, args: &RouteArgs, config: &AppConfig) -> CliResult {
    let route = match shortest_path(graph, &args.from, &args.to) {
        Ok(route) => route,
        Err(Error::NoRoute { from, to }) => {
            warn!("No route between '{from}' and '{to}'");
            println!("No route found from {from} to {to}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let directions = to_simple_instructions(graph, route.vertices(), &config.instructions, &mut rng)?;

    for (step, text) in directions.texts().iter().enumerate() {
        println!("{:>2}. {text}", step + 1);
    }
    println!("Total walking distance: {:.0} m", route.cost());

    if let Some(path) = &args.geojson {
        std::fs::write(path, directions.to_geojson_string(graph)?)?;
        info!("GeoJSON written to {}", path.display());
    }
    Ok(())
}

fn nearest(graph: &BuildingGraph, args: &NearestArgs) -> CliResult {
    let index = SpatialIndex::new(graph);
    match index.nearest(graph, args.lat, args.lon, args.floor, !args.all) {
        Some((vertex, distance)) => println!(
            "{vertex} ({}, {} floor) {distance:.1} m away",
            vertex.kind(),
            floor_name(vertex.floor())
        ),
        None => println!("No matching place"),
    }
    Ok(())
}

fn matrix(graph: &BuildingGraph, args: &MatrixArgs) -> CliResult {
    let names = if args.names.is_empty() {
        graph.get_searchable_names()
    } else {
        args.names.clone()
    };
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let distances = distance_matrix(graph, &refs)?;

    let output = json!({
        "map": graph.name(),
        "names": names,
        "distances_m": distances,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
