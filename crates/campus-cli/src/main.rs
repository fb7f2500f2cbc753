//! CLI binary for campus navigation: list buildings, find routes, explore.

use anyhow::{Context, Result};
use campus_core::config::CampusConfig;
use campus_core::storage;
use campus_nav::navigator::CampusNavigator;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "campus", about = "Campus navigator")]
struct Cli {
    /// Project root holding `.campus/config.toml` (defaults to current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Campus map JSON file (defaults to `storage.campus_file` from config)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    Bfs,
    Dfs,
}

#[derive(Subcommand)]
enum Commands {
    /// List every building with its description
    Buildings,

    /// Shortest route between two buildings
    Route {
        from: String,
        to: String,
    },

    /// Alternative routes between two buildings, shortest first
    Routes {
        from: String,
        to: String,

        /// Maximum number of routes (defaults to navigation.max_paths)
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// Walk the campus from a building
    Explore {
        from: String,

        /// Traversal order
        #[arg(short, long, value_enum, default_value = "bfs")]
        order: Order,
    },

    /// Walking distance from a building to every reachable building
    Distances {
        from: String,
    },

    /// Show campus graph statistics
    Info,
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.root {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn load_navigator(
    project_root: &Path,
    data: Option<&Path>,
    max_paths: Option<usize>,
) -> Result<CampusNavigator> {
    let mut config = CampusConfig::load(project_root).context("failed to load config")?;
    if let Some(max) = max_paths {
        config.navigation.max_paths = max.max(1);
    }
    let path = match data {
        Some(p) => p.to_path_buf(),
        None => config.campus_file(project_root),
    };
    tracing::debug!(path = %path.display(), "loading campus map");
    let map = storage::load_map(&path)
        .with_context(|| format!("failed to load campus map {}", path.display()))?;
    map.validate().context("invalid campus map")?;
    Ok(CampusNavigator::from_map(&map, &config.navigation))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;
    let data = cli.data.as_deref();

    match cli.command {
        Commands::Buildings => cmd_buildings(&load_navigator(&project_root, data, None)?),
        Commands::Route { ref from, ref to } => {
            cmd_route(&load_navigator(&project_root, data, None)?, from, to)
        }
        Commands::Routes {
            ref from,
            ref to,
            max,
        } => cmd_routes(&load_navigator(&project_root, data, max)?, from, to),
        Commands::Explore { ref from, order } => {
            cmd_explore(&mut load_navigator(&project_root, data, None)?, from, order)
        }
        Commands::Distances { ref from } => {
            cmd_distances(&mut load_navigator(&project_root, data, None)?, from)
        }
        Commands::Info => cmd_info(&load_navigator(&project_root, data, None)?),
    }
}

fn cmd_buildings(nav: &CampusNavigator) -> Result<()> {
    for name in nav.buildings() {
        match nav.building_info(name) {
            Some(info) if !info.description.is_empty() => {
                println!("{} - {}", name, info.description);
            }
            _ => println!("{}", name),
        }
    }
    Ok(())
}

fn cmd_route(nav: &CampusNavigator, from: &str, to: &str) -> Result<()> {
    let route = nav.graph().dijkstra(from, to);
    if !route.is_reachable() {
        eprintln!("No route from {} to {}.", from, to);
        return Ok(());
    }
    println!("{}", route.path.join(" -> "));
    println!("Distance: {:.0} m ({} hops)", route.distance, route.hops());
    Ok(())
}

fn cmd_routes(nav: &CampusNavigator, from: &str, to: &str) -> Result<()> {
    let routes = nav.routes_between(from, to);
    if routes.is_empty() {
        eprintln!("No route from {} to {}.", from, to);
        return Ok(());
    }
    println!("Found {} route(s) from {} to {}:", routes.len(), from, to);
    for (i, route) in routes.iter().enumerate() {
        let marker = if i == 0 { "  (shortest)" } else { "" };
        println!(
            "  {}. {} [{:.0} m]{}",
            i + 1,
            route.path.join(" -> "),
            route.distance,
            marker
        );
    }
    Ok(())
}

fn cmd_explore(nav: &mut CampusNavigator, from: &str, order: Order) -> Result<()> {
    if !nav.set_current_location(from) {
        anyhow::bail!("unknown building: {}", from);
    }
    let visited = match order {
        Order::Bfs => nav.reachable_buildings(),
        Order::Dfs => nav.explore_dfs(),
    };
    for (i, building) in visited.iter().enumerate() {
        println!("  {}. {}", i + 1, building);
    }
    Ok(())
}

fn cmd_distances(nav: &mut CampusNavigator, from: &str) -> Result<()> {
    if !nav.set_current_location(from) {
        anyhow::bail!("unknown building: {}", from);
    }
    let distances = nav.distances_from_current();
    if distances.is_empty() {
        println!("No other building is reachable from {}.", from);
    }
    for d in distances {
        println!("  {} ({:.0} m)", d.building, d.distance);
    }
    Ok(())
}

fn cmd_info(nav: &CampusNavigator) -> Result<()> {
    let info = nav.campus_info();
    println!("Buildings: {}", info.vertices);
    println!("Routes: {}", info.edges);
    println!("Connected: {}", if info.connected { "yes" } else { "no" });
    Ok(())
}
