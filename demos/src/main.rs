//! jumpmap-demo: plan a route across a random map and print each segment.
//!
//! ```text
//! RUST_LOG=debug jumpmap-demo --nodes 2000 --jump-range 30 --strategy bidirectional-bfs
//! ```

use std::path::PathBuf;

use clap::Parser;
use jumpmap_core::{Bounds, Point};
use jumpmap_paths::StrategyKind;
use jumpmap_route::{CategoryId, Node, NodeId, RouteConfig, RoutePlanner, StarMap};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of nodes to scatter over the map.
    #[arg(short, long, default_value_t = 1000)]
    nodes: u32,

    /// Seed for the map generator.
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    #[arg(long, default_value_t = 500.0)]
    width: f64,

    #[arg(long, default_value_t = 500.0)]
    height: f64,

    /// Number of distinct node categories.
    #[arg(long, default_value_t = 4)]
    categories: u32,

    /// TOML route configuration. Flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    jump_range: Option<f64>,

    /// best-first, bidirectional-best-first or bidirectional-bfs.
    #[arg(long)]
    strategy: Option<StrategyKind>,

    /// Categories to route around.
    #[arg(short, long, num_args = 1..)]
    exclude: Vec<u32>,

    /// Node ids to visit in order. Three random nodes when omitted.
    #[arg(short, long, num_args = 1..)]
    waypoints: Vec<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if args.nodes == 0 {
        return Err("--nodes must be at least 1".into());
    }
    if !(args.width > 0.0 && args.height > 0.0) {
        return Err("--width and --height must be positive".into());
    }
    if args.categories == 0 {
        return Err("--categories must be at least 1".into());
    }

    let mut config = match &args.config {
        Some(path) => RouteConfig::load(path)?,
        None => RouteConfig::default(),
    };
    if let Some(range) = args.jump_range {
        config.jump_range = range;
    }
    if let Some(kind) = args.strategy {
        config.strategy = kind;
    }
    config
        .exclusions
        .extend(args.exclude.iter().copied().map(CategoryId));
    if config.index.bounds.is_none() {
        config.index.bounds = Some(Bounds::from_corners(
            Point::ZERO,
            Point::new(args.width, args.height),
        ));
    }
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let nodes: Vec<Node> = (0..args.nodes)
        .map(|i| {
            let pos = Point::new(
                rng.random_range(0.0..args.width),
                rng.random_range(0.0..args.height),
            );
            Node::new(NodeId(i), CategoryId(rng.random_range(0..args.categories)), pos)
        })
        .collect();
    let map = StarMap::from_nodes(config.index.clone(), nodes);

    let waypoints: Vec<NodeId> = if args.waypoints.is_empty() {
        (0..3).map(|_| NodeId(rng.random_range(0..args.nodes))).collect()
    } else {
        args.waypoints.iter().copied().map(NodeId).collect()
    };

    let mut planner = RoutePlanner::from_config(&config);
    for w in waypoints {
        if !planner.add_waypoint(w) {
            log::info!("skipping repeated waypoint {w}");
        }
    }

    println!(
        "{} nodes, jump range {}, {}",
        map.len(),
        config.jump_range,
        config.strategy
    );
    if !planner.calculate_route(&map, config.jump_range) {
        println!("need at least two distinct consecutive waypoints");
        return Ok(());
    }
    for segment in planner.route() {
        println!("  {segment}");
    }
    println!("total: {} jumps", planner.total_jumps());
    Ok(())
}
