//! Greedy exploration of a small floor plan.
//!
//! Starts with an unknown map, reveals cells around the robot from a
//! hidden floor plan, and repeatedly drives to the best frontier until none
//! remain.
//!
//! Usage:
//!   cargo run --example explore_room
//!   cargo run --example explore_room -- --config configs/config.yaml --radius 0.4

use std::path::PathBuf;

use clap::Parser;

use anveshan::{
    AnveshanConfig, CellType, FrontierSearch, GridCoord, GridStorage, Pose2D, WorldPoint,
};

const RESOLUTION: f32 = 0.1;

const FLOOR_PLAN: &[&str] = &[
    "##########################",
    "#..........#.............#",
    "#..........#.............#",
    "#..........#......###....#",
    "#........................#",
    "#..........#.............#",
    "#####.######.............#",
    "#..........#......###....#",
    "#..........#.............#",
    "#..........#.............#",
    "#........................#",
    "##########################",
];

/// Frontier exploration demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (defaults are used if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sensor radius in meters
    #[arg(short, long, default_value_t = 0.5)]
    radius: f32,

    /// Maximum number of goals to visit
    #[arg(short, long, default_value_t = 50)]
    max_goals: usize,
}

/// Copy ground truth into the map for every cell within `radius` of `pose`.
fn sense(truth: &GridStorage, map: &mut GridStorage, pose: &Pose2D, radius: f32) -> usize {
    let center = map.world_to_grid(pose.position());
    let reach = (radius / RESOLUTION).ceil() as i32;
    let mut revealed = 0;

    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let coord = GridCoord::new(center.x + dx, center.y + dy);
            if !truth.is_valid_coord(coord) {
                continue;
            }
            if map.grid_to_world(coord).distance(&pose.position()) > radius {
                continue;
            }
            if map.get_type(coord) == CellType::Unknown {
                map.set_type(coord, truth.get_type(coord));
                revealed += 1;
            }
        }
    }

    revealed
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AnveshanConfig::load(path)?,
        None => AnveshanConfig::default(),
    };
    log::info!(
        "Frontier weights: potential={}, gain={}, orientation={}, min size={}m",
        config.frontier.potential_scale,
        config.frontier.gain_scale,
        config.frontier.orientation_scale,
        config.frontier.min_frontier_size
    );

    let truth = GridStorage::from_ascii(FLOOR_PLAN, RESOLUTION, WorldPoint::ZERO)?;
    let (width, height) = (FLOOR_PLAN[0].len(), FLOOR_PLAN.len());
    let mut map = GridStorage::new(width, height, RESOLUTION, WorldPoint::ZERO);

    let search = FrontierSearch::new(config.frontier);
    let mut pose = Pose2D::new(0.25, 0.25, 0.0);
    let mut travelled = 0.0f32;

    for step in 0..args.max_goals {
        let revealed = sense(&truth, &mut map, &pose, args.radius);
        let result = search.search(&map, &pose)?;

        let Some(best) = result.best() else {
            log::info!("Exploration complete after {} goals", step);
            break;
        };

        log::info!(
            "Goal {}: {} frontiers, best at ({:.2}, {:.2}) size={} cost={:.2} ({} cells revealed)",
            step + 1,
            result.frontiers.len(),
            best.goal().x,
            best.goal().y,
            best.size,
            best.cost,
            revealed
        );

        let goal = best.goal();
        travelled += pose.position().distance(&goal);
        pose = Pose2D::new(goal.x, goal.y, best.orientation);
    }

    let counts = map.count_by_type();
    log::info!(
        "Travelled {:.2}m, {} known / {} cells ({} free, {} occupied)",
        travelled,
        counts.known(),
        counts.total(),
        counts.free,
        counts.occupied
    );
    println!("{}", map.to_ascii());

    Ok(())
}
