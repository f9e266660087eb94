use std::path::Path;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use road_generator::ascii;
use road_generator::config::GeneratorConfig;
use road_generator::export;
use road_generator::roads::{Orientation, RoadPreset};
use road_generator::sinks::{PlacementLog, TileGrid};

#[derive(Parser, Debug)]
#[command(name = "road_generator")]
#[command(about = "Generate procedural grid road networks")]
struct Args {
    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Tuning preset (classic or dense)
    #[arg(short, long, default_value = "dense")]
    preset: RoadPreset,

    /// Load parameters and palette from a JSON config file (overrides --preset)
    #[arg(short, long)]
    config: Option<String>,

    /// Map size in cells
    #[arg(short = 'S', long)]
    size: Option<i32>,

    /// Road width in cells
    #[arg(short = 'w', long)]
    road_width: Option<i32>,

    /// Minimum straight run length
    #[arg(long)]
    min_length: Option<i32>,

    /// Maximum straight run length (exclusive)
    #[arg(long)]
    max_length: Option<i32>,

    /// Maximum number of segments
    #[arg(long)]
    max_segments: Option<usize>,

    /// Skip landmark cells already claimed by another junction
    #[arg(long)]
    dedupe_landmarks: bool,

    /// Export the map as a PNG
    #[arg(short, long)]
    output: Option<String>,

    /// Pixels per cell in the PNG export (1-8)
    #[arg(long, default_value = "2")]
    scale: u32,

    /// Export the road map as JSON
    #[arg(long)]
    export_json: Option<String>,

    /// Export the map as an ASCII text file
    #[arg(long)]
    export_ascii: Option<String>,

    /// Print the map as ASCII to stdout
    #[arg(long)]
    ascii: bool,

    /// Save the effective configuration to a JSON file
    #[arg(long)]
    save_config: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match GeneratorConfig::load(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            println!("Preset: {} ({})", args.preset, args.preset.description());
            GeneratorConfig::from_preset(args.preset)
        }
    };

    // Command-line overrides
    let params = &mut config.params;
    if let Some(size) = args.size {
        params.map_size = size;
    }
    if let Some(width) = args.road_width {
        params.road_width = width;
    }
    if let Some(min) = args.min_length {
        params.min_straight_length = min;
    }
    if let Some(max) = args.max_length {
        params.max_straight_length = max;
    }
    if let Some(max_segments) = args.max_segments {
        params.max_segments = max_segments;
    }
    if args.dedupe_landmarks {
        params.dedupe_landmarks = true;
    }

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    config.seed = Some(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    if let Some(ref path) = args.save_config {
        match config.save(Path::new(path)) {
            Ok(()) => println!("Saved configuration to: {}", path),
            Err(e) => eprintln!("Failed to save configuration: {}", e),
        }
    }

    println!("Generating road map with seed: {}", seed);
    println!(
        "Map size: {}x{}, road width {}",
        config.params.map_size, config.params.map_size, config.params.road_width
    );

    let generator = config.generator();
    let mut grid = TileGrid::new(config.params.map_size.max(0) as usize);
    let mut placements = PlacementLog::new();

    let map = match generator.generate_road_map(&mut rng, Some(&mut grid), Some(&mut placements)) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Generation failed: {}", e);
            process::exit(1);
        }
    };

    println!("Generation complete:");
    println!("  Road tiles: {}", map.road_cell_count());
    println!("  Junctions: {}", map.junctions.len());
    println!("  Segments: {} ({} dead ends)", map.stats.segments_created, map.stats.dead_ends);
    let per_orientation: Vec<String> = Orientation::ALL
        .iter()
        .map(|&o| {
            let n = map.corners.iter().filter(|c| c.orientation == o).count();
            format!("{} {}", o.short_name(), n)
        })
        .collect();
    println!("  Corner markers: {} ({})", map.corners.len(), per_orientation.join(", "));
    println!("  Landmarks placed: {}", placements.len());

    if let Some(ref path) = args.output {
        let scale = args.scale.clamp(1, 8);
        match export::export_png(&grid, generator.palette(), &map.landmarks, scale, Path::new(path)) {
            Ok(()) => println!("Exported PNG to: {}", path),
            Err(e) => eprintln!("Failed to export PNG: {}", e),
        }
    }

    if let Some(ref path) = args.export_json {
        match export::export_json(&map, Some(seed), Path::new(path)) {
            Ok(()) => println!("Exported JSON to: {}", path),
            Err(e) => eprintln!("Failed to export JSON: {}", e),
        }
    }

    if let Some(ref path) = args.export_ascii {
        match ascii::export_ascii_file(&grid, generator.palette(), &map, seed, Path::new(path)) {
            Ok(()) => println!("Exported ASCII map to: {}", path),
            Err(e) => eprintln!("Failed to export ASCII map: {}", e),
        }
    }

    if args.ascii {
        ascii::print_ascii_map(&grid, generator.palette(), &map);
        print!("{}", ascii::legend());
    }
}
