//! Debug tool for comparing road presets visually
//! Renders every preset for a handful of seeds and tiles the results into one PNG,
//! one row per preset, one column per seed.

use image::{imageops, ImageBuffer, Rgb, RgbImage};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use road_generator::export::render_tile_image;
use road_generator::palette::TilePalette;
use road_generator::roads::{RoadGenerator, RoadPreset};
use road_generator::sinks::{PlacementLog, TileGrid};

const SEEDS: [u64; 4] = [1, 7, 42, 1234];
const SCALE: u32 = 2;
const OUTPUT: &str = "road_comparison.png";

/// Label band colour per preset row
const BAND_COLORS: [[u8; 3]; 2] = [[60, 90, 150], [150, 90, 60]];

struct Variant {
    preset: RoadPreset,
    seed: u64,
    image: RgbImage,
    road_cells: usize,
    junctions: usize,
}

fn main() {
    println!("Generating road comparison grid...");

    let presets = RoadPreset::all();
    let jobs: Vec<(RoadPreset, u64)> = presets
        .iter()
        .flat_map(|&preset| SEEDS.iter().map(move |&seed| (preset, seed)))
        .collect();

    let variants: Vec<Variant> = jobs
        .par_iter()
        .filter_map(|&(preset, seed)| render_variant(preset, seed))
        .collect();

    for v in &variants {
        println!(
            "  {:<8} seed {:>5}: {:>6} road tiles, {:>4} junctions",
            v.preset.to_string(),
            v.seed,
            v.road_cells,
            v.junctions
        );
    }

    let grid = create_grid(&variants, SEEDS.len(), presets.len());
    match grid.save(OUTPUT) {
        Ok(()) => println!("Saved {}", OUTPUT),
        Err(e) => {
            eprintln!("Failed to save {}: {}", OUTPUT, e);
            std::process::exit(1);
        }
    }
}

fn render_variant(preset: RoadPreset, seed: u64) -> Option<Variant> {
    let params = preset.params();
    let palette = TilePalette::default();
    let generator = RoadGenerator::new(params.clone(), palette.clone());

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut tiles = TileGrid::new(params.map_size as usize);
    let mut placements = PlacementLog::new();

    match generator.generate_road_map(&mut rng, Some(&mut tiles), Some(&mut placements)) {
        Ok(map) => Some(Variant {
            preset,
            seed,
            image: render_tile_image(&tiles, &palette, &map.landmarks, SCALE),
            road_cells: map.road_cell_count(),
            junctions: map.junctions.len(),
        }),
        Err(e) => {
            eprintln!("  {} seed {} failed: {}", preset, seed, e);
            None
        }
    }
}

/// Tile variants row-major; each cell gets a coloured band above it marking the preset.
fn create_grid(variants: &[Variant], cols: usize, rows: usize) -> RgbImage {
    let Some(cell_size) = variants.iter().map(|v| v.image.width()).max() else {
        return ImageBuffer::new(1, 1);
    };

    let band_height = 8u32;
    let gap = 4u32;
    let pitch_x = cell_size + gap;
    let pitch_y = cell_size + band_height + gap;

    let mut grid: RgbImage =
        ImageBuffer::from_pixel(pitch_x * cols as u32, pitch_y * rows as u32, Rgb([40, 40, 40]));

    let presets = RoadPreset::all();
    for v in variants {
        let Some(row) = presets.iter().position(|&p| p == v.preset) else {
            continue;
        };
        let Some(col) = SEEDS.iter().position(|&s| s == v.seed) else {
            continue;
        };
        if row >= rows || col >= cols {
            continue;
        }

        let x0 = col as u32 * pitch_x;
        let y0 = row as u32 * pitch_y;
        let band = BAND_COLORS[row % BAND_COLORS.len()];
        for y in 0..band_height {
            for x in 0..v.image.width() {
                grid.put_pixel(x0 + x, y0 + y, Rgb(band));
            }
        }

        imageops::replace(&mut grid, &v.image, x0 as i64, (y0 + band_height) as i64);
    }

    grid
}
