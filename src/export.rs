//! PNG and JSON export of generated road maps

use std::fs::File;
use std::io::Write;
use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::palette::{TileKind, TilePalette};
use crate::roads::{Cell, CornerMarker, GenerationStats, LandmarkPosition, RoadMap};
use crate::sinks::TileGrid;

const EMPTY_COLOR: [u8; 3] = [0, 0, 0];
const BACKGROUND_COLOR: [u8; 3] = [86, 140, 70];
const ROAD_COLOR: [u8; 3] = [70, 70, 76];
const UNKNOWN_COLOR: [u8; 3] = [220, 0, 220];
const LANDMARK_COLOR: [u8; 3] = [230, 40, 40];

/// Corner colours in NE, NW, SW, SE order
const CORNER_COLORS: [[u8; 3]; 4] = [
    [240, 200, 60],
    [240, 150, 50],
    [230, 110, 40],
    [250, 230, 110],
];

/// Colour for a tile as the palette understands it.
pub fn tile_color(tile: Option<&TileKind>, palette: &TilePalette) -> [u8; 3] {
    let Some(tile) = tile else {
        return EMPTY_COLOR;
    };

    if palette.road.as_ref() == Some(tile) {
        ROAD_COLOR
    } else if palette.background.as_ref() == Some(tile) {
        BACKGROUND_COLOR
    } else if let Some(i) = palette.corner_index(tile) {
        CORNER_COLORS[i]
    } else {
        UNKNOWN_COLOR
    }
}

/// Render a tile grid to an image, `scale` pixels per cell, north up.
/// Landmark cells are drawn as a dot in the middle of their cell.
pub fn render_tile_image(
    grid: &TileGrid,
    palette: &TilePalette,
    landmarks: &[LandmarkPosition],
    scale: u32,
) -> RgbImage {
    let scale = scale.max(1);
    let size = grid.size() as u32;
    let mut img: RgbImage = ImageBuffer::new(size * scale, size * scale);

    for y in 0..size {
        for x in 0..size {
            let color = tile_color(grid.tile(Cell::new(x as i32, y as i32)), palette);
            fill_cell(&mut img, x, size - 1 - y, scale, color, 0);
        }
    }

    for landmark in landmarks {
        let c = landmark.cell;
        if c.in_map(size as i32) {
            let inset = scale / 4;
            fill_cell(&mut img, c.x as u32, size - 1 - c.y as u32, scale, LANDMARK_COLOR, inset);
        }
    }

    img
}

fn fill_cell(img: &mut RgbImage, col: u32, row: u32, scale: u32, color: [u8; 3], inset: u32) {
    for py in inset..scale - inset {
        for px in inset..scale - inset {
            img.put_pixel(col * scale + px, row * scale + py, Rgb(color));
        }
    }
}

/// Export a tile grid as a PNG.
pub fn export_png(
    grid: &TileGrid,
    palette: &TilePalette,
    landmarks: &[LandmarkPosition],
    scale: u32,
    path: &Path,
) -> Result<(), ExportError> {
    let img = render_tile_image(grid, palette, landmarks, scale);
    img.save(path)?;
    Ok(())
}

/// Exported road map data
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoadMapExport {
    pub seed: Option<u64>,
    pub map_size: i32,
    pub road_width: i32,
    pub origin: Cell,
    pub junctions: Vec<Cell>,
    pub skeleton: Vec<Cell>,
    pub road_cells: Vec<Cell>,
    pub corners: Vec<CornerMarker>,
    pub landmarks: Vec<LandmarkPosition>,
    pub stats: GenerationStats,
}

impl RoadMapExport {
    pub fn from_map(map: &RoadMap, seed: Option<u64>) -> Self {
        Self {
            seed,
            map_size: map.map_size,
            road_width: map.road_width,
            origin: map.origin,
            junctions: map.junctions.clone(),
            skeleton: map.skeleton.sorted_cells(),
            road_cells: map.mask.sorted_cells(),
            corners: map.corners.clone(),
            landmarks: map.landmarks.clone(),
            stats: map.stats,
        }
    }
}

/// Export a road map to a JSON file
pub fn export_json(map: &RoadMap, seed: Option<u64>, path: &Path) -> Result<(), ExportError> {
    let export = RoadMapExport::from_map(map, seed);
    let json = serde_json::to_string_pretty(&export)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}

/// Export errors
#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Image(image::ImageError),
    Json(serde_json::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "IO error: {}", e),
            ExportError::Image(e) => write!(f, "Failed to save image: {}", e),
            ExportError::Json(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Image(e)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(e: serde_json::Error) -> Self {
        ExportError::Json(e)
    }
}
