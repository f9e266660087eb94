//! ASCII rendering and export for road maps
//!
//! Renders a tile grid as text, north up, and writes it to a file with a
//! short header and legend.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::palette::{TileKind, TilePalette};
use crate::roads::{Cell, RoadMap};
use crate::sinks::TileGrid;

/// Corner glyphs in NE, NW, SW, SE order (numpad layout)
const CORNER_CHARS: [char; 4] = ['9', '7', '1', '3'];

/// Get ASCII character for a tile
pub fn tile_char(tile: Option<&TileKind>, palette: &TilePalette) -> char {
    let Some(tile) = tile else {
        return ' ';
    };

    if palette.road.as_ref() == Some(tile) {
        '#'
    } else if palette.background.as_ref() == Some(tile) {
        '.'
    } else if let Some(i) = palette.corner_index(tile) {
        CORNER_CHARS[i]
    } else {
        '?'
    }
}

/// Render a tile grid as text, one line per row, with landmarks drawn as `T`.
pub fn render_ascii_map(grid: &TileGrid, palette: &TilePalette, landmarks: &[Cell]) -> String {
    let size = grid.size() as i32;
    let landmarks: HashSet<Cell> = landmarks.iter().copied().collect();
    let mut output = String::with_capacity(((size + 1) * size) as usize);

    for y in (0..size).rev() {
        for x in 0..size {
            let cell = Cell::new(x, y);
            let ch = if landmarks.contains(&cell) {
                'T'
            } else {
                tile_char(grid.tile(cell), palette)
            };
            output.push(ch);
        }
        output.push('\n');
    }

    output
}

pub fn legend() -> String {
    let mut s = String::new();
    s.push_str("=== LEGEND ===\n");
    s.push_str("  . background   # road   T landmark\n");
    s.push_str("  9 NE corner    7 NW corner   1 SW corner   3 SE corner\n");
    s.push_str("  ? unknown tile (blank = empty)\n");
    s
}

/// Print ASCII map to stdout
pub fn print_ascii_map(grid: &TileGrid, palette: &TilePalette, map: &RoadMap) {
    let cells: Vec<Cell> = map.landmarks.iter().map(|l| l.cell).collect();
    print!("{}", render_ascii_map(grid, palette, &cells));
}

/// Export a road map to an ASCII text file
pub fn export_ascii_file(
    grid: &TileGrid,
    palette: &TilePalette,
    map: &RoadMap,
    seed: u64,
    path: &Path,
) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "=== ROAD GENERATOR MAP ===")?;
    writeln!(file, "Seed: {}", seed)?;
    writeln!(file, "Size: {}x{}", map.map_size, map.map_size)?;
    writeln!(file, "Road width: {}", map.road_width)?;
    writeln!(
        file,
        "Road tiles: {}  Junctions: {}  Segments: {}  Dead ends: {}",
        map.road_cell_count(),
        map.junctions.len(),
        map.stats.segments_created,
        map.stats.dead_ends
    )?;
    writeln!(file, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file)?;

    let cells: Vec<Cell> = map.landmarks.iter().map(|l| l.cell).collect();
    write!(file, "{}", render_ascii_map(grid, palette, &cells))?;
    writeln!(file)?;
    write!(file, "{}", legend())?;

    Ok(())
}
