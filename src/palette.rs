//! Tile and prefab identifiers used when a road map is applied to sinks

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a tile understood by a tile sink
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileKind(pub String);

impl TileKind {
    pub fn new(name: impl Into<String>) -> Self {
        TileKind(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of an object template handed to an instantiation sink
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefabId(pub String);

impl PrefabId {
    pub fn new(name: impl Into<String>) -> Self {
        PrefabId(name.into())
    }
}

impl fmt::Display for PrefabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tiles and prefabs the generator emits.
///
/// Only `road` is required. A missing background leaves non-road cells
/// empty, an incomplete corner set skips corner markers and a missing
/// landmark prefab skips landmark placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilePalette {
    pub background: Option<TileKind>,
    pub road: Option<TileKind>,
    /// Corner markers ordered NE, NW, SW, SE
    pub corners: [Option<TileKind>; 4],
    pub landmark: Option<PrefabId>,
}

impl Default for TilePalette {
    fn default() -> Self {
        Self {
            background: Some(TileKind::new("grass")),
            road: Some(TileKind::new("road")),
            corners: [
                Some(TileKind::new("corner_ne")),
                Some(TileKind::new("corner_nw")),
                Some(TileKind::new("corner_sw")),
                Some(TileKind::new("corner_se")),
            ],
            landmark: Some(PrefabId::new("traffic_light")),
        }
    }
}

impl TilePalette {
    /// Palette with a road tile and nothing else
    pub fn road_only(road: TileKind) -> Self {
        Self {
            background: None,
            road: Some(road),
            corners: [None, None, None, None],
            landmark: None,
        }
    }

    /// The four corner tiles, if all are set and pairwise distinct.
    pub fn corner_set(&self) -> Option<[TileKind; 4]> {
        let [ne, nw, sw, se] = &self.corners;
        let set = [ne.clone()?, nw.clone()?, sw.clone()?, se.clone()?];
        for i in 0..set.len() {
            for j in (i + 1)..set.len() {
                if set[i] == set[j] {
                    return None;
                }
            }
        }
        Some(set)
    }

    /// Index of `tile` in the corner set (NE, NW, SW, SE order).
    pub fn corner_index(&self, tile: &TileKind) -> Option<usize> {
        self.corners.iter().position(|c| c.as_ref() == Some(tile))
    }
}
