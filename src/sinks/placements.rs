use serde::{Deserialize, Serialize};

use crate::palette::PrefabId;
use crate::sinks::{InstantiationSink, WorldPos};

/// One recorded instantiation request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub prefab: PrefabId,
    pub position: WorldPos,
}

/// Instantiation sink that records requests in order
#[derive(Clone, Debug, Default)]
pub struct PlacementLog {
    pub placements: Vec<Placement>,
}

impl PlacementLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl InstantiationSink for PlacementLog {
    fn instantiate(&mut self, prefab: &PrefabId, position: WorldPos) {
        self.placements.push(Placement {
            prefab: prefab.clone(),
            position,
        });
    }
}
