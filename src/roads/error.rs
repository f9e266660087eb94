/// Precondition failures detected before a generation pass touches any state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadError {
    /// No tile sink was supplied to render the map into
    MissingTileSink,
    /// The palette has no primary road tile
    MissingRoadTile,
    /// A configuration value violates its constraint
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
}

impl RoadError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RoadError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for RoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoadError::MissingTileSink => write!(f, "No tile sink assigned"),
            RoadError::MissingRoadTile => write!(f, "No road tile assigned in the palette"),
            RoadError::InvalidConfig { field, reason } => {
                write!(f, "Invalid configuration for {}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for RoadError {}
