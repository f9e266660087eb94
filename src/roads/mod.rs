//! Procedural road network generation
//!
//! Builds the drivable layout of a top-down map in one synchronous pass:
//! - Straight runs grown from a frontier of junctions, starting at the map centre
//! - Collision and boundary checks that keep parallel roads apart
//! - Square dilation of the one-cell skeleton to full road width
//! - Corner markers where the widened band turns
//! - Landmark spots just outside the band around every junction
//!
//! All randomness comes from an injected [`RandomSource`], so a seeded
//! source reproduces the same map.

pub mod corners;
pub mod error;
pub mod generator;
pub mod growth;
pub mod landmarks;
pub mod occupancy;
pub mod params;
pub mod rng;
pub mod types;
pub mod widen;

pub use error::RoadError;
pub use generator::RoadGenerator;
pub use occupancy::GridOccupancy;
pub use params::{CollisionRadius, RoadParams, RoadPreset};
pub use rng::RandomSource;
pub use types::*;
