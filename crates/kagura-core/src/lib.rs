//! Core engine for Kagura, a creature-summoning ritual game
//!
//! This crate implements:
//! - The four-state world cycle and its per-state metadata
//! - Sensor snapshots captured during the summoning ritual
//! - The creature generator mapping snapshot + world state to a creature
//!
//! Screens, animation and sensor polling live in the app layer; this crate
//! is pure data and generation logic.

pub mod creature;
pub mod generator;
pub mod rarity;
pub mod sensor;
pub mod world;

// Re-export main types for convenience
pub use creature::{Attribute, Creature, CreatureId};
pub use generator::{generate_creature, generate_creature_with_rng};
pub use rarity::Rarity;
pub use sensor::{GeoPoint, MotionVector, SensorSnapshot};
pub use world::{WorldState, WorldStateInfo, WorldStateRegistry};
