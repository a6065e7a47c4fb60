//! World state system driving summon odds and flavor
//!
//! The world cycles through four fixed states on a wall-clock schedule.
//! Each state carries display metadata, a rarity weight table shown to the
//! player as summon odds, and affinity keywords used for flavor.

use crate::rarity::Rarity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The four fixed conditions the game world can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldState {
    WhisperFog,
    SignalStorm,
    VoidTide,
    EchoRift,
}

impl WorldState {
    /// All world states
    pub const ALL: [WorldState; 4] = [
        WorldState::WhisperFog,
        WorldState::SignalStorm,
        WorldState::VoidTide,
        WorldState::EchoRift,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            WorldState::WhisperFog => "Whisper Fog",
            WorldState::SignalStorm => "Signal Storm",
            WorldState::VoidTide => "Void Tide",
            WorldState::EchoRift => "Echo Rift",
        }
    }

    /// World state scheduled for the given hour of day
    ///
    /// The world shifts every six hours: the small hours belong to the rift,
    /// mornings to the fog, afternoons to the storm, evenings to the tide.
    pub fn for_hour(hour: u32) -> Self {
        match hour % 24 {
            0..=5 => WorldState::EchoRift,
            6..=11 => WorldState::WhisperFog,
            12..=17 => WorldState::SignalStorm,
            _ => WorldState::VoidTide,
        }
    }

    /// Parse a state from its identifier (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "whisperfog" | "whisper-fog" => Some(WorldState::WhisperFog),
            "signalstorm" | "signal-storm" => Some(WorldState::SignalStorm),
            "voidtide" | "void-tide" => Some(WorldState::VoidTide),
            "echorift" | "echo-rift" => Some(WorldState::EchoRift),
            _ => None,
        }
    }
}

impl std::fmt::Display for WorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Defines the characteristics of a world state
#[derive(Debug, Clone)]
pub struct WorldStateInfo {
    pub name: &'static str,
    pub state: WorldState,
    pub description: &'static str,

    /// Advertised summon odds per tier, informally summing to 1.0.
    /// Display data only: the generator uses its own sensor-biased
    /// heuristic, not a draw from this table.
    pub rarity_weights: HashMap<Rarity, f32>,

    /// Flavor keywords associated with this state
    pub affinity: Vec<&'static str>,
}

impl WorldStateInfo {
    /// Create the Whisper Fog definition
    pub fn whisper_fog() -> Self {
        let mut rarity_weights = HashMap::new();
        rarity_weights.insert(Rarity::Common, 0.5);
        rarity_weights.insert(Rarity::Uncommon, 0.3);
        rarity_weights.insert(Rarity::Rare, 0.15);
        rarity_weights.insert(Rarity::Epic, 0.04);
        rarity_weights.insert(Rarity::Legendary, 0.01);

        Self {
            name: "Whisper Fog",
            state: WorldState::WhisperFog,
            description:
                "The veil between worlds is thin, spectral energies drift through the mundane.",
            rarity_weights,
            affinity: vec!["ethereal", "spectral", "mist"],
        }
    }

    /// Create the Signal Storm definition
    pub fn signal_storm() -> Self {
        let mut rarity_weights = HashMap::new();
        rarity_weights.insert(Rarity::Common, 0.35);
        rarity_weights.insert(Rarity::Uncommon, 0.35);
        rarity_weights.insert(Rarity::Rare, 0.2);
        rarity_weights.insert(Rarity::Epic, 0.08);
        rarity_weights.insert(Rarity::Legendary, 0.02);

        Self {
            name: "Signal Storm",
            state: WorldState::SignalStorm,
            description:
                "Digital energies surge through reality, creating fluctuations in electromagnetic fields.",
            rarity_weights,
            affinity: vec!["electric", "technological", "storm"],
        }
    }

    /// Create the Void Tide definition
    pub fn void_tide() -> Self {
        let mut rarity_weights = HashMap::new();
        rarity_weights.insert(Rarity::Common, 0.25);
        rarity_weights.insert(Rarity::Uncommon, 0.3);
        rarity_weights.insert(Rarity::Rare, 0.25);
        rarity_weights.insert(Rarity::Epic, 0.15);
        rarity_weights.insert(Rarity::Legendary, 0.05);

        Self {
            name: "Void Tide",
            state: WorldState::VoidTide,
            description:
                "The cosmic depths rise, stars flicker as ancient entities drift closer to our realm.",
            rarity_weights,
            affinity: vec!["cosmic", "void", "deep"],
        }
    }

    /// Create the Echo Rift definition
    pub fn echo_rift() -> Self {
        let mut rarity_weights = HashMap::new();
        rarity_weights.insert(Rarity::Common, 0.2);
        rarity_weights.insert(Rarity::Uncommon, 0.25);
        rarity_weights.insert(Rarity::Rare, 0.3);
        rarity_weights.insert(Rarity::Epic, 0.18);
        rarity_weights.insert(Rarity::Legendary, 0.07);

        Self {
            name: "Echo Rift",
            state: WorldState::EchoRift,
            description:
                "Time fractures, allowing echoes from past and future to bleed into the present.",
            rarity_weights,
            affinity: vec!["time", "distortion", "echo"],
        }
    }

    /// Get the advertised weight for a tier (0.0 if not listed)
    pub fn rarity_weight(&self, tier: Rarity) -> f32 {
        *self.rarity_weights.get(&tier).unwrap_or(&0.0)
    }
}

/// Registry of all world state definitions
pub struct WorldStateRegistry {
    states: HashMap<WorldState, WorldStateInfo>,
}

impl Default for WorldStateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldStateRegistry {
    pub fn new() -> Self {
        let mut states = HashMap::new();
        states.insert(WorldState::WhisperFog, WorldStateInfo::whisper_fog());
        states.insert(WorldState::SignalStorm, WorldStateInfo::signal_storm());
        states.insert(WorldState::VoidTide, WorldStateInfo::void_tide());
        states.insert(WorldState::EchoRift, WorldStateInfo::echo_rift());

        Self { states }
    }

    pub fn get(&self, state: WorldState) -> &WorldStateInfo {
        self.states
            .get(&state)
            .expect("World state definition not found")
    }
}
