//! Creature generation
//!
//! Maps a sensor snapshot and the current world state to one freshly minted
//! creature. Stateless across calls and infallible: missing sensor readings
//! simply skip their rarity contribution.
//!
//! Rarity selection is a biased-additive heuristic, not a normalized
//! probability distribution. The arithmetic, including truncation order,
//! is load-bearing for the live summon odds and must not be reinterpreted
//! as a weighted sample.

use crate::creature::{Attribute, Creature, CreatureId};
use crate::rarity::Rarity;
use crate::sensor::SensorSnapshot;
use crate::world::WorldState;
use rand::prelude::IndexedRandom;
use rand::Rng;

/// Light readings at or above this many lux count as fully lit
const LIGHT_SATURATION_LUX: f32 = 1000.0;

const NAMES_WHISPER_FOG: [&str; 10] = [
    "Mistral Wisp",
    "Fogbringer",
    "Veil Walker",
    "Phantom Drifter",
    "Shroud Weaver",
    "Echo Spirit",
    "Mist Keeper",
    "Veil Singer",
    "Twilight Haunt",
    "Whisper Strider",
];

const NAMES_SIGNAL_STORM: [&str; 10] = [
    "Volt Harbinger",
    "Static Flare",
    "Surge Nexus",
    "Arc Nomad",
    "Pulse Weaver",
    "Storm Caller",
    "Signal Wraith",
    "Spark Hunter",
    "Flux Guardian",
    "Neon Seeker",
];

const NAMES_VOID_TIDE: [&str; 10] = [
    "Deep Lurker",
    "Void Drifter",
    "Abyss Watcher",
    "Cosmic Tide",
    "Star Devourer",
    "Night Caller",
    "Void Dancer",
    "Stellar Nomad",
    "Dark Matter",
    "Nebula Spirit",
];

const NAMES_ECHO_RIFT: [&str; 10] = [
    "Chrono Shifter",
    "Time Weaver",
    "Echo Fragment",
    "Rift Walker",
    "Moment Keeper",
    "Paradox Spirit",
    "Timeline Guard",
    "Memory Drift",
    "Temporal Shade",
    "Fracture Being",
];

const LORE_WHISPER_FOG: [&str; 5] = [
    "Born from the ethereal mists that drift between worlds",
    "Whispers forgotten secrets to those who listen closely",
    "Can only be seen when the veil between worlds thins",
    "Feeds on echoes of memories left in abandoned places",
    "Appears most frequently during fog-shrouded dawns",
];

const LORE_SIGNAL_STORM: [&str; 5] = [
    "Formed from coalesced electromagnetic waves",
    "Can interfere with electronic devices when agitated",
    "Drawn to places with strong wireless signals",
    "Communicates through subtle electrical pulses",
    "Most active during thunderstorms and solar flares",
];

const LORE_VOID_TIDE: [&str; 5] = [
    "A fragment of the cosmic void given form",
    "Emerged from a tear in the fabric of space",
    "Navigates using the gravitational pull of celestial bodies",
    "Most visible under starlit skies away from city lights",
    "Carries echoes of distant galaxies within its essence",
];

const LORE_ECHO_RIFT: [&str; 5] = [
    "Exists simultaneously across multiple timelines",
    "Can glimpse moments from both past and future",
    "Formed in places where time flows inconsistently",
    "Appears most clearly during temporal anomalies",
    "Collects fragments of history in its crystalline core",
];

const ATTRIBUTES_WHISPER_FOG: [&str; 5] = [
    "Etherealness",
    "Whispering",
    "Concealment",
    "Memory Absorption",
    "Mist Control",
];

const ATTRIBUTES_SIGNAL_STORM: [&str; 5] = [
    "Conductivity",
    "Signal Strength",
    "Disruption",
    "Energy Storage",
    "Frequency Control",
];

const ATTRIBUTES_VOID_TIDE: [&str; 5] = [
    "Cosmic Awareness",
    "Void Manipulation",
    "Gravity Distortion",
    "Star Affinity",
    "Space Folding",
];

const ATTRIBUTES_ECHO_RIFT: [&str; 5] = [
    "Temporal Sight",
    "Timeline Hopping",
    "Memory Preservation",
    "Paradox Resistance",
    "Time Distortion",
];

const IMAGES_WHISPER_FOG: [&str; 3] = [
    "https://images.pexels.com/photos/2832382/pexels-photo-2832382.jpeg",
    "https://images.pexels.com/photos/750225/pexels-photo-750225.jpeg",
    "https://images.pexels.com/photos/417074/pexels-photo-417074.jpeg",
];

const IMAGES_SIGNAL_STORM: [&str; 3] = [
    "https://images.pexels.com/photos/3889699/pexels-photo-3889699.jpeg",
    "https://images.pexels.com/photos/19397268/pexels-photo-19397268.jpeg",
    "https://images.pexels.com/photos/3550240/pexels-photo-3550240.jpeg",
];

const IMAGES_VOID_TIDE: [&str; 3] = [
    "https://images.pexels.com/photos/1169754/pexels-photo-1169754.jpeg",
    "https://images.pexels.com/photos/957040/night-photograph-starry-sky-night-sky-957040.jpeg",
    "https://images.pexels.com/photos/4254895/pexels-photo-4254895.jpeg",
];

const IMAGES_ECHO_RIFT: [&str; 3] = [
    "https://images.pexels.com/photos/2098428/pexels-photo-2098428.jpeg",
    "https://images.pexels.com/photos/14674/pexels-photo-14674.jpeg",
    "https://images.pexels.com/photos/3075993/pexels-photo-3075993.jpeg",
];

/// Name pool for a world state
pub fn name_pool(state: WorldState) -> &'static [&'static str; 10] {
    match state {
        WorldState::WhisperFog => &NAMES_WHISPER_FOG,
        WorldState::SignalStorm => &NAMES_SIGNAL_STORM,
        WorldState::VoidTide => &NAMES_VOID_TIDE,
        WorldState::EchoRift => &NAMES_ECHO_RIFT,
    }
}

/// Lore fragment pool for a world state
pub fn lore_pool(state: WorldState) -> &'static [&'static str; 5] {
    match state {
        WorldState::WhisperFog => &LORE_WHISPER_FOG,
        WorldState::SignalStorm => &LORE_SIGNAL_STORM,
        WorldState::VoidTide => &LORE_VOID_TIDE,
        WorldState::EchoRift => &LORE_ECHO_RIFT,
    }
}

/// Attribute labels for a world state, attached in full to every creature
pub fn attribute_labels(state: WorldState) -> &'static [&'static str; 5] {
    match state {
        WorldState::WhisperFog => &ATTRIBUTES_WHISPER_FOG,
        WorldState::SignalStorm => &ATTRIBUTES_SIGNAL_STORM,
        WorldState::VoidTide => &ATTRIBUTES_VOID_TIDE,
        WorldState::EchoRift => &ATTRIBUTES_ECHO_RIFT,
    }
}

/// Sample image pool for a world state
pub fn image_pool(state: WorldState) -> &'static [&'static str; 3] {
    match state {
        WorldState::WhisperFog => &IMAGES_WHISPER_FOG,
        WorldState::SignalStorm => &IMAGES_SIGNAL_STORM,
        WorldState::VoidTide => &IMAGES_VOID_TIDE,
        WorldState::EchoRift => &IMAGES_ECHO_RIFT,
    }
}

fn description_for(state: WorldState, name: &str) -> String {
    match state {
        WorldState::WhisperFog => format!(
            "A mysterious entity that emerges from the ethereal mists. Its form shifts \
             and changes, never quite settling on a single shape. {name} is known to \
             whisper forgotten secrets to those who listen closely."
        ),
        WorldState::SignalStorm => format!(
            "A being of pure energy and electromagnetic waves. {name} pulses with \
             vibrant light that changes frequency with its mood. It's drawn to areas \
             with strong signal transmissions."
        ),
        WorldState::VoidTide => format!(
            "A creature from the cosmic depths, {name} seems to contain fragments of \
             distant stars within its form. It moves with an otherworldly grace that \
             defies normal physics."
        ),
        WorldState::EchoRift => format!(
            "{name} exists in multiple moments simultaneously. Its form appears to \
             glitch and shift between different states as it moves through timelines. \
             Observers report seeing their own past or future reflected in its surface."
        ),
    }
}

/// Pick the rarity tier for a summon
///
/// Additive index into the ordered tier list. Low battery contributes up to
/// 2, darkness up to 1, and a fair coin adds 0 or 1; the sum is clamped to
/// the tier range. Absent readings contribute nothing.
fn select_rarity<R: Rng + ?Sized>(snapshot: &SensorSnapshot, rng: &mut R) -> Rarity {
    let mut index = 0usize;

    if let Some(battery) = snapshot.battery_level {
        let battery_factor = 1.0 - battery;
        index += (battery_factor * 2.0).floor() as usize;
    }

    if let Some(light) = snapshot.light_level {
        let normalized = (light / LIGHT_SATURATION_LUX).min(1.0);
        let light_factor = 1.0 - normalized;
        index += (light_factor * 1.5).floor() as usize;
    }

    index += rng.random_range(0..2);

    Rarity::from_index(index)
}

/// Generate one creature from a sensor snapshot and the active world state
///
/// Convenience wrapper over [`generate_creature_with_rng`] using the thread
/// RNG. Side-effect free apart from the random source; the caller owns
/// persisting the result.
pub fn generate_creature(snapshot: &SensorSnapshot, state: WorldState) -> Creature {
    let mut rng = rand::rng();
    generate_creature_with_rng(snapshot, state, &mut rng)
}

/// Generate one creature using the supplied RNG
pub fn generate_creature_with_rng<R: Rng + ?Sized>(
    snapshot: &SensorSnapshot,
    state: WorldState,
    rng: &mut R,
) -> Creature {
    let rarity = select_rarity(snapshot, rng);

    let name = *name_pool(state)
        .choose(rng)
        .expect("name pool is never empty");

    // All five labels are attached, only the values are rolled
    let attributes = attribute_labels(state)
        .iter()
        .map(|&label| Attribute {
            name: label.to_string(),
            value: rng.random::<f32>() * 0.7 + 0.3,
        })
        .collect();

    // Two independent picks, duplicates allowed
    let lore_fragments = lore_pool(state);
    let lore = format!(
        "{}. {}.",
        lore_fragments
            .choose(rng)
            .expect("lore pool is never empty"),
        lore_fragments
            .choose(rng)
            .expect("lore pool is never empty")
    );

    let image_url = *image_pool(state)
        .choose(rng)
        .expect("image pool is never empty");

    let creature = Creature {
        id: CreatureId::generate(rng),
        name: name.to_string(),
        description: description_for(state, name),
        rarity,
        attributes,
        world_state: state,
        image_url: image_url.to_string(),
        lore,
        summoned_at: chrono::Utc::now().to_rfc3339(),
        location: snapshot.location,
    };

    log::debug!(
        "Generated {} creature '{}' for {}",
        creature.rarity,
        creature.name,
        state
    );

    creature
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::GeoPoint;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn rng(seed: u64) -> Xoshiro256StarStar {
        Xoshiro256StarStar::seed_from_u64(seed)
    }

    #[test]
    fn test_world_state_passthrough() {
        let snapshot = SensorSnapshot::empty();
        for state in WorldState::ALL {
            let creature = generate_creature_with_rng(&snapshot, state, &mut rng(1));
            assert_eq!(creature.world_state, state);
        }
    }

    #[test]
    fn test_rarity_always_in_range() {
        // Extreme inputs must still land on one of the five tiers
        let extremes = [
            SensorSnapshot::empty(),
            SensorSnapshot::empty()
                .with_battery_level(0.0)
                .with_light_level(0.0),
            SensorSnapshot::empty()
                .with_battery_level(1.0)
                .with_light_level(1_000_000.0),
        ];
        for snapshot in &extremes {
            for seed in 0..50 {
                let creature =
                    generate_creature_with_rng(snapshot, WorldState::VoidTide, &mut rng(seed));
                assert!(Rarity::ALL.contains(&creature.rarity));
            }
        }
    }

    #[test]
    fn test_dead_battery_in_darkness_summons_top_tiers() {
        // battery 0 contributes 2, light 0 contributes 1, coin adds 0 or 1:
        // index is 3 or 4 after clamping
        let snapshot = SensorSnapshot::empty()
            .with_battery_level(0.0)
            .with_light_level(0.0);
        for seed in 0..100 {
            let creature =
                generate_creature_with_rng(&snapshot, WorldState::EchoRift, &mut rng(seed));
            assert!(
                creature.rarity == Rarity::Epic || creature.rarity == Rarity::Legendary,
                "got {}",
                creature.rarity
            );
        }
    }

    #[test]
    fn test_full_battery_in_daylight_summons_bottom_tiers() {
        // Both sensor terms contribute 0, only the coin remains
        let snapshot = SensorSnapshot::empty()
            .with_battery_level(1.0)
            .with_light_level(1000.0);
        for seed in 0..100 {
            let creature =
                generate_creature_with_rng(&snapshot, WorldState::WhisperFog, &mut rng(seed));
            assert!(
                creature.rarity == Rarity::Common || creature.rarity == Rarity::Uncommon,
                "got {}",
                creature.rarity
            );
        }
    }

    #[test]
    fn test_missing_sensors_skip_their_contribution() {
        // No readings: only the coin contributes, index is 0 or 1
        let snapshot = SensorSnapshot::empty();
        for seed in 0..100 {
            let creature =
                generate_creature_with_rng(&snapshot, WorldState::VoidTide, &mut rng(seed));
            assert!(creature.rarity <= Rarity::Uncommon);
        }
    }

    #[test]
    fn test_attributes_match_table() {
        let snapshot = SensorSnapshot::empty();
        for state in WorldState::ALL {
            let creature = generate_creature_with_rng(&snapshot, state, &mut rng(3));
            let labels = attribute_labels(state);
            assert_eq!(creature.attributes.len(), labels.len());
            for (attribute, &label) in creature.attributes.iter().zip(labels.iter()) {
                assert_eq!(attribute.name, label);
                assert!(
                    (0.3..=1.0).contains(&attribute.value),
                    "{} = {}",
                    attribute.name,
                    attribute.value
                );
            }
        }
    }

    #[test]
    fn test_location_copied_verbatim() {
        let snapshot = SensorSnapshot::empty().with_location(35.6762, 139.6503);
        let creature = generate_creature_with_rng(&snapshot, WorldState::VoidTide, &mut rng(4));
        assert_eq!(
            creature.location,
            Some(GeoPoint {
                latitude: 35.6762,
                longitude: 139.6503
            })
        );

        let creature =
            generate_creature_with_rng(&SensorSnapshot::empty(), WorldState::VoidTide, &mut rng(4));
        assert_eq!(creature.location, None);
    }

    #[test]
    fn test_name_and_image_come_from_pools() {
        let snapshot = SensorSnapshot::empty();
        for state in WorldState::ALL {
            for seed in 0..20 {
                let creature = generate_creature_with_rng(&snapshot, state, &mut rng(seed));
                assert!(name_pool(state).contains(&creature.name.as_str()));
                assert!(image_pool(state).contains(&creature.image_url.as_str()));
                assert!(creature.description.contains(&creature.name));
            }
        }
    }

    #[test]
    fn test_lore_is_two_fragments() {
        let snapshot = SensorSnapshot::empty();
        let creature = generate_creature_with_rng(&snapshot, WorldState::SignalStorm, &mut rng(5));
        assert!(creature.lore.ends_with('.'));
        let fragments: Vec<&str> = creature
            .lore
            .trim_end_matches('.')
            .split(". ")
            .collect();
        assert_eq!(fragments.len(), 2);
        for fragment in fragments {
            assert!(lore_pool(WorldState::SignalStorm).contains(&fragment));
        }
    }

    #[test]
    fn test_repeat_calls_yield_distinct_ids() {
        let snapshot = SensorSnapshot::empty();
        let mut rng = rng(6);
        let first = generate_creature_with_rng(&snapshot, WorldState::EchoRift, &mut rng);
        let second = generate_creature_with_rng(&snapshot, WorldState::EchoRift, &mut rng);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_table_sizes() {
        for state in WorldState::ALL {
            assert_eq!(name_pool(state).len(), 10);
            assert_eq!(lore_pool(state).len(), 5);
            assert_eq!(attribute_labels(state).len(), 5);
            assert_eq!(image_pool(state).len(), 3);
        }
    }
}
