//! Summoning ritual orchestration
//!
//! The engine-facing half of the ritual flow: applies the player's data
//! collection opt-ins to the raw snapshot, stamps capture time, resolves
//! the active world state, runs the generator and records the result. The
//! world state is an explicit parameter so the generator stays pure and
//! the UI can override it.

use chrono::Timelike;
use kagura_core::{generate_creature, CreatureId, SensorSnapshot, WorldState};

use crate::collection::Collection;
use crate::settings::Settings;

/// World state scheduled for the local wall clock right now
pub fn current_world_state() -> WorldState {
    WorldState::for_hour(chrono::Local::now().hour())
}

/// Run one summoning ritual and append the result to the collection
///
/// Returns the new creature's id.
pub fn perform_ritual(
    raw_snapshot: &SensorSnapshot,
    settings: &Settings,
    world_state: WorldState,
    collection: &mut Collection,
) -> CreatureId {
    let mut snapshot = settings.data_collection.filter(raw_snapshot);

    // Stamp capture time and timezone if the caller didn't
    if snapshot.timestamp.is_none() {
        snapshot.timestamp = Some(chrono::Utc::now().to_rfc3339());
    }
    if snapshot.timezone.is_none() {
        snapshot.timezone = Some(chrono::Local::now().offset().to_string());
    }

    let creature = generate_creature(&snapshot, world_state);
    let id = creature.id.clone();
    log::info!(
        "Ritual complete under {}: summoned {} '{}'",
        world_state,
        creature.rarity,
        creature.name
    );
    collection.add_summon(creature);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DataCollection;
    use kagura_core::Rarity;

    #[test]
    fn test_ritual_appends_to_collection() {
        let mut collection = Collection::new();
        let settings = Settings::default();
        let snapshot = SensorSnapshot::empty().with_battery_level(0.9);

        let id = perform_ritual(&snapshot, &settings, WorldState::VoidTide, &mut collection);

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.summon_count(), 1);
        let creature = collection.get(&id).unwrap();
        assert_eq!(creature.world_state, WorldState::VoidTide);
    }

    #[test]
    fn test_opted_out_sensors_lose_their_rarity_bias() {
        // Raw snapshot screams "legendary" but the player opted out of both
        // rarity-biasing sensors, so only the coin term remains
        let settings = Settings {
            data_collection: DataCollection {
                battery_level: false,
                light_sensor: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let snapshot = SensorSnapshot::empty()
            .with_battery_level(0.0)
            .with_light_level(0.0);

        let mut collection = Collection::new();
        for _ in 0..50 {
            let id = perform_ritual(&snapshot, &settings, WorldState::EchoRift, &mut collection);
            let creature = collection.get(&id).unwrap();
            assert!(creature.rarity <= Rarity::Uncommon, "got {}", creature.rarity);
        }
    }

    #[test]
    fn test_ritual_stamps_capture_time() {
        let mut collection = Collection::new();
        let settings = Settings::default();

        let id = perform_ritual(
            &SensorSnapshot::empty(),
            &settings,
            current_world_state(),
            &mut collection,
        );
        assert!(collection.get(&id).is_some());
    }
}
