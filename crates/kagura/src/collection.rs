//! The player's creature collection
//!
//! Ordered list of summoned creatures plus summon bookkeeping. Creatures
//! are appended by the ritual flow and only ever change through the patch
//! operation here.

use kagura_core::{Creature, CreatureId, Rarity, WorldState};
use serde::{Deserialize, Serialize};

/// Partial update applied to a creature by id
///
/// Only the player-editable display fields can be patched; rarity,
/// attributes and provenance are fixed at summon time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreaturePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub lore: Option<String>,
    pub image_url: Option<String>,
}

/// Collection of summoned creatures with summon counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collection {
    creatures: Vec<Creature>,
    summon_count: u64,
    /// RFC 3339 time of the most recent summon
    last_summon: Option<String>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a collection from persisted parts
    pub fn from_parts(
        creatures: Vec<Creature>,
        summon_count: u64,
        last_summon: Option<String>,
    ) -> Self {
        Self {
            creatures,
            summon_count,
            last_summon,
        }
    }

    /// Append a freshly summoned creature and update the counters
    pub fn add_summon(&mut self, creature: Creature) {
        log::info!(
            "Adding {} '{}' to collection ({} summons so far)",
            creature.rarity,
            creature.name,
            self.summon_count
        );
        self.last_summon = Some(chrono::Utc::now().to_rfc3339());
        self.summon_count += 1;
        self.creatures.push(creature);
    }

    /// Release a creature by id. Returns false if it was not in the collection
    pub fn remove(&mut self, id: &CreatureId) -> bool {
        let before = self.creatures.len();
        self.creatures.retain(|c| &c.id != id);
        let removed = self.creatures.len() < before;
        if removed {
            log::info!("Released creature {}", id);
        }
        removed
    }

    /// Empty the collection. Summon counters are lifetime totals and survive
    pub fn clear(&mut self) {
        log::info!("Clearing collection of {} creatures", self.creatures.len());
        self.creatures.clear();
    }

    /// Apply a partial update to a creature by id
    pub fn update(&mut self, id: &CreatureId, patch: CreaturePatch) -> bool {
        let Some(creature) = self.creatures.iter_mut().find(|c| &c.id == id) else {
            return false;
        };
        if let Some(name) = patch.name {
            creature.name = name;
        }
        if let Some(description) = patch.description {
            creature.description = description;
        }
        if let Some(lore) = patch.lore {
            creature.lore = lore;
        }
        if let Some(image_url) = patch.image_url {
            creature.image_url = image_url;
        }
        true
    }

    pub fn get(&self, id: &CreatureId) -> Option<&Creature> {
        self.creatures.iter().find(|c| &c.id == id)
    }

    pub fn get_mut(&mut self, id: &CreatureId) -> Option<&mut Creature> {
        self.creatures.iter_mut().find(|c| &c.id == id)
    }

    /// Creatures in summon order
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Lifetime number of summons, including released creatures
    pub fn summon_count(&self) -> u64 {
        self.summon_count
    }

    pub fn last_summon(&self) -> Option<&str> {
        self.last_summon.as_deref()
    }

    pub fn count_by_rarity(&self, rarity: Rarity) -> usize {
        self.creatures.iter().filter(|c| c.rarity == rarity).count()
    }

    pub fn count_by_world_state(&self, state: WorldState) -> usize {
        self.creatures
            .iter()
            .filter(|c| c.world_state == state)
            .count()
    }

    /// Creatures for persistence
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }
}
