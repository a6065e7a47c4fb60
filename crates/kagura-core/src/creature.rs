//! Creature records produced by the summoning ritual

use crate::rarity::Rarity;
use crate::sensor::GeoPoint;
use crate::world::WorldState;
use rand::Rng;
use serde::{Deserialize, Serialize};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const FRAGMENT_LEN: usize = 13;

/// Unique identifier for summoned creatures
///
/// Two independent base-36 fragments concatenated. Collision-tolerant
/// rather than collision-proof: no uniqueness check is made against the
/// existing collection, the random space is simply large enough for the
/// size of a player's codex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(String);

impl CreatureId {
    /// Generate a fresh random identifier
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut id = String::with_capacity(FRAGMENT_LEN * 2);
        for _ in 0..FRAGMENT_LEN * 2 {
            id.push(BASE36[rng.random_range(0..BASE36.len())] as char);
        }
        CreatureId(id)
    }

    /// Wrap an existing identifier (for lookups and deserialized data)
    pub fn from_string(id: impl Into<String>) -> Self {
        CreatureId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named attribute with a strength value in [0.3, 1.0]
///
/// Values never drop below 0.3: every summoned creature is at least
/// competent in all of its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: f32,
}

/// A summoned creature
///
/// Created once by the generator and immutable afterwards, apart from the
/// patch operation the owning collection exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub attributes: Vec<Attribute>,
    pub world_state: WorldState,
    pub image_url: String,
    pub lore: String,
    /// RFC 3339 time of the summon
    pub summoned_at: String,
    /// Location copied verbatim from the ritual's sensor snapshot
    pub location: Option<GeoPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_id_shape() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let id = CreatureId::generate(&mut rng);
        assert_eq!(id.as_str().len(), 26);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_ids_are_independent() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let a = CreatureId::generate(&mut rng);
        let b = CreatureId::generate(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_deterministic_per_seed() {
        let mut rng1 = Xoshiro256StarStar::seed_from_u64(42);
        let mut rng2 = Xoshiro256StarStar::seed_from_u64(42);
        assert_eq!(
            CreatureId::generate(&mut rng1),
            CreatureId::generate(&mut rng2)
        );
    }
}
