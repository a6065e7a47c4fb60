//! Profile persistence
//!
//! One directory per profile under `saves/`. Human-readable metadata
//! (settings, shop, summon counters) goes to `profile.ron`; the creature
//! list goes to `collection.bin` as compressed bincode with an atomic
//! write. Corrupt or missing files fall back to defaults so a broken save
//! never blocks the game from starting.

use anyhow::{Context, Result};
use kagura_core::Creature;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::collection::Collection;
use crate::settings::Settings;
use crate::shop::Shop;

const METADATA_VERSION: u32 = 1;

/// Profile metadata stored in profile.ron (RON format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub version: u32,
    pub created_at: String,
    pub last_played: String,
    pub summon_count: u64,
    pub last_summon: Option<String>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub shop: Shop,
}

impl Default for ProfileMetadata {
    fn default() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            version: METADATA_VERSION,
            created_at: now.clone(),
            last_played: now,
            summon_count: 0,
            last_summon: None,
            settings: Settings::default(),
            shop: Shop::default(),
        }
    }
}

/// Manages save/load for one profile directory
pub struct ProfilePersistence {
    profile_dir: PathBuf,
}

impl ProfilePersistence {
    /// Create a persistence manager for the given profile name
    pub fn new(profile_name: &str) -> Result<Self> {
        let profile_dir = PathBuf::from("saves").join(profile_name);
        std::fs::create_dir_all(&profile_dir).context("Failed to create profile directory")?;
        Ok(Self { profile_dir })
    }

    /// Save the full profile state
    pub fn save(&self, collection: &Collection, settings: &Settings, shop: &Shop) -> Result<()> {
        // Keep the original creation time across saves
        let created_at = self.load_metadata().created_at;
        let metadata = ProfileMetadata {
            version: METADATA_VERSION,
            created_at,
            last_played: chrono::Utc::now().to_rfc3339(),
            summon_count: collection.summon_count(),
            last_summon: collection.last_summon().map(str::to_string),
            settings: settings.clone(),
            shop: shop.clone(),
        };
        self.save_metadata(&metadata)?;
        self.save_creatures(collection.creatures())?;
        log::info!(
            "Saved profile to {:?} ({} creatures)",
            self.profile_dir,
            collection.len()
        );
        Ok(())
    }

    /// Load the full profile state, falling back to defaults where needed
    pub fn load(&self) -> (Collection, Settings, Shop) {
        let metadata = self.load_metadata();
        let creatures = self.load_creatures();
        let collection =
            Collection::from_parts(creatures, metadata.summon_count, metadata.last_summon);
        (collection, metadata.settings, metadata.shop)
    }

    /// Save profile metadata to disk
    pub fn save_metadata(&self, metadata: &ProfileMetadata) -> Result<()> {
        let path = self.profile_dir.join("profile.ron");
        let serialized = ron::ser::to_string_pretty(metadata, Default::default())
            .context("Failed to serialize profile metadata")?;
        std::fs::write(path, serialized).context("Failed to write profile metadata")?;
        Ok(())
    }

    /// Load profile metadata from disk, or create default
    pub fn load_metadata(&self) -> ProfileMetadata {
        let path = self.profile_dir.join("profile.ron");

        if !path.exists() {
            log::info!("No profile metadata found, starting a new profile");
            return ProfileMetadata::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(metadata) => metadata,
                Err(e) => {
                    log::warn!("Failed to parse profile metadata: {}, using defaults", e);
                    ProfileMetadata::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read profile metadata: {}, using defaults", e);
                ProfileMetadata::default()
            }
        }
    }

    /// Save the creature list with compression
    fn save_creatures(&self, creatures: &[Creature]) -> Result<()> {
        let path = self.collection_path();

        let serialized =
            bincode_next::serde::encode_to_vec(creatures, bincode_next::config::standard())
                .context("Failed to serialize collection")?;
        let compressed = lz4_flex::compress_prepend_size(&serialized);

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, compressed).context("Failed to write collection temp file")?;
        std::fs::rename(temp_path, &path).context("Failed to rename collection file")?;

        Ok(())
    }

    /// Load the creature list, or an empty one if missing or unreadable
    fn load_creatures(&self) -> Vec<Creature> {
        let path = self.collection_path();

        if !path.exists() {
            return Vec::new();
        }

        match self.load_creatures_file(&path) {
            Ok(creatures) => {
                log::debug!("Loaded {} creatures from {:?}", creatures.len(), path);
                creatures
            }
            Err(e) => {
                log::warn!("Failed to load collection: {}, starting empty", e);
                Vec::new()
            }
        }
    }

    fn load_creatures_file(&self, path: &Path) -> Result<Vec<Creature>> {
        let compressed = std::fs::read(path).context("Failed to read collection file")?;
        let serialized = lz4_flex::decompress_size_prepended(&compressed)
            .context("Failed to decompress collection")?;
        let (creatures, _): (Vec<Creature>, _) =
            bincode_next::serde::decode_from_slice(&serialized, bincode_next::config::standard())
                .map_err(|e| anyhow::anyhow!("Failed to deserialize collection: {:?}", e))?;
        Ok(creatures)
    }

    fn collection_path(&self) -> PathBuf {
        self.profile_dir.join("collection.bin")
    }

    /// Delete a profile directory entirely (used by `reset`)
    pub fn delete_profile(profile_name: &str) -> Result<()> {
        let profile_dir = PathBuf::from("saves").join(profile_name);
        if profile_dir.exists() {
            std::fs::remove_dir_all(&profile_dir).context("Failed to delete profile directory")?;
            log::info!("Deleted profile: {}", profile_name);
        }
        Ok(())
    }
}
