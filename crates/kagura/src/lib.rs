//! Kagura app layer: collection, settings, shop, persistence and the
//! ritual flow that ties them to the `kagura-core` generator.

pub mod collection;
pub mod persistence;
pub mod ritual;
pub mod settings;
pub mod shop;

pub use collection::{Collection, CreaturePatch};
pub use persistence::{ProfileMetadata, ProfilePersistence};
pub use ritual::{current_world_state, perform_ritual};
pub use settings::{DataCollection, Settings, Theme};
pub use shop::{ItemId, Shop, ShopError};
