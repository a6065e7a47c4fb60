//! In-game shop
//!
//! Fixed item catalog, a soft-currency balance, and the purchased/active
//! item lists. Purchases are validated here; prices come from the catalog
//! lookup on [`ItemId`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Days of subscription granted per purchase
const SUBSCRIPTION_DAYS: i64 = 30;

/// Starting balance for a new profile
const STARTING_CURRENCY: u32 = 1000;

/// The fixed item catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemId {
    RitualBoost,
    RitualSigil,
    SubscriptionMonthly,
    CosmeticParticles,
    CosmeticAura,
}

impl ItemId {
    pub const ALL: [ItemId; 5] = [
        ItemId::RitualBoost,
        ItemId::RitualSigil,
        ItemId::SubscriptionMonthly,
        ItemId::CosmeticParticles,
        ItemId::CosmeticAura,
    ];

    /// Price in soft currency
    pub fn price(self) -> u32 {
        match self {
            ItemId::RitualBoost => 250,
            ItemId::RitualSigil => 500,
            ItemId::SubscriptionMonthly => 999,
            ItemId::CosmeticParticles => 350,
            ItemId::CosmeticAura => 450,
        }
    }

    /// Stable identifier used in saves and on the CLI
    pub fn slug(self) -> &'static str {
        match self {
            ItemId::RitualBoost => "ritual-boost",
            ItemId::RitualSigil => "ritual-sigil",
            ItemId::SubscriptionMonthly => "subscription-monthly",
            ItemId::CosmeticParticles => "cosmetic-particles",
            ItemId::CosmeticAura => "cosmetic-aura",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.slug() == s)
    }

    /// Subscription items can be bought repeatedly to extend the term
    fn is_repeatable(self) -> bool {
        matches!(self, ItemId::SubscriptionMonthly)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    #[error("not enough currency: {item} costs {price}, balance is {balance}")]
    InsufficientFunds {
        item: ItemId,
        price: u32,
        balance: u32,
    },
    #[error("{0} is already owned")]
    AlreadyOwned(ItemId),
    #[error("{0} is not owned")]
    NotOwned(ItemId),
}

/// Shop state for one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    currency: u32,
    purchased_items: Vec<ItemId>,
    active_items: Vec<ItemId>,
    /// RFC 3339 end of the current subscription, if any
    subscription_end: Option<String>,
}

impl Default for Shop {
    fn default() -> Self {
        Self {
            currency: STARTING_CURRENCY,
            purchased_items: Vec::new(),
            active_items: Vec::new(),
            subscription_end: None,
        }
    }
}

impl Shop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn currency(&self) -> u32 {
        self.currency
    }

    pub fn grant_currency(&mut self, amount: u32) {
        self.currency += amount;
    }

    pub fn owns(&self, item: ItemId) -> bool {
        self.purchased_items.contains(&item)
    }

    pub fn is_active(&self, item: ItemId) -> bool {
        self.active_items.contains(&item)
    }

    pub fn purchased_items(&self) -> &[ItemId] {
        &self.purchased_items
    }

    pub fn subscription_end(&self) -> Option<&str> {
        self.subscription_end.as_deref()
    }

    /// Buy an item, deducting its catalog price
    ///
    /// Non-repeatable items can only be bought once. Buying the subscription
    /// extends the current term by 30 days, or starts a fresh term if the
    /// previous one already lapsed.
    pub fn purchase(&mut self, item: ItemId) -> Result<(), ShopError> {
        if !item.is_repeatable() && self.owns(item) {
            return Err(ShopError::AlreadyOwned(item));
        }

        let price = item.price();
        if self.currency < price {
            return Err(ShopError::InsufficientFunds {
                item,
                price,
                balance: self.currency,
            });
        }

        self.currency -= price;
        if !self.owns(item) {
            self.purchased_items.push(item);
        }

        if item == ItemId::SubscriptionMonthly {
            let now = Utc::now();
            let base = self
                .subscription_end
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|end| end.with_timezone(&Utc))
                .filter(|end| *end > now)
                .unwrap_or(now);
            self.subscription_end = Some((base + Duration::days(SUBSCRIPTION_DAYS)).to_rfc3339());
        }

        log::info!("Purchased {} for {} (balance {})", item, price, self.currency);
        Ok(())
    }

    /// Activate a purchased item
    pub fn activate(&mut self, item: ItemId) -> Result<(), ShopError> {
        if !self.owns(item) {
            return Err(ShopError::NotOwned(item));
        }
        if !self.is_active(item) {
            self.active_items.push(item);
        }
        Ok(())
    }

    pub fn deactivate(&mut self, item: ItemId) {
        self.active_items.retain(|&i| i != item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_prices() {
        assert_eq!(ItemId::RitualBoost.price(), 250);
        assert_eq!(ItemId::RitualSigil.price(), 500);
        assert_eq!(ItemId::SubscriptionMonthly.price(), 999);
        assert_eq!(ItemId::CosmeticParticles.price(), 350);
        assert_eq!(ItemId::CosmeticAura.price(), 450);
    }

    #[test]
    fn test_slug_roundtrip() {
        for item in ItemId::ALL {
            assert_eq!(ItemId::parse(item.slug()), Some(item));
        }
        assert_eq!(ItemId::parse("ritual-of-doom"), None);
    }

    #[test]
    fn test_purchase_deducts_price() {
        let mut shop = Shop::new();
        shop.purchase(ItemId::RitualBoost).unwrap();
        assert_eq!(shop.currency(), 750);
        assert!(shop.owns(ItemId::RitualBoost));
    }

    #[test]
    fn test_purchase_rejects_duplicates() {
        let mut shop = Shop::new();
        shop.purchase(ItemId::RitualBoost).unwrap();
        assert_eq!(
            shop.purchase(ItemId::RitualBoost),
            Err(ShopError::AlreadyOwned(ItemId::RitualBoost))
        );
        assert_eq!(shop.currency(), 750);
    }

    #[test]
    fn test_purchase_rejects_insufficient_funds() {
        let mut shop = Shop::new();
        shop.purchase(ItemId::SubscriptionMonthly).unwrap(); // 999, leaves 1
        let err = shop.purchase(ItemId::RitualBoost).unwrap_err();
        assert_eq!(
            err,
            ShopError::InsufficientFunds {
                item: ItemId::RitualBoost,
                price: 250,
                balance: 1,
            }
        );
    }

    #[test]
    fn test_subscription_sets_end_date() {
        let mut shop = Shop::new();
        assert!(shop.subscription_end().is_none());
        shop.purchase(ItemId::SubscriptionMonthly).unwrap();

        let end = DateTime::parse_from_rfc3339(shop.subscription_end().unwrap())
            .unwrap()
            .with_timezone(&Utc);
        let days = (end - Utc::now()).num_days();
        assert!((29..=30).contains(&days));
    }

    #[test]
    fn test_subscription_repurchase_extends() {
        let mut shop = Shop::new();
        shop.grant_currency(1000);
        shop.purchase(ItemId::SubscriptionMonthly).unwrap();
        shop.purchase(ItemId::SubscriptionMonthly).unwrap();

        let end = DateTime::parse_from_rfc3339(shop.subscription_end().unwrap())
            .unwrap()
            .with_timezone(&Utc);
        let days = (end - Utc::now()).num_days();
        assert!((59..=60).contains(&days));
    }

    #[test]
    fn test_activation_requires_ownership() {
        let mut shop = Shop::new();
        assert_eq!(
            shop.activate(ItemId::CosmeticAura),
            Err(ShopError::NotOwned(ItemId::CosmeticAura))
        );

        shop.purchase(ItemId::CosmeticAura).unwrap();
        shop.activate(ItemId::CosmeticAura).unwrap();
        assert!(shop.is_active(ItemId::CosmeticAura));

        // Activating twice does not duplicate
        shop.activate(ItemId::CosmeticAura).unwrap();
        assert_eq!(
            shop.active_items.iter().filter(|&&i| i == ItemId::CosmeticAura).count(),
            1
        );

        shop.deactivate(ItemId::CosmeticAura);
        assert!(!shop.is_active(ItemId::CosmeticAura));
        // Still owned after deactivation
        assert!(shop.owns(ItemId::CosmeticAura));
    }
}
