//! Persisted record types and the `ads_config/` path scheme.
//!
//! The path strings are a compatibility contract with data already in
//! production stores: `ads_config/global`, `ads_config/priority`, and
//! `ads_config/<slot_id>`. Record payloads are plain JSON objects, so every
//! type here derives `Serialize`/`Deserialize`.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Root of the config tree in the store.
pub const CONFIG_ROOT: &str = "ads_config";

/// The global kill-switch record.
pub const GLOBAL_PATH: &str = "ads_config/global";

/// The provider priority record.
pub const PRIORITY_PATH: &str = "ads_config/priority";

/// Sentinel path read by the connectivity probe. Never written; a read
/// returning "absent" still proves the store is reachable.
pub const PROBE_PATH: &str = "ads_config/_test_connection";

/// Store path for one slot record.
#[must_use]
pub fn slot_path(slot_id: &str) -> String {
    format!("{CONFIG_ROOT}/{slot_id}")
}

/// Single global record gating all ad serving downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub ads_enabled: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self { ads_enabled: true }
    }
}

/// Provider waterfall order. Written once at bootstrap; no operator command
/// edits it (the original console has no UI path for it either).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityConfig {
    pub order: Vec<String>,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            order: vec!["admob".into(), "adx".into(), "facebook".into()],
        }
    }
}

/// One persisted slot record, keyed by slot identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub enabled: bool,
    pub admob_id: String,
    pub adx_id: String,
    pub facebook_id: String,
}

impl SlotConfig {
    /// Default payload for a freshly created slot: enabled, with the
    /// category's test/placeholder network identifiers.
    #[must_use]
    pub fn defaults_for(category: Category) -> Self {
        let ad_unit = category.test_ad_unit_id();
        Self {
            enabled: true,
            admob_id: ad_unit.to_string(),
            adx_id: ad_unit.to_string(),
            facebook_id: category.facebook_placeholder_id().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_path_nests_under_config_root() {
        assert_eq!(slot_path("banner_home"), "ads_config/banner_home");
        assert_eq!(GLOBAL_PATH, "ads_config/global");
        assert_eq!(PRIORITY_PATH, "ads_config/priority");
    }

    #[test]
    fn category_defaults_match_stored_data_contract() {
        let banner = SlotConfig::defaults_for(Category::Banner);
        assert!(banner.enabled);
        assert_eq!(banner.admob_id, "ca-app-pub-3940256099942544/6300978111");
        assert_eq!(banner.adx_id, banner.admob_id);
        assert_eq!(banner.facebook_id, "IMG_16_9_APP_INSTALL#123456789");

        let interstitial = SlotConfig::defaults_for(Category::Interstitial);
        assert_eq!(
            interstitial.admob_id,
            "ca-app-pub-3940256099942544/1033173712"
        );
        assert_eq!(
            interstitial.facebook_id,
            "VID_HD_16_9_46S_APP_INSTALL#123456789"
        );

        let rewarded = SlotConfig::defaults_for(Category::Rewarded);
        assert_eq!(rewarded.admob_id, "ca-app-pub-3940256099942544/5224354917");
        assert_eq!(
            rewarded.facebook_id,
            "VID_HD_16_9_46S_APP_INSTALL#123456789"
        );

        let native = SlotConfig::defaults_for(Category::Native);
        assert_eq!(native.admob_id, "ca-app-pub-3940256099942544/2247696110");
        assert_eq!(native.facebook_id, "IMG_16_9_APP_INSTALL#123456789");
    }

    #[test]
    fn priority_default_order_is_admob_adx_facebook() {
        assert_eq!(
            PriorityConfig::default().order,
            ["admob", "adx", "facebook"]
        );
    }

    #[test]
    fn global_defaults_to_enabled() {
        assert!(GlobalConfig::default().ads_enabled);
    }

    #[test]
    fn slot_config_round_trips_through_json() {
        let config = SlotConfig::defaults_for(Category::Banner);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["enabled"], true);
        let back: SlotConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }
}
