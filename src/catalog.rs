//! The compiled-in slot catalog.
//!
//! [`STANDARD_CATALOG`] is the canonical list of ad placements the store is
//! expected to hold, in enumeration order. Each entry carries a stable
//! identifier (the store key under `ads_config/`), a human label, a
//! [`Category`], and a placement description. The catalog is immutable
//! reference data; it is handed to the
//! [`Reconciler`](crate::reconcile::Reconciler) at construction so tests can
//! substitute a smaller one.

use serde::{Deserialize, Serialize};

/// Ad format category. Determines the default ad unit identifiers a slot
/// record is seeded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Banner,
    Interstitial,
    Rewarded,
    Native,
}

impl Category {
    /// Google test ad unit ID for this format, used for both `admob_id` and
    /// `adx_id` defaults. These exact strings are part of the stored-data
    /// contract and must not drift.
    #[must_use]
    pub const fn test_ad_unit_id(self) -> &'static str {
        match self {
            Self::Banner => "ca-app-pub-3940256099942544/6300978111",
            Self::Interstitial => "ca-app-pub-3940256099942544/1033173712",
            Self::Rewarded => "ca-app-pub-3940256099942544/5224354917",
            Self::Native => "ca-app-pub-3940256099942544/2247696110",
        }
    }

    /// Facebook Audience Network placeholder placement ID for this format.
    #[must_use]
    pub const fn facebook_placeholder_id(self) -> &'static str {
        match self {
            Self::Banner | Self::Native => "IMG_16_9_APP_INSTALL#123456789",
            Self::Interstitial | Self::Rewarded => "VID_HD_16_9_46S_APP_INSTALL#123456789",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Banner => "Banner",
            Self::Interstitial => "Interstitial",
            Self::Rewarded => "Rewarded",
            Self::Native => "Native",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog entry. Not persisted — only the derived
/// [`SlotConfig`](crate::model::SlotConfig) records are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotEntry {
    /// Store key under `ads_config/`.
    pub id: &'static str,
    /// Human label shown in listings.
    pub name: &'static str,
    pub category: Category,
    /// Where in the app this slot renders.
    pub placement: &'static str,
}

/// The fixed production catalog, in canonical enumeration order.
pub const STANDARD_CATALOG: &[SlotEntry] = &[
    SlotEntry {
        id: "banner_home",
        name: "Home Banner",
        category: Category::Banner,
        placement: "Home Screen",
    },
    SlotEntry {
        id: "banner_wallet",
        name: "Wallet Banner",
        category: Category::Banner,
        placement: "Wallet Screen",
    },
    SlotEntry {
        id: "banner_leaderboard",
        name: "Leaderboard Banner",
        category: Category::Banner,
        placement: "Leaderboard Screen",
    },
    SlotEntry {
        id: "banner_challenges",
        name: "Challenges Banner",
        category: Category::Banner,
        placement: "Challenges Screen",
    },
    SlotEntry {
        id: "banner_referrals",
        name: "Referrals Banner",
        category: Category::Banner,
        placement: "Referrals Screen",
    },
    SlotEntry {
        id: "banner_profile",
        name: "Profile Banner",
        category: Category::Banner,
        placement: "Profile Screen",
    },
    SlotEntry {
        id: "banner_auth",
        name: "Auth Banner",
        category: Category::Banner,
        placement: "Auth Screen",
    },
    SlotEntry {
        id: "banner_onboarding",
        name: "Onboarding Banner",
        category: Category::Banner,
        placement: "Onboarding Screens",
    },
    SlotEntry {
        id: "interstitial_login",
        name: "Login Interstitial",
        category: Category::Interstitial,
        placement: "After Login",
    },
    SlotEntry {
        id: "interstitial_screen_transition",
        name: "Screen Transition",
        category: Category::Interstitial,
        placement: "Between Screens",
    },
    SlotEntry {
        id: "interstitial_challenge_complete",
        name: "Challenge Complete",
        category: Category::Interstitial,
        placement: "After Challenge",
    },
    SlotEntry {
        id: "rewarded_challenge",
        name: "Challenge Rewarded",
        category: Category::Rewarded,
        placement: "Challenge Rewards",
    },
    SlotEntry {
        id: "rewarded_booster",
        name: "Booster Rewarded",
        category: Category::Rewarded,
        placement: "Power-up Boosters",
    },
    SlotEntry {
        id: "native_onboarding",
        name: "Onboarding Native",
        category: Category::Native,
        placement: "Onboarding Pages",
    },
    SlotEntry {
        id: "native_auth",
        name: "Auth Native",
        category: Category::Native,
        placement: "Auth Screen",
    },
];

/// Look up a catalog entry by slot identifier.
#[must_use]
pub fn find(catalog: &[SlotEntry], id: &str) -> Option<SlotEntry> {
    catalog.iter().find(|entry| entry.id == id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_fifteen_entries_in_canonical_order() {
        let ids: Vec<&str> = STANDARD_CATALOG.iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            [
                "banner_home",
                "banner_wallet",
                "banner_leaderboard",
                "banner_challenges",
                "banner_referrals",
                "banner_profile",
                "banner_auth",
                "banner_onboarding",
                "interstitial_login",
                "interstitial_screen_transition",
                "interstitial_challenge_complete",
                "rewarded_challenge",
                "rewarded_booster",
                "native_onboarding",
                "native_auth",
            ]
        );
    }

    #[test]
    fn banner_and_native_share_image_placeholder() {
        assert_eq!(
            Category::Banner.facebook_placeholder_id(),
            Category::Native.facebook_placeholder_id()
        );
        assert_eq!(
            Category::Interstitial.facebook_placeholder_id(),
            Category::Rewarded.facebook_placeholder_id()
        );
    }

    #[test]
    fn find_is_exact_match_only() {
        assert!(find(STANDARD_CATALOG, "banner_home").is_some());
        assert!(find(STANDARD_CATALOG, "banner").is_none());
        assert!(find(STANDARD_CATALOG, "").is_none());
    }
}
