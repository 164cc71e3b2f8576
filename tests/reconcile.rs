//! Integration tests for the reconciliation pass and the structure probe,
//! run against the in-memory store backend.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use slotboard::catalog::{Category, SlotEntry, STANDARD_CATALOG};
use slotboard::error::SlotboardError;
use slotboard::model::{slot_path, SlotConfig, GLOBAL_PATH, PRIORITY_PATH};
use slotboard::reconcile::Reconciler;
use slotboard::store::memory::MemoryStore;
use slotboard::store::Store;

fn reconciler(store: &Arc<MemoryStore>) -> Reconciler {
    Reconciler::new(store.clone(), STANDARD_CATALOG)
}

#[tokio::test]
async fn empty_store_creates_all_seventeen_records_once() {
    let store = Arc::new(MemoryStore::new());
    let reconciler = reconciler(&store);

    let first = reconciler.reconcile(false).await.unwrap();
    assert_eq!(first.created, 17); // 15 slots + global + priority
    assert_eq!(first.updated, 0);

    let after_first = store.snapshot().await;

    let second = reconciler.reconcile(false).await.unwrap();
    assert_eq!(second.created, 0);
    assert_eq!(second.updated, 0);
    assert_eq!(store.snapshot().await, after_first);
}

#[tokio::test]
async fn reconcile_only_writes_cataloged_paths() {
    let store = Arc::new(MemoryStore::new());
    reconciler(&store).reconcile(false).await.unwrap();

    let mut expected: Vec<String> = vec![GLOBAL_PATH.to_string(), PRIORITY_PATH.to_string()];
    expected.extend(STANDARD_CATALOG.iter().map(|e| slot_path(e.id)));
    expected.sort();

    let keys: Vec<String> = store.snapshot().await.into_keys().collect();
    assert_eq!(keys, expected);
}

#[tokio::test]
async fn force_resets_edited_slot_and_counts_it_as_updated() {
    let store = Arc::new(MemoryStore::new());
    let reconciler = reconciler(&store);
    reconciler.reconcile(false).await.unwrap();

    let edited = json!({
        "enabled": false,
        "admob_id": "custom",
        "adx_id": "custom",
        "facebook_id": "custom",
    });
    store
        .write(&slot_path("banner_home"), &edited)
        .await
        .unwrap();

    let report = reconciler.reconcile(true).await.unwrap();
    // Counting quirk preserved from the original console: the two singleton
    // records always tally as created, even on forced overwrite.
    assert_eq!(report.created, 2);
    assert_eq!(report.updated, 15);

    let restored: SlotConfig = serde_json::from_value(
        store
            .read(&slot_path("banner_home"))
            .await
            .unwrap()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(restored, SlotConfig::defaults_for(Category::Banner));
    assert!(restored.enabled);
}

#[tokio::test]
async fn partial_catalog_creates_only_missing_records() {
    let store = Arc::new(MemoryStore::new());

    let custom_global = json!({ "ads_enabled": false });
    store.write(GLOBAL_PATH, &custom_global).await.unwrap();

    let pre_existing = ["banner_home", "rewarded_booster", "native_auth"];
    let custom_slot = json!({
        "enabled": false,
        "admob_id": "kept",
        "adx_id": "kept",
        "facebook_id": "kept",
    });
    for id in pre_existing {
        store.write(&slot_path(id), &custom_slot).await.unwrap();
    }

    let report = reconciler(&store).reconcile(false).await.unwrap();
    assert_eq!(report.created, 13); // 12 missing slots + priority
    assert_eq!(report.updated, 0);

    // Pre-existing records are untouched, not normalized.
    let snapshot = store.snapshot().await;
    assert_eq!(snapshot[GLOBAL_PATH], custom_global);
    for id in pre_existing {
        assert_eq!(snapshot[&slot_path(id)], custom_slot);
    }
}

#[tokio::test]
async fn structure_probe_is_coarse_by_design() {
    let store = Arc::new(MemoryStore::new());
    let reconciler = reconciler(&store);

    assert!(!reconciler.structure_exists().await);

    store
        .write(GLOBAL_PATH, &json!({ "ads_enabled": true }))
        .await
        .unwrap();
    assert!(!reconciler.structure_exists().await);

    // global + the first Banner slot are enough; the 14 other slots and the
    // priority record may all be missing and the probe still reports true.
    store
        .write(&slot_path("banner_home"), &json!({ "enabled": true }))
        .await
        .unwrap();
    assert!(reconciler.structure_exists().await);
}

/// Store whose reads always fail as unreachable, while writes would land in
/// the wrapped in-memory store if they were ever attempted.
struct OfflineStore {
    inner: Arc<MemoryStore>,
}

#[async_trait]
impl Store for OfflineStore {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn read(&self, _path: &str) -> Result<Option<Value>, SlotboardError> {
        Err(SlotboardError::Connection {
            source: "connection refused".into(),
        })
    }

    async fn write(&self, path: &str, value: &Value) -> Result<(), SlotboardError> {
        self.inner.write(path, value).await
    }

    async fn delete(&self, path: &str) -> Result<(), SlotboardError> {
        self.inner.delete(path).await
    }
}

#[tokio::test]
async fn failed_connectivity_probe_aborts_before_any_write() {
    let inner = Arc::new(MemoryStore::new());
    let offline = Arc::new(OfflineStore {
        inner: inner.clone(),
    });
    let reconciler = Reconciler::new(offline, STANDARD_CATALOG);

    let err = reconciler.reconcile(false).await.unwrap_err();
    assert!(matches!(err, SlotboardError::Connection { .. }));
    assert!(inner.snapshot().await.is_empty());

    // The probe swallows errors into "not initialized".
    assert!(!reconciler.structure_exists().await);
}

const TINY_CATALOG: &[SlotEntry] = &[
    SlotEntry {
        id: "rewarded_spin",
        name: "Spin Rewarded",
        category: Category::Rewarded,
        placement: "Spin Wheel",
    },
    SlotEntry {
        id: "native_feed",
        name: "Feed Native",
        category: Category::Native,
        placement: "Feed",
    },
];

#[tokio::test]
async fn alternate_catalog_reconciles_independently() {
    let store = Arc::new(MemoryStore::new());
    let reconciler = Reconciler::new(store.clone(), TINY_CATALOG);

    let report = reconciler.reconcile(false).await.unwrap();
    assert_eq!(report.created, 4); // 2 slots + global + priority

    let slot: SlotConfig = serde_json::from_value(
        store
            .read(&slot_path("rewarded_spin"))
            .await
            .unwrap()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(slot, SlotConfig::defaults_for(Category::Rewarded));
}

#[tokio::test]
async fn probe_without_banner_entries_falls_back_to_first_slot() {
    let store = Arc::new(MemoryStore::new());
    let reconciler = Reconciler::new(store.clone(), TINY_CATALOG);

    store
        .write(GLOBAL_PATH, &json!({ "ads_enabled": true }))
        .await
        .unwrap();
    assert!(!reconciler.structure_exists().await);

    store
        .write(&slot_path("rewarded_spin"), &json!({ "enabled": true }))
        .await
        .unwrap();
    assert!(reconciler.structure_exists().await);
}
