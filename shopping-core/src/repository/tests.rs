//! Repository Integration Tests
//!
//! Tests for ItemRepository with an in-memory key-value store.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::sync::Once;

    use proptest::prelude::*;

    use crate::config::{StoreConfig, LEGACY_STORAGE_KEY, STORAGE_KEY};
    use crate::domain::{Item, NewItem};
    use crate::error::{StorageError, StorageResult};
    use crate::mutation::Mutation;
    use crate::repository::{ItemRepository, KeyValueStore, MemoryStore};

    fn setup(store: MemoryStore) -> ItemRepository<MemoryStore> {
        ItemRepository::new(store, StoreConfig::default())
    }

    fn new_item(name: &str, target: i64, on_hand: i64, tags: &str) -> Item {
        Item::new(&NewItem {
            name: name.to_string(),
            target_stock: target,
            stock_on_hand: on_hand,
            tags: tags.to_string(),
        })
        .expect("valid item")
    }

    /// Store whose reads always fail
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Read { key: key.to_string(), reason: "denied".to_string() })
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("denied".to_string()))
        }
    }

    #[test]
    fn test_absent_key_loads_empty() {
        let repo = setup(MemoryStore::new());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let repo = setup(MemoryStore::new());
        let items = vec![new_item("Milk", 2, 0, "dairy"), new_item("Bread", 1, 1, "")];
        repo.save(&items).expect("save failed");

        assert_eq!(repo.load(), items);
        assert!(repo.store().raw(STORAGE_KEY).is_some());
    }

    #[test]
    fn test_load_is_idempotent() {
        let raw = r#"[{"id":"a","name":" Eggs ","quantity":6,"purchased":false,"createdAt":1},
                      {"id":"b","name":"Tea","targetStock":"abc","stockOnHand":-5,"tags":["x"," x "]}]"#;
        let repo = setup(MemoryStore::with_entry(STORAGE_KEY, raw));

        let first = repo.load();
        repo.save(&first).unwrap();
        let second = repo.load();
        repo.save(&second).unwrap();

        assert_eq!(first, second);
        assert_eq!(second, repo.load());
        assert_eq!(second[1].target_stock, 1);
        assert_eq!(second[1].stock_on_hand, 0);
        assert_eq!(second[1].tags, vec!["x"]);
    }

    #[test]
    fn test_generated_ids_survive_reload() {
        let repo = setup(MemoryStore::with_entry(STORAGE_KEY, r#"[{"name":"NoId"}]"#));
        let first = repo.load();
        repo.save(&first).unwrap();
        assert_eq!(repo.load()[0].id, first[0].id);
    }

    #[test]
    fn test_corrupt_state_loads_empty() {
        for raw in ["{not json", r#"{"id":"a","name":"Obj"}"#, "null", "\"text\""] {
            let repo = setup(MemoryStore::with_entry(STORAGE_KEY, raw));
            assert!(repo.load().is_empty(), "raw {:?}", raw);
        }
    }

    #[test]
    fn test_legacy_key_is_migrated() {
        let raw = r#"[{"id":"1","name":"Apples","quantity":4,"purchased":true,"createdAt":1700000000000}]"#;
        let repo = setup(MemoryStore::with_entry(LEGACY_STORAGE_KEY, raw));

        let items = repo.load();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Apples");
        assert_eq!(items[0].quantity, 4);
        assert_eq!(items[0].target_stock, 1);
        assert_eq!(items[0].stock_on_hand, 0);
        assert!(items[0].tags.is_empty());

        repo.save(&items).unwrap();
        assert!(repo.store().raw(STORAGE_KEY).is_some());
        assert_eq!(repo.store().raw(LEGACY_STORAGE_KEY).as_deref(), Some(raw));
    }

    #[test]
    fn test_current_key_wins_over_legacy() {
        let store = MemoryStore::with_entry(LEGACY_STORAGE_KEY, r#"[{"id":"old","name":"Old"}]"#);
        store.set(STORAGE_KEY, "[]").unwrap();
        let repo = setup(store);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_unreadable_store_loads_empty() {
        let repo = ItemRepository::new(BrokenStore, StoreConfig::default());
        assert!(repo.load().is_empty());
        assert!(repo.save(&[]).is_err());
    }

    thread_local! {
        static CAPTURED: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    /// Records log lines per test thread
    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED.with(|c| c.borrow_mut().push(format!("{} {}", record.level(), record.args())));
        }

        fn flush(&self) {}
    }

    static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
    static INIT_LOGGER: Once = Once::new();

    fn capture_logs() {
        INIT_LOGGER.call_once(|| {
            let _ = log::set_logger(&CAPTURE_LOGGER);
            log::set_max_level(log::LevelFilter::Trace);
        });
        CAPTURED.with(|c| c.borrow_mut().clear());
    }

    fn captured_logs() -> Vec<String> {
        CAPTURED.with(|c| c.borrow().clone())
    }

    #[test]
    fn test_unreadable_state_is_not_logged() {
        capture_logs();

        for raw in ["{not json", r#"{"id":"a"}"#, "[1, \"x\", null]"] {
            let repo = setup(MemoryStore::with_entry(STORAGE_KEY, raw));
            assert!(repo.load().is_empty());
        }
        let broken = ItemRepository::new(BrokenStore, StoreConfig::default());
        assert!(broken.load().is_empty());

        assert!(captured_logs().is_empty(), "unexpected logs: {:?}", captured_logs());
    }

    #[test]
    fn test_rejected_write_reports_error() {
        let repo = setup(MemoryStore::new());
        repo.store().set_reject_writes(true);
        let result = repo.save(&[new_item("Milk", 1, 0, "")]);
        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_mutations_persist() {
        let repo = setup(MemoryStore::new());
        let config = repo.config().clone();
        let mut items = repo.load();

        let add = Mutation::Add(NewItem {
            name: "Coffee".into(),
            target_stock: 2,
            stock_on_hand: 1,
            tags: "morning".into(),
        });
        items = add.apply(&items, &config).unwrap();
        repo.save(&items).unwrap();

        let id = items[0].id.clone();
        items = Mutation::AdjustStock { id, delta: 1 }.apply(&items, &config).unwrap();
        repo.save(&items).unwrap();

        let reloaded = repo.load();
        assert_eq!(reloaded, items);
        assert_eq!(reloaded[0].stock_on_hand, 2);
        assert!(!reloaded[0].needs_restock());
    }

    fn arb_item() -> impl Strategy<Value = Item> {
        (
            "[a-z0-9-]{1,12}",
            "[A-Za-z][A-Za-z ]{0,15}",
            1u32..50,
            any::<bool>(),
            1u32..50,
            0u32..50,
            proptest::collection::vec("[a-z]{1,6}", 0..4),
            0i64..2_000_000_000_000,
        )
            .prop_map(|(id, name, quantity, purchased, target_stock, stock_on_hand, tags, created_at)| Item {
                id,
                name: name.trim().to_string(),
                quantity,
                purchased,
                target_stock,
                stock_on_hand,
                tags: crate::domain::normalize_tags(tags),
                created_at,
            })
    }

    proptest! {
        #[test]
        fn prop_save_load_round_trip(items in proptest::collection::vec(arb_item(), 0..20)) {
            let repo = setup(MemoryStore::new());
            repo.save(&items).unwrap();
            prop_assert_eq!(repo.load(), items);
        }
    }
}
