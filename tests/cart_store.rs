use bakery_storefront_api::cart::CartStore;
use bakery_storefront_api::models::{CartItem, LocalizedText};
use bakery_storefront_api::storage::{CartStorage, JsonFileStorage, MemoryStorage};
use uuid::Uuid;

fn item(id: &str, price: f64, quantity: u32) -> CartItem {
    CartItem {
        id: id.to_string(),
        name: LocalizedText::new("Vanilla Birthday Cake", "香草生日蛋糕"),
        price,
        image: "/api/placeholder/300/300".to_string(),
        quantity,
        category: "Birthday Cakes".to_string(),
        dietary_info: vec!["organic".to_string()],
        customization: None,
        allergens: Some(vec!["eggs".to_string(), "dairy".to_string()]),
    }
}

#[test]
fn repeated_adds_merge_into_one_line() {
    let mut store = CartStore::open(Box::new(MemoryStorage::new()));
    store.add_item(item("cake-1", 38.0, 1));
    store.add_item(item("cake-1", 38.0, 3));
    store.add_item(item("cake-1", 38.0, 2));

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.item_count("cake-1"), 6);
    assert_eq!(store.total_items(), 6);
}

#[test]
fn zero_and_negative_quantity_updates_remove_the_line() {
    let mut store = CartStore::open(Box::new(MemoryStorage::new()));
    store.add_item(item("cake-1", 38.0, 2));
    store.update_quantity("cake-1", 0);
    assert_eq!(store.item_count("cake-1"), 0);
    assert!(store.items().is_empty());

    store.add_item(item("cake-2", 45.0, 2));
    store.update_quantity("cake-2", -3);
    assert!(store.items().is_empty());
}

#[test]
fn totals_track_any_mutation_sequence() {
    let mut store = CartStore::open(Box::new(MemoryStorage::new()));
    assert_eq!(store.total_items(), 0);
    assert_eq!(store.total_price(), 0.0);

    store.add_item(item("a", 45.0, 2));
    store.add_item(item("b", 38.0, 1));
    store.update_quantity("a", 3);
    store.remove_item("b");
    store.add_item(item("c", 40.0, 1));

    assert_eq!(store.total_items(), 4);
    assert!((store.total_price() - (45.0 * 3.0 + 40.0)).abs() < 1e-9);
    assert_eq!(store.item_count("a"), 3);
    assert_eq!(store.item_count("b"), 0);
}

struct SharedStorage(std::sync::Arc<MemoryStorage>);

impl CartStorage for SharedStorage {
    fn load(&self) -> anyhow::Result<Vec<CartItem>> {
        self.0.load()
    }
    fn save(&self, items: &[CartItem]) -> anyhow::Result<()> {
        self.0.save(items)
    }
}

#[test]
fn every_mutation_is_written_through_to_storage() {
    let backend = std::sync::Arc::new(MemoryStorage::new());
    let mut store = CartStore::open(Box::new(SharedStorage(backend.clone())));

    store.add_item(item("a", 45.0, 1));
    assert_eq!(backend.load().unwrap(), store.items());

    store.update_quantity("a", 4);
    assert_eq!(backend.load().unwrap(), store.items());

    store.remove_item("a");
    assert!(backend.load().unwrap().is_empty());
}

#[test]
fn cart_survives_a_reload_from_file() {
    let path = std::env::temp_dir().join(format!("cart-{}.json", Uuid::new_v4()));

    {
        let mut store = CartStore::open(Box::new(JsonFileStorage::new(path.clone())));
        store.add_item(item("cake-1", 45.0, 2));
        store.add_item(item("cake-2", 38.0, 1));
        store.open_cart();
    }

    // Reinitializing from the same file is the page-reload analog.
    let reloaded = CartStore::open(Box::new(JsonFileStorage::new(path.clone())));
    assert_eq!(reloaded.items().len(), 2);
    assert_eq!(reloaded.item_count("cake-1"), 2);
    assert_eq!(reloaded.item_count("cake-2"), 1);
    // The visibility flag is UI state and must not round-trip.
    assert!(!reloaded.is_open());

    std::fs::remove_file(path).ok();
}

#[test]
fn clear_empties_the_persisted_list_too() {
    let path = std::env::temp_dir().join(format!("cart-{}.json", Uuid::new_v4()));

    let mut store = CartStore::open(Box::new(JsonFileStorage::new(path.clone())));
    store.add_item(item("cake-1", 45.0, 2));
    store.add_item(item("cake-2", 38.0, 1));
    store.clear();
    assert_eq!(store.total_items(), 0);
    drop(store);

    let reloaded = CartStore::open(Box::new(JsonFileStorage::new(path.clone())));
    assert!(reloaded.items().is_empty());

    std::fs::remove_file(path).ok();
}

#[test]
fn missing_storage_file_starts_empty() {
    let path = std::env::temp_dir().join(format!("cart-{}.json", Uuid::new_v4()));
    let store = CartStore::open(Box::new(JsonFileStorage::new(path)));
    assert!(store.items().is_empty());
}

#[test]
fn customization_round_trips_through_the_file() {
    use bakery_storefront_api::models::Customization;

    let path = std::env::temp_dir().join(format!("cart-{}.json", Uuid::new_v4()));

    let mut custom = item("custom-1", 76.0, 1);
    custom.customization = Some(Customization {
        layers: Some("1".to_string()),
        decorations: Some("2".to_string()),
        personal_message: Some("Happy Birthday Mei!".to_string()),
        occasion: Some("birthday".to_string()),
        ..Customization::default()
    });

    let mut store = CartStore::open(Box::new(JsonFileStorage::new(path.clone())));
    store.add_item(custom.clone());
    drop(store);

    let reloaded = CartStore::open(Box::new(JsonFileStorage::new(path.clone())));
    assert_eq!(reloaded.items(), std::slice::from_ref(&custom));

    std::fs::remove_file(path).ok();
}
