//! End-to-end save cycle: content catalog -> hydrated inventory -> play ->
//! exported records -> repository -> restored inventory.

use std::sync::Arc;

use inventory_content::ItemLoader;
use inventory_core::{
    CatalogOracle, CollectingSink, DefinitionId, Inventory, InventoryConfig, InventoryWarning,
    Item, ItemType, SaveRecords, SavedItem,
};
use runtime::{CatalogStore, InMemorySaveRepo, SaveRepository};

const CATALOG_RON: &str = r#"(
    items: [
        (id: 1, kind: weapon, name: "iron pipe", equippable: true, bonus: 4),
        (id: 2, kind: weapon, name: "machete", equippable: true, bonus: 7),
        (id: 3, kind: bag, name: "rucksack", equippable: false, bonus: 20),
        (id: 4, kind: unique_equipment, name: "compass", equippable: false, bonus: 0),
    ],
)"#;

fn saved(id: u32, carried: bool) -> SavedItem {
    SavedItem {
        id: DefinitionId(id),
        carried,
    }
}

#[test]
fn full_save_cycle_preserves_inventory() {
    // Load the catalog the way a game boot would.
    let catalog = CatalogStore::from_definitions(
        ItemLoader::parse(CATALOG_RON).expect("catalog should parse"),
    );

    // Hydrate a previous session's save.
    let mut records = SaveRecords::new();
    records.insert(ItemType::Weapon, vec![saved(1, true)]);
    records.insert(ItemType::Bag, vec![saved(3, true)]);
    records.insert(ItemType::UniqueEquipment, vec![saved(4, true)]);

    let sink = Arc::new(CollectingSink::new());
    let mut inventory = Inventory::new(InventoryConfig::with_capacity(5), sink.clone());
    inventory.hydrate(&records, &catalog);

    assert_eq!(inventory.len(), 3);
    assert_eq!(inventory.current_bonus(ItemType::Weapon), 4);

    // Play: loot a better weapon, try to drop the protected compass.
    let machete = catalog
        .definition(DefinitionId(2))
        .expect("machete is in the catalog");
    let instance = inventory.allocate_instance_id();
    inventory.add(machete.instantiate(instance), true);
    assert_eq!(inventory.current_bonus(ItemType::Weapon), 7);

    inventory.discard_item(DefinitionId(4));
    assert_eq!(
        sink.take(),
        vec![InventoryWarning::NotDiscardable {
            id: DefinitionId(4),
        }]
    );

    // Persist and restore through the repository.
    let repo = InMemorySaveRepo::new();
    repo.save(0, &inventory.to_records()).expect("save should succeed");

    let loaded = repo
        .load(0)
        .expect("load should succeed")
        .expect("slot 0 holds a save");
    let mut restored = Inventory::with_config(InventoryConfig::with_capacity(5));
    restored.hydrate(&loaded, &catalog);

    assert_eq!(restored.to_records(), inventory.to_records());
    assert_eq!(restored.current_bonus(ItemType::Weapon), 7);
    assert!(restored.contains("compass"));
}

#[test]
fn unknown_definitions_in_save_are_dropped() {
    let catalog = CatalogStore::from_definitions(
        ItemLoader::parse(CATALOG_RON).expect("catalog should parse"),
    );

    let mut records = SaveRecords::new();
    records.insert(ItemType::Weapon, vec![saved(1, true), saved(99, true)]);

    let mut inventory = Inventory::default();
    inventory.hydrate(&records, &catalog);

    assert_eq!(inventory.len(), 1);
    assert!(inventory.get_item(DefinitionId(99), None).is_none());
}

#[test]
fn hydration_respects_capacity() {
    let catalog = CatalogStore::from_definitions(
        ItemLoader::parse(CATALOG_RON).expect("catalog should parse"),
    );

    let mut records = SaveRecords::new();
    records.insert(
        ItemType::Weapon,
        vec![saved(1, true), saved(1, true), saved(1, false)],
    );

    let sink = Arc::new(CollectingSink::new());
    let mut inventory = Inventory::new(InventoryConfig::with_capacity(2), sink.clone());
    inventory.hydrate(&records, &catalog);

    assert_eq!(inventory.count_by_id(DefinitionId(1), true), 2);
    assert_eq!(sink.take().len(), 1);
}

#[test]
fn restored_equipment_resolves_like_the_original() {
    let catalog = CatalogStore::from_definitions(
        ItemLoader::parse(CATALOG_RON).expect("catalog should parse"),
    );

    let mut inventory = Inventory::default();
    let pipe = catalog.definition(DefinitionId(1)).expect("pipe exists");
    let machete = catalog.definition(DefinitionId(2)).expect("machete exists");
    let a = inventory.allocate_instance_id();
    inventory.add(pipe.instantiate(a), true);
    let b = inventory.allocate_instance_id();
    inventory.add(machete.instantiate(b), true);

    let mut restored = Inventory::default();
    restored.hydrate(&inventory.to_records(), &catalog);

    let equipped = restored.equipped(Some(ItemType::Weapon));
    assert_eq!(equipped.len(), 1);
    assert_eq!(equipped[0].definition, DefinitionId(2));
}

#[test]
fn tracing_sink_is_usable_as_a_shared_handle() {
    // Smoke check: the tracing-backed sink satisfies the trait object the
    // aggregate stores.
    let mut inventory = Inventory::new(
        InventoryConfig::with_capacity(1),
        Arc::new(runtime::TracingSink),
    );
    let instance = inventory.allocate_instance_id();
    inventory.add(
        Item::new(DefinitionId(1), instance, ItemType::Weapon, "pipe", true, 1),
        true,
    );
    assert_eq!(inventory.len(), 1);
}
