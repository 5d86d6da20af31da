use std::fs;

use stockroom::{
    EditRequest, InventoryStore, Sizes, StockOperation, StoreOptions,
    persistence::{LoadOptions, SaveMode},
};

use crate::helpers::{SAMPLE_FILE, inventory_file, missing_file, sizes};

#[test]
fn test_add_product_persists() {
    let (_dir, path) = inventory_file(SAMPLE_FILE);
    let mut store = InventoryStore::open(&path, StoreOptions::default()).unwrap();

    let sku = store.allocate_sku().unwrap();
    assert_eq!(sku, "3");
    store
        .add_product(sku, "Gorra", "Visera plana", sizes(&[("U", 4)]))
        .unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.ends_with("3,Gorra,Visera plana,U:4\n"));
    assert_eq!(store.next_sku_after_max().unwrap(), "3");
}

#[test]
fn test_rejected_add_does_not_write() {
    let (_dir, path) = inventory_file(SAMPLE_FILE);
    let mut store = InventoryStore::open(&path, StoreOptions::default()).unwrap();

    let err = store
        .add_product("1", "Camiseta", "Duplicada", Sizes::new())
        .unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_FILE);
}

#[test]
fn test_edit_product_persists() {
    let (_dir, path) = inventory_file(SAMPLE_FILE);
    let mut store = InventoryStore::open(&path, StoreOptions::default()).unwrap();

    let request = EditRequest::new(StockOperation::Subtract)
        .with_delta("S", 3)
        .with_delta("M", 99);
    let report = store.edit_product("2", &request).unwrap();
    assert_eq!(report.applied.len(), 1);
    assert_eq!(report.rejected.len(), 1);

    let reopened = InventoryStore::open(&path, StoreOptions::default()).unwrap();
    let product = reopened.search_by_sku("2").unwrap();
    assert_eq!(product.stock("S"), Some(5));
    assert_eq!(product.stock("M"), Some(4));
}

#[test]
fn test_edit_missing_product_does_not_write() {
    let (_dir, path) = inventory_file(SAMPLE_FILE);
    let mut store = InventoryStore::open(&path, StoreOptions::default()).unwrap();

    let request = EditRequest::new(StockOperation::Add).with_delta("S", 1);
    let err = store.edit_product("7", &request).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_FILE);
}

#[test]
fn test_search_and_list() {
    let (_dir, path) = inventory_file(SAMPLE_FILE);
    let store = InventoryStore::open(&path, StoreOptions::default()).unwrap();

    assert_eq!(store.search_by_name("pantalón").unwrap().sku(), "2");
    assert!(store.search_by_name("Producto Inexistente").is_none());
    assert!(store.search_by_sku("SKU999").is_none());

    let by_sku: Vec<_> = store.list_in_order(true).map(|p| p.sku()).collect();
    assert_eq!(by_sku, ["1", "2"]);
    let by_name: Vec<_> = store.list_in_order(false).map(|p| p.name()).collect();
    assert_eq!(by_name, ["Camiseta", "Pantalón"]);
}

#[test]
fn test_first_change_creates_file() {
    let (_dir, path) = missing_file();
    let options = StoreOptions {
        load: LoadOptions::lenient(),
        save_mode: SaveMode::Atomic,
    };
    let mut store = InventoryStore::open(&path, options).unwrap();
    assert!(store.inventory().is_empty());
    assert!(!path.exists());

    let sku = store.allocate_sku().unwrap();
    store
        .add_product(sku, "Chaqueta", "Cortavientos", sizes(&[("M", 2)]))
        .unwrap();

    assert!(path.exists());
    assert_eq!(store.next_sku_after_max().unwrap(), "1");
}

#[test]
fn test_failed_save_keeps_changes_for_retry() {
    let (dir, _) = missing_file();
    let path = dir.path().join("missing_dir").join("inventario.csv");
    let mut store = InventoryStore::open(&path, StoreOptions::default()).unwrap();

    let err = store
        .add_product("1", "Camiseta", "Camiseta de algodón", sizes(&[("S", 10)]))
        .unwrap_err();

    assert!(err.is_io_error());
    assert_eq!(err.module(), "io");
    assert!(store.search_by_sku("1").is_some());
    assert!(!path.exists());

    fs::create_dir(dir.path().join("missing_dir")).unwrap();
    store.save().unwrap();

    let reopened = InventoryStore::open(&path, StoreOptions::default()).unwrap();
    assert_eq!(reopened.search_by_sku("1").unwrap().stock("S"), Some(10));
}
