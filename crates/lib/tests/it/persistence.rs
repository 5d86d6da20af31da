use std::fs;

use stockroom::{
    EditRequest, Error, Inventory, StockOperation,
    codec::RecordError,
    constants::HEADER,
    persistence::{
        LoadOptions, SaveMode, allocate_sku, load_inventory, next_sku_after_max, save_inventory,
    },
};

use crate::helpers::{SAMPLE_FILE, inventory_file, missing_file, sizes, snapshot};

#[test]
fn test_load_sample_file() {
    let (_dir, path) = inventory_file(SAMPLE_FILE);

    let inventory = load_inventory(&path, &LoadOptions::default()).unwrap();

    assert!(inventory.get_by_sku("1").is_some());
    assert!(inventory.get_by_name("Camiseta").is_some());
    assert!(inventory.get_by_sku("2").is_some());
    assert!(inventory.get_by_name("Pantalón").is_some());
    inventory.check_consistency().unwrap();
}

#[test]
fn test_record_missing_sizes_is_skipped() {
    let contents = format!("{HEADER}\n1,Camiseta\n2,Gorra,Visera,U:3\n");
    let (_dir, path) = inventory_file(&contents);

    let inventory = load_inventory(&path, &LoadOptions::default()).unwrap();

    assert!(inventory.get_by_sku("1").is_none());
    assert!(inventory.get_by_name("Camiseta").is_none());
    assert_eq!(inventory.len(), 1);
}

#[test]
fn test_duplicate_records_keep_first() {
    let contents = format!("{HEADER}\n5,Gorra,Primera,U:1\n5,Gorra,Segunda,U:2\n");
    let (_dir, path) = inventory_file(&contents);

    let inventory = load_inventory(&path, &LoadOptions::default()).unwrap();

    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.get_by_sku("5").unwrap().description(), "Primera");
}

#[test]
fn test_malformed_quantity_aborts_load() {
    let contents = format!("{HEADER}\n1,Camiseta,Algodón,S:10\n2,Gorra,Visera,U:x\n");
    let (_dir, path) = inventory_file(&contents);

    let err = load_inventory(&path, &LoadOptions::default()).unwrap_err();

    assert!(err.is_parse_error());
    assert!(matches!(
        err,
        Error::Record {
            line: 3,
            source: RecordError::MalformedNumber { .. }
        }
    ));

    let inventory = load_inventory(&path, &LoadOptions::lenient()).unwrap();
    assert_eq!(inventory.len(), 1);
}

#[test]
fn test_missing_file_loads_empty() {
    let (_dir, path) = missing_file();
    let inventory = load_inventory(&path, &LoadOptions::default()).unwrap();
    assert!(inventory.is_empty());
}

#[test]
fn test_unreadable_path_is_an_io_error() {
    let (dir, _) = missing_file();

    // A directory opens on some platforms but can never be read as lines.
    let err = load_inventory(dir.path(), &LoadOptions::default()).unwrap_err();

    assert!(err.is_io_error());
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_save_then_load_round_trip() {
    let (_dir, path) = missing_file();
    let mut inventory = Inventory::new();
    inventory
        .add_product("3", "Sudadera", "Con capucha", sizes(&[("XL", 1), ("S", 4), ("M", 0)]))
        .unwrap();
    inventory
        .add_product("1", "Camiseta", "Camiseta de algodón", sizes(&[("S", 10), ("M", 5)]))
        .unwrap();
    inventory
        .add_product("2", "Calcetines", "Pack de tres", sizes(&[]))
        .unwrap();

    save_inventory(&path, &inventory, SaveMode::Truncate).unwrap();
    let loaded = load_inventory(&path, &LoadOptions::default()).unwrap();

    assert_eq!(snapshot(&loaded), snapshot(&inventory));
    loaded.check_consistency().unwrap();
}

#[test]
fn test_save_writes_header_and_sku_order() {
    let (_dir, path) = inventory_file(SAMPLE_FILE);
    let mut inventory = load_inventory(&path, &LoadOptions::default()).unwrap();

    let request = EditRequest::new(StockOperation::Add)
        .with_description("Camiseta de algodón mejorada")
        .with_delta("S", 12)
        .with_delta("M", 5);
    inventory.edit_product("1", &request).unwrap();
    save_inventory(&path, &inventory, SaveMode::Truncate).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], "1,Camiseta,Camiseta de algodón mejorada,S:22|M:10");
    assert_eq!(lines[2], "2,Pantalón,Pantalón de mezclilla,S:8|M:4");
    assert!(written.ends_with('\n'));
}

#[test]
fn test_atomic_save_replaces_file() {
    let (dir, path) = inventory_file(SAMPLE_FILE);
    let mut inventory = load_inventory(&path, &LoadOptions::default()).unwrap();
    inventory
        .add_product("3", "Gorra", "Visera plana", sizes(&[("U", 7)]))
        .unwrap();

    save_inventory(&path, &inventory, SaveMode::Atomic).unwrap();

    let reloaded = load_inventory(&path, &LoadOptions::default()).unwrap();
    assert_eq!(reloaded.len(), 3);
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(leftovers, ["inventario.csv"]);
}

#[test]
fn test_next_sku_after_max() {
    let (_dir, path) = inventory_file(SAMPLE_FILE);
    assert_eq!(next_sku_after_max(&path).unwrap(), "2");
    assert_eq!(allocate_sku(&path).unwrap(), "3");
}

#[test]
fn test_next_sku_compares_numerically() {
    let contents = format!("{HEADER}\n9,A,a,S:1\n10,B,b,S:1\n\n2,C,c,S:1\n");
    let (_dir, path) = inventory_file(&contents);
    assert_eq!(next_sku_after_max(&path).unwrap(), "10");
}

#[test]
fn test_next_sku_on_empty_or_missing_file() {
    let (_dir, path) = inventory_file(&format!("{HEADER}\n"));
    assert_eq!(next_sku_after_max(&path).unwrap(), "0");
    assert_eq!(allocate_sku(&path).unwrap(), "1");

    let (_dir, missing) = missing_file();
    assert_eq!(next_sku_after_max(&missing).unwrap(), "0");
}

#[test]
fn test_next_sku_rejects_non_numeric_sku() {
    let contents = format!("{HEADER}\n1,A,a,S:1\nSKU123,B,b,S:1\n");
    let (_dir, path) = inventory_file(&contents);

    let err = next_sku_after_max(&path).unwrap_err();
    assert!(matches!(err, Error::Record { line: 3, .. }));
}
