use stockroom::{
    EditRequest, Error, IndexKind, Inventory, Sizes, StockOperation, inventory::InventoryError,
};

use crate::helpers::{sizes, snapshot};

fn sample() -> Inventory {
    let mut inventory = Inventory::new();
    inventory
        .add_product("1", "Camiseta", "Camiseta de algodón", sizes(&[("S", 10), ("M", 5)]))
        .expect("Failed to add product 1");
    inventory
        .add_product("2", "Pantalón", "Pantalón de mezclilla", sizes(&[("S", 8), ("M", 4)]))
        .expect("Failed to add product 2");
    inventory
}

#[test]
fn test_duplicate_sku_changes_nothing() {
    let mut inventory = sample();
    let before = snapshot(&inventory);

    let err = inventory
        .add_product("1", "Sudadera", "Nueva", sizes(&[("L", 1)]))
        .unwrap_err();

    assert!(err.is_conflict());
    assert!(matches!(
        err,
        Error::Inventory(InventoryError::DuplicateSku { ref sku }) if sku == "1"
    ));
    assert_eq!(snapshot(&inventory), before);
    assert!(inventory.get_by_name("Sudadera").is_none());
    inventory.check_consistency().unwrap();
}

#[test]
fn test_duplicate_name_changes_nothing() {
    let mut inventory = sample();
    let before = snapshot(&inventory);

    let err = inventory
        .add_product("9", "Pantalón", "Otro", Sizes::new())
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Inventory(InventoryError::DuplicateName { .. })
    ));
    assert_eq!(snapshot(&inventory), before);
    assert!(inventory.get_by_sku("9").is_none());
}

#[test]
fn test_indexes_share_products() {
    let mut inventory = sample();
    let request = EditRequest::new(StockOperation::Add).with_delta("XL", 2);
    inventory.edit_product("2", &request).unwrap();

    // The edit made through the SKU index is visible through the name index.
    let by_name = inventory.get_by_name("Pantalón").unwrap();
    assert_eq!(by_name.stock("XL"), Some(2));
    assert_eq!(inventory.list(IndexKind::Name).count(), 2);
    inventory.check_consistency().unwrap();
}

#[test]
fn test_add_deltas_to_existing_sizes() {
    let mut inventory = sample();
    let request = EditRequest::new(StockOperation::Add)
        .with_delta("S", 12)
        .with_delta("M", 5);

    let report = inventory.edit_product("1", &request).unwrap();

    assert!(report.is_complete());
    let product = inventory.get_by_sku("1").unwrap();
    assert_eq!(product.sizes(), &sizes(&[("S", 22), ("M", 10)]));
}

#[test]
fn test_subtract_below_zero_is_rejected() {
    let mut inventory = sample();

    let too_many = EditRequest::new(StockOperation::Subtract).with_delta("S", 15);
    let report = inventory.edit_product("1", &too_many).unwrap();
    assert_eq!(report.rejected.len(), 1);
    assert!(report.applied.is_empty());
    assert_eq!(inventory.get_by_sku("1").unwrap().stock("S"), Some(10));

    let some = EditRequest::new(StockOperation::Subtract).with_delta("S", 3);
    let report = inventory.edit_product("1", &some).unwrap();
    assert!(report.is_complete());
    assert_eq!(inventory.get_by_sku("1").unwrap().stock("S"), Some(7));
}

#[test]
fn test_edit_missing_product() {
    let mut inventory = sample();
    let before = snapshot(&inventory);

    let request = EditRequest::new(StockOperation::Add)
        .with_description("No existe")
        .with_delta("S", 1);
    let err = inventory.edit_product("404", &request).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(snapshot(&inventory), before);
}

#[test]
fn test_edit_refuses_reserved_description_before_changing_stock() {
    let mut inventory = sample();
    let request = EditRequest::new(StockOperation::Add)
        .with_description("Algodón|poliéster")
        .with_delta("S", 1);

    let err = inventory.edit_product("1", &request).unwrap_err();

    assert!(err.is_validation_error());
    let product = inventory.get_by_sku("1").unwrap();
    assert_eq!(product.stock("S"), Some(10));
    assert_eq!(product.description(), "Camiseta de algodón");
}

#[test]
fn test_product_handles_resolve() {
    let mut inventory = Inventory::new();
    let id = inventory
        .add_product("10", "Chaqueta", "Cortavientos", sizes(&[("M", 3)]))
        .unwrap();

    let product = inventory.product(id).unwrap();
    assert_eq!(product.sku(), "10");
    assert_eq!(inventory.get_by_sku("10"), Some(product));
}
