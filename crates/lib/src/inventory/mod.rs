//! The in-memory inventory: one product arena and two search-tree indexes.
//!
//! Every product lives exactly once in the arena and is addressed by a
//! [`ProductId`]. The SKU index and the name index each map their key to that
//! handle. Products are only ever added, never removed, so a handle stays valid
//! for the lifetime of the inventory.
//!
//! The two indexes must always reference the same set of products. All
//! insertion paths check both indexes before touching either of them.

use std::{fmt, io::Write};

use tracing::{debug, warn};

use crate::{
    Result,
    codec::{encode_record, reserved_character},
    index::IndexedTree,
    product::{Product, Sizes},
};

mod edit;
mod errors;

pub use edit::{EditReport, EditRequest, StockChange};
pub use errors::InventoryError;

/// Handle to a product stored in an [`Inventory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(usize);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which index to traverse when listing products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexKind {
    #[default]
    Sku,
    Name,
}

/// Products indexed by SKU and by name.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: Vec<Product>,
    by_sku: IndexedTree<ProductId>,
    by_name: IndexedTree<ProductId>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Adds a new product.
    ///
    /// The SKU index is checked first, then the name index. Only when both
    /// keys are free and every field can be stored is the product created and
    /// inserted into both indexes.
    ///
    /// # Errors
    /// * [`InventoryError::DuplicateSku`] - the SKU is taken
    /// * [`InventoryError::DuplicateName`] - the name is taken
    /// * [`InventoryError::EmptyField`] / [`InventoryError::ReservedCharacter`] -
    ///   a field cannot be stored
    ///
    /// The inventory is unchanged when an error is returned.
    pub fn add_product(
        &mut self,
        sku: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        sizes: Sizes,
    ) -> Result<ProductId> {
        let product = Product::new(sku, name, description, sizes);

        if self.by_sku.contains_key(product.sku()) {
            return Err(InventoryError::DuplicateSku {
                sku: product.sku().to_string(),
            }
            .into());
        }
        if self.by_name.contains_key(product.name()) {
            return Err(InventoryError::DuplicateName {
                name: product.name().to_string(),
            }
            .into());
        }
        validate_product(&product)?;

        let id = self.link(product)?;
        debug!(%id, "added product");
        Ok(id)
    }

    /// Inserts a product read from storage.
    ///
    /// Mirrors the plain tree insert: a product whose SKU or name is already
    /// indexed is silently dropped, as is one with an empty SKU or name.
    /// Returns `true` if the product was added.
    pub fn insert_loaded(&mut self, product: Product) -> bool {
        if product.sku().is_empty() || product.name().is_empty() {
            warn!(sku = product.sku(), name = product.name(), "dropping record with an empty key");
            return false;
        }
        if self.by_sku.contains_key(product.sku()) || self.by_name.contains_key(product.name()) {
            debug!(sku = product.sku(), name = product.name(), "dropping duplicate record");
            return false;
        }
        self.link(product).is_ok()
    }

    /// Looks up a product by exact SKU.
    pub fn get_by_sku(&self, sku: &str) -> Option<&Product> {
        self.by_sku.get(sku).map(|&id| &self.products[id.0])
    }

    /// Looks up a product by exact name.
    pub fn get_by_name(&self, name: &str) -> Option<&Product> {
        self.by_name.get(name).map(|&id| &self.products[id.0])
    }

    /// Finds the first product, in name order, whose name matches `name`
    /// ignoring case.
    ///
    /// This walks the whole name index in the worst case.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        let target = name.to_lowercase();
        self.by_name
            .find(|&id| self.products[id.0].name().to_lowercase() == target)
            .map(|&id| &self.products[id.0])
    }

    /// Resolves a handle returned by [`add_product`](Self::add_product).
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.0)
    }

    /// Products in ascending order of the chosen index's key.
    ///
    /// Each call traverses the index from the start.
    pub fn list(&self, kind: IndexKind) -> impl Iterator<Item = &Product> + '_ {
        let index = match kind {
            IndexKind::Sku => &self.by_sku,
            IndexKind::Name => &self.by_name,
        };
        index.values().map(|&id| &self.products[id.0])
    }

    /// Edits the product with the given SKU.
    ///
    /// The description is replaced only when the request carries a non-empty
    /// one. Each stock delta is applied on its own: a delta that would take a
    /// size below zero is skipped and reported, the remaining deltas still
    /// apply. Nothing already applied is rolled back.
    ///
    /// # Errors
    /// * [`InventoryError::NotFound`] - no product has this SKU
    /// * [`InventoryError::ReservedCharacter`] - the new description or a size
    ///   name cannot be stored; checked before anything is changed
    pub fn edit_product(&mut self, sku: &str, request: &EditRequest) -> Result<EditReport> {
        let Some(&id) = self.by_sku.get(sku) else {
            return Err(InventoryError::NotFound {
                sku: sku.to_string(),
            }
            .into());
        };

        if let Some(description) = request.new_description() {
            check_reserved("description", description)?;
        }
        for size in request.deltas().keys() {
            check_reserved("size", size)?;
        }

        let product = &mut self.products[id.0];
        let mut report = EditReport::default();

        if let Some(description) = request.new_description() {
            product.set_description(description);
            report.description_updated = true;
        }

        for (size, &amount) in request.deltas() {
            match product.apply_stock(request.operation(), size, amount) {
                Ok(quantity) => report.applied.push(StockChange {
                    size: size.clone(),
                    quantity,
                }),
                Err(err) => {
                    warn!(sku, size = size.as_str(), "{err}");
                    report.rejected.push(err);
                }
            }
        }

        debug!(
            sku,
            applied = report.applied.len(),
            rejected = report.rejected.len(),
            "edited product"
        );
        Ok(report)
    }

    /// Writes one record line per product, in SKU order.
    ///
    /// No header is written.
    pub fn write_records<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for product in self.list(IndexKind::Sku) {
            writeln!(writer, "{}", encode_record(product))?;
        }
        Ok(())
    }

    /// Verifies that both indexes reference exactly the stored products under
    /// their own SKU and name.
    pub fn check_consistency(&self) -> Result<()> {
        let total = self.products.len();
        if self.by_sku.len() != total || self.by_name.len() != total {
            return Err(mismatch(format!(
                "{total} products, {} SKU keys, {} name keys",
                self.by_sku.len(),
                self.by_name.len()
            )));
        }

        let mut seen = vec![false; total];
        for (sku, &id) in &self.by_sku {
            match self.products.get(id.0) {
                Some(product) if product.sku() == sku => seen[id.0] = true,
                _ => return Err(mismatch(format!("SKU {sku} points at {id}"))),
            }
        }
        for (name, &id) in &self.by_name {
            match self.products.get(id.0) {
                Some(product) if product.name() == name && seen[id.0] => {}
                _ => return Err(mismatch(format!("name '{name}' points at {id}"))),
            }
        }
        Ok(())
    }

    /// Stores `product` and indexes it. Callers have already checked that
    /// both keys are free and non-empty.
    fn link(&mut self, product: Product) -> Result<ProductId> {
        let id = ProductId(self.products.len());
        self.by_sku.insert(product.sku(), id)?;
        self.by_name.insert(product.name(), id)?;
        self.products.push(product);
        Ok(id)
    }
}

fn validate_product(product: &Product) -> Result<()> {
    if product.sku().is_empty() {
        return Err(InventoryError::EmptyField { field: "SKU" }.into());
    }
    if product.name().is_empty() {
        return Err(InventoryError::EmptyField { field: "name" }.into());
    }
    check_reserved("SKU", product.sku())?;
    check_reserved("name", product.name())?;
    check_reserved("description", product.description())?;
    for size in product.sizes().keys() {
        check_reserved("size", size)?;
    }
    Ok(())
}

fn check_reserved(field: &'static str, value: &str) -> Result<()> {
    match reserved_character(value) {
        Some(character) => Err(InventoryError::ReservedCharacter {
            field,
            value: value.to_string(),
            character,
        }
        .into()),
        None => Ok(()),
    }
}

fn mismatch(reason: String) -> crate::Error {
    InventoryError::IndexMismatch { reason }.into()
}
