//! File-backed inventory.
//!
//! [`InventoryStore`] pairs an [`Inventory`] with the file it was loaded from
//! and writes the file back after every successful change. It is the surface
//! a front-end (such as the `stockroom` CLI) works against.
//!
//! The store is single-user: it takes `&mut self` for every change and does
//! no locking, on the inventory or on the file. Two stores opened on the same
//! file will overwrite each other's changes.

use std::path::{Path, PathBuf};

use tracing::error;

use crate::{
    Result,
    inventory::{EditReport, EditRequest, IndexKind, Inventory, ProductId},
    persistence::{self, LoadOptions, SaveMode},
    product::{Product, Sizes},
};

/// Options for opening an [`InventoryStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreOptions {
    pub load: LoadOptions,
    pub save_mode: SaveMode,
}

/// An inventory persisted to a single file.
#[derive(Debug)]
pub struct InventoryStore {
    inventory: Inventory,
    path: PathBuf,
    options: StoreOptions,
}

impl InventoryStore {
    /// Loads the inventory at `path`. A missing file opens as an empty store;
    /// the file is created by the first change.
    pub fn open(path: impl Into<PathBuf>, options: StoreOptions) -> Result<Self> {
        let path = path.into();
        let inventory = persistence::load_inventory(&path, &options.load)?;
        Ok(Self {
            inventory,
            path,
            options,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Adds a product and saves the file.
    ///
    /// If saving fails the product stays in memory; the error is returned so
    /// the caller can retry with [`save`](Self::save).
    pub fn add_product(
        &mut self,
        sku: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        sizes: Sizes,
    ) -> Result<ProductId> {
        let id = self.inventory.add_product(sku, name, description, sizes)?;
        self.save()?;
        Ok(id)
    }

    /// Edits the product with `sku` and saves the file.
    ///
    /// See [`Inventory::edit_product`]. Changes already applied in memory are
    /// kept if saving fails.
    pub fn edit_product(&mut self, sku: &str, request: &EditRequest) -> Result<EditReport> {
        let report = self.inventory.edit_product(sku, request)?;
        self.save()?;
        Ok(report)
    }

    pub fn search_by_sku(&self, sku: &str) -> Option<&Product> {
        self.inventory.get_by_sku(sku)
    }

    /// Case-insensitive name lookup.
    pub fn search_by_name(&self, name: &str) -> Option<&Product> {
        self.inventory.find_by_name(name)
    }

    /// Products ordered by SKU when `by_sku` is set, by name otherwise.
    pub fn list_in_order(&self, by_sku: bool) -> impl Iterator<Item = &Product> + '_ {
        let kind = if by_sku { IndexKind::Sku } else { IndexKind::Name };
        self.inventory.list(kind)
    }

    /// Largest SKU currently in the file. See [`persistence::next_sku_after_max`].
    pub fn next_sku_after_max(&self) -> Result<String> {
        persistence::next_sku_after_max(&self.path)
    }

    /// SKU to give the next new product.
    pub fn allocate_sku(&self) -> Result<String> {
        persistence::allocate_sku(&self.path)
    }

    /// Writes the whole inventory to the file.
    pub fn save(&self) -> Result<()> {
        persistence::save_inventory(&self.path, &self.inventory, self.options.save_mode)
            .inspect_err(|e| error!(path = %self.path.display(), "failed to save inventory: {e}"))
    }
}
