//! Reading and writing the inventory file.
//!
//! The file is UTF-8 text. The first line is a header that is always written
//! as [`HEADER`] and always discarded on load, whatever it contains. Every
//! other non-blank line is one record in the format described in
//! [`codec`](crate::codec).
//!
//! Loading a file that does not exist yields an empty inventory, the same way
//! a fresh installation starts with no file at all.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    Error, Result,
    codec::{decode_record, decode_sku_number},
    constants::{EMPTY_SKU, FIELD_SEPARATOR, HEADER},
    inventory::Inventory,
};

/// What to do with a record whose size field cannot be parsed.
///
/// Records with too few fields are always skipped; this only governs records
/// that have all four fields but a bad `size:quantity` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedQuantityPolicy {
    /// Fail the whole load. No partially loaded inventory is returned.
    #[default]
    Abort,
    /// Skip the record with a warning and keep loading.
    SkipLine,
}

/// Options for [`load_inventory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub malformed_quantity: MalformedQuantityPolicy,
}

impl LoadOptions {
    /// Options that skip records with malformed quantities instead of failing.
    pub fn lenient() -> Self {
        Self {
            malformed_quantity: MalformedQuantityPolicy::SkipLine,
        }
    }
}

/// How [`save_inventory`] replaces the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Truncate the file and rewrite it in place. A failure part-way through
    /// leaves a truncated file.
    #[default]
    Truncate,
    /// Write a sibling temporary file, then rename it over the target.
    Atomic,
}

/// Loads an inventory from `path`.
///
/// # Errors
/// * [`Error::Io`] - the file exists but cannot be read
/// * [`Error::Record`] - a record has a malformed size field and `options`
///   asks to abort
pub fn load_inventory(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Inventory> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "inventory file not found, starting empty");
            return Ok(Inventory::new());
        }
        Err(e) => return Err(e.into()),
    };

    let inventory = read_inventory(BufReader::new(file), options)?;
    info!(path = %path.display(), products = inventory.len(), "loaded inventory");
    Ok(inventory)
}

/// Reads an inventory from any buffered reader. See [`load_inventory`].
pub fn read_inventory<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Inventory> {
    let mut inventory = Inventory::new();
    let mut skipped = 0usize;
    let mut dropped = 0usize;

    for (line_number, line) in numbered_records(reader) {
        let line = line?;
        match decode_record(&line) {
            Ok(product) => {
                if !inventory.insert_loaded(product) {
                    dropped += 1;
                }
            }
            Err(err) if err.is_too_few_fields() => {
                warn!(line = line_number, record = %line, "skipping invalid record: {err}");
                skipped += 1;
            }
            Err(err) => match options.malformed_quantity {
                MalformedQuantityPolicy::Abort => {
                    return Err(Error::Record {
                        line: line_number,
                        source: err,
                    });
                }
                MalformedQuantityPolicy::SkipLine => {
                    warn!(line = line_number, record = %line, "skipping invalid record: {err}");
                    skipped += 1;
                }
            },
        }
    }

    debug!(products = inventory.len(), skipped, dropped, "read inventory records");
    Ok(inventory)
}

/// Saves `inventory` to `path`: the header, then one record per product in
/// SKU order.
pub fn save_inventory(path: impl AsRef<Path>, inventory: &Inventory, mode: SaveMode) -> Result<()> {
    let path = path.as_ref();
    match mode {
        SaveMode::Truncate => write_file(path, inventory)?,
        SaveMode::Atomic => {
            let temporary = temporary_path(path);
            if let Err(e) = write_file(&temporary, inventory) {
                let _ = fs::remove_file(&temporary);
                return Err(e);
            }
            fs::rename(&temporary, path)?;
        }
    }
    info!(path = %path.display(), products = inventory.len(), ?mode, "saved inventory");
    Ok(())
}

/// Writes the header and all records to `writer`.
pub fn write_inventory<W: Write>(writer: &mut W, inventory: &Inventory) -> std::io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    inventory.write_records(writer)
}

/// Returns the largest numeric SKU in the file at `path`, as written there.
///
/// Returns `"0"` when the file is missing or holds no records. Blank lines
/// are ignored.
///
/// # Errors
/// [`Error::Record`] if any record's SKU is not a non-negative integer.
pub fn next_sku_after_max(path: impl AsRef<Path>) -> Result<String> {
    Ok(match max_sku(path.as_ref())? {
        Some((_, sku)) => sku,
        None => EMPTY_SKU.to_string(),
    })
}

/// Returns the SKU that follows the largest one in the file at `path`.
pub fn allocate_sku(path: impl AsRef<Path>) -> Result<String> {
    let next = match max_sku(path.as_ref())? {
        Some((max, _)) => max.saturating_add(1),
        None => 1,
    };
    Ok(next.to_string())
}

fn max_sku(path: &Path) -> Result<Option<(u64, String)>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut max: Option<(u64, String)> = None;
    for (line_number, line) in numbered_records(BufReader::new(file)) {
        let line = line?;
        let value = decode_sku_number(&line).map_err(|source| Error::Record {
            line: line_number,
            source,
        })?;
        if max.as_ref().is_none_or(|(current, _)| value > *current) {
            let sku = line.split(FIELD_SEPARATOR).next().unwrap_or_default().to_string();
            max = Some((value, sku));
        }
    }
    Ok(max)
}

/// Lines after the header that are not blank, with 1-based line numbers.
fn numbered_records<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = (usize, std::io::Result<String>)> {
    reader
        .lines()
        .enumerate()
        .skip(1)
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !matches!(line, Ok(text) if text.trim().is_empty()))
}

fn write_file(path: &Path, inventory: &Inventory) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_inventory(&mut writer, inventory)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
