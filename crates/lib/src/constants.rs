//! Constants used throughout the Stockroom library.
//!
//! This module provides central definitions for the inventory file format.

/// Header line written at the top of every inventory file.
///
/// The first line of a file is always discarded on load, whatever it contains.
pub const HEADER: &str = "SKU,Nombre,Descripción,Tallas";

/// Separates the fields of a record.
pub const FIELD_SEPARATOR: char = ',';

/// Separates the `size:quantity` pairs inside the size blob.
pub const SIZE_SEPARATOR: char = '|';

/// Separates a size from its quantity.
pub const QUANTITY_SEPARATOR: char = ':';

/// Number of fields a record needs to be loaded: SKU, name, description, sizes.
pub const RECORD_FIELDS: usize = 4;

/// Characters that cannot appear inside a stored field.
///
/// The file format has no quoting or escaping, so any of these inside a value
/// would change how the line splits when it is read back.
pub const RESERVED_CHARACTERS: [char; 5] = [
    FIELD_SEPARATOR,
    SIZE_SEPARATOR,
    QUANTITY_SEPARATOR,
    '\n',
    '\r',
];

/// SKU reported by an inventory file that contains no records.
pub const EMPTY_SKU: &str = "0";
