//! Line format of the inventory file.
//!
//! A record is `sku,name,description,sizes` where `sizes` is a list of
//! `size:quantity` pairs joined by `|`, for example:
//!
//! ```text
//! 1,Camiseta,Camiseta de algodón,S:10|M:5
//! ```
//!
//! There is no quoting: field values must not contain `,`, `|` or `:` (see
//! [`RESERVED_CHARACTERS`](crate::constants::RESERVED_CHARACTERS)). The
//! inventory refuses such values when products are added or edited.

use crate::{
    constants::{
        FIELD_SEPARATOR, QUANTITY_SEPARATOR, RECORD_FIELDS, RESERVED_CHARACTERS, SIZE_SEPARATOR,
    },
    product::{Product, Sizes},
};

mod errors;

pub use errors::RecordError;

/// Encodes a product as one record line, without the trailing newline.
pub fn encode_record(product: &Product) -> String {
    format!(
        "{sku}{sep}{name}{sep}{description}{sep}{sizes}",
        sku = product.sku(),
        name = product.name(),
        description = product.description(),
        sizes = encode_sizes(product.sizes()),
        sep = FIELD_SEPARATOR,
    )
}

/// Encodes a size map as `size:quantity` pairs joined by `|`, in map order.
pub fn encode_sizes(sizes: &Sizes) -> String {
    let separator = SIZE_SEPARATOR.to_string();
    sizes
        .iter()
        .map(|(size, quantity)| format!("{size}{QUANTITY_SEPARATOR}{quantity}"))
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Decodes one record line.
///
/// Fields past the fourth are ignored. An empty size field decodes to an empty
/// size map.
///
/// # Errors
/// * [`RecordError::TooFewFields`] - fewer than four fields
/// * [`RecordError::MalformedSize`] / [`RecordError::MalformedNumber`] - the
///   size field could not be parsed
pub fn decode_record(line: &str) -> Result<Product, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < RECORD_FIELDS {
        return Err(RecordError::TooFewFields {
            expected: RECORD_FIELDS,
            found: fields.len(),
        });
    }

    let sizes = decode_sizes(fields[3])?;
    Ok(Product::new(fields[0], fields[1], fields[2], sizes))
}

/// Decodes a size blob such as `S:10|M:5`.
///
/// Empty entries (for example from a trailing `|`) are ignored. When a size
/// appears twice, the later quantity replaces the earlier one.
pub fn decode_sizes(blob: &str) -> Result<Sizes, RecordError> {
    let mut sizes = Sizes::new();
    for entry in blob.split(SIZE_SEPARATOR).filter(|entry| !entry.is_empty()) {
        let (size, quantity) =
            entry
                .split_once(QUANTITY_SEPARATOR)
                .ok_or_else(|| RecordError::MalformedSize {
                    entry: entry.to_string(),
                })?;
        let quantity = quantity
            .parse::<u32>()
            .map_err(|_| RecordError::MalformedNumber {
                field: format!("size '{size}'"),
                value: quantity.to_string(),
            })?;
        sizes.insert(size.to_string(), quantity);
    }
    Ok(sizes)
}

/// Parses the leading SKU field of a record line as a number.
pub fn decode_sku_number(line: &str) -> Result<u64, RecordError> {
    let sku = line.split(FIELD_SEPARATOR).next().unwrap_or_default();
    sku.parse::<u64>().map_err(|_| RecordError::MalformedNumber {
        field: "SKU".to_string(),
        value: sku.to_string(),
    })
}

/// Returns the first character of `value` that the file format cannot store.
pub fn reserved_character(value: &str) -> Option<char> {
    value.chars().find(|c| RESERVED_CHARACTERS.contains(c))
}
