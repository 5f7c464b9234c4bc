use crate::domain::line_item::LineItem;
use crate::error::{CheckoutError, Result};
use serde::Deserialize;
use std::io::Read;

/// Separator between variant prices in the `prices` column.
pub const VARIANT_SEPARATOR: char = '|';

/// Quantity of a row that leaves the column out or blank.
pub const DEFAULT_QUANTITY: &str = "1";

/// One row of a cart file: `name, prices, quantity`.
///
/// `quantity` is optional so that a short row reads as `None` instead of
/// failing with an unexpected end of row.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CartRecord {
    pub name: String,
    pub prices: String,
    pub quantity: Option<String>,
}

impl TryFrom<CartRecord> for LineItem {
    type Error = CheckoutError;

    fn try_from(record: CartRecord) -> Result<Self> {
        let variants = record
            .prices
            .split(VARIANT_SEPARATOR)
            .map(str::trim)
            .filter(|price| !price.is_empty())
            .map(str::to_string)
            .collect();
        let quantity = record
            .quantity
            .unwrap_or_else(|| DEFAULT_QUANTITY.to_string());
        LineItem::new(record.name, variants, quantity)
    }
}

/// Reads line items from a CSV source.
///
/// The first listed price of a row is its default variant. Field values are
/// kept as written; a quantity of `abc` loads fine and shows up as `GHS NaN`.
pub struct CartReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CartReader<R> {
    /// Creates a new `CartReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads rows and turns them into items.
    pub fn items(self) -> impl Iterator<Item = Result<LineItem>> {
        self.reader.into_deserialize::<CartRecord>().map(|result| {
            result
                .map_err(CheckoutError::from)
                .and_then(LineItem::try_from)
        })
    }
}
