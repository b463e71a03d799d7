//! Barcode lookup against the locally held catalog.

use crate::domain::Product;

/// Trim scanner or keyboard input; blank input is no barcode at all
pub fn clean_barcode(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Exact barcode match. No case folding or other normalisation.
pub fn find_by_barcode<'a>(products: &'a [Product], barcode: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.barcode == barcode)
}
