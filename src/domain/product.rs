//! Product catalog entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog item. Both `item_code` and `barcode` are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = "FG-001")]
    pub item_code: String,
    #[schema(example = "Drinking Water 600ml")]
    pub item_name: String,
    #[schema(example = "8851234567890")]
    pub barcode: String,
}

impl Product {
    pub fn new(
        item_code: impl Into<String>,
        item_name: impl Into<String>,
        barcode: impl Into<String>,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            item_name: item_name.into(),
            barcode: barcode.into(),
        }
    }
}

/// Partial product update; the item code is the key and never changes
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub item_name: Option<String>,
    pub barcode: Option<String>,
}
