//! Catalog spreadsheet exchange as CSV.
//!
//! Columns are found by header name, so `itemCode`, `Item Code` and
//! `item_code` all map to the same field and column order does not matter.

use crate::config::CATALOG_HEADER;
use crate::domain::Product;
use crate::errors::{AppError, AppResult};

/// Rows read from a catalog file
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CatalogSheet {
    pub products: Vec<Product>,
    /// Rows with an empty item code, item name or barcode
    pub skipped: usize,
}

/// Parse a catalog CSV with a header row.
///
/// Quoted fields may span lines, so whatever `write_catalog` produced reads
/// back unchanged.
pub fn parse_catalog(text: &str) -> AppResult<CatalogSheet> {
    let mut records = parse_records(text)
        .into_iter()
        .filter(|record| record.iter().any(|field| !field.trim().is_empty()));

    let header: Vec<String> = records
        .next()
        .ok_or_else(|| AppError::validation("Catalog file is empty"))?
        .iter()
        .map(|name| normalize_header(name))
        .collect();

    let mut columns = [0usize; 3];
    for (slot, name) in columns.iter_mut().zip(CATALOG_HEADER) {
        let wanted = normalize_header(name);
        *slot = header
            .iter()
            .position(|h| *h == wanted)
            .ok_or_else(|| AppError::validation(format!("Missing column \"{}\"", name)))?;
    }

    let mut sheet = CatalogSheet::default();
    for record in records {
        let field = |index: usize| record.get(index).map(|s| s.trim()).unwrap_or("");

        let (item_code, item_name, barcode) =
            (field(columns[0]), field(columns[1]), field(columns[2]));
        if item_code.is_empty() || item_name.is_empty() || barcode.is_empty() {
            sheet.skipped += 1;
            continue;
        }

        sheet
            .products
            .push(Product::new(item_code, item_name, barcode));
    }

    Ok(sheet)
}

/// Render products as CSV, header first.
pub fn write_catalog(products: &[Product]) -> String {
    let mut out = CATALOG_HEADER.join(",");
    out.push('\n');

    for product in products {
        out.push_str(&format!(
            "{},{},{}\n",
            escape(&product.item_code),
            escape(&product.item_name),
            escape(&product.barcode)
        ));
    }

    out
}

fn normalize_header(name: &str) -> String {
    name.trim()
        .trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split CSV text into records, honouring quoted fields, `""` escapes and
/// line breaks inside quotes. `\r\n` and `\n` both end a record.
fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
                records.push(std::mem::take(&mut fields));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() || !fields.is_empty() {
        fields.push(current);
        records.push(fields);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_quotes() {
        assert_eq!(
            parse_records(r#"FG-001,"Water, 600ml ""Cool""",885"#),
            vec![vec!["FG-001", r#"Water, 600ml "Cool""#, "885"]]
        );
    }

    #[test]
    fn test_parse_catalog_maps_headers() {
        let text = "Barcode,Item Name,item_code\r\n885001,Soap,FG-010\r\n\r\n885002,,FG-011\n";
        let sheet = parse_catalog(text).unwrap();

        assert_eq!(sheet.products, vec![Product::new("FG-010", "Soap", "885001")]);
        assert_eq!(sheet.skipped, 1);
    }

    #[test]
    fn test_parse_catalog_missing_column() {
        let err = parse_catalog("itemCode,itemName\nFG-1,Soap\n").unwrap_err();
        assert_eq!(err.to_string(), "Missing column \"barcode\"");
    }

    #[test]
    fn test_write_catalog_reads_back() {
        let products = vec![
            Product::new("FG-001", "Water, 600ml", "8851234567890"),
            Product::new("FG-002", "Rice", "8850000000001"),
        ];

        let text = write_catalog(&products);
        assert!(text.starts_with("itemCode,itemName,barcode\n"));
        assert_eq!(parse_catalog(&text).unwrap().products, products);
    }

    #[test]
    fn test_quoted_line_break_stays_in_field() {
        let products = vec![
            Product::new("FG-1", "Water\n600ml", "885"),
            Product::new("FG-2", "Rice", "886"),
        ];

        let text = write_catalog(&products);
        let sheet = parse_catalog(&text).unwrap();
        assert_eq!(sheet.products, products);
        assert_eq!(sheet.skipped, 0);
    }
}
