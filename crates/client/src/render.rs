//! Plain-text renderers for search results: an aligned table and a
//! one-block-per-record card view.

use stockscout_inventory::InventoryRecord;

const HEADERS: [&str; 7] = ["ID", "PRODUCT", "CATEGORY", "PRICE", "QTY", "SUPPLIER", "CITY"];

fn columns(record: &InventoryRecord) -> [String; 7] {
    [
        record.id.to_string(),
        record.product_name.clone(),
        record.category.clone(),
        format!("{:.2}", record.price),
        record.quantity.to_string(),
        record.supplier.clone(),
        record.city.clone(),
    ]
}

/// Render records as an aligned table, one row per record.
pub fn render_table(records: &[InventoryRecord]) -> String {
    if records.is_empty() {
        return "no matching records\n".to_string();
    }

    let rows: Vec<[String; 7]> = records.iter().map(columns).collect();

    let mut widths: [usize; 7] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let render_row = |cells: &[String; 7]| -> String {
        let mut line = String::new();
        for (i, (cell, &width)) in cells.iter().zip(&widths).enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(&format!("{cell:<width$}"));
        }
        line.trim_end().to_string()
    };

    out.push_str(&render_row(&HEADERS.map(str::to_string)));
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}

/// Render records as cards, one labeled block per record.
pub fn render_cards(records: &[InventoryRecord]) -> String {
    if records.is_empty() {
        return "no matching records\n".to_string();
    }

    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "#{id} {name}\n  category: {category}\n  price:    {price:.2}\n  quantity: {quantity}\n  supplier: {supplier}\n  city:     {city}\n\n",
            id = record.id,
            name = record.product_name,
            category = record.category,
            price = record.price,
            quantity = record.quantity,
            supplier = record.supplier,
            city = record.city,
        ));
    }
    out
}
