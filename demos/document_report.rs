//! 單據報表示例
//!
//! 以記憶體內的單據與型錄資料走完整條報表管線，
//! 不需要遠端 API 金鑰

use docstock::{ReportCalculator, ReportConfig, ProductRecord, RowKind, SalesDocument};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 單據報表計算示例 ===\n");

    // 型錄：兩件廚房產品
    let products: Vec<ProductRecord> = serde_json::from_value(json!([
        {
            "id": "P-TABLE",
            "name": "Mesa Nogal",
            "sku": "TB-104",
            "stock": 4,
            "weight": 26,
            "attributes": [
                { "name": "Ancho [cm]", "value": 160 },
                { "name": "Alto [cm]", "value": 75 },
                { "name": "Fondo [cm]", "value": 90 },
                { "name": "Product Line", "value": "Kitchen" }
            ]
        },
        {
            "id": "P-CHAIR",
            "name": "Silla Roble",
            "sku": "CH-001",
            "stock": 50,
            "weight": 4.5,
            "attributes": [
                { "name": "Product Line", "value": "Kitchen" }
            ]
        }
    ]))?;

    // 單據：一張銷售訂單，含一筆型錄未命中的行項目
    let document: SalesDocument = serde_json::from_value(json!({
        "docNumber": "SO25-0143",
        "products": [
            { "productId": "P-TABLE", "units": 12 },
            { "productId": "P-CHAIR", "units": 48 },
            { "productId": "P-EXT", "units": 5, "name": "Cojín externo", "sku": "CJ-900", "weight": 0.4 }
        ]
    }))?;

    let calculator = ReportCalculator::new(ReportConfig::default());
    let result = calculator.calculate(&document, &products)?;

    println!("報表資料列:");
    for row in &result.report.rows {
        match row.kind {
            RowKind::GroupHeader => println!("{}", row.product),
            RowKind::Item => println!(
                "  {:<8} {:<16} 數量 {:>4}  缺貨 {:>3}",
                row.sku,
                row.product,
                row.units.unwrap_or_default(),
                row.shortage.unwrap_or_default()
            ),
            RowKind::Subtotal => println!(
                "  小計：數量 {}，重量 {} kg，體積 {} m³",
                row.subtotal_units.unwrap_or_default(),
                row.subtotal_total_weight.unwrap_or_default(),
                row.subtotal_volume.unwrap_or_default()
            ),
            RowKind::Total => println!(
                "總計：數量 {}，重量 {} kg，體積 {} m³",
                row.subtotal_units.unwrap_or_default(),
                row.subtotal_total_weight.unwrap_or_default(),
                row.subtotal_volume.unwrap_or_default()
            ),
        }
    }

    println!("\n棧板估算:");
    println!("  依重量: {}", result.pallets.pallets_by_weight);
    println!("  依體積: {}", result.pallets.pallets_by_volume);
    println!("  需要棧板: {}", result.pallets.pallets_needed);

    Ok(())
}
