//! 集成測試

use docstock::{
    ProductRecord, ReportCalculator, ReportConfig, ReportError, RowKind, SalesDocument,
};
use rust_decimal::Decimal;
use serde_json::json;

fn dec(raw: &str) -> Decimal {
    raw.parse().unwrap()
}

/// 測試型錄：兩條產品線 + 一筆無識別碼的記錄
fn sample_products() -> Vec<ProductRecord> {
    serde_json::from_value(json!([
        {
            "id": "P-TABLE",
            "name": "Mesa Nogal",
            "sku": "TB-104",
            "stock": 4,
            "weight": 26,
            "attributes": [
                { "name": "Ancho [cm]", "value": 100 },
                { "name": "Alto [cm]", "value": 100 },
                { "name": "Fondo [cm]", "value": 100 },
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
                { "name": "Ancho [cm]", "value": 40 },
                { "name": "Alto [cm]", "value": 30 },
                { "name": "Fondo [cm]", "value": 25 },
                { "name": "Product Line", "value": "Kitchen" }
            ]
        },
        {
            "productId": "P-DESK",
            "name": "Escritorio Abedul",
            "sku": "DK-310",
            "stock": "agotado",
            "weight": 18,
            "attributes": [
                { "name": "3. Product Line", "value": "Office" }
            ]
        },
        {
            "name": "Registro sin identificador"
        }
    ]))
    .unwrap()
}

fn sample_document() -> SalesDocument {
    serde_json::from_value(json!({
        "docNumber": "SO25-0143",
        "date": 1762992000,
        "products": [
            { "productId": "P-TABLE", "units": 100 },
            { "productId": "P-CHAIR", "units": 10 },
            { "productId": "P-DESK", "units": 3 },
            { "productId": "P-MISSING", "units": 5, "name": "Widget", "sku": "" }
        ]
    }))
    .unwrap()
}

#[test]
fn test_full_report_pipeline() {
    // 場景：兩條產品線 + 一筆型錄未命中的行項目

    // 1. 執行管線
    let calculator = ReportCalculator::new(ReportConfig::default());
    let result = calculator
        .calculate(&sample_document(), &sample_products())
        .unwrap();
    let report = &result.report;

    // 2. 分組依首次出現順序：Kitchen → Office → 預設產品線
    let headers: Vec<&str> = report
        .rows
        .iter()
        .filter(|r| r.kind == RowKind::GroupHeader)
        .map(|r| r.product.as_str())
        .collect();
    assert_eq!(
        headers,
        vec![
            "——— Kitchen ———",
            "——— Office ———",
            "——— Sin línea de productos ———"
        ]
    );

    // 3. Kitchen 分組依 SKU 排序：CH-001 在 TB-104 之前
    let kitchen_skus: Vec<&str> = report.rows[1..3].iter().map(|r| r.sku.as_str()).collect();
    assert_eq!(kitchen_skus, vec!["CH-001", "TB-104"]);

    // 4. Kitchen 小計：數量 110，重量 2645.00，體積 1.0 + 0.03
    let kitchen_subtotal = &report.rows[3];
    assert_eq!(kitchen_subtotal.kind, RowKind::Subtotal);
    assert_eq!(kitchen_subtotal.subtotal_units, Some(dec("110.0")));
    assert_eq!(kitchen_subtotal.subtotal_total_weight, Some(dec("2645.00")));
    assert_eq!(kitchen_subtotal.subtotal_volume, Some(dec("1.03000")));
    // 桌子缺 96 張
    assert_eq!(kitchen_subtotal.subtotal_shortage, Some(dec("96")));

    // 5. Office 分組：庫存為非數值 → 缺貨中性、重量照算
    let office_row = report
        .rows
        .iter()
        .find(|r| r.sku == "DK-310")
        .expect("Office 分組應包含 DK-310");
    assert_eq!(office_row.stock, None);
    assert_eq!(office_row.insufficient, "");
    assert_eq!(office_row.shortage, Some(Decimal::ZERO));
    assert_eq!(office_row.total_weight, Some(dec("54.000")));

    // 6. 總計列 = 各分組小計之和
    let total_row = report.rows.last().unwrap();
    assert_eq!(total_row.kind, RowKind::Total);
    assert_eq!(total_row.product, "——— TOTAL ———");
    assert_eq!(total_row.subtotal_units, Some(dec("118.0")));
    assert_eq!(total_row.subtotal_shortage, Some(dec("96")));

    let group_shortages: Decimal = report
        .rows
        .iter()
        .filter(|r| r.kind == RowKind::Subtotal)
        .filter_map(|r| r.subtotal_shortage)
        .sum();
    assert_eq!(total_row.subtotal_shortage, Some(group_shortages));

    // 7. 棧板估算：2699 kg → 2.076；1.03 m³ → 0.596 → 3 板
    assert_eq!(result.pallets.total_weight, dec("2699.00"));
    assert_eq!(result.pallets.pallets_by_weight, dec("2.076"));
    assert_eq!(result.pallets.pallets_by_volume, dec("0.596"));
    assert_eq!(result.pallets.pallets_needed, 3);
}

#[test]
fn test_pipeline_is_idempotent() {
    // 相同輸入執行兩次，報表與棧板估算完全一致
    let calculator = ReportCalculator::new(ReportConfig::default());

    let first = calculator
        .calculate(&sample_document(), &sample_products())
        .unwrap();
    let second = calculator
        .calculate(&sample_document(), &sample_products())
        .unwrap();

    assert_eq!(first.report, second.report);
    assert_eq!(first.pallets, second.pallets);
}

#[test]
fn test_catalog_miss_fallback_line() {
    // 型錄未命中：行內名稱、空 SKU、未知庫存、中性缺貨、預設產品線
    let result = ReportCalculator::default()
        .calculate(&sample_document(), &sample_products())
        .unwrap();

    let fallback_row = result
        .report
        .rows
        .iter()
        .find(|r| r.product == "Widget")
        .expect("預設分組應包含 Widget");

    assert_eq!(fallback_row.sku, "");
    assert_eq!(fallback_row.units, Some(dec("5")));
    assert_eq!(fallback_row.stock, None);
    assert_eq!(fallback_row.insufficient, "");
    assert_eq!(fallback_row.shortage, Some(Decimal::ZERO));
    assert_eq!(fallback_row.surplus, Some(Decimal::ZERO));
    assert_eq!(fallback_row.volume, None);
}

#[test]
fn test_empty_document_produces_empty_report() {
    let document: SalesDocument =
        serde_json::from_value(json!({ "docNumber": "SO25-0001", "products": [] })).unwrap();

    let result = ReportCalculator::default()
        .calculate(&document, &sample_products())
        .unwrap();

    // 空報表保留完整欄位結構，不是錯誤
    assert!(result.report.is_empty());
    assert_eq!(docstock::Report::columns().len(), 14);
    assert_eq!(result.report.totals.units, Decimal::ZERO);
    assert_eq!(result.pallets.pallets_needed, 1);
}

#[test]
fn test_malformed_line_item_container_fails_the_run() {
    let document: SalesDocument = serde_json::from_value(json!({
        "docNumber": "SO25-0666",
        "products": "no soy una lista"
    }))
    .unwrap();

    let err = ReportCalculator::default()
        .calculate(&document, &sample_products())
        .unwrap_err();

    match err {
        ReportError::MalformedLineItems { doc_number, .. } => {
            assert_eq!(doc_number, "SO25-0666");
        }
        other => panic!("預期 MalformedLineItems，實際為 {other:?}"),
    }
}

#[test]
fn test_missing_catalog_entirely_still_reports() {
    // 型錄完全為空：所有行項目都走行內退回路徑
    let result = ReportCalculator::default()
        .calculate(&sample_document(), &[])
        .unwrap();

    let headers: Vec<&str> = result
        .report
        .rows
        .iter()
        .filter(|r| r.kind == RowKind::GroupHeader)
        .map(|r| r.product.as_str())
        .collect();
    assert_eq!(headers, vec!["——— Sin línea de productos ———"]);

    // 行內欄位缺漏 → 空名稱、零重量、未知總重
    let first_item = result
        .report
        .rows
        .iter()
        .find(|r| r.kind == RowKind::Item)
        .unwrap();
    assert_eq!(first_item.total_weight, None);
}
