//! 報表主計算器

use docstock_core::{CatalogIndex, ProductRecord, ReportConfig, Result, SalesDocument};

use crate::grouping::GroupingCalculator;
use crate::pallet::PalletCalculator;
use crate::report::ReportAssembler;
use crate::resolver::LineResolver;
use crate::ReportResult;

/// 報表計算器
///
/// 一次報表執行是一條線性管線；執行之間不共用任何可變狀態，
/// 併發的報表請求各自建立自己的型錄索引與報表
pub struct ReportCalculator {
    /// 報表配置
    config: ReportConfig,
}

impl Default for ReportCalculator {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl ReportCalculator {
    /// 創建新的報表計算器
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// 主計算入口
    pub fn calculate(
        &self,
        document: &SalesDocument,
        products: &[ProductRecord],
    ) -> Result<ReportResult> {
        tracing::info!(
            "開始報表計算：單據 {}，產品 {} 筆",
            document.doc_number,
            products.len()
        );

        let start_time = std::time::Instant::now();

        // Step 1: 建立型錄索引
        tracing::debug!("Step 1: 建立型錄索引");
        let catalog = CatalogIndex::build(products);
        tracing::debug!("型錄索引項目: {}", catalog.len());

        // Step 2: 取出行項目（容器必須是列表，否則致命）
        tracing::debug!("Step 2: 取出行項目");
        let lines = document.items()?;
        tracing::debug!("行項目數量: {}", lines.len());

        let catalog_misses = lines
            .iter()
            .filter(|line| {
                line.identifier()
                    .map_or(true, |id| catalog.get(id).is_none())
            })
            .count();
        if catalog_misses > 0 {
            tracing::debug!("型錄未命中: {} 筆，退回行內欄位", catalog_misses);
        }

        // Step 3: 逐行解析
        tracing::debug!("Step 3: 逐行解析");
        let resolved: Vec<_> = lines
            .iter()
            .map(|line| LineResolver::resolve(line, &catalog, &self.config))
            .collect();

        // Step 4: 分組與小計
        tracing::debug!("Step 4: 分組與小計");
        let groups = GroupingCalculator::group(resolved);
        tracing::debug!("分組數量: {}", groups.len());

        // Step 5: 報表組裝
        tracing::debug!("Step 5: 報表組裝");
        let report = ReportAssembler::assemble(&groups, &self.config);

        // Step 6: 棧板估算（取報表總計）
        tracing::debug!("Step 6: 棧板估算");
        let pallets = PalletCalculator::estimate(&report.totals, &self.config);

        tracing::info!("報表計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "資料列: {} 列，需要棧板: {}",
            report.rows.len(),
            pallets.pallets_needed
        );

        Ok(ReportResult {
            report,
            pallets,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        })
    }

    /// 獲取報表配置引用
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstock_core::ReportError;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn products() -> Vec<ProductRecord> {
        serde_json::from_value(json!([
            {
                "id": "P-1",
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
                "id": "P-2",
                "name": "Silla Roble",
                "sku": "CH-001",
                "stock": 50,
                "weight": 4.5,
                "attributes": [
                    { "name": "Product Line", "value": "Kitchen" }
                ]
            }
        ]))
        .unwrap()
    }

    fn document() -> SalesDocument {
        serde_json::from_value(json!({
            "docNumber": "SO25-0143",
            "products": [
                { "productId": "P-1", "units": 100 },
                { "productId": "P-2", "units": 10 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_calculate_full_pipeline() {
        let calculator = ReportCalculator::default();
        let result = calculator.calculate(&document(), &products()).unwrap();

        // 1 個分組：標題 + 2 成員 + 小計 + 總計 = 5 列
        assert_eq!(result.report.rows.len(), 5);
        assert_eq!(result.report.item_count(), 2);
        assert_eq!(result.report.totals.units, Decimal::from(110));

        // P-1：26 kg × 100 = 2600 kg；體積 1 m³ → 重量約束，2 板
        assert_eq!(result.pallets.pallets_by_weight.to_string(), "2.035");
        assert_eq!(result.pallets.pallets_needed, 3);
        assert!(result.calculation_time_ms.is_some());
    }

    #[test]
    fn test_calculate_malformed_line_items_is_fatal() {
        let document: SalesDocument = serde_json::from_value(json!({
            "docNumber": "SO25-0999",
            "products": { "unexpected": "object" }
        }))
        .unwrap();

        let err = ReportCalculator::default()
            .calculate(&document, &products())
            .unwrap_err();

        assert!(matches!(err, ReportError::MalformedLineItems { .. }));
    }

    #[test]
    fn test_calculate_empty_document() {
        let document: SalesDocument =
            serde_json::from_value(json!({ "docNumber": "SO25-0001", "products": [] })).unwrap();

        let result = ReportCalculator::default()
            .calculate(&document, &products())
            .unwrap();

        assert!(result.report.is_empty());
        assert_eq!(result.pallets.pallets_needed, 1);
    }
}
