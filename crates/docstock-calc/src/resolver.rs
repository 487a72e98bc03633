//! 行項目解析

use docstock_core::{CatalogIndex, OrderLine, ProductInfo, ReportConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 解析後的行項目（報表資料列的來源）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLine {
    /// 產品名稱
    pub product: String,

    /// SKU（缺漏時為空字串）
    pub sku: String,

    /// 訂購數量
    pub units: Decimal,

    /// 單位重量（公斤；未知時為 None）
    pub unit_weight: Option<Decimal>,

    /// 總重量（公斤，3 位小數；無法推導時為 None）
    pub total_weight: Option<Decimal>,

    /// 體積（立方公尺，5 位小數；尺寸不全時為 None）
    pub volume: Option<Decimal>,

    /// 實際庫存（未知時為 None，不可與零庫存混淆）
    pub stock: Option<Decimal>,

    /// 庫存不足標記
    pub insufficient: bool,

    /// 缺貨數量（Falta）
    pub shortage: Decimal,

    /// 剩餘數量（Extra）
    pub surplus: Decimal,

    /// 產品線分組標籤
    pub product_line: String,
}

/// 屬性掃描結果（尺寸與產品線）
#[derive(Debug, Default)]
struct AttributeScan {
    width: Option<Decimal>,
    height: Option<Decimal>,
    depth: Option<Decimal>,
    product_line: Option<String>,
}

/// 行項目解析器
pub struct LineResolver;

impl LineResolver {
    /// 解析單一行項目
    ///
    /// 識別碼命中型錄時取型錄欄位，缺漏或未命中時退回行內欄位
    pub fn resolve(line: &OrderLine, catalog: &CatalogIndex, config: &ReportConfig) -> ResolvedLine {
        let units = line.ordered_units();

        match line.identifier().and_then(|id| catalog.get(id)) {
            Some(info) => Self::resolve_from_catalog(info, units, config),
            None => Self::resolve_inline(line, units, config),
        }
    }

    /// 型錄命中：名稱、SKU、庫存與重量取自型錄
    fn resolve_from_catalog(info: &ProductInfo, units: Decimal, config: &ReportConfig) -> ResolvedLine {
        let scan = Self::scan_attributes(info, config);
        let (insufficient, shortage, surplus) = Self::shortage_fields(&info.sku, info.stock, units);

        ResolvedLine {
            product: info.name.clone(),
            sku: info.sku.clone(),
            units,
            unit_weight: info.unit_weight,
            total_weight: Self::derive_total_weight(info.unit_weight, units),
            volume: Self::derive_volume(&scan),
            stock: info.stock,
            insufficient,
            shortage,
            surplus,
            product_line: scan
                .product_line
                .unwrap_or_else(|| config.default_product_line.clone()),
        }
    }

    /// 型錄未命中：使用行內欄位
    ///
    /// 庫存視為未知（None），不得誤判為「有庫存」；無尺寸、無產品線
    fn resolve_inline(line: &OrderLine, units: Decimal, config: &ReportConfig) -> ResolvedLine {
        let sku = line.sku.clone().unwrap_or_default();
        let unit_weight = line.weight.unwrap_or(Decimal::ZERO);
        let (insufficient, shortage, surplus) = Self::shortage_fields(&sku, None, units);

        ResolvedLine {
            product: line.name.clone().unwrap_or_default(),
            sku,
            units,
            unit_weight: Some(unit_weight),
            total_weight: Self::derive_total_weight(Some(unit_weight), units),
            volume: None,
            stock: None,
            insufficient,
            shortage,
            surplus,
            product_line: config.default_product_line.clone(),
        }
    }

    /// 單次屬性掃描：抓取尺寸與產品線
    ///
    /// 無法解析為數值的屬性值靜默略過；同名屬性以後者為準
    fn scan_attributes(info: &ProductInfo, config: &ReportConfig) -> AttributeScan {
        let mut scan = AttributeScan::default();

        for attr in &info.attributes {
            if config.is_product_line_attribute(&attr.name) {
                if let Some(label) = attr.text_value() {
                    scan.product_line = Some(label);
                }
            }

            let Some(value) = attr.numeric_value() else {
                continue;
            };

            if attr.name == config.width_attribute {
                scan.width = Some(value);
            } else if attr.name == config.height_attribute {
                scan.height = Some(value);
            } else if attr.name == config.depth_attribute {
                scan.depth = Some(value);
            }
        }

        scan
    }

    /// 體積推導：三個尺寸齊備才有值
    ///
    /// volume = 寬 × 高 × 深 / 1,000,000（cm³ → m³），取 5 位小數
    fn derive_volume(scan: &AttributeScan) -> Option<Decimal> {
        match (scan.width, scan.height, scan.depth) {
            (Some(w), Some(h), Some(d)) => {
                Some((w * h * d / Decimal::from(1_000_000)).round_dp(5))
            }
            _ => None,
        }
    }

    /// 總重量推導：重量與數量皆為非零才有值
    ///
    /// 其餘情況回傳 None（未知），用以區分「沒有重量資料」與「重量為零」
    fn derive_total_weight(unit_weight: Option<Decimal>, units: Decimal) -> Option<Decimal> {
        match unit_weight {
            Some(w) if !w.is_zero() && !units.is_zero() => Some((w * units).round_dp(3)),
            _ => None,
        }
    }

    /// 缺貨計算
    ///
    /// SKU 為空或庫存未知時全部中性（無法判讀的產品不得回報「庫存不足」）
    fn shortage_fields(sku: &str, stock: Option<Decimal>, units: Decimal) -> (bool, Decimal, Decimal) {
        let Some(stock) = stock else {
            return (false, Decimal::ZERO, Decimal::ZERO);
        };

        if sku.is_empty() {
            return (false, Decimal::ZERO, Decimal::ZERO);
        }

        if stock >= units {
            (false, Decimal::ZERO, stock - units)
        } else {
            (true, units - stock, Decimal::ZERO)
        }
    }
}
