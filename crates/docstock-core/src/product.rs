//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::numeric;

/// 產品屬性（名稱/值對，結構不固定）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    /// 屬性名稱
    #[serde(default)]
    pub name: String,

    /// 原始屬性值（可能是數字、字串或缺漏）
    #[serde(default)]
    pub value: Value,
}

impl Attribute {
    /// 創建新的屬性
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// 盡力將屬性值解析為數值，失敗時回傳 None
    pub fn numeric_value(&self) -> Option<Decimal> {
        numeric::coerce_decimal(&self.value)
    }

    /// 將屬性值轉為文字標籤
    pub fn text_value(&self) -> Option<String> {
        numeric::coerce_text(&self.value)
    }
}

/// 遠端型錄回傳的原始產品記錄
///
/// 每次報表執行抓取一次，取得後不再變動
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// 主要識別碼
    #[serde(default)]
    pub id: Option<String>,

    /// 次要識別碼
    #[serde(default, rename = "productId")]
    pub product_id: Option<String>,

    /// 產品名稱
    #[serde(default)]
    pub name: Option<String>,

    /// SKU
    #[serde(default)]
    pub sku: Option<String>,

    /// 庫存數量（原始值，可能缺漏或非數值）
    #[serde(default)]
    pub stock: Value,

    /// 單位重量（公斤，原始值）
    #[serde(default)]
    pub weight: Value,

    /// 屬性列表（依來源順序）
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl ProductRecord {
    /// 識別碼解析：主要識別碼優先，空值時退回次要識別碼
    pub fn identifier(&self) -> Option<&str> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| self.product_id.as_deref().filter(|id| !id.is_empty()))
    }

    /// 正規化為型錄項目
    ///
    /// 缺漏的名稱與 SKU 以空字串補齊；非數值的庫存與重量視為未知
    pub fn normalize(&self) -> ProductInfo {
        ProductInfo {
            name: self.name.clone().unwrap_or_default(),
            sku: self.sku.clone().unwrap_or_default(),
            stock: numeric::coerce_decimal(&self.stock),
            unit_weight: numeric::coerce_decimal(&self.weight),
            attributes: self.attributes.clone(),
        }
    }
}

/// 正規化後的產品資訊（型錄索引值）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInfo {
    /// 產品名稱（缺漏時為空字串）
    pub name: String,

    /// SKU（缺漏時為空字串）
    pub sku: String,

    /// 實際庫存（缺漏或非數值時為 None，不可與零庫存混淆）
    pub stock: Option<Decimal>,

    /// 單位重量（公斤；未知時為 None）
    pub unit_weight: Option<Decimal>,

    /// 屬性列表
    pub attributes: Vec<Attribute>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier_fallback_chain() {
        let record: ProductRecord =
            serde_json::from_value(json!({ "id": "P-1", "productId": "ALT-1" })).unwrap();
        assert_eq!(record.identifier(), Some("P-1"));

        let record: ProductRecord =
            serde_json::from_value(json!({ "productId": "ALT-1" })).unwrap();
        assert_eq!(record.identifier(), Some("ALT-1"));

        // 空字串視同缺漏
        let record: ProductRecord =
            serde_json::from_value(json!({ "id": "", "productId": "ALT-1" })).unwrap();
        assert_eq!(record.identifier(), Some("ALT-1"));

        let record: ProductRecord = serde_json::from_value(json!({ "name": "荷蘭椅" })).unwrap();
        assert_eq!(record.identifier(), None);
    }

    #[test]
    fn test_normalize_with_numeric_fields() {
        let record: ProductRecord = serde_json::from_value(json!({
            "id": "P-1",
            "name": "Silla Roble",
            "sku": "CH-001",
            "stock": 25,
            "weight": 4.5,
            "attributes": [
                { "name": "Ancho [cm]", "value": "40" },
                { "name": "Product Line", "value": "Kitchen" }
            ]
        }))
        .unwrap();

        let info = record.normalize();
        assert_eq!(info.name, "Silla Roble");
        assert_eq!(info.sku, "CH-001");
        assert_eq!(info.stock, Some(Decimal::from(25)));
        assert_eq!(info.unit_weight, Some(Decimal::new(45, 1)));
        assert_eq!(info.attributes.len(), 2);
        assert_eq!(info.attributes[0].numeric_value(), Some(Decimal::from(40)));
        assert_eq!(info.attributes[1].text_value(), Some("Kitchen".to_string()));
    }

    #[test]
    fn test_normalize_with_missing_and_junk_fields() {
        let record: ProductRecord = serde_json::from_value(json!({
            "id": "P-2",
            "stock": "agotado",
        }))
        .unwrap();

        let info = record.normalize();
        assert_eq!(info.name, "");
        assert_eq!(info.sku, "");
        // 非數值庫存是「未知」，不是零
        assert_eq!(info.stock, None);
        assert_eq!(info.unit_weight, None);
        assert!(info.attributes.is_empty());
    }
}
