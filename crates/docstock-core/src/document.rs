//! 銷售單據模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ReportError, Result};

/// 銷售單據（原始記錄）
///
/// 來自遠端開票服務的單據快照；行項目容器保留原始形狀，
/// 由 [`SalesDocument::items`] 驗證後再解析
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesDocument {
    /// 單據編號（唯一）
    #[serde(rename = "docNumber")]
    pub doc_number: String,

    /// 單據日期（Unix 秒）
    #[serde(default)]
    pub date: Option<i64>,

    /// 行項目容器（原始值，必須是列表才可解析）
    #[serde(default, rename = "products")]
    pub line_items: Value,
}

impl SalesDocument {
    /// 創建新的單據
    pub fn new(doc_number: impl Into<String>) -> Self {
        Self {
            doc_number: doc_number.into(),
            date: None,
            line_items: Value::Null,
        }
    }

    /// 建構器模式：設置行項目容器
    pub fn with_line_items(mut self, line_items: Value) -> Self {
        self.line_items = line_items;
        self
    }

    /// 建構器模式：設置單據日期
    pub fn with_date(mut self, timestamp: i64) -> Self {
        self.date = Some(timestamp);
        self
    }

    /// 單據編號比對（不分大小寫）
    pub fn matches_number(&self, needle: &str) -> bool {
        self.doc_number.to_lowercase() == needle.to_lowercase()
    }

    /// 單據日期
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.date.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    /// 取出行項目
    ///
    /// 容器缺漏或為 null 時視為空單據；存在但不是列表時為致命錯誤，
    /// 由呼叫端處理（不可靜默略過）
    pub fn items(&self) -> Result<Vec<OrderLine>> {
        match &self.line_items {
            Value::Null => Ok(Vec::new()),
            Value::Array(raw) => raw
                .iter()
                .map(|item| {
                    serde_json::from_value(item.clone()).map_err(|e| {
                        ReportError::LineItemDecode(format!("單據 {}: {}", self.doc_number, e))
                    })
                })
                .collect(),
            other => Err(ReportError::MalformedLineItems {
                doc_number: self.doc_number.clone(),
                found: json_type_name(other).to_string(),
            }),
        }
    }
}

/// 訂單行項目
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderLine {
    /// 產品識別碼（優先）
    #[serde(default, rename = "productId")]
    pub product_id: Option<String>,

    /// 一般識別碼（退回）
    #[serde(default)]
    pub id: Option<String>,

    /// 訂購數量（缺漏時視為 0）
    #[serde(default)]
    pub units: Option<Decimal>,

    /// 行內產品名稱（型錄未命中時使用）
    #[serde(default)]
    pub name: Option<String>,

    /// 行內 SKU
    #[serde(default)]
    pub sku: Option<String>,

    /// 行內單位重量（公斤）
    #[serde(default)]
    pub weight: Option<Decimal>,
}

impl OrderLine {
    /// 創建新的行項目
    pub fn new(units: Decimal) -> Self {
        Self {
            units: Some(units),
            ..Self::default()
        }
    }

    /// 建構器模式：設置產品識別碼
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// 建構器模式：設置一般識別碼
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// 建構器模式：設置行內名稱
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// 建構器模式：設置行內 SKU
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// 建構器模式：設置行內重量
    pub fn with_weight(mut self, weight: Decimal) -> Self {
        self.weight = Some(weight);
        self
    }

    /// 識別碼解析：產品識別碼優先，缺漏時退回一般識別碼
    pub fn identifier(&self) -> Option<&str> {
        self.product_id.as_deref().or(self.id.as_deref())
    }

    /// 訂購數量（缺漏時為 0）
    pub fn ordered_units(&self) -> Decimal {
        self.units.unwrap_or(Decimal::ZERO)
    }
}

/// JSON 值的型別名稱（錯誤訊息用）
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
