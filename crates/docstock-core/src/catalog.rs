//! 型錄索引

use std::collections::HashMap;

use crate::product::{ProductInfo, ProductRecord};

/// 型錄索引：產品識別碼 → 正規化產品資訊
///
/// 每次報表執行建立一次，建立後不再變動
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: HashMap<String, ProductInfo>,
}

impl CatalogIndex {
    /// 由原始產品記錄建立索引
    ///
    /// 無法解析識別碼的記錄直接略過（之後的行項目解析視為型錄未命中）；
    /// 空輸入產生空索引，不是錯誤
    pub fn build(records: &[ProductRecord]) -> Self {
        let mut entries = HashMap::with_capacity(records.len());

        for record in records {
            if let Some(id) = record.identifier() {
                entries.insert(id.to_string(), record.normalize());
            }
        }

        Self { entries }
    }

    /// 查詢產品
    pub fn get(&self, product_id: &str) -> Option<&ProductInfo> {
        self.entries.get(product_id)
    }

    /// 索引項目數
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
