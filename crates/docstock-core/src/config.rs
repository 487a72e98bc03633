//! 報表參數配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 報表參數配置
///
/// 涵蓋屬性欄位名稱、預設標籤與棧板容量門檻；
/// 預設值對應遠端型錄目前使用的欄位命名
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// 寬度屬性名稱（公分）
    pub width_attribute: String,

    /// 高度屬性名稱（公分）
    pub height_attribute: String,

    /// 深度屬性名稱（公分）
    pub depth_attribute: String,

    /// 產品線屬性名稱（任一命中即採用）
    pub product_line_attributes: Vec<String>,

    /// 無產品線時的預設分組標籤
    pub default_product_line: String,

    /// 庫存不足的標記文字
    pub insufficient_label: String,

    /// 單一棧板的重量容量（公斤）
    pub pallet_weight_capacity: Decimal,

    /// 單一棧板的體積容量（立方公尺）
    pub pallet_volume_capacity: Decimal,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            width_attribute: "Ancho [cm]".to_string(),
            height_attribute: "Alto [cm]".to_string(),
            depth_attribute: "Fondo [cm]".to_string(),
            product_line_attributes: vec![
                "Product Line".to_string(),
                "3. Product Line".to_string(),
            ],
            default_product_line: "Sin línea de productos".to_string(),
            insufficient_label: "STOCK INSUFICIENTE".to_string(),
            pallet_weight_capacity: Decimal::from(1300),
            pallet_volume_capacity: Decimal::new(1728, 3),
        }
    }
}

impl ReportConfig {
    /// 創建新的報表配置（預設值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置棧板重量容量
    pub fn with_pallet_weight_capacity(mut self, capacity: Decimal) -> Self {
        self.pallet_weight_capacity = capacity;
        self
    }

    /// 建構器模式：設置棧板體積容量
    pub fn with_pallet_volume_capacity(mut self, capacity: Decimal) -> Self {
        self.pallet_volume_capacity = capacity;
        self
    }

    /// 建構器模式：設置預設產品線標籤
    pub fn with_default_product_line(mut self, label: impl Into<String>) -> Self {
        self.default_product_line = label.into();
        self
    }

    /// 檢查屬性名稱是否為產品線欄位
    pub fn is_product_line_attribute(&self, name: &str) -> bool {
        self.product_line_attributes.iter().any(|n| n == name)
    }
}
