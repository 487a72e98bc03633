//! # Docstock Core
//!
//! 核心資料模型與類型定義

pub mod catalog;
pub mod config;
pub mod document;
pub mod numeric;
pub mod product;

// Re-export 主要類型
pub use catalog::CatalogIndex;
pub use config::ReportConfig;
pub use document::{OrderLine, SalesDocument};
pub use product::{Attribute, ProductInfo, ProductRecord};

/// 報表錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("單據 {doc_number} 的行項目必須是列表，實際為 {found}")]
    MalformedLineItems { doc_number: String, found: String },

    #[error("行項目解析錯誤: {0}")]
    LineItemDecode(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
