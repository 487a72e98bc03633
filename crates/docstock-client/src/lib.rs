//! # Docstock Client
//!
//! 遠端開票服務（Holded invoicing API）擷取層
//!
//! 分頁抓取單據與產品，以完整序列交給核心；
//! 分頁與認證是這一層的責任，核心不處理

pub mod client;
pub mod config;

// Re-export 主要類型
pub use client::{DocumentKind, HoldedClient};
pub use config::ClientConfig;

/// 擷取層錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP 傳輸錯誤: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API 回應錯誤 ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("回應解析錯誤: {0}")]
    Decode(String),

    #[error("找不到單據: {0}")]
    DocumentNotFound(String),

    #[error("缺少 API 金鑰")]
    MissingApiKey,

    #[error("API 金鑰含有非法字元")]
    InvalidApiKey,
}

pub type Result<T> = std::result::Result<T, ClientError>;
