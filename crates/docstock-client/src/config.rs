//! 擷取層配置

/// 擷取層配置
///
/// 端點、金鑰與分頁大小都屬於擷取層；核心只收到抓取完成的完整序列
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API 金鑰（`key` 認證標頭）
    pub api_key: String,

    /// API 基底位址
    pub base_url: String,

    /// 分頁大小
    pub page_size: usize,
}

impl ClientConfig {
    /// 預設基底位址
    pub const DEFAULT_BASE_URL: &'static str = "https://api.holded.com/api/invoicing/v1";

    /// 預設分頁大小
    pub const DEFAULT_PAGE_SIZE: usize = 100;

    /// 創建新的配置
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// 建構器模式：設置基底位址
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// 建構器模式：設置分頁大小
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}
