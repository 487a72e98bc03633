//! Holded API 客戶端

use docstock_core::{ProductRecord, SalesDocument};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;

use crate::{ClientConfig, ClientError, Result};

/// 單據種類（對應遠端端點）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// 報價單（Presupuesto）
    Estimate,
    /// 形式發票（Proforma）
    Proforma,
    /// 銷售訂單（Pedido）
    SalesOrder,
}

impl DocumentKind {
    /// 搜尋單據時的預設順序
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Estimate,
        DocumentKind::Proforma,
        DocumentKind::SalesOrder,
    ];

    /// 端點路徑
    pub fn path(self) -> &'static str {
        match self {
            DocumentKind::Estimate => "documents/estimate",
            DocumentKind::Proforma => "documents/proform",
            DocumentKind::SalesOrder => "documents/salesorder",
        }
    }

    /// 顯示名稱
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Estimate => "Presupuesto",
            DocumentKind::Proforma => "Proforma",
            DocumentKind::SalesOrder => "Pedido",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Holded API 客戶端
///
/// 所有請求固定帶 `key` 認證標頭與 JSON accept 標頭
#[derive(Debug)]
pub struct HoldedClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HoldedClient {
    /// 創建新的客戶端
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut key_value =
            HeaderValue::from_str(&config.api_key).map_err(|_| ClientError::InvalidApiKey)?;
        key_value.set_sensitive(true);
        headers.insert("key", key_value);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { http, config })
    }

    /// 抓取某一種類的全部單據
    pub async fn fetch_documents(&self, kind: DocumentKind) -> Result<Vec<SalesDocument>> {
        self.fetch_all(kind.path()).await
    }

    /// 抓取全部產品
    pub async fn fetch_products(&self) -> Result<Vec<ProductRecord>> {
        self.fetch_all("products").await
    }

    /// 依單據編號搜尋（不分大小寫），依序嘗試所有單據種類
    pub async fn find_document(&self, doc_number: &str) -> Result<(DocumentKind, SalesDocument)> {
        for kind in DocumentKind::ALL {
            tracing::debug!("搜尋 {} 單據: {}", kind, doc_number);
            let documents = self.fetch_documents(kind).await?;

            if let Some(document) = documents
                .into_iter()
                .find(|d| d.matches_number(doc_number))
            {
                return Ok((kind, document));
            }
        }

        Err(ClientError::DocumentNotFound(doc_number.to_string()))
    }

    /// 分頁抓取並反序列化
    ///
    /// 逐頁抓到空頁或短頁為止；一次執行取得的序列即為完整快照
    async fn fetch_all<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.config.base_url, path);
        let mut records = Vec::new();
        let mut page = 1usize;

        loop {
            let response = self
                .http
                .get(&url)
                .query(&[
                    ("page", page.to_string()),
                    ("limit", self.config.page_size.to_string()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            let payload: Value = response.json().await?;
            let chunk = extract_chunk(payload);
            if chunk.is_empty() {
                break;
            }

            let chunk_len = chunk.len();
            for item in chunk {
                let record = serde_json::from_value(item)
                    .map_err(|e| ClientError::Decode(format!("{path}: {e}")))?;
                records.push(record);
            }

            if chunk_len < self.config.page_size {
                break;
            }
            page += 1;
        }

        tracing::debug!("抓取 {} 完成: {} 筆（{} 頁）", path, records.len(), page);
        Ok(records)
    }
}

/// 取出分頁回應的資料段
///
/// 接受裸陣列或 `{"data": [...]}` 信封；其餘形狀視為空頁
fn extract_chunk(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
