//! Docstock CLI - 單據庫存與棧板報表工具
//!
//! # Usage
//!
//! ```bash
//! # 查詢單據並輸出報表（Presupuesto、Proforma 或 Pedido）
//! docstock SO25-0143
//!
//! # 同時匯出 CSV
//! docstock SO25-0143 --export-dir ./out
//! ```
//!
//! API 金鑰由 `--api-key` 或 `HOLDED_API_KEY` 環境變數提供
//! （支援 `.env` 檔）。

use anyhow::Context;
use clap::Parser;
use docstock_calc::ReportCalculator;
use docstock_client::{ClientConfig, HoldedClient};
use docstock_core::ReportConfig;
use tracing::info;

mod export;
mod render;

#[derive(Parser)]
#[command(name = "docstock")]
#[command(author, version, about = "單據庫存與出貨量報表工具")]
struct Cli {
    /// 單據編號
    doc_number: String,

    /// CSV 匯出目錄（省略時不匯出）
    #[arg(long)]
    export_dir: Option<std::path::PathBuf>,

    /// API 金鑰（省略時讀取 HOLDED_API_KEY 環境變數）
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // init tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let api_key = match cli.api_key {
        Some(key) => key,
        None => std::env::var("HOLDED_API_KEY")
            .context("未提供 API 金鑰（--api-key 或 HOLDED_API_KEY）")?,
    };

    let client = HoldedClient::new(ClientConfig::new(api_key))?;

    info!("搜尋單據: {}", cli.doc_number);
    let (kind, document) = client.find_document(&cli.doc_number).await?;
    match document.issued_at() {
        Some(issued) => info!("{} '{}' 已載入（{}）", kind, document.doc_number, issued.date_naive()),
        None => info!("{} '{}' 已載入", kind, document.doc_number),
    }

    let products = client.fetch_products().await?;
    info!("產品型錄: {} 筆", products.len());

    let calculator = ReportCalculator::new(ReportConfig::default());
    let result = calculator.calculate(&document, &products)?;

    if result.report.is_empty() {
        println!("單據 {} 沒有可解析的行項目", document.doc_number);
        return Ok(());
    }

    render::print_report(&result.report);
    render::print_pallet_summary(&result.pallets);

    if let Some(dir) = cli.export_dir {
        let (stock_path, pallet_path) = export::write_csv(&dir, &document.doc_number, &result)?;
        info!(
            "已匯出: {} / {}",
            stock_path.display(),
            pallet_path.display()
        );
    }

    Ok(())
}
