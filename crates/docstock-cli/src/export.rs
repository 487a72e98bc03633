//! CSV 匯出

use std::path::{Path, PathBuf};

use anyhow::Context;
use docstock_calc::{Cell, ReportResult, REPORT_COLUMNS};

/// 將報表與棧板摘要寫為 CSV
///
/// 檔名沿用單據編號：`{docNumber}_stock.csv` 與 `{docNumber}_pallets.csv`
pub fn write_csv(
    dir: &Path,
    doc_number: &str,
    result: &ReportResult,
) -> anyhow::Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("無法建立匯出目錄 {}", dir.display()))?;

    let stock_path = dir.join(format!("{doc_number}_stock.csv"));
    let mut writer = csv::Writer::from_path(&stock_path)?;
    writer.write_record(REPORT_COLUMNS)?;
    for row in &result.report.rows {
        let record: Vec<String> = row.cells().iter().map(cell_field).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;

    let pallet_path = dir.join(format!("{doc_number}_pallets.csv"));
    let mut writer = csv::Writer::from_path(&pallet_path)?;
    writer.write_record([
        "Total Units",
        "Total Weight (kg)",
        "Total Volume (m³)",
        "Pallets by Weight",
        "Pallets by Volume",
        "Pallets Needed",
    ])?;
    let pallets = &result.pallets;
    writer.write_record([
        pallets.total_units.round_dp(0).to_string(),
        format!("{:.2}", pallets.total_weight),
        format!("{:.3}", pallets.total_volume),
        pallets.pallets_by_weight.to_string(),
        pallets.pallets_by_volume.to_string(),
        pallets.pallets_needed.to_string(),
    ])?;
    writer.flush()?;

    Ok((stock_path, pallet_path))
}

/// CSV 寫真正的空白欄（終端表格才以「—」呈現）
fn cell_field(cell: &Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(text) => text.clone(),
        Cell::Number(value) => value.to_string(),
    }
}
