//! 報表組裝

use docstock_core::ReportConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::grouping::{GroupSubtotal, ReportGroup};
use crate::resolver::ResolvedLine;

/// 發佈欄位（順序固定，空報表也保留完整欄位結構）
pub const REPORT_COLUMNS: [&str; 14] = [
    "SKU",
    "Product",
    "Units",
    "Subtotal > Units",
    "Gross Weight (kg)",
    "Total Weight (kg)",
    "Subtotal > Total Weight (kg)",
    "Volume (m³)",
    "Subtotal > Volume (m³)",
    "Stock Real",
    "Insuficiente?",
    "Falta",
    "Subtotal > Falta",
    "Extra",
];

/// 資料列種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    /// 分組標題列
    GroupHeader,
    /// 成員資料列
    Item,
    /// 分組小計列
    Subtotal,
    /// 報表總計列
    Total,
}

/// 報表資料列（14 個發佈欄位的具名形式）
///
/// 小計列與總計列只在指定的小計欄帶值，其餘欄位留白
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// 資料列種類
    pub kind: RowKind,
    pub sku: String,
    pub product: String,
    pub units: Option<Decimal>,
    pub subtotal_units: Option<Decimal>,
    pub gross_weight: Option<Decimal>,
    pub total_weight: Option<Decimal>,
    pub subtotal_total_weight: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub subtotal_volume: Option<Decimal>,
    pub stock: Option<Decimal>,
    /// 庫存不足標記文字（未標記時為空字串）
    pub insufficient: String,
    pub shortage: Option<Decimal>,
    pub subtotal_shortage: Option<Decimal>,
    pub surplus: Option<Decimal>,
}

impl ReportRow {
    /// 全空資料列
    fn blank(kind: RowKind) -> Self {
        Self {
            kind,
            sku: String::new(),
            product: String::new(),
            units: None,
            subtotal_units: None,
            gross_weight: None,
            total_weight: None,
            subtotal_total_weight: None,
            volume: None,
            subtotal_volume: None,
            stock: None,
            insufficient: String::new(),
            shortage: None,
            subtotal_shortage: None,
            surplus: None,
        }
    }

    /// 分組標題列（僅 Product 欄帶標籤）
    pub fn group_header(label: &str) -> Self {
        let mut row = Self::blank(RowKind::GroupHeader);
        row.product = format!("——— {label} ———");
        row
    }

    /// 成員資料列
    pub fn item(line: &ResolvedLine, config: &ReportConfig) -> Self {
        Self {
            kind: RowKind::Item,
            sku: line.sku.clone(),
            product: line.product.clone(),
            units: Some(line.units),
            subtotal_units: None,
            gross_weight: line.unit_weight,
            total_weight: line.total_weight,
            subtotal_total_weight: None,
            volume: line.volume,
            subtotal_volume: None,
            stock: line.stock,
            insufficient: if line.insufficient {
                config.insufficient_label.clone()
            } else {
                String::new()
            },
            shortage: Some(line.shortage),
            subtotal_shortage: None,
            surplus: Some(line.surplus),
        }
    }

    /// 分組小計列
    pub fn subtotal(label: &str, subtotal: &GroupSubtotal) -> Self {
        let mut row = Self::blank(RowKind::Subtotal);
        row.product = format!("                         Subtotal {label}");
        row.subtotal_units = Some(subtotal.units);
        row.subtotal_total_weight = Some(subtotal.total_weight);
        row.subtotal_volume = Some(subtotal.volume);
        row.subtotal_shortage = Some(subtotal.shortage);
        row
    }

    /// 報表總計列
    pub fn total(totals: &ReportTotals) -> Self {
        let mut row = Self::blank(RowKind::Total);
        row.product = "——— TOTAL ———".to_string();
        row.subtotal_units = Some(totals.units);
        row.subtotal_total_weight = Some(totals.total_weight);
        row.subtotal_volume = Some(totals.volume);
        row.subtotal_shortage = Some(totals.shortage);
        row
    }

    /// 依發佈欄位順序投影為儲存格
    pub fn cells(&self) -> [Cell; 14] {
        [
            Cell::text(&self.sku),
            Cell::text(&self.product),
            Cell::number(self.units),
            Cell::number(self.subtotal_units),
            Cell::number(self.gross_weight),
            Cell::number(self.total_weight),
            Cell::number(self.subtotal_total_weight),
            Cell::number(self.volume),
            Cell::number(self.subtotal_volume),
            Cell::number(self.stock),
            Cell::text(&self.insufficient),
            Cell::number(self.shortage),
            Cell::number(self.subtotal_shortage),
            Cell::number(self.surplus),
        ]
    }
}

/// 儲存格值（匯出與呈現用的投影）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// 空白
    Empty,
    /// 文字
    Text(String),
    /// 數值
    Number(Decimal),
}

impl Cell {
    fn text(value: &str) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }

    fn number(value: Option<Decimal>) -> Self {
        match value {
            Some(n) => Cell::Number(n),
            None => Cell::Empty,
        }
    }
}

/// 報表總計（所有分組小計的加總；空報表時為零值）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// 數量總計
    pub units: Decimal,

    /// 總重量（公斤）
    pub total_weight: Decimal,

    /// 總體積（立方公尺）
    pub volume: Decimal,

    /// 缺貨總計
    pub shortage: Decimal,
}

/// 報表：固定欄位結構的資料列序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// 依序排列的資料列（每組：標題、成員、小計；最後一列為總計）
    pub rows: Vec<ReportRow>,

    /// 報表總計
    pub totals: ReportTotals,
}

impl Report {
    /// 空報表（保留完整欄位結構，無資料列）
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            totals: ReportTotals::default(),
        }
    }

    /// 發佈欄位
    pub fn columns() -> &'static [&'static str; 14] {
        &REPORT_COLUMNS
    }

    /// 是否為空報表
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 成員資料列數
    pub fn item_count(&self) -> usize {
        self.rows.iter().filter(|r| r.kind == RowKind::Item).count()
    }
}

/// 報表組裝器
pub struct ReportAssembler;

impl ReportAssembler {
    /// 將分組結果組裝為報表
    ///
    /// 每組產生標題列、成員列與小計列，最後附一列總計；
    /// 無任何分組時回傳空報表（不附總計列），呈現端仍可取得完整欄位
    pub fn assemble(groups: &[ReportGroup], config: &ReportConfig) -> Report {
        if groups.is_empty() {
            return Report::empty();
        }

        let mut rows = Vec::new();
        let mut totals = ReportTotals::default();

        for group in groups {
            rows.push(ReportRow::group_header(&group.product_line));
            for line in &group.lines {
                rows.push(ReportRow::item(line, config));
            }
            rows.push(ReportRow::subtotal(&group.product_line, &group.subtotal));

            totals.units += group.subtotal.units;
            totals.total_weight += group.subtotal.total_weight;
            totals.volume += group.subtotal.volume;
            totals.shortage += group.subtotal.shortage;
        }

        rows.push(ReportRow::total(&totals));

        Report { rows, totals }
    }
}
