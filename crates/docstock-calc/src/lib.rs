//! # Docstock Calculation Engine
//!
//! 連接與彙總引擎：行項目解析、分組小計、報表組裝與棧板估算

pub mod calculator;
pub mod grouping;
pub mod pallet;
pub mod report;
pub mod resolver;

// Re-export 主要類型
pub use calculator::ReportCalculator;
pub use grouping::{GroupSubtotal, GroupingCalculator, ReportGroup};
pub use pallet::{PalletCalculator, PalletEstimate};
pub use report::{Cell, Report, ReportAssembler, ReportRow, ReportTotals, RowKind, REPORT_COLUMNS};
pub use resolver::{LineResolver, ResolvedLine};

/// 報表計算結果
#[derive(Debug, Clone)]
pub struct ReportResult {
    /// 報表
    pub report: Report,

    /// 棧板估算
    pub pallets: PalletEstimate,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}
