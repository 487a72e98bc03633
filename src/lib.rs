//! # Docstock
//!
//! 銷售單據庫存與出貨量報表引擎
//!
//! 由遠端開票服務取得單據與產品型錄，將訂單行項目與產品屬性連接，
//! 產出依產品線分組的庫存與材積報表，並以重量/體積兩項裝載約束
//! 估算所需棧板數。

// Re-export 主要類型
pub use docstock_calc::{
    Cell, GroupSubtotal, GroupingCalculator, LineResolver, PalletCalculator, PalletEstimate,
    Report, ReportAssembler, ReportCalculator, ReportGroup, ReportResult, ReportRow, ReportTotals,
    ResolvedLine, RowKind, REPORT_COLUMNS,
};
pub use docstock_core::{
    Attribute, CatalogIndex, OrderLine, ProductInfo, ProductRecord, ReportConfig, ReportError,
    Result, SalesDocument,
};
