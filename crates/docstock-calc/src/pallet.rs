//! 棧板估算

use docstock_core::ReportConfig;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::report::ReportTotals;

/// 棧板估算結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalletEstimate {
    /// 總數量
    pub total_units: Decimal,

    /// 總重量（公斤）
    pub total_weight: Decimal,

    /// 總體積（立方公尺）
    pub total_volume: Decimal,

    /// 依重量換算的棧板數（3 位小數）
    pub pallets_by_weight: Decimal,

    /// 依體積換算的棧板數（3 位小數）
    pub pallets_by_volume: Decimal,

    /// 需要的棧板數（兩項約束取大者，無條件進位，至少 1）
    pub pallets_needed: u32,
}

/// 棧板估算器
pub struct PalletCalculator;

impl PalletCalculator {
    /// 由報表總計估算棧板需求
    ///
    /// 重量與體積是兩個獨立的裝載約束，以較緊的一項決定棧板數
    pub fn estimate(totals: &ReportTotals, config: &ReportConfig) -> PalletEstimate {
        let pallets_by_weight = Self::ratio(totals.total_weight, config.pallet_weight_capacity);
        let pallets_by_volume = Self::ratio(totals.volume, config.pallet_volume_capacity);

        let binding = pallets_by_weight.max(pallets_by_volume);
        let pallets_needed = binding.ceil().max(Decimal::ONE).to_u32().unwrap_or(1);

        PalletEstimate {
            total_units: totals.units,
            total_weight: totals.total_weight,
            total_volume: totals.volume,
            pallets_by_weight,
            pallets_by_volume,
            pallets_needed,
        }
    }

    /// 容量比值（3 位小數；零輸入直接回傳 0，不是錯誤）
    fn ratio(quantity: Decimal, capacity: Decimal) -> Decimal {
        if quantity.is_zero() || capacity.is_zero() {
            return Decimal::ZERO;
        }
        (quantity / capacity).round_dp(3)
    }
}
