//! 分組與小計

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::resolver::ResolvedLine;

/// 分組小計
///
/// Null-safe 語意：未知值不計入加總，但小計欄一律是具體數值
/// （全空欄位加總為 0，不得為空白）
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSubtotal {
    /// 數量小計（1 位小數）
    pub units: Decimal,

    /// 總重量小計（公斤，2 位小數）
    pub total_weight: Decimal,

    /// 體積小計（立方公尺，5 位小數）
    pub volume: Decimal,

    /// 缺貨小計（整數）
    pub shortage: Decimal,
}

/// 報表分組：同一產品線的解析行
#[derive(Debug, Clone)]
pub struct ReportGroup {
    /// 產品線標籤
    pub product_line: String,

    /// 成員資料列（SKU 遞增，空 SKU 排最前）
    pub lines: Vec<ResolvedLine>,

    /// 小計
    pub subtotal: GroupSubtotal,
}

/// 分組計算器
pub struct GroupingCalculator;

impl GroupingCalculator {
    /// 依產品線分組並計算小計
    ///
    /// 分組順序為首次出現順序（插入順序，非字母排序）；
    /// 零筆輸入產生空分組列表，由組裝器保留完整欄位結構
    pub fn group(lines: Vec<ResolvedLine>) -> Vec<ReportGroup> {
        let mut order: Vec<String> = Vec::new();
        let mut buckets: HashMap<String, Vec<ResolvedLine>> = HashMap::new();

        for line in lines {
            if !buckets.contains_key(&line.product_line) {
                order.push(line.product_line.clone());
            }
            buckets
                .entry(line.product_line.clone())
                .or_default()
                .push(line);
        }

        order
            .into_iter()
            .map(|label| {
                let mut members = buckets.remove(&label).unwrap_or_default();
                members.sort_by(|a, b| a.sku.cmp(&b.sku));
                let subtotal = Self::subtotal(&members);

                ReportGroup {
                    product_line: label,
                    lines: members,
                    subtotal,
                }
            })
            .collect()
    }

    /// 計算單一分組的小計
    fn subtotal(lines: &[ResolvedLine]) -> GroupSubtotal {
        let units: Decimal = lines.iter().map(|l| l.units).sum();
        let total_weight: Decimal = lines.iter().filter_map(|l| l.total_weight).sum();
        let volume: Decimal = lines.iter().filter_map(|l| l.volume).sum();
        let shortage: Decimal = lines.iter().map(|l| l.shortage).sum();

        GroupSubtotal {
            units: units.round_dp(1),
            total_weight: total_weight.round_dp(2),
            volume: volume.round_dp(5),
            shortage: shortage.round_dp(0),
        }
    }
}
