//! 寬鬆數值解析

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// 將寬鬆的 JSON 值盡力轉為 Decimal
///
/// 接受 JSON 數字與數字字串，其餘形狀一律回傳 `None`（不視為錯誤）
pub fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

/// 將寬鬆的 JSON 值轉為文字標籤
///
/// 字串原樣保留，數字轉為十進位字串；空字串與其餘形狀視為缺漏
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 解析十進位字串，兼容科學記號
fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
