//! 報表文字輸出

use docstock_calc::{Cell, PalletEstimate, Report, REPORT_COLUMNS};
use rust_decimal::Decimal;

/// 各欄位的顯示小數位數（文字欄為 None）
const COLUMN_DECIMALS: [Option<u32>; 14] = [
    None,    // SKU
    None,    // Product
    Some(0), // Units
    Some(0), // Subtotal > Units
    Some(3), // Gross Weight (kg)
    Some(2), // Total Weight (kg)
    Some(2), // Subtotal > Total Weight (kg)
    Some(3), // Volume (m³)
    Some(3), // Subtotal > Volume (m³)
    Some(0), // Stock Real
    None,    // Insuficiente?
    Some(0), // Falta
    Some(0), // Subtotal > Falta
    Some(0), // Extra
];

/// 輸出報表表格（欄寬對齊，數值靠右）
pub fn print_report(report: &Report) {
    let rendered: Vec<[String; 14]> = report
        .rows
        .iter()
        .map(|row| {
            let cells = row.cells();
            std::array::from_fn(|i| format_cell(&cells[i], COLUMN_DECIMALS[i]))
        })
        .collect();

    let widths: [usize; 14] = std::array::from_fn(|i| {
        rendered
            .iter()
            .map(|row| row[i].chars().count())
            .chain(std::iter::once(REPORT_COLUMNS[i].chars().count()))
            .max()
            .unwrap_or(0)
    });

    print_line(&REPORT_COLUMNS.map(str::to_string), &widths, &[None; 14]);
    for row in &rendered {
        print_line(row, &widths, &COLUMN_DECIMALS);
    }
}

/// 輸出棧板估算摘要
pub fn print_pallet_summary(estimate: &PalletEstimate) {
    println!();
    println!("Estimated Pallet Summary");
    println!("  Total Units:       {}", estimate.total_units.round_dp(0));
    println!("  Total Weight (kg): {:.2} kg", estimate.total_weight);
    println!("  Total Volume (m³): {:.3} m³", estimate.total_volume);
    println!("  Pallets by Weight: {}", estimate.pallets_by_weight);
    println!("  Pallets by Volume: {}", estimate.pallets_by_volume);
    println!("  Pallets Needed:    {}", estimate.pallets_needed);
}

fn print_line(cells: &[String; 14], widths: &[usize; 14], decimals: &[Option<u32>; 14]) {
    let fields: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(decimals)
        .map(|((cell, width), decimal)| {
            let pad = width.saturating_sub(cell.chars().count());
            // 數值欄靠右，文字欄靠左
            if decimal.is_some() {
                format!("{}{}", " ".repeat(pad), cell)
            } else {
                format!("{}{}", cell, " ".repeat(pad))
            }
        })
        .collect();
    println!("{}", fields.join("  "));
}

/// 單一儲存格的顯示格式
///
/// 空白欄以「—」呈現（僅限終端表格；CSV 匯出寫真正的空白欄）
fn format_cell(cell: &Cell, decimals: Option<u32>) -> String {
    match cell {
        Cell::Empty => "—".to_string(),
        Cell::Text(text) => text.clone(),
        Cell::Number(value) => match decimals {
            Some(dp) => format_number(*value, dp),
            None => value.to_string(),
        },
    }
}

/// 數值格式化：整數欄帶千分位，小數欄固定位數
fn format_number(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp(dp);
    if dp == 0 {
        group_thousands(&rounded.to_string())
    } else {
        format!("{rounded:.prec$}", prec = dp as usize)
    }
}

/// 千分位分隔
fn group_thousands(raw: &str) -> String {
    let (sign, digits) = raw.strip_prefix('-').map_or(("", raw), |rest| ("-", rest));
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}")
}
