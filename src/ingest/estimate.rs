use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::CrossRefError;
use crate::models::EstimateRecord;

/// 估价单必需列 (任一缺失即致命错误)
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Line",
    "Part Number",
    "Description",
    "Quantity",
    "Extended Price",
];

/// 解析估价单 CSV 文本 (带表头的表格输入)
///
/// 行序保持输入顺序, 后续报告的行序由此决定。零件号为空或哨兵 "-"
/// 的行在此丢弃, 之后的环节不再见到它们。
pub fn parse_estimate_csv(text: &str) -> Result<Vec<EstimateRecord>, CrossRefError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let col = |name: &'static str| -> Result<usize, CrossRefError> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(CrossRefError::MissingColumn(name))
    };
    let line_col = col("Line")?;
    let part_col = col("Part Number")?;
    let desc_col = col("Description")?;
    let qty_col = col("Quantity")?;
    let price_col = col("Extended Price")?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let part_cell = cell(part_col).trim();
        if part_cell.is_empty() || part_cell == "-" {
            continue;
        }

        records.push(EstimateRecord {
            line_number: coerce_int(cell(line_col)),
            part_number: canonical_part_number(part_cell),
            description: cell(desc_col).trim().to_string(),
            quantity: coerce_int(cell(qty_col)),
            extended_price: parse_price(cell(price_col)),
        });
    }

    Ok(records)
}

/// 零件号规范化
///
/// 数值型输入渲染为十进制整数串 (去掉小数点/尾零等格式痕迹),
/// 其余仅做 trim 原样保留。
pub fn canonical_part_number(raw: &str) -> String {
    let trimmed = raw.trim();
    match f64::from_str(trimmed) {
        Ok(n) if n.is_finite() => format!("{}", n.trunc() as i64),
        _ => trimmed.to_string(),
    }
}

/// 整型强制转换: 缺失/非法按 0 处理
pub fn coerce_int(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| {
            f64::from_str(trimmed)
                .ok()
                .filter(|n| n.is_finite())
                .map(|n| n.trunc() as i64)
        })
        .unwrap_or(0)
}

/// 价格解析: 去掉千分位逗号后按十进制解析; 缺失/非法为 None
pub fn parse_price(raw: &str) -> Option<BigDecimal> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    BigDecimal::from_str(&cleaned).ok()
}
