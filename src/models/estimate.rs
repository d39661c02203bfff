use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 估价单明细行 (标准化后)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRecord {
    pub line_number: i64,      // 行号 (Line 列, 报告追溯用)
    pub part_number: String,   // 零件号 (连接键, 已规范化)
    pub description: String,   // 描述 (仅展示, 不参与匹配)
    pub quantity: i64,         // 数量 (缺失按 0)
    pub extended_price: Option<BigDecimal>, // 金额 (缺失保持缺失)
}
