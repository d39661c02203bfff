use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// CDK 配件清单行 (标准化后)
///
/// CDK 侧没有行号; 价格解析失败的行不会成为记录, 因此 price 恒存在。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdkRecord {
    pub part_number: String,
    pub quantity: i64,
    pub description: String,
    pub price: BigDecimal,
}
