use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::models::CdkRecord;

/// CDK 文本解析结果
#[derive(Debug, Clone)]
pub struct CdkParseOutcome {
    pub records: Vec<CdkRecord>,
    pub skipped_lines: usize,  // 静默跳过的非空行数
}

/// 解析 CDK 配件清单文本 (粘贴的松散结构文本, 尽力而为)
///
/// 每行按空白切分: 第 1 个 token 为零件号, 第 2 个为数量,
/// 最后一个为价格, 中间各 token 以单空格拼为描述。token 不足 4 个
/// 或数量/价格解析失败的行静默跳过: 粘贴内容中混有表头和噪声
/// 属于预期输入, 不构成错误。
///
/// 重复零件号的行全部保留, 首次出现之后的行对匹配不可见 (由引擎决定)。
pub fn parse_cdk_text(text: &str) -> CdkParseOutcome {
    let mut records = Vec::new();
    let mut skipped_lines = 0usize;

    for line in text.trim().lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() < 4 {
            skipped_lines += 1;
            continue;
        }

        let quantity = tokens[1].parse::<i64>();
        let price = BigDecimal::from_str(&tokens[tokens.len() - 1].replace(',', ""));
        match (quantity, price) {
            (Ok(quantity), Ok(price)) => records.push(CdkRecord {
                part_number: tokens[0].to_string(),
                quantity,
                description: tokens[2..tokens.len() - 1].join(" "),
                price,
            }),
            _ => skipped_lines += 1,
        }
    }

    CdkParseOutcome {
        records,
        skipped_lines,
    }
}
