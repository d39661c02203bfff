use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{MatchResult, ReportStats};

/// CDK 独有行没有估价单行号, 报告中用占位符表示
pub const LINE_PLACEHOLDER: &str = "-";

/// 报告行 (对外列集, 字段名与列序固定)
///
/// 全部渲染为字符串: 这是面向展示/导出的最终形态, 缺失值为空串,
/// 类型化数据保留在 MatchResult 中。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Estimate Line #")]
    pub estimate_line: String,
    #[serde(rename = "Part Number")]
    pub part_number: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Estimate Quantity")]
    pub estimate_quantity: String,
    #[serde(rename = "CDK Quantity")]
    pub cdk_quantity: String,
    #[serde(rename = "Estimate Price")]
    pub estimate_price: String,
    #[serde(rename = "CDK Price")]
    pub cdk_price: String,
    #[serde(rename = "Match Report")]
    pub match_report: String,
    #[serde(rename = "Color Coded Match Report")]
    pub color_coded: String,
    #[serde(rename = "Missing in Estimate")]
    pub missing_in_estimate: String,
    #[serde(rename = "Missing in CDK")]
    pub missing_in_cdk: String,
}

impl ReportRow {
    /// 缺失标记按价格在场与否计算, 与匹配类别无关
    pub fn from_result(r: &MatchResult) -> Self {
        Self {
            estimate_line: r
                .line_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| LINE_PLACEHOLDER.to_string()),
            part_number: r.part_number.clone(),
            description: r.description.clone(),
            estimate_quantity: r
                .estimate_quantity
                .map(|q| q.to_string())
                .unwrap_or_default(),
            cdk_quantity: r.cdk_quantity.map(|q| q.to_string()).unwrap_or_default(),
            estimate_price: r
                .estimate_price
                .as_ref()
                .map(|p| p.to_string())
                .unwrap_or_default(),
            cdk_price: r
                .cdk_price
                .as_ref()
                .map(|p| p.to_string())
                .unwrap_or_default(),
            match_report: r.match_category.as_str().to_string(),
            color_coded: r.status.decorated().to_string(),
            missing_in_estimate: if r.estimate_price.is_none() { "❌" } else { "" }.to_string(),
            missing_in_cdk: if r.cdk_price.is_none() { "❌" } else { "" }.to_string(),
        }
    }
}

/// 汇总后的完整报告
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub rows: Vec<ReportRow>,
    pub stats: ReportStats,
    pub generated_at: DateTime<Utc>,
}

/// 汇总: 保持引擎产出的行序, 不做任何匹配逻辑
pub fn assemble(results: Vec<MatchResult>, stats: ReportStats) -> MatchReport {
    MatchReport {
        rows: results.iter().map(ReportRow::from_result).collect(),
        stats,
        generated_at: Utc::now(),
    }
}
