use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 匹配类别 (细粒度分类, 对外展示串固定)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchCategory {
    #[serde(rename = "Matched by Part #, Qty & Price")]
    PartQtyPrice,
    #[serde(rename = "Matched by Part # & Qty")]
    PartQty,
    #[serde(rename = "Matched by Part # & Price")]
    PartPrice,
    #[serde(rename = "Matched by Part # Only")]
    PartOnly,
    #[serde(rename = "Missing in CDK")]
    MissingInCdk,
    #[serde(rename = "Missing in Estimate")]
    MissingInEstimate,
}

impl MatchCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchCategory::PartQtyPrice => "Matched by Part #, Qty & Price",
            MatchCategory::PartQty => "Matched by Part # & Qty",
            MatchCategory::PartPrice => "Matched by Part # & Price",
            MatchCategory::PartOnly => "Matched by Part # Only",
            MatchCategory::MissingInCdk => "Missing in CDK",
            MatchCategory::MissingInEstimate => "Missing in Estimate",
        }
    }

    /// 由匹配类别推导粗粒度状态
    pub fn status(&self) -> MatchStatus {
        if matches!(self, MatchCategory::PartQtyPrice) {
            MatchStatus::PerfectMatch
        } else if self.as_str().contains("Missing") {
            MatchStatus::NoMatch
        } else {
            MatchStatus::Discrepancy
        }
    }
}

impl std::fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 粗粒度状态 (三值汇总)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    #[serde(rename = "Perfect Match")]
    PerfectMatch,
    #[serde(rename = "Discrepancy")]
    Discrepancy,
    #[serde(rename = "No Match")]
    NoMatch,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::PerfectMatch => "Perfect Match",
            MatchStatus::Discrepancy => "Discrepancy",
            MatchStatus::NoMatch => "No Match",
        }
    }

    /// 带标记的展示形式 ("Color Coded Match Report" 列)
    pub fn decorated(&self) -> &'static str {
        match self {
            MatchStatus::PerfectMatch => "✅ Perfect Match",
            MatchStatus::Discrepancy => "⚠️ Discrepancy",
            MatchStatus::NoMatch => "❌ No Match",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 匹配结果行
///
/// 两侧出现过的每个零件号都会落在输出中; line_number 为 None
/// 表示该行仅来自 CDK 侧 (报告中渲染占位符)。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub line_number: Option<i64>,
    pub part_number: String,
    pub description: String,
    pub estimate_quantity: Option<i64>,
    pub cdk_quantity: Option<i64>,
    pub estimate_price: Option<BigDecimal>,
    pub cdk_price: Option<BigDecimal>,
    pub match_category: MatchCategory,
    pub status: MatchStatus,
}

/// 核对统计信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStats {
    pub estimate_records: usize,
    pub cdk_records: usize,
    pub cdk_lines_skipped: usize,  // 静默跳过的 CDK 行数 (诊断用)
    pub total_rows: usize,
    pub perfect_matches: usize,
    pub discrepancies: usize,
    pub no_matches: usize,
}

impl ReportStats {
    pub fn from_results(
        results: &[MatchResult],
        estimate_records: usize,
        cdk_records: usize,
        cdk_lines_skipped: usize,
    ) -> Self {
        let mut perfect_matches = 0;
        let mut discrepancies = 0;
        let mut no_matches = 0;
        for r in results {
            match r.status {
                MatchStatus::PerfectMatch => perfect_matches += 1,
                MatchStatus::Discrepancy => discrepancies += 1,
                MatchStatus::NoMatch => no_matches += 1,
            }
        }
        Self {
            estimate_records,
            cdk_records,
            cdk_lines_skipped,
            total_rows: results.len(),
            perfect_matches,
            discrepancies,
            no_matches,
        }
    }
}
