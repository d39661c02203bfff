use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::CrossRefError;
use crate::ingest::{self, CdkParseOutcome};
use crate::models::{CdkRecord, EstimateRecord, MatchCategory, MatchResult, ReportStats};
use crate::report::{assemble, MatchReport};
use crate::service::classify::{classify_matched, prices_within_tolerance};

/// 交叉核对服务
///
/// 每次调用在全新的本地数据上跑完整管线, 不持有任何跨调用状态。
pub struct CrossRefService;

impl CrossRefService {
    pub fn new() -> Self {
        Self
    }

    /// 报告生成入口: 标准化两侧输入 → 双向连接 + 分类 → 汇总
    pub fn build_report(
        &self,
        estimate_csv: &str,
        cdk_text: &str,
    ) -> Result<MatchReport, CrossRefError> {
        // Phase 1: 估价单标准化
        let estimate = ingest::parse_estimate_csv(estimate_csv)?;
        tracing::info!("估价单解析完成, {} 条有效记录", estimate.len());

        // Phase 2: CDK 文本标准化 (脏行静默跳过)
        let CdkParseOutcome {
            records: cdk,
            skipped_lines,
        } = ingest::parse_cdk_text(cdk_text);
        tracing::info!("CDK 解析完成, {} 条记录, 跳过 {} 行", cdk.len(), skipped_lines);

        // Phase 3: 双向连接 + 分类
        let results = self.reconcile(&estimate, &cdk);

        // Phase 4: 汇总
        let stats = ReportStats::from_results(&results, estimate.len(), cdk.len(), skipped_lines);
        tracing::info!(
            "核对完成 - 总行数: {}, Perfect: {}, Discrepancy: {}, No Match: {}",
            stats.total_rows,
            stats.perfect_matches,
            stats.discrepancies,
            stats.no_matches
        );

        Ok(assemble(results, stats))
    }

    /// 双向连接: 估价单驱动行在前 (保持输入顺序), 仅 CDK 行在后 (CDK 输入顺序)
    pub fn reconcile(&self, estimate: &[EstimateRecord], cdk: &[CdkRecord]) -> Vec<MatchResult> {
        // 1. CDK 首次出现索引 (重复零件号的后续出现对匹配不可见,
        //    既有行为, 不做"修复")
        let mut cdk_index: IndexMap<&str, &CdkRecord> = IndexMap::new();
        for rec in cdk {
            cdk_index.entry(rec.part_number.as_str()).or_insert(rec);
        }

        let mut results = Vec::with_capacity(estimate.len());
        let mut estimate_parts: HashSet<&str> = HashSet::new();

        // 2. 估价单侧遍历: 每条估价记录恰好产出一行
        //    (重复的估价零件号各自复用同一条首次出现的 CDK 记录)
        for est in estimate {
            estimate_parts.insert(est.part_number.as_str());

            match cdk_index.get(est.part_number.as_str()) {
                Some(cdk_rec) => {
                    let qty_equal = est.quantity == cdk_rec.quantity;
                    let price_equal = prices_within_tolerance(
                        est.extended_price.as_ref(),
                        Some(&cdk_rec.price),
                    );
                    let category = classify_matched(qty_equal, price_equal);
                    results.push(MatchResult {
                        line_number: Some(est.line_number),
                        part_number: est.part_number.clone(),
                        description: est.description.clone(),
                        estimate_quantity: Some(est.quantity),
                        cdk_quantity: Some(cdk_rec.quantity),
                        estimate_price: est.extended_price.clone(),
                        cdk_price: Some(cdk_rec.price.clone()),
                        match_category: category,
                        status: category.status(),
                    });
                }
                None => {
                    results.push(MatchResult {
                        line_number: Some(est.line_number),
                        part_number: est.part_number.clone(),
                        description: est.description.clone(),
                        estimate_quantity: Some(est.quantity),
                        cdk_quantity: None,
                        estimate_price: est.extended_price.clone(),
                        cdk_price: None,
                        match_category: MatchCategory::MissingInCdk,
                        status: MatchCategory::MissingInCdk.status(),
                    });
                }
            }
        }

        // 3. 仅 CDK 行追加: 步骤 2 消费过的零件号不再产出第二行
        for (&part, &cdk_rec) in &cdk_index {
            if estimate_parts.contains(part) {
                continue;
            }
            results.push(MatchResult {
                line_number: None,
                part_number: cdk_rec.part_number.clone(),
                description: cdk_rec.description.clone(),
                estimate_quantity: None,
                cdk_quantity: Some(cdk_rec.quantity),
                estimate_price: None,
                cdk_price: Some(cdk_rec.price.clone()),
                match_category: MatchCategory::MissingInEstimate,
                status: MatchCategory::MissingInEstimate.status(),
            });
        }

        results
    }
}

impl Default for CrossRefService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchStatus;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn est(line: i64, part: &str, qty: i64, price: Option<&str>) -> EstimateRecord {
        EstimateRecord {
            line_number: line,
            part_number: part.to_string(),
            description: format!("est {part}"),
            quantity: qty,
            extended_price: price.map(|p| BigDecimal::from_str(p).unwrap()),
        }
    }

    fn cdk(part: &str, qty: i64, price: &str) -> CdkRecord {
        CdkRecord {
            part_number: part.to_string(),
            quantity: qty,
            description: format!("cdk {part}"),
            price: BigDecimal::from_str(price).unwrap(),
        }
    }

    #[test]
    fn every_part_number_appears_exactly_once() {
        let service = CrossRefService::new();
        let estimate = vec![est(1, "1001", 2, Some("100.00")), est(2, "2000", 1, Some("5.00"))];
        let cdk_recs = vec![cdk("1001", 2, "100.00"), cdk("3000", 1, "20.00")];

        let results = service.reconcile(&estimate, &cdk_recs);
        let parts: Vec<&str> = results.iter().map(|r| r.part_number.as_str()).collect();
        assert_eq!(parts, vec!["1001", "2000", "3000"]);
    }

    #[test]
    fn row_count_is_estimate_rows_plus_unmatched_cdk_parts() {
        let service = CrossRefService::new();
        let estimate = vec![est(1, "1001", 2, Some("10.00"))];
        let cdk_recs = vec![
            cdk("1001", 2, "10.00"),
            cdk("3000", 1, "20.00"),
            cdk("3000", 4, "25.00"), // 重复零件号只产出一行
        ];

        let results = service.reconcile(&estimate, &cdk_recs);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn estimate_rows_come_first_in_input_order() {
        let service = CrossRefService::new();
        let estimate = vec![
            est(1, "B", 1, Some("1.00")),
            est(2, "A", 1, Some("1.00")),
        ];
        let cdk_recs = vec![cdk("Z", 1, "9.00"), cdk("Y", 1, "8.00")];

        let results = service.reconcile(&estimate, &cdk_recs);
        let parts: Vec<&str> = results.iter().map(|r| r.part_number.as_str()).collect();
        assert_eq!(parts, vec!["B", "A", "Z", "Y"]);
    }

    #[test]
    fn missing_in_cdk_row_has_absent_cdk_side() {
        let service = CrossRefService::new();
        let results = service.reconcile(&[est(7, "2000", 1, Some("5.00"))], &[]);

        assert_eq!(results.len(), 1);
        let row = &results[0];
        assert_eq!(row.match_category, MatchCategory::MissingInCdk);
        assert_eq!(row.status, MatchStatus::NoMatch);
        assert_eq!(row.line_number, Some(7));
        assert_eq!(row.cdk_quantity, None);
        assert_eq!(row.cdk_price, None);
    }

    #[test]
    fn missing_in_estimate_row_has_absent_estimate_side() {
        let service = CrossRefService::new();
        let results = service.reconcile(&[], &[cdk("3000", 1, "20.00")]);

        assert_eq!(results.len(), 1);
        let row = &results[0];
        assert_eq!(row.match_category, MatchCategory::MissingInEstimate);
        assert_eq!(row.status, MatchStatus::NoMatch);
        assert_eq!(row.line_number, None);
        assert_eq!(row.estimate_quantity, None);
        assert_eq!(row.estimate_price, None);
        assert_eq!(row.description, "cdk 3000");
    }

    #[test]
    fn first_cdk_occurrence_wins_for_duplicates() {
        let service = CrossRefService::new();
        let estimate = vec![est(1, "1001", 2, Some("10.00"))];
        let cdk_recs = vec![cdk("1001", 9, "99.00"), cdk("1001", 2, "10.00")];

        let results = service.reconcile(&estimate, &cdk_recs);
        assert_eq!(results.len(), 1);
        // 后一条本会完全匹配的重复记录对匹配不可见
        assert_eq!(results[0].cdk_quantity, Some(9));
        assert_eq!(results[0].match_category, MatchCategory::PartOnly);
    }

    #[test]
    fn duplicate_estimate_lines_each_reuse_the_same_cdk_record() {
        let service = CrossRefService::new();
        let estimate = vec![
            est(1, "1001", 2, Some("10.00")),
            est(2, "1001", 3, Some("10.00")),
        ];
        let cdk_recs = vec![cdk("1001", 2, "10.00")];

        let results = service.reconcile(&estimate, &cdk_recs);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].match_category, MatchCategory::PartQtyPrice);
        assert_eq!(results[1].match_category, MatchCategory::PartPrice);
        assert_eq!(results[1].cdk_quantity, Some(2));
    }

    #[test]
    fn matched_row_prefers_estimate_description() {
        let service = CrossRefService::new();
        let results = service.reconcile(
            &[est(1, "1001", 2, Some("10.00"))],
            &[cdk("1001", 2, "10.00")],
        );
        assert_eq!(results[0].description, "est 1001");
    }

    #[test]
    fn absent_estimate_price_falls_through_to_qty_branch() {
        let service = CrossRefService::new();
        let results = service.reconcile(
            &[est(1, "1001", 2, None)],
            &[cdk("1001", 2, "10.00")],
        );
        assert_eq!(results[0].match_category, MatchCategory::PartQty);
    }

    #[test]
    fn build_report_runs_full_pipeline() {
        let service = CrossRefService::new();
        let estimate_csv = "Line,Part Number,Description,Quantity,Extended Price\n\
                            1,1001,Brake Pad,2,100.00\n";
        let cdk_text = "1001 2 Brake Pad 100.00\nnoise line\n";

        let report = service.build_report(estimate_csv, cdk_text).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.stats.perfect_matches, 1);
        assert_eq!(report.stats.cdk_lines_skipped, 1);
    }
}
