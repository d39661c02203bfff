use crate::report::MatchReport;

// 横版页面与各列的字符宽度
const PAGE_WIDTH: usize = 132;
const LINE_WIDTH: usize = 6;
const PART_WIDTH: usize = 14;
const DESC_WIDTH: usize = 35;   // 描述列截断上限
const QTY_WIDTH: usize = 9;
const PRICE_WIDTH: usize = 12;
const MATCH_WIDTH: usize = 25;  // 匹配报告列截断上限

/// 渲染横版定宽表格文档 (纯文本)
///
/// 截断仅发生在展示层, 规范报告数据不受影响。
pub fn render_document(report: &MatchReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:^width$}\n",
        "Estimate vs CDK Match Report",
        width = PAGE_WIDTH
    ));
    let stamp = report
        .generated_at
        .format("Generated at %Y-%m-%d %H:%M:%S UTC")
        .to_string();
    out.push_str(&format!("{:^width$}\n\n", stamp, width = PAGE_WIDTH));

    out.push_str(&table_line(
        "Line #",
        "Part Number",
        "Description",
        "Est Qty",
        "CDK Qty",
        "Est Price",
        "CDK Price",
        "Match Report",
    ));
    out.push_str(&"-".repeat(PAGE_WIDTH));
    out.push('\n');

    for row in &report.rows {
        out.push_str(&table_line(
            &row.estimate_line,
            &truncate(&row.part_number, PART_WIDTH),
            &truncate(&row.description, DESC_WIDTH),
            &row.estimate_quantity,
            &row.cdk_quantity,
            &row.estimate_price,
            &row.cdk_price,
            &truncate(&row.match_report, MATCH_WIDTH),
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Total: {}   Perfect Match: {}   Discrepancy: {}   No Match: {}\n",
        report.stats.total_rows,
        report.stats.perfect_matches,
        report.stats.discrepancies,
        report.stats.no_matches
    ));

    out
}

#[allow(clippy::too_many_arguments)]
fn table_line(
    line: &str,
    part: &str,
    desc: &str,
    est_qty: &str,
    cdk_qty: &str,
    est_price: &str,
    cdk_price: &str,
    match_report: &str,
) -> String {
    format!(
        "{:<lw$} {:<pw$} {:<dw$} {:>qw$} {:>qw$} {:>prw$} {:>prw$} {:<mw$}\n",
        line,
        part,
        desc,
        est_qty,
        cdk_qty,
        est_price,
        cdk_price,
        match_report,
        lw = LINE_WIDTH,
        pw = PART_WIDTH,
        dw = DESC_WIDTH,
        qw = QTY_WIDTH,
        prw = PRICE_WIDTH,
        mw = MATCH_WIDTH,
    )
}

/// 截断到固定字符宽度
fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}
