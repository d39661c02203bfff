use std::io::Write;
use std::path::Path;

use crate::report::ReportRow;

/// 报告列头 (顺序固定, 与 ReportRow 的 serde 列名一致)
pub const CSV_HEADERS: [&str; 11] = [
    "Estimate Line #",
    "Part Number",
    "Description",
    "Estimate Quantity",
    "CDK Quantity",
    "Estimate Price",
    "CDK Price",
    "Match Report",
    "Color Coded Match Report",
    "Missing in Estimate",
    "Missing in CDK",
];

/// 导出报告行到任意 Writer (UTF-8, 含表头行)
pub fn write_csv<W: Write>(
    rows: &[ReportRow],
    writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(CSV_HEADERS)?;
    for row in rows {
        w.write_record(&[
            row.estimate_line.as_str(),
            row.part_number.as_str(),
            row.description.as_str(),
            row.estimate_quantity.as_str(),
            row.cdk_quantity.as_str(),
            row.estimate_price.as_str(),
            row.cdk_price.as_str(),
            row.match_report.as_str(),
            row.color_coded.as_str(),
            row.missing_in_estimate.as_str(),
            row.missing_in_cdk.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// 渲染为 UTF-8 字节串 (HTTP 下载响应体)
pub fn csv_bytes(rows: &[ReportRow]) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(buf)
}

/// 导出报告到 CSV 文件
pub fn export_to_csv(
    rows: &[ReportRow],
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let file = std::fs::File::create(output_path)?;
    write_csv(rows, file)
}
