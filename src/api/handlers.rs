use crate::error::CrossRefError;
use crate::models::ReportStats;
use crate::report::{csv_bytes, render_document, ReportRow};
use crate::service::CrossRefService;
use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 请求体: 两侧原始输入
///
/// estimate_csv 为带表头的表格文本 (上传组件负责把工作簿转成 CSV),
/// cdk_text 为粘贴的自由文本配件清单。
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub estimate_csv: String,
    pub cdk_text: String,
}

/// 响应体
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub success: bool,
    pub message: String,
    pub stats: Option<ReportStats>,
    pub rows: Option<Vec<ReportRow>>,
    pub generated_at: Option<DateTime<Utc>>,
}

impl ReportResponse {
    fn failure(message: String) -> Self {
        Self {
            success: false,
            message,
            stats: None,
            rows: None,
            generated_at: None,
        }
    }
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 空输入前置校验: 任一侧为空则不进入核心管线
fn validate(req: &ReportRequest) -> Result<(), &'static str> {
    if req.estimate_csv.trim().is_empty() {
        return Err("estimate_csv is empty");
    }
    if req.cdk_text.trim().is_empty() {
        return Err("cdk_text is empty");
    }
    Ok(())
}

fn error_response(e: CrossRefError) -> Response {
    // 目前所有致命错误都是输入前置条件违反
    let status = match &e {
        CrossRefError::MissingColumn(_) | CrossRefError::Csv(_) => StatusCode::BAD_REQUEST,
    };
    let response = ReportResponse::failure(format!("Error: {}", e));
    (status, Json(response)).into_response()
}

/// 生成核对报告 (JSON)
pub async fn generate_report(
    State(service): State<Arc<CrossRefService>>,
    Json(req): Json<ReportRequest>,
) -> Response {
    if let Err(msg) = validate(&req) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ReportResponse::failure(msg.to_string())),
        )
            .into_response();
    }

    match service.build_report(&req.estimate_csv, &req.cdk_text) {
        Ok(report) => {
            let response = ReportResponse {
                success: true,
                message: format!("Match report generated, {} rows", report.rows.len()),
                stats: Some(report.stats),
                rows: Some(report.rows),
                generated_at: Some(report.generated_at),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// 导出核对报告 (CSV 下载)
pub async fn export_report_csv(
    State(service): State<Arc<CrossRefService>>,
    Json(req): Json<ReportRequest>,
) -> Response {
    if let Err(msg) = validate(&req) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ReportResponse::failure(msg.to_string())),
        )
            .into_response();
    }

    match service.build_report(&req.estimate_csv, &req.cdk_text) {
        Ok(report) => match csv_bytes(&report.rows) {
            Ok(bytes) => (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"match_report.csv\"",
                    ),
                ],
                bytes,
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ReportResponse::failure(format!("Error: {}", e))),
            )
                .into_response(),
        },
        Err(e) => error_response(e),
    }
}

/// 导出核对报告 (横版定宽表格文档)
pub async fn export_report_document(
    State(service): State<Arc<CrossRefService>>,
    Json(req): Json<ReportRequest>,
) -> Response {
    if let Err(msg) = validate(&req) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ReportResponse::failure(msg.to_string())),
        )
            .into_response();
    }

    match service.build_report(&req.estimate_csv, &req.cdk_text) {
        Ok(report) => {
            let doc = render_document(&report);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                doc,
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}
