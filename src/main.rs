use axum::{routing::{get, post}, Router};
use parts_crossref_rust::{api, AppConfig, CrossRefService};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting server with config: {:?}", config);

    // 创建核对服务 (无跨请求状态)
    let service = Arc::new(CrossRefService::new());

    // 构建路由
    let app = Router::new()
        .route("/health", get(api::health_check))
        .route("/api/report", post(api::generate_report))
        .route("/api/report/csv", post(api::export_report_csv))
        .route("/api/report/document", post(api::export_report_document))
        .with_state(service)
        .layer(ServiceBuilder::new());

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /api/report           - 生成核对报告 (JSON)");
    info!("  POST /api/report/csv       - 导出 CSV");
    info!("  POST /api/report/document  - 导出定宽表格文档");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
