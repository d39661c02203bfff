use thiserror::Error;

/// 核对服务错误
///
/// 仅估价单侧存在致命错误 (前置条件违反, 整次调用失败);
/// CDK 侧的脏行走静默跳过, 不在此枚举中。
#[derive(Debug, Error)]
pub enum CrossRefError {
    /// 估价单缺少必需列 (外部前置条件违反, 不做部分处理)
    #[error("estimate input is missing required column `{0}`")]
    MissingColumn(&'static str),

    /// 估价单 CSV 结构不可读
    #[error("estimate CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}
