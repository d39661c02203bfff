pub mod cdk;
pub mod estimate;
pub mod result;

pub use cdk::CdkRecord;
pub use estimate::EstimateRecord;
pub use result::{MatchCategory, MatchResult, MatchStatus, ReportStats};
