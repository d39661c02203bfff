pub mod cdk;
pub mod estimate;

pub use cdk::{parse_cdk_text, CdkParseOutcome};
pub use estimate::{canonical_part_number, parse_estimate_csv, REQUIRED_COLUMNS};
