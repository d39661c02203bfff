pub mod classify;
pub mod matcher;

pub use classify::{classify_matched, prices_within_tolerance};
pub use matcher::CrossRefService;
