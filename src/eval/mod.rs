pub mod eval_config;
pub mod cost_report;
pub mod evaluate;

pub use eval_config::{EvalConfig, ParamEntry};
pub use cost_report::CostReport;
pub use evaluate::evaluate;
