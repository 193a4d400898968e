pub mod parameters;

pub use parameters::{ParamRole, Parameter, Parameters, WEIGHT_PREFIX};
