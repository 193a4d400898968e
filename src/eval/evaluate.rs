use tracing::{debug, info, warn};

use crate::error::Result;
use crate::eval::cost_report::CostReport;
use crate::eval::eval_config::EvalConfig;
use crate::loss::final_activation_and_cost::FinalActivationAndCost;
use crate::loss::regularization::{compute_cost_with_regularization, l2_penalty};
use crate::math::{from_rows, to_rows};

/// Runs the configured pairing over one batch and adds the L2 penalty.
///
/// # Errors
/// - `CostError::InvalidInput` for an invalid `lambd` or malformed matrices
/// - `CostError::ShapeMismatch` when labels and pre-activations differ in shape
pub fn evaluate(config: &EvalConfig) -> Result<CostReport> {
    config.validate()?;

    let y = from_rows(&config.labels)?;
    let zl = from_rows(&config.pre_activation)?;
    let params = config.parameters()?;
    let cost_kind = config.cost;

    debug!(
        cost = cost_kind.name(),
        labels = ?y.dim(),
        pre_activation = ?zl.dim(),
        params = params.len(),
        weights = params.weights().count(),
        "evaluating batch"
    );

    // The joint cost is exact; `output_cost` would rebuild it from `AL`,
    // which loses `ZL` once the activation saturates.
    let (cost, al, dzl) = cost_kind.final_activation_and_cost(&y, &zl)?;
    let regularized_cost =
        compute_cost_with_regularization(&y, &al, &params, |_, _| Ok(cost), config.lambd)?;
    let penalty = l2_penalty(&params, y.ncols(), config.lambd);

    if !regularized_cost.is_finite() {
        warn!(cost, regularized_cost, "cost is not finite; check for saturated activations");
    }
    info!(
        cost_kind = cost_kind.name(),
        samples = y.ncols(),
        cost,
        l2_penalty = penalty,
        regularized_cost,
        "evaluation complete"
    );

    Ok(CostReport {
        cost_kind,
        activation: cost_kind.activation(),
        samples: y.ncols(),
        cost,
        l2_penalty: penalty,
        regularized_cost,
        activation_output: to_rows(&al),
        gradient: to_rows(&dzl),
    })
}
