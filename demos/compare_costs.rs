use ferrite_cost::{compute_cost_with_regularization, CostKind, FinalActivationAndCost, Parameters};
use ndarray::array;

fn main() -> ferrite_cost::Result<()> {
    let mut params = Parameters::new();
    params.insert_weight("W1", array![[0.4, -0.2], [0.1, 0.3]]);
    params.insert_bias("b1", array![[0.0], [0.0]]);
    let lambd = 0.7;

    // Binary labels for the sigmoid pairings and regression, one-hot
    // columns for softmax.
    let binary_y = array![[1.0, 0.0, 1.0, 0.0]];
    let binary_zl = array![[2.0, -1.0, -0.5, 0.3]];
    let one_hot_y = array![[1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 1.0, 0.0]];
    let one_hot_zl = array![[1.2, -0.3, 0.0, 0.4], [0.1, 0.8, 2.0, -1.0]];

    for kind in CostKind::ALL {
        let (y, zl) = match kind {
            CostKind::SoftmaxCrossEntropy => (&one_hot_y, &one_hot_zl),
            _ => (&binary_y, &binary_zl),
        };

        let (cost, al, dzl) = kind.final_activation_and_cost(y, zl)?;
        let regularized = compute_cost_with_regularization(
            y,
            &al,
            &params,
            |output, labels| kind.output_cost(output, labels),
            lambd,
        )?;

        println!("{}", kind.name());
        println!("  cost = {cost:.6}, with L2 (lambd = {lambd}) = {regularized:.6}");
        println!("  dZL  = {:?}", dzl.row(0).to_vec());
    }

    Ok(())
}
