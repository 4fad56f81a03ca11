use super::data::TrainingData;
use crate::convolution::network::Network;

/// Mean over the examples of the summed squared output error. Lower is better.
///
/// Inputs and outputs are matched by position and truncated to the shorter
/// side. An empty training set scores `0.0`.
pub fn mean_squared_error(network: &mut Network, training_set: &[TrainingData]) -> f64 {
    if training_set.is_empty() {
        return 0.0;
    }

    let total: f64 = training_set
        .iter()
        .map(|example| {
            network.set_inputs(example.inputs());
            network.calculate();
            network
                .read_outputs()
                .iter()
                .zip(example.expected_outputs())
                .map(|(actual, expected)| (actual - expected).powi(2))
                .sum::<f64>()
        })
        .sum();

    total / training_set.len() as f64
}
