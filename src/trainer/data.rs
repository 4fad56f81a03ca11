/// One supervised example: values for the declared input pipes and the values
/// the declared output pipes should end up holding.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingData {
    inputs: Vec<f64>,
    expected_outputs: Vec<f64>,
}

impl TrainingData {
    pub fn new(inputs: Vec<f64>, expected_outputs: Vec<f64>) -> TrainingData {
        TrainingData { inputs, expected_outputs }
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn expected_outputs(&self) -> &[f64] {
        &self.expected_outputs
    }
}
