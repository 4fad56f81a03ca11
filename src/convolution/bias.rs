use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::neuron::Neuron;

type BiasFn = dyn Fn(f64, Option<&Neuron>) -> f64 + Send + Sync;

/// Caller supplied bias. Identified by name and signature, never by the closure.
#[derive(Clone)]
pub struct FunctionBias {
    function: Arc<BiasFn>,
    name: Cow<'static, str>,
    signature: Cow<'static, str>,
}

impl FunctionBias {
    pub fn new<F>(function: F, name: impl Into<Cow<'static, str>>, signature: Option<Cow<'static, str>>) -> FunctionBias
    where
        F: Fn(f64, Option<&Neuron>) -> f64 + Send + Sync + 'static,
    {
        let name = name.into();
        let signature = signature.unwrap_or_else(|| name.clone());
        FunctionBias {
            function: Arc::new(function),
            name,
            signature,
        }
    }
}

impl fmt::Debug for FunctionBias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionBias")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish()
    }
}

/// Scalar transform applied to each neuron input and to the neuron's summed output.
#[derive(Clone, Debug, Default)]
pub enum Bias {
    #[default]
    Passthrough,
    Sigmoid,
    Invert,
    Constant(f64),
    Reciprocal,
    Function(FunctionBias),
}

impl Bias {
    /// Biases the trainer samples from.
    pub const CATALOG: [Bias; 7] = [
        Bias::Passthrough,
        Bias::Sigmoid,
        Bias::Invert,
        Bias::Constant(0.5),
        Bias::Constant(1.0),
        Bias::Constant(-1.0),
        Bias::Reciprocal,
    ];

    pub fn evaluate(&self, input: f64, caller: Option<&Neuron>) -> f64 {
        match self {
            Bias::Passthrough => input,
            Bias::Sigmoid => 1.0 / (1.0 + (-input).exp()),
            Bias::Invert => -input,
            Bias::Constant(k) => *k,
            Bias::Reciprocal => {
                if input != 0.0 {
                    1.0 / input
                } else {
                    0.0
                }
            }
            Bias::Function(f) => (f.function)(input, caller),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Bias::Passthrough => "Passthrough",
            Bias::Sigmoid => "Sigmoid",
            Bias::Invert => "Invert",
            Bias::Constant(_) => "Constant",
            Bias::Reciprocal => "Reciprocal",
            Bias::Function(f) => f.name.as_ref(),
        }
    }

    pub fn signature(&self) -> Cow<'_, str> {
        match self {
            Bias::Passthrough => Cow::Borrowed("Passthrough(x)"),
            Bias::Sigmoid => Cow::Borrowed("Sigmoid(x) = 1/(1+e^-x)"),
            Bias::Invert => Cow::Borrowed("Invert(x) = -x"),
            Bias::Constant(k) => Cow::Owned(format!("Constant({k})")),
            Bias::Reciprocal => Cow::Borrowed("Reciprocal(x) = 1/x"),
            Bias::Function(f) => Cow::Borrowed(f.signature.as_ref()),
        }
    }

    pub fn identity(&self) -> (&str, Cow<'_, str>) {
        (self.name(), self.signature())
    }
}

impl PartialEq for Bias {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Bias {}

impl Hash for Bias {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
        self.signature().hash(state);
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rustc_hash::FxHasher;

    fn hash_of(bias: &Bias) -> u64 {
        let mut hasher = FxHasher::default();
        bias.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn constant_returns_constant_value() {
        let bias = Bias::Constant(5.0);
        assert_eq!(bias.evaluate(10.0, None), 5.0);
        assert_eq!(bias.evaluate(0.0, None), 5.0);
        assert_eq!(bias.evaluate(-10.0, None), 5.0);
    }

    #[test]
    fn passthrough_returns_input() {
        let bias = Bias::Passthrough;
        assert_eq!(bias.evaluate(10.0, None), 10.0);
        assert_eq!(bias.evaluate(0.0, None), 0.0);
        assert_eq!(bias.evaluate(-10.0, None), -10.0);
    }

    #[test]
    fn sigmoid() {
        let bias = Bias::Sigmoid;
        assert_approx_eq!(bias.evaluate(0.0, None), 0.5, 1e-4);
        assert!(bias.evaluate(10.0, None) > 0.99);
        assert!(bias.evaluate(-10.0, None) < 0.01);
    }

    #[test]
    fn invert_negates_input() {
        let bias = Bias::Invert;
        assert_eq!(bias.evaluate(10.0, None), -10.0);
        assert_eq!(bias.evaluate(0.0, None), 0.0);
        assert_eq!(bias.evaluate(-10.0, None), 10.0);
    }

    #[test]
    fn reciprocal_of_zero_is_zero() {
        let bias = Bias::Reciprocal;
        assert_eq!(bias.evaluate(2.0, None), 0.5);
        assert_eq!(bias.evaluate(0.5, None), 2.0);
        assert_eq!(bias.evaluate(0.0, None), 0.0);
    }

    #[test]
    fn constants_compare_by_value() {
        let bias1 = Bias::Constant(5.0);
        let bias2 = Bias::Constant(5.0);
        let bias3 = Bias::Constant(3.0);

        assert_eq!(bias1, bias2);
        assert_ne!(bias1, bias3);
        assert_eq!(hash_of(&bias1), hash_of(&bias2));
        assert_ne!(hash_of(&bias1), hash_of(&bias3));
    }

    #[test]
    fn signatures() {
        assert_eq!(Bias::Constant(5.0).to_string(), "Constant(5)");
        assert_eq!(Bias::Constant(0.5).to_string(), "Constant(0.5)");
        assert_eq!(Bias::Passthrough.to_string(), "Passthrough(x)");
        assert_eq!(Bias::Sigmoid.to_string(), "Sigmoid(x) = 1/(1+e^-x)");
        assert_eq!(Bias::Invert.to_string(), "Invert(x) = -x");
        assert_eq!(Bias::Reciprocal.to_string(), "Reciprocal(x) = 1/x");
    }

    #[test]
    fn function_bias_identity_ignores_closure() {
        let double = Bias::Function(FunctionBias::new(|x, _| 2.0 * x, "Double", None));
        let other = Bias::Function(FunctionBias::new(|x, _| x + x, "Double", None));
        let triple = Bias::Function(FunctionBias::new(|x, _| 3.0 * x, "Triple", Some("Triple(x) = 3x".into())));

        assert_eq!(double.evaluate(4.0, None), 8.0);
        assert_eq!(double, other);
        assert_ne!(double, triple);
        assert_eq!(double.to_string(), "Double");
        assert_eq!(triple.to_string(), "Triple(x) = 3x");
    }

    #[test]
    fn catalog_entries_are_distinct() {
        for (i, a) in Bias::CATALOG.iter().enumerate() {
            for b in Bias::CATALOG.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
