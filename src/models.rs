use crate::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Size and activation of one layer, in network order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSpec {
    pub size: usize,
    pub activation: Activation,
}

impl LayerSpec {
    pub fn new(size: usize, activation: Activation) -> Self {
        Self { size, activation }
    }
}

/// Shorthand for [`LayerSpec::new`].
pub fn layer(size: usize, activation: Activation) -> LayerSpec {
    LayerSpec::new(size, activation)
}

/// Per-layer values cached by a forward pass, consumed by back-propagation.
#[derive(Debug, Clone)]
pub(crate) struct ForwardTrace {
    /// `inputs[i]` is what layer `i` received.
    pub inputs: Vec<Array1<f64>>,
    pub zs: Vec<Array1<f64>>,
    pub output: Array1<f64>,
}

/// A fully-connected feedforward network.
///
/// Inference through [`Network::predict`] takes `&self` and never mutates the
/// layers, so any number of threads may predict at once. Callers must not
/// predict while an [`SgdTrainer`] holds the network: the borrow checker
/// enforces this for safe code, and nothing inside the network locks.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    input_size: usize,
    layers: Vec<Dense>,
}

impl Network {
    /// Builds a network whose initial weights come from `rng`.
    pub fn new<R: Rng>(input_size: usize, specs: &[LayerSpec], rng: &mut R) -> Result<Self> {
        if input_size == 0 {
            return Err(NNError::InvalidConfiguration(
                "Input size must be greater than 0".to_string(),
            ));
        }
        if specs.is_empty() {
            return Err(NNError::InvalidConfiguration(
                "Network needs at least one layer".to_string(),
            ));
        }
        let mut layers = Vec::with_capacity(specs.len());
        let mut prev = input_size;
        for (i, spec) in specs.iter().enumerate() {
            if spec.size == 0 {
                return Err(NNError::InvalidConfiguration(format!(
                    "Layer {} size must be greater than 0",
                    i
                )));
            }
            layers.push(Dense::new(prev, spec.size, spec.activation, rng)?);
            prev = spec.size;
        }
        Ok(Self { input_size, layers })
    }

    /// Reproducible construction: the same seed yields the same weights.
    pub fn seeded(input_size: usize, specs: &[LayerSpec], seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(input_size, specs, &mut rng)
    }

    pub fn from_entropy(input_size: usize, specs: &[LayerSpec]) -> Result<Self> {
        let mut rng = StdRng::from_entropy();
        Self::new(input_size, specs, &mut rng)
    }

    /// Assembles a network from prebuilt layers, checking that adjacent sizes chain.
    pub fn from_layers(layers: Vec<Dense>) -> Result<Self> {
        let first = layers.first().ok_or_else(|| {
            NNError::InvalidConfiguration("Network needs at least one layer".to_string())
        })?;
        let input_size = first.input_size();
        for pair in layers.windows(2) {
            if pair[0].size() != pair[1].input_size() {
                return Err(NNError::mismatch(
                    "layer chain",
                    pair[0].size(),
                    pair[1].input_size(),
                ));
            }
        }
        Ok(Self { input_size, layers })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        // construction guarantees at least one layer
        self.layers.last().map_or(0, Dense::size)
    }

    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Dense] {
        &mut self.layers
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(Dense::parameter_count).sum()
    }

    /// Feeds `input` through every layer and returns the last layer's output.
    pub fn predict(&self, input: &[f64]) -> Result<Array1<f64>> {
        self.check_input(input.len())?;
        let mut a = ArrayView1::from(input).to_owned();
        for layer in self.layers.iter() {
            (_, a) = layer.forward(a.view())?;
        }
        Ok(a)
    }

    /// Runs [`Network::predict`] over many inputs on the rayon pool.
    pub fn predict_many<I>(&self, inputs: &[I]) -> Result<Vec<Array1<f64>>>
    where
        I: AsRef<[f64]> + Sync,
    {
        inputs
            .par_iter()
            .map(|input| self.predict(input.as_ref()))
            .collect()
    }

    pub(crate) fn feed_forward(&self, input: ArrayView1<f64>) -> Result<ForwardTrace> {
        self.check_input(input.len())?;
        let mut inputs = Vec::with_capacity(self.layers.len());
        let mut zs = Vec::with_capacity(self.layers.len());
        let mut a = input.to_owned();
        for layer in self.layers.iter() {
            let (z, out) = layer.forward(a.view())?;
            inputs.push(a);
            zs.push(z);
            a = out;
        }
        Ok(ForwardTrace {
            inputs,
            zs,
            output: a,
        })
    }

    pub fn summary(&self) -> String {
        let mut res = "\nModel Network\n".to_string();
        res.push_str("-------------------------------------------------------------\n");
        res.push_str("Layer (Type)\t\t Activation\t Output shape\t No.of params\n");
        res.push_str(&format!("Input\t\t\t -\t\t (None, {})\t 0\n", self.input_size));
        for (i, layer) in self.layers.iter().enumerate() {
            res.push_str(&format!(
                "{} ({})\t\t {}\t\t (None, {})\t {}\n",
                i,
                layer.typ(),
                layer.activation(),
                layer.size(),
                layer.parameter_count()
            ));
        }
        res.push_str("-------------------------------------------------------------\n");
        res.push_str(&format!("Total params: {}\n", self.parameter_count()));
        res
    }

    fn check_input(&self, len: usize) -> Result<()> {
        if len != self.input_size {
            return Err(NNError::mismatch("network input", self.input_size, len));
        }
        Ok(())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
