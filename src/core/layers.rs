use crate::prelude::*;
use crate::core::activations::Activation;
use crate::rand_array;

/// Gradients produced by [`Dense::backward`] for a single example.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    /// Gradient to hand to the previous layer.
    pub da: Array1<f64>,
    /// Same shape as the layer weights.
    pub dw: Array2<f64>,
    pub db: Array1<f64>,
}

/// Fully connected layer: `a = f(input · w + b)`.
///
/// `w` has shape `(input_size, size)`; each column holds one neuron's weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense {
    w: Array2<f64>,
    b: Array1<f64>,
    activation: Activation,
}

impl Dense {
    /// Creates a layer with weights and biases drawn uniformly from `[-1, 1)`.
    pub fn new<R: Rng>(
        input_size: usize,
        size: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self> {
        if size == 0 || input_size == 0 {
            return Err(NNError::InvalidConfiguration(
                "Layer dimensions must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            w: rand_array!(rng; input_size, size),
            b: rand_array!(rng; size),
            activation,
        })
    }

    /// Builds a layer from explicit parameters.
    pub fn from_parameters(w: Array2<f64>, b: Array1<f64>, activation: Activation) -> Result<Self> {
        if w.is_empty() {
            return Err(NNError::InvalidConfiguration(
                "Layer dimensions must be greater than 0".to_string(),
            ));
        }
        if b.len() != w.ncols() {
            return Err(NNError::mismatch("layer biases", w.ncols(), b.len()));
        }
        Ok(Self { w, b, activation })
    }

    pub fn input_size(&self) -> usize {
        self.w.nrows()
    }

    pub fn size(&self) -> usize {
        self.w.ncols()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn weights(&self) -> &Array2<f64> {
        &self.w
    }

    pub fn biases(&self) -> &Array1<f64> {
        &self.b
    }

    pub fn parameter_count(&self) -> usize {
        self.w.len() + self.b.len()
    }

    pub fn typ(&self) -> String {
        "Dense".into()
    }

    /// Returns `(z, a)`: the pre-activation and activated outputs.
    pub fn forward(&self, input: ArrayView1<f64>) -> Result<(Array1<f64>, Array1<f64>)> {
        if input.len() != self.input_size() {
            return Err(NNError::mismatch("layer input", self.input_size(), input.len()));
        }
        let z = input.dot(&self.w) + &self.b;
        let a = self.activation.forward(&z);
        Ok((z, a))
    }

    /// Back-propagates `da` (the gradient w.r.t. this layer's output) given the
    /// cached forward `input` and `z`. Does not touch the layer.
    pub fn backward(
        &self,
        input: ArrayView1<f64>,
        z: &Array1<f64>,
        da: &Array1<f64>,
    ) -> Result<Gradients> {
        if input.len() != self.input_size() {
            return Err(NNError::mismatch("layer input", self.input_size(), input.len()));
        }
        if z.len() != self.size() {
            return Err(NNError::mismatch("layer pre-activation", self.size(), z.len()));
        }
        if da.len() != self.size() {
            return Err(NNError::mismatch("layer output gradient", self.size(), da.len()));
        }
        let dz = self.activation.backward(z, da);
        let dw = outer(input, dz.view());
        let da = self.w.dot(&dz);
        Ok(Gradients { da, dw, db: dz })
    }

    /// `w -= rate·dw`, `b -= rate·db`. The only mutating operation on a layer.
    pub fn apply_gradient(&mut self, dw: &Array2<f64>, db: &Array1<f64>, rate: f64) -> Result<()> {
        if dw.nrows() != self.w.nrows() {
            return Err(NNError::mismatch("weight gradient rows", self.w.nrows(), dw.nrows()));
        }
        if dw.ncols() != self.w.ncols() {
            return Err(NNError::mismatch("weight gradient columns", self.w.ncols(), dw.ncols()));
        }
        if db.len() != self.b.len() {
            return Err(NNError::mismatch("bias gradient", self.b.len(), db.len()));
        }
        self.w.scaled_add(-rate, dw);
        self.b.scaled_add(-rate, db);
        Ok(())
    }
}

fn outer(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Array2<f64> {
    let column = a.insert_axis(Axis(1));
    let row = b.insert_axis(Axis(0));
    column.dot(&row)
}
