use crate::prelude::*;

/// Element-wise activation applied after a layer's affine transform.
///
/// Derivatives are evaluated at the pre-activation value `z`, which is what
/// [`Dense::backward`] receives from the forward cache.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Linear,
    Relu,
    Sigmoid,
    Tanh,
}

impl Activation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Relu => "relu",
            Self::Sigmoid => "sigmoid",
            Self::Tanh => "tanh",
        }
    }

    /// Scalar forward value `f(x)`.
    pub fn f(&self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Relu => relu(x),
            Self::Sigmoid => sigmoid(x),
            Self::Tanh => x.tanh(),
        }
    }

    /// Scalar slope `f'(z)`.
    pub fn derivative(&self, z: f64) -> f64 {
        match self {
            Self::Linear => 1.0,
            // tie at zero resolves to 0
            Self::Relu => {
                if z > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Sigmoid => {
                let s = sigmoid(z);
                s * (1.0 - s)
            }
            Self::Tanh => {
                let t = z.tanh();
                1.0 - t * t
            }
        }
    }

    pub fn forward(&self, z: &Array1<f64>) -> Array1<f64> {
        match self {
            Self::Linear => z.clone(),
            _ => z.mapv(|z| self.f(z)),
        }
    }

    /// Chain rule through the activation: `da ⊙ f'(z)`.
    pub fn backward(&self, z: &Array1<f64>, da: &Array1<f64>) -> Array1<f64> {
        match self {
            Self::Linear => da.clone(),
            _ => da * &z.mapv(|z| self.derivative(z)),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn relu(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

// Split on sign so exp() only ever sees non-positive arguments.
fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
