use crate::prelude::*;

const EPSILON: f64 = 1e-15;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Loss {
    /// `½ Σ (ŷ − y)²`
    SquaredError,
    /// Binary cross-entropy, for sigmoid outputs.
    CrossEntropy,
}

impl Loss {
    pub fn name(&self) -> &'static str {
        match self {
            Loss::SquaredError => "squared_error",
            Loss::CrossEntropy => "cross_entropy",
        }
    }

    pub fn forward(&self, y_hat: &Array1<f64>, y: &Array1<f64>) -> Result<f64> {
        check_shapes(y_hat, y)?;
        Ok(match self {
            Loss::SquaredError => 0.5 * (y_hat - y).mapv(|d| d * d).sum(),
            Loss::CrossEntropy => {
                let y_hat = y_hat.mapv(clamp_probability);
                -(y * &y_hat.mapv(f64::ln) + (1.0 - y) * &(1.0 - &y_hat).mapv(f64::ln)).sum()
            }
        })
    }

    /// Gradient with respect to the prediction `ŷ`.
    pub fn gradient(&self, y_hat: &Array1<f64>, y: &Array1<f64>) -> Result<Array1<f64>> {
        check_shapes(y_hat, y)?;
        Ok(match self {
            Loss::SquaredError => y_hat - y,
            Loss::CrossEntropy => {
                let y_hat = y_hat.mapv(clamp_probability);
                (&y_hat - y) / (&y_hat * &(1.0 - &y_hat))
            }
        })
    }

    /// Loss value and gradient in one pass, as the trainer consumes them.
    pub fn criteria(&self, y_hat: &Array1<f64>, y: &Array1<f64>) -> Result<(f64, Array1<f64>)> {
        Ok((self.forward(y_hat, y)?, self.gradient(y_hat, y)?))
    }
}

impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_shapes(y_hat: &Array1<f64>, y: &Array1<f64>) -> Result<()> {
    if y_hat.len() != y.len() {
        return Err(NNError::mismatch("loss target", y_hat.len(), y.len()));
    }
    Ok(())
}

fn clamp_probability(p: f64) -> f64 {
    p.max(EPSILON).min(1.0 - EPSILON)
}
