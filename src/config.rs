//! Serializable descriptions of a network topology and a training run.
//!
//! # Example
//!
//! ```json
//! {
//!   "network": {
//!     "input_size": 2,
//!     "seed": 7,
//!     "layers": [
//!       { "size": 5, "activation": "relu" },
//!       { "size": 1, "activation": "sigmoid" }
//!     ]
//!   },
//!   "trainer": {
//!     "learning_rate": 0.05,
//!     "loss": "squared_error",
//!     "epochs": 500,
//!     "log_every": 50
//!   },
//!   "examples": [
//!     { "input": [0, 0], "target": [0] },
//!     { "input": [1, 1], "target": [0] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use crate::prelude::*;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub layers: Vec<LayerSpec>,
    /// Fixed seed for weight initialization; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkConfig {
    pub fn build(&self) -> Result<Network> {
        match self.seed {
            Some(seed) => Network::seeded(self.input_size, &self.layers, seed),
            None => Network::from_entropy(self.input_size, &self.layers),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrainerConfig {
    pub learning_rate: f64,
    #[serde(default = "default_loss")]
    pub loss: Loss,
    #[serde(default)]
    pub epochs: usize,
    /// Stop early once the epoch loss falls below this value.
    #[serde(default)]
    pub target_loss: Option<f64>,
    /// Epochs between debug log lines; 0 disables them.
    #[serde(default)]
    pub log_every: usize,
}

fn default_loss() -> Loss {
    Loss::SquaredError
}

/// A training pair as written in a config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExampleConfig {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl From<&ExampleConfig> for Example {
    fn from(config: &ExampleConfig) -> Self {
        Example::new(config.input.clone(), config.target.clone())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    pub network: NetworkConfig,
    pub trainer: TrainerConfig,
    #[serde(default)]
    pub examples: Vec<ExampleConfig>,
}

impl ExperimentConfig {
    pub fn examples(&self) -> Vec<Example> {
        self.examples.iter().map(Example::from).collect()
    }
}

/// Reads an [`ExperimentConfig`] from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ExperimentConfig> {
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "network": {
            "input_size": 2,
            "seed": 3,
            "layers": [
                { "size": 4, "activation": "tanh" },
                { "size": 1, "activation": "sigmoid" }
            ]
        },
        "trainer": { "learning_rate": 0.1, "epochs": 20 },
        "examples": [
            { "input": [0.0, 1.0], "target": [1.0] },
            { "input": [1, 1], "target": [0] }
        ]
    }"#;

    #[test]
    fn test_parse_with_defaults() {
        let config: ExperimentConfig = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(config.network.layers[0], LayerSpec::new(4, Activation::Tanh));
        assert_eq!(config.trainer.loss, Loss::SquaredError);
        assert_eq!(config.trainer.target_loss, None);
        assert_eq!(config.trainer.log_every, 0);

        let examples = config.examples();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[1], Example::new([1.0, 1.0], [0.0]));

        let net = config.network.build().unwrap();
        assert_eq!(net.input_size(), 2);
        assert_eq!(net.output_size(), 1);
        assert_eq!(net, config.network.build().unwrap());
    }

    #[test]
    fn test_unknown_activation_is_rejected() {
        let bad = SAMPLE.replace("tanh", "softplus");
        assert!(serde_json::from_str::<ExperimentConfig>(&bad).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.trainer.epochs, 20);

        let missing = load_config("does/not/exist.json").unwrap_err();
        assert!(matches!(missing, NNError::Io(_)));
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        broken.write_all(b"{ not json").unwrap();
        assert!(matches!(load_config(broken.path()).unwrap_err(), NNError::Json(_)));
    }

    #[test]
    fn test_build_validates() {
        let config = NetworkConfig {
            input_size: 0,
            layers: vec![LayerSpec::new(1, Activation::Relu)],
            seed: Some(1),
        };
        assert!(config.build().unwrap_err().is_configuration());
    }
}
