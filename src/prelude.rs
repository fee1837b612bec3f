pub use serde::{Deserialize, Serialize};
pub use std::fmt;

pub use ndarray::*;
pub use ndarray_rand::rand_distr::Uniform;
pub use ndarray_rand::RandomExt;
pub use rand::Rng;

pub use crate::error::*;
pub use crate::models::{layer, LayerSpec, Network};

// Internal re-exports
pub use crate::config::{ExperimentConfig, NetworkConfig, TrainerConfig};
pub use crate::core::{
    Activation,
    CancelToken,
    Dense,
    Example,
    Loss,
    LossHistory,
    Outcome,
    SgdTrainer,
    TrainReport,
};
