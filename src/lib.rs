//! A fully-connected feedforward neural network with an online SGD trainer.
//!
//! ```
//! use ffnet::prelude::*;
//!
//! let mut net = Network::seeded(2, &[layer(10, Activation::Relu), layer(1, Activation::Sigmoid)], 1)?;
//! let examples = [Example::new([0.0, 1.0], [1.0]), Example::new([1.0, 1.0], [0.0])];
//!
//! SgdTrainer::new(&mut net, 0.05, Loss::SquaredError)?
//!     .train(&CancelToken::new(), 10, &examples)?;
//! let y = net.predict(&[1.0, 0.0])?;
//! assert_eq!(y.len(), 1);
//! # Ok::<(), ffnet::error::NNError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod prelude;
pub mod utils;

// Re-export types
pub use crate::core::{Activation, CancelToken, Dense, Example, Loss, SgdTrainer};
pub use crate::error::{NNError, Result};
pub use crate::models::{layer, LayerSpec, Network};
