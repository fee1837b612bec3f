// src/core.rs
pub mod activations;
pub mod cancel;
pub mod layers;
pub mod losses;
pub mod output;
pub mod trainer;

// Re-export commonly used items
pub use activations::Activation;
pub use cancel::CancelToken;
pub use layers::{Dense, Gradients};
pub use losses::Loss;
pub use output::LossHistory;
pub use trainer::{Example, Outcome, SgdTrainer, TrainReport};
