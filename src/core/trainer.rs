//! Online stochastic gradient descent.
//!
//! Every example is pushed forward through the network, its loss gradient is
//! back-propagated layer by layer in reverse, and each layer is updated as soon
//! as its own gradients are known. Nothing is accumulated across examples.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::TrainerConfig;
use crate::core::cancel::CancelToken;
use crate::prelude::*;

/// A labelled training pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub input: Array1<f64>,
    pub target: Array1<f64>,
}

impl Example {
    pub fn new(input: impl Into<Vec<f64>>, target: impl Into<Vec<f64>>) -> Self {
        Self {
            input: Array1::from(input.into()),
            target: Array1::from(target.into()),
        }
    }
}

/// How a call to [`SgdTrainer::train`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Epoch loss dropped below the configured target.
    Converged,
    /// Ran every requested epoch.
    EpochsExhausted,
    Cancelled,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    pub outcome: Outcome,
    pub epochs_run: usize,
    /// Mean per-example loss of the last epoch; `None` if no epoch ran.
    pub final_loss: Option<f64>,
}

type EpochCallback<'a> = Box<dyn FnMut(usize, f64) + 'a>;

/// Trains a [`Network`] in place.
///
/// The trainer holds the only mutable borrow of the network for its whole
/// lifetime, so no prediction can interleave with an update.
pub struct SgdTrainer<'a> {
    network: &'a mut Network,
    learning_rate: f64,
    loss: Loss,
    target_loss: Option<f64>,
    log_every: usize,
    on_epoch: Option<EpochCallback<'a>>,
    last_outcome: Option<Outcome>,
}

impl<'a> SgdTrainer<'a> {
    pub fn new(network: &'a mut Network, learning_rate: f64, loss: Loss) -> Result<Self> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(NNError::InvalidConfiguration(format!(
                "Learning rate must be positive, got {}",
                learning_rate
            )));
        }
        Ok(Self {
            network,
            learning_rate,
            loss,
            target_loss: None,
            log_every: 0,
            on_epoch: None,
            last_outcome: None,
        })
    }

    pub fn from_config(network: &'a mut Network, config: &TrainerConfig) -> Result<Self> {
        let mut trainer = Self::new(network, config.learning_rate, config.loss)?.log_every(config.log_every);
        trainer.target_loss = config.target_loss;
        Ok(trainer)
    }

    /// Called after every epoch with the 1-based epoch index and the mean loss.
    pub fn on_epoch<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize, f64) + 'a,
    {
        self.on_epoch = Some(Box::new(callback));
        self
    }

    /// Stop early once an epoch's mean loss is below `threshold`.
    pub fn target_loss(mut self, threshold: f64) -> Self {
        self.target_loss = Some(threshold);
        self
    }

    /// Emit a debug event every `n` epochs; 0 disables it.
    pub fn log_every(mut self, n: usize) -> Self {
        self.log_every = n;
        self
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn network(&self) -> &Network {
        &*self.network
    }

    /// Terminal outcome of the most recent `train` call.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Runs up to `epochs` passes over `examples`, in the given order.
    ///
    /// `cancel` is polled before every epoch. Updates already applied are kept
    /// when training is cancelled; examples are validated before the first
    /// update, so a size mismatch leaves the network untouched. Zero epochs
    /// succeed without looking at `examples`.
    pub fn train(
        &mut self,
        cancel: &CancelToken,
        epochs: usize,
        examples: &[Example],
    ) -> Result<TrainReport> {
        let start = Instant::now();
        let mut report = TrainReport {
            outcome: Outcome::EpochsExhausted,
            epochs_run: 0,
            final_loss: None,
        };

        if epochs == 0 {
            self.last_outcome = Some(report.outcome);
            return Ok(report);
        }
        if cancel.is_cancelled() {
            return Err(self.cancelled(1, 0));
        }
        if let Err(err) = self.validate(examples) {
            return Err(self.fail(err, 0));
        }

        for epoch in 1..=epochs {
            if cancel.is_cancelled() {
                return Err(self.cancelled(epoch, report.epochs_run));
            }

            let loss = match self.run_epoch(examples) {
                Ok(loss) => loss,
                Err(err) => return Err(self.fail(err, epoch)),
            };
            report.epochs_run = epoch;
            report.final_loss = Some(loss);

            if let Some(callback) = self.on_epoch.as_mut() {
                callback(epoch, loss);
            }
            if self.log_every > 0 && epoch % self.log_every == 0 {
                debug!(epoch, epochs, loss, "epoch complete");
            }
            if self.target_loss.is_some_and(|threshold| loss < threshold) {
                report.outcome = Outcome::Converged;
                break;
            }
        }

        info!(
            outcome = ?report.outcome,
            epochs = report.epochs_run,
            loss = ?report.final_loss,
            elapsed = ?start.elapsed(),
            "training finished"
        );
        self.last_outcome = Some(report.outcome);
        Ok(report)
    }

    fn validate(&self, examples: &[Example]) -> Result<()> {
        let (input_size, output_size) = (self.network.input_size(), self.network.output_size());
        for example in examples {
            if example.input.len() != input_size {
                return Err(NNError::mismatch("example input", input_size, example.input.len()));
            }
            if example.target.len() != output_size {
                return Err(NNError::mismatch("example target", output_size, example.target.len()));
            }
        }
        Ok(())
    }

    fn cancelled(&mut self, epoch: usize, completed: usize) -> NNError {
        warn!(epoch, completed, "training cancelled");
        self.last_outcome = Some(Outcome::Cancelled);
        NNError::Cancelled { epoch }
    }

    fn fail(&mut self, err: NNError, epoch: usize) -> NNError {
        warn!(epoch, error = %err, "training failed");
        self.last_outcome = Some(Outcome::Failed);
        err
    }

    fn run_epoch(&mut self, examples: &[Example]) -> Result<f64> {
        if examples.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for example in examples {
            total += self.step(example)?;
        }
        Ok(total / examples.len() as f64)
    }

    /// One forward/backward pass with immediate per-layer updates.
    fn step(&mut self, example: &Example) -> Result<f64> {
        let trace = self.network.feed_forward(example.input.view())?;
        let (loss, mut da) = self.loss.criteria(&trace.output, &example.target)?;
        let rate = self.learning_rate;

        let cached = trace.inputs.iter().zip(trace.zs.iter());
        for (layer, (input, z)) in self.network.layers_mut().iter_mut().zip(cached).rev() {
            let grads = layer.backward(input.view(), z, &da)?;
            layer.apply_gradient(&grads.dw, &grads.db, rate)?;
            da = grads.da;
        }
        Ok(loss)
    }
}
