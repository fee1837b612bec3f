use std::path::Path;

use csv::Writer;

use crate::error::Result;

/// Per-epoch loss values, fed from [`SgdTrainer::on_epoch`](crate::core::trainer::SgdTrainer::on_epoch).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LossHistory {
    entries: Vec<(usize, f64)>,
}

impl LossHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, epoch: usize, loss: f64) {
        self.entries.push((epoch, loss));
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn losses(&self) -> Vec<f64> {
        self.entries.iter().map(|&(_, loss)| loss).collect()
    }

    pub fn first(&self) -> Option<f64> {
        self.entries.first().map(|&(_, loss)| loss)
    }

    pub fn last(&self) -> Option<f64> {
        self.entries.last().map(|&(_, loss)| loss)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes an `epoch,loss` CSV file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut wtr = Writer::from_path(path)?;
        wtr.write_record(["epoch", "loss"])?;
        for (epoch, loss) in &self.entries {
            wtr.write_record(&[epoch.to_string(), loss.to_string()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
