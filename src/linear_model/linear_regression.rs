use log::debug;

use crate::Buffer;
use crate::metrics;

/// Univariate linear regression `y = bias + weight * x`, trained with batch
/// gradient descent over a fixed training set.
#[derive(Clone, Debug)]
pub struct LinearRegression {
    pub bias: f64,
    pub weight: f64,
    learning_rate: f64,
    inputs: Buffer<f64>,
    outputs: Buffer<f64>,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            bias: 0.0,
            weight: 0.0,
            learning_rate: 0.01,
            inputs: Buffer::new(),
            outputs: Buffer::new(),
        }
    }

    /// Creates a model with training data already loaded.
    pub fn with_training_data(
        inputs: Buffer<f64>,
        outputs: Buffer<f64>,
    ) -> Result<Self, String> {
        let mut model = Self::new();
        model.load_training_data(inputs, outputs)?;
        Ok(model)
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        if learning_rate <= 0.0 {
            panic!("learning_rate must be positive, got {}", learning_rate);
        }
        self.learning_rate = learning_rate;
        self
    }

    /// Stores the training set. Each index `i` is treated as the pair
    /// `(inputs[i], outputs[i])`, so the two buffers must have equal length.
    pub fn load_training_data(
        &mut self,
        inputs: Buffer<f64>,
        outputs: Buffer<f64>,
    ) -> Result<(), String> {
        if inputs.len() != outputs.len() {
            return Err(format!(
                "Number of samples in inputs ({}) and outputs ({}) must match",
                inputs.len(),
                outputs.len()
            ));
        }

        debug!("loaded {} training pairs", inputs.len());
        self.inputs = inputs;
        self.outputs = outputs;
        Ok(())
    }

    /// Runs exactly `epochs` gradient-descent passes over the full training
    /// set. Each pass visits every training pair in index order and moves
    /// `bias` and `weight` against that pair's error gradient, scaled by the
    /// learning rate. With an empty training set this is a no-op. There is no
    /// convergence check or early stopping.
    pub fn train(&mut self, epochs: usize) {
        if self.inputs.is_empty() {
            return;
        }

        for _ in 0..epochs {
            for (x, y) in self.inputs.iter().zip(self.outputs.iter()) {
                let error = self.bias + self.weight * x - y;
                self.bias -= self.learning_rate * error;
                self.weight -= self.learning_rate * error * x;
            }
        }

        debug!(
            "trained {} epochs: bias={:.6}, weight={:.6}",
            epochs, self.bias, self.weight
        );
    }

    /// Predicted value for `x` under the current parameters. Pure; before any
    /// training this is the all-zero line.
    pub fn predict(&self, x: f64) -> f64 {
        self.bias + self.weight * x
    }

    /// R² score of the current parameters against a labelled set.
    pub fn score(&self, inputs: &Buffer<f64>, outputs: &Buffer<f64>) -> Result<f64, String> {
        let predictions: Vec<f64> = inputs.iter().map(|&x| self.predict(x)).collect();
        metrics::r2_score(outputs.as_slice(), &predictions)
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}
