//! Linear models trained on-device style: small fixed datasets, a fixed
//! number of gradient-descent passes, constant-time prediction afterwards.
//!
//! # Examples
//!
//! ```rust
//! use microfit::{Buffer, LinearRegression};
//!
//! let inputs = Buffer::from([0.0, 1.0, 2.0, 3.0, 4.0]);
//! let outputs = Buffer::from([2.0, 4.0, 6.0, 8.0, 10.0]);
//!
//! let mut model = LinearRegression::with_training_data(inputs, outputs).unwrap();
//! model.train(1000);
//! assert!((model.predict(2.0) - 6.0).abs() < 0.001);
//! ```

mod linear_regression;

pub use linear_regression::LinearRegression;
