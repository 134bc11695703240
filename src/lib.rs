//! Small on-device regression toolkit: an exact-capacity growable buffer and
//! a univariate linear-regression model trained with gradient descent.
//!
//! Modelled after the memory discipline of constrained targets: the buffer
//! always allocates exactly as many elements as it holds, allocation failures
//! are reported rather than aborting, and training runs a fixed number of
//! passes with no hidden allocation.

pub mod buffer;
pub mod linear_model;
pub mod metrics;

pub use buffer::Buffer;
pub use linear_model::LinearRegression;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_types_work() {
        let buffer = Buffer::from([1.0, 2.0, 3.0]);
        let model = LinearRegression::new();
        assert_eq!(buffer.len(), 3);
        assert_eq!(model.predict(1.0), 0.0);
    }
}
