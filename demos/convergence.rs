use microfit::{Buffer, LinearRegression, metrics};

fn main() -> Result<(), String> {
    env_logger::init();

    println!("=== Gradient Descent Convergence Example ===\n");

    // Training data on the line y = 2x + 2
    let inputs = Buffer::from([0.0, 1.0, 2.0, 3.0, 4.0]);
    let outputs = Buffer::from([2.0, 4.0, 6.0, 8.0, 10.0]);

    println!("Training data:");
    println!("x: {:?}", inputs.as_slice());
    println!("y: {:?}", outputs.as_slice());

    let mut model = LinearRegression::with_training_data(inputs.clone(), outputs.clone())?;
    model.train(1000);

    let predictions: Vec<f64> = inputs.iter().map(|&x| model.predict(x)).collect();
    let score = model.score(&inputs, &outputs)?;
    let mse = metrics::mean_squared_error(outputs.as_slice(), &predictions)?;

    println!("\nResults after 1000 epochs:");
    println!("Bias: {:.4}", model.bias);
    println!("Weight: {:.4}", model.weight);
    println!("R² score: {:.4}", score);
    println!("MSE: {:.6}", mse);

    println!("\nPredictions vs Actual:");
    for (i, (pred, actual)) in predictions.iter().zip(outputs.iter()).enumerate() {
        println!(
            "Sample {}: Predicted={:.3}, Actual={:.3}, Error={:.6}",
            i + 1,
            pred,
            actual,
            (pred - actual).abs()
        );
    }

    println!("\nPredictions on new data:");
    for x in [5.0, 6.5, 10.0] {
        println!("x={:.1}: Predicted y={:.3}", x, model.predict(x));
    }

    Ok(())
}
