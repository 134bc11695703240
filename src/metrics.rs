pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, String> {
    validate_lengths(y_true, y_pred)?;

    let sum: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p) * (t - p))
        .sum();
    Ok(sum / y_true.len() as f64)
}

pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, String> {
    validate_lengths(y_true, y_pred)?;

    let sum: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).abs())
        .sum();
    Ok(sum / y_true.len() as f64)
}

pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64, String> {
    validate_lengths(y_true, y_pred)?;

    let y_mean = y_true.iter().sum::<f64>() / y_true.len() as f64;
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p) * (t - p))
        .sum();
    let ss_tot: f64 = y_true.iter().map(|t| (t - y_mean) * (t - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // Perfect prediction when variance is zero
    }

    Ok(1.0 - ss_res / ss_tot)
}

fn validate_lengths(y_true: &[f64], y_pred: &[f64]) -> Result<(), String> {
    if y_true.len() != y_pred.len() {
        return Err("y_true and y_pred must have the same length".to_string());
    }
    if y_true.is_empty() {
        return Err("y_true and y_pred must not be empty".to_string());
    }
    Ok(())
}
