//! Simulated version of the embedded deployment: a model trained once at
//! startup predicts room temperature from an analog voltage reading, and
//! discrete button/timer events trigger predictions. The 10-bit ADC is
//! simulated with a noisy random source.

use log::info;
use microfit::{Buffer, LinearRegression};
use rand::Rng;

const ADC_MAX: f64 = 1023.0;
const VREF: f64 = 5.0;

/// External triggers the dispatcher reacts to.
#[derive(Clone, Copy, Debug)]
enum Event {
    ButtonPressed,
    TimerElapsed,
}

/// Stand-in for the analog-to-digital converter: 10-bit readings around a
/// drifting setpoint.
struct SimulatedAdc {
    setpoint: u16,
}

impl SimulatedAdc {
    fn new() -> Self {
        Self { setpoint: 512 }
    }

    fn read(&mut self) -> u16 {
        let mut rng = rand::thread_rng();
        self.setpoint = rng.gen_range(self.setpoint.saturating_sub(40)..=(self.setpoint + 40).min(1023));
        let noise: i32 = rng.gen_range(-8..=8);
        (self.setpoint as i32 + noise).clamp(0, ADC_MAX as i32) as u16
    }
}

/// Scales a raw 10-bit reading to a voltage in the 0..=VREF range.
fn to_voltage(raw: u16) -> f64 {
    raw as f64 / ADC_MAX * VREF
}

fn predict_temperature(model: &LinearRegression, adc: &mut SimulatedAdc) {
    let raw = adc.read();
    let voltage = to_voltage(raw);
    let predicted = model.predict(voltage);
    println!("Temp: {}", predicted.round() as i64);
}

fn main() -> Result<(), String> {
    env_logger::init();

    // Calibration points mapping sensor voltage to temperature.
    let inputs = Buffer::from([0.0, 1.0, 2.0, 3.0, 4.0]);
    let outputs = Buffer::from([-50.0, 50.0, 150.0, 250.0, 350.0]);

    let mut model = LinearRegression::with_training_data(inputs, outputs)?;
    model.train(1000);
    info!(
        "model trained: bias={:.3}, weight={:.3}",
        model.bias, model.weight
    );

    let mut adc = SimulatedAdc::new();

    // Startup prediction, then a scripted sequence of external events in
    // place of hardware interrupts.
    predict_temperature(&model, &mut adc);

    let events = [
        Event::TimerElapsed,
        Event::ButtonPressed,
        Event::ButtonPressed,
        Event::TimerElapsed,
        Event::ButtonPressed,
        Event::TimerElapsed,
    ];

    for event in events {
        info!("dispatching {:?}", event);
        match event {
            Event::ButtonPressed | Event::TimerElapsed => {
                predict_temperature(&model, &mut adc);
            }
        }
    }

    Ok(())
}
