use anyhow::{Context, Result};
use rppal::gpio::{Gpio, InputPin};

/// Digital input levels the controller samples each poll tick.
///
/// Both signals are active low: `true` means pressed/engaged. No debouncing
/// is applied; these are bare level reads.
pub trait Inputs {
    fn switch_engaged(&mut self) -> bool;
    fn shutdown_pressed(&mut self) -> bool;
}

/// Raspberry Pi GPIO inputs with internal pull-ups, so an unwired or
/// released input reads high (inactive). Pins are BCM-numbered and revert
/// to their previous state when this value is dropped.
pub struct GpioInputs {
    switch: InputPin,
    shutdown: InputPin,
}

impl GpioInputs {
    pub fn new(switch_pin: u8, shutdown_pin: u8) -> Result<Self> {
        let gpio = Gpio::new().context("failed to open the GPIO controller")?;
        let switch = gpio
            .get(switch_pin)
            .with_context(|| format!("failed to acquire switch pin {switch_pin}"))?
            .into_input_pullup();
        let shutdown = gpio
            .get(shutdown_pin)
            .with_context(|| format!("failed to acquire shutdown pin {shutdown_pin}"))?
            .into_input_pullup();
        tracing::info!(switch_pin, shutdown_pin, "GPIO inputs ready");
        Ok(Self { switch, shutdown })
    }
}

impl Inputs for GpioInputs {
    fn switch_engaged(&mut self) -> bool {
        self.switch.is_low()
    }

    fn shutdown_pressed(&mut self) -> bool {
        self.shutdown.is_low()
    }
}
