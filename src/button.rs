//! Debounced push button, used on the visor as the stop button.
//!
//! See [`Button`] for usage example.

use defmt::info;
use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Timer};

use crate::visor::StopSignal;

/// Debounce delay for the button.
const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(10);

/// How often the pin is sampled while waiting for an edge.
const BUTTON_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. Pin reads HIGH when pressed.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Uses internal pull-up resistor. Pin reads LOW when pressed.
    /// Recommended for Pico 2, whose pull-downs can stick HIGH (erratum E9).
    Ground,
}

/// A debounced button on a GPIO pin.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use led_visor::button::{Button, PressedTo};
/// use led_visor::visor::StopSignal;
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// static STOP: StopSignal = StopSignal::new();
///
/// async fn example(p: embassy_rp::Peripherals) {
///     let button = Button::new(p.PIN_13, PressedTo::Ground);
///     button.signal_on_press(&STOP).await;
/// }
/// ```
pub struct Button<'a> {
    input: Input<'a>,
    pressed_to: PressedTo,
}

impl<'a> Button<'a> {
    /// Configure `pin` with the pull resistor that matches the wiring.
    #[must_use]
    pub fn new<P: embassy_rp::gpio::Pin>(pin: Peri<'a, P>, pressed_to: PressedTo) -> Self {
        let pull = match pressed_to {
            PressedTo::Voltage => Pull::Down,
            PressedTo::Ground => Pull::Up,
        };
        Self {
            input: Input::new(pin, pull),
            pressed_to,
        }
    }

    /// Returns whether the button is currently pressed.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        match self.pressed_to {
            PressedTo::Voltage => self.input.is_high(),
            PressedTo::Ground => self.input.is_low(),
        }
    }

    async fn wait_for_stable(&mut self, pressed: bool) {
        loop {
            while self.is_pressed() != pressed {
                Timer::after(BUTTON_POLL_INTERVAL).await;
            }
            Timer::after(BUTTON_DEBOUNCE_DELAY).await;
            if self.is_pressed() == pressed {
                break;
            }
            // bounce
        }
    }

    /// Waits for the next press (button goes down, debounced).
    /// Does not wait for release.
    pub async fn wait_for_press(&mut self) {
        self.wait_for_stable(false).await; // edge-triggered
        self.wait_for_stable(true).await;
    }

    /// Wait for one press, then raise `stop`.
    ///
    /// The visor loop sees the request before its next read.
    pub async fn signal_on_press(mut self, stop: &StopSignal) {
        self.wait_for_press().await;
        info!("Button: stop requested");
        stop.signal(());
    }
}
