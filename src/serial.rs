//! Keycode input: one byte at a time from the keypad's serial link.
//!
//! A [`KeycodeSource`] yields `Ok(Some(byte))` for a keycode, `Ok(None)` when the read
//! timed out with nothing to do, and `Err` for a link that cannot be used any more.
//! On the Pico the source is [`UartKeycodes`]; host tests and previews use
//! [`ScriptedKeycodes`].

#[cfg(feature = "host")]
use std::collections::VecDeque;

use embassy_time::Duration;

use crate::Result;
#[cfg(feature = "host")]
use crate::{Error, visor::StopSignal};

/// Serial speed of the keypad link (`9600` baud, 8N1).
pub const BAUD_RATE_DEFAULT: u32 = 9600;

/// How long one read waits for a byte before reporting "nothing yet" (`1 s`).
pub const READ_TIMEOUT_DEFAULT: Duration = Duration::from_secs(1);

/// A stream of single-byte keycodes.
pub trait KeycodeSource {
    /// Wait for the next keycode, at most one read timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerialDisconnected`](crate::Error::SerialDisconnected) when the
    /// link failed and [`Error::SerialClosed`](crate::Error::SerialClosed) after
    /// [`close`](Self::close).
    async fn read_keycode(&mut self) -> Result<Option<u8>>;

    /// Release the link. Closing twice is harmless.
    fn close(&mut self);
}

// ============================================================================
// UART (firmware)
// ============================================================================

#[cfg(not(feature = "host"))]
pub use uart_keycodes::UartKeycodes;

#[cfg(not(feature = "host"))]
mod uart_keycodes {
    use defmt::{info, warn};
    use embassy_rp::uart::{self, Async, UartRx};
    use embassy_time::{Duration, with_timeout};

    use super::KeycodeSource;
    use crate::{Error, Result};

    /// Keycodes from the receive half of an RP2040 UART.
    ///
    /// Each read waits for one byte for at most the read timeout. Overrun, parity, and
    /// framing errors drop the byte and count as a timeout; a line break means the
    /// keypad is gone.
    pub struct UartKeycodes<'d> {
        uart: Option<UartRx<'d, Async>>,
        read_timeout: Duration,
    }

    impl<'d> UartKeycodes<'d> {
        /// Wrap an async UART receiver already configured for the keypad's baud rate.
        #[must_use]
        pub const fn new(uart: UartRx<'d, Async>, read_timeout: Duration) -> Self {
            Self {
                uart: Some(uart),
                read_timeout,
            }
        }
    }

    impl KeycodeSource for UartKeycodes<'_> {
        async fn read_keycode(&mut self) -> Result<Option<u8>> {
            let uart = self.uart.as_mut().ok_or(Error::SerialClosed)?;
            let mut buffer = [0_u8; 1];
            match with_timeout(self.read_timeout, uart.read(&mut buffer)).await {
                Err(_) => Ok(None),
                Ok(Ok(())) => Ok(Some(buffer[0])),
                Ok(Err(uart::Error::Break)) => Err(Error::SerialDisconnected),
                Ok(Err(err)) => {
                    warn!("UartKeycodes: dropped byte ({})", defmt::Debug2Format(&err));
                    Ok(None)
                }
            }
        }

        fn close(&mut self) {
            if self.uart.take().is_some() {
                info!("UartKeycodes: closed");
            }
        }
    }
}

// ============================================================================
// Scripted (host)
// ============================================================================

/// Replays a fixed list of reads, then asks the loop to stop.
///
/// `None` entries stand for reads that timed out. Once the script is used up every read
/// raises the stop signal and returns `Ok(None)`, unless
/// [`disconnect_at_end`](Self::disconnect_at_end) was set, in which case it fails with
/// [`Error::SerialDisconnected`].
///
/// ```rust
/// use embassy_futures::block_on;
/// use led_visor::serial::{KeycodeSource, ScriptedKeycodes};
/// use led_visor::visor::StopSignal;
///
/// let stop = StopSignal::new();
/// let mut keycodes = ScriptedKeycodes::from_bytes(&[0x01], &stop);
///
/// assert_eq!(block_on(keycodes.read_keycode()).unwrap(), Some(0x01));
/// assert_eq!(block_on(keycodes.read_keycode()).unwrap(), None);
/// assert!(stop.signaled());
/// ```
#[cfg(feature = "host")]
pub struct ScriptedKeycodes<'a> {
    script: VecDeque<Option<u8>>,
    stop: &'a StopSignal,
    disconnect_at_end: bool,
    closed: bool,
}

#[cfg(feature = "host")]
impl<'a> ScriptedKeycodes<'a> {
    /// Replay `script`, where `None` is a timed-out read.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Option<u8>>, stop: &'a StopSignal) -> Self {
        Self {
            script: script.into_iter().collect(),
            stop,
            disconnect_at_end: false,
            closed: false,
        }
    }

    /// Replay `bytes` with no timeouts in between.
    #[must_use]
    pub fn from_bytes(bytes: &[u8], stop: &'a StopSignal) -> Self {
        Self::new(bytes.iter().copied().map(Some), stop)
    }

    /// Fail with a disconnect instead of stopping once the script runs out.
    #[must_use]
    pub fn disconnect_at_end(mut self) -> Self {
        self.disconnect_at_end = true;
        self
    }

    /// Reads not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Whether [`close`](KeycodeSource::close) has been called.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(feature = "host")]
impl KeycodeSource for ScriptedKeycodes<'_> {
    async fn read_keycode(&mut self) -> Result<Option<u8>> {
        if self.closed {
            return Err(Error::SerialClosed);
        }
        match self.script.pop_front() {
            Some(read) => Ok(read),
            None if self.disconnect_at_end => Err(Error::SerialDisconnected),
            None => {
                self.stop.signal(());
                Ok(None)
            }
        }
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
