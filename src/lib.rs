#![no_std]

mod cathode;
mod constants;

pub use cathode::CathodeMap;
pub use constants::*;
use embedded_hal::digital::{OutputPin, PinState};
use log::{debug, trace, warn};
use num_traits::ToPrimitive;

/// Decoder select lines by significance, D is the most significant bit.
pub struct DecoderPins<D, C, B, A> {
    pub d: D,
    pub c: C,
    pub b: B,
    pub a: A,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Ready,
}

/// What the select lines were last driven to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecoderOutput {
    Unknown,
    Blank,
    Digit(u8),
}

pub struct K155ID1<D, C, B, A> {
    pins: DecoderPins<D, C, B, A>,
    map: CathodeMap,
    state: DriverState,
    output: DecoderOutput,
}

impl<D, C, B, A, E> K155ID1<D, C, B, A>
where
    D: OutputPin<Error = E>,
    C: OutputPin<Error = E>,
    B: OutputPin<Error = E>,
    A: OutputPin<Error = E>,
{
    pub fn new(pins: DecoderPins<D, C, B, A>, map: CathodeMap) -> Self {
        Self {
            pins,
            map,
            state: DriverState::Uninitialized,
            output: DecoderOutput::Unknown,
        }
    }

    pub fn destroy(self) -> DecoderPins<D, C, B, A> {
        self.pins
    }

    /// Puts the select lines in a known state (blank) and readies the driver.
    ///
    /// Calling it again re-blanks. A failed write on an already ready driver
    /// leaves it ready with `output()` at `Unknown`.
    pub fn init(&mut self) -> Result<(), K155ID1Error<E>> {
        debug!("k155id1: init, cathode map {:?}", self.map.as_array());
        self.blank()?;
        self.state = DriverState::Ready;
        Ok(())
    }

    pub fn set_digit(&mut self, digit: u8) -> Result<(), K155ID1Error<E>> {
        self.ensure_ready()?;
        let pattern = match self.pattern(digit) {
            Ok(pattern) => pattern,
            Err(error) => {
                warn!("k155id1: digit {} out of range", digit);
                return Err(error);
            }
        };
        trace!("k155id1: digit {} -> {:04b}", digit, pattern);

        self.output = DecoderOutput::Unknown;
        self.write_pattern(pattern)?;
        self.output = DecoderOutput::Digit(digit);
        Ok(())
    }

    pub fn set_value<T>(&mut self, value: T) -> Result<(), K155ID1Error<E>>
    where
        T: ToPrimitive,
    {
        let digit = value.to_u8().ok_or(K155ID1Error::InvalidValue)?;
        // to_u8 truncates floats
        if value.to_f64() != Some(digit as f64) {
            return Err(K155ID1Error::InvalidValue);
        }
        self.set_digit(digit)
    }

    /// Shows an ASCII numeral; any other byte blanks the tube.
    pub fn display_ascii(&mut self, c: u8) -> Result<(), K155ID1Error<E>> {
        match c {
            b'0'..=b'9' => self.set_digit(c - b'0'),
            _ => self.reset(),
        }
    }

    /// Drives all select lines high, no cathode lit.
    pub fn reset(&mut self) -> Result<(), K155ID1Error<E>> {
        self.ensure_ready()?;
        self.blank()
    }

    /// Select-line pattern (bits D, C, B, A) that `set_digit(digit)` drives.
    pub fn pattern(&self, digit: u8) -> Result<u8, K155ID1Error<E>> {
        match self.map.canonical(digit) {
            Some(canonical) => Ok(BCD_STATES[canonical as usize]),
            None => Err(K155ID1Error::OutOfRange(digit)),
        }
    }

    /// Last state written through this driver. The pins are owned until
    /// `destroy`.
    pub fn output(&self) -> DecoderOutput {
        self.output
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn cathode_map(&self) -> &CathodeMap {
        &self.map
    }

    fn ensure_ready(&self) -> Result<(), K155ID1Error<E>> {
        match self.state {
            DriverState::Ready => Ok(()),
            DriverState::Uninitialized => Err(K155ID1Error::NotInitialized),
        }
    }

    fn blank(&mut self) -> Result<(), K155ID1Error<E>> {
        trace!("k155id1: blank");
        self.output = DecoderOutput::Unknown;
        self.write_pattern(BLANK)?;
        self.output = DecoderOutput::Blank;
        Ok(())
    }

    // D, C, B, A order
    fn write_pattern(&mut self, pattern: u8) -> Result<(), K155ID1Error<E>> {
        let [d, c, b, a] = input::ORDER.map(|bit| PinState::from(pattern & bit != 0));
        self.pins.d.set_state(d)?;
        self.pins.c.set_state(c)?;
        self.pins.b.set_state(b)?;
        self.pins.a.set_state(a)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum K155ID1Error<E> {
    PinError(E),
    OutOfRange(u8),
    InvalidValue,
    NotInitialized,
}

impl<E> From<E> for K155ID1Error<E> {
    fn from(error: E) -> Self {
        K155ID1Error::PinError(error)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for K155ID1Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            K155ID1Error::PinError(e) => write!(f, "decoder pin error: {:?}", e),
            K155ID1Error::OutOfRange(digit) => write!(f, "digit {} is outside 0..=9", digit),
            K155ID1Error::InvalidValue => write!(f, "value is not a whole number in 0..=255"),
            K155ID1Error::NotInitialized => write!(f, "decoder used before init"),
        }
    }
}
