//! Frequency, bit rate and deviation words spanning several registers.

use core::ops::{Deref, DerefMut};

use crate::area::{round_steps, RegisterArea};
use crate::rfm69::constants::{hw, reg, rf};
use crate::{RegisterError, RegisterResult};

/// `round(numerator / denominator)` on integers, ties rounded up.
fn div_round(numerator: u128, denominator: u128) -> u64 {
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}

macro_rules! area_newtype {
    ($name:ident, $len:literal) => {
        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Deref for $name {
            type Target = RegisterArea<$len>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

/// Carrier frequency, `RegFrfMsb..RegFrfLsb`, in steps of [`hw::FSTEP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frequency(RegisterArea<3>);

area_newtype!(Frequency, 3);

impl Frequency {
    const DEFAULT: RegisterArea<3> = RegisterArea::new(
        reg::FRFMSB,
        [rf::FRFMSB_915, rf::FRFMID_915, rf::FRFLSB_915],
    );

    /// 915 MHz
    pub const fn new() -> Self {
        Self(Self::DEFAULT)
    }

    pub fn set_mhz(&mut self, mhz: f64) -> RegisterResult<()> {
        let word = round_steps(mhz * 1e6, hw::FSTEP)?;
        tracing::debug!(mhz, word, "carrier frequency");
        self.set_word(word);
        Ok(())
    }

    /// Exact integer variant of [`Frequency::set_mhz`].
    pub fn set_hz(&mut self, hz: u64) {
        let word = div_round(u128::from(hz) << hw::FSTEP_SHIFT, u128::from(hw::FXOSC));
        tracing::debug!(hz, word, "carrier frequency");
        self.set_word(word);
    }

    pub fn mhz(&self) -> f64 {
        self.word() as f64 * hw::FSTEP / 1e6
    }
}

/// Bit rate, `RegBitrateMsb..RegBitrateLsb`, as FXOSC ticks per bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitrate(RegisterArea<2>);

area_newtype!(Bitrate, 2);

impl Bitrate {
    const DEFAULT: RegisterArea<2> = RegisterArea::new(
        reg::BITRATEMSB,
        [rf::BITRATEMSB_4800, rf::BITRATELSB_4800],
    );

    /// 4800 bps
    pub const fn new() -> Self {
        Self(Self::DEFAULT)
    }

    pub fn set_bps(&mut self, bps: u32) -> RegisterResult<()> {
        if bps == 0 {
            return Err(RegisterError::InvalidQuantity);
        }
        let word = div_round(u128::from(hw::FXOSC), u128::from(bps));
        tracing::debug!(bps, word, "bit rate");
        self.set_word(word);
        Ok(())
    }

    /// Fractional bit rates, e.g. `1.2` for 1200 bps.
    pub fn set_kbps(&mut self, kbps: f64) -> RegisterResult<()> {
        let word = round_steps(f64::from(hw::FXOSC), kbps * 1000.0)?;
        tracing::debug!(kbps, word, "bit rate");
        self.set_word(word);
        Ok(())
    }

    /// Effective bit rate; infinite for a zero word.
    pub fn bps(&self) -> f64 {
        f64::from(hw::FXOSC) / self.word() as f64
    }
}

/// FSK frequency deviation, `RegFdevMsb..RegFdevLsb`, in steps of [`hw::FSTEP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deviation(RegisterArea<2>);

area_newtype!(Deviation, 2);

impl Deviation {
    const DEFAULT: RegisterArea<2> = RegisterArea::new(
        reg::FDEVMSB,
        [rf::FDEVMSB_5000, rf::FDEVLSB_5000],
    );

    /// 5 kHz
    pub const fn new() -> Self {
        Self(Self::DEFAULT)
    }

    pub fn set_khz(&mut self, khz: f64) -> RegisterResult<()> {
        let word = round_steps(khz * 1000.0, hw::FSTEP)?;
        tracing::debug!(khz, word, "frequency deviation");
        self.set_word(word);
        Ok(())
    }

    /// Exact integer variant of [`Deviation::set_khz`].
    pub fn set_hz(&mut self, hz: u32) {
        let word = div_round(u128::from(hz) << hw::FSTEP_SHIFT, u128::from(hw::FXOSC));
        tracing::debug!(hz, word, "frequency deviation");
        self.set_word(word);
    }

    pub fn khz(&self) -> f64 {
        self.word() as f64 * hw::FSTEP / 1000.0
    }
}
