#![no_std]
//! Register model for the HopeRF RFM69 transceiver.
//!
//! Single-byte registers are plain structs deriving [`Register`],
//! [`ReadableRegister`] and [`WriteableRegister`]; their bit layout is
//! declared field by field, most-significant field first:
//!
//! ```
//! use rfm69_registers::*;
//!
//! #[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
//! #[register(address = 0x4E)]
//! pub struct Temperature {
//!     #[register(width = 4, fixed = 0)]
//!     _unused: Reserved,
//!     /// Starts a measurement
//!     #[register(width = 1, reset = false)]
//!     start: u8,
//!     #[register(width = 1, reset = false)]
//!     running: u8,
//!     #[register(width = 2, fixed = 0b01)]
//!     _tail: Reserved,
//! }
//!
//! let mut temperature = Temperature::reset_value();
//! temperature.set_start(true).unwrap();
//! assert_eq!(temperature.pack(), 0b0000_1001);
//! assert!(temperature.set_running(2u8).is_err());
//! ```
//!
//! A layout that does not fill the byte exactly is rejected at build time:
//!
//! ```compile_fail
//! use rfm69_registers::*;
//!
//! #[derive(Register, ReadableRegister, WriteableRegister)]
//! #[register(address = 0x01)]
//! pub struct Short {
//!     #[register(width = 3, reset = 0)]
//!     a: u8,
//!     #[register(width = 4, reset = 0)]
//!     b: u8,
//! }
//! ```
//!
//! ```compile_fail
//! use rfm69_registers::*;
//!
//! const WIDE: u8 = 0b100;
//!
//! #[derive(Register, ReadableRegister, WriteableRegister)]
//! #[register(address = 0x01)]
//! pub struct DefaultTooWide {
//!     #[register(width = 2, reset = WIDE)]
//!     a: u8,
//!     #[register(width = 6, fixed = 0)]
//!     _b: Reserved,
//! }
//! ```
//!
//! Settings spanning several registers are [`RegisterArea`]s, and
//! [`rfm69::Rfm69Configuration`] assembles everything into the ordered
//! programming burst.

extern crate self as rfm69_registers;

pub use rfm69_registers_derive::*;

pub mod area;
pub mod rfm69;
pub mod schema;

pub use area::RegisterArea;
pub use schema::{Field, Schema, SchemaDefect};

/// A single-byte register with a fixed field layout.
///
/// Usually derived. Every field needs a `width` of 1 to 8 bits and exactly
/// one of `reset` or `fixed`:
///
/// ```compile_fail
/// use rfm69_registers::*;
///
/// #[derive(Register)]
/// #[register(address = 0x01)]
/// pub struct Both {
///     #[register(width = 8, reset = 0, fixed = 0)]
///     a: u8,
/// }
/// ```
///
/// ```compile_fail
/// use rfm69_registers::*;
///
/// #[derive(Register)]
/// #[register(address = 0x01)]
/// pub struct Neither {
///     #[register(width = 8)]
///     a: u8,
/// }
/// ```
///
/// ```compile_fail
/// use rfm69_registers::*;
///
/// #[derive(Register)]
/// #[register(address = 0x01)]
/// pub struct Empty {
///     #[register(width = 0, reset = 0)]
///     a: u8,
///     #[register(width = 8, reset = 0)]
///     b: u8,
/// }
/// ```
///
/// ```compile_fail
/// use rfm69_registers::*;
///
/// #[derive(Register)]
/// #[register(address = 0x01)]
/// pub struct Wide {
///     #[register(width = 9, reset = 0)]
///     a: u8,
/// }
/// ```
///
/// Literal values must fit their field:
///
/// ```compile_fail
/// use rfm69_registers::*;
///
/// #[derive(Register)]
/// #[register(address = 0x01)]
/// pub struct Overflow {
///     #[register(width = 2, reset = 0b100)]
///     a: u8,
///     #[register(width = 6, fixed = 0)]
///     _b: Reserved,
/// }
/// ```
///
/// ```compile_fail
/// use rfm69_registers::*;
///
/// #[derive(Register)]
/// #[register(address = 0x01)]
/// pub struct FixedOverflow {
///     #[register(width = 4, reset = 0)]
///     a: u8,
///     #[register(width = 4, fixed = 0x1F)]
///     _b: Reserved,
/// }
/// ```
///
/// The same layout with values that fit compiles:
///
/// ```
/// use rfm69_registers::*;
///
/// #[derive(Register)]
/// #[register(address = 0x01)]
/// pub struct Fits {
///     #[register(width = 2, reset = 0b11)]
///     a: u8,
///     #[register(width = 6, fixed = 0b11_1111)]
///     _b: Reserved,
/// }
///
/// assert_eq!(Fits::reset_value().a(), 0b11);
/// ```
pub trait Register: Sized {
    /// Register address
    const ADDRESS: u8;
    /// Field layout shared by every instance
    const SCHEMA: Schema;

    /// Value on reset
    ///
    /// Fixed bit groups are [`Reserved`] and always pack to their declared
    /// constant.
    fn reset_value() -> Self;

    /// Current value of the named field.
    fn field(&self, name: &str) -> Option<u8>;

    /// Sets the named field.
    ///
    /// Values wider than the field fail with [`RegisterError::InvalidFieldValue`]
    /// and leave the register untouched.
    fn set_field(&mut self, name: &str, value: u8) -> RegisterResult<()>;
}

/// Register is readable
pub trait ReadableRegister: Register {
    /// Decodes a byte read from the chip. Fixed bits are ignored.
    fn unpack(byte: u8) -> Self;
}

/// Register is writeable
pub trait WriteableRegister: Register {
    /// Encodes the current field values.
    fn pack(&self) -> u8;
}

/// Alias for `Result<T, RegisterError>`
pub type RegisterResult<T> = Result<T, RegisterError>;

/// Possible error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    /// A value needs more bits than its field has
    #[error("value {value:#04x} does not fit the {width}-bit field `{field}`")]
    InvalidFieldValue {
        field: &'static str,
        width: u8,
        value: u8,
    },
    /// No field of that name on the register
    #[error("register {address:#04x} has no such field")]
    UnknownField { address: u8 },
    /// Failed to perform conversion from bits into an enum variant
    #[error("bits do not name a known variant")]
    ConversionError,
    /// A physical quantity that cannot be turned into register steps
    #[error("quantity cannot be expressed in register steps")]
    InvalidQuantity,
    /// Wrong number of values handed to [`Schema::pack`]
    #[error("expected {expected} field values, got {found}")]
    FieldCount { expected: usize, found: usize },
    /// Byte index outside a register area
    #[error("byte {index} is outside the {len}-byte register area")]
    IndexOutOfRange { index: usize, len: usize },
    /// Address not owned by the configuration
    #[error("register {0:#04x} is not part of the configuration")]
    UnknownAddress(u8),
    /// Malformed field layout, from [`Schema::try_from`]
    #[error(transparent)]
    Schema(#[from] SchemaDefect),
}

/// Placeholder for a fixed bit group.
///
/// The bits are written from the schema constant, never from the instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reserved;
