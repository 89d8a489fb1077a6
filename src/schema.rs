//! Bit layout of a single 8-bit register.
//!
//! A [`Schema`] is an ordered list of [`Field`]s, most-significant field first,
//! whose widths tile exactly one byte. Register types share one static schema
//! and keep only their current field values per instance; all bit packing goes
//! through the schema.

use intbits::Bits;

use crate::{RegisterError, RegisterResult};

/// Number of bits in one register.
pub const REGISTER_BITS: u8 = 8;

/// A malformed register layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SchemaDefect {
    /// More groups than there are bits
    #[error("a register holds at most 8 fields")]
    TooManyFields,
    /// The field widths do not add up to one byte
    #[error("field widths sum to {total} bits, expected 8")]
    WidthMismatch { total: u32 },
    /// A field is empty or wider than a byte
    #[error("field {index} is {width} bits wide, expected 1..=8")]
    InvalidWidth { index: usize, width: u8 },
    /// A default or constant value needs more bits than its field has
    #[error("default of field {index} does not fit its width")]
    DefaultOutOfRange { index: usize },
}

/// One bit group of a register.
///
/// `name == None` marks a fixed group whose bits are always written as
/// `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: Option<&'static str>,
    pub width: u8,
    pub default: u8,
}

impl Field {
    /// A mutable field with a power-on default.
    pub const fn named(name: &'static str, width: u8, default: u8) -> Self {
        Self {
            name: Some(name),
            width,
            default,
        }
    }

    /// Constant bits written on every pack.
    pub const fn fixed(width: u8, value: u8) -> Self {
        Self {
            name: None,
            width,
            default: value,
        }
    }

    pub const fn is_fixed(&self) -> bool {
        self.name.is_none()
    }

    /// Largest value the field can hold.
    pub const fn max(&self) -> u8 {
        ((1u16 << self.width) - 1) as u8
    }

    pub const fn fits(&self, value: u8) -> bool {
        (value as u16) < (1u16 << self.width)
    }

    /// Returns `value` if it fits, otherwise [`RegisterError::InvalidFieldValue`].
    /// Values are never truncated.
    pub fn check(&self, value: u8) -> RegisterResult<u8> {
        if self.fits(value) {
            return Ok(value);
        }

        let field = self.name.unwrap_or("reserved");
        tracing::debug!(field, width = self.width, value, "rejected field value");

        Err(RegisterError::InvalidFieldValue {
            field,
            width: self.width,
            value,
        })
    }
}

/// Ordered field layout of one register, most-significant field first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Schema {
    fields: &'static [Field],
}

impl Schema {
    /// Builds a schema, failing const evaluation on a malformed layout.
    ///
    /// Use it in a `const` so a bad layout stops the build:
    ///
    /// ```compile_fail
    /// use rfm69_registers::{Field, Schema};
    ///
    /// const SEVEN_BITS: Schema = Schema::new(&[Field::named("a", 3, 0), Field::named("b", 4, 0)]);
    /// let _ = SEVEN_BITS;
    /// ```
    pub const fn new(fields: &'static [Field]) -> Self {
        match Self::try_new(fields) {
            Ok(schema) => schema,
            Err(SchemaDefect::TooManyFields) => {
                panic!("a register holds at most 8 fields")
            }
            Err(SchemaDefect::WidthMismatch { .. }) => {
                panic!("register field widths must sum to exactly 8 bits")
            }
            Err(SchemaDefect::InvalidWidth { .. }) => {
                panic!("register field width must be between 1 and 8 bits")
            }
            Err(SchemaDefect::DefaultOutOfRange { .. }) => {
                panic!("register field default does not fit its width")
            }
        }
    }

    /// Checked constructor for layouts assembled at runtime.
    ///
    /// See also the [`TryFrom`] impl, which reports through [`RegisterError`].
    pub const fn try_new(fields: &'static [Field]) -> Result<Self, SchemaDefect> {
        if fields.len() > REGISTER_BITS as usize {
            return Err(SchemaDefect::TooManyFields);
        }

        let mut total: u32 = 0;
        let mut index = 0;

        while index < fields.len() {
            let field = &fields[index];
            if field.width == 0 || field.width > REGISTER_BITS {
                return Err(SchemaDefect::InvalidWidth {
                    index,
                    width: field.width,
                });
            }
            if !field.fits(field.default) {
                return Err(SchemaDefect::DefaultOutOfRange { index });
            }
            total += field.width as u32;
            index += 1;
        }

        if total != REGISTER_BITS as u32 {
            return Err(SchemaDefect::WidthMismatch { total });
        }

        Ok(Self { fields })
    }

    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total bit width. Always 8 for a constructed schema.
    pub const fn width(&self) -> u32 {
        let mut total = 0;
        let mut index = 0;
        while index < self.fields.len() {
            total += self.fields[index].width as u32;
            index += 1;
        }
        total
    }

    /// Index of the named field.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == Some(name))
    }

    pub fn get(&self, index: usize) -> Option<&'static Field> {
        self.fields.get(index)
    }

    /// Bit position of the least-significant bit of field `index`.
    pub fn offset(&self, index: usize) -> Option<u8> {
        let used: u8 = self.fields.get(..=index)?.iter().map(|field| field.width).sum();
        Some(REGISTER_BITS - used)
    }

    /// In-place mask of field `index`.
    pub fn mask(&self, index: usize) -> Option<u8> {
        let field = self.get(index)?;
        Some(field.max() << self.offset(index)?)
    }

    /// Number of fields that carry a value, i.e. everything but fixed groups.
    pub fn named_len(&self) -> usize {
        self.fields.iter().filter(|field| !field.is_fixed()).count()
    }

    /// Packs the named field values, given in declaration order, into a byte.
    ///
    /// Fixed groups contribute their constant. Exactly one value per named
    /// field is required, and each must fit its field; nothing is truncated
    /// or filled in.
    pub fn pack(&self, named: &[u8]) -> RegisterResult<u8> {
        let expected = self.named_len();
        if named.len() != expected {
            tracing::debug!(expected, found = named.len(), "wrong number of field values");
            return Err(RegisterError::FieldCount {
                expected,
                found: named.len(),
            });
        }

        for (field, &value) in self.fields.iter().filter(|field| !field.is_fixed()).zip(named) {
            field.check(value)?;
        }

        Ok(self.pack_validated(named))
    }

    /// [`Schema::pack`] without the checks, for derived registers whose
    /// setters already validated every value.
    #[doc(hidden)]
    pub fn pack_validated(&self, named: &[u8]) -> u8 {
        let mut named = named.iter().copied();
        let mut byte = 0u8;
        let mut high = usize::from(REGISTER_BITS);

        for field in self.fields {
            let low = high - usize::from(field.width);
            let value = match field.name {
                Some(_) => named.next().unwrap_or(field.default),
                None => field.default,
            };
            byte.set_bits(low..high, value & field.max());
            high = low;
        }

        byte
    }

    /// Splits a byte into one value per field, indexed like [`Schema::fields`].
    pub fn unpack(&self, byte: u8) -> [u8; REGISTER_BITS as usize] {
        let mut values = [0u8; REGISTER_BITS as usize];
        let mut high = usize::from(REGISTER_BITS);

        for (slot, field) in values.iter_mut().zip(self.fields) {
            let low = high - usize::from(field.width);
            *slot = byte.bits(low..high);
            high = low;
        }

        values
    }
}

impl TryFrom<&'static [Field]> for Schema {
    type Error = RegisterError;

    fn try_from(fields: &'static [Field]) -> RegisterResult<Self> {
        Ok(Self::try_new(fields)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPMODE_LIKE: &[Field] = &[
        Field::named("sequencer_off", 1, 0),
        Field::named("listen_on", 1, 0),
        Field::named("listen_abort", 1, 0),
        Field::named("mode", 3, 0b001),
        Field::fixed(2, 0b00),
    ];

    const TEMP_LIKE: &[Field] = &[
        Field::fixed(4, 0),
        Field::named("start", 1, 0),
        Field::named("running", 1, 0),
        Field::fixed(2, 0b01),
    ];

    #[test]
    fn packs_most_significant_field_first() {
        let schema = Schema::new(OPMODE_LIKE);

        assert_eq!(schema.pack(&[0, 0, 0, 0b001]), Ok(0b0000_0100));
        assert_eq!(schema.pack(&[1, 0, 1, 0b100]), Ok(0b1011_0000));
    }

    #[test]
    fn fixed_bits_are_always_written() {
        let schema = Schema::new(TEMP_LIKE);

        assert_eq!(schema.pack(&[0, 0]), Ok(0b0000_0001));
        assert_eq!(schema.pack(&[1, 1]), Ok(0b0000_1101));
    }

    #[test]
    fn unpack_reads_every_group() {
        let schema = Schema::new(OPMODE_LIKE);

        let values = schema.unpack(0b1011_0011);
        assert_eq!(&values[..schema.len()], &[1, 0, 1, 0b100, 0b11]);
    }

    #[test]
    fn offsets_and_masks() {
        let schema = Schema::new(OPMODE_LIKE);

        assert_eq!(schema.offset(0), Some(7));
        assert_eq!(schema.offset(3), Some(2));
        assert_eq!(schema.offset(4), Some(0));
        assert_eq!(schema.offset(5), None);
        assert_eq!(schema.mask(3), Some(0b0001_1100));
        assert_eq!(schema.position("mode"), Some(3));
        assert_eq!(schema.position("missing"), None);
        assert_eq!(schema.width(), 8);
    }

    #[test]
    fn full_width_field() {
        static WHOLE: &[Field] = &[Field::named("value", 8, 0xA5)];
        let schema = Schema::new(WHOLE);

        assert_eq!(schema.pack(&[0xFF]), Ok(0xFF));
        assert_eq!(schema.unpack(0x3C)[0], 0x3C);
    }

    #[test]
    fn rejects_layouts_that_do_not_tile_a_byte() {
        static SHORT: &[Field] = &[Field::named("a", 3, 0), Field::named("b", 4, 0)];
        static LONG: &[Field] = &[Field::named("a", 5, 0), Field::fixed(4, 0)];

        assert_eq!(
            Schema::try_new(SHORT),
            Err(SchemaDefect::WidthMismatch { total: 7 })
        );
        assert_eq!(
            Schema::try_new(LONG),
            Err(SchemaDefect::WidthMismatch { total: 9 })
        );
    }

    #[test]
    fn rejects_bad_widths_and_defaults() {
        static EMPTY: &[Field] = &[Field::named("a", 0, 0), Field::named("b", 8, 0)];
        static OVERFULL: &[Field] = &[Field::named("a", 2, 0b100), Field::fixed(6, 0)];

        assert_eq!(
            Schema::try_new(EMPTY),
            Err(SchemaDefect::InvalidWidth { index: 0, width: 0 })
        );
        assert_eq!(
            Schema::try_new(OVERFULL),
            Err(SchemaDefect::DefaultOutOfRange { index: 0 })
        );
    }

    #[test]
    fn check_refuses_values_wider_than_the_field() {
        let field = Field::named("mode", 3, 0);

        assert_eq!(field.check(7), Ok(7));
        assert_eq!(
            field.check(8),
            Err(RegisterError::InvalidFieldValue {
                field: "mode",
                width: 3,
                value: 8
            })
        );
    }

    #[test]
    fn pack_refuses_values_wider_than_their_field() {
        let schema = Schema::new(OPMODE_LIKE);

        assert_eq!(
            schema.pack(&[0, 0, 0, 0b1001]),
            Err(RegisterError::InvalidFieldValue {
                field: "mode",
                width: 3,
                value: 0b1001
            })
        );
        assert_eq!(
            schema.pack(&[2, 0, 0, 0]),
            Err(RegisterError::InvalidFieldValue {
                field: "sequencer_off",
                width: 1,
                value: 2
            })
        );
    }

    #[test]
    fn pack_wants_one_value_per_named_field() {
        let schema = Schema::new(OPMODE_LIKE);

        assert_eq!(schema.named_len(), 4);
        assert_eq!(
            schema.pack(&[1]),
            Err(RegisterError::FieldCount {
                expected: 4,
                found: 1
            })
        );
        assert_eq!(
            schema.pack(&[0, 0, 0, 0, 0]),
            Err(RegisterError::FieldCount {
                expected: 4,
                found: 5
            })
        );
    }

    #[test]
    fn rejects_more_fields_than_bits() {
        static NINE: &[Field] = &[
            Field::named("a", 1, 0),
            Field::named("b", 1, 0),
            Field::named("c", 1, 0),
            Field::named("d", 1, 0),
            Field::named("e", 1, 0),
            Field::named("f", 1, 0),
            Field::named("g", 1, 0),
            Field::named("h", 1, 0),
            Field::named("i", 1, 0),
        ];

        assert_eq!(Schema::try_new(NINE), Err(SchemaDefect::TooManyFields));
    }

    #[test]
    fn runtime_layouts_report_through_register_error() {
        static SHORT: &[Field] = &[Field::named("a", 3, 0), Field::named("b", 4, 0)];

        assert_eq!(
            Schema::try_from(SHORT),
            Err(RegisterError::Schema(SchemaDefect::WidthMismatch { total: 7 }))
        );
        assert_eq!(Schema::try_from(OPMODE_LIKE), Ok(Schema::new(OPMODE_LIKE)));
    }
}
