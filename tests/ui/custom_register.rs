use rfm69_registers::*;

#[derive(Valued, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Gain {
    Low = 0b00,
    High = 0b11,
}

/// `RegTestPa1`-like layout with a constant low nibble
#[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
#[register(address = 0x5A)]
struct TestPa {
    /// Boost
    #[register(width = 2, reset = Gain::Low)]
    gain: u8,
    #[register(width = 2, reset = 0b01)]
    trim: u8,
    #[register(width = 4, fixed = 0b0101)]
    _low: Reserved,
}

fn main() {
    let mut register = TestPa::reset_value();
    assert_eq!(TestPa::ADDRESS, 0x5A);
    assert_eq!(register.pack(), 0b0001_0101);

    register.set_gain(Gain::High).unwrap();
    assert_eq!(register.pack(), 0b1101_0101);
    assert_eq!(Gain::try_from(register.gain()), Ok(Gain::High));

    assert!(register.set_trim(4u8).is_err());
    assert_eq!(TestPa::unpack(0b1101_0000), register);
}
