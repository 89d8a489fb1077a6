use core::fmt::Debug;

use proptest::prelude::*;
use rfm69_registers::rfm69::*;
use rfm69_registers::*;

/// Drives every named field from `seeds`, masked to its width.
fn arbitrary_state<R: Register>(seeds: [u8; 8]) -> R {
    let mut register = R::reset_value();
    for (field, seed) in R::SCHEMA.fields().iter().zip(seeds) {
        if let Some(name) = field.name {
            register.set_field(name, seed & field.max()).unwrap();
        }
    }
    register
}

fn round_trip<R>(seeds: [u8; 8]) -> Result<(), TestCaseError>
where
    R: ReadableRegister + WriteableRegister + PartialEq + Debug,
{
    let register: R = arbitrary_state(seeds);
    let byte = register.pack();

    prop_assert_eq!(R::unpack(byte), register);
    prop_assert_eq!(R::SCHEMA.width(), 8);
    Ok(())
}

fn fixed_bits_hold<R>(byte: u8) -> Result<(), TestCaseError>
where
    R: ReadableRegister + WriteableRegister,
{
    let packed = R::unpack(byte).pack();
    for (index, field) in R::SCHEMA.fields().iter().enumerate() {
        let mask = R::SCHEMA.mask(index).unwrap();
        let offset = R::SCHEMA.offset(index).unwrap();
        let expected = if field.is_fixed() { field.default << offset } else { byte & mask };
        prop_assert_eq!(packed & mask, expected);
    }
    Ok(())
}

proptest! {
    #[test]
    fn unpack_inverts_pack(seeds in any::<[u8; 8]>()) {
        round_trip::<OpMode>(seeds)?;
        round_trip::<DataModulation>(seeds)?;
        round_trip::<AfcFei>(seeds)?;
        round_trip::<RssiConfig>(seeds)?;
        round_trip::<DioMapping1>(seeds)?;
        round_trip::<DioMapping2>(seeds)?;
        round_trip::<IrqFlags1>(seeds)?;
        round_trip::<IrqFlags2>(seeds)?;
        round_trip::<PacketConfig1>(seeds)?;
        round_trip::<Temperature1>(seeds)?;
    }

    #[test]
    fn unpack_then_pack_restores_constants(byte in any::<u8>()) {
        fixed_bits_hold::<OpMode>(byte)?;
        fixed_bits_hold::<DataModulation>(byte)?;
        fixed_bits_hold::<AfcFei>(byte)?;
        fixed_bits_hold::<RssiConfig>(byte)?;
        fixed_bits_hold::<DioMapping2>(byte)?;
        fixed_bits_hold::<IrqFlags2>(byte)?;
        fixed_bits_hold::<PacketConfig1>(byte)?;
        fixed_bits_hold::<Temperature1>(byte)?;
    }

    #[test]
    fn oversized_values_are_refused(value in 8u8..=255) {
        let mut opmode = OpMode::reset_value();
        let before = opmode.clone();

        let result = opmode.set_field("mode", value);
        prop_assert_eq!(result, Err(RegisterError::InvalidFieldValue { field: "mode", width: 3, value }));
        prop_assert_eq!(opmode, before);
    }

    #[test]
    fn set_word_splits_big_endian(word in any::<u64>()) {
        let mut three = RegisterArea::new(0x07, [0; 3]);
        three.set_word(word);
        let expected = word % (1 << 24);
        prop_assert_eq!(
            three.pack(),
            [(0x07, (expected >> 16) as u8), (0x08, (expected >> 8) as u8), (0x09, expected as u8)]
        );
        prop_assert_eq!(three.word(), expected);

        let mut two = RegisterArea::new(0x03, [0; 2]);
        two.set_word(word);
        prop_assert_eq!(two.word(), word & 0xFFFF);
    }

    #[test]
    fn frequency_lands_within_half_a_step(hz in 290_000_000u64..1_020_000_000) {
        let mut frequency = Frequency::new();
        frequency.set_hz(hz);

        let programmed = frequency.word() as f64 * rfm69_registers::rfm69::constants::hw::FSTEP;
        prop_assert!((programmed - hz as f64).abs() <= rfm69_registers::rfm69::constants::hw::FSTEP / 2.0);
    }

    #[test]
    fn burst_survives_load(mode in 0u8..5, bps in 1_200u32..300_000, sync in any::<[u8; 8]>()) {
        let mut config = Rfm69Configuration::new();
        config.opmode.set_mode(mode).unwrap();
        config.bitrate.set_bps(bps).unwrap();
        config.sync_value = sync;

        let mut restored = Rfm69Configuration::new();
        restored.load_all(config.get_registers()).unwrap();
        prop_assert_eq!(restored.get_registers(), config.get_registers());
    }
}
