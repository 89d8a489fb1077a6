//! Single-byte RFM69 registers with sub-fields.

use crate::rfm69::constants::reg;
use crate::{ReadableRegister, Register, RegisterResult, Reserved, Valued, WriteableRegister};

/// Transceiver operating mode (`RegOpMode.Mode`)
#[derive(Valued, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Sleep = 0b000,
    Standby = 0b001,
    FrequencySynthesizer = 0b010,
    Transmit = 0b011,
    Receive = 0b100,
}

#[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
#[register(address = reg::OPMODE)]
pub struct OpMode {
    /// Automatic sequencer disabled
    #[register(width = 1, reset = false)]
    sequencer_off: u8,
    /// Listen mode enabled
    #[register(width = 1, reset = false)]
    listen_on: u8,
    /// Aborts listen mode, set together with `listen_on = 0`
    #[register(width = 1, reset = false)]
    listen_abort: u8,
    /// Operating mode, see [`Mode`]
    #[register(width = 3, reset = Mode::Standby)]
    mode: u8,
    #[register(width = 2, fixed = 0b00)]
    _unused: Reserved,
}

impl OpMode {
    pub fn operating_mode(&self) -> RegisterResult<Mode> {
        Mode::try_from(self.mode())
    }
}

#[derive(Valued, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataMode {
    Packet = 0b00,
    ContinuousSync = 0b10,
    ContinuousNoSync = 0b11,
}

#[derive(Valued, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ModulationType {
    Fsk = 0b00,
    Ook = 0b01,
}

#[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
#[register(address = reg::DATAMODUL)]
pub struct DataModulation {
    #[register(width = 1, fixed = 0)]
    _unused: Reserved,
    /// Packet or continuous mode, see [`DataMode`]
    #[register(width = 2, reset = DataMode::Packet)]
    data_mode: u8,
    /// See [`ModulationType`]
    #[register(width = 2, reset = ModulationType::Fsk)]
    modulation_type: u8,
    #[register(width = 1, fixed = 0)]
    _unused_2: Reserved,
    /// Gaussian filter (FSK) or cutoff (OOK) selection
    #[register(width = 2, reset = 0b00)]
    modulation_shaping: u8,
}

#[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
#[register(address = reg::AFCFEI)]
pub struct AfcFei {
    #[register(width = 1, fixed = 0)]
    _unused: Reserved,
    #[register(width = 1, reset = false)]
    fei_done: u8,
    #[register(width = 1, reset = false)]
    fei_start: u8,
    #[register(width = 1, reset = true)]
    afc_done: u8,
    #[register(width = 1, reset = false)]
    afc_autoclear_on: u8,
    #[register(width = 1, reset = false)]
    afc_auto_on: u8,
    #[register(width = 1, reset = false)]
    afc_clear: u8,
    #[register(width = 1, reset = false)]
    afc_start: u8,
}

#[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
#[register(address = reg::RSSICONFIG)]
pub struct RssiConfig {
    #[register(width = 6, fixed = 0)]
    _unused: Reserved,
    #[register(width = 1, reset = true)]
    rssi_done: u8,
    #[register(width = 1, reset = false)]
    rssi_start: u8,
}

/// DIO pin function selector; meaning depends on pin and mode.
#[derive(Valued, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DioMapping {
    Mapping00 = 0b00,
    Mapping01 = 0b01,
    Mapping10 = 0b10,
    Mapping11 = 0b11,
}

#[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
#[register(address = reg::DIOMAPPING1)]
pub struct DioMapping1 {
    #[register(width = 2, reset = DioMapping::Mapping00)]
    dio0: u8,
    #[register(width = 2, reset = DioMapping::Mapping00)]
    dio1: u8,
    #[register(width = 2, reset = DioMapping::Mapping00)]
    dio2: u8,
    #[register(width = 2, reset = DioMapping::Mapping00)]
    dio3: u8,
}

/// ClkOut divider of FXOSC
#[derive(Valued, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ClkOut {
    Div1 = 0,
    Div2 = 1,
    Div4 = 2,
    Div8 = 3,
    Div16 = 4,
    Div32 = 5,
    Rc = 6,
    Off = 7,
}

#[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
#[register(address = reg::DIOMAPPING2)]
pub struct DioMapping2 {
    #[register(width = 2, reset = DioMapping::Mapping00)]
    dio4: u8,
    #[register(width = 2, reset = DioMapping::Mapping00)]
    dio5: u8,
    #[register(width = 1, fixed = 0)]
    _unused: Reserved,
    /// See [`ClkOut`]
    #[register(width = 3, reset = ClkOut::Off)]
    clk_out: u8,
}

#[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
#[register(address = reg::IRQFLAGS1)]
pub struct IrqFlags1 {
    #[register(width = 1, reset = true)]
    mode_ready: u8,
    #[register(width = 1, reset = false)]
    rx_ready: u8,
    #[register(width = 1, reset = false)]
    tx_ready: u8,
    #[register(width = 1, reset = false)]
    pll_lock: u8,
    #[register(width = 1, reset = false)]
    rssi: u8,
    #[register(width = 1, reset = false)]
    timeout: u8,
    #[register(width = 1, reset = false)]
    auto_mode: u8,
    #[register(width = 1, reset = false)]
    sync_address_match: u8,
}

#[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
#[register(address = reg::IRQFLAGS2)]
pub struct IrqFlags2 {
    #[register(width = 1, reset = false)]
    fifo_full: u8,
    #[register(width = 1, reset = false)]
    fifo_not_empty: u8,
    #[register(width = 1, reset = false)]
    fifo_level: u8,
    #[register(width = 1, reset = false)]
    fifo_overrun: u8,
    #[register(width = 1, reset = false)]
    packet_sent: u8,
    #[register(width = 1, reset = false)]
    payload_ready: u8,
    #[register(width = 1, reset = false)]
    crc_ok: u8,
    #[register(width = 1, fixed = 0)]
    _unused: Reserved,
}

#[derive(Valued, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DcFree {
    Off = 0b00,
    Manchester = 0b01,
    Whitening = 0b10,
}

#[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
#[register(address = reg::PACKETCONFIG1)]
pub struct PacketConfig1 {
    /// Variable length packets instead of fixed length
    #[register(width = 1, reset = false)]
    variable_length: u8,
    /// DC-free encoding, see [`DcFree`]
    #[register(width = 2, reset = DcFree::Off)]
    dc_free: u8,
    #[register(width = 1, reset = true)]
    crc_on: u8,
    /// Keep the FIFO on CRC failure
    #[register(width = 1, reset = false)]
    crc_auto_clear_off: u8,
    #[register(width = 2, reset = 0b00)]
    address_filtering: u8,
    #[register(width = 1, fixed = 0)]
    _unused: Reserved,
}

#[derive(Register, ReadableRegister, WriteableRegister, Debug, Clone, PartialEq, Eq)]
#[register(address = reg::TEMP1)]
pub struct Temperature1 {
    #[register(width = 4, fixed = 0)]
    _unused: Reserved,
    #[register(width = 1, reset = false)]
    start: u8,
    #[register(width = 1, reset = false)]
    running: u8,
    #[register(width = 2, fixed = 0b01)]
    _unused_2: Reserved,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegisterError;

    #[test]
    fn reset_values_pack_to_documented_defaults() {
        assert_eq!(OpMode::reset_value().pack(), 0x04);
        assert_eq!(DataModulation::reset_value().pack(), 0x00);
        assert_eq!(AfcFei::reset_value().pack(), 0x10);
        assert_eq!(RssiConfig::reset_value().pack(), 0x02);
        assert_eq!(DioMapping1::reset_value().pack(), 0x00);
        assert_eq!(DioMapping2::reset_value().pack(), 0x07);
        assert_eq!(IrqFlags1::reset_value().pack(), 0x80);
        assert_eq!(IrqFlags2::reset_value().pack(), 0x00);
        assert_eq!(PacketConfig1::reset_value().pack(), 0x10);
        assert_eq!(Temperature1::reset_value().pack(), 0x01);
    }

    #[test]
    fn every_schema_fills_one_byte() {
        for schema in [
            OpMode::SCHEMA,
            DataModulation::SCHEMA,
            AfcFei::SCHEMA,
            RssiConfig::SCHEMA,
            DioMapping1::SCHEMA,
            DioMapping2::SCHEMA,
            IrqFlags1::SCHEMA,
            IrqFlags2::SCHEMA,
            PacketConfig1::SCHEMA,
            Temperature1::SCHEMA,
        ] {
            assert_eq!(schema.width(), 8);
        }
    }

    #[test]
    fn addresses_follow_the_register_map() {
        assert_eq!(OpMode::ADDRESS, 0x01);
        assert_eq!(DataModulation::ADDRESS, 0x02);
        assert_eq!(AfcFei::ADDRESS, 0x1E);
        assert_eq!(DioMapping2::ADDRESS, 0x26);
        assert_eq!(PacketConfig1::ADDRESS, 0x37);
        assert_eq!(Temperature1::ADDRESS, 0x4E);
    }

    #[test]
    fn typed_setters_place_bits() {
        let mut opmode = OpMode::reset_value();
        opmode.set_mode(Mode::Receive).unwrap();
        opmode.set_sequencer_off(true).unwrap();
        assert_eq!(opmode.pack(), 0b1001_0000);
        assert_eq!(opmode.operating_mode(), Ok(Mode::Receive));

        let mut modulation = DataModulation::reset_value();
        modulation.set_data_mode(DataMode::ContinuousNoSync).unwrap();
        modulation.set_modulation_type(ModulationType::Ook).unwrap();
        modulation.set_modulation_shaping(0b01u8).unwrap();
        assert_eq!(modulation.pack(), 0b0110_1001);

        let mut packet = PacketConfig1::reset_value();
        packet.set_variable_length(true).unwrap();
        packet.set_dc_free(DcFree::Whitening).unwrap();
        assert_eq!(packet.pack(), 0b1101_0000);
    }

    #[test]
    fn set_field_by_name() {
        let mut dio = DioMapping1::reset_value();
        dio.set_field("dio0", 0b01).unwrap();
        dio.set_field("dio3", 0b11).unwrap();

        assert_eq!(dio.pack(), 0b0100_0011);
        assert_eq!(dio.field("dio0"), Some(0b01));
        assert_eq!(dio.field("_unused"), None);
    }

    #[test]
    fn out_of_range_value_leaves_field_unchanged() {
        let mut opmode = OpMode::reset_value();
        opmode.set_mode(Mode::Transmit).unwrap();

        assert_eq!(
            opmode.set_field("mode", 0b1000),
            Err(RegisterError::InvalidFieldValue {
                field: "mode",
                width: 3,
                value: 0b1000
            })
        );
        assert_eq!(opmode.mode(), Mode::Transmit as u8);
        assert_eq!(opmode.set_listen_on(2u8).map_err(|_| ()), Err(()));
        assert_eq!(opmode.listen_on(), 0);
    }

    #[test]
    fn unknown_field_is_reported() {
        let mut afc = AfcFei::reset_value();

        assert_eq!(
            afc.set_field("afc_start_now", 1),
            Err(RegisterError::UnknownField { address: 0x1E })
        );
        assert_eq!(afc, AfcFei::reset_value());
    }

    #[test]
    fn unpack_ignores_fixed_bits() {
        let temperature = Temperature1::unpack(0b1111_0110);

        assert_eq!(temperature.start(), 0);
        assert_eq!(temperature.running(), 1);
        assert_eq!(temperature.pack(), 0b0000_0101);
    }

    #[test]
    fn decodes_status_flags() {
        let flags = IrqFlags2::unpack(0b0100_0110);

        assert_eq!(flags.fifo_not_empty(), 1);
        assert_eq!(flags.payload_ready(), 1);
        assert_eq!(flags.crc_ok(), 1);
        assert_eq!(flags.fifo_full(), 0);
    }

    #[test]
    fn enum_round_trips_through_raw_bits() {
        assert_eq!(u8::from(ClkOut::Rc), 6);
        assert_eq!(ClkOut::try_from(7u8), Ok(ClkOut::Off));
        assert_eq!(DataMode::try_from(0b01u8), Err(RegisterError::ConversionError));
        assert_eq!(Mode::try_from(0b101u8), Err(RegisterError::ConversionError));

        let opmode = OpMode::unpack(0b0001_1100);
        assert_eq!(opmode.operating_mode(), Err(RegisterError::ConversionError));
    }
}
