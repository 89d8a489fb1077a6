use crate::rfm69::areas::{Bitrate, Deviation, Frequency};
use crate::rfm69::constants::{reg, rf, BURST_END};
use crate::rfm69::values::{AfcFei, DataModulation, DioMapping1, DioMapping2, OpMode, PacketConfig1};
use crate::{ReadableRegister, Register, RegisterError, RegisterResult, WriteableRegister};

/// Number of `(address, value)` pairs in a programming burst, end marker included.
pub const REGISTER_COUNT: usize = 38;

/// Register addresses in burst order.
///
/// [`Rfm69Configuration::get_registers`] walks this table, so the uniqueness
/// check below covers every address actually written.
pub const LAYOUT: [u8; REGISTER_COUNT] = [
    OpMode::ADDRESS,
    DataModulation::ADDRESS,
    reg::BITRATEMSB,
    reg::BITRATELSB,
    reg::FDEVMSB,
    reg::FDEVLSB,
    reg::FRFMSB,
    reg::FRFMID,
    reg::FRFLSB,
    reg::AFCCTRL,
    reg::PALEVEL,
    reg::PARAMP,
    reg::OCP,
    reg::LNA,
    reg::RXBW,
    reg::AFCBW,
    AfcFei::ADDRESS,
    DioMapping1::ADDRESS,
    DioMapping2::ADDRESS,
    reg::RSSITHRESH,
    reg::RXTIMEOUT1,
    reg::RXTIMEOUT2,
    reg::SYNCCONFIG,
    reg::SYNCVALUE1,
    reg::SYNCVALUE2,
    reg::SYNCVALUE3,
    reg::SYNCVALUE4,
    reg::SYNCVALUE5,
    reg::SYNCVALUE6,
    reg::SYNCVALUE7,
    reg::SYNCVALUE8,
    PacketConfig1::ADDRESS,
    reg::PAYLOADLENGTH,
    reg::FIFOTHRESH,
    reg::PACKETCONFIG2,
    reg::TESTDAGC,
    reg::TESTAFC,
    BURST_END.0,
];

const fn addresses_unique(addresses: &[u8]) -> bool {
    let mut i = 0;
    while i < addresses.len() {
        let mut j = i + 1;
        while j < addresses.len() {
            if addresses[i] == addresses[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(addresses_unique(&LAYOUT), "two configuration registers share an address");

/// Full RFM69 register configuration.
///
/// Defaults are *mostly* the RFM69W power-on values. Registers with
/// sub-fields are typed, the rest are raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rfm69Configuration {
    pub opmode: OpMode,
    pub data_modulation: DataModulation,

    pub bitrate: Bitrate,
    pub deviation: Deviation,
    pub frequency: Frequency,

    pub afc_ctrl: u8,

    pub pa_level: u8,
    pub pa_ramp: u8,

    pub ocp: u8,
    pub lna: u8,
    pub rx_bw: u8,
    pub afc_bw: u8,
    pub afc_fei: AfcFei,

    pub dio_mapping_1: DioMapping1,
    pub dio_mapping_2: DioMapping2,

    pub rssi_threshold: u8,

    pub rx_timeout_1: u8,
    pub rx_timeout_2: u8,

    pub sync_config: u8,
    /// `RegSyncValue1..8`
    pub sync_value: [u8; 8],

    pub packet_config_1: PacketConfig1,
    pub payload_length: u8,

    pub fifo_threshold: u8,
    pub packet_config_2: u8,
    pub test_dagc: u8,
    pub test_afc: u8,
}

impl Default for Rfm69Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Rfm69Configuration {
    pub fn new() -> Self {
        Self {
            opmode: OpMode::reset_value(),
            data_modulation: DataModulation::reset_value(),

            bitrate: Bitrate::new(),
            deviation: Deviation::new(),
            frequency: Frequency::new(),

            afc_ctrl: rf::AFCLOWBETA_OFF,

            pa_level: rf::PALEVEL_PA0_ON
                | rf::PALEVEL_PA1_OFF
                | rf::PALEVEL_PA2_OFF
                | rf::PALEVEL_OUTPUTPOWER_11000,
            pa_ramp: rf::PARAMP_40,

            ocp: rf::OCP_ON | rf::OCP_TRIM_95,
            lna: rf::LNA_ZIN_200,
            rx_bw: rf::RXBW_DCCFREQ_010 | rf::RXBW_MANT_24 | rf::RXBW_EXP_5,
            afc_bw: rf::RXBW_DCCFREQ_010 | rf::RXBW_MANT_24 | rf::RXBW_EXP_5,
            afc_fei: AfcFei::reset_value(),

            dio_mapping_1: DioMapping1::reset_value(),
            dio_mapping_2: DioMapping2::reset_value(),

            rssi_threshold: 200,

            rx_timeout_1: 0,
            rx_timeout_2: 40,

            sync_config: rf::SYNC_ON | rf::SYNC_FIFOFILL_AUTO | rf::SYNC_SIZE_4 | rf::SYNC_TOL_0,
            sync_value: [0; 8],

            packet_config_1: PacketConfig1::reset_value(),
            payload_length: 0x40,

            fifo_threshold: rf::FIFOTHRESH_TXSTART_FIFONOTEMPTY | rf::FIFOTHRESH_VALUE,
            packet_config_2: rf::PACKET2_RXRESTARTDELAY_2BITS
                | rf::PACKET2_AUTORXRESTART_ON
                | rf::PACKET2_AES_OFF,
            test_dagc: rf::DAGC_IMPROVED_LOWBETA0,
            test_afc: 0x0E,
        }
    }

    /// The programming burst: every register in [`LAYOUT`] order, ending
    /// with [`BURST_END`].
    pub fn get_registers(&self) -> [(u8, u8); REGISTER_COUNT] {
        let burst = LAYOUT.map(|address| (address, self.register(address).unwrap_or(BURST_END.1)));

        tracing::trace!(entries = burst.len(), "assembled register burst");
        burst
    }

    /// Current value of the register at `address`, as it would be written.
    ///
    /// `None` for addresses outside [`LAYOUT`] and for the end marker.
    pub fn register(&self, address: u8) -> Option<u8> {
        let value = match address {
            reg::OPMODE => self.opmode.pack(),
            reg::DATAMODUL => self.data_modulation.pack(),
            reg::BITRATEMSB | reg::BITRATELSB => self.bitrate.at(address)?,
            reg::FDEVMSB | reg::FDEVLSB => self.deviation.at(address)?,
            reg::FRFMSB | reg::FRFMID | reg::FRFLSB => self.frequency.at(address)?,
            reg::AFCCTRL => self.afc_ctrl,
            reg::PALEVEL => self.pa_level,
            reg::PARAMP => self.pa_ramp,
            reg::OCP => self.ocp,
            reg::LNA => self.lna,
            reg::RXBW => self.rx_bw,
            reg::AFCBW => self.afc_bw,
            reg::AFCFEI => self.afc_fei.pack(),
            reg::DIOMAPPING1 => self.dio_mapping_1.pack(),
            reg::DIOMAPPING2 => self.dio_mapping_2.pack(),
            reg::RSSITHRESH => self.rssi_threshold,
            reg::RXTIMEOUT1 => self.rx_timeout_1,
            reg::RXTIMEOUT2 => self.rx_timeout_2,
            reg::SYNCCONFIG => self.sync_config,
            reg::SYNCVALUE1..=reg::SYNCVALUE8 => self.sync_value[usize::from(address - reg::SYNCVALUE1)],
            reg::PACKETCONFIG1 => self.packet_config_1.pack(),
            reg::PAYLOADLENGTH => self.payload_length,
            reg::FIFOTHRESH => self.fifo_threshold,
            reg::PACKETCONFIG2 => self.packet_config_2,
            reg::TESTDAGC => self.test_dagc,
            reg::TESTAFC => self.test_afc,
            _ => return None,
        };

        Some(value)
    }

    /// Takes a byte read back from the chip into the owning register.
    ///
    /// Registers with sub-fields are unpacked, so fixed bits in `value` are
    /// dropped. Addresses outside [`LAYOUT`], and the end marker, fail with
    /// [`RegisterError::UnknownAddress`].
    pub fn load(&mut self, address: u8, value: u8) -> RegisterResult<()> {
        match address {
            reg::OPMODE => self.opmode = OpMode::unpack(value),
            reg::DATAMODUL => self.data_modulation = DataModulation::unpack(value),
            reg::BITRATEMSB | reg::BITRATELSB => self.bitrate.set_at(address, value)?,
            reg::FDEVMSB | reg::FDEVLSB => self.deviation.set_at(address, value)?,
            reg::FRFMSB | reg::FRFMID | reg::FRFLSB => self.frequency.set_at(address, value)?,
            reg::AFCCTRL => self.afc_ctrl = value,
            reg::PALEVEL => self.pa_level = value,
            reg::PARAMP => self.pa_ramp = value,
            reg::OCP => self.ocp = value,
            reg::LNA => self.lna = value,
            reg::RXBW => self.rx_bw = value,
            reg::AFCBW => self.afc_bw = value,
            reg::AFCFEI => self.afc_fei = AfcFei::unpack(value),
            reg::DIOMAPPING1 => self.dio_mapping_1 = DioMapping1::unpack(value),
            reg::DIOMAPPING2 => self.dio_mapping_2 = DioMapping2::unpack(value),
            reg::RSSITHRESH => self.rssi_threshold = value,
            reg::RXTIMEOUT1 => self.rx_timeout_1 = value,
            reg::RXTIMEOUT2 => self.rx_timeout_2 = value,
            reg::SYNCCONFIG => self.sync_config = value,
            reg::SYNCVALUE1..=reg::SYNCVALUE8 => {
                self.sync_value[usize::from(address - reg::SYNCVALUE1)] = value;
            }
            reg::PACKETCONFIG1 => self.packet_config_1 = PacketConfig1::unpack(value),
            reg::PAYLOADLENGTH => self.payload_length = value,
            reg::FIFOTHRESH => self.fifo_threshold = value,
            reg::PACKETCONFIG2 => self.packet_config_2 = value,
            reg::TESTDAGC => self.test_dagc = value,
            reg::TESTAFC => self.test_afc = value,
            _ => return Err(RegisterError::UnknownAddress(address)),
        }

        Ok(())
    }

    /// [`Rfm69Configuration::load`] for a whole burst, stopping at the end marker.
    pub fn load_all<I>(&mut self, entries: I) -> RegisterResult<()>
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        entries
            .into_iter()
            .take_while(|&entry| entry != BURST_END)
            .try_for_each(|(address, value)| self.load(address, value))
    }
}
