//! RFM69 register addresses, default bit patterns and oscillator figures.
//!
//! Values follow the SX1231 / RFM69 register map.

/// Register addresses
pub mod reg {
    pub const FIFO: u8 = 0x00;
    pub const OPMODE: u8 = 0x01;
    pub const DATAMODUL: u8 = 0x02;
    pub const BITRATEMSB: u8 = 0x03;
    pub const BITRATELSB: u8 = 0x04;
    pub const FDEVMSB: u8 = 0x05;
    pub const FDEVLSB: u8 = 0x06;
    pub const FRFMSB: u8 = 0x07;
    pub const FRFMID: u8 = 0x08;
    pub const FRFLSB: u8 = 0x09;
    pub const OSC1: u8 = 0x0A;
    pub const AFCCTRL: u8 = 0x0B;
    pub const LOWBAT: u8 = 0x0C;
    pub const LISTEN1: u8 = 0x0D;
    pub const LISTEN2: u8 = 0x0E;
    pub const LISTEN3: u8 = 0x0F;
    pub const VERSION: u8 = 0x10;
    pub const PALEVEL: u8 = 0x11;
    pub const PARAMP: u8 = 0x12;
    pub const OCP: u8 = 0x13;
    pub const LNA: u8 = 0x18;
    pub const RXBW: u8 = 0x19;
    pub const AFCBW: u8 = 0x1A;
    pub const OOKPEAK: u8 = 0x1B;
    pub const OOKAVG: u8 = 0x1C;
    pub const OOKFIX: u8 = 0x1D;
    pub const AFCFEI: u8 = 0x1E;
    pub const AFCMSB: u8 = 0x1F;
    pub const AFCLSB: u8 = 0x20;
    pub const FEIMSB: u8 = 0x21;
    pub const FEILSB: u8 = 0x22;
    pub const RSSICONFIG: u8 = 0x23;
    pub const RSSIVALUE: u8 = 0x24;
    pub const DIOMAPPING1: u8 = 0x25;
    pub const DIOMAPPING2: u8 = 0x26;
    pub const IRQFLAGS1: u8 = 0x27;
    pub const IRQFLAGS2: u8 = 0x28;
    pub const RSSITHRESH: u8 = 0x29;
    pub const RXTIMEOUT1: u8 = 0x2A;
    pub const RXTIMEOUT2: u8 = 0x2B;
    pub const PREAMBLEMSB: u8 = 0x2C;
    pub const PREAMBLELSB: u8 = 0x2D;
    pub const SYNCCONFIG: u8 = 0x2E;
    pub const SYNCVALUE1: u8 = 0x2F;
    pub const SYNCVALUE2: u8 = 0x30;
    pub const SYNCVALUE3: u8 = 0x31;
    pub const SYNCVALUE4: u8 = 0x32;
    pub const SYNCVALUE5: u8 = 0x33;
    pub const SYNCVALUE6: u8 = 0x34;
    pub const SYNCVALUE7: u8 = 0x35;
    pub const SYNCVALUE8: u8 = 0x36;
    pub const PACKETCONFIG1: u8 = 0x37;
    pub const PAYLOADLENGTH: u8 = 0x38;
    pub const NODEADRS: u8 = 0x39;
    pub const BROADCASTADRS: u8 = 0x3A;
    pub const AUTOMODES: u8 = 0x3B;
    pub const FIFOTHRESH: u8 = 0x3C;
    pub const PACKETCONFIG2: u8 = 0x3D;
    pub const AESKEY1: u8 = 0x3E;
    pub const TEMP1: u8 = 0x4E;
    pub const TEMP2: u8 = 0x4F;
    pub const TESTLNA: u8 = 0x58;
    pub const TESTPA1: u8 = 0x5A;
    pub const TESTPA2: u8 = 0x5C;
    pub const TESTDAGC: u8 = 0x6F;
    pub const TESTAFC: u8 = 0x71;
}

/// Register bit patterns
pub mod rf {
    // RegFrf, 915 MHz
    pub const FRFMSB_915: u8 = 0xE4;
    pub const FRFMID_915: u8 = 0xC0;
    pub const FRFLSB_915: u8 = 0x00;

    // RegBitrate, 4800 bps
    pub const BITRATEMSB_4800: u8 = 0x1A;
    pub const BITRATELSB_4800: u8 = 0x0B;

    // RegFdev, 5 kHz
    pub const FDEVMSB_5000: u8 = 0x00;
    pub const FDEVLSB_5000: u8 = 0x52;

    pub const AFCLOWBETA_ON: u8 = 0x20;
    pub const AFCLOWBETA_OFF: u8 = 0x00;

    pub const PALEVEL_PA0_ON: u8 = 0x80;
    pub const PALEVEL_PA0_OFF: u8 = 0x00;
    pub const PALEVEL_PA1_ON: u8 = 0x40;
    pub const PALEVEL_PA1_OFF: u8 = 0x00;
    pub const PALEVEL_PA2_ON: u8 = 0x20;
    pub const PALEVEL_PA2_OFF: u8 = 0x00;
    pub const PALEVEL_OUTPUTPOWER_11000: u8 = 0x18;
    pub const PALEVEL_OUTPUTPOWER_11111: u8 = 0x1F;

    pub const PARAMP_3400: u8 = 0x00;
    pub const PARAMP_40: u8 = 0x09;
    pub const PARAMP_10: u8 = 0x0F;

    pub const OCP_OFF: u8 = 0x0F;
    pub const OCP_ON: u8 = 0x10;
    pub const OCP_TRIM_95: u8 = 0x0A;

    pub const LNA_ZIN_50: u8 = 0x00;
    pub const LNA_ZIN_200: u8 = 0x80;

    pub const RXBW_DCCFREQ_010: u8 = 0x40;
    pub const RXBW_MANT_16: u8 = 0x00;
    pub const RXBW_MANT_20: u8 = 0x08;
    pub const RXBW_MANT_24: u8 = 0x10;
    pub const RXBW_EXP_5: u8 = 0x05;

    pub const SYNC_OFF: u8 = 0x00;
    pub const SYNC_ON: u8 = 0x80;
    pub const SYNC_FIFOFILL_AUTO: u8 = 0x00;
    pub const SYNC_FIFOFILL_MANUAL: u8 = 0x40;
    pub const SYNC_SIZE_4: u8 = 0x18;
    pub const SYNC_TOL_0: u8 = 0x00;

    pub const FIFOTHRESH_TXSTART_FIFOTHRESH: u8 = 0x00;
    pub const FIFOTHRESH_TXSTART_FIFONOTEMPTY: u8 = 0x80;
    pub const FIFOTHRESH_VALUE: u8 = 0x0F;

    pub const PACKET2_RXRESTARTDELAY_2BITS: u8 = 0x10;
    pub const PACKET2_AUTORXRESTART_ON: u8 = 0x02;
    pub const PACKET2_AUTORXRESTART_OFF: u8 = 0x00;
    pub const PACKET2_AES_ON: u8 = 0x01;
    pub const PACKET2_AES_OFF: u8 = 0x00;

    pub const DAGC_NORMAL: u8 = 0x00;
    pub const DAGC_IMPROVED_LOWBETA1: u8 = 0x20;
    pub const DAGC_IMPROVED_LOWBETA0: u8 = 0x30;
}

/// Oscillator figures
pub mod hw {
    /// Crystal oscillator frequency, Hz
    pub const FXOSC: u32 = 32_000_000;
    /// log2 of the synthesizer divider
    pub const FSTEP_SHIFT: u32 = 19;
    /// Synthesizer frequency step, Hz (`FXOSC / 2^19`)
    pub const FSTEP: f64 = 61.035_156_25;
}

/// End-of-burst marker appended to every programming sequence.
pub const BURST_END: (u8, u8) = (0xFF, 0x00);
