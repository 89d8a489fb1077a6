//! # RFM69 Register Example Application

use rfm69_registers::rfm69::{DcFree, Mode, OpMode, Rfm69Configuration};
use rfm69_registers::*;
use tracing_subscriber::EnvFilter;

fn main() -> RegisterResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = Rfm69Configuration::new();

    // Base impl
    println!("OpMode ADDRESS = {:#04x}\nSCHEMA = {:?}", OpMode::ADDRESS, OpMode::SCHEMA);
    println!("Power-on OpMode: {:?} = {:#010b}", config.opmode, config.opmode.pack());

    config.opmode.set_mode(Mode::Receive)?;
    config.frequency.set_mhz(868.3)?;
    config.bitrate.set_bps(9600)?;
    config.deviation.set_khz(19.2)?;
    config.packet_config_1.set_dc_free(DcFree::Whitening)?;

    // Writeable impl
    for (address, value) in config.get_registers() {
        println!("{address:#04x} <- {value:#04x}");
    }

    // Readable impl
    let read_back = OpMode::unpack(config.opmode.pack());
    println!("Read: {:?} ({:?})", read_back, read_back.operating_mode());

    Ok(())
}
