//! HopeRF RFM69 register set.

pub mod areas;
pub mod configuration;
pub mod constants;
pub mod values;

pub use areas::{Bitrate, Deviation, Frequency};
pub use configuration::{Rfm69Configuration, LAYOUT, REGISTER_COUNT};
pub use values::{
    AfcFei, ClkOut, DataMode, DataModulation, DcFree, DioMapping, DioMapping1, DioMapping2,
    IrqFlags1, IrqFlags2, Mode, ModulationType, OpMode, PacketConfig1, RssiConfig, Temperature1,
};
