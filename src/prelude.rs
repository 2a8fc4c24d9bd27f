//! Prelude

pub use crate::master::SpiMaster as _msp430_spi_SpiMaster;
