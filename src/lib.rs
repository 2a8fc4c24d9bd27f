//! SPI master drivers for MSP430G2xx and MSP430F5xxx microcontrollers.
//!
//! Two peripheral families are covered:
//!
//! * the USI of the MSP430G2xx1 parts (e.g. MSP430G2231), see [`usi`]
//! * the USCI_A and USCI_B modules of the MSP430G2xx3, G2xx4/G2xx5 and F5xxx parts, see [`spi`]
//!
//! Both drivers implement [`master::SpiMaster`], which provides 8, 16 and 9 bit full-duplex
//! transfers, as well as the embedded-hal [`SpiBus`](embedded_hal::spi::SpiBus) and
//! embedded-hal-nb [`FullDuplex`](embedded_hal_nb::spi::FullDuplex) traits. The 0.2 versions of
//! the embedded-hal traits are available behind the `embedded-hal-02` feature.
//!
//! # Usage
//!
//! Enable exactly one device feature (`msp430g2231`, `msp430g2553`, `msp430g2955`,
//! `msp430f5172` or `msp430f5529`) to get the matching peripheral tokens in [`pac`].
//!
//! Requires `msp430-elf-gcc` installed and in $PATH to build for the target.
//!
//! ```rust,ignore
//! use msp430_spi::{pac::msp430g2553 as pac, prelude::*, spi::SpiConfig};
//! use embedded_hal::spi::MODE_0;
//!
//! let periph = pac::Peripherals::take().unwrap();
//! let mut spi = SpiConfig::new(periph.USCI_B0, MODE_0, true)
//!     .use_smclk(4)
//!     .init();
//! let reply = spi.transfer8(0x9F)?;
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

pub mod master;
pub mod pac;
pub mod prelude;
pub mod spi;
pub mod usi;

mod bitbang;
mod bits;
mod hw_traits;
mod util;

#[cfg(test)]
mod mock;
