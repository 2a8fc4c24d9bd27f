//! MSP430G2xx3 peripherals (MSP430G2553 and relatives)
//!
//! Both USCI modules sit on port 1. The SPI function needs P1SEL and P1SEL2 set.

use crate::hw_traits::{gpio::gpio_impl, usci::usci_impl};
use crate::spi::SpiUsci;

peripherals!(
    /// Digital I/O port 1
    P1,
    /// USCI_A0 in SPI mode
    USCI_A0,
    /// USCI_B0 in SPI mode
    USCI_B0,
);

gpio_impl!(P1 => pxin: 0x0020, pxout: 0x0021, pxdir: 0x0022, pxren: 0x0027, pxsel: 0x0026,
    pxsel2: 0x0041);

usci_impl!(USCI_A0 => ctl0: 0x0060, ctl1: 0x0061, br0: 0x0062, br1: 0x0063, mctl: 0x0064,
    stat: 0x0065, rxbuf: 0x0066, txbuf: 0x0067, ie: 0x0001 => [0x01, 0x02],
    ifg: 0x0003 => [0x01, 0x02]);

usci_impl!(USCI_B0 => ctl0: 0x0068, ctl1: 0x0069, br0: 0x006A, br1: 0x006B,
    stat: 0x006D, rxbuf: 0x006E, txbuf: 0x006F, ie: 0x0001 => [0x04, 0x08],
    ifg: 0x0003 => [0x04, 0x08]);

impl SpiUsci for USCI_A0 {
    type ClkPort = P1;
    const CLK: u8 = 1 << 4;
    type SimoPort = P1;
    const SIMO: u8 = 1 << 2;
    type SomiPort = P1;
    const SOMI: u8 = 1 << 1;
    const SEL2: bool = true;
}

impl SpiUsci for USCI_B0 {
    type ClkPort = P1;
    const CLK: u8 = 1 << 5;
    type SimoPort = P1;
    const SIMO: u8 = 1 << 7;
    type SomiPort = P1;
    const SOMI: u8 = 1 << 6;
    const SEL2: bool = true;
}
