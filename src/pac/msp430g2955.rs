//! MSP430G2xx4/G2xx5 peripherals (MSP430G2955 and relatives)
//!
//! Both USCI modules sit on port 3 and only need P3SEL set.

use crate::hw_traits::{gpio::gpio_impl, usci::usci_impl};
use crate::spi::SpiUsci;

peripherals!(
    /// Digital I/O port 3
    P3,
    /// USCI_A0 in SPI mode
    USCI_A0,
    /// USCI_B0 in SPI mode
    USCI_B0,
);

gpio_impl!(P3 => pxin: 0x0018, pxout: 0x0019, pxdir: 0x001A, pxren: 0x0010, pxsel: 0x001B,
    pxsel2: 0x0043);

usci_impl!(USCI_A0 => ctl0: 0x0060, ctl1: 0x0061, br0: 0x0062, br1: 0x0063, mctl: 0x0064,
    stat: 0x0065, rxbuf: 0x0066, txbuf: 0x0067, ie: 0x0001 => [0x01, 0x02],
    ifg: 0x0003 => [0x01, 0x02]);

usci_impl!(USCI_B0 => ctl0: 0x0068, ctl1: 0x0069, br0: 0x006A, br1: 0x006B,
    stat: 0x006D, rxbuf: 0x006E, txbuf: 0x006F, ie: 0x0001 => [0x04, 0x08],
    ifg: 0x0003 => [0x04, 0x08]);

impl SpiUsci for USCI_A0 {
    type ClkPort = P3;
    const CLK: u8 = 1 << 0;
    type SimoPort = P3;
    const SIMO: u8 = 1 << 4;
    type SomiPort = P3;
    const SOMI: u8 = 1 << 5;
    const SEL2: bool = false;
}

impl SpiUsci for USCI_B0 {
    type ClkPort = P3;
    const CLK: u8 = 1 << 3;
    type SimoPort = P3;
    const SIMO: u8 = 1 << 1;
    type SomiPort = P3;
    const SOMI: u8 = 1 << 2;
    const SEL2: bool = false;
}
