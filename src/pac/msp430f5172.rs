//! MSP430F5172 peripherals
//!
//! USCI_A0 and USCI_B0 share port 1.

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

gpio_impl!(P1 => pxin: 0x0200, pxout: 0x0202, pxdir: 0x0204, pxren: 0x0206, pxsel: 0x020A);

// UCxCTL1 is the low byte of UCxCTLW0
usci_impl!(USCI_A0 => ctl0: 0x05C1, ctl1: 0x05C0, br0: 0x05C6, br1: 0x05C7, mctl: 0x05C8,
    stat: 0x05CA, rxbuf: 0x05CC, txbuf: 0x05CE, ie: 0x05DC => [0x01, 0x02],
    ifg: 0x05DD => [0x01, 0x02]);

usci_impl!(USCI_B0 => ctl0: 0x05E1, ctl1: 0x05E0, br0: 0x05E6, br1: 0x05E7,
    stat: 0x05EA, rxbuf: 0x05EC, txbuf: 0x05EE, ie: 0x05FC => [0x01, 0x02],
    ifg: 0x05FD => [0x01, 0x02]);

impl SpiUsci for USCI_A0 {
    type ClkPort = P1;
    const CLK: u8 = 1 << 0;
    type SimoPort = P1;
    const SIMO: u8 = 1 << 1;
    type SomiPort = P1;
    const SOMI: u8 = 1 << 2;
    const SEL2: bool = false;
}

impl SpiUsci for USCI_B0 {
    type ClkPort = P1;
    const CLK: u8 = 1 << 3;
    type SimoPort = P1;
    const SIMO: u8 = 1 << 4;
    type SomiPort = P1;
    const SOMI: u8 = 1 << 5;
    const SEL2: bool = false;
}
