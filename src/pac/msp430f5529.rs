//! MSP430F5529 peripherals
//!
//! The USCI_A0 clock is on P2.7 while its data pins are on port 3 with USCI_B0.

use crate::hw_traits::{gpio::gpio_impl, usci::usci_impl};
use crate::spi::SpiUsci;

peripherals!(
    /// Digital I/O port 2
    P2,
    /// Digital I/O port 3
    P3,
    /// USCI_A0 in SPI mode
    USCI_A0,
    /// USCI_B0 in SPI mode
    USCI_B0,
);

gpio_impl!(P2 => pxin: 0x0201, pxout: 0x0203, pxdir: 0x0205, pxren: 0x0207, pxsel: 0x020B);
gpio_impl!(P3 => pxin: 0x0220, pxout: 0x0222, pxdir: 0x0224, pxren: 0x0226, pxsel: 0x022A);

usci_impl!(USCI_A0 => ctl0: 0x05C1, ctl1: 0x05C0, br0: 0x05C6, br1: 0x05C7, mctl: 0x05C8,
    stat: 0x05CA, rxbuf: 0x05CC, txbuf: 0x05CE, ie: 0x05DC => [0x01, 0x02],
    ifg: 0x05DD => [0x01, 0x02]);

usci_impl!(USCI_B0 => ctl0: 0x05E1, ctl1: 0x05E0, br0: 0x05E6, br1: 0x05E7,
    stat: 0x05EA, rxbuf: 0x05EC, txbuf: 0x05EE, ie: 0x05FC => [0x01, 0x02],
    ifg: 0x05FD => [0x01, 0x02]);

impl SpiUsci for USCI_A0 {
    type ClkPort = P2;
    const CLK: u8 = 1 << 7;
    type SimoPort = P3;
    const SIMO: u8 = 1 << 3;
    type SomiPort = P3;
    const SOMI: u8 = 1 << 4;
    const SEL2: bool = false;
}

impl SpiUsci for USCI_B0 {
    type ClkPort = P3;
    const CLK: u8 = 1 << 2;
    type SimoPort = P3;
    const SIMO: u8 = 1 << 0;
    type SomiPort = P3;
    const SOMI: u8 = 1 << 1;
    const SEL2: bool = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peripherals_are_taken_once() {
        assert!(Peripherals::take().is_some());
        assert!(Peripherals::take().is_none());
    }

    #[test]
    fn usci_a0_clock_is_on_port_2() {
        assert_pins!(USCI_A0 => clk: P2, 1 << 7; simo: P3, 1 << 3; somi: P3, 1 << 4; sel2: false);
    }

    #[test]
    fn usci_b0_pins_on_port_3() {
        assert_pins!(USCI_B0 => clk: P3, 1 << 2; simo: P3, 1 << 0; somi: P3, 1 << 1; sel2: false);
    }
}
