//! SPI master on the USCI peripherals
//!
//! USCI_A0 and USCI_B0 can be used for SPI communication on the MSP430G2xx3, G2xx4/G2xx5 and
//! F5xxx devices. Only the MSP430 acting as a 3-pin master is supported.
//!
//! Begin by calling [`SpiConfig::new()`], or [`Spi::new()`] for mode 0, MSB first, clocked
//! straight from SMCLK. Configuration also routes the pins to the peripheral.
//!
//! [`Spi`] implements [`SpiMaster`] for 8, 16 and 9 bit frames, the embedded-hal
//! [`SpiBus`](embedded_hal::spi::SpiBus) trait for `u8` and `u16` words, and the non-blocking
//! [`FullDuplex`](embedded_hal_nb::spi::FullDuplex) trait from
//! [`embedded-hal-nb`](embedded_hal_nb).
//!
//! The USCI only shifts 8 bits at a time, so the extra bit of a 9-bit frame is clocked by hand on
//! the SPI pins while they are briefly switched back to GPIO.
//!
//! Pins used:
//!
//! MSP430G2xx3: USCI_A0 {SOMI: `P1.1`, SIMO: `P1.2`, CLK: `P1.4`}, USCI_B0 {CLK: `P1.5`,
//! SOMI: `P1.6`, SIMO: `P1.7`}.
//!
//! MSP430G2xx4/G2xx5: USCI_A0 {CLK: `P3.0`, SIMO: `P3.4`, SOMI: `P3.5`}, USCI_B0 {SIMO: `P3.1`,
//! SOMI: `P3.2`, CLK: `P3.3`}.
//!
//! MSP430F5172: USCI_A0 {CLK: `P1.0`, SIMO: `P1.1`, SOMI: `P1.2`}, USCI_B0 {CLK: `P1.3`,
//! SIMO: `P1.4`, SOMI: `P1.5`}.
//!
//! MSP430F5529: USCI_A0 {CLK: `P2.7`, SIMO: `P3.3`, SOMI: `P3.4`}, USCI_B0 {SIMO: `P3.0`,
//! SOMI: `P3.1`, CLK: `P3.2`}.
use crate::{
    bitbang::{release_usci_pins, select_usci_pins, ManualClock},
    bits::BitsExt,
    hw_traits::{
        gpio::GpioPeriph,
        usci::{Ucssel, UcxCtl0, UcxStat, UsciSpiPeriph},
    },
    master::{SpiMaster, NINTH_BIT},
    util::spin,
};
use embedded_hal::spi::{Mode, Phase, Polarity, MODE_0};
use nb::Error::WouldBlock;

/// Marks a USCI capable of SPI communication, along with the pins it drives.
pub trait SpiUsci: UsciSpiPeriph {
    /// Port carrying the serial clock
    type ClkPort: GpioPeriph;
    /// Serial clock pin mask
    const CLK: u8;
    /// Port carrying Slave In Master Out (MOSI)
    type SimoPort: GpioPeriph;
    /// Slave In Master Out pin mask
    const SIMO: u8;
    /// Port carrying Slave Out Master In (MISO)
    type SomiPort: GpioPeriph;
    /// Slave Out Master In pin mask
    const SOMI: u8;
    /// Whether the SPI function needs PxSEL2 set as well as PxSEL
    const SEL2: bool;
}

#[inline]
fn mode_bits(mode: Mode) -> UcxCtl0 {
    let mut ctl0 = UcxCtl0::empty();
    // UCCKPH set means data is captured on the first clock edge
    if mode.phase == Phase::CaptureOnFirstTransition {
        ctl0 |= UcxCtl0::UCCKPH;
    }
    if mode.polarity == Polarity::IdleHigh {
        ctl0 |= UcxCtl0::UCCKPL;
    }
    ctl0
}

/// Configuration object for a USCI peripheral being set up as an SPI master.
pub struct SpiConfig<USCI: SpiUsci> {
    usci: USCI,
    mode: Mode,
    msb_first: bool,
    ctl0: UcxCtl0,
    ssel: Ucssel,
    prescaler: u16,
    loopback: bool,
}

impl<USCI: SpiUsci> SpiConfig<USCI> {
    /// Begin configuring a USCI peripheral as a 3-pin SPI master clocked from SMCLK with no
    /// division.
    pub fn new(usci: USCI, mode: Mode, msb_first: bool) -> Self {
        let mut ctl0 = mode_bits(mode) | UcxCtl0::UCMST | UcxCtl0::UCSYNC;
        ctl0.set(UcxCtl0::UCMSB, msb_first);

        SpiConfig {
            usci,
            mode,
            msb_first,
            ctl0,
            ssel: Ucssel::Smclk,
            prescaler: 1,
            loopback: false,
        }
    }

    /// Derive SCLK from SMCLK divided by `clk_div`.
    #[inline]
    pub fn use_smclk(mut self, clk_div: u16) -> Self {
        self.ssel = Ucssel::Smclk;
        self.prescaler = clk_div;
        self
    }

    /// Derive SCLK from ACLK divided by `clk_div`.
    #[inline]
    pub fn use_aclk(mut self, clk_div: u16) -> Self {
        self.ssel = Ucssel::Aclk;
        self.prescaler = clk_div;
        self
    }

    /// Internally feed the transmitter output back into the receiver.
    #[inline]
    pub fn loopback(mut self, loopback: bool) -> Self {
        self.loopback = loopback;
        self
    }

    /// Route the SPI pins to the peripheral and perform hardware configuration.
    pub fn init(self) -> Spi<USCI> {
        select_usci_pins::<USCI>();

        let usci = self.usci;
        usci.ctl1_set_rst();

        usci.mctl_clear();
        usci.ctl0_wr(self.ctl0);
        usci.br_wr(self.prescaler);
        usci.stat_wr(if self.loopback {
            UcxStat::UCLISTEN
        } else {
            UcxStat::empty()
        });

        // Also clears UCSWRST
        usci.ctl1_wr(self.ssel.into());

        usci.txie_wr(false);
        usci.rxie_wr(false);

        Spi {
            usci,
            mode: self.mode,
            msb_first: self.msb_first,
        }
    }
}

/// A USCI peripheral configured as an SPI master.
pub struct Spi<USCI: SpiUsci> {
    usci: USCI,
    mode: Mode,
    msb_first: bool,
}

impl<USCI: SpiUsci> Spi<USCI> {
    /// Configure `usci` for SPI mode 0, MSB first, SCLK = SMCLK.
    #[inline]
    pub fn new(usci: USCI) -> Self {
        SpiConfig::new(usci, MODE_0, true).init()
    }

    /// Change the SPI mode
    pub fn change_mode(&mut self, mode: Mode) {
        self.usci.ctl1_set_rst();
        let ctl0 = self.usci.ctl0_rd() - (UcxCtl0::UCCKPH | UcxCtl0::UCCKPL);
        self.usci.ctl0_wr(ctl0 | mode_bits(mode));
        self.usci.ctl1_clear_rst();
        self.mode = mode;
    }

    /// Enable Rx interrupts, which fire when a byte is ready to be read
    #[inline(always)]
    pub fn set_rx_interrupt(&mut self) {
        self.usci.rxie_wr(true);
    }

    /// Disable Rx interrupts, which fire when a byte is ready to be read
    #[inline(always)]
    pub fn clear_rx_interrupt(&mut self) {
        self.usci.rxie_wr(false);
    }

    /// Enable Tx interrupts, which fire when the transmit buffer is empty
    #[inline(always)]
    pub fn set_tx_interrupt(&mut self) {
        self.usci.txie_wr(true);
    }

    /// Disable Tx interrupts, which fire when the transmit buffer is empty
    #[inline(always)]
    pub fn clear_tx_interrupt(&mut self) {
        self.usci.txie_wr(false);
    }

    /// Hold the peripheral in reset, return the pins to GPIO and give back the peripheral.
    pub fn free(self) -> USCI {
        self.usci.ctl1_set_rst();
        release_usci_pins::<USCI>();
        self.usci
    }

    fn recv_byte(&mut self) -> nb::Result<u8, SpiErr> {
        if self.usci.rxifg_rd() {
            if self.usci.stat_rd().contains(UcxStat::UCOE) {
                Err(nb::Error::Other(SpiErr::Overrun(self.usci.rxbuf_rd())))
            } else {
                Ok(self.usci.rxbuf_rd())
            }
        } else {
            Err(WouldBlock)
        }
    }

    fn send_byte(&mut self, byte: u8) -> nb::Result<(), SpiErr> {
        if self.usci.txifg_rd() {
            self.usci.txbuf_wr(byte);
            Ok(())
        } else {
            Err(WouldBlock)
        }
    }

    fn shift_ninth_bit(&mut self, bit: bool) -> bool {
        let mut pins = ManualClock::<USCI>::take_pins(self.mode.polarity == Polarity::IdleHigh);
        pins.shift_bit(bit, self.mode.phase)
    }
}

impl<USCI: SpiUsci> SpiMaster for Spi<USCI> {
    /// ## Errors
    /// - Returns `SpiErr::Overrun` if a previously received byte was never read.
    fn transfer8(&mut self, byte: u8) -> Result<u8, SpiErr> {
        nb::block!(self.send_byte(byte))?;
        nb::block!(self.recv_byte())
    }

    fn transfer16(&mut self, word: u16) -> Result<u16, SpiErr> {
        let [hi, lo] = word.to_be_bytes();
        if self.msb_first {
            let hi = self.transfer8(hi)?;
            let lo = self.transfer8(lo)?;
            Ok(u16::from_be_bytes([hi, lo]))
        } else {
            let lo = self.transfer8(lo)?;
            let hi = self.transfer8(hi)?;
            Ok(u16::from_be_bytes([hi, lo]))
        }
    }

    fn transfer9(&mut self, word: u16) -> Result<u16, SpiErr> {
        let ninth = word.check(NINTH_BIT) != 0;
        let [_, low] = word.to_be_bytes();

        let (ninth, low) = if self.msb_first {
            let ninth = self.shift_ninth_bit(ninth);
            (ninth, self.transfer8(low)?)
        } else {
            let low = self.transfer8(low)?;
            (self.shift_ninth_bit(ninth), low)
        };

        let word = u16::from(low);
        Ok(if ninth { word.set(NINTH_BIT) } else { word })
    }

    fn wait_idle(&mut self) -> Result<(), SpiErr> {
        while self.usci.stat_rd().contains(UcxStat::UCBUSY) {
            spin();
        }
        Ok(())
    }
}

/// SPI transmit/receive errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum SpiErr {
    /// Data in the receive buffer was overwritten before it was read. The contained data is the
    /// new contents of the receive buffer.
    Overrun(u8),
}

mod ehal1 {
    use super::*;
    use crate::master::spi_bus_impl;
    use embedded_hal::spi::{Error, ErrorKind, ErrorType};

    impl Error for SpiErr {
        fn kind(&self) -> ErrorKind {
            match self {
                SpiErr::Overrun(_) => ErrorKind::Overrun,
            }
        }
    }

    impl<USCI: SpiUsci> ErrorType for Spi<USCI> {
        type Error = SpiErr;
    }

    spi_bus_impl!(Spi<USCI: SpiUsci>, u8, transfer8);
    spi_bus_impl!(Spi<USCI: SpiUsci>, u16, transfer16);
}

mod ehal_nb1 {
    use super::*;
    use embedded_hal_nb::{nb, spi::FullDuplex};

    impl<USCI: SpiUsci> FullDuplex<u8> for Spi<USCI> {
        fn read(&mut self) -> nb::Result<u8, Self::Error> {
            self.recv_byte()
        }

        fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
            self.send_byte(word)
        }
    }
}

#[cfg(feature = "embedded-hal-02")]
mod ehal02 {
    use super::*;
    use embedded_hal_02::spi::FullDuplex;

    impl<USCI: SpiUsci> FullDuplex<u8> for Spi<USCI> {
        type Error = SpiErr;
        fn read(&mut self) -> nb::Result<u8, Self::Error> {
            self.recv_byte()
        }

        fn send(&mut self, word: u8) -> nb::Result<(), Self::Error> {
            self.send_byte(word)
        }
    }

    // Implementing FullDuplex above gets us a blocking write and transfer implementation for free
    impl<USCI: SpiUsci> embedded_hal_02::blocking::spi::write::Default<u8> for Spi<USCI> {}
    impl<USCI: SpiUsci> embedded_hal_02::blocking::spi::transfer::Default<u8> for Spi<USCI> {}
}
