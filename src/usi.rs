//! SPI master on the USI peripheral
//!
//! The Universal Serial Interface of the MSP430G2xx1 devices (e.g. MSP430G2231) has a 16-bit
//! shift register and a bit counter, so unlike the USCI it can shift 8, 16 and 9 bit frames
//! natively.
//!
//! Begin by calling [`UsiConfig::new()`], or [`UsiSpi::new()`] for mode 0, MSB first, clocked
//! straight from SMCLK.
//!
//! Pins used: {SCLK: `P1.5`, SDO (MOSI): `P1.6`, SDI (MISO): `P1.7`}. The USI takes these pins
//! over through its own port enables, no PxSEL setup is needed.
use crate::{
    hw_traits::usi::{UsiCkCtl, UsiCnt, UsiCtl0, UsiCtl1, UsiPeriph},
    master::{SpiMaster, NINE_BIT_MASK},
    util::busy_wait,
};
use core::convert::Infallible;
use embedded_hal::spi::{Mode, Phase, Polarity, MODE_0};
use nb::Error::WouldBlock;

/// USI clock divider
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum UsiDiv {
    _1 = 0,
    _2 = 1,
    _4 = 2,
    _8 = 3,
    _16 = 4,
    _32 = 5,
    _64 = 6,
    _128 = 7,
}

// USISSELx values
const USISSEL_ACLK: u8 = 1;
const USISSEL_SMCLK: u8 = 2;

#[inline]
fn ckctl_bits(ssel: u8, div: UsiDiv, idle_high: bool) -> UsiCkCtl {
    let mut ckctl = UsiCkCtl::from_bits_retain(((div as u8) << 5) | (ssel << 2));
    ckctl.set(UsiCkCtl::USICKPL, idle_high);
    ckctl
}

/// Configuration object for the USI being set up as an SPI master.
pub struct UsiConfig<USI: UsiPeriph> {
    usi: USI,
    msb_first: bool,
    idle_high: bool,
    ctl0: UsiCtl0,
    ctl1: UsiCtl1,
    ckctl: UsiCkCtl,
}

impl<USI: UsiPeriph> UsiConfig<USI> {
    /// Begin configuring the USI as an SPI master clocked from SMCLK with no division.
    pub fn new(usi: USI, mode: Mode, msb_first: bool) -> Self {
        let mut ctl0 = UsiCtl0::USIPE7
            | UsiCtl0::USIPE6
            | UsiCtl0::USIPE5
            | UsiCtl0::USIMST
            | UsiCtl0::USIOE;
        ctl0.set(UsiCtl0::USILSB, !msb_first);

        // USICKPH set means data is captured on the leading edge
        let mut ctl1 = UsiCtl1::empty();
        ctl1.set(UsiCtl1::USICKPH, mode.phase == Phase::CaptureOnFirstTransition);

        let idle_high = mode.polarity == Polarity::IdleHigh;
        UsiConfig {
            usi,
            msb_first,
            idle_high,
            ctl0,
            ctl1,
            ckctl: ckctl_bits(USISSEL_SMCLK, UsiDiv::_1, idle_high),
        }
    }

    /// Derive SCLK from SMCLK divided by `div`.
    #[inline]
    pub fn use_smclk(mut self, div: UsiDiv) -> Self {
        self.ckctl = ckctl_bits(USISSEL_SMCLK, div, self.idle_high);
        self
    }

    /// Derive SCLK from ACLK divided by `div`.
    #[inline]
    pub fn use_aclk(mut self, div: UsiDiv) -> Self {
        self.ckctl = ckctl_bits(USISSEL_ACLK, div, self.idle_high);
        self
    }

    /// Perform hardware configuration and hand out the SPI master.
    pub fn init(self) -> UsiSpi<USI> {
        let usi = self.usi;
        usi.ctl0_set_rst();
        usi.ctl1_wr(self.ctl1);
        usi.ckctl_wr(self.ckctl);
        // Also clears USISWRST
        usi.ctl0_wr(self.ctl0);
        usi.sr_wr(0);

        UsiSpi {
            usi,
            msb_first: self.msb_first,
            pending: false,
        }
    }
}

/// The USI configured as an SPI master.
pub struct UsiSpi<USI: UsiPeriph> {
    usi: USI,
    msb_first: bool,
    // A non-blocking write is waiting to be read back
    pending: bool,
}

impl<USI: UsiPeriph> UsiSpi<USI> {
    /// Configure `usi` for SPI mode 0, MSB first, SCLK = SMCLK.
    #[inline]
    pub fn new(usi: USI) -> Self {
        UsiConfig::new(usi, MODE_0, true).init()
    }

    /// Hold the USI in reset, releasing its pins, and give back the peripheral.
    pub fn free(self) -> USI {
        self.usi.ctl0_set_rst();
        self.usi.ctl0_wr(UsiCtl0::USISWRST);
        self.usi
    }

    #[inline]
    fn start(&mut self, bits: u8, wide: bool) {
        let mut cnt = UsiCnt::from_bits_truncate(bits) & UsiCnt::USICNT;
        cnt.set(UsiCnt::USI16B, wide);
        self.usi.cnt_wr(cnt);
    }

    fn shift(&mut self, bits: u8, wide: bool) {
        self.start(bits, wide);
        busy_wait(|| self.usi.ifg_rd());
    }

    fn is_shifting(&self) -> bool {
        !(self.usi.cnt_rd() & UsiCnt::USICNT).is_empty()
    }

    fn recv_byte(&mut self) -> nb::Result<u8, Infallible> {
        if self.pending && self.usi.ifg_rd() {
            self.pending = false;
            Ok(self.usi.srl_rd())
        } else {
            Err(WouldBlock)
        }
    }

    fn send_byte(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.is_shifting() {
            return Err(WouldBlock);
        }
        self.usi.srl_wr(byte);
        self.start(8, false);
        self.pending = true;
        Ok(())
    }
}

impl<USI: UsiPeriph> SpiMaster for UsiSpi<USI> {
    fn transfer8(&mut self, byte: u8) -> Result<u8, Infallible> {
        self.usi.srl_wr(byte);
        self.shift(8, false);
        Ok(self.usi.srl_rd())
    }

    fn transfer16(&mut self, word: u16) -> Result<u16, Infallible> {
        self.usi.sr_wr(word);
        self.shift(16, true);
        Ok(self.usi.sr_rd())
    }

    fn transfer9(&mut self, word: u16) -> Result<u16, Infallible> {
        // MSB first shifts out of bit 15 and in at bit 0, LSB first out of bit 0 and in at bit 15
        if self.msb_first {
            self.usi.sr_wr(word << 7);
            self.shift(9, true);
            Ok(self.usi.sr_rd() & NINE_BIT_MASK)
        } else {
            self.usi.sr_wr(word);
            self.shift(9, true);
            Ok(self.usi.sr_rd() >> 7)
        }
    }

    fn wait_idle(&mut self) -> Result<(), Infallible> {
        busy_wait(|| !self.is_shifting());
        Ok(())
    }
}

mod ehal1 {
    use super::*;
    use crate::master::spi_bus_impl;
    use embedded_hal::spi::ErrorType;

    impl<USI: UsiPeriph> ErrorType for UsiSpi<USI> {
        type Error = Infallible;
    }

    spi_bus_impl!(UsiSpi<USI: UsiPeriph>, u8, transfer8);
    spi_bus_impl!(UsiSpi<USI: UsiPeriph>, u16, transfer16);
}

mod ehal_nb1 {
    use super::*;
    use embedded_hal_nb::{nb, spi::FullDuplex};

    /// Each `write` must be followed by a `read` before the next byte is clocked.
    impl<USI: UsiPeriph> FullDuplex<u8> for UsiSpi<USI> {
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

    impl<USI: UsiPeriph> FullDuplex<u8> for UsiSpi<USI> {
        type Error = Infallible;
        fn read(&mut self) -> nb::Result<u8, Self::Error> {
            self.recv_byte()
        }

        fn send(&mut self, word: u8) -> nb::Result<(), Self::Error> {
            self.send_byte(word)
        }
    }

    impl<USI: UsiPeriph> embedded_hal_02::blocking::spi::write::Default<u8> for UsiSpi<USI> {}
    impl<USI: UsiPeriph> embedded_hal_02::blocking::spi::transfer::Default<u8> for UsiSpi<USI> {}
}
