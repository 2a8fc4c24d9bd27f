//! Manual clocking of a single bit on the USCI pins.
//!
//! The USCI shifters only handle 7 or 8 bit characters, so the extra bit of a 9-bit frame is
//! clocked by temporarily switching the SPI pins back to GPIO.

use crate::hw_traits::{gpio::GpioPeriph, Steal};
use crate::spi::SpiUsci;
use core::marker::PhantomData;
use embedded_hal::spi::Phase;

#[derive(Clone, Copy)]
struct PortState {
    dir: u8,
    out: u8,
    ren: u8,
}

impl PortState {
    #[inline(always)]
    fn save<P: GpioPeriph>(port: &P) -> Self {
        PortState {
            dir: port.pxdir_rd(),
            out: port.pxout_rd(),
            ren: port.pxren_rd(),
        }
    }

    #[inline(always)]
    fn restore<P: GpioPeriph>(self, port: &P) {
        port.pxdir_wr(self.dir);
        port.pxout_wr(self.out);
        port.pxren_wr(self.ren);
    }
}

#[inline(always)]
fn select<P: GpioPeriph>(mask: u8, sel2: bool) {
    let port = unsafe { P::steal() };
    port.pxsel_set(mask);
    if sel2 {
        port.pxsel2_set(mask);
    } else {
        port.pxsel2_clear(mask);
    }
}

#[inline(always)]
fn deselect<P: GpioPeriph>(mask: u8) {
    let port = unsafe { P::steal() };
    port.pxsel_clear(mask);
    port.pxsel2_clear(mask);
}

/// Route CLK, SIMO and SOMI to the USCI peripheral
pub(crate) fn select_usci_pins<USCI: SpiUsci>() {
    select::<USCI::ClkPort>(USCI::CLK, USCI::SEL2);
    select::<USCI::SimoPort>(USCI::SIMO, USCI::SEL2);
    select::<USCI::SomiPort>(USCI::SOMI, USCI::SEL2);
}

/// Hand CLK, SIMO and SOMI back to the GPIO module
pub(crate) fn release_usci_pins<USCI: SpiUsci>() {
    deselect::<USCI::ClkPort>(USCI::CLK);
    deselect::<USCI::SimoPort>(USCI::SIMO);
    deselect::<USCI::SomiPort>(USCI::SOMI);
}

/// The SPI pins of `USCI`, borrowed from the peripheral as plain GPIO.
///
/// Dropping this returns the pins to the peripheral and restores the direction, output and
/// resistor registers of their ports.
pub(crate) struct ManualClock<USCI: SpiUsci> {
    clk: PortState,
    simo: PortState,
    somi: PortState,
    idle_high: bool,
    _usci: PhantomData<USCI>,
}

impl<USCI: SpiUsci> ManualClock<USCI> {
    pub(crate) fn take_pins(idle_high: bool) -> Self {
        let clk = unsafe { USCI::ClkPort::steal() };
        let simo = unsafe { USCI::SimoPort::steal() };
        let somi = unsafe { USCI::SomiPort::steal() };

        // Snapshot before touching anything, the three pins may share a port
        let saved = ManualClock {
            clk: PortState::save(&clk),
            simo: PortState::save(&simo),
            somi: PortState::save(&somi),
            idle_high,
            _usci: PhantomData,
        };

        clk.pxren_clear(USCI::CLK);
        simo.pxren_clear(USCI::SIMO);
        somi.pxren_clear(USCI::SOMI);

        if idle_high {
            clk.pxout_set(USCI::CLK);
        } else {
            clk.pxout_clear(USCI::CLK);
        }
        simo.pxout_clear(USCI::SIMO);
        somi.pxout_clear(USCI::SOMI);

        clk.pxdir_set(USCI::CLK);
        simo.pxdir_set(USCI::SIMO);
        somi.pxdir_clear(USCI::SOMI);

        release_usci_pins::<USCI>();
        saved
    }

    /// Clock out one bit on SIMO and return the level sampled on SOMI.
    pub(crate) fn shift_bit(&mut self, bit: bool, phase: Phase) -> bool {
        match phase {
            Phase::CaptureOnFirstTransition => {
                self.drive_simo(bit);
                self.drive_clk(true);
                let sampled = self.sample_somi();
                self.drive_clk(false);
                sampled
            }
            Phase::CaptureOnSecondTransition => {
                self.drive_clk(true);
                self.drive_simo(bit);
                self.drive_clk(false);
                self.sample_somi()
            }
        }
    }

    #[inline(always)]
    fn drive_clk(&self, active: bool) {
        let clk = unsafe { USCI::ClkPort::steal() };
        if active != self.idle_high {
            clk.pxout_set(USCI::CLK);
        } else {
            clk.pxout_clear(USCI::CLK);
        }
    }

    #[inline(always)]
    fn drive_simo(&self, high: bool) {
        let simo = unsafe { USCI::SimoPort::steal() };
        if high {
            simo.pxout_set(USCI::SIMO);
        } else {
            simo.pxout_clear(USCI::SIMO);
        }
    }

    #[inline(always)]
    fn sample_somi(&self) -> bool {
        let somi = unsafe { USCI::SomiPort::steal() };
        somi.pxin_rd() & USCI::SOMI != 0
    }
}

impl<USCI: SpiUsci> Drop for ManualClock<USCI> {
    fn drop(&mut self) {
        select_usci_pins::<USCI>();
        self.somi.restore(&unsafe { USCI::SomiPort::steal() });
        self.simo.restore(&unsafe { USCI::SimoPort::steal() });
        self.clk.restore(&unsafe { USCI::ClkPort::steal() });
    }
}
