//! Register-level model of the ports, USCI and USI used by the unit tests.
//!
//! State is thread-local, so every test starts from power-on values. The USCI replies to each
//! transmitted byte with the next queued reply (or echoes it in loopback mode) and the USI shifter
//! is emulated bit by bit.

use crate::bits::BitsExt;
use crate::hw_traits::{
    gpio::GpioPeriph,
    usci::{UcxCtl0, UcxCtl1, UcxStat, UsciSpiPeriph},
    usi::{UsiCkCtl, UsiCnt, UsiCtl0, UsiCtl1, UsiPeriph},
    Steal,
};
use crate::spi::SpiUsci;
use std::{cell::RefCell, collections::VecDeque, vec::Vec};

pub const SIMO: u8 = 1 << 3;
pub const SOMI: u8 = 1 << 4;
pub const CLK: u8 = 1 << 7;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortRegs {
    pub input: u8,
    pub out: u8,
    pub dir: u8,
    pub ren: u8,
    pub sel: u8,
    pub sel2: u8,
}

#[derive(Default)]
pub struct UsciRegs {
    pub ctl0: u8,
    pub ctl1: u8,
    pub br: u16,
    pub mctl: u8,
    pub stat: u8,
    pub rxbuf: u8,
    pub rxifg: bool,
    pub rxie: bool,
    pub txie: bool,
    pub ctl0_written_in_reset: bool,
    pub sent: Vec<u8>,
    pub replies: VecDeque<u8>,
}

#[derive(Default)]
pub struct UsiRegs {
    pub ctl0: u8,
    pub ctl1: u8,
    pub ckctl: u8,
    pub cnt: u8,
    pub sr: u16,
    pub out_bits: Vec<bool>,
    pub in_bits: VecDeque<bool>,
    // Leave writes to USICNT pending until `usi_finish`
    pub stall: bool,
}

impl UsiRegs {
    fn shift(&mut self, reg: UsiCnt) {
        let count = (reg & UsiCnt::USICNT).bits();
        let width: u8 = if reg.contains(UsiCnt::USI16B) { 16 } else { 8 };
        let mask: u16 = if width == 16 { 0xFFFF } else { 0x00FF };
        let lsb_first = self.ctl0 & UsiCtl0::USILSB.bits() != 0;

        let mut sr = self.sr & mask;
        for _ in 0..count {
            let input = u16::from(self.in_bits.pop_front().unwrap_or(false));
            if lsb_first {
                self.out_bits.push(sr.check(0) != 0);
                sr = (sr >> 1) | (input << (width - 1));
            } else {
                self.out_bits.push(sr.check(width - 1) != 0);
                sr = ((sr << 1) | input) & mask;
            }
        }
        self.sr = (self.sr & !mask) | sr;
        self.cnt = (reg - UsiCnt::USICNT).bits();
        self.ctl1 |= UsiCtl1::USIIFG.bits();
    }
}

/// Bus activity in the order it happened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trace {
    /// A byte written to the USCI transmit buffer
    Byte(u8),
    /// A change of the CLK pin output, with the SIMO level at that moment
    Clk { high: bool, simo: bool },
}

#[derive(Default)]
pub struct Hw {
    pub ports: [PortRegs; 2],
    pub usci: UsciRegs,
    pub usi: UsiRegs,
    pub trace: Vec<Trace>,
}

thread_local! {
    static HW: RefCell<Hw> = RefCell::new(Hw::default());
}

pub fn with<R>(f: impl FnOnce(&mut Hw) -> R) -> R {
    HW.with(|hw| f(&mut hw.borrow_mut()))
}

/// Queue bytes for the USCI slave to answer with
pub fn reply_with(bytes: &[u8]) {
    with(|hw| hw.usci.replies.extend(bytes.iter().copied()));
}

/// Queue bits for the USI slave to drive on SDI
pub fn usi_drive(bits: &[bool]) {
    with(|hw| hw.usi.in_bits.extend(bits.iter().copied()));
}

/// Complete a transfer left pending by a stalled USI
pub fn usi_finish() {
    with(|hw| {
        let reg = UsiCnt::from_bits_retain(hw.usi.cnt);
        hw.usi.shift(reg);
    })
}

impl Hw {
    fn write_out(&mut self, port: usize, out: u8) {
        let before = self.ports[port].out;
        self.ports[port].out = out;
        // CLK lives on the second port
        if port == 1 && (before ^ out) & CLK != 0 {
            self.trace.push(Trace::Clk {
                high: out & CLK != 0,
                simo: self.ports[0].out & SIMO != 0,
            });
        }
    }
}

macro_rules! mock_port {
    ($Port:ident, $idx:expr) => {
        pub struct $Port;

        impl Steal for $Port {
            unsafe fn steal() -> Self {
                $Port
            }
        }

        impl GpioPeriph for $Port {
            fn pxin_rd(&self) -> u8 {
                with(|hw| hw.ports[$idx].input)
            }

            fn pxout_rd(&self) -> u8 {
                with(|hw| hw.ports[$idx].out)
            }
            fn pxout_wr(&self, bits: u8) {
                with(|hw| hw.write_out($idx, bits))
            }
            fn pxout_set(&self, bits: u8) {
                with(|hw| hw.write_out($idx, hw.ports[$idx].out | bits))
            }
            fn pxout_clear(&self, bits: u8) {
                with(|hw| hw.write_out($idx, hw.ports[$idx].out & !bits))
            }

            fn pxdir_rd(&self) -> u8 {
                with(|hw| hw.ports[$idx].dir)
            }
            fn pxdir_wr(&self, bits: u8) {
                with(|hw| hw.ports[$idx].dir = bits)
            }
            fn pxdir_set(&self, bits: u8) {
                with(|hw| hw.ports[$idx].dir |= bits)
            }
            fn pxdir_clear(&self, bits: u8) {
                with(|hw| hw.ports[$idx].dir &= !bits)
            }

            fn pxren_rd(&self) -> u8 {
                with(|hw| hw.ports[$idx].ren)
            }
            fn pxren_wr(&self, bits: u8) {
                with(|hw| hw.ports[$idx].ren = bits)
            }
            fn pxren_set(&self, bits: u8) {
                with(|hw| hw.ports[$idx].ren |= bits)
            }
            fn pxren_clear(&self, bits: u8) {
                with(|hw| hw.ports[$idx].ren &= !bits)
            }

            fn pxsel_rd(&self) -> u8 {
                with(|hw| hw.ports[$idx].sel)
            }
            fn pxsel_wr(&self, bits: u8) {
                with(|hw| hw.ports[$idx].sel = bits)
            }
            fn pxsel_set(&self, bits: u8) {
                with(|hw| hw.ports[$idx].sel |= bits)
            }
            fn pxsel_clear(&self, bits: u8) {
                with(|hw| hw.ports[$idx].sel &= !bits)
            }

            fn pxsel2_set(&self, bits: u8) {
                with(|hw| hw.ports[$idx].sel2 |= bits)
            }
            fn pxsel2_clear(&self, bits: u8) {
                with(|hw| hw.ports[$idx].sel2 &= !bits)
            }
        }
    };
}

mock_port!(MockP1, 0);
mock_port!(MockP2, 1);

// A USCI with its data pins on one port and its clock on another, like USCI_A0 on the F5529.
// Both mock USCIs share the same register model.
macro_rules! mock_usci {
    ($Usci:ident, sel2: $sel2:expr) => {
        pub struct $Usci;

        impl SpiUsci for $Usci {
            type ClkPort = MockP2;
            const CLK: u8 = CLK;
            type SimoPort = MockP1;
            const SIMO: u8 = SIMO;
            type SomiPort = MockP1;
            const SOMI: u8 = SOMI;
            const SEL2: bool = $sel2;
        }

        impl UsciSpiPeriph for $Usci {
            fn ctl1_set_rst(&self) {
                with(|hw| hw.usci.ctl1 |= UcxCtl1::UCSWRST.bits())
            }

            fn ctl1_clear_rst(&self) {
                with(|hw| hw.usci.ctl1 &= !UcxCtl1::UCSWRST.bits())
            }

            fn ctl1_wr(&self, reg: UcxCtl1) {
                with(|hw| hw.usci.ctl1 = reg.bits())
            }

            fn ctl0_rd(&self) -> UcxCtl0 {
                with(|hw| UcxCtl0::from_bits_retain(hw.usci.ctl0))
            }

            fn ctl0_wr(&self, reg: UcxCtl0) {
                with(|hw| {
                    hw.usci.ctl0 = reg.bits();
                    hw.usci.ctl0_written_in_reset = hw.usci.ctl1 & UcxCtl1::UCSWRST.bits() != 0;
                })
            }

            fn br_wr(&self, prescaler: u16) {
                with(|hw| hw.usci.br = prescaler)
            }

            fn mctl_clear(&self) {
                with(|hw| hw.usci.mctl = 0)
            }

            fn stat_rd(&self) -> UcxStat {
                with(|hw| UcxStat::from_bits_retain(hw.usci.stat))
            }

            fn stat_wr(&self, reg: UcxStat) {
                with(|hw| hw.usci.stat = reg.bits())
            }

            fn rxbuf_rd(&self) -> u8 {
                with(|hw| {
                    hw.usci.rxifg = false;
                    hw.usci.stat &= !UcxStat::UCOE.bits();
                    hw.usci.rxbuf
                })
            }

            fn txbuf_wr(&self, val: u8) {
                with(|hw| {
                    hw.trace.push(Trace::Byte(val));
                    hw.usci.sent.push(val);
                    let reply = if hw.usci.stat & UcxStat::UCLISTEN.bits() != 0 {
                        val
                    } else {
                        hw.usci.replies.pop_front().unwrap_or(0xFF)
                    };
                    if hw.usci.rxifg {
                        hw.usci.stat |= UcxStat::UCOE.bits();
                    }
                    hw.usci.rxbuf = reply;
                    hw.usci.rxifg = true;
                })
            }

            fn txifg_rd(&self) -> bool {
                true
            }

            fn rxifg_rd(&self) -> bool {
                with(|hw| hw.usci.rxifg)
            }

            fn txie_wr(&self, ie: bool) {
                with(|hw| hw.usci.txie = ie)
            }

            fn rxie_wr(&self, ie: bool) {
                with(|hw| hw.usci.rxie = ie)
            }
        }
    };
}

mock_usci!(MockUsci, sel2: true);
mock_usci!(MockUsciNoSel2, sel2: false);

pub struct MockUsi;

impl UsiPeriph for MockUsi {
    fn ctl0_set_rst(&self) {
        with(|hw| hw.usi.ctl0 |= UsiCtl0::USISWRST.bits())
    }

    fn ctl0_rd(&self) -> UsiCtl0 {
        with(|hw| UsiCtl0::from_bits_retain(hw.usi.ctl0))
    }

    fn ctl0_wr(&self, reg: UsiCtl0) {
        with(|hw| hw.usi.ctl0 = reg.bits())
    }

    fn ctl1_rd(&self) -> UsiCtl1 {
        with(|hw| UsiCtl1::from_bits_retain(hw.usi.ctl1))
    }

    fn ctl1_wr(&self, reg: UsiCtl1) {
        with(|hw| hw.usi.ctl1 = reg.bits())
    }

    fn ckctl_wr(&self, reg: UsiCkCtl) {
        with(|hw| hw.usi.ckctl = reg.bits())
    }

    fn cnt_rd(&self) -> UsiCnt {
        with(|hw| UsiCnt::from_bits_retain(hw.usi.cnt))
    }

    // The whole transfer completes inside the write unless the shifter is stalled
    fn cnt_wr(&self, reg: UsiCnt) {
        with(|hw| {
            hw.usi.ctl1 &= !UsiCtl1::USIIFG.bits();
            if hw.usi.stall {
                hw.usi.cnt = reg.bits();
            } else {
                hw.usi.shift(reg);
            }
        })
    }

    fn srl_rd(&self) -> u8 {
        with(|hw| hw.usi.sr as u8)
    }

    fn srl_wr(&self, val: u8) {
        with(|hw| hw.usi.sr = (hw.usi.sr & 0xFF00) | u16::from(val))
    }

    fn sr_rd(&self) -> u16 {
        with(|hw| hw.usi.sr)
    }

    fn sr_wr(&self, val: u16) {
        with(|hw| hw.usi.sr = val)
    }
}
