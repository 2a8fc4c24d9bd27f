#![cfg_attr(not(feature = "usci"), allow(unused_imports, unused_macros))]

use bitflags::bitflags;

bitflags! {
    /// UCxCTL0 in synchronous mode
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct UcxCtl0: u8 {
        const UCCKPH = 1 << 7;
        const UCCKPL = 1 << 6;
        const UCMSB = 1 << 5;
        const UC7BIT = 1 << 4;
        const UCMST = 1 << 3;
        const UCMODE1 = 1 << 2;
        const UCMODE0 = 1 << 1;
        const UCSYNC = 1 << 0;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct UcxCtl1: u8 {
        const UCSSEL1 = 1 << 7;
        const UCSSEL0 = 1 << 6;
        const UCSWRST = 1 << 0;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct UcxStat: u8 {
        const UCLISTEN = 1 << 7;
        const UCFE = 1 << 6;
        const UCOE = 1 << 5;
        const UCBUSY = 1 << 0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ucssel {
    Aclk = 1,
    Smclk = 2,
}

impl From<Ucssel> for UcxCtl1 {
    #[inline(always)]
    fn from(ssel: Ucssel) -> Self {
        UcxCtl1::from_bits_truncate((ssel as u8) << 6)
    }
}

pub trait UsciSpiPeriph {
    fn ctl1_set_rst(&self);
    fn ctl1_clear_rst(&self);

    // Writing a value without UCSWRST releases the peripheral
    fn ctl1_wr(&self, reg: UcxCtl1);

    fn ctl0_rd(&self) -> UcxCtl0;

    // only call while in reset state
    fn ctl0_wr(&self, reg: UcxCtl0);

    // only call while in reset state
    fn br_wr(&self, prescaler: u16);

    fn mctl_clear(&self);

    fn stat_rd(&self) -> UcxStat;
    fn stat_wr(&self, reg: UcxStat);

    fn rxbuf_rd(&self) -> u8;
    fn txbuf_wr(&self, val: u8);

    fn txifg_rd(&self) -> bool;
    fn rxifg_rd(&self) -> bool;

    fn txie_wr(&self, ie: bool);
    fn rxie_wr(&self, ie: bool);
}

macro_rules! usci_impl {
    ($Usci:ident => ctl0: $ctl0:expr, ctl1: $ctl1:expr, br0: $br0:expr, br1: $br1:expr,
     $(mctl: $mctl:expr,)? stat: $stat:expr, rxbuf: $rxbuf:expr, txbuf: $txbuf:expr,
     ie: $ie:expr => [$rxie:expr, $txie:expr], ifg: $ifg:expr => [$rxifg:expr, $txifg:expr]) => {
        impl $crate::hw_traits::usci::UsciSpiPeriph for $Usci {
            #[inline(always)]
            fn ctl1_set_rst(&self) {
                $crate::pac::Reg::<u8>::at($ctl1)
                    .set_bits($crate::hw_traits::usci::UcxCtl1::UCSWRST.bits());
            }

            #[inline(always)]
            fn ctl1_clear_rst(&self) {
                $crate::pac::Reg::<u8>::at($ctl1)
                    .clear_bits($crate::hw_traits::usci::UcxCtl1::UCSWRST.bits());
            }

            #[inline(always)]
            fn ctl1_wr(&self, reg: $crate::hw_traits::usci::UcxCtl1) {
                $crate::pac::Reg::<u8>::at($ctl1).write(reg.bits());
            }

            #[inline(always)]
            fn ctl0_rd(&self) -> $crate::hw_traits::usci::UcxCtl0 {
                $crate::hw_traits::usci::UcxCtl0::from_bits_retain(
                    $crate::pac::Reg::<u8>::at($ctl0).read(),
                )
            }

            #[inline(always)]
            fn ctl0_wr(&self, reg: $crate::hw_traits::usci::UcxCtl0) {
                $crate::pac::Reg::<u8>::at($ctl0).write(reg.bits());
            }

            #[inline(always)]
            fn br_wr(&self, prescaler: u16) {
                let [lo, hi] = prescaler.to_le_bytes();
                $crate::pac::Reg::<u8>::at($br0).write(lo);
                $crate::pac::Reg::<u8>::at($br1).write(hi);
            }

            #[inline(always)]
            fn mctl_clear(&self) {
                $($crate::pac::Reg::<u8>::at($mctl).write(0);)?
            }

            #[inline(always)]
            fn stat_rd(&self) -> $crate::hw_traits::usci::UcxStat {
                $crate::hw_traits::usci::UcxStat::from_bits_retain(
                    $crate::pac::Reg::<u8>::at($stat).read(),
                )
            }

            #[inline(always)]
            fn stat_wr(&self, reg: $crate::hw_traits::usci::UcxStat) {
                $crate::pac::Reg::<u8>::at($stat).write(reg.bits());
            }

            #[inline(always)]
            fn rxbuf_rd(&self) -> u8 {
                $crate::pac::Reg::<u8>::at($rxbuf).read()
            }

            #[inline(always)]
            fn txbuf_wr(&self, val: u8) {
                $crate::pac::Reg::<u8>::at($txbuf).write(val);
            }

            #[inline(always)]
            fn txifg_rd(&self) -> bool {
                $crate::pac::Reg::<u8>::at($ifg).read() & $txifg != 0
            }

            #[inline(always)]
            fn rxifg_rd(&self) -> bool {
                $crate::pac::Reg::<u8>::at($ifg).read() & $rxifg != 0
            }

            // IE2 is shared with other modules on the G2xx parts
            #[inline(always)]
            fn txie_wr(&self, ie: bool) {
                let reg = $crate::pac::Reg::<u8>::at($ie);
                if ie {
                    reg.set_bits($txie)
                } else {
                    reg.clear_bits($txie)
                }
            }

            #[inline(always)]
            fn rxie_wr(&self, ie: bool) {
                let reg = $crate::pac::Reg::<u8>::at($ie);
                if ie {
                    reg.set_bits($rxie)
                } else {
                    reg.clear_bits($rxie)
                }
            }
        }
    };
}
pub(crate) use usci_impl;
