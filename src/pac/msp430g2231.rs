//! MSP430G2xx1 peripherals (MSP430G2231 and relatives)
//!
//! The USI claims its pins through USIPE5..7, so no port needs to be set up.

use crate::hw_traits::usi::{UsiCkCtl, UsiCnt, UsiCtl0, UsiCtl1, UsiPeriph};
use crate::pac::Reg;

peripherals!(
    /// Universal Serial Interface
    USI,
);

const USICTL0: usize = 0x0078;
const USICTL1: usize = 0x0079;
const USICKCTL: usize = 0x007A;
const USICNT: usize = 0x007B;
// USISRL, with USISRH at the next address
const USISR: usize = 0x007C;

impl UsiPeriph for USI {
    #[inline(always)]
    fn ctl0_set_rst(&self) {
        Reg::<u8>::at(USICTL0).set_bits(UsiCtl0::USISWRST.bits());
    }

    #[inline(always)]
    fn ctl0_rd(&self) -> UsiCtl0 {
        UsiCtl0::from_bits_retain(Reg::<u8>::at(USICTL0).read())
    }

    #[inline(always)]
    fn ctl0_wr(&self, reg: UsiCtl0) {
        Reg::<u8>::at(USICTL0).write(reg.bits());
    }

    #[inline(always)]
    fn ctl1_rd(&self) -> UsiCtl1 {
        UsiCtl1::from_bits_retain(Reg::<u8>::at(USICTL1).read())
    }

    #[inline(always)]
    fn ctl1_wr(&self, reg: UsiCtl1) {
        Reg::<u8>::at(USICTL1).write(reg.bits());
    }

    #[inline(always)]
    fn ckctl_wr(&self, reg: UsiCkCtl) {
        Reg::<u8>::at(USICKCTL).write(reg.bits());
    }

    #[inline(always)]
    fn cnt_rd(&self) -> UsiCnt {
        UsiCnt::from_bits_retain(Reg::<u8>::at(USICNT).read())
    }

    #[inline(always)]
    fn cnt_wr(&self, reg: UsiCnt) {
        Reg::<u8>::at(USICNT).write(reg.bits());
    }

    #[inline(always)]
    fn srl_rd(&self) -> u8 {
        Reg::<u8>::at(USISR).read()
    }

    #[inline(always)]
    fn srl_wr(&self, val: u8) {
        Reg::<u8>::at(USISR).write(val);
    }

    #[inline(always)]
    fn sr_rd(&self) -> u16 {
        Reg::<u16>::at(USISR).read()
    }

    #[inline(always)]
    fn sr_wr(&self, val: u16) {
        Reg::<u16>::at(USISR).write(val);
    }
}
