use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct UsiCtl0: u8 {
        const USIPE7 = 1 << 7;
        const USIPE6 = 1 << 6;
        const USIPE5 = 1 << 5;
        const USILSB = 1 << 4;
        const USIMST = 1 << 3;
        const USIGE = 1 << 2;
        const USIOE = 1 << 1;
        const USISWRST = 1 << 0;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct UsiCtl1: u8 {
        const USICKPH = 1 << 7;
        const USII2C = 1 << 6;
        const USISTTIE = 1 << 5;
        const USIIE = 1 << 4;
        const USIAL = 1 << 3;
        const USISTP = 1 << 2;
        const USISTTIFG = 1 << 1;
        const USIIFG = 1 << 0;
    }
}

bitflags! {
    /// USICKCTL. USIDIVx occupies bits 7..5 and USISSELx bits 4..2.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct UsiCkCtl: u8 {
        const USIDIV = 0b111 << 5;
        const USISSEL = 0b111 << 2;
        const USICKPL = 1 << 1;
        const USISWCLK = 1 << 0;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct UsiCnt: u8 {
        const USISCLREL = 1 << 7;
        const USI16B = 1 << 6;
        const USIIFGCC = 1 << 5;
        const USICNT = 0b1_1111;
    }
}

pub trait UsiPeriph {
    fn ctl0_set_rst(&self);

    fn ctl0_rd(&self) -> UsiCtl0;

    // Writing a value without USISWRST releases the shifter
    fn ctl0_wr(&self, reg: UsiCtl0);

    fn ctl1_rd(&self) -> UsiCtl1;
    fn ctl1_wr(&self, reg: UsiCtl1);

    fn ckctl_wr(&self, reg: UsiCkCtl);

    fn cnt_rd(&self) -> UsiCnt;
    // Starts a transfer when the bit count is nonzero
    fn cnt_wr(&self, reg: UsiCnt);

    fn srl_rd(&self) -> u8;
    fn srl_wr(&self, val: u8);

    fn sr_rd(&self) -> u16;
    fn sr_wr(&self, val: u16);

    #[inline(always)]
    fn ifg_rd(&self) -> bool {
        self.ctl1_rd().contains(UsiCtl1::USIIFG)
    }
}
