#![cfg_attr(not(feature = "usci"), allow(unused_imports, unused_macros))]

use super::Steal;

pub trait GpioPeriph: Steal {
    fn pxin_rd(&self) -> u8;

    fn pxout_rd(&self) -> u8;
    fn pxout_wr(&self, bits: u8);
    fn pxout_set(&self, bits: u8);
    fn pxout_clear(&self, bits: u8);

    fn pxdir_rd(&self) -> u8;
    fn pxdir_wr(&self, bits: u8);
    fn pxdir_set(&self, bits: u8);
    fn pxdir_clear(&self, bits: u8);

    fn pxren_rd(&self) -> u8;
    fn pxren_wr(&self, bits: u8);
    fn pxren_set(&self, bits: u8);
    fn pxren_clear(&self, bits: u8);

    fn pxsel_rd(&self) -> u8;
    fn pxsel_wr(&self, bits: u8);
    fn pxsel_set(&self, bits: u8);
    fn pxsel_clear(&self, bits: u8);

    // Only the G2xx ports have a second function select register
    #[inline(always)]
    fn pxsel2_set(&self, _bits: u8) {}
    #[inline(always)]
    fn pxsel2_clear(&self, _bits: u8) {}
}

macro_rules! reg_methods {
    ($addr:expr, $rd:ident, $wr:ident, $set:ident, $clear:ident) => {
        #[inline(always)]
        fn $rd(&self) -> u8 {
            $crate::pac::Reg::<u8>::at($addr).read()
        }

        #[inline(always)]
        fn $wr(&self, bits: u8) {
            $crate::pac::Reg::<u8>::at($addr).write(bits)
        }

        #[inline(always)]
        fn $set(&self, bits: u8) {
            $crate::pac::Reg::<u8>::at($addr).set_bits(bits)
        }

        #[inline(always)]
        fn $clear(&self, bits: u8) {
            $crate::pac::Reg::<u8>::at($addr).clear_bits(bits)
        }
    };
}
pub(crate) use reg_methods;

macro_rules! gpio_impl {
    ($Px:ident => pxin: $pxin:expr, pxout: $pxout:expr, pxdir: $pxdir:expr, pxren: $pxren:expr,
     pxsel: $pxsel:expr $(, pxsel2: $pxsel2:expr)?) => {
        impl $crate::hw_traits::gpio::GpioPeriph for $Px {
            #[inline(always)]
            fn pxin_rd(&self) -> u8 {
                $crate::pac::Reg::<u8>::at($pxin).read()
            }

            $crate::hw_traits::gpio::reg_methods!(
                $pxout, pxout_rd, pxout_wr, pxout_set, pxout_clear
            );
            $crate::hw_traits::gpio::reg_methods!(
                $pxdir, pxdir_rd, pxdir_wr, pxdir_set, pxdir_clear
            );
            $crate::hw_traits::gpio::reg_methods!(
                $pxren, pxren_rd, pxren_wr, pxren_set, pxren_clear
            );
            $crate::hw_traits::gpio::reg_methods!(
                $pxsel, pxsel_rd, pxsel_wr, pxsel_set, pxsel_clear
            );

            $(
                #[inline(always)]
                fn pxsel2_set(&self, bits: u8) {
                    $crate::pac::Reg::<u8>::at($pxsel2).set_bits(bits)
                }

                #[inline(always)]
                fn pxsel2_clear(&self, bits: u8) {
                    $crate::pac::Reg::<u8>::at($pxsel2).clear_bits(bits)
                }
            )?
        }
    };
}
pub(crate) use gpio_impl;
