//! Peripheral access for the supported devices.
//!
//! Each device feature enables a module of the same name containing zero-sized peripheral tokens
//! and a `Peripherals` singleton. Only the registers used by the SPI
//! drivers are mapped.
//!
//! ```rust,ignore
//! use msp430_spi::{pac::msp430g2553 as pac, spi::Spi};
//!
//! let periph = pac::Peripherals::take().unwrap();
//! let mut spi = Spi::new(periph.USCI_B0);
//! ```
#![cfg_attr(not(any(feature = "usi", feature = "usci")), allow(dead_code, unused_macros))]

use core::marker::PhantomData;

/// A memory-mapped register of width `T` at a fixed address.
#[derive(Clone, Copy)]
pub(crate) struct Reg<T> {
    addr: usize,
    _width: PhantomData<T>,
}

impl<T: Copy> Reg<T> {
    #[inline(always)]
    pub(crate) const fn at(addr: usize) -> Self {
        Reg {
            addr,
            _width: PhantomData,
        }
    }

    #[inline(always)]
    pub(crate) fn read(self) -> T {
        unsafe { core::ptr::read_volatile(self.addr as *const T) }
    }

    #[inline(always)]
    pub(crate) fn write(self, val: T) {
        unsafe { core::ptr::write_volatile(self.addr as *mut T, val) }
    }
}

impl Reg<u8> {
    #[inline(always)]
    pub(crate) fn set_bits(self, mask: u8) {
        self.write(self.read() | mask)
    }

    #[inline(always)]
    pub(crate) fn clear_bits(self, mask: u8) {
        self.write(self.read() & !mask)
    }
}

macro_rules! peripherals {
    ($($(#[$attr:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$attr])*
            #[allow(non_camel_case_types)]
            pub struct $name {
                _private: (),
            }

            impl $crate::hw_traits::Steal for $name {
                #[inline(always)]
                unsafe fn steal() -> Self {
                    $name { _private: () }
                }
            }
        )*

        /// All peripherals used by this crate
        #[allow(non_snake_case)]
        pub struct Peripherals {
            $(
                #[doc = concat!("The ", stringify!($name), " peripheral")]
                pub $name: $name,
            )*
        }

        static mut TAKEN: bool = false;

        impl Peripherals {
            /// Returns the peripherals the first time it is called, `None` afterwards.
            #[inline]
            pub fn take() -> Option<Self> {
                critical_section::with(|_| {
                    if unsafe { TAKEN } {
                        None
                    } else {
                        unsafe {
                            TAKEN = true;
                            Some(Self::steal())
                        }
                    }
                })
            }

            /// Unchecked version of [`Peripherals::take`].
            ///
            /// # Safety
            /// Each returned token must have a single owner at a time.
            #[inline]
            pub unsafe fn steal() -> Self {
                Peripherals {
                    $($name: $name { _private: () },)*
                }
            }
        }
    };
}

// Checks the pin map a device gives one of its USCI modules
#[cfg(test)]
macro_rules! assert_pins {
    ($Usci:ty => clk: $ClkPort:ty, $clk:expr; simo: $SimoPort:ty, $simo:expr;
     somi: $SomiPort:ty, $somi:expr; sel2: $sel2:expr) => {{
        use crate::spi::SpiUsci;
        use core::any::TypeId;

        assert_eq!(TypeId::of::<<$Usci as SpiUsci>::ClkPort>(), TypeId::of::<$ClkPort>());
        assert_eq!(TypeId::of::<<$Usci as SpiUsci>::SimoPort>(), TypeId::of::<$SimoPort>());
        assert_eq!(TypeId::of::<<$Usci as SpiUsci>::SomiPort>(), TypeId::of::<$SomiPort>());
        assert_eq!(<$Usci as SpiUsci>::CLK, $clk);
        assert_eq!(<$Usci as SpiUsci>::SIMO, $simo);
        assert_eq!(<$Usci as SpiUsci>::SOMI, $somi);
        assert_eq!(<$Usci as SpiUsci>::SEL2, $sel2);
    }};
}

#[cfg(feature = "msp430f5172")]
pub mod msp430f5172;
#[cfg(feature = "msp430f5529")]
pub mod msp430f5529;
#[cfg(feature = "msp430g2231")]
pub mod msp430g2231;
#[cfg(feature = "msp430g2553")]
pub mod msp430g2553;
#[cfg(feature = "msp430g2955")]
pub mod msp430g2955;
