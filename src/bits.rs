pub(crate) trait BitsExt {
    fn set(self, shift: u8) -> Self;
    fn check(self, shift: u8) -> Self;
}

macro_rules! bits_ext_impl {
    ($($t:ty),*) => {
        $(
            impl BitsExt for $t {
                #[inline(always)]
                fn set(self, shift: u8) -> Self {
                    self | (1 << shift)
                }

                #[inline(always)]
                fn check(self, shift: u8) -> Self {
                    self & (1 << shift)
                }
            }
        )*
    };
}

bits_ext_impl!(u8, u16);
