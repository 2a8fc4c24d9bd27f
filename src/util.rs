#[inline(always)]
pub(crate) fn spin() {
    #[cfg(target_arch = "msp430")]
    msp430::asm::nop();
    #[cfg(not(target_arch = "msp430"))]
    core::hint::spin_loop();
}

// Spin until a hardware status flag comes up
#[inline(always)]
pub(crate) fn busy_wait(mut ready: impl FnMut() -> bool) {
    while !ready() {
        spin();
    }
}
