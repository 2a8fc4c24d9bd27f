pub mod gpio;
pub mod usci;
pub mod usi;

pub trait Steal {
    /// Conjure a handle to a peripheral out of thin air.
    ///
    /// # Safety
    /// The caller must not race with another owner of the same registers.
    unsafe fn steal() -> Self;
}
