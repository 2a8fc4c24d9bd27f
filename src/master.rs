//! Word-level transfers shared by every SPI master in this crate.
//!
//! [`SpiMaster`] is implemented by both the USCI driver ([`Spi`](crate::spi::Spi)) and the USI
//! driver ([`UsiSpi`](crate::usi::UsiSpi)), so code written against it runs unchanged on any of
//! the supported devices. Both drivers also implement the embedded-hal
//! [`SpiBus`](embedded_hal::spi::SpiBus) trait for `u8` and `u16` words.

use embedded_hal::spi::ErrorType;

/// Blocking full-duplex transfers of 8, 16 and 9 bit frames.
pub trait SpiMaster: ErrorType {
    /// Shift `byte` out and return the byte shifted in at the same time.
    fn transfer8(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Shift a 16-bit word out as two bytes and return the 16 bits shifted in.
    ///
    /// The high byte goes first when the bus is configured MSB first, the low byte otherwise.
    fn transfer16(&mut self, word: u16) -> Result<u16, Self::Error>;

    /// Shift a 9-bit frame, as used by some LCD controllers to carry a data/command flag.
    ///
    /// Bit 8 of `word` is the extra bit and bits 9 to 15 are ignored. The returned value holds
    /// the 9 bits shifted in, with bits 9 to 15 cleared.
    fn transfer9(&mut self, word: u16) -> Result<u16, Self::Error>;

    /// Wait until the shifter has gone idle.
    fn wait_idle(&mut self) -> Result<(), Self::Error>;
}

pub(crate) const NINTH_BIT: u8 = 8;
pub(crate) const NINE_BIT_MASK: u16 = 0x01FF;

/// Pairs up read and write words (inserting dummy values as necessary) until everything's sent.
///
/// If `write` is longer than `read`, the extra incoming words are discarded. If `read` is longer,
/// zeros are written until `read` is full.
pub(crate) fn duplex<W: Copy + Default, E>(
    read: &mut [W],
    write: &[W],
    mut xfer: impl FnMut(W) -> Result<W, E>,
) -> Result<(), E> {
    let mut read_words = read.iter_mut();
    let mut write_words = write.iter();
    let mut dummy_read = W::default();

    loop {
        let (rd, wr) = match (read_words.next(), write_words.next()) {
            (Some(rd), Some(wr)) => (rd, *wr),
            (Some(rd), None) => (rd, W::default()),
            (None, Some(wr)) => (&mut dummy_read, *wr),
            (None, None) => break,
        };
        *rd = xfer(wr)?;
    }
    Ok(())
}

// Implements SpiBus<$word> on top of a SpiMaster word transfer
macro_rules! spi_bus_impl {
    ($Driver:ident<$P:ident: $Bound:path>, $word:ty, $xfer:ident) => {
        impl<$P: $Bound> embedded_hal::spi::SpiBus<$word> for $Driver<$P> {
            /// Send dummy words (`0`) on MOSI so the slave can respond on MISO.
            fn read(&mut self, words: &mut [$word]) -> Result<(), Self::Error> {
                for word in words {
                    *word = $crate::master::SpiMaster::$xfer(self, 0)?;
                }
                Ok(())
            }

            /// Write `words` to the slave, ignoring all the incoming words.
            fn write(&mut self, words: &[$word]) -> Result<(), Self::Error> {
                for word in words {
                    $crate::master::SpiMaster::$xfer(self, *word)?;
                }
                Ok(())
            }

            /// Write and read simultaneously.
            ///
            /// If `write` is longer than `read`, then after `read` is full any subsequent incoming
            /// words will be discarded. If `read` is longer than `write`, then dummy words of `0`
            /// are sent until `read` is full.
            fn transfer(&mut self, read: &mut [$word], write: &[$word]) -> Result<(), Self::Error> {
                $crate::master::duplex(read, write, |word| {
                    $crate::master::SpiMaster::$xfer(self, word)
                })
            }

            /// Write the contents of `words` and overwrite them with the received words.
            fn transfer_in_place(&mut self, words: &mut [$word]) -> Result<(), Self::Error> {
                for word in words {
                    *word = $crate::master::SpiMaster::$xfer(self, *word)?;
                }
                Ok(())
            }

            fn flush(&mut self) -> Result<(), Self::Error> {
                $crate::master::SpiMaster::wait_idle(self)
            }
        }
    };
}
pub(crate) use spi_bus_impl;
