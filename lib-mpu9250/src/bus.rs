use core::time::Duration;

/// Register level access to a device on a two wire bus.
///
/// Implementations block until the transaction finishes or `timeout` runs out. A read must either
/// fill the whole buffer or return an error, the driver never looks at a partially read buffer.
///
pub trait Bus {
    type Error;

    /// Writes a single byte into `register` of the device at `address`.
    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        value: u8,
        timeout: Duration,
    ) -> Result<(), Self::Error>;

    /// Reads `buf.len()` consecutive registers starting at `register` in one burst.
    fn read_registers(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
        timeout: Duration,
    ) -> Result<(), Self::Error>;
}

/// Blocking delay, used to give the chip time to wake up.
///
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

#[cfg(feature = "hal")]
pub use embedded::*;

#[cfg(feature = "hal")]
mod embedded {
    use core::time::Duration;

    use hal::delay::DelayNs;
    use hal::i2c::I2c;

    use super::{Bus, Delay};

    /// [`Bus`] on top of any `embedded-hal` I2C peripheral.
    ///
    /// `embedded-hal` has no per transaction timeout, so the timeout passed in by the driver is
    /// not forwarded; configure it on the peripheral itself (e.g. the `timeout` of an `esp-hal`
    /// I2C config).
    ///
    pub struct HalBus<I: I2c> {
        i2c: I,
    }

    impl<I: I2c> HalBus<I> {
        pub fn new(i2c: I) -> Self {
            HalBus { i2c }
        }

        /// Returns the wrapped peripheral.
        pub fn release(self) -> I {
            self.i2c
        }
    }

    impl<I: I2c> Bus for HalBus<I> {
        type Error = I::Error;

        fn write_register(
            &mut self,
            address: u8,
            register: u8,
            value: u8,
            _timeout: Duration,
        ) -> Result<(), Self::Error> {
            self.i2c.write(address, &[ register, value ])
        }

        fn read_registers(
            &mut self,
            address: u8,
            register: u8,
            buf: &mut [u8],
            _timeout: Duration,
        ) -> Result<(), Self::Error> {
            self.i2c.write_read(address, &[ register ], buf)
        }
    }

    /// [`Delay`] on top of any `embedded-hal` delay provider.
    ///
    pub struct HalDelay<D: DelayNs> {
        delay: D,
    }

    impl<D: DelayNs> HalDelay<D> {
        pub fn new(delay: D) -> Self {
            HalDelay { delay }
        }

        pub fn release(self) -> D {
            self.delay
        }
    }

    impl<D: DelayNs> Delay for HalDelay<D> {
        fn delay_ms(&mut self, ms: u32) {
            self.delay.delay_ms(ms);
        }
    }
}
