use core::time::Duration;

use crate::{registers::*, Address, Bus, Delay, Device, DlpfMode, Error, GyroConfig, GyroSample, GyroScaleRange, I2C_TIMEOUT, WAKE_UP_DELAY_MS};

/// Gyroscope driver for the MPU9250 (and its MPU6050 predecessor).
///
/// The driver assumes exclusive use of the bus it owns. Call [`Mpu9250::init`] (or
/// [`Mpu9250::init_with`]) once before reading any data; reading from a chip that was never
/// woken up just returns whatever is left in its output registers.
///
pub struct Mpu9250<B: Bus>
{
    /// Bus that we actually use to communicate with the chip.
    bus: B,

    /// i2c address that chip is located at.
    address: u8,

    /// Timeout handed to the bus with every transaction.
    timeout: Duration,

    gyro_scale: GyroScaleRange,
}

impl<B: Bus> Mpu9250<B>
{
    /// Create a new driver on the given bus, using the default address and timeout.
    ///
    pub fn new(bus: B) -> Self {
        Mpu9250 {
            bus,
            address: Address::default().into(),
            timeout: I2C_TIMEOUT,
            gyro_scale: GyroScaleRange::default(),
        }
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the underlying bus, consuming this driver.
    ///
    pub fn release(self) -> B {
        self.bus
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Gyroscope range last written to the chip by this driver.
    ///
    pub fn gyro_scale(&self) -> GyroScaleRange {
        self.gyro_scale
    }

    /// Wakes the chip up and configures the gyroscope for ~42Hz bandwidth, 200Hz output rate and
    /// a +/- 500 deg/s range.
    ///
    pub fn init(&mut self, delay: &mut impl Delay) -> Result<(), Error<B::Error>> {
        self.init_with(delay, &GyroConfig::default())
    }

    /// Wakes the chip up, checks that it is a chip we support and writes the given configuration.
    ///
    /// The first failing step aborts the sequence, in which case the chip may be left partially
    /// configured.
    ///
    pub fn init_with(&mut self, delay: &mut impl Delay, config: &GyroConfig) -> Result<(), Error<B::Error>> {
        log::info!("Configuring MPU9250 at address {:#04x}", self.address);

        self.wake()?;
        delay.delay_ms(WAKE_UP_DELAY_MS);

        self.who_am_i()?;

        // The divider is applied to the rate picked by the filter, so the filter goes first.
        self.set_dlpf_mode(config.dlpf)?;
        self.set_sample_rate_divider(config.sample_rate_divider)?;
        self.set_gyro_scale(config.gyro_scale)?;

        log::info!(
            "MPU9250 ready: dlpf={:?}, divider={}, range={:?}",
            config.dlpf, config.sample_rate_divider, config.gyro_scale
        );
        Ok(())
    }

    /// Checks if the chip on the other end of the bus is one we support, practically speaking
    /// this just checks the contents of the `WHO_AM_I` register.
    ///
    pub fn who_am_i(&mut self) -> Result<(), Error<B::Error>> {
        self.identify().map(|_| ())
    }

    /// Reads the `WHO_AM_I` register and returns which supported chip answered.
    ///
    pub fn identify(&mut self) -> Result<Device, Error<B::Error>> {
        let id = self.get_register_value(WHO_AM_I)?;
        match Device::from_id(id) {
            Some(device) => {
                log::info!("Found {:?} (id {:#04x})", device, id);
                Ok(device)
            }
            None => {
                log::warn!("Unexpected WHO_AM_I value {:#04x}", id);
                Err(Error::IdentityMismatch(id))
            }
        }
    }

    /// Clears the sleep bit (and every other bit) of `PWR_MGMT_1`, the internal oscillator is used
    /// as clock source.
    ///
    pub fn wake(&mut self) -> Result<(), Error<B::Error>> {
        log::debug!("Waking up");
        self.set_register_value(PWR_MGMT_1, 0x00)
    }

    /// Set digital low-pass filter configuration, this overwrites the `EXT_SYNC_SET` bits.
    ///
    pub fn set_dlpf_mode(&mut self, mode: DlpfMode) -> Result<(), Error<B::Error>> {
        log::debug!("Setting dlpf mode={:?}", mode);
        self.set_register_value(CONFIG, mode.as_register())
    }

    /// Sets the sample rate based on the divider using the following formula:
    /// `internal_rate / (1 + divider) = sample_rate`
    ///
    /// The internal rate is 1kHz when the low pass filter is enabled and 8kHz otherwise, see
    /// [`DlpfMode::internal_sample_rate_hz`].
    ///
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), Error<B::Error>> {
        log::debug!("Setting sample rate divider={}", divider);
        self.set_register_value(SMPLRT_DIV, divider)
    }

    /// Sets the gyroscope full scale range, self test and `FCHOICE_B` bits are cleared.
    ///
    pub fn set_gyro_scale(&mut self, scale: GyroScaleRange) -> Result<(), Error<B::Error>> {
        log::debug!("Setting gyro scale={:?}", scale);
        self.set_register_value(GYRO_CONFIG, scale.as_register())?;
        self.gyro_scale = scale;
        Ok(())
    }

    pub fn get_gyro_scale(&mut self) -> Result<GyroScaleRange, Error<B::Error>> {
        let value = self.get_register_value(GYRO_CONFIG)?;
        self.gyro_scale = GyroScaleRange::from_register(value);
        Ok(self.gyro_scale)
    }

    /// Get the current raw gyroscope values, all three axes are read in a single bus transaction
    /// so they always belong to the same sample.
    ///
    pub fn read_gyro(&mut self) -> Result<GyroSample, Error<B::Error>> {
        let mut data = [ 0u8; 6 ];
        self.bus
            .read_registers(self.address, GYRO_XOUT_H, &mut data, self.timeout)
            .map_err(Error::Bus)?;
        Ok(GyroSample::from_be_bytes(&data))
    }

    pub fn get_register_value(&mut self, register: u8) -> Result<u8, Error<B::Error>> {
        let mut state = [ 0u8 ];
        self.bus
            .read_registers(self.address, register, &mut state, self.timeout)
            .map_err(Error::Bus)?;
        Ok(state[0])
    }

    pub fn set_register_value(&mut self, register: u8, value: u8) -> Result<(), Error<B::Error>> {
        self.bus
            .write_register(self.address, register, value, self.timeout)
            .map_err(Error::Bus)
    }
}
