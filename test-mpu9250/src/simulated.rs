use std::time::Duration;

use mpu9250::{registers::*, Bus, Delay, MPU9250_DEFAULT_I2C_ADDR, MPU9250_DEVICE_ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// Nothing answered at the requested address.
    Nack(u8),
    /// Read or write past the end of the register file.
    OutOfRange(u8),
}

/// In-memory stand-in for a MPU9250 on the bus. Every burst read of the gyroscope registers
/// produces a new sample following a slow sine wave (a different phase per axis).
///
pub struct SimulatedMpu {
    registers: [u8; 128],
    tick: u32,
}

impl SimulatedMpu {
    pub fn new() -> Self {
        let mut registers = [0u8; 128];
        registers[WHO_AM_I as usize] = MPU9250_DEVICE_ID;
        // Chip comes out of reset asleep.
        registers[PWR_MGMT_1 as usize] = 0x40;
        SimulatedMpu { registers, tick: 0 }
    }

    fn asleep(&self) -> bool {
        self.registers[PWR_MGMT_1 as usize] & 0x40 != 0
    }

    fn update_gyro(&mut self) {
        let t = self.tick as f32 * 0.1;
        self.tick += 1;
        for axis in 0..3 {
            let phase = axis as f32 * 2.094;
            let value = (libm::sinf(t + phase) * 12_000.0) as i16;
            let start = GYRO_XOUT_H as usize + axis * 2;
            self.registers[start..start + 2].copy_from_slice(&value.to_be_bytes());
        }
    }
}

impl Bus for SimulatedMpu {
    type Error = SimError;

    fn write_register(&mut self, address: u8, register: u8, value: u8, _timeout: Duration) -> Result<(), SimError> {
        if address != MPU9250_DEFAULT_I2C_ADDR {
            return Err(SimError::Nack(address));
        }
        let slot = self.registers.get_mut(register as usize).ok_or(SimError::OutOfRange(register))?;
        *slot = value;
        log::trace!("write {:#04x} <- {:#04x}", register, value);
        Ok(())
    }

    fn read_registers(&mut self, address: u8, register: u8, buf: &mut [u8], _timeout: Duration) -> Result<(), SimError> {
        if address != MPU9250_DEFAULT_I2C_ADDR {
            return Err(SimError::Nack(address));
        }
        if register == GYRO_XOUT_H && !self.asleep() {
            self.update_gyro();
        }
        let start = register as usize;
        let data = self.registers
            .get(start..start + buf.len())
            .ok_or(SimError::OutOfRange(register))?;
        buf.copy_from_slice(data);
        Ok(())
    }
}

pub struct StdDelay;

impl Delay for StdDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64));
    }
}
