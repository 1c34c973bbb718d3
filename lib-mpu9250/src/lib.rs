#![cfg_attr(not(test), no_std)]

use core::time::Duration;

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod dlpf_mode;
pub use dlpf_mode::*;

pub mod config;
pub use config::*;

pub mod data;
pub use data::*;

pub mod address;
pub use address::*;

pub mod device;
pub use device::*;

pub mod error;
pub use error::*;

pub mod bus;
pub use bus::*;

pub mod registers;

pub mod mpu9250;
pub use mpu9250::*;

#[cfg(test)]
mod tests;

/// Default i2c address of the MPU9250 chip (AD0 pulled low).
///
pub const MPU9250_DEFAULT_I2C_ADDR: u8 = 0x68;

/// Contents of the `WHO_AM_I` register on a MPU9250 chip.
///
pub const MPU9250_DEVICE_ID: u8 = 0x71;

/// Contents of the `WHO_AM_I` register on the older MPU6050, which shares the gyroscope register
/// layout with the MPU9250 and is accepted as well.
///
pub const MPU6050_DEVICE_ID: u8 = 0x68;

/// Timeout handed to the bus for every register transaction.
///
pub const I2C_TIMEOUT: Duration = Duration::from_millis(100);

/// Time the chip needs to stabilize after clearing the sleep bit in `PWR_MGMT_1`.
///
pub const WAKE_UP_DELAY_MS: u32 = 100;
