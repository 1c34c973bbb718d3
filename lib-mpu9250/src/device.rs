use crate::{MPU6050_DEVICE_ID, MPU9250_DEVICE_ID};

/// Chips this driver knows how to talk to, identified by their `WHO_AM_I` register.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Mpu9250,
    /// Older sibling with the same gyroscope registers.
    Mpu6050,
}

impl Device {

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            MPU9250_DEVICE_ID => Some(Device::Mpu9250),
            MPU6050_DEVICE_ID => Some(Device::Mpu6050),
            _ => None,
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Device::Mpu9250 => MPU9250_DEVICE_ID,
            Device::Mpu6050 => MPU6050_DEVICE_ID,
        }
    }
}
