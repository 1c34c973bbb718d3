use crate::MPU9250_DEFAULT_I2C_ADDR;

/// I2C address of the chip, selected by the level of its AD0 pin.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address {
    Ad0Low = MPU9250_DEFAULT_I2C_ADDR,
    Ad0High = 0x69,
}

impl Default for Address {
    fn default() -> Self {
        Address::Ad0Low
    }
}

impl From<Address> for u8 {
    fn from(address: Address) -> Self {
        address as u8
    }
}
