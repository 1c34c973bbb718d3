/// Raw gyroscope reading in sensor counts, one signed 16 bit value per axis. Divide by
/// [`crate::GyroScaleRange::as_scale_factor`] of the active range to get deg/s.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GyroSample
{
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl GyroSample {

    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        GyroSample { x, y, z }
    }

    /// Decodes the `GYRO_XOUT_H ..= GYRO_ZOUT_L` registers, which hold each axis as a big endian
    /// two's complement value: `[x_h, x_l, y_h, y_l, z_h, z_l]`.
    ///
    pub fn from_be_bytes(data: &[u8; 6]) -> Self {
        GyroSample {
            x: i16::from_be_bytes([data[0], data[1]]),
            y: i16::from_be_bytes([data[2], data[3]]),
            z: i16::from_be_bytes([data[4], data[5]]),
        }
    }

    pub fn as_array(&self) -> [i16; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<GyroSample> for [i16; 3] {
    fn from(sample: GyroSample) -> Self {
        sample.as_array()
    }
}
