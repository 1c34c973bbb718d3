use crate::{DlpfMode, GyroScaleRange};

/// Gyroscope configuration written during [`crate::Mpu9250::init_with`].
///
/// The sample rate divider is applied to the internal sample rate selected by the low pass
/// filter, so the two fields only make sense together; see [`GyroConfig::output_data_rate_hz`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GyroConfig {
    pub dlpf: DlpfMode,
    pub sample_rate_divider: u8,
    pub gyro_scale: GyroScaleRange,
}

impl GyroConfig {

    pub const fn new(dlpf: DlpfMode, sample_rate_divider: u8, gyro_scale: GyroScaleRange) -> Self {
        GyroConfig { dlpf, sample_rate_divider, gyro_scale }
    }

    pub fn with_dlpf(mut self, dlpf: DlpfMode) -> Self {
        self.dlpf = dlpf;
        self
    }

    pub fn with_sample_rate_divider(mut self, divider: u8) -> Self {
        self.sample_rate_divider = divider;
        self
    }

    pub fn with_gyro_scale(mut self, scale: GyroScaleRange) -> Self {
        self.gyro_scale = scale;
        self
    }

    /// Rate (in Hz) at which the sensor updates its output registers using the following formula:
    /// `internal_rate / (1 + divider) = sample_rate`
    ///
    /// For example: `1khz / (1 + 4) = 200 Hz`
    ///
    pub fn output_data_rate_hz(&self) -> f32 {
        self.dlpf.internal_sample_rate_hz() as f32 / (1.0 + self.sample_rate_divider as f32)
    }
}

impl Default for GyroConfig {
    /// ~42Hz bandwidth at a 1kHz base, 200Hz output rate, +/- 500 deg/s.
    fn default() -> Self {
        GyroConfig::new(DlpfMode::Bw42Hz, 4, GyroScaleRange::D500)
    }
}
