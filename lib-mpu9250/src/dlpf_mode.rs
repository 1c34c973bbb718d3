/// DLPF (Digital Low Pass Filter) mode, this determines the highest frequency that is not filtered
/// out.
///
/// Note that the filter also decides the internal sample rate the `SMPLRT_DIV` divider is applied
/// to: 8kHz for `Bw256Hz` and 1kHz for every other mode.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DlpfMode {
    Bw256Hz = 0x00,
    Bw188Hz = 0x01,
    Bw98Hz = 0x02,
    Bw42Hz = 0x03,
    Bw20Hz = 0x04,
    Bw10Hz = 0x05,
    Bw5Hz = 0x06,
}

impl DlpfMode {

    /// Bits to write into the `CONFIG` register, `EXT_SYNC_SET` is left disabled.
    ///
    pub fn as_register(&self) -> u8 {
        (*self) as u8
    }

    /// Decodes the `DLPF_CFG` bits of the `CONFIG` register. The reserved value 7 behaves like
    /// `Bw256Hz` (8kHz internal rate) and is reported as such.
    ///
    pub fn from_register(value: u8) -> Self {
        match value & 0b0111 {
            1 => Self::Bw188Hz,
            2 => Self::Bw98Hz,
            3 => Self::Bw42Hz,
            4 => Self::Bw20Hz,
            5 => Self::Bw10Hz,
            6 => Self::Bw5Hz,
            _ => Self::Bw256Hz,
        }
    }

    /// Internal gyroscope sample rate in Hz.
    ///
    pub fn internal_sample_rate_hz(&self) -> u32 {
        match self {
            Self::Bw256Hz => 8000,
            _ => 1000,
        }
    }
}

impl Default for DlpfMode {
    fn default() -> Self {
        DlpfMode::Bw256Hz
    }
}
