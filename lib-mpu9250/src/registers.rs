pub const SMPLRT_DIV: u8 = 0x019;

pub const CONFIG: u8 = 0x01A; //[5:3] EXT_SYNC_SET, [2:0] DLPF_CFG
pub const GYRO_CONFIG: u8 = 0x01B; //[7:5] XYZ_Cten, [4:3] GYRO_FS_SEL, [1:0] FCHOICE_B

pub const GYRO_XOUT_H: u8 = 0x043;
pub const GYRO_XOUT_L: u8 = 0x044;
pub const GYRO_YOUT_H: u8 = 0x045;
pub const GYRO_YOUT_L: u8 = 0x046;
pub const GYRO_ZOUT_H: u8 = 0x047;
pub const GYRO_ZOUT_L: u8 = 0x048;

pub const PWR_MGMT_1: u8 = 0x06B; //[7] H_RESET, [6] SLEEP, [2:0] CLKSEL

pub const WHO_AM_I: u8 = 0x075;
