use std::{cell::RefCell, rc::Rc, time::Duration};

use crate::{registers::*, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Write { address: u8, register: u8, value: u8, timeout: Duration },
    Read { address: u8, register: u8, len: usize, timeout: Duration },
    Delay(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockError {
    Timeout,
    Nack,
}

type Log = Rc<RefCell<Vec<Op>>>;

/// Register file that records every transaction, optionally failing on a register or on
/// everything.
///
struct MockBus {
    registers: [u8; 128],
    log: Log,
    fail_register: Option<u8>,
    always_timeout: bool,
}

impl MockBus {
    fn new(log: &Log) -> Self {
        let mut registers = [0u8; 128];
        registers[WHO_AM_I as usize] = MPU9250_DEVICE_ID;
        MockBus { registers, log: log.clone(), fail_register: None, always_timeout: false }
    }

    fn check(&self, register: u8) -> Result<(), MockError> {
        if self.always_timeout {
            Err(MockError::Timeout)
        } else if self.fail_register == Some(register) {
            Err(MockError::Nack)
        } else {
            Ok(())
        }
    }
}

impl Bus for MockBus {
    type Error = MockError;

    fn write_register(&mut self, address: u8, register: u8, value: u8, timeout: Duration) -> Result<(), MockError> {
        self.log.borrow_mut().push(Op::Write { address, register, value, timeout });
        self.check(register)?;
        self.registers[register as usize] = value;
        Ok(())
    }

    fn read_registers(&mut self, address: u8, register: u8, buf: &mut [u8], timeout: Duration) -> Result<(), MockError> {
        self.log.borrow_mut().push(Op::Read { address, register, len: buf.len(), timeout });
        self.check(register)?;
        let start = register as usize;
        buf.copy_from_slice(&self.registers[start..start + buf.len()]);
        Ok(())
    }
}

struct MockDelay {
    log: Log,
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Op::Delay(ms));
    }
}

fn setup() -> (Log, MockBus, MockDelay) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let bus = MockBus::new(&log);
    let delay = MockDelay { log: log.clone() };
    (log, bus, delay)
}

fn writes(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|op| match op {
            Op::Write { register, .. } => Some(*register),
            _ => None,
        })
        .collect()
}

fn write(register: u8, value: u8) -> Op {
    Op::Write { address: MPU9250_DEFAULT_I2C_ADDR, register, value, timeout: I2C_TIMEOUT }
}

fn gyro_with(data: [u8; 6]) -> Mpu9250<MockBus> {
    let (_, mut bus, _) = setup();
    bus.registers[GYRO_XOUT_H as usize..=GYRO_ZOUT_L as usize].copy_from_slice(&data);
    Mpu9250::new(bus)
}

#[test]
fn read_gyro_decodes_big_endian_twos_complement() {
    let mut mpu = gyro_with([0x7F, 0xFF, 0x80, 0x00, 0x00, 0x00]);
    assert_eq!(mpu.read_gyro(), Ok(GyroSample::new(32767, -32768, 0)));

    let mut mpu = gyro_with([0xFF, 0xFF, 0x01, 0x02, 0xFE, 0x0C]);
    assert_eq!(mpu.read_gyro(), Ok(GyroSample::new(-1, 0x0102, -500)));
}

#[test]
fn read_gyro_is_one_burst_read() {
    let (log, bus, _) = setup();
    let mut mpu = Mpu9250::new(bus);
    mpu.read_gyro().unwrap();

    assert_eq!(*log.borrow(), vec![Op::Read {
        address: MPU9250_DEFAULT_I2C_ADDR,
        register: GYRO_XOUT_H,
        len: 6,
        timeout: I2C_TIMEOUT,
    }]);
}

#[test]
fn who_am_i_accepts_both_supported_chips() {
    for (id, device) in [(0x71, Device::Mpu9250), (0x68, Device::Mpu6050)] {
        let (_, mut bus, _) = setup();
        bus.registers[WHO_AM_I as usize] = id;
        let mut mpu = Mpu9250::new(bus);
        assert_eq!(mpu.who_am_i(), Ok(()));
        assert_eq!(mpu.identify(), Ok(device));
    }
}

#[test]
fn who_am_i_rejects_unknown_ids() {
    for id in [0x00, 0xFF, 0x70, 0x34] {
        let (_, mut bus, _) = setup();
        bus.registers[WHO_AM_I as usize] = id;
        let mut mpu = Mpu9250::new(bus);
        assert_eq!(mpu.who_am_i(), Err(Error::IdentityMismatch(id)));
    }
}

#[test]
fn who_am_i_propagates_bus_error() {
    let (_, mut bus, _) = setup();
    bus.fail_register = Some(WHO_AM_I);
    let mut mpu = Mpu9250::new(bus);
    assert_eq!(mpu.who_am_i(), Err(Error::Bus(MockError::Nack)));
}

#[test]
fn init_runs_fixed_sequence() {
    let (log, bus, mut delay) = setup();
    let mut mpu = Mpu9250::new(bus);
    assert_eq!(mpu.init(&mut delay), Ok(()));

    assert_eq!(*log.borrow(), vec![
        write(PWR_MGMT_1, 0x00),
        Op::Delay(100),
        Op::Read { address: MPU9250_DEFAULT_I2C_ADDR, register: WHO_AM_I, len: 1, timeout: I2C_TIMEOUT },
        write(CONFIG, 0x03),
        write(SMPLRT_DIV, 0x04),
        write(GYRO_CONFIG, 0x08),
    ]);
    assert_eq!(mpu.gyro_scale(), GyroScaleRange::D500);
}

#[test]
fn init_stops_at_first_failed_write() {
    let (log, mut bus, mut delay) = setup();
    bus.fail_register = Some(CONFIG);
    let mut mpu = Mpu9250::new(bus);

    assert_eq!(mpu.init(&mut delay), Err(Error::Bus(MockError::Nack)));
    assert_eq!(writes(&log), vec![PWR_MGMT_1, CONFIG]);
    assert_eq!(log.borrow().len(), 4);
}

#[test]
fn init_stops_when_wake_fails() {
    let (log, mut bus, mut delay) = setup();
    bus.fail_register = Some(PWR_MGMT_1);
    let mut mpu = Mpu9250::new(bus);

    assert_eq!(mpu.init(&mut delay), Err(Error::Bus(MockError::Nack)));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn init_stops_on_wrong_device() {
    let (log, mut bus, mut delay) = setup();
    bus.registers[WHO_AM_I as usize] = 0x00;
    let mut mpu = Mpu9250::new(bus);

    assert_eq!(mpu.init(&mut delay), Err(Error::IdentityMismatch(0x00)));
    assert_eq!(writes(&log), vec![PWR_MGMT_1]);
}

#[test]
fn timing_out_bus_surfaces_bus_error() {
    let (log, mut bus, mut delay) = setup();
    bus.always_timeout = true;
    let mut mpu = Mpu9250::new(bus);

    assert_eq!(mpu.init(&mut delay), Err(Error::Bus(MockError::Timeout)));
    assert_eq!(mpu.read_gyro(), Err(Error::Bus(MockError::Timeout)));
    assert!(!log.borrow().contains(&Op::Delay(100)));
}

#[test]
fn init_with_writes_given_config() {
    let (log, bus, mut delay) = setup();
    let mut mpu = Mpu9250::new(bus);
    let config = GyroConfig::default()
        .with_dlpf(DlpfMode::Bw10Hz)
        .with_sample_rate_divider(9)
        .with_gyro_scale(GyroScaleRange::D2000);

    mpu.init_with(&mut delay, &config).unwrap();

    assert_eq!(log.borrow()[3..], [
        write(CONFIG, 0x05),
        write(SMPLRT_DIV, 9),
        write(GYRO_CONFIG, 0x18),
    ]);
    assert_eq!(mpu.get_gyro_scale(), Ok(GyroScaleRange::D2000));
}

#[test]
fn address_and_timeout_are_forwarded() {
    let (log, bus, _) = setup();
    let timeout = Duration::from_millis(5);
    let mut mpu = Mpu9250::new(bus)
        .with_address(Address::Ad0High)
        .with_timeout(timeout);

    mpu.wake().unwrap();

    assert_eq!(mpu.address(), 0x69);
    assert_eq!(*log.borrow(), vec![Op::Write { address: 0x69, register: PWR_MGMT_1, value: 0, timeout }]);
}

#[test]
fn release_returns_bus() {
    let (_, bus, _) = setup();
    let mut mpu = Mpu9250::new(bus);
    mpu.set_register_value(SMPLRT_DIV, 7).unwrap();

    let bus = mpu.release();
    assert_eq!(bus.registers[SMPLRT_DIV as usize], 7);
}

#[test]
fn error_display() {
    let bus: Error<MockError> = Error::Bus(MockError::Timeout);
    assert_eq!(format!("{}", bus), "Bus error: Timeout");
    let mismatch: Error<MockError> = Error::IdentityMismatch(0x12);
    assert_eq!(format!("{}", mismatch), "Unexpected device id: 0x12");
}

#[cfg(feature = "hal")]
mod embedded {
    use hal::delay::DelayNs;
    use hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

    use crate::*;

    /// Answers every read with `response` and keeps the bytes of every write.
    struct FakeI2c {
        writes: Vec<(u8, Vec<u8>)>,
        response: u8,
    }

    impl ErrorType for FakeI2c {
        type Error = ErrorKind;
    }

    impl I2c for FakeI2c {
        fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
            for op in operations {
                match op {
                    Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                    Operation::Read(buf) => buf.fill(self.response),
                }
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeDelay {
        total_ns: u64,
    }

    impl DelayNs for FakeDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    #[test]
    fn init_over_embedded_hal() {
        let i2c = FakeI2c { writes: Vec::new(), response: MPU6050_DEVICE_ID };
        let mut delay = HalDelay::new(FakeDelay::default());
        let mut mpu = Mpu9250::new(HalBus::new(i2c));

        assert_eq!(mpu.init(&mut delay), Ok(()));
        assert_eq!(delay.release().total_ns, 100_000_000);

        let i2c = mpu.release().release();
        assert_eq!(i2c.writes, vec![
            (0x68, vec![ registers::PWR_MGMT_1, 0x00 ]),
            (0x68, vec![ registers::WHO_AM_I ]),
            (0x68, vec![ registers::CONFIG, 0x03 ]),
            (0x68, vec![ registers::SMPLRT_DIV, 0x04 ]),
            (0x68, vec![ registers::GYRO_CONFIG, 0x08 ]),
        ]);
    }

    #[test]
    fn read_gyro_over_embedded_hal() {
        let i2c = FakeI2c { writes: Vec::new(), response: 0xFF };
        let mut mpu = Mpu9250::new(HalBus::new(i2c));
        assert_eq!(mpu.read_gyro(), Ok(GyroSample::new(-1, -1, -1)));
    }
}
