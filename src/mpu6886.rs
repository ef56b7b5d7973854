use core::fmt::Debug;

use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::bus::{I2cInterface, RegisterBus};
use crate::config::{Address, Config};
use crate::error::Error;
use crate::reg_data::mpu6886::*;
use crate::sample::{read_word_2c, temperature_celsius, Motion, Sample, Tilt};

/// Handles all operations on/with the MPU6886, blocking.
///
/// Reads are gated on a successful [`Mpu6886::initialize`]. The cached ranges
/// always match what was last written to the device, so a decode never uses a
/// stale divisor.
pub struct Mpu6886<B> {
    bus: B,
    accel_range: AccelRange,
    gyro_range: GyroRange,
    initialized: bool,
}

impl<I: I2c> Mpu6886<I2cInterface<I>> {
    /// Driver on an `embedded-hal` I2C bus at `address`
    pub fn new_i2c(i2c: I, address: Address) -> Self {
        Self::new(I2cInterface::new(i2c, address))
    }
}

impl<B> Mpu6886<B> {
    /// Side effect free constructor, nothing is sent until `initialize`
    pub fn new(bus: B) -> Self {
        let config = Config::default();
        Mpu6886 {
            bus,
            accel_range: config.accel_range,
            gyro_range: config.gyro_range,
            initialized: false,
        }
    }

    /// Returns the bus, consuming this driver
    pub fn release(self) -> B {
        self.bus
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Accel range currently configured on the device
    pub fn accel_range(&self) -> AccelRange {
        self.accel_range
    }

    /// Gyro range currently configured on the device
    pub fn gyro_range(&self) -> GyroRange {
        self.gyro_range
    }
}

impl<B, E> Mpu6886<B>
where
    B: RegisterBus<Error = E>,
    E: Debug,
{
    /// `initialize` with ±8g and ±500 °/s
    pub fn init(&mut self) -> Result<(), Error<E>> {
        self.initialize(Config::default())
    }

    /// Wakes the device and applies both full scale ranges.
    ///
    /// On failure the driver is left uninitialized with its cached ranges
    /// untouched; the whole sequence has to be retried.
    pub fn initialize(&mut self, config: Config) -> Result<(), Error<E>> {
        self.initialized = false;

        self.wake()?;
        self.write_byte(ACCEL_CONFIG::ADDR, config.accel_range.bits())?;
        self.write_byte(GYRO_CONFIG::ADDR, config.gyro_range.bits())?;

        self.accel_range = config.accel_range;
        self.gyro_range = config.gyro_range;
        self.initialized = true;

        info!(
            "MPU6886 initialized: accel {:?}, gyro {:?}",
            config.accel_range, config.gyro_range
        );
        Ok(())
    }

    /// Clears SLEEP and selects the auto clock source
    fn wake(&mut self) -> Result<(), Error<E>> {
        self.write_byte(PWR_MGMT_1::ADDR, PWR_MGMT_1::CLKSEL_AUTO)
    }

    /// Soft reset. The device comes back asleep with ±2g / ±250 °/s and has to
    /// be initialized again.
    pub fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
        self.write_byte(PWR_MGMT_1::ADDR, PWR_MGMT_1::DEVICE_RESET)?;
        delay.delay_ms(100);

        self.initialized = false;
        self.accel_range = AccelRange::G2;
        self.gyro_range = GyroRange::Dps250;
        debug!("MPU6886 reset");
        Ok(())
    }

    /// Raw WHO_AM_I value
    pub fn who_am_i(&mut self) -> Result<u8, Error<E>> {
        let mut byte = [0u8; 1];
        self.read_bytes(WHO_AM_I, &mut byte)?;
        Ok(byte[0])
    }

    /// Checks WHO_AM_I against the MPU6886 id
    pub fn verify(&mut self) -> Result<(), Error<E>> {
        let id = self.who_am_i()?;
        if id != CHIP_ID {
            warn!("unexpected WHO_AM_I {:#x}, expected {:#x}", id, CHIP_ID);
            return Err(Error::WrongDevice(id));
        }
        Ok(())
    }

    /// Set accel range, and update sensitivity accordingly
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error<E>> {
        self.write_byte(ACCEL_CONFIG::ADDR, range.bits())?;
        self.accel_range = range;
        debug!("accel range {:?}", range);
        Ok(())
    }

    /// Set gyro range, and update sensitivity accordingly
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error<E>> {
        self.write_byte(GYRO_CONFIG::ADDR, range.bits())?;
        self.gyro_range = range;
        debug!("gyro range {:?}", range);
        Ok(())
    }

    /// Accelerometer readings in g
    pub fn read_accel(&mut self) -> Result<Sample, Error<E>> {
        self.ensure_initialized()?;
        let mut buf = [0u8; 6];
        self.read_bytes(ACCEL_XOUT_H, &mut buf)?;
        Ok(Sample::from_be_bytes(&buf, self.accel_range.sensitivity()))
    }

    /// Gyro readings in °/s
    pub fn read_gyro(&mut self) -> Result<Sample, Error<E>> {
        self.ensure_initialized()?;
        let mut buf = [0u8; 6];
        self.read_bytes(GYRO_XOUT_H, &mut buf)?;
        Ok(Sample::from_be_bytes(&buf, self.gyro_range.sensitivity()))
    }

    /// Die temperature in °C
    pub fn read_temperature(&mut self) -> Result<f32, Error<E>> {
        self.ensure_initialized()?;
        let mut buf = [0u8; 2];
        self.read_bytes(TEMP_OUT_H, &mut buf)?;
        Ok(temperature_celsius(read_word_2c(&buf)))
    }

    /// Accel, temperature and gyro in one burst, so all three come from the
    /// same sampling instant
    pub fn read_all(&mut self) -> Result<Motion, Error<E>> {
        self.ensure_initialized()?;
        let mut buf = [0u8; MOTION_BLOCK_LEN];
        self.read_bytes(ACCEL_XOUT_H, &mut buf)?;
        Ok(decode_motion(&buf, self.accel_range, self.gyro_range))
    }

    /// Norm of the acceleration vector in g
    pub fn magnitude(&mut self) -> Result<f32, Error<E>> {
        Ok(self.read_accel()?.magnitude())
    }

    /// Pitch and roll in degrees, from gravity
    pub fn tilt_angles(&mut self) -> Result<Tilt, Error<E>> {
        Ok(self.read_accel()?.tilt())
    }

    /// True if the acceleration magnitude is outside `1g ± threshold`
    pub fn motion_detected(&mut self, threshold: f32) -> Result<bool, Error<E>> {
        Ok(self.read_accel()?.is_moving(threshold))
    }

    fn ensure_initialized(&self) -> Result<(), Error<E>> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    /// Writes byte to register
    fn write_byte(&mut self, reg: u8, byte: u8) -> Result<(), Error<E>> {
        trace!("write {:#x} <- {:#x}", reg, byte);
        self.bus.write_register(reg, byte).map_err(Error::Bus)
    }

    /// Reads series of bytes into buf from specified reg
    fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.bus.read_registers(reg, buf).map_err(Error::Bus)
    }
}

/// Splits a 14 byte ACCEL_XOUT_H..GYRO_ZOUT_L block
pub(crate) fn decode_motion(
    buf: &[u8; MOTION_BLOCK_LEN],
    accel_range: AccelRange,
    gyro_range: GyroRange,
) -> Motion {
    let accel: [u8; 6] = core::array::from_fn(|i| buf[i]);
    let gyro: [u8; 6] = core::array::from_fn(|i| buf[8 + i]);
    Motion {
        accel: Sample::from_be_bytes(&accel, accel_range.sensitivity()),
        gyro: Sample::from_be_bytes(&gyro, gyro_range.sensitivity()),
        temperature: temperature_celsius(read_word_2c(&[buf[6], buf[7]])),
    }
}
