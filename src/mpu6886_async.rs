use core::fmt::Debug;

use embedded_hal_async::{delay::DelayNs, i2c::I2c};

use crate::bus::{AsyncRegisterBus, I2cInterface};
use crate::config::{Address, Config};
use crate::error::Error;
use crate::mpu6886::decode_motion;
use crate::reg_data::mpu6886::*;
use crate::sample::{read_word_2c, temperature_celsius, Motion, Sample, Tilt};

/// Async twin of [`crate::mpu6886::Mpu6886`], same register sequencing and
/// caching rules.
pub struct Mpu6886Async<B> {
    bus: B,
    accel_range: AccelRange,
    gyro_range: GyroRange,
    initialized: bool,
}

impl<I: I2c> Mpu6886Async<I2cInterface<I>> {
    pub fn new_i2c(i2c: I, address: Address) -> Self {
        Self::new(I2cInterface::new(i2c, address))
    }
}

impl<B> Mpu6886Async<B> {
    pub fn new(bus: B) -> Self {
        let config = Config::default();
        Mpu6886Async {
            bus,
            accel_range: config.accel_range,
            gyro_range: config.gyro_range,
            initialized: false,
        }
    }

    pub fn release(self) -> B {
        self.bus
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn accel_range(&self) -> AccelRange {
        self.accel_range
    }

    pub fn gyro_range(&self) -> GyroRange {
        self.gyro_range
    }
}

impl<B, E> Mpu6886Async<B>
where
    B: AsyncRegisterBus<Error = E>,
    E: Debug,
{
    pub async fn init(&mut self) -> Result<(), Error<E>> {
        self.initialize(Config::default()).await
    }

    /// Wake, then accel range, then gyro range. Nothing is cached unless all
    /// three writes go through.
    pub async fn initialize(&mut self, config: Config) -> Result<(), Error<E>> {
        self.initialized = false;

        self.write_byte(PWR_MGMT_1::ADDR, PWR_MGMT_1::CLKSEL_AUTO)
            .await?;
        self.write_byte(ACCEL_CONFIG::ADDR, config.accel_range.bits())
            .await?;
        self.write_byte(GYRO_CONFIG::ADDR, config.gyro_range.bits())
            .await?;

        self.accel_range = config.accel_range;
        self.gyro_range = config.gyro_range;
        self.initialized = true;

        info!(
            "MPU6886 initialized: accel {:?}, gyro {:?}",
            config.accel_range, config.gyro_range
        );
        Ok(())
    }

    /// reset device
    pub async fn reset(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
        self.write_byte(PWR_MGMT_1::ADDR, PWR_MGMT_1::DEVICE_RESET)
            .await?;
        delay.delay_ms(100).await;
        // Reset puts the device to sleep with the register default ranges
        self.initialized = false;
        self.accel_range = AccelRange::G2;
        self.gyro_range = GyroRange::Dps250;
        debug!("MPU6886 reset");
        Ok(())
    }

    pub async fn who_am_i(&mut self) -> Result<u8, Error<E>> {
        let mut byte = [0u8; 1];
        self.read_bytes(WHO_AM_I, &mut byte).await?;
        Ok(byte[0])
    }

    pub async fn verify(&mut self) -> Result<(), Error<E>> {
        let id = self.who_am_i().await?;
        if id != CHIP_ID {
            warn!("unexpected WHO_AM_I {:#x}, expected {:#x}", id, CHIP_ID);
            return Err(Error::WrongDevice(id));
        }
        Ok(())
    }

    pub async fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error<E>> {
        self.write_byte(ACCEL_CONFIG::ADDR, range.bits()).await?;
        self.accel_range = range;
        debug!("accel range {:?}", range);
        Ok(())
    }

    pub async fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error<E>> {
        self.write_byte(GYRO_CONFIG::ADDR, range.bits()).await?;
        self.gyro_range = range;
        debug!("gyro range {:?}", range);
        Ok(())
    }

    /// Accelerometer readings in g
    pub async fn read_accel(&mut self) -> Result<Sample, Error<E>> {
        self.ensure_initialized()?;
        let mut buf = [0u8; 6];
        self.read_bytes(ACCEL_XOUT_H, &mut buf).await?;
        Ok(Sample::from_be_bytes(&buf, self.accel_range.sensitivity()))
    }

    /// Gyro readings in °/s
    pub async fn read_gyro(&mut self) -> Result<Sample, Error<E>> {
        self.ensure_initialized()?;
        let mut buf = [0u8; 6];
        self.read_bytes(GYRO_XOUT_H, &mut buf).await?;
        Ok(Sample::from_be_bytes(&buf, self.gyro_range.sensitivity()))
    }

    /// Sensor Temp in degrees celcius
    pub async fn read_temperature(&mut self) -> Result<f32, Error<E>> {
        self.ensure_initialized()?;
        let mut buf = [0u8; 2];
        self.read_bytes(TEMP_OUT_H, &mut buf).await?;
        Ok(temperature_celsius(read_word_2c(&buf)))
    }

    pub async fn read_all(&mut self) -> Result<Motion, Error<E>> {
        self.ensure_initialized()?;
        let mut buf = [0u8; MOTION_BLOCK_LEN];
        self.read_bytes(ACCEL_XOUT_H, &mut buf).await?;
        Ok(decode_motion(&buf, self.accel_range, self.gyro_range))
    }

    pub async fn magnitude(&mut self) -> Result<f32, Error<E>> {
        Ok(self.read_accel().await?.magnitude())
    }

    pub async fn tilt_angles(&mut self) -> Result<Tilt, Error<E>> {
        Ok(self.read_accel().await?.tilt())
    }

    pub async fn motion_detected(&mut self, threshold: f32) -> Result<bool, Error<E>> {
        Ok(self.read_accel().await?.is_moving(threshold))
    }

    fn ensure_initialized(&self) -> Result<(), Error<E>> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    async fn write_byte(&mut self, reg: u8, byte: u8) -> Result<(), Error<E>> {
        trace!("write {:#x} <- {:#x}", reg, byte);
        self.bus
            .write_register(reg, byte)
            .await
            .map_err(Error::Bus)
    }

    async fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.bus
            .read_registers(reg, buf)
            .await
            .map_err(Error::Bus)
    }
}
