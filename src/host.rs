//! Integer coded surface for scripting engine bindings.
//!
//! Hosts that load the driver as a plugin call [`HostSensor::new`] from their
//! init hook and [`HostSensor::release`] from their final hook. There is no
//! global registry; the host owns the value.

use core::fmt::Debug;

use crate::bus::RegisterBus;
use crate::config::Config;
use crate::error::Error;
use crate::mpu6886::Mpu6886;
use crate::reg_data::mpu6886::{AccelRange, GyroRange};

/// Result codes handed to the host
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Status {
    Ok = 0,
    BusError,
    NotInitialized,
    InvalidRange,
    WrongDevice,
}

impl<E> From<&Error<E>> for Status {
    fn from(e: &Error<E>) -> Self {
        match e {
            Error::Bus(_) => Status::BusError,
            Error::NotInitialized => Status::NotInitialized,
            Error::InvalidRange(_) => Status::InvalidRange,
            Error::WrongDevice(_) => Status::WrongDevice,
        }
    }
}

impl<E> From<Error<E>> for Status {
    fn from(e: Error<E>) -> Self {
        Status::from(&e)
    }
}

/// Range codes are the register bit patterns (0x00, 0x08, 0x10, 0x18)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InitOptions {
    pub accel_range: u8,
    pub gyro_range: u8,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            accel_range: AccelRange::G8.bits(),
            gyro_range: GyroRange::Dps500.bits(),
        }
    }
}

/// Everything in one record, C layout
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reading {
    pub accel: [f32; 3],
    pub gyro: [f32; 3],
    pub temp: f32,
}

pub struct HostSensor<B> {
    driver: Mpu6886<B>,
}

impl<B, E> HostSensor<B>
where
    B: RegisterBus<Error = E>,
    E: Debug,
{
    pub fn new(bus: B) -> Self {
        Self {
            driver: Mpu6886::new(bus),
        }
    }

    /// Gives the bus back to the host
    pub fn release(self) -> B {
        self.driver.release()
    }

    pub fn initialize(&mut self, options: InitOptions) -> Result<(), Status> {
        let accel_range = AccelRange::try_from(options.accel_range).map_err(Error::<E>::from)?;
        let gyro_range = GyroRange::try_from(options.gyro_range).map_err(Error::<E>::from)?;
        self.driver
            .initialize(Config::new(accel_range, gyro_range))
            .map_err(Status::from)
    }

    pub fn read_accel(&mut self) -> Result<[f32; 3], Status> {
        let s = self.driver.read_accel()?;
        Ok([s.x(), s.y(), s.z()])
    }

    pub fn read_gyro(&mut self) -> Result<[f32; 3], Status> {
        let s = self.driver.read_gyro()?;
        Ok([s.x(), s.y(), s.z()])
    }

    pub fn read_temperature(&mut self) -> Result<f32, Status> {
        Ok(self.driver.read_temperature()?)
    }

    pub fn read_all(&mut self) -> Result<Reading, Status> {
        let motion = self.driver.read_all()?;
        Ok(Reading {
            accel: [motion.accel.x(), motion.accel.y(), motion.accel.z()],
            gyro: [motion.gyro.x(), motion.gyro.y(), motion.gyro.z()],
            temp: motion.temperature,
        })
    }

    pub fn set_accel_range(&mut self, code: u8) -> Result<(), Status> {
        let range = AccelRange::try_from(code).map_err(Error::<E>::from)?;
        Ok(self.driver.set_accel_range(range)?)
    }

    pub fn set_gyro_range(&mut self, code: u8) -> Result<(), Status> {
        let range = GyroRange::try_from(code).map_err(Error::<E>::from)?;
        Ok(self.driver.set_gyro_range(range)?)
    }

    /// Underlying driver, for the operations the host surface does not cover
    pub fn driver(&mut self) -> &mut Mpu6886<B> {
        &mut self.driver
    }
}
