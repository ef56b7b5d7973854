//! Driver for the InvenSense MPU6886 6-axis IMU (accelerometer, gyroscope,
//! die temperature) over I2C.
//!
//! [`mpu6886::Mpu6886`] is the blocking driver on `embedded-hal`,
//! [`mpu6886_async::Mpu6886Async`] the same on `embedded-hal-async`.
//! Both talk to the device through the [`bus`] traits, so any transport that can
//! write a register and burst-read a register block works.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub(crate) mod reg_data;

pub mod bus;
pub mod config;
pub mod error;
pub mod host;
pub mod mpu6886;
pub mod mpu6886_async;
pub mod sample;

#[cfg(test)]
mod mock;

pub use config::{Address, Config};
pub use error::{Error, InvalidRange};
pub use reg_data::mpu6886::{AccelRange, GyroRange};
pub use sample::{Motion, Sample, Tilt};
