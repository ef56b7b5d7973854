//! Driver configuration: bus address and full scale ranges applied by `initialize`.

#[cfg(feature = "defmt-03")]
use defmt::Format;

use crate::reg_data::mpu6886::{AccelRange, GyroRange, ALT_SLAVE_ADDR, DEFAULT_SLAVE_ADDR};

/// 7-bit I2C address of the sensor.
///
/// AD0 low selects 0x68, AD0 high selects 0x69.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(Format))]
pub struct Address(pub u8);

impl Address {
    pub const fn alternate() -> Self {
        Self(ALT_SLAVE_ADDR)
    }
}

impl Default for Address {
    fn default() -> Self {
        Self(DEFAULT_SLAVE_ADDR)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}

/// Full scale settings written during `initialize`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(Format))]
pub struct Config {
    pub accel_range: AccelRange,
    pub gyro_range: GyroRange,
}

impl Config {
    pub const fn new(accel_range: AccelRange, gyro_range: GyroRange) -> Self {
        Self {
            accel_range,
            gyro_range,
        }
    }

    pub const fn with_accel_range(mut self, range: AccelRange) -> Self {
        self.accel_range = range;
        self
    }

    pub const fn with_gyro_range(mut self, range: GyroRange) -> Self {
        self.gyro_range = range;
        self
    }
}

impl Default for Config {
    /// ±8g, ±500 °/s
    fn default() -> Self {
        Self::new(AccelRange::G8, GyroRange::Dps500)
    }
}
