#[cfg(feature = "defmt-03")]
use defmt::Format;

use crate::error::InvalidRange;

/// 7-bit address with AD0 pulled low
pub const DEFAULT_SLAVE_ADDR: u8 = 0x68;
/// 7-bit address with AD0 pulled high
pub const ALT_SLAVE_ADDR: u8 = 0x69;

/// WHO_AM_I register and the value an MPU6886 reports
pub const WHO_AM_I: u8 = 0x75;
pub const CHIP_ID: u8 = 0x19;

/// High byte of the accel X axis, start of the 6 byte XYZ block
pub const ACCEL_XOUT_H: u8 = 0x3B;
/// High byte of the die temperature
pub const TEMP_OUT_H: u8 = 0x41;
/// High byte of the gyro X axis, start of the 6 byte XYZ block
pub const GYRO_XOUT_H: u8 = 0x43;

/// accel (6) + temp (2) + gyro (6), contiguous from ACCEL_XOUT_H
pub const MOTION_BLOCK_LEN: usize = 14;

/// Temperature sensitivity, LSB/°C
pub const TEMP_SENSITIVITY: f32 = 326.8;
/// Output at 0 LSB, °C
pub const TEMP_OFFSET: f32 = 25.0;

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct PWR_MGMT_1;

impl PWR_MGMT_1 {
    pub const ADDR: u8 = 0x6B;
    /// Soft reset, self clearing. Device comes back asleep.
    pub const DEVICE_RESET: u8 = 0x80;
    /// SLEEP = 0, CLKSEL = 1 (auto select PLL when ready)
    pub const CLKSEL_AUTO: u8 = 0x01;
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct ACCEL_CONFIG;

impl ACCEL_CONFIG {
    pub const ADDR: u8 = 0x1C;
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct GYRO_CONFIG;

impl GYRO_CONFIG {
    pub const ADDR: u8 = 0x1B;
}

/// Accelerometer full scale, ACCEL_CONFIG bits 4:3
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(Format))]
pub enum AccelRange {
    /// ±2g
    G2,
    /// ±4g
    G4,
    /// ±8g
    G8,
    /// ±16g
    G16,
}

impl AccelRange {
    /// Value written to ACCEL_CONFIG
    pub const fn bits(self) -> u8 {
        match self {
            Self::G2 => 0x00,
            Self::G4 => 0x08,
            Self::G8 => 0x10,
            Self::G16 => 0x18,
        }
    }

    /// LSB per g
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }
}

impl TryFrom<u8> for AccelRange {
    type Error = InvalidRange;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0x00 => Ok(Self::G2),
            0x08 => Ok(Self::G4),
            0x10 => Ok(Self::G8),
            0x18 => Ok(Self::G16),
            other => Err(InvalidRange(other)),
        }
    }
}

/// Gyroscope full scale, GYRO_CONFIG bits 4:3
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(Format))]
pub enum GyroRange {
    /// ±250 °/s
    Dps250,
    /// ±500 °/s
    Dps500,
    /// ±1000 °/s
    Dps1000,
    /// ±2000 °/s
    Dps2000,
}

impl GyroRange {
    /// Value written to GYRO_CONFIG
    pub const fn bits(self) -> u8 {
        match self {
            Self::Dps250 => 0x00,
            Self::Dps500 => 0x08,
            Self::Dps1000 => 0x10,
            Self::Dps2000 => 0x18,
        }
    }

    /// LSB per °/s
    pub const fn sensitivity(self) -> f32 {
        match self {
            Self::Dps250 => 131.0,
            Self::Dps500 => 65.5,
            Self::Dps1000 => 32.8,
            Self::Dps2000 => 16.4,
        }
    }
}

impl TryFrom<u8> for GyroRange {
    type Error = InvalidRange;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0x00 => Ok(Self::Dps250),
            0x08 => Ok(Self::Dps500),
            0x10 => Ok(Self::Dps1000),
            0x18 => Ok(Self::Dps2000),
            other => Err(InvalidRange(other)),
        }
    }
}
