//! Decoding of raw output registers into physical units.

use libm::{atan2f, sqrtf};
use nalgebra::Vector3;

use crate::reg_data::mpu6886::{TEMP_OFFSET, TEMP_SENSITIVITY};

/// PI / 180, for conversion to radians
pub const PI_180: f32 = core::f32::consts::PI / 180.0;

/// Default band around 1g outside of which the sensor is considered moving
pub const DEFAULT_MOTION_THRESHOLD: f32 = 0.1;

/// One three axis reading, in g for the accelerometer and °/s for the gyro.
///
/// Samples carry no sensor timestamp; they describe the moment of the read call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample(Vector3<f32>);

impl Sample {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// Decodes an XH,XL,YH,YL,ZH,ZL block and divides each axis by `sensitivity`
    pub fn from_be_bytes(buf: &[u8; 6], sensitivity: f32) -> Self {
        let raw = Vector3::new(
            read_word_2c(&[buf[0], buf[1]]) as f32,
            read_word_2c(&[buf[2], buf[3]]) as f32,
            read_word_2c(&[buf[4], buf[5]]) as f32,
        );
        Self(raw / sensitivity)
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn z(&self) -> f32 {
        self.0.z
    }

    pub fn vector(&self) -> Vector3<f32> {
        self.0
    }

    /// Euclidean norm of the three axes
    pub fn magnitude(&self) -> f32 {
        sqrtf(self.x() * self.x() + self.y() * self.y() + self.z() * self.z())
    }

    /// Pitch and roll in degrees from an accelerometer sample.
    /// No yaw without a magnetometer.
    /// https://www.nxp.com/docs/en/application-note/AN3461.pdf equation 28, 29
    pub fn tilt(&self) -> Tilt {
        let (x, y, z) = (self.x(), self.y(), self.z());
        Tilt {
            pitch: atan2f(y, sqrtf(x * x + z * z)) / PI_180,
            roll: atan2f(-x, sqrtf(y * y + z * z)) / PI_180,
        }
    }

    /// True when the magnitude of an accelerometer sample leaves `1g ± threshold`
    pub fn is_moving(&self, threshold: f32) -> bool {
        let magnitude = self.magnitude();
        magnitude > 1.0 + threshold || magnitude < 1.0 - threshold
    }

    /// Gyro sample converted from °/s to rad/s
    pub fn to_radians(&self) -> Self {
        Self(self.0 * PI_180)
    }
}

#[cfg(feature = "defmt-03")]
impl defmt::Format for Sample {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

/// Orientation from gravity, degrees
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Tilt {
    /// Rotation around X
    pub pitch: f32,
    /// Rotation around Y
    pub roll: f32,
}

/// Accel, die temperature and gyro from a single burst read
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Motion {
    pub accel: Sample,
    pub gyro: Sample,
    /// °C
    pub temperature: f32,
}

/// Combines a big-endian high/low byte pair into a two's complement value
pub fn read_word_2c(bytes: &[u8; 2]) -> i16 {
    i16::from_be_bytes(*bytes)
}

/// Die temperature in °C from TEMP_OUT
pub fn temperature_celsius(raw: i16) -> f32 {
    raw as f32 / TEMP_SENSITIVITY + TEMP_OFFSET
}
