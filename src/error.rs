use core::fmt;

#[cfg(feature = "defmt-03")]
use defmt::Format;

/// Errors from MPU6886 operations, generic over the bus error `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(Format))]
pub enum Error<E> {
    /// Bus transaction failed (NACK, timeout, arbitration loss...)
    Bus(E),

    /// A read was attempted before a successful `initialize`
    NotInitialized,

    /// Range code that does not map to a full scale setting
    InvalidRange(u8),

    /// WHO_AM_I returned something other than an MPU6886 id
    WrongDevice(u8),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus error: {:?}", e),
            Self::NotInitialized => f.write_str("sensor not initialized"),
            Self::InvalidRange(bits) => write!(f, "invalid range code {:#04x}", bits),
            Self::WrongDevice(id) => write!(f, "unexpected WHO_AM_I {:#04x}", id),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

/// A range code that is not one of the four full scale bit patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(Format))]
pub struct InvalidRange(pub u8);

impl<E> From<InvalidRange> for Error<E> {
    fn from(InvalidRange(bits): InvalidRange) -> Self {
        Error::InvalidRange(bits)
    }
}
