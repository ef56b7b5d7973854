//! Register level access to the sensor.
//!
//! The drivers only ever need two primitives: write one byte to a register, and
//! burst-read a run of contiguous registers. [`I2cInterface`] provides both on
//! top of any `embedded-hal` (blocking) or `embedded-hal-async` I2C bus.

use embedded_hal::i2c::I2c;
use embedded_hal_async::i2c::I2c as AsyncI2c;

use crate::config::Address;

/// Blocking register access
pub trait RegisterBus {
    type Error: core::fmt::Debug;

    /// Writes `value` to register `reg`
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Fills `buf` with registers starting at `reg`, in a single transaction
    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// Async register access, see [`RegisterBus`]
#[allow(async_fn_in_trait)]
pub trait AsyncRegisterBus {
    type Error: core::fmt::Debug;

    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    async fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// I2C bus bound to the sensor's slave address
#[derive(Debug)]
pub struct I2cInterface<I> {
    i2c: I,
    slave_addr: u8,
}

impl<I> I2cInterface<I> {
    pub fn new(i2c: I, address: Address) -> Self {
        Self {
            i2c,
            slave_addr: address.into(),
        }
    }

    pub fn address(&self) -> Address {
        Address(self.slave_addr)
    }

    /// Returns the underlying I2C peripheral
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I> RegisterBus for I2cInterface<I>
where
    I: I2c,
{
    type Error = I::Error;

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.slave_addr, &[reg, value])
    }

    fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.slave_addr, &[reg], buf)
    }
}

impl<I> AsyncRegisterBus for I2cInterface<I>
where
    I: AsyncI2c,
{
    type Error = I::Error;

    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.slave_addr, &[reg, value]).await
    }

    async fn read_registers(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.slave_addr, &[reg], buf).await
    }
}
