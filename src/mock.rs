//! Recording I2C mock for tests.
//!
//! Implements both the blocking and the async `I2c` traits, logs every
//! transaction, serves reads from a queue, and can fail a chosen write.

use core::cell::RefCell;
use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};
use std::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    Nack,
}

impl embedded_hal::i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    Write {
        addr: u8,
        data: Vec<u8>,
    },
    Read {
        addr: u8,
        len: usize,
    },
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

#[derive(Debug, Default)]
pub struct MockI2c {
    transactions: RefCell<Vec<I2cTransaction>>,
    read_data: RefCell<Vec<u8>>,
    writes: usize,
    fail_write: Option<usize>,
    fail_reads: bool,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.borrow().clone()
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.borrow_mut().clear();
    }

    /// Register values handed out to subsequent reads, in order
    pub fn set_read_data(&mut self, data: &[u8]) {
        *self.read_data.borrow_mut() = data.to_vec();
    }

    /// Fail the `n`th plain write (0 based), counted from now
    pub fn fail_on_write(&mut self, n: usize) {
        self.writes = 0;
        self.fail_write = Some(n);
    }

    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Register writes as `(reg, value)` pairs
    pub fn register_writes(&self) -> Vec<(u8, u8)> {
        self.transactions
            .borrow()
            .iter()
            .filter_map(|t| match t {
                I2cTransaction::Write { data, .. } if data.len() == 2 => Some((data[0], data[1])),
                _ => None,
            })
            .collect()
    }

    fn fill(&self, buf: &mut [u8]) {
        let mut read_data = self.read_data.borrow_mut();
        let to_read = core::cmp::min(buf.len(), read_data.len());
        buf[..to_read].copy_from_slice(&read_data[..to_read]);
        read_data.drain(..to_read);
    }

    fn handle(&mut self, addr: u8, operations: &mut [Operation<'_>]) -> Result<(), MockError> {
        match operations {
            [Operation::Write(data)] => {
                let n = self.writes;
                self.writes += 1;
                if self.fail_write == Some(n) {
                    return Err(MockError::Nack);
                }
                self.transactions.borrow_mut().push(I2cTransaction::Write {
                    addr,
                    data: data.to_vec(),
                });
            }
            [Operation::Read(buf)] => {
                if self.fail_reads {
                    return Err(MockError::Nack);
                }
                self.transactions.borrow_mut().push(I2cTransaction::Read {
                    addr,
                    len: buf.len(),
                });
                self.fill(buf);
            }
            [Operation::Write(data), Operation::Read(buf)] => {
                if self.fail_reads {
                    return Err(MockError::Nack);
                }
                self.transactions
                    .borrow_mut()
                    .push(I2cTransaction::WriteRead {
                        addr,
                        write_data: data.to_vec(),
                        read_len: buf.len(),
                    });
                self.fill(buf);
            }
            _ => return Err(MockError::Nack),
        }
        Ok(())
    }
}

impl ErrorType for MockI2c {
    type Error = MockError;
}

impl embedded_hal::i2c::I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.handle(address, operations)
    }
}

impl embedded_hal_async::i2c::I2c for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.handle(address, operations)
    }
}

/// Big-endian bytes for three axis values, as the sensor lays them out
pub fn xyz_bytes(x: i16, y: i16, z: i16) -> [u8; 6] {
    let (x, y, z) = (x.to_be_bytes(), y.to_be_bytes(), z.to_be_bytes());
    [x[0], x[1], y[0], y[1], z[0], z[1]]
}

/// Delay that only accumulates the requested time
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
