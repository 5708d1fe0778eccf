//! Recording I2C bus used by unit tests

use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

use crate::interface::DisplayInterface;

/// One complete bus transaction: START .. STOP
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub address: u8,
    pub bytes: Vec<u8>,
}

/// I2C fake that records every write transaction in order
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub transfers: Vec<Transfer>,
    /// Fail every transaction once this many have succeeded
    fail_after: Option<usize>,
}

impl RecordingBus {
    pub const ERROR: ErrorKind = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(successes: usize) -> Self {
        Self {
            transfers: Vec::new(),
            fail_after: Some(successes),
        }
    }

    /// Payload bytes of every command-mode transaction, in order
    pub fn command_bytes(&self) -> Vec<u8> {
        self.transfers
            .iter()
            .filter(|t| t.bytes.first() == Some(&0x00))
            .flat_map(|t| t.bytes[1..].iter().copied())
            .collect()
    }

    /// Payloads of every data-mode transaction, in order
    pub fn data_transfers(&self) -> Vec<&[u8]> {
        self.transfers
            .iter()
            .filter(|t| t.bytes.first() == Some(&0x40))
            .map(|t| &t.bytes[1..])
            .collect()
    }
}

impl ErrorType for RecordingBus {
    type Error = ErrorKind;
}

impl I2c for RecordingBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail_after.is_some_and(|n| self.transfers.len() >= n) {
            return Err(Self::ERROR);
        }
        let mut bytes = Vec::new();
        for op in operations {
            match op {
                Operation::Write(data) => bytes.extend_from_slice(data),
                Operation::Read(buffer) => buffer.fill(0),
            }
        }
        self.transfers.push(Transfer { address, bytes });
        Ok(())
    }
}

/// Interface fake that records command bytes and data payloads without bus framing
#[derive(Debug, Default)]
pub struct RecordingInterface {
    pub commands: Vec<u8>,
    pub data: Vec<Vec<u8>>,
}

impl DisplayInterface for RecordingInterface {
    type Error = Infallible;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.commands.push(command);
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.data.push(data.to_vec());
        Ok(())
    }
}
