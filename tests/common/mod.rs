//! Recording mock transport shared by the integration tests.
#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::sync::{Arc, Mutex};

use embedded_hal::i2c::{ErrorKind, ErrorType, NoAcknowledgeSource, Operation};

/// Something the controller asked the bus or the delay provider to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Write { address: u8, register: u8, value: u8 },
    DelayMs(u32),
}

/// A write to the servo board's fixed address.
pub const fn write(register: u8, value: u8) -> Event {
    Event::Write {
        address: 0x6A,
        register,
        value,
    }
}

/// Event log shared between the mock bus, the mock delay, and the test. Also holds
/// the bus failure switch so a test can flip it after handing the bus away.
#[derive(Debug, Clone, Default)]
pub struct Log(Arc<Mutex<LogState>>);

#[derive(Debug, Default)]
struct LogState {
    events: Vec<Event>,
    fail_after_writes: Option<usize>,
}

impl Log {
    pub fn events(&self) -> Vec<Event> {
        self.state().events.clone()
    }

    /// Just the `(register, value)` pairs, in order.
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Write {
                    register, value, ..
                } => Some((register, value)),
                Event::DelayMs(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.state().events.clear();
    }

    /// NACK every write once the log holds `writes` successful writes.
    pub fn fail_after(&self, writes: usize) {
        self.state().fail_after_writes = Some(writes);
    }

    /// Stop failing.
    pub fn heal(&self) {
        self.state().fail_after_writes = None;
    }

    fn state(&self) -> std::sync::MutexGuard<'_, LogState> {
        self.0.lock().expect("log poisoned")
    }

    fn push(&self, event: Event) {
        self.state().events.push(event);
    }

    fn try_write(&self, address: u8, register: u8, value: u8) -> Result<(), MockError> {
        let mut state = self.state();
        let writes_done = state
            .events
            .iter()
            .filter(|event| matches!(event, Event::Write { .. }))
            .count();
        if state
            .fail_after_writes
            .is_some_and(|limit| writes_done >= limit)
        {
            return Err(MockError);
        }
        state.events.push(Event::Write {
            address,
            register,
            value,
        });
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl embedded_hal::i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

/// An I2C bus that records every register write into its [`Log`].
#[derive(Debug)]
pub struct RecordingI2c {
    log: Log,
}

impl RecordingI2c {
    fn record(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), MockError> {
        let bytes: Vec<u8> = operations
            .iter()
            .flat_map(|operation| match operation {
                Operation::Write(bytes) => bytes.to_vec(),
                Operation::Read(_) => panic!("the driver never reads"),
            })
            .collect();
        let [register, value] = bytes[..] else {
            panic!("register writes are [register, value], got {bytes:?}");
        };
        self.log.try_write(address, register, value)
    }
}

impl ErrorType for RecordingI2c {
    type Error = MockError;
}

impl embedded_hal::i2c::I2c for RecordingI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.record(address, operations)
    }
}

impl embedded_hal_async::i2c::I2c for RecordingI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.record(address, operations)
    }
}

/// Delay provider that logs each millisecond delay instead of sleeping.
#[derive(Debug)]
pub struct RecordingDelay {
    log: Log,
}

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, _ns: u32) {}

    async fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

/// A bus and a delay provider writing into one shared log.
pub fn recorder() -> (RecordingI2c, RecordingDelay, Log) {
    let log = Log::default();
    let i2c = RecordingI2c { log: log.clone() };
    let delay = RecordingDelay { log: log.clone() };
    (i2c, delay, log)
}
