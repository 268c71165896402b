#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use k155id1::{CathodeMap, DecoderPins, K155ID1};

pub type WriteLog = Rc<RefCell<Vec<(char, bool)>>>;
pub type Fault = Rc<Cell<bool>>;

#[derive(Clone)]
pub struct MockPin {
    name: char,
    log: WriteLog,
    fail: Fault,
}

impl MockPin {
    pub fn new(name: char, log: &WriteLog) -> Self {
        Self {
            name,
            log: log.clone(),
            fail: Fault::default(),
        }
    }

    pub fn failing(name: char, log: &WriteLog) -> Self {
        let pin = Self::new(name, log);
        pin.fail.set(true);
        pin
    }

    /// Pin that fails while `fault` is set.
    pub fn with_fault(name: char, log: &WriteLog, fault: &Fault) -> Self {
        Self {
            fail: fault.clone(),
            ..Self::new(name, log)
        }
    }

    fn write(&mut self, high: bool) -> Result<(), ErrorKind> {
        if self.fail.get() {
            return Err(ErrorKind::Other);
        }
        self.log.borrow_mut().push((self.name, high));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

pub type Decoder = K155ID1<MockPin, MockPin, MockPin, MockPin>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn decoder(map: CathodeMap) -> (Decoder, WriteLog) {
    init_logger();
    let log = WriteLog::default();
    let pins = DecoderPins {
        d: MockPin::new('D', &log),
        c: MockPin::new('C', &log),
        b: MockPin::new('B', &log),
        a: MockPin::new('A', &log),
    };
    (K155ID1::new(pins, map), log)
}

pub fn ready_decoder(map: CathodeMap) -> (Decoder, WriteLog) {
    let (mut decoder, log) = decoder(map);
    decoder.init().unwrap();
    log.borrow_mut().clear();
    (decoder, log)
}

/// Current level of each line as bits D, C, B, A.
pub fn levels(log: &WriteLog) -> [u8; 4] {
    let mut levels = [0xFF; 4];
    for &(name, high) in log.borrow().iter() {
        let slot = match name {
            'D' => 0,
            'C' => 1,
            'B' => 2,
            'A' => 3,
            _ => unreachable!(),
        };
        levels[slot] = high as u8;
    }
    levels
}
