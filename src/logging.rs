use core::fmt;

use ehal::digital::v2::OutputPin;

use crate::led::StatusLed;

/// Diagnostic console over a serial transmitter. Write-only; faults on
/// the wire are signalled out-of-band by blinking the status LED.
pub struct SerialLogger<Wr, Op>
    where Wr: ehal::serial::Write<u8>,
          Op: OutputPin
{
    tx: Wr,
    led: StatusLed<Op>,
}

impl<Wr, Op> SerialLogger<Wr, Op>
    where Wr: ehal::serial::Write<u8> + Sized,
          Op: OutputPin
{
    pub fn new(tx: Wr, led: StatusLed<Op>) -> Self {
        Self { tx,
               led, }
    }

    pub fn led(&mut self) -> &mut StatusLed<Op> {
        &mut self.led
    }

    fn write_one(&mut self, data: u8) {
        match nb::block!(self.tx.write(data)) {
            Ok(_) => {},
            Err(_) => self.led.blink(),
        }
    }

    fn write_many(&mut self, data: &[u8]) {
        for b in data.iter() {
            self.write_one(*b);
        }
        match self.tx.flush() {
            Ok(_) => {},
            Err(_) => self.led.blink(),
        };
    }
}

impl<Wr, Op> fmt::Write for SerialLogger<Wr, Op>
    where Wr: ehal::serial::Write<u8>,
          Op: OutputPin
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_many(s.as_bytes());
        Ok(())
    }

    fn write_char(&mut self, s: char) -> fmt::Result {
        self.write_one(s as u8);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use core::fmt::Write;

    struct FakeTx {
        sent: Vec<u8>,
    }

    impl ehal::serial::Write<u8> for FakeTx {
        type Error = Infallible;

        fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
            self.sent.push(word);
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), Infallible> {
            Ok(())
        }
    }

    struct NullPin;

    impl OutputPin for NullPin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    #[test]
    fn test_write_str_goes_to_wire() {
        let mut log =
            SerialLogger::new(FakeTx { sent: Vec::new() },
                              StatusLed::new(NullPin));
        write!(log, "fpga {}\r\n", 48).unwrap();
        assert_eq!(log.tx.sent, b"fpga 48\r\n".to_vec());
    }

    #[test]
    fn test_write_char() {
        let mut log =
            SerialLogger::new(FakeTx { sent: Vec::new() },
                              StatusLed::new(NullPin));
        log.write_char('>').unwrap();
        assert_eq!(log.tx.sent, vec![b'>']);
    }
}
