//! Reset release sequencing
//!
//! The FPGA sits in held reset while its CRAM is programmed. Bringing
//! it out is a fixed-latency protocol step: assert, hold for the settle
//! interval, deassert. The wait is deliberately a blocking call; real
//! silicon settle time cannot be shortened by scheduling tricks.

use ehal::blocking::delay::DelayMs;
use ehal::digital::v2::OutputPin;

use crate::constants::SETTLE_DELAY_MS;

pub struct ResetSequencer<D>
    where D: DelayMs<u16>
{
    delay: D,
    settle_ms: u16,
}

impl<D> ResetSequencer<D>
    where D: DelayMs<u16>
{
    pub fn new(delay: D) -> Self {
        ResetSequencer { delay,
                         settle_ms: SETTLE_DELAY_MS, }
    }

    /// Drive the pin through assert / settle / deassert. Returns once
    /// the device is running; the pin is not touched again after this.
    pub fn sequence<Op>(&mut self, pin: &mut Op)
        where Op: OutputPin
    {
        pin.set_low().ok();
        self.wait_for_settle();
        pin.set_high().ok();
    }

    fn wait_for_settle(&mut self) {
        self.delay.delay_ms(self.settle_ms);
    }
}
