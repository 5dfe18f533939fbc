//! On-board status LED

use ehal::digital::v2::OutputPin;

use crate::utils;

pub struct StatusLed<Op>
    where Op: OutputPin
{
    pin: Op,
}

impl<Op> StatusLed<Op>
    where Op: OutputPin
{
    pub fn new(pin: Op) -> Self {
        StatusLed { pin, }
    }

    pub fn off(&mut self) {
        self.pin.set_low().ok();
    }

    pub fn on(&mut self) {
        self.pin.set_high().ok();
    }

    pub fn blink(&mut self) {
        self.on();
        // XXX: use Delay and ms
        utils::tick_delay(100000);
        self.off();
    }
}
