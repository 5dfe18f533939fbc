//! FPGA device handle and its clock source

/// Seam over the oscillator/PLL feeding the FPGA. Implementations own
/// the vendor-specific register pokes; callers only see configure/enable.
pub trait FpgaClock: Sized {
    fn configure(&mut self, freq_mhz: u32);
    fn enable(&mut self);
}

/// Owned handle to the FPGA companion. Constructed once at boot and
/// passed to whoever needs it, so "clock already started" is carried in
/// the handle instead of implied by call order.
pub struct Fpga<Clk>
    where Clk: FpgaClock
{
    clock: Clk,
    started: bool,
}

impl<Clk> Fpga<Clk>
    where Clk: FpgaClock
{
    pub fn init(mut clock: Clk, freq_mhz: u32) -> Self {
        clock.configure(freq_mhz);
        Fpga { clock,
               started: false, }
    }

    pub fn start(&mut self) {
        self.clock.enable();
        self.started = true;
    }

    pub fn clock_started(&self) -> bool {
        self.started
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub struct CountingClock {
        pub configured_mhz: Rc<Cell<u32>>,
        pub enables: Rc<Cell<usize>>,
    }

    impl FpgaClock for CountingClock {
        fn configure(&mut self, freq_mhz: u32) {
            self.configured_mhz.set(freq_mhz);
        }

        fn enable(&mut self) {
            self.enables.set(self.enables.get() + 1);
        }
    }
}
