//! Linear bring-up pipeline
//!
//! Clock → console → host transport → CRAM load → reset release →
//! service loop. Boot-once, strictly forward, no re-entry; a failed
//! stage short-circuits everything after it, so reset is never released
//! over a partial image.

use core::fmt::Write;

use ehal::blocking::delay::DelayMs;
use ehal::digital::v2::OutputPin;

use crate::bitstream::Bitstream;
use crate::constants::FPGA_CLOCK_MHZ;
use crate::cram::{Cram, CramError, CramTransport};
use crate::fpga::{Fpga, FpgaClock};
use crate::logging::SerialLogger;
use crate::reset::ResetSequencer;
use crate::usb::HostTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootError {
    Configure(CramError),
}

impl From<CramError> for BootError {
    fn from(e: CramError) -> Self {
        BootError::Configure(e)
    }
}

/// Everything the sequencer drives, owned, constructed once at reset.
pub struct Board<Usb, Clk, T, Op, D>
    where Usb: HostTransport,
          Clk: FpgaClock,
          T: CramTransport,
          Op: OutputPin,
          D: DelayMs<u16>
{
    pub usb: Usb,
    pub fpga: Fpga<Clk>,
    pub cram: Cram<T>,
    pub reset: ResetSequencer<D>,
    pub reset_pin: Op,
}

/// Run the bring-up sequence to completion. On success the FPGA is
/// configured and out of reset; the returned handle services the host
/// transport for the rest of time.
pub fn bring_up<Wr, Lop, Usb, Clk, T, Op, D>(
    console: &mut SerialLogger<Wr, Lop>,
    mut board: Board<Usb, Clk, T, Op, D>,
    image: &Bitstream,
) -> Result<Running<Usb>, BootError>
    where Wr: ehal::serial::Write<u8>,
          Lop: OutputPin,
          Usb: HostTransport,
          Clk: FpgaClock,
          T: CramTransport,
          Op: OutputPin,
          D: DelayMs<u16>
{
    board.fpga.start();
    info!(console, "clock: {}mhz\r\n", FPGA_CLOCK_MHZ);
    board.usb.init();
    info!(console, "usb: up\r\n");
    if let Err(e) = load(&mut board.cram, &board.fpga, image) {
        error!(console, "cram: {:?}\r\n", e);
        return Err(BootError::Configure(e));
    }
    debug!(console, "cram: {} bytes\r\n", image.len());
    board.reset.sequence(&mut board.reset_pin);
    info!(console, "fpga: running\r\n");
    Ok(Running { usb: board.usb, })
}

fn load<Clk, T>(cram: &mut Cram<T>,
                fpga: &Fpga<Clk>,
                image: &Bitstream)
                -> Result<(), CramError>
    where Clk: FpgaClock,
          T: CramTransport
{
    cram.open(fpga)?;
    match cram.write(image) {
        Ok(()) => cram.close(),
        Err(e) => {
            // partial image, unrecoverable without a power cycle; still
            // take the device out of configuration mode
            cram.close().ok();
            Err(e)
        },
    }
}

/// Terminal-but-live state: the board stays here forever, handing the
/// host transport its task slice on every iteration.
pub struct Running<Usb>
    where Usb: HostTransport
{
    usb: Usb,
}

impl<Usb> Running<Usb>
    where Usb: HostTransport
{
    pub fn step(&mut self) {
        self.usb.poll();
    }

    pub fn serve(mut self) -> ! {
        loop {
            self.step();
        }
    }
}
