//! Configuration-memory loader
//!
//! The FPGA's CRAM is a write-only streaming target: a load is
//! monolithic, start to finish, with no partial commits and no random
//! access. The API mirrors that as an at-most-one, all-or-nothing
//! open/write/close session.

use crate::bitstream::Bitstream;
use crate::constants::CRAM_CHUNK;
use crate::fpga::{Fpga, FpgaClock};

/// Seam over the wire that carries configuration data into the device
/// (slave SPI on the reference board). `begin` puts the device into its
/// configuration-receptive mode and `finish` takes it back out; both
/// are plain pin/clock toggling and cannot fail. `send` pushes bytes
/// and reports wire faults.
pub trait CramTransport {
    type Error;

    fn begin(&mut self);
    fn send(&mut self, chunk: &[u8]) -> Result<(), Self::Error>;
    fn finish(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CramError {
    /// The FPGA clock was never started.
    DeviceNotReady,
    /// A configuration session is already active.
    SessionAlreadyOpen,
    /// Operation on a session that was never opened.
    InvalidSession,
    /// The transport faulted mid-stream. The device holds a partial
    /// image; close the session and power-cycle, there is no in-band
    /// recovery.
    TransferAborted,
}

enum Session {
    Idle,
    Open,
    Closed,
}

pub struct Cram<T>
    where T: CramTransport
{
    transport: T,
    session: Session,
}

impl<T> Cram<T>
    where T: CramTransport
{
    pub fn new(transport: T) -> Self {
        Cram { transport,
               session: Session::Idle, }
    }

    /// Open a configuration session against a clock-running FPGA.
    pub fn open<Clk>(&mut self, fpga: &Fpga<Clk>) -> Result<(), CramError>
        where Clk: FpgaClock
    {
        if !fpga.clock_started() {
            return Err(CramError::DeviceNotReady);
        }
        if let Session::Open = self.session {
            return Err(CramError::SessionAlreadyOpen);
        }
        self.transport.begin();
        self.session = Session::Open;
        Ok(())
    }

    /// Stream the whole image, in byte order, into the device. Chunking
    /// is internal; callers see a single blocking write.
    pub fn write(&mut self, image: &Bitstream) -> Result<(), CramError> {
        match self.session {
            Session::Open => {},
            _ => return Err(CramError::InvalidSession),
        }
        for chunk in image.as_bytes().chunks(CRAM_CHUNK) {
            self.transport
                .send(chunk)
                .map_err(|_| CramError::TransferAborted)?;
        }
        Ok(())
    }

    /// Leave configuration mode. A second close is a no-op; closing a
    /// session that was never opened is a protocol misuse.
    pub fn close(&mut self) -> Result<(), CramError> {
        match self.session {
            Session::Idle => Err(CramError::InvalidSession),
            Session::Open => {
                self.transport.finish();
                self.session = Session::Closed;
                Ok(())
            },
            Session::Closed => Ok(()),
        }
    }
}
