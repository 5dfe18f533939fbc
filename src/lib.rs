//! Boot sequencer for an iCE40 FPGA companion chip.
//!
//! Brings the board from power-on to operational: serial console, USB
//! device personality, bitstream load into the FPGA's configuration
//! memory, reset release, then a forever service loop. Peripherals sit
//! behind `embedded-hal` and crate-local traits so the sequencing logic
//! runs (and is tested) without the hardware.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
pub mod toolbox;

pub mod bitstream;
pub mod boot;
pub mod constants;
pub mod cram;
pub mod fpga;
pub mod led;
pub mod logging;
pub mod reset;
pub mod usb;
pub mod utils;

pub use crate::bitstream::Bitstream;
pub use crate::boot::{bring_up, Board, BootError, Running};
pub use crate::cram::{Cram, CramError, CramTransport};
pub use crate::fpga::{Fpga, FpgaClock};
pub use crate::led::StatusLed;
pub use crate::logging::SerialLogger;
pub use crate::reset::ResetSequencer;
pub use crate::usb::HostTransport;
