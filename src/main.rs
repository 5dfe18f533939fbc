#![deny(unsafe_code)]
#![no_std]
#![no_main]

use core::convert::Infallible;
use core::fmt::Write;

use cortex_m_rt::entry;
use ehal::digital::v2::OutputPin;
use hal::delay::Delay;
use hal::gpio::PullNone;
use hal::prelude::*;
use hal::time::Bps;

use ice_boot::constants::{BAUD_RATE, FPGA_CLOCK_MHZ};
use ice_boot::{boot, utils};
use ice_boot::{error, info};
use ice_boot::{Bitstream, Board, Cram, CramTransport, Fpga, FpgaClock,
               HostTransport, ResetSequencer, SerialLogger, StatusLed};

static BITSTREAM: &[u8] = include_bytes!("../bitstream.bin");

/// The 48 MHz can feeding the FPGA has a plain enable pin; frequency is
/// fixed by the part, not by us.
struct OscEnable<Op>
    where Op: OutputPin
{
    pin: Op,
}

impl<Op> FpgaClock for OscEnable<Op>
    where Op: OutputPin
{
    fn configure(&mut self, _freq_mhz: u32) {
        self.pin.set_low().ok();
    }

    fn enable(&mut self) {
        self.pin.set_high().ok();
    }
}

/// Bit-banged slave-SPI feed into the FPGA's configuration memory,
/// mode 3, MSB first.
struct SpiLink<Sck, Mo, Ss>
    where Sck: OutputPin,
          Mo: OutputPin,
          Ss: OutputPin
{
    sck: Sck,
    mosi: Mo,
    ss: Ss,
}

impl<Sck, Mo, Ss> CramTransport for SpiLink<Sck, Mo, Ss>
    where Sck: OutputPin,
          Mo: OutputPin,
          Ss: OutputPin
{
    type Error = Infallible;

    fn begin(&mut self) {
        self.sck.set_high().ok();
        self.ss.set_low().ok();
    }

    fn send(&mut self, chunk: &[u8]) -> Result<(), Infallible> {
        for b in chunk.iter() {
            for i in (0..8).rev() {
                if (b >> i) & 1 == 1 {
                    self.mosi.set_high().ok();
                } else {
                    self.mosi.set_low().ok();
                }
                self.sck.set_low().ok();
                self.sck.set_high().ok();
            }
        }
        Ok(())
    }

    fn finish(&mut self) {
        self.ss.set_high().ok();
        // the device wants trailing clocks after the last data byte
        // before it wakes into user mode
        for _ in 0..56 {
            self.sck.set_low().ok();
            self.sck.set_high().ok();
        }
    }
}

struct UsbLink;

impl HostTransport for UsbLink {
    fn init(&mut self) {
        // TODO: bring up CDC-ACM on PA11/PA12 once the descriptor set
        // is pinned down; enumeration is not needed for the FPGA load
    }

    fn poll(&mut self) {
        cortex_m::asm::nop();
    }
}

#[entry]
fn main() -> ! {
    let device = hal::pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();
    let mut rcc = device.RCC.constrain();
    let gpioa = device.GPIOA.split(&mut rcc.ahb);
    let gpiob = device.GPIOB.split(&mut rcc.ahb);
    let gpioc = device.GPIOC.split(&mut rcc.ahb);
    let mut flash = device.FLASH.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let delay = Delay::new(cp.SYST, clocks);

    let serial =
        device.USART1
              .serial((gpioa.pa9, gpioa.pa10), Bps(BAUD_RATE), clocks);
    let (tx, _rx) = serial.split();
    let led = StatusLed::new(gpioc.pc14.output().pull_type(PullNone));
    let mut console = SerialLogger::new(tx, led);
    info!(console, "ice_boot: console at {}\r\n", BAUD_RATE);

    let osc = OscEnable { pin: gpiob.pb4.output().pull_type(PullNone), };
    let link = SpiLink { sck: gpiob.pb3.output().pull_type(PullNone),
                         mosi: gpiob.pb5.output().pull_type(PullNone),
                         ss: gpiob.pb0.output().pull_type(PullNone), };
    let board = Board { usb: UsbLink,
                        fpga: Fpga::init(osc, FPGA_CLOCK_MHZ),
                        cram: Cram::new(link),
                        reset: ResetSequencer::new(delay),
                        reset_pin:
                            gpiob.pb2.output().pull_type(PullNone), };

    match boot::bring_up(&mut console, board, &Bitstream::new(BITSTREAM)) {
        Ok(running) => running.serve(),
        Err(e) => {
            error!(console, "bringup failed: {:?}\r\n", e);
            halt(console)
        },
    }
}

fn halt<Wr, Op>(mut console: SerialLogger<Wr, Op>) -> !
    where Wr: ehal::serial::Write<u8>,
          Op: OutputPin
{
    loop {
        console.led().blink();
        utils::tick_delay(4_000_000);
    }
}

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
