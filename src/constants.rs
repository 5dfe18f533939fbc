pub const BAUD_RATE: u32 = 115_200;

/// External oscillator feeding the FPGA, MHz.
pub const FPGA_CLOCK_MHZ: u32 = 48;

/// Minimum hold on CRESET before the fabric is considered
/// electrically clean.
pub const SETTLE_DELAY_MS: u16 = 100;

/// Granularity of a CRAM streaming write; one transport send per chunk.
pub const CRAM_CHUNK: usize = 32;

#[allow(unused)]
pub const UART_TX_PIN: u8 = 0;
#[allow(unused)]
pub const UART_RX_PIN: u8 = 1;
/// Reference board wires the design's reset line to pin 2.
#[allow(unused)]
pub const RESET_PIN: u8 = 2;
