//! Host-facing transport seam
//!
//! The USB device stack is vendor territory; the sequencer only needs
//! two hooks out of it.

pub trait HostTransport: Sized {
    /// One-time personality setup so the host can enumerate the board.
    fn init(&mut self);

    /// One pass of the stack's task dispatcher. Must return quickly;
    /// the service loop calls this forever.
    fn poll(&mut self);
}
