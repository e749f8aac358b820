//!# Receive interrupt handler
//!
//! [RxInterruptHandler] is the capability bundle invoked on the falling
//! edge of the chip's RX0BF line: it owns the controller and borrows the
//! frame queue, both bound at initialization time, so the interrupt entry
//! point carries no hidden global state. Registration with the platform's
//! edge-interrupt primitive happens outside this crate; the platform calls
//! [RxInterruptHandler::on_interrupt] from its service routine.
//!
//! Only receive buffer 0 is drained. Frames landing in RXB1 stay there,
//! matching the legacy firmware; [crate::status::BufferStatus] exposes the
//! RX1 flag for applications that want to detect the condition.
use crate::can::{BusError, MCP2515};
use crate::queue::FrameQueue;
use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::OutputPin;
use log::warn;

/// Receive path bound to a controller and a frame queue
pub struct RxInterruptHandler<'q, B, CS, const N: usize> {
    controller: MCP2515<B, CS>,
    queue: &'q FrameQueue<N>,
}

impl<'q, B, CS, const N: usize> RxInterruptHandler<'q, B, CS, N>
where
    B: Transfer<u8>,
    CS: OutputPin,
{
    pub fn new(controller: MCP2515<B, CS>, queue: &'q FrameQueue<N>) -> Self {
        Self { controller, queue }
    }

    /// Services one receive interrupt: decodes the frame in receive buffer
    /// 0, queues it and clears the interrupt flag so the chip can signal
    /// the next frame.
    ///
    /// Runs synchronously to completion; every register access blocks on
    /// the transport and nothing allocates. A full queue drops the frame
    /// (visible through [FrameQueue::overruns]), the interrupt flag is
    /// cleared regardless.
    pub fn on_interrupt(&mut self) -> Result<(), BusError<B::Error, CS::Error>> {
        let frame = self.controller.read_rx_buffer()?;

        if self.queue.push(frame).is_err() {
            warn!("receive queue full, dropping frame {:#x}", frame.raw_id());
        }

        self.controller.clear_rx_interrupt()
    }

    /// Access to the controller for the non-interrupt context, e.g. the
    /// transmit path
    pub fn controller_mut(&mut self) -> &mut MCP2515<B, CS> {
        &mut self.controller
    }

    /// Unbinds the queue and hands the controller back
    pub fn release(self) -> MCP2515<B, CS> {
        self.controller
    }
}
