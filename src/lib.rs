#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "strict", deny(warnings))]

//! # Driver library for the MCP2515 CAN controller
//!
//! Crate currently offers the following features:
//! * Register access over the chip's SPI command protocol
//! * Standard and extended ID formats for CAN 2.0 frames
//! * Lock-free receive queue between interrupt and polling context
//! * no_std support
//!
//! The platform supplies the SPI transfer primitive, the chip select pin
//! and the falling-edge interrupt delivery; everything register-level
//! lives here.
//!
//!## CAN Rx/Tx example
//!
//!```
//!use can_controller::can::MCP2515;
//!use can_controller::config::Configuration;
//!use can_controller::example::{ExampleCSPin, ExampleDelay, ExampleSPIBus};
//!use can_controller::frame::Frame;
//!use can_controller::interrupt::RxInterruptHandler;
//!use can_controller::queue::{FrameQueue, OverflowPolicy};
//!use embedded_can::StandardId;
//!
//!static QUEUE: FrameQueue = FrameQueue::new(OverflowPolicy::Reject);
//!
//!let mut controller = MCP2515::new(ExampleSPIBus::default(), ExampleCSPin);
//!let mut delay = ExampleDelay;
//!
//!// configure CAN controller
//!controller.configure(&Configuration::default(), &mut delay).unwrap();
//!
//!// bind the receive path; the platform invokes on_interrupt() from its
//!// falling-edge service routine
//!let mut handler = RxInterruptHandler::new(controller, &QUEUE);
//!handler.on_interrupt().unwrap();
//!
//!// poll the queue from the consumer context
//!let frame = QUEUE.pop().unwrap();
//!assert_eq!(frame.raw_id(), 0x320);
//!assert_eq!(frame.data(), &[0x11, 0x22]);
//!
//!// transmit a reply
//!let reply = Frame::new(StandardId::new(0x700).unwrap(), &[0x01]).unwrap();
//!handler.controller_mut().transmit(&reply).unwrap();
//!```

pub mod can;
pub mod config;
pub mod status;

pub mod frame;
pub mod interrupt;
pub mod queue;
pub mod registers;

pub mod example;
#[cfg(test)]
pub(crate) mod mocks;
#[cfg(test)]
mod tests;
