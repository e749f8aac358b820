//! # Mock dummy structures for doc examples
//!
//! [ExampleSPIBus] is a small in-memory register file that interprets the
//! SPI instruction set, so the documentation examples run against
//! plausible chip behavior. After reset it reports a pending frame in
//! receive buffer 0: standard identifier 0x320, two data bytes 0x11 0x22.
use crate::registers::{CANINTF, CANSTAT, CANCTRL, MODE_MASK, RXB0D0, RXB0DLC, RXB0SIDH, RXB0SIDL, TXB0SIDH};
use core::convert::Infallible;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::OutputPin;

/// Simulated MCP2515 register file behind the SPI instruction set
pub struct ExampleSPIBus {
    registers: [u8; 0x80],
}

impl Default for ExampleSPIBus {
    fn default() -> Self {
        let mut bus = Self { registers: [0; 0x80] };
        bus.power_up();
        bus
    }
}

impl ExampleSPIBus {
    /// Resets the register file and arms the sample frame in RXB0
    fn power_up(&mut self) {
        self.registers = [0; 0x80];

        // Reset leaves the chip in configuration mode
        self.registers[CANSTAT as usize] = 0x80;

        // Pending receive: standard id 0x320, data [0x11, 0x22]
        self.registers[RXB0SIDH as usize] = 0x64;
        self.registers[RXB0SIDL as usize] = 0x00;
        self.registers[RXB0DLC as usize] = 0x02;
        self.registers[RXB0D0 as usize] = 0x11;
        self.registers[RXB0D0 as usize + 1] = 0x22;
        self.registers[CANINTF as usize] = 0x01;
    }

    /// CANSTAT mirrors the mode field of CANCTRL
    fn mirror_mode(&mut self) {
        let mode = self.registers[CANCTRL as usize] & MODE_MASK;
        let canstat = self.registers[CANSTAT as usize];

        self.registers[CANSTAT as usize] = mode | (canstat & !MODE_MASK);
    }

    fn write(&mut self, address: usize, offset: usize, value: u8) {
        self.registers[(address + offset) & 0x7F] = value;

        if (address + offset) & 0x7F == CANCTRL as usize {
            self.mirror_mode();
        }
    }
}

impl Transfer<u8> for ExampleSPIBus {
    type Error = Infallible;

    fn transfer<'w>(&mut self, words: &'w mut [u8]) -> Result<&'w [u8], Self::Error> {
        match words[0] {
            // RESET
            0xC0 => self.power_up(),
            // READ with address auto-increment
            0x03 => {
                let address = words[1] as usize;

                for offset in 2..words.len() {
                    words[offset] = self.registers[(address + offset - 2) & 0x7F];
                }
            }
            // WRITE with address auto-increment
            0x02 => {
                let address = words[1] as usize;

                for offset in 2..words.len() {
                    self.write(address, offset - 2, words[offset]);
                }
            }
            // BIT MODIFY
            0x05 => {
                let address = words[1] as usize & 0x7F;
                let (mask, data) = (words[2], words[3]);

                self.registers[address] = (self.registers[address] & !mask) | (data & mask);

                if address == CANCTRL as usize {
                    self.mirror_mode();
                }
            }
            // READ STATUS: RXnIF and TXnIF flags in one byte
            0xA0 => {
                let flags = self.registers[CANINTF as usize];

                words[1] = (flags & 0b11) // RX0IF, RX1IF
                    | ((flags & 0x04) << 1) // TX0IF
                    | ((flags & 0x08) << 2) // TX1IF
                    | ((flags & 0x10) << 3); // TX2IF
            }
            // LOAD TX BUFFER, address pointer at the identifier register
            opcode if opcode & 0xF8 == 0x40 => {
                let buffer_index = ((opcode & 0x07) >> 1) as usize;
                let address = TXB0SIDH as usize + buffer_index * 0x10;

                for offset in 1..words.len() {
                    self.write(address, offset - 1, words[offset]);
                }
            }
            // RTS: mark the transmission as completed right away
            opcode if opcode & 0xF8 == 0x80 => {
                let flags = (opcode & 0x07) << 2;
                self.registers[CANINTF as usize] |= flags;
            }
            _ => {}
        }

        Ok(words)
    }
}

/// Chip select stand-in, accepts every transition
pub struct ExampleCSPin;

impl OutputPin for ExampleCSPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Delay stand-in, returns immediately
pub struct ExampleDelay;

impl DelayUs<u16> for ExampleDelay {
    fn delay_us(&mut self, _us: u16) {}
}
