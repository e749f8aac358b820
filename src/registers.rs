//!# MCP2515 SPI instruction set and register map
//!
//! Byte addresses and bit positions are fixed by the chip; the values here
//! are the wire-format contract and must not be rearranged.
use modular_bitfield_msb::prelude::*;

/// SPI instruction opcodes
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Instruction {
    /// Re-initializes the chip, entering configuration mode
    Reset = 0xC0,
    /// Register read with address auto-increment
    Read = 0x03,
    /// Shortcut read starting at RXB0SIDH
    ReadRxBuffer = 0x90,
    /// Single register write
    Write = 0x02,
    /// Shortcut write starting at TXB0SIDH
    LoadTxBuffer = 0x40,
    /// Request-to-send for TXB0
    RtsTxb0 = 0x81,
    /// Request-to-send for TXB1
    RtsTxb1 = 0x82,
    /// Request-to-send for TXB2
    RtsTxb2 = 0x84,
    /// Single byte TX/RX status poll
    ReadStatus = 0xA0,
    /// Atomic masked register update
    BitModify = 0x05,
}

// Control block
pub const BFPCTRL: u8 = 0x0C;
pub const TXRTSCTRL: u8 = 0x0D;
pub const CANSTAT: u8 = 0x0E;
pub const CANCTRL: u8 = 0x0F;
pub const TEC: u8 = 0x1C;
pub const REC: u8 = 0x1D;
pub const CNF3: u8 = 0x28;
pub const CNF2: u8 = 0x29;
pub const CNF1: u8 = 0x2A;
pub const CANINTE: u8 = 0x2B;
pub const CANINTF: u8 = 0x2C;
pub const EFLG: u8 = 0x2D;

// Transmit buffer 0 block. TXB1/TXB2 repeat the layout at +0x10/+0x20.
pub const TXB0CTRL: u8 = 0x30;
pub const TXB0SIDH: u8 = 0x31;
pub const TXB0SIDL: u8 = 0x32;
pub const TXB0EID8: u8 = 0x33;
pub const TXB0EID0: u8 = 0x34;
pub const TXB0DLC: u8 = 0x35;
pub const TXB0D0: u8 = 0x36;

// Receive buffer 0 block
pub const RXB0CTRL: u8 = 0x60;
pub const RXB0SIDH: u8 = 0x61;
pub const RXB0SIDL: u8 = 0x62;
pub const RXB0EID8: u8 = 0x63;
pub const RXB0EID0: u8 = 0x64;
pub const RXB0DLC: u8 = 0x65;
pub const RXB0D0: u8 = 0x66;

// Receive buffer 1 block, same layout as RXB0
pub const RXB1CTRL: u8 = 0x70;
pub const RXB1SIDH: u8 = 0x71;

/// Standard-frame remote request bit of RXBnSIDL
pub const SIDL_SRR: u8 = 1 << 4;
/// Extended-identifier flag bit of RXBnSIDL and TXBnSIDL
pub const SIDL_IDE: u8 = 1 << 3;
/// Two most significant extended-identifier bits in RXBnSIDL/TXBnSIDL
pub const SIDL_EID_MASK: u8 = 0x03;

/// Remote request bit of TXBnDLC/RXBnDLC
pub const DLC_RTR: u8 = 1 << 6;
/// Data length nibble of TXBnDLC/RXBnDLC
pub const DLC_MASK: u8 = 0x0F;

/// Operation mode field of CANCTRL/CANSTAT (top 3 bits)
pub const MODE_MASK: u8 = 0xE0;

/// Interrupt flag register CANINTF; CANINTE shares the layout
#[bitfield]
#[derive(Default, Copy, Clone)]
#[repr(u8)]
pub struct InterruptFlags {
    /// Message error interrupt
    pub merrf: bool,
    /// Wakeup interrupt
    pub wakif: bool,
    /// Error interrupt (EFLG state change)
    pub errif: bool,
    /// TXB2 empty interrupt
    pub tx2if: bool,
    /// TXB1 empty interrupt
    pub tx1if: bool,
    /// TXB0 empty interrupt
    pub tx0if: bool,
    /// RXB1 full interrupt
    pub rx1if: bool,
    /// RXB0 full interrupt
    pub rx0if: bool,
}

/// RXBnDLC register; bit 6 carries the remote request flag for
/// extended frames
#[bitfield]
#[derive(Default, Copy, Clone)]
#[repr(u8)]
pub struct RxDataLength {
    #[skip]
    __: B1,
    /// Extended frame remote transmission request
    pub rtr: bool,
    #[skip]
    __: B2,
    /// Data length code, 0-8 on a conforming bus
    pub dlc: B4,
}
