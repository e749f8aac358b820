//!# CAN frame representation
//!
//! A [Frame] is the normalized view of one CAN 2.0 message, decoupled from
//! the register layout of the controller. Identifier packing between a
//! frame and the SIDH/SIDL/EID8/EID0 register quad lives here as well, so
//! the bit arithmetic is testable without hardware.
//!
//! ```
//! use can_controller::frame::Frame;
//! use embedded_can::StandardId;
//!
//! let frame = Frame::new(StandardId::new(0x320).unwrap(), &[0x11, 0x22]).unwrap();
//! assert_eq!(frame.raw_id(), 0x320);
//! assert_eq!(frame.data(), &[0x11, 0x22]);
//! assert!(!frame.is_extended());
//! ```
use crate::registers::{DLC_MASK, DLC_RTR, SIDL_EID_MASK, SIDL_IDE};
use embedded_can::{ExtendedId, Id, StandardId};
use log::warn;

/// Maximum payload of a CAN 2.0 frame in bytes
pub const MAX_DATA_LENGTH: usize = 8;

/// One CAN bus message
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Standard (11 bit) or extended (29 bit) identifier
    id: Id,
    /// Remote transmission request; payload bytes are not meaningful
    remote: bool,
    /// Payload length, never above [MAX_DATA_LENGTH]
    dlc: u8,
    data: [u8; MAX_DATA_LENGTH],
}

impl Frame {
    /// Creates a data frame. Returns `None` if the payload exceeds 8 bytes.
    pub fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() > MAX_DATA_LENGTH {
            return None;
        }

        let mut frame = Self {
            id: id.into(),
            remote: false,
            dlc: data.len() as u8,
            data: [0; MAX_DATA_LENGTH],
        };
        frame.data[..data.len()].copy_from_slice(data);
        Some(frame)
    }

    /// Creates a remote transmission request with the given data length code.
    pub fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        if dlc > MAX_DATA_LENGTH {
            return None;
        }

        Some(Self {
            id: id.into(),
            remote: true,
            dlc: dlc as u8,
            data: [0; MAX_DATA_LENGTH],
        })
    }

    /// Frame with standard identifier zero and no payload
    pub const fn empty() -> Self {
        Self {
            id: Id::Standard(StandardId::ZERO),
            remote: false,
            dlc: 0,
            data: [0; MAX_DATA_LENGTH],
        }
    }

    pub(crate) fn from_registers(id: Id, remote: bool, dlc: u8, data: [u8; MAX_DATA_LENGTH]) -> Self {
        Self { id, remote, dlc, data }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Identifier as a plain integer, 11 bits wide for standard frames and
    /// 29 bits for extended frames
    pub fn raw_id(&self) -> u32 {
        match self.id {
            Id::Standard(sid) => sid.as_raw() as u32,
            Id::Extended(eid) => eid.as_raw(),
        }
    }

    pub fn is_extended(&self) -> bool {
        matches!(self.id, Id::Extended(_))
    }

    pub fn is_remote(&self) -> bool {
        self.remote
    }

    /// Payload length in bytes, 0-8
    pub fn data_length(&self) -> u8 {
        self.dlc
    }

    /// Payload bytes; empty for remote frames
    pub fn data(&self) -> &[u8] {
        if self.remote {
            return &[];
        }

        &self.data[..self.dlc as usize]
    }
}

impl embedded_can::Frame for Frame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        Frame::new(id, data)
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        Frame::new_remote(id, dlc)
    }

    fn is_extended(&self) -> bool {
        matches!(self.id, Id::Extended(_))
    }

    fn is_remote_frame(&self) -> bool {
        self.remote
    }

    fn id(&self) -> Id {
        self.id
    }

    fn dlc(&self) -> usize {
        self.dlc as usize
    }

    fn data(&self) -> &[u8] {
        Frame::data(self)
    }
}

/// Unpacks a standard identifier from the SIDH/SIDL register pair.
pub(crate) fn decode_standard_id(sidh: u8, sidl: u8) -> StandardId {
    let raw = ((sidh as u16) << 3) | ((sidl >> 5) as u16);

    // 11 bit value by construction
    unsafe { StandardId::new_unchecked(raw) }
}

/// Unpacks an extended identifier from all four identifier registers. The
/// 11 standard-identifier bits form the most significant part, SIDL holds
/// bits 17:16 and EID8/EID0 the lower 16 bits.
pub(crate) fn decode_extended_id(sidh: u8, sidl: u8, eid8: u8, eid0: u8) -> ExtendedId {
    let sid = decode_standard_id(sidh, sidl).as_raw() as u32;
    let raw = (sid << 18) | (((sidl & SIDL_EID_MASK) as u32) << 16) | ((eid8 as u32) << 8) | (eid0 as u32);

    // 29 bit value by construction
    unsafe { ExtendedId::new_unchecked(raw) }
}

/// Packs an identifier into the SIDH/SIDL/EID8/EID0 register quad, the
/// exact inverse of the decode functions above. SIDL carries the IDE flag
/// and bits 17:16 of an extended identifier.
pub(crate) fn encode_id(id: Id) -> [u8; 4] {
    match id {
        Id::Standard(sid) => {
            let raw = sid.as_raw();
            [(raw >> 3) as u8, (raw << 5) as u8, 0, 0]
        }
        Id::Extended(eid) => {
            let raw = eid.as_raw();
            [
                (raw >> 21) as u8,
                ((raw >> 13) as u8 & 0xE0) | SIDL_IDE | ((raw >> 16) as u8 & SIDL_EID_MASK),
                (raw >> 8) as u8,
                raw as u8,
            ]
        }
    }
}

/// Masks the DLC nibble and clamps protocol violations. The register field
/// is 4 bits wide, values 9-15 must not be trusted with an 8 byte payload
/// buffer.
pub(crate) fn clamp_data_length(register: u8) -> u8 {
    let dlc = register & DLC_MASK;

    if dlc > MAX_DATA_LENGTH as u8 {
        warn!("received DLC {dlc} exceeds the 8 byte payload, clamping");
        return MAX_DATA_LENGTH as u8;
    }

    dlc
}

/// Encodes the TXBnDLC register byte.
pub(crate) fn encode_data_length(dlc: u8, remote: bool) -> u8 {
    if remote {
        dlc | DLC_RTR
    } else {
        dlc
    }
}
