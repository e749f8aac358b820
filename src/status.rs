/// Operation status read from the CANSTAT register
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OperationStatus {
    /// Current operation mode
    pub mode: OperationMode,

    /// Highest priority interrupt currently pending
    pub interrupt_code: InterruptCode,
}

impl OperationStatus {
    pub(crate) fn from_register(register: u8) -> Self {
        Self {
            mode: OperationMode::from_register(register),
            interrupt_code: InterruptCode::from_register(register),
        }
    }
}

/// Operating mode encoding in the top 3 bits of CANCTRL/CANSTAT
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperationMode {
    /// Frames are transmitted and received on the bus
    Normal = 0b000,
    /// Internal oscillator stopped, wake on bus activity
    Sleep = 0b001,
    /// Frames are looped back internally, nothing touches the bus
    Loopback = 0b010,
    /// Receive only, no acknowledgement or error frames
    ListenOnly = 0b011,
    /// Register setup state entered after reset
    Configuration = 0b100,
}

impl OperationMode {
    pub(crate) fn from_register(register: u8) -> Self {
        match register >> 5 {
            0b000 => Self::Normal,
            0b001 => Self::Sleep,
            0b010 => Self::Loopback,
            0b011 => Self::ListenOnly,
            _ => Self::Configuration,
        }
    }

    /// Encodes the top 3 bits of CANCTRL
    pub(crate) fn as_register(self) -> u8 {
        (self as u8) << 5
    }
}

/// ICOD field of CANSTAT
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InterruptCode {
    None = 0b000,
    Error = 0b001,
    Wakeup = 0b010,
    Txb0Empty = 0b011,
    Txb1Empty = 0b100,
    Txb2Empty = 0b101,
    Rxb0Full = 0b110,
    Rxb1Full = 0b111,
}

impl InterruptCode {
    pub(crate) fn from_register(register: u8) -> Self {
        match (register >> 1) & 0b111 {
            0b000 => Self::None,
            0b001 => Self::Error,
            0b010 => Self::Wakeup,
            0b011 => Self::Txb0Empty,
            0b100 => Self::Txb1Empty,
            0b101 => Self::Txb2Empty,
            0b110 => Self::Rxb0Full,
            _ => Self::Rxb1Full,
        }
    }
}

/// Buffer status polled with the READ STATUS instruction, one transaction
/// covering all interrupt-relevant transmit and receive flags
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BufferStatus {
    /// Frame waiting in receive buffer 0
    pub rx0_full: bool,

    /// Frame waiting in receive buffer 1
    pub rx1_full: bool,

    /// Transmission pending in TXB0
    pub tx0_pending: bool,

    /// TXB0 empty interrupt flag
    pub tx0_sent: bool,

    /// Transmission pending in TXB1
    pub tx1_pending: bool,

    /// TXB1 empty interrupt flag
    pub tx1_sent: bool,

    /// Transmission pending in TXB2
    pub tx2_pending: bool,

    /// TXB2 empty interrupt flag
    pub tx2_sent: bool,
}

impl BufferStatus {
    pub(crate) fn from_register(register: u8) -> Self {
        Self {
            rx0_full: register & (1 << 0) != 0,
            rx1_full: register & (1 << 1) != 0,
            tx0_pending: register & (1 << 2) != 0,
            tx0_sent: register & (1 << 3) != 0,
            tx1_pending: register & (1 << 4) != 0,
            tx1_sent: register & (1 << 5) != 0,
            tx2_pending: register & (1 << 6) != 0,
            tx2_sent: register & (1 << 7) != 0,
        }
    }
}
