//!# Controller configuration
//!
//! The default configuration mirrors the reference hardware: 1 Mbps bit
//! rate on a 20 MHz oscillator, receive buffer 0 accepting every frame
//! without rollover, receive buffer 1 restricted to extended frames and
//! the RX0BF pin mapped as receive-interrupt output.
use crate::status::OperationMode;

/// Entire configuration currently supported
#[derive(Default, Clone, Debug)]
pub struct Configuration {
    /// Bit timing segments (CNF1-CNF3)
    pub bit_timing: BitTiming,

    /// Receive buffer operating modes
    pub receive_buffers: ReceiveBufferConfiguration,

    /// RXnBF pin functions
    pub pins: PinConfiguration,

    /// CLKOUT pin divisor
    pub clock_output: ClockOutput,

    /// Operating mode entered once configuration is written
    pub mode: RequestMode,
}

/// Bit timing register values. The segments are fixed numeric constants
/// derived from the target bit rate and the oscillator frequency, taken
/// from the device data sheet rather than computed at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitTiming {
    /// Synchronization jump width and baud rate prescaler
    pub cnf1: u8,
    /// BTLMODE, sample point configuration, PS1 and propagation segment
    pub cnf2: u8,
    /// PS2 length
    pub cnf3: u8,
}

impl BitTiming {
    /// 1 Mbps at 20 MHz oscillator: SJW=1, BRP=0, BTLMODE=1, SAM=1,
    /// PHSEG1=3, PRSEG=2, PHSEG2=3
    pub const MBPS_1_CLOCK_20MHZ: Self = Self {
        cnf1: 0x00,
        cnf2: 0xD1,
        cnf3: 0x03,
    };
}

impl Default for BitTiming {
    fn default() -> Self {
        Self::MBPS_1_CLOCK_20MHZ
    }
}

/// Receive buffer operating mode bits (RXM field of RXBnCTRL)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReceiveMode {
    /// Masks and filters off, receive any message
    ReceiveAny = 0b11,
    /// Only valid extended-identifier messages matching the filters
    ExtendedOnly = 0b10,
    /// Only valid standard-identifier messages matching the filters
    StandardOnly = 0b01,
    /// Any valid message matching the filters
    Filtered = 0b00,
}

/// Operating modes of both receive buffers
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReceiveBufferConfiguration {
    /// Receive buffer 0 mode
    pub rx0_mode: ReceiveMode,

    /// Receive buffer 1 mode
    pub rx1_mode: ReceiveMode,

    /// Roll a frame over into RXB1 when RXB0 is full
    pub rollover: bool,
}

impl ReceiveBufferConfiguration {
    /// Encodes the RXB0CTRL register byte
    pub(crate) fn as_rx0_register(&self) -> u8 {
        ((self.rx0_mode as u8) << 5) | ((self.rollover as u8) << 2)
    }

    /// Encodes the RXB1CTRL register byte
    pub(crate) fn as_rx1_register(&self) -> u8 {
        (self.rx1_mode as u8) << 5
    }
}

impl Default for ReceiveBufferConfiguration {
    fn default() -> Self {
        Self {
            rx0_mode: ReceiveMode::ReceiveAny,
            rx1_mode: ReceiveMode::ExtendedOnly,
            rollover: false,
        }
    }
}

/// RXnBF pin functions (BFPCTRL register). An enabled pin is driven low
/// when a valid message is loaded into the matching receive buffer, which
/// is the falling edge the interrupt handler is registered on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinConfiguration {
    /// RX0BF acts as receive-buffer-0 interrupt output
    pub rx0_interrupt: bool,

    /// RX1BF acts as receive-buffer-1 interrupt output
    pub rx1_interrupt: bool,
}

impl PinConfiguration {
    /// Encodes the BFPCTRL register byte (BnBFE function enable plus BnBFM
    /// interrupt mode; the digital-output state bits stay zero)
    pub(crate) fn as_register(&self) -> u8 {
        let mut register = 0x0;

        register |= (self.rx1_interrupt as u8) << 3;
        register |= (self.rx0_interrupt as u8) << 2;
        register |= (self.rx1_interrupt as u8) << 1;
        register |= self.rx0_interrupt as u8;

        register
    }
}

impl Default for PinConfiguration {
    fn default() -> Self {
        Self {
            rx0_interrupt: true,
            rx1_interrupt: false,
        }
    }
}

/// CLKOUT pin divisor (CLKEN/CLKPRE bits of CANCTRL)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClockOutput {
    Disabled = 0b000,
    DivideBy1 = 0b100,
    DivideBy2 = 0b101,
    DivideBy4 = 0b110,
    DivideBy8 = 0b111,
}

impl ClockOutput {
    /// Maps register values to configuration
    pub fn from_register(register: u8) -> Self {
        match register & 0b111 {
            0b100 => Self::DivideBy1,
            0b101 => Self::DivideBy2,
            0b110 => Self::DivideBy4,
            0b111 => Self::DivideBy8,
            _ => Self::Disabled,
        }
    }

    /// Encodes the lower 3 bits of CANCTRL
    pub(crate) fn as_register(&self) -> u8 {
        *self as u8
    }
}

impl Default for ClockOutput {
    fn default() -> Self {
        Self::DivideBy8
    }
}

/// Requestable operating modes; configuration mode is entered internally
/// during [crate::can::MCP2515::configure]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RequestMode {
    Normal,
    Sleep,
    Loopback,
    ListenOnly,
}

impl RequestMode {
    pub(crate) fn to_operation_mode(self) -> OperationMode {
        match self {
            Self::Normal => OperationMode::Normal,
            Self::Sleep => OperationMode::Sleep,
            Self::Loopback => OperationMode::Loopback,
            Self::ListenOnly => OperationMode::ListenOnly,
        }
    }
}

impl Default for RequestMode {
    fn default() -> Self {
        Self::Normal
    }
}
