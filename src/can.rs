//!# CAN Controller device
//!
//!```
//!# use can_controller::can::MCP2515;
//!# use can_controller::config::Configuration;
//!# use can_controller::example::*;
//!#
//! let spi_bus = ExampleSPIBus::default();
//! let cs_pin = ExampleCSPin;
//! let mut delay = ExampleDelay;
//!
//! // Initialize controller object
//! let mut can_controller = MCP2515::new(spi_bus, cs_pin);
//!
//! // Use default configuration settings
//! let can_config = Configuration::default();
//!
//! // Configure CAN controller
//! can_controller.configure(&can_config, &mut delay).unwrap();
//! ```
use crate::config::Configuration;
use crate::frame::{self, Frame, MAX_DATA_LENGTH};
use crate::registers::{
    Instruction, InterruptFlags, RxDataLength, BFPCTRL, CANCTRL, CANINTF, CANSTAT, CNF1, CNF2, CNF3, MODE_MASK,
    RXB0CTRL, RXB0D0, RXB0DLC, RXB0EID8, RXB0SIDH, RXB1CTRL, SIDL_IDE, SIDL_SRR,
};
use crate::status::{BufferStatus, OperationMode, OperationStatus};
use embedded_can::Id;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::OutputPin;
use log::debug;

/// Settle time after the reset command; the chip re-enters configuration
/// mode within this window
const RESET_SETTLE_DELAY_US: u16 = 10_000;

/// Errors of the SPI register link
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BusError<B, CS> {
    /// SPI transfer failed
    TransferError(B),
    /// Chip select pin could not be switched
    CSError(CS),
}

/// Transmit buffer selection
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TxBuffer {
    B0 = 0,
    B1 = 1,
    B2 = 2,
}

impl TxBuffer {
    fn rts_instruction(self) -> u8 {
        match self {
            Self::B0 => Instruction::RtsTxb0 as u8,
            Self::B1 => Instruction::RtsTxb1 as u8,
            Self::B2 => Instruction::RtsTxb2 as u8,
        }
    }

    /// LOAD TX BUFFER opcode pointing at the identifier register of the
    /// buffer (address pointer bits `abc` = buffer index doubled)
    fn load_instruction(self) -> u8 {
        Instruction::LoadTxBuffer as u8 | ((self as u8) << 1)
    }
}

/// MCP2515 CAN controller driver
pub struct MCP2515<B, CS> {
    /// SPI bus
    bus: B,

    /// Chip select pin, active low
    pin_cs: CS,
}

impl<B, CS> MCP2515<B, CS>
where
    B: Transfer<u8>,
    CS: OutputPin,
{
    pub fn new(bus: B, pin_cs: CS) -> Self {
        Self { bus, pin_cs }
    }

    /// Configures the controller with the given settings.
    ///
    /// Sequences reset, bit timing, receive buffer modes and interrupt pin
    /// functions, then requests the configured operating mode. Any bus
    /// error aborts initialization and is returned to the caller; there are
    /// no retries.
    pub fn configure<D: DelayUs<u16>>(
        &mut self,
        config: &Configuration,
        delay: &mut D,
    ) -> Result<(), BusError<B::Error, CS::Error>> {
        self.reset(delay)?;

        // Full write: configuration mode request plus clock output bits.
        // Later mode changes only touch the mode field.
        self.write_register(
            CANCTRL,
            OperationMode::Configuration.as_register() | config.clock_output.as_register(),
        )?;

        self.write_register(CNF1, config.bit_timing.cnf1)?;
        self.write_register(CNF2, config.bit_timing.cnf2)?;
        self.write_register(CNF3, config.bit_timing.cnf3)?;

        self.write_register(RXB0CTRL, config.receive_buffers.as_rx0_register())?;
        self.write_register(RXB1CTRL, config.receive_buffers.as_rx1_register())?;
        self.write_register(BFPCTRL, config.pins.as_register())?;

        debug!("controller configured, requesting {:?} mode", config.mode);

        self.set_mode(config.mode.to_operation_mode())
    }

    /// Sends the reset command and waits for the fixed settle delay. The
    /// chip wakes up in configuration mode with default registers.
    pub fn reset<D: DelayUs<u16>>(&mut self, delay: &mut D) -> Result<(), BusError<B::Error, CS::Error>> {
        let mut buffer = [Instruction::Reset as u8];
        self.transfer(&mut buffer)?;

        delay.delay_us(RESET_SETTLE_DELAY_US);

        Ok(())
    }

    /// Switches the operating mode. Masked update of the mode field only;
    /// the lower CANCTRL bits control unrelated clock output behavior and
    /// must stay untouched.
    pub fn set_mode(&mut self, mode: OperationMode) -> Result<(), BusError<B::Error, CS::Error>> {
        self.bit_modify(CANCTRL, MODE_MASK, mode.as_register())
    }

    /// Reads and returns the operation status
    pub fn read_operation_status(&mut self) -> Result<OperationStatus, BusError<B::Error, CS::Error>> {
        let data = self.read_register(CANSTAT)?;

        Ok(OperationStatus::from_register(data))
    }

    /// Polls the transmit/receive buffer flags with the single-byte READ
    /// STATUS instruction
    pub fn read_buffer_status(&mut self) -> Result<BufferStatus, BusError<B::Error, CS::Error>> {
        let mut buffer = [Instruction::ReadStatus as u8, 0];
        let response = self.transfer(&mut buffer)?;
        let status = response[1];

        Ok(BufferStatus::from_register(status))
    }

    /// Loads a frame into TXB0 and requests transmission.
    ///
    /// The identifier registers, DLC and payload are written with a single
    /// LOAD TX BUFFER transaction, followed by the dedicated
    /// request-to-send command for the buffer.
    pub fn transmit(&mut self, message: &Frame) -> Result<(), BusError<B::Error, CS::Error>> {
        let mut buffer = [0u8; 6 + MAX_DATA_LENGTH];
        let data = message.data();

        buffer[0] = TxBuffer::B0.load_instruction();
        buffer[1..5].copy_from_slice(&frame::encode_id(message.id()));
        buffer[5] = frame::encode_data_length(message.data_length(), message.is_remote());
        buffer[6..6 + data.len()].copy_from_slice(data);

        self.transfer(&mut buffer[..6 + data.len()])?;

        self.request_to_send(TxBuffer::B0)
    }

    /// Triggers bus transmission of a previously loaded buffer
    pub fn request_to_send(&mut self, tx_buffer: TxBuffer) -> Result<(), BusError<B::Error, CS::Error>> {
        let mut buffer = [tx_buffer.rts_instruction()];
        self.transfer(&mut buffer)?;

        Ok(())
    }

    /// Decodes the frame currently held in receive buffer 0.
    ///
    /// Identifier, flags and payload are spread across several registers;
    /// extended frames carry the remote flag in the DLC register, which
    /// overrides the substitute remote bit of SIDL.
    pub fn read_rx_buffer(&mut self) -> Result<Frame, BusError<B::Error, CS::Error>> {
        let mut id_buffer = [0u8; 4];
        let id_bytes = self.read_registers(RXB0SIDH, &mut id_buffer)?;
        let (sidh, sidl) = (id_bytes[0], id_bytes[1]);

        let mut remote = sidl & SIDL_SRR != 0;
        let extended = sidl & SIDL_IDE != 0;

        let id = if extended {
            let mut eid_buffer = [0u8; 4];
            let eid_bytes = self.read_registers(RXB0EID8, &mut eid_buffer)?;

            Id::Extended(frame::decode_extended_id(sidh, sidl, eid_bytes[0], eid_bytes[1]))
        } else {
            Id::Standard(frame::decode_standard_id(sidh, sidl))
        };

        let dlc_byte = self.read_register(RXB0DLC)?;
        if extended {
            remote = RxDataLength::from(dlc_byte).rtr();
        }
        let data_length = frame::clamp_data_length(dlc_byte);

        let mut data = [0u8; MAX_DATA_LENGTH];
        if !remote && data_length > 0 {
            let mut payload_buffer = [0u8; MAX_DATA_LENGTH + 2];
            let payload = self.read_registers(RXB0D0, &mut payload_buffer[..data_length as usize + 2])?;
            data[..data_length as usize].copy_from_slice(payload);
        }

        Ok(Frame::from_registers(id, remote, data_length, data))
    }

    /// Clears the receive-buffer-0 interrupt flag so the chip can signal
    /// the next frame
    pub fn clear_rx_interrupt(&mut self) -> Result<(), BusError<B::Error, CS::Error>> {
        let mask = InterruptFlags::new().with_rx0if(true);

        self.bit_modify(CANINTF, u8::from(mask), 0)
    }

    /// Reads `buffer.len() - 2` consecutive registers starting at the given
    /// address in one transaction.
    ///
    /// The first two buffer positions carry the instruction and address and
    /// never contain response data; the returned slice covers only the
    /// register values.
    pub fn read_registers<'b>(
        &mut self,
        address: u8,
        buffer: &'b mut [u8],
    ) -> Result<&'b [u8], BusError<B::Error, CS::Error>> {
        buffer[0] = Instruction::Read as u8;
        buffer[1] = address;

        let response = self.transfer(buffer)?;

        Ok(&response[2..])
    }

    /// Reads a single register byte
    pub fn read_register(&mut self, address: u8) -> Result<u8, BusError<B::Error, CS::Error>> {
        let mut buffer = [Instruction::Read as u8, address, 0];
        let response = self.transfer(&mut buffer)?;
        let value = response[2];

        Ok(value)
    }

    /// Writes a single register byte
    pub fn write_register(&mut self, address: u8, value: u8) -> Result<(), BusError<B::Error, CS::Error>> {
        let mut buffer = [Instruction::Write as u8, address, value];
        self.transfer(&mut buffer)?;

        Ok(())
    }

    /// Atomic read-modify-write of the bits selected by `mask`, performed
    /// by the chip's bit-modify command in a single transaction. A manual
    /// read-then-write would race with the chip updating other bits (e.g.
    /// interrupt flags) between the two operations.
    pub fn bit_modify(&mut self, address: u8, mask: u8, data: u8) -> Result<(), BusError<B::Error, CS::Error>> {
        let mut buffer = [Instruction::BitModify as u8, address, mask, data];
        self.transfer(&mut buffer)?;

        Ok(())
    }

    /// Executes one chip-select framed full-duplex transfer and returns the
    /// received bytes
    fn transfer<'b>(&mut self, buffer: &'b mut [u8]) -> Result<&'b [u8], BusError<B::Error, CS::Error>> {
        self.pin_cs.set_low().map_err(BusError::CSError)?;

        let result = self.bus.transfer(buffer).map_err(BusError::TransferError);
        let cs_high = self.pin_cs.set_high().map_err(BusError::CSError);

        let response = result?;
        cs_high?;

        Ok(response)
    }
}
