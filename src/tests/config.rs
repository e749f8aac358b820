use crate::config::{
    BitTiming, ClockOutput, Configuration, PinConfiguration, ReceiveBufferConfiguration,
    ReceiveMode, RequestMode,
};
use crate::status::OperationMode;

#[test]
fn test_bit_timing_default() {
    let timing = BitTiming::default();

    assert_eq!(0x00, timing.cnf1);
    assert_eq!(0xD1, timing.cnf2);
    assert_eq!(0x03, timing.cnf3);
    assert_eq!(BitTiming::MBPS_1_CLOCK_20MHZ, timing);
}

#[test]
fn test_receive_buffers_default() {
    let buffers = ReceiveBufferConfiguration::default();

    assert_eq!(ReceiveMode::ReceiveAny, buffers.rx0_mode);
    assert_eq!(ReceiveMode::ExtendedOnly, buffers.rx1_mode);
    assert!(!buffers.rollover);
    assert_eq!(0b0110_0000, buffers.as_rx0_register());
    assert_eq!(0b0100_0000, buffers.as_rx1_register());
}

#[test]
fn test_receive_buffers_as_register() {
    let buffers = ReceiveBufferConfiguration {
        rx0_mode: ReceiveMode::Filtered,
        rx1_mode: ReceiveMode::StandardOnly,
        rollover: true,
    };

    assert_eq!(0b0000_0100, buffers.as_rx0_register());
    assert_eq!(0b0010_0000, buffers.as_rx1_register());
}

#[test]
fn test_pins_as_register() {
    assert_eq!(0b0000_0101, PinConfiguration::default().as_register());

    let both = PinConfiguration {
        rx0_interrupt: true,
        rx1_interrupt: true,
    };
    assert_eq!(0b0000_1111, both.as_register());

    let none = PinConfiguration {
        rx0_interrupt: false,
        rx1_interrupt: false,
    };
    assert_eq!(0b0000_0000, none.as_register());
}

#[test]
fn test_clock_output_registers() {
    assert_eq!(ClockOutput::DivideBy8, ClockOutput::default());
    assert_eq!(0b111, ClockOutput::DivideBy8.as_register());
    assert_eq!(0b000, ClockOutput::Disabled.as_register());

    assert_eq!(ClockOutput::Disabled, ClockOutput::from_register(0b000));
    assert_eq!(ClockOutput::Disabled, ClockOutput::from_register(0b011));
    assert_eq!(ClockOutput::DivideBy1, ClockOutput::from_register(0b100));
    assert_eq!(ClockOutput::DivideBy2, ClockOutput::from_register(0b101));
    assert_eq!(ClockOutput::DivideBy4, ClockOutput::from_register(0b110));
    assert_eq!(ClockOutput::DivideBy8, ClockOutput::from_register(0b1111_1111));
}

#[test]
fn test_request_mode_mapping() {
    assert_eq!(RequestMode::Normal, RequestMode::default());
    assert_eq!(OperationMode::Normal, RequestMode::Normal.to_operation_mode());
    assert_eq!(OperationMode::Sleep, RequestMode::Sleep.to_operation_mode());
    assert_eq!(OperationMode::Loopback, RequestMode::Loopback.to_operation_mode());
    assert_eq!(OperationMode::ListenOnly, RequestMode::ListenOnly.to_operation_mode());
}

#[test]
fn test_configuration_default() {
    let config = Configuration::default();

    assert_eq!(BitTiming::MBPS_1_CLOCK_20MHZ, config.bit_timing);
    assert_eq!(ClockOutput::DivideBy8, config.clock_output);
    assert_eq!(RequestMode::Normal, config.mode);
}
