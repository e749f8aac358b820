use crate::status::{BufferStatus, InterruptCode, OperationMode, OperationStatus};

#[test]
fn test_operation_mode_from_register() {
    assert_eq!(OperationMode::Normal, OperationMode::from_register(0b0000_0000));
    assert_eq!(OperationMode::Sleep, OperationMode::from_register(0b0010_0000));
    assert_eq!(OperationMode::Loopback, OperationMode::from_register(0b0100_0000));
    assert_eq!(OperationMode::ListenOnly, OperationMode::from_register(0b0110_0000));
    assert_eq!(OperationMode::Configuration, OperationMode::from_register(0b1000_0000));
    // Reserved encodings fall back to configuration mode
    assert_eq!(OperationMode::Configuration, OperationMode::from_register(0b1110_0000));
}

#[test]
fn test_operation_mode_as_register() {
    assert_eq!(0b0000_0000, OperationMode::Normal.as_register());
    assert_eq!(0b0010_0000, OperationMode::Sleep.as_register());
    assert_eq!(0b0100_0000, OperationMode::Loopback.as_register());
    assert_eq!(0b0110_0000, OperationMode::ListenOnly.as_register());
    assert_eq!(0b1000_0000, OperationMode::Configuration.as_register());
}

#[test]
fn test_operation_status_from_register() {
    let status = OperationStatus::from_register(0b1000_1100);

    assert_eq!(OperationMode::Configuration, status.mode);
    assert_eq!(InterruptCode::Rxb0Full, status.interrupt_code);

    let status = OperationStatus::from_register(0b0000_0000);

    assert_eq!(OperationMode::Normal, status.mode);
    assert_eq!(InterruptCode::None, status.interrupt_code);
}

#[test]
fn test_interrupt_code_from_register() {
    assert_eq!(InterruptCode::Error, InterruptCode::from_register(0b0000_0010));
    assert_eq!(InterruptCode::Wakeup, InterruptCode::from_register(0b0000_0100));
    assert_eq!(InterruptCode::Txb0Empty, InterruptCode::from_register(0b0000_0110));
    assert_eq!(InterruptCode::Txb1Empty, InterruptCode::from_register(0b0000_1000));
    assert_eq!(InterruptCode::Txb2Empty, InterruptCode::from_register(0b0000_1010));
    assert_eq!(InterruptCode::Rxb1Full, InterruptCode::from_register(0b0000_1110));
}

#[test]
fn test_buffer_status_from_register() {
    let status = BufferStatus::from_register(0b0000_0101);

    assert!(status.rx0_full);
    assert!(!status.rx1_full);
    assert!(status.tx0_pending);
    assert!(!status.tx0_sent);
    assert!(!status.tx1_pending);
    assert!(!status.tx2_sent);

    let status = BufferStatus::from_register(0b1010_1010);

    assert!(!status.rx0_full);
    assert!(status.rx1_full);
    assert!(!status.tx0_pending);
    assert!(status.tx0_sent);
    assert!(!status.tx1_pending);
    assert!(status.tx1_sent);
    assert!(!status.tx2_pending);
    assert!(status.tx2_sent);
}
