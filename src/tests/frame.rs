use crate::frame::{
    clamp_data_length, decode_extended_id, decode_standard_id, encode_data_length, encode_id, Frame,
};
use crate::registers::{DLC_RTR, SIDL_IDE};
use embedded_can::{ExtendedId, Id, StandardId};

#[test]
fn test_standard_id_roundtrip() {
    for raw in 0..=StandardId::MAX.as_raw() {
        let id = StandardId::new(raw).unwrap();
        let registers = encode_id(Id::Standard(id));

        assert_eq!(0, registers[1] & SIDL_IDE);
        assert_eq!(0, registers[2]);
        assert_eq!(0, registers[3]);
        assert_eq!(raw, decode_standard_id(registers[0], registers[1]).as_raw());
    }
}

#[test]
fn test_extended_id_roundtrip() {
    let boundaries = [0x0, 0x1, 0x7FF, 0x800, 0x1FFFF, 0x20000, 0x14C9_2A2B, 0x1FFF_FFFF];

    for raw in boundaries.iter().copied().chain((0..=ExtendedId::MAX.as_raw()).step_by(0x1_8F31)) {
        let id = ExtendedId::new(raw).unwrap();
        let registers = encode_id(Id::Extended(id));

        assert_eq!(SIDL_IDE, registers[1] & SIDL_IDE);
        assert_eq!(
            raw,
            decode_extended_id(registers[0], registers[1], registers[2], registers[3]).as_raw()
        );
    }
}

#[test]
fn test_standard_id_register_layout() {
    // 0x320 == 0b011_0010_0000, so SIDH takes the upper eight bits
    let registers = encode_id(Id::Standard(StandardId::new(0x320).unwrap()));

    assert_eq!(0x64, registers[0]);
    assert_eq!(0x00, registers[1]);
    assert_eq!(0x320, decode_standard_id(0x64, 0x00).as_raw());
}

#[test]
fn test_extended_id_register_layout() {
    let registers = encode_id(Id::Extended(ExtendedId::new(0x14C9_2A2B).unwrap()));

    assert_eq!([0xA6, 0x49, 0x2A, 0x2B], registers);
    assert_eq!(0x14C9_2A2B, decode_extended_id(0xA6, 0x49, 0x2A, 0x2B).as_raw());
}

#[test]
fn test_clamp_data_length() {
    assert_eq!(0, clamp_data_length(0x00));
    assert_eq!(2, clamp_data_length(0x02));
    assert_eq!(8, clamp_data_length(0x08));
    // Out-of-range nibbles are clamped to the eight byte maximum
    assert_eq!(8, clamp_data_length(0x0F));
    // Upper control bits never leak into the length
    assert_eq!(8, clamp_data_length(DLC_RTR | 0x0F));
    assert_eq!(4, clamp_data_length(DLC_RTR | 0x04));
}

#[test]
fn test_encode_data_length() {
    assert_eq!(0x02, encode_data_length(2, false));
    assert_eq!(DLC_RTR | 0x04, encode_data_length(4, true));
    assert_eq!(DLC_RTR, encode_data_length(0, true));
}

#[test]
fn test_frame_data() {
    let frame = Frame::new(StandardId::new(0x320).unwrap(), &[0x11, 0x22]).unwrap();

    assert_eq!(0x320, frame.raw_id());
    assert!(!frame.is_extended());
    assert!(!frame.is_remote());
    assert_eq!(2, frame.data_length());
    assert_eq!(&[0x11, 0x22], frame.data());
}

#[test]
fn test_frame_payload_too_long() {
    assert!(Frame::new(StandardId::new(0x1).unwrap(), &[0x0; 9]).is_none());
    assert!(Frame::new_remote(StandardId::new(0x1).unwrap(), 9).is_none());
}

#[test]
fn test_remote_frame_has_no_payload() {
    let frame = Frame::new_remote(ExtendedId::new(0x14C9_2A2B).unwrap(), 4).unwrap();

    assert!(frame.is_extended());
    assert!(frame.is_remote());
    assert_eq!(4, frame.data_length());
    assert!(frame.data().is_empty());
}

#[test]
fn test_embedded_can_frame_impl() {
    use embedded_can::Frame as _;

    let frame = Frame::new(Id::Extended(ExtendedId::new(0x14C9_2A2B).unwrap()), &[0xAA]).unwrap();
    assert_eq!(Id::Extended(ExtendedId::new(0x14C9_2A2B).unwrap()), frame.id());
    assert_eq!(1, frame.dlc());

    let remote = Frame::new_remote(Id::Standard(StandardId::new(0x7F).unwrap()), 3).unwrap();
    assert!(remote.is_remote_frame());
    assert_eq!(3, remote.dlc());
}
