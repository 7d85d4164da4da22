mod utils;
use gufo_common::read::ByteOrder;
use gufo_makernote::error::Error;
use gufo_makernote::layout::{Entry, Layout};
use utils::*;

#[test]
fn spans_match_lengths() {
    for layout in [&kodak::LAYOUT, &sony_tag9400::LAYOUT] {
        assert_eq!(layout.span(), Some(layout.len), "{:?}", layout.vendor);
    }
}

#[test]
fn length_mismatch() {
    let record = sony_encipher(&sony_tag9400_record());

    for len in [0, 67, 69] {
        let mut data = record.clone();
        data.resize(len, 0);

        let err = sony_tag9400::LAYOUT.decode(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                vendor: Vendor::SonyTag9400,
                expected: 68,
                actual,
            } if actual == len
        ));
        assert!(!err.is_recoverable());
    }

    let err = kodak::LAYOUT.decode(&[0; 107]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Kodak record must be 108 bytes long, got 107 bytes"
    );
}

#[test]
fn kodak() {
    let directory = kodak::LAYOUT.decode(&kodak_record()).unwrap();

    assert_eq!(directory.vendor(), Vendor::Kodak);
    assert_eq!(directory.name(), "Kodak Makernote");
    // Every entry except the skipped bytes
    assert_eq!(directory.len(), 26);

    assert_eq!(directory.get_string(kodak::KodakModel).unwrap(), "DC240");
    assert_eq!(directory.get_i32(kodak::ImageWidth).unwrap(), 1280);
    assert_eq!(directory.get_i32(kodak::ImageHeight).unwrap(), 960);
    assert_eq!(directory.get_i32(kodak::YearCreated).unwrap(), 2001);
    assert_eq!(directory.get_bytes(kodak::MonthDayCreated).unwrap(), &[7, 4]);
    assert_eq!(directory.get_i64(kodak::ExposureTime).unwrap(), 1666);
    assert_eq!(directory.get_i32(kodak::ExposureCompensation).unwrap(), -500);
    assert_eq!(directory.get_i32(kodak::Sharpness).unwrap(), -1);
    assert_eq!(directory.get_i32(kodak::ColorMode).unwrap(), 0x2000);

    let d = directory.descriptor();
    assert_eq!(d.describe(kodak::Quality).unwrap(), "Fine");
    assert_eq!(d.describe(kodak::BurstMode).unwrap(), "Off");
    assert_eq!(d.describe(kodak::MonthDayCreated).unwrap(), "07-04");
    assert_eq!(d.describe(kodak::TimeCreated).unwrap(), "13:05:09.42");
    assert_eq!(d.describe(kodak::ShutterMode).unwrap(), "Aperture Priority");
    assert_eq!(d.describe(kodak::FNumber).unwrap(), "f/2.8");
    assert_eq!(d.describe(kodak::ExposureTime).unwrap(), "1/60 sec");
    assert_eq!(d.describe(kodak::ExposureCompensation).unwrap(), "-0.50 EV");
    assert_eq!(d.describe(kodak::FocusMode).unwrap(), "Macro");
    assert_eq!(d.describe(kodak::WhiteBalance).unwrap(), "Daylight");
    assert_eq!(d.describe(kodak::FlashMode).unwrap(), "Off");
    assert_eq!(d.describe(kodak::FlashFired).unwrap(), "Yes");
    assert_eq!(d.describe(kodak::TotalZoom).unwrap(), "2.00x");
    assert_eq!(d.describe(kodak::ColorMode).unwrap(), "B&W");
    assert_eq!(d.describe(kodak::Sharpness).unwrap(), "Soft");
}

#[test]
fn sony_tag9400() {
    let plain = sony_tag9400_record();
    let data = sony_encipher(&plain);
    assert_ne!(data, plain);

    let directory = sony_tag9400::LAYOUT.decode(&data).unwrap();
    assert_eq!(directory.vendor(), Vendor::SonyTag9400);
    assert_eq!(directory.len(), 7);

    // Input is not modified
    assert_eq!(data, sony_encipher(&plain));

    assert_eq!(
        directory.get_i64(sony_tag9400::SequenceImageNumber).unwrap(),
        4
    );
    assert_eq!(
        directory
            .get_i64(sony_tag9400::ShotNumberSincePowerUp)
            .unwrap(),
        1234
    );

    let d = directory.descriptor();
    assert_eq!(d.describe(sony_tag9400::SequenceImageNumber).unwrap(), "5");
    assert_eq!(d.describe(sony_tag9400::SequenceFileNumber).unwrap(), "10");
    assert_eq!(
        d.describe(sony_tag9400::ReleaseMode2).unwrap(),
        "Continuous - Burst"
    );
    assert_eq!(d.describe(sony_tag9400::SequenceLength).unwrap(), "10 shots");
    assert_eq!(
        d.describe(sony_tag9400::CameraOrientation).unwrap(),
        "Rotate 90 CW"
    );
    assert_eq!(d.describe(sony_tag9400::Quality2).unwrap(), "RAW + JPEG");
}

#[test]
fn sony_tag9400_release_mode_gaps() {
    let mut plain = sony_tag9400_record();

    plain[0x10] = 4;
    let directory = sony_tag9400::LAYOUT.decode(&sony_encipher(&plain)).unwrap();
    assert_eq!(directory.describe(sony_tag9400::ReleaseMode2), None);

    plain[0x10] = 30;
    let directory = sony_tag9400::LAYOUT.decode(&sony_encipher(&plain)).unwrap();
    assert_eq!(
        directory.describe(sony_tag9400::ReleaseMode2).unwrap(),
        "Unknown (30)"
    );
}

#[test]
fn strings() {
    static LAYOUT: Layout = Layout {
        vendor: Vendor::Kodak,
        len: 12,
        byte_order: ByteOrder::LittleEndian,
        cipher: None,
        entries: &[
            Entry::Str {
                tag: Tag(0),
                width: 6,
                terminated: true,
                encoding: TextEncoding::Ascii,
            },
            Entry::Str {
                tag: Tag(6),
                width: 6,
                terminated: false,
                encoding: TextEncoding::Ascii,
            },
        ],
    };

    let directory = LAYOUT.decode(b"ab\0cd\0ef\0gh\0").unwrap();

    assert_eq!(directory.get_bytes(Tag(0)).unwrap(), b"ab");
    assert_eq!(directory.get_bytes(Tag(6)).unwrap(), b"ef\0gh\0");
    assert_eq!(directory.get_string(Tag(6)).unwrap(), "ef\0gh");

    // Unterminated text uses the full width
    let directory = LAYOUT.decode(b"abcdefghijkl").unwrap();
    assert_eq!(directory.get_string(Tag(0)).unwrap(), "abcdef");
    assert_eq!(directory.get_string(Tag(6)).unwrap(), "ghijkl");
}

#[test]
fn byte_order() {
    static LAYOUT: Layout = Layout {
        vendor: Vendor::Sony,
        len: 8,
        byte_order: ByteOrder::BigEndian,
        cipher: None,
        entries: &[
            Entry::U16(Tag(0)),
            Entry::I16(Tag(2)),
            Entry::I32(Tag(4)),
        ],
    };

    let directory = LAYOUT
        .decode(&[0x01, 0x02, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0x00])
        .unwrap();

    assert_eq!(directory.get(Tag(0)), Some(&TagValue::I32(0x0102)));
    assert_eq!(directory.get(Tag(2)), Some(&TagValue::I32(-2)));
    assert_eq!(directory.get(Tag(4)), Some(&TagValue::I32(-256)));
}
