#![allow(dead_code)]

pub use gufo_makernote::vendor::*;
pub use gufo_makernote::*;

/// Applies Sony's obfuscation, the inverse of `cipher::SONY`
pub fn sony_encipher(data: &[u8]) -> Vec<u8> {
    data.iter()
        .map(|&b| {
            if b < 249 {
                u8::try_from(u32::from(b).pow(3) % 249).unwrap()
            } else {
                b
            }
        })
        .collect()
}

/// Kodak DC240 record
pub fn kodak_record() -> Vec<u8> {
    let mut data = vec![0; 108];

    // Model
    data[0..5].copy_from_slice(b"DC240");
    // Quality
    data[9] = 1;
    // Image size
    data[12..14].copy_from_slice(&1280_u16.to_be_bytes());
    data[14..16].copy_from_slice(&960_u16.to_be_bytes());
    // Creation date
    data[16..18].copy_from_slice(&2001_u16.to_be_bytes());
    data[18..20].copy_from_slice(&[7, 4]);
    data[20..24].copy_from_slice(&[13, 5, 9, 42]);
    // Shutter mode
    data[27] = 8;
    // F-number
    data[30..32].copy_from_slice(&280_u16.to_be_bytes());
    // Exposure time
    data[32..36].copy_from_slice(&1666_u32.to_be_bytes());
    // Exposure compensation
    data[36..38].copy_from_slice(&(-500_i16).to_be_bytes());
    // Focus mode
    data[56] = 2;
    // White balance
    data[64] = 3;
    // Flash mode and fired
    data[92] = 0x20;
    data[93] = 1;
    // ISO setting and ISO
    data[94..96].copy_from_slice(&100_u16.to_be_bytes());
    data[96..98].copy_from_slice(&100_u16.to_be_bytes());
    // Total zoom
    data[98..100].copy_from_slice(&200_u16.to_be_bytes());
    // Color mode
    data[102..104].copy_from_slice(&0x2000_u16.to_be_bytes());
    // Digital zoom
    data[104..106].copy_from_slice(&100_u16.to_be_bytes());
    // Sharpness
    data[107] = 0xFF;

    data
}

/// Plain Sony 0x9400 record, needs to be enciphered before decoding
pub fn sony_tag9400_record() -> Vec<u8> {
    let mut data = vec![0; 68];

    data[0x08..0x0C].copy_from_slice(&4_u32.to_le_bytes());
    data[0x0C..0x10].copy_from_slice(&9_u32.to_le_bytes());
    data[0x10] = 5;
    data[0x1A..0x1E].copy_from_slice(&1234_u32.to_le_bytes());
    data[0x22] = 10;
    data[0x28] = 6;
    data[0x29] = 2;

    data
}
