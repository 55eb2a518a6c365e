/// Minimal RIFF/WAVE header followed by a few PCM samples
pub fn wav_bytes() -> Vec<u8> {
    let samples: [u8; 8] = [0x00, 0x00, 0x10, 0x00, 0x20, 0x00, 0x10, 0x00];
    let mut out = Vec::new();
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + samples.len() as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&24_000u32.to_le_bytes());
    out.extend_from_slice(&48_000u32.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&(samples.len() as u32).to_le_bytes());
    out.extend_from_slice(&samples);
    out
}

/// Minimal MP3 frame header
pub fn mp3_bytes() -> Vec<u8> {
    vec![0xFF, 0xFB, 0x90, 0x00, 0x00, 0x00, 0x00, 0x00]
}
