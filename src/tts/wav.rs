//! WAV container formatting for raw PCM output.

/// Size of the canonical RIFF/WAVE header in bytes.
pub const WAV_HEADER_LEN: usize = 44;

/// Fixed PCM format of the synthesizer's raw output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl Default for PcmFormat {
    /// Piper's medium/low voices emit 22.05 kHz mono 16-bit samples.
    fn default() -> Self {
        Self {
            sample_rate: 22050,
            channels: 1,
            bits_per_sample: 16,
        }
    }
}

impl PcmFormat {
    /// Bytes per sample frame across all channels, saturating at `u16::MAX`.
    pub fn block_align(&self) -> u16 {
        let bytes = u32::from(self.channels) * u32::from(self.bits_per_sample) / 8;
        u16::try_from(bytes).unwrap_or(u16::MAX)
    }

    /// Bytes per second of audio, saturating at `u32::MAX`.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(u32::from(self.block_align()))
    }
}

/// Build the 44-byte header for `data_len` bytes of PCM payload.
///
/// RIFF sizes are 32-bit, so the chunk size saturates at `u32::MAX`.
pub fn wav_header(data_len: u32, format: &PcmFormat) -> [u8; WAV_HEADER_LEN] {
    let mut header = [0u8; WAV_HEADER_LEN];

    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&data_len.saturating_add(36).to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // fmt chunk size
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM
    header[22..24].copy_from_slice(&format.channels.to_le_bytes());
    header[24..28].copy_from_slice(&format.sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&format.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&format.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&format.bits_per_sample.to_le_bytes());

    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_len.to_le_bytes());

    header
}

/// Wrap raw PCM samples in a WAV container.
///
/// Payloads of 4 GiB or more cannot be described by a RIFF header; their
/// size fields are clamped to `u32::MAX`.
pub fn to_wav(pcm: &[u8], format: &PcmFormat) -> Vec<u8> {
    let data_len = u32::try_from(pcm.len()).unwrap_or(u32::MAX);
    let mut out = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());
    out.extend_from_slice(&wav_header(data_len, format));
    out.extend_from_slice(pcm);
    out
}
