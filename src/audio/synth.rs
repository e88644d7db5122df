//! Audio domain: in-memory WAV synthesis.
//!
//! Every sound the game makes is generated here at startup; there are no
//! sample files on disk.

pub const SAMPLE_RATE: u32 = 44_100;

/// A linear-chirp sine sweep with a quadratic fade-out, packed as mono
/// 16-bit WAV bytes.
pub fn tone_sweep(start_hz: f32, end_hz: f32, secs: f32, gain: f32) -> Vec<u8> {
    let frames = (secs * SAMPLE_RATE as f32) as usize;
    let mut samples = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f32 / SAMPLE_RATE as f32;
        let u = i as f32 / frames as f32;
        // Integrated instantaneous frequency of a linear chirp.
        let phase =
            std::f32::consts::TAU * (start_hz * t + (end_hz - start_hz) * t * t / (2.0 * secs));
        let envelope = (1.0 - u) * (1.0 - u);
        samples.push(phase.sin() * envelope * gain);
    }
    pcm16_wav(&samples)
}

/// A square-wave note sequence for the background loop. Notes are
/// `(frequency_hz, seconds)` pairs; a zero frequency is a rest.
pub fn square_melody(notes: &[(f32, f32)], gain: f32) -> Vec<u8> {
    let mut samples = Vec::new();
    for &(hz, secs) in notes {
        let frames = (secs * SAMPLE_RATE as f32) as usize;
        for i in 0..frames {
            if hz == 0.0 {
                samples.push(0.0);
                continue;
            }
            let t = i as f32 / SAMPLE_RATE as f32;
            let u = i as f32 / frames as f32;
            let wave = if (t * hz).fract() < 0.5 { 1.0 } else { -1.0 };
            // Short attack/release ramp to avoid clicks between notes.
            let envelope = (u * 20.0).min(1.0) * ((1.0 - u) * 20.0).min(1.0);
            samples.push(wave * envelope * gain);
        }
    }
    pcm16_wav(&samples)
}

/// Wraps float samples in a minimal RIFF/WAVE container (PCM, mono,
/// 16-bit).
pub fn pcm16_wav(samples: &[f32]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let byte_rate = SAMPLE_RATE * 2;

    let mut bytes = Vec::with_capacity(44 + samples.len() * 2);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        let clamped = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        bytes.extend_from_slice(&clamped.to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_container_is_well_formed() {
        let bytes = tone_sweep(440.0, 880.0, 0.1, 0.5);
        let frames = (0.1 * SAMPLE_RATE as f32) as usize;

        assert_eq!(bytes.len(), 44 + frames * 2);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(&bytes[36..40], b"data");

        let rate = u32::from_le_bytes(bytes[24..28].try_into().unwrap());
        assert_eq!(rate, SAMPLE_RATE);
        let data_len = u32::from_le_bytes(bytes[40..44].try_into().unwrap());
        assert_eq!(data_len as usize, frames * 2);
    }

    #[test]
    fn sweep_fades_to_silence() {
        let bytes = tone_sweep(880.0, 220.0, 0.05, 1.0);
        let last = i16::from_le_bytes(bytes[bytes.len() - 2..].try_into().unwrap());
        assert!(last.abs() < 1000);
    }

    #[test]
    fn melody_rest_is_silent() {
        let bytes = square_melody(&[(0.0, 0.01)], 0.5);
        let payload = &bytes[44..];
        assert!(payload.iter().all(|b| *b == 0));
    }

    #[test]
    fn samples_are_clamped() {
        let bytes = pcm16_wav(&[2.0, -2.0]);
        let first = i16::from_le_bytes(bytes[44..46].try_into().unwrap());
        let second = i16::from_le_bytes(bytes[46..48].try_into().unwrap());
        assert_eq!(first, i16::MAX);
        assert_eq!(second, -i16::MAX);
    }
}
