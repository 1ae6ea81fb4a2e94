//! Cached text-to-speech through an external Piper binary.
//!
//! A request is keyed by `(text, language, speed)`. Cache hits return the
//! stored WAV immediately; misses resolve the language's voice model, run
//! Piper for raw PCM, wrap it in a WAV header and store the result.

mod key;
mod service;
mod store;
mod synth;
mod wav;

pub use key::cache_key;
pub use service::{SpeechRequest, TtsError, TtsService};
pub use store::{AudioStore, CacheStats, FsAudioStore, MemoryAudioStore, StoreError};
pub use synth::{PiperSynthesizer, SynthError, SynthesisRequest, Synthesizer};
pub use wav::{PcmFormat, WAV_HEADER_LEN, to_wav, wav_header};
