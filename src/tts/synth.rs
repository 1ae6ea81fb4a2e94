//! External synthesis through the Piper CLI.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Errors from a single synthesis attempt.
#[derive(Error, Debug)]
pub enum SynthError {
    #[error("Failed to start {bin}: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Synthesis timed out after {0:?}")]
    Timeout(Duration),

    #[error("Synthesizer exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Synthesizer IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input for one synthesis run.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    /// Resolved voice model file.
    pub model_path: PathBuf,
    pub speed: f32,
    /// Deadline for the whole run, after which the process is killed.
    pub timeout: Duration,
}

impl SynthesisRequest {
    /// Piper's `--length_scale` for this speed, or `None` at normal speed.
    ///
    /// Lower length scale means faster speech.
    pub fn length_scale(&self) -> Option<f32> {
        if self.speed == 1.0 {
            None
        } else {
            Some(1.0 / self.speed)
        }
    }
}

/// Something that turns text into raw PCM samples.
///
/// Abstracted so the service can be exercised without a voice model installed.
#[cfg_attr(test, mockall::automock)]
pub trait Synthesizer: Send + Sync {
    /// Synthesize `request.text`, returning raw PCM bytes.
    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SynthError>;
}

/// Runs the `piper` binary with `--output_raw`, feeding text on stdin.
pub struct PiperSynthesizer {
    bin: PathBuf,
}

impl PiperSynthesizer {
    /// Create a synthesizer that runs the binary at `bin`.
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }

    /// Build the command line for `request`.
    pub fn command(&self, request: &SynthesisRequest) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("--model").arg(&request.model_path);
        cmd.arg("--output_raw");
        if let Some(scale) = request.length_scale() {
            cmd.arg("--length_scale").arg(scale.to_string());
        }
        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd
    }

    fn wait_until(child: &mut Child, timeout: Duration) -> Result<ExitStatus, SynthError> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(SynthError::Timeout(timeout));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<std::io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut buf)?;
        }
        Ok(buf)
    })
}

fn join(handle: JoinHandle<std::io::Result<Vec<u8>>>) -> Result<Vec<u8>, SynthError> {
    handle
        .join()
        .map_err(|_| SynthError::Io(std::io::Error::other("pipe reader panicked")))?
        .map_err(SynthError::Io)
}

impl Synthesizer for PiperSynthesizer {
    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, SynthError> {
        let mut cmd = self.command(request);
        debug!(command = ?cmd, "running piper");

        let mut child = cmd.spawn().map_err(|source| SynthError::Spawn {
            bin: self.bin.display().to_string(),
            source,
        })?;

        // Readers first, so a chatty child never blocks on a full pipe
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        if let Some(mut stdin) = child.stdin.take() {
            let text = request.text.clone();
            thread::spawn(move || {
                // A child that exits early closes stdin; the exit status reports why
                let _ = stdin.write_all(text.as_bytes());
            });
        }

        let status = Self::wait_until(&mut child, request.timeout)?;
        let pcm = join(stdout)?;
        let stderr = join(stderr)?;

        if !status.success() {
            return Err(SynthError::Failed {
                status: status.to_string(),
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        debug!(bytes = pcm.len(), "piper finished");
        Ok(pcm)
    }
}
