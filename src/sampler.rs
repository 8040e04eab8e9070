/// Screen color sampling through an external point-and-pick program.
use std::io;
use std::process::Command;
use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::color;

pub const DEFAULT_SAMPLER: &str = "xcolor";
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("color picker `{program}` is not available: {source}")]
    Unavailable {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("color picking was cancelled")]
    Cancelled,
    #[error("color picker failed: {0}")]
    Failed(String),
    #[error("color picker returned no color: {0:?}")]
    InvalidOutput(String),
    #[error("terminal error: {0}")]
    Surface(#[from] io::Error),
}

/// Something that can sample one color from the screen.
pub trait ColorSampler {
    fn sample(&mut self) -> Result<String, SampleError>;
}

/// The visible application UI, hidden while a color is sampled.
pub trait Surface {
    fn hide(&mut self) -> io::Result<()>;
    fn show(&mut self) -> io::Result<()>;
}

/// Surface for non-interactive runs: there is nothing to hide.
pub struct Headless;

impl Surface for Headless {
    fn hide(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs a picker program and reads the first hex color from its stdout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSampler {
    program: String,
    args: Vec<String>,
}

impl CommandSampler {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Splits a whitespace separated command line into program and arguments.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ColorSampler for CommandSampler {
    fn sample(&mut self) -> Result<String, SampleError> {
        debug!(program = %self.program, args = ?self.args, "running color picker");
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| SampleError::Unavailable {
                program: self.program.clone(),
                source,
            })?;

        // A non-zero exit is a failed pick whatever the program printed.
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            if stderr.is_empty() {
                return Err(SampleError::Cancelled);
            }
            return Err(SampleError::Failed(stderr));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        color::find_hex(&stdout)
            .ok_or_else(|| SampleError::InvalidOutput(stdout.trim().to_string()))
    }
}

/// Hides `surface`, waits `settle`, samples one color and shows `surface` again.
///
/// The surface is shown again whatever the sampler returns.
pub fn pick_color(
    surface: &mut dyn Surface,
    sampler: &mut dyn ColorSampler,
    settle: Duration,
) -> Result<String, SampleError> {
    if let Err(err) = surface.hide() {
        if let Err(show_err) = surface.show() {
            warn!(error = %show_err, "failed to restore surface");
        }
        return Err(err.into());
    }
    thread::sleep(settle);
    let sampled = sampler.sample();
    let restored = surface.show();

    let hex = sampled?;
    restored?;
    Ok(hex)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Sampler returning scripted results in order.
    pub(crate) struct ScriptedSampler {
        results: Vec<Result<String, SampleError>>,
    }

    impl ScriptedSampler {
        pub(crate) fn new(results: Vec<Result<String, SampleError>>) -> Self {
            let mut results = results;
            results.reverse();
            Self { results }
        }
    }

    impl ColorSampler for ScriptedSampler {
        fn sample(&mut self) -> Result<String, SampleError> {
            self.results.pop().unwrap_or(Err(SampleError::Cancelled))
        }
    }

    /// Surface recording every hide/show call.
    #[derive(Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) calls: Vec<&'static str>,
        pub(crate) fail_hide: bool,
    }

    impl RecordingSurface {
        pub(crate) fn hidden(&self) -> bool {
            self.calls.last() == Some(&"hide")
        }
    }

    impl Surface for RecordingSurface {
        fn hide(&mut self) -> io::Result<()> {
            self.calls.push("hide");
            if self.fail_hide {
                return Err(io::Error::other("no terminal"));
            }
            Ok(())
        }

        fn show(&mut self) -> io::Result<()> {
            self.calls.push("show");
            Ok(())
        }
    }

    #[test]
    fn surface_restored_after_success() {
        let mut surface = RecordingSurface::default();
        let mut sampler = ScriptedSampler::new(vec![Ok("#a1b2c3".to_string())]);
        let hex = pick_color(&mut surface, &mut sampler, Duration::ZERO).unwrap();
        assert_eq!(hex, "#a1b2c3");
        assert_eq!(surface.calls, ["hide", "show"]);
    }

    #[test]
    fn surface_restored_after_cancel() {
        let mut surface = RecordingSurface::default();
        let mut sampler = ScriptedSampler::new(vec![Err(SampleError::Cancelled)]);
        let err = pick_color(&mut surface, &mut sampler, Duration::ZERO).unwrap_err();
        assert!(matches!(err, SampleError::Cancelled));
        assert!(!surface.hidden());
    }

    #[test]
    fn surface_restored_when_hide_fails() {
        let mut surface = RecordingSurface {
            fail_hide: true,
            ..Default::default()
        };
        let mut sampler = ScriptedSampler::new(vec![Ok("#000000".to_string())]);
        let err = pick_color(&mut surface, &mut sampler, Duration::ZERO).unwrap_err();
        assert!(matches!(err, SampleError::Surface(_)));
        assert_eq!(surface.calls, ["hide", "show"]);
    }

    #[test]
    fn waits_for_settle_before_sampling() {
        let mut surface = RecordingSurface::default();
        let mut sampler = ScriptedSampler::new(vec![Ok("#000000".to_string())]);
        let started = std::time::Instant::now();
        pick_color(&mut surface, &mut sampler, Duration::from_millis(30)).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn parses_command_line() {
        let sampler = CommandSampler::from_command_line("hyprpicker --format=hex").unwrap();
        assert_eq!(sampler.program(), "hyprpicker");
        assert_eq!(sampler.args, ["--format=hex"]);
        assert!(CommandSampler::from_command_line("   ").is_none());
    }

    #[test]
    fn missing_program_is_unavailable() {
        let mut sampler = CommandSampler::new("palettr-no-such-picker", Vec::new());
        assert!(matches!(
            sampler.sample(),
            Err(SampleError::Unavailable { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn reads_color_from_program_output() {
        let mut sampler = CommandSampler::new("echo", vec!["#A1B2C3".to_string()]);
        assert_eq!(sampler.sample().unwrap(), "#a1b2c3");
    }

    #[cfg(unix)]
    #[test]
    fn silent_failure_is_cancel() {
        let mut sampler = CommandSampler::new("false", Vec::new());
        assert!(matches!(sampler.sample(), Err(SampleError::Cancelled)));
    }

    #[cfg(unix)]
    #[test]
    fn failed_exit_ignores_printed_color() {
        let mut sampler = CommandSampler::new(
            "sh",
            vec!["-c".to_string(), "echo '#123456'; exit 1".to_string()],
        );
        assert!(matches!(sampler.sample(), Err(SampleError::Cancelled)));

        let mut sampler = CommandSampler::new(
            "sh",
            vec![
                "-c".to_string(),
                "echo '#123456'; echo denied >&2; exit 1".to_string(),
            ],
        );
        assert!(matches!(sampler.sample(), Err(SampleError::Failed(msg)) if msg == "denied"));
    }

    #[cfg(unix)]
    #[test]
    fn output_without_color_is_invalid() {
        let mut sampler = CommandSampler::new("echo", vec!["nothing".to_string()]);
        assert!(matches!(
            sampler.sample(),
            Err(SampleError::InvalidOutput(_))
        ));
    }
}
