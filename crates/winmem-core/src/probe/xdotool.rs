use std::process::{Command, Output, Stdio};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};
use winmem_config::ProbeConfig;

use super::errors::ProbeError;
use super::report::{ProbeReport, parse_probe_report};
use super::traits::GeometryProbe;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Reads geometry straight from X11 via `xdotool`.
///
/// Searches by an anchored title prefix and reports the first match. Two windows
/// sharing the prefix are not disambiguated.
pub struct XdotoolProbe {
    command: String,
    title_prefix: String,
    timeout: Duration,
}

impl XdotoolProbe {
    pub fn new(command: impl Into<String>, title_prefix: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            title_prefix: title_prefix.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(config.command.clone(), config.title_prefix.clone())
            .with_timeout(config.timeout())
    }

    /// Kill the probe process if it has not exited after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `^<prefix>` with regex metacharacters in the prefix escaped, since
    /// `xdotool search --name` takes a regular expression.
    pub fn name_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.title_prefix.len() + 1);
        pattern.push('^');
        for c in self.title_prefix.chars() {
            if "\\.+*?()|[]{}^$".contains(c) {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern
    }

    fn args(&self) -> Vec<String> {
        vec![
            "search".to_string(),
            "--name".to_string(),
            self.name_pattern(),
            "getwindowgeometry".to_string(),
            "--shell".to_string(),
        ]
    }
}

impl GeometryProbe for XdotoolProbe {
    fn name(&self) -> &'static str {
        "xdotool"
    }

    fn is_available(&self) -> bool {
        which::which(&self.command).is_ok()
    }

    fn query(&self) -> Result<ProbeReport, ProbeError> {
        if !self.is_available() {
            return Err(ProbeError::ToolNotFound {
                tool: self.command.clone(),
            });
        }

        let mut command = Command::new(&self.command);
        command.args(self.args());
        let output = run_with_timeout(&mut command, &self.command, self.timeout)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProbeError::CommandFailed {
                tool: self.command.clone(),
                message: format!("exit {}: {}", output.status, stderr.trim()),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!(event = "core.probe.raw_output", tool = %self.command, output = %stdout);

        let report = parse_probe_report(&stdout);
        info!(
            event = "core.probe.query_completed",
            tool = %self.command,
            x = ?report.x,
            y = ?report.y,
            width = ?report.width,
            height = ?report.height
        );
        Ok(report)
    }
}

/// Run `command` to completion, killing it once `timeout` has passed.
///
/// Output is collected after exit, so this suits tools that print only a few lines.
fn run_with_timeout(
    command: &mut Command,
    tool: &str,
    timeout: Duration,
) -> Result<Output, ProbeError> {
    let exec_failed = |source| ProbeError::ExecFailed {
        tool: tool.to_string(),
        source,
    };

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(exec_failed)?;
    let started = Instant::now();

    loop {
        match child.try_wait().map_err(exec_failed)? {
            Some(_) => return child.wait_with_output().map_err(exec_failed),
            None if started.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                warn!(
                    event = "core.probe.timed_out",
                    tool = tool,
                    timeout_ms = timeout.as_millis() as u64
                );
                return Err(ProbeError::TimedOut {
                    tool: tool.to_string(),
                    timeout,
                });
            }
            None => std::thread::sleep(EXIT_POLL_INTERVAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_pattern_is_anchored() {
        let probe = XdotoolProbe::new("xdotool", "SimpleAI");
        assert_eq!(probe.name_pattern(), "^SimpleAI");
    }

    #[test]
    fn test_name_pattern_escapes_metacharacters() {
        let probe = XdotoolProbe::new("xdotool", "SimpleAI - Claude (Sonnet)");
        assert_eq!(probe.name_pattern(), r"^SimpleAI - Claude \(Sonnet\)");
    }

    #[test]
    fn test_args_request_shell_output() {
        let probe = XdotoolProbe::from_config(&ProbeConfig::default());
        assert_eq!(
            probe.args(),
            vec!["search", "--name", "^SimpleAI", "getwindowgeometry", "--shell"]
        );
    }

    #[test]
    fn test_missing_tool_is_tool_not_found() {
        let probe = XdotoolProbe::new("winmem-no-such-probe-binary", "SimpleAI");
        assert!(!probe.is_available());
        let err = probe.query().unwrap_err();
        assert!(matches!(err, ProbeError::ToolNotFound { .. }));
    }

    #[test]
    fn test_query_without_matching_window_fails_cleanly() {
        // Depends on the machine: xdotool and a display may or may not be present.
        let probe = XdotoolProbe::new("xdotool", "NONEXISTENT_WINDOW_12345_UNIQUE")
            .with_timeout(Duration::from_secs(5));

        match probe.query() {
            Ok(report) => assert!(report.accept(50).is_none()),
            Err(err) => assert!(matches!(
                err,
                ProbeError::ToolNotFound { .. }
                    | ProbeError::ExecFailed { .. }
                    | ProbeError::CommandFailed { .. }
                    | ProbeError::TimedOut { .. }
            )),
        }
    }

    #[test]
    fn test_from_config_uses_configured_timeout() {
        let config = ProbeConfig {
            timeout_ms: 750,
            ..ProbeConfig::default()
        };
        let probe = XdotoolProbe::from_config(&config);
        assert_eq!(probe.timeout, Duration::from_millis(750));
    }

    #[cfg(unix)]
    #[test]
    fn test_hung_process_is_killed_at_timeout() {
        let mut command = Command::new("sleep");
        command.arg("30");
        let timeout = Duration::from_millis(100);
        let started = Instant::now();

        let result = run_with_timeout(&mut command, "sleep", timeout);

        assert!(matches!(result, Err(ProbeError::TimedOut { .. })));
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[cfg(unix)]
    #[test]
    fn test_fast_process_output_is_collected() {
        let mut command = Command::new("sh");
        command.args(["-c", "printf 'X=1\\nY=2\\n'"]);

        let timeout = Duration::from_secs(10);

        let output = run_with_timeout(&mut command, "sh", timeout).unwrap();

        assert!(output.status.success());
        let report = parse_probe_report(&String::from_utf8_lossy(&output.stdout));
        assert_eq!((report.x, report.y), (Some(1), Some(2)));
    }
}
