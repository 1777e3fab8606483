//! Scripted geometry probe for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::errors::ProbeError;
use super::report::{ProbeReport, parse_probe_report};
use super::traits::GeometryProbe;

/// Answers every query with the same canned `KEY=VALUE` output, or reports the
/// tool as missing.
pub struct ScriptedProbe {
    output: Option<String>,
    queries: AtomicUsize,
}

impl ScriptedProbe {
    pub fn reporting(output: &str) -> Self {
        Self {
            output: Some(output.to_string()),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn missing() -> Self {
        Self {
            output: None,
            queries: AtomicUsize::new(0),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl GeometryProbe for ScriptedProbe {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        self.output.is_some()
    }

    fn query(&self) -> Result<ProbeReport, ProbeError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        match self.output.as_deref() {
            Some(output) => Ok(parse_probe_report(output)),
            None => Err(ProbeError::ToolNotFound {
                tool: "scripted".to_string(),
            }),
        }
    }
}
