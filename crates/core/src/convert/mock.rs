//! Mock converter implementation for testing.

use crate::convert::base::{ConversionError, Converter};
use crate::convert::job::ReactionPath;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A primitive call received by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    File { input: PathBuf, output: PathBuf },
    Path(ReactionPath),
}

#[derive(Clone)]
pub struct MockConverter {
    available: bool,
    write_outputs: bool,
    fail_on: Option<String>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockConverter {
    pub fn new(available: bool, write_outputs: bool) -> Self {
        Self {
            available,
            write_outputs,
            fail_on: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Available, and writes a small placeholder file for every output.
    pub fn success() -> Self {
        Self::new(true, true)
    }

    pub fn unavailable() -> Self {
        Self::new(false, false)
    }

    /// Rejects any call whose input or output path contains `needle`.
    pub fn failing_on(needle: &str) -> Self {
        Self {
            fail_on: Some(needle.to_string()),
            ..Self::success()
        }
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: MockCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn check(&self, paths: &[&Path]) -> Result<(), ConversionError> {
        if !self.available {
            return Err(ConversionError::NotAvailable(
                "Mock converter not available".to_string(),
            ));
        }
        if let Some(needle) = &self.fail_on {
            if let Some(path) = paths
                .iter()
                .find(|path| path.to_string_lossy().contains(needle.as_str()))
            {
                return Err(ConversionError::Rejected(format!(
                    "Mock failure on {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }

    async fn write(&self, output: &Path, content: String) -> Result<(), ConversionError> {
        if !self.write_outputs {
            return Ok(());
        }
        tokio::fs::write(output, content)
            .await
            .map_err(|e| ConversionError::Rejected(format!("Mock write failed: {e}")))
    }
}

#[async_trait]
impl Converter for MockConverter {
    async fn check_availability(&self) -> bool {
        self.available
    }

    async fn convert_file(&self, input: &Path, output: &Path) -> Result<(), ConversionError> {
        self.record(MockCall::File {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        });
        self.check(&[input, output])?;
        self.write(output, format!("converted from {}\n", input.display()))
            .await
    }

    async fn interpolate(&self, path: &ReactionPath) -> Result<(), ConversionError> {
        self.record(MockCall::Path(path.clone()));
        let mut paths: Vec<&Path> = path.frames.iter().map(PathBuf::as_path).collect();
        paths.push(&path.output);
        self.check(&paths)?;

        let content: String = path
            .frames
            .iter()
            .map(|frame| format!("frame from {}\n", frame.display()))
            .collect();
        self.write(&path.output, content).await
    }
}
