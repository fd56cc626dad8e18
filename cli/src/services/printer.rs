//! Printer services: CUPS printer listing and raw job transports.

use std::future::Future;
use std::path::PathBuf;

use anyhow::{Context, bail};
use serde::Serialize;
use tokio::process::Command;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemPrinter {
    pub name: String,
    pub status: String,
}

/// Destination for a finished printer job.
pub trait RawTransport {
    /// Deliver `bytes` to `target` unmodified.
    fn send(&self, target: &str, bytes: &[u8]) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Sends raw jobs through CUPS with `lpr -o raw`.
#[derive(Debug, Clone)]
pub struct LprTransport {
    program: PathBuf,
    spool_dir: PathBuf,
}

impl Default for LprTransport {
    fn default() -> Self {
        Self {
            program: PathBuf::from("lpr"),
            spool_dir: std::env::temp_dir().join("hotpixels-print"),
        }
    }
}

impl LprTransport {
    /// Builder: run a different `lpr` executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Builder: write spool files to `dir`.
    pub fn with_spool_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.spool_dir = dir.into();
        self
    }
}

impl RawTransport for LprTransport {
    async fn send(&self, target: &str, bytes: &[u8]) -> anyhow::Result<()> {
        if target.trim().is_empty() {
            bail!("printer name is not configured");
        }

        let tmp_dir = &self.spool_dir;
        tokio::fs::create_dir_all(tmp_dir)
            .await
            .with_context(|| format!("failed to create spool dir {}", tmp_dir.display()))?;

        let tmp_file = tmp_dir.join(format!("job-{}.bin", std::process::id()));
        tokio::fs::write(&tmp_file, bytes)
            .await
            .with_context(|| format!("failed to write spool file {}", tmp_file.display()))?;

        let output = Command::new(&self.program)
            .arg("-P")
            .arg(target)
            .arg("-o")
            .arg("raw")
            .arg(&tmp_file)
            .output()
            .await;

        // The spool file goes whether or not lpr could be started.
        let _ = tokio::fs::remove_file(&tmp_file).await;
        let output = output
            .with_context(|| format!("failed to run {}", self.program.display()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("lpr failed: {}", stderr.trim());
        }
        tracing::info!(printer = target, bytes = bytes.len(), "Job sent to printer");
        Ok(())
    }
}

/// Writes jobs to a file instead of a printer (dry run).
#[derive(Debug, Clone)]
pub struct FileTransport {
    pub path: PathBuf,
}

impl RawTransport for FileTransport {
    async fn send(&self, target: &str, bytes: &[u8]) -> anyhow::Result<()> {
        tokio::fs::write(&self.path, bytes)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        tracing::info!(
            path = %self.path.display(),
            printer = target,
            bytes = bytes.len(),
            "Dry run: job written to file"
        );
        Ok(())
    }
}

pub async fn list_system_printers() -> anyhow::Result<Vec<SystemPrinter>> {
    let output = Command::new("lpstat")
        .arg("-p")
        .output()
        .await
        .context("failed to run lpstat -p")?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        if stderr.contains("No destinations added") || stderr.contains("No printers") {
            return Ok(Vec::new());
        }
        bail!("lpstat -p failed: {}", stderr.trim());
    }

    Ok(parse_lpstat_output(&stdout))
}

fn parse_lpstat_output(stdout: &str) -> Vec<SystemPrinter> {
    let mut printers = Vec::new();

    for line in stdout.lines() {
        let Some(rest) = line.trim().strip_prefix("printer ") else {
            continue;
        };

        let mut parts = rest.splitn(2, ' ');
        let Some(name) = parts.next().filter(|n| !n.is_empty()) else {
            continue;
        };
        let status = parts
            .next()
            .and_then(|s| s.strip_prefix("is "))
            .map(|s| s.trim().trim_end_matches('.').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        printers.push(SystemPrinter {
            name: name.to_string(),
            status,
        });
    }

    printers
}
