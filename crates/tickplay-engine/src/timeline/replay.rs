use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::TimelineSource;

/// Summary of a recorded replay: its length and outcome.
///
/// Accepted JSON shapes:
///
/// ```json
/// { "total_ticks": 120, "winner": "Blue" }
/// { "ticks": [ {...}, {...} ], "winner": "Red" }
/// ```
///
/// With a `ticks` array the length of the array is the tick count; the tick
/// payloads themselves are not interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub total_ticks: u64,
    pub winner: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawReplay {
    #[serde(default)]
    total_ticks: Option<u64>,
    #[serde(default)]
    ticks: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    winner: Option<String>,
}

impl ReplaySummary {
    pub fn from_json_str(src: &str) -> Result<Self> {
        let raw: RawReplay = serde_json::from_str(src).context("replay is not valid JSON")?;

        let total_ticks = match (raw.total_ticks, raw.ticks) {
            (Some(total), Some(ticks)) => {
                anyhow::ensure!(
                    ticks.len() as u64 == total,
                    "replay declares {total} ticks but contains {}",
                    ticks.len()
                );
                total
            }
            (Some(total), None) => total,
            (None, Some(ticks)) => ticks.len() as u64,
            (None, None) => anyhow::bail!("replay has neither `total_ticks` nor `ticks`"),
        };

        Ok(Self {
            total_ticks,
            winner: raw.winner.filter(|w| !w.trim().is_empty()),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)
            .with_context(|| format!("failed to read replay {}", path.display()))?;
        let summary = Self::from_json_str(&src)
            .with_context(|| format!("failed to parse replay {}", path.display()))?;
        log::info!(
            "loaded replay {} ({} ticks)",
            path.display(),
            summary.total_ticks
        );
        Ok(summary)
    }
}

impl TimelineSource for ReplaySummary {
    fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    fn winner_label(&self) -> Option<String> {
        self.winner.clone()
    }
}
