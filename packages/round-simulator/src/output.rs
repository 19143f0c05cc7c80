//! JSON Lines writer for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::metrics::SimulationSummary;
use crate::simulator::RoundRecord;

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Line<'a> {
    Round(&'a RoundRecord),
    Summary {
        generated_at: String,
        seed: u64,
        #[serde(flatten)]
        summary: &'a SimulationSummary,
    },
}

pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl OutputWriter {
    pub fn create(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_round(&mut self, record: &RoundRecord) -> Result<(), Box<dyn std::error::Error>> {
        self.write_line(&Line::Round(record))
    }

    /// Append the summary line and flush.
    pub fn finish(
        mut self,
        summary: &SimulationSummary,
        seed: u64,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let generated_at = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string());
        self.write_line(&Line::Summary {
            generated_at,
            seed,
            summary,
        })?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_line(&mut self, line: &Line<'_>) -> Result<(), Box<dyn std::error::Error>> {
        serde_json::to_writer(&mut self.writer, line)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
