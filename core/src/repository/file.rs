use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::week::WeekEntry;
use crate::repository::traits::WeekStore;

const REGISTRY_FILE_NAME: &str = "weeks.json";

/// JSON-file-backed week store. The file is a pretty-printed array so it
/// stays diffable by hand between runs.
#[derive(Clone)]
pub struct FileWeekStore {
    file_path: PathBuf,
}

impl FileWeekStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".rollcall")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(REGISTRY_FILE_NAME);

        // Initialize on first use so a fresh install reads back as
        // "no weeks yet" rather than a missing file.
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<WeekEntry>::new())?;
            writer.flush()?;
        }

        Ok(FileWeekStore { file_path: path })
    }
}

impl WeekStore for FileWeekStore {
    fn load(&self) -> Result<Vec<WeekEntry>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let entries = serde_json::from_reader(reader)?;
        Ok(entries)
    }

    fn save(&self, entries: &[WeekEntry]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
        Ok(())
    }
}
