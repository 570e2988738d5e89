//! JSONL (JSON Lines) storage.
//!
//! JSONL is the source of truth for all group data.
//! Each line is a valid JSON object representing one entity.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};

/// Entity types for JSONL storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Match,
    Result,
    Player,
    Leader,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Match => "matches.jsonl",
            EntityType::Result => "results.jsonl",
            EntityType::Player => "players.jsonl",
            EntityType::Leader => "leaders.jsonl",
        }
    }
}

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    /// Create a new JSONL writer for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a writer for a specific entity type and group.
    pub fn for_entity(config: &StorageConfig, entity: EntityType, group_id: &str) -> Self {
        let path = config.group_dir(group_id).join(entity.filename());
        Self::new(path)
    }

    /// Ensure the parent directory exists.
    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a single entity to the file.
    pub fn append(&self, entity: &T) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(entity)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        debug!("Appended entity to {:?}", self.path);
        Ok(())
    }

    /// Append multiple entities to the file.
    pub fn append_batch(&self, entities: &[T]) -> Result<usize, StorageError> {
        if entities.is_empty() {
            return Ok(0);
        }

        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for entity in entities {
            let json = serde_json::to_string(entity)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        info!("Appended {} entities to {:?}", count, self.path);

        Ok(count)
    }

    /// Write entities, replacing the entire file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for entity in entities {
            let json = serde_json::to_string(entity)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        info!("Wrote {} entities to {:?}", count, self.path);

        Ok(count)
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for a specific entity type and group.
    pub fn for_entity(config: &StorageConfig, entity: EntityType, group_id: &str) -> Self {
        let path = config.group_dir(group_id).join(entity.filename());
        Self::new(path)
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all entities from the file.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num, self.path, e
                    );
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }

    /// Read entities matching a predicate.
    pub fn read_where<F>(&self, predicate: F) -> Result<Vec<T>, StorageError>
    where
        F: Fn(&T) -> bool,
    {
        let all = self.read_all()?;
        Ok(all.into_iter().filter(predicate).collect())
    }

    /// Count entities in the file.
    pub fn count(&self) -> Result<usize, StorageError> {
        if !self.path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let count = reader.lines().filter(|l| l.is_ok()).count();

        Ok(count)
    }
}

/// Find all group directories.
pub fn list_groups(config: &StorageConfig) -> Result<Vec<String>, StorageError> {
    let dir = config.groups_dir();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut groups = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                groups.push(name.to_string());
            }
        }
    }

    groups.sort();
    Ok(groups)
}
