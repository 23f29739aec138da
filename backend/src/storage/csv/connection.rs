use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use super::{BudgetSettingsRepository, CategoryRepository, DebitOrderRepository, TransactionRepository};
use crate::storage::change_feed::ChangeFeed;
use crate::storage::traits::Connection;

/// CsvConnection owns the data directory and hands out repositories over it
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
    /// Serialises read-modify-write cycles across all repositories
    write_lock: Arc<Mutex<()>>,
    change_feed: ChangeFeed,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            write_lock: Arc::new(Mutex::new(())),
            change_feed: ChangeFeed::new(),
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.base_directory.join(file_name)
    }

    /// Hold this guard for the whole read-modify-write of a collection
    pub async fn lock_for_write(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Read every record of a collection file.
    ///
    /// A file that does not exist yet reads as empty. Only the write path
    /// creates files, under the write lock.
    pub fn read_records<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let file_path = self.file_path(file_name);
        if !file_path.exists() {
            debug!("{} not created yet, reading as empty", file_path.display());
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)
            .with_context(|| format!("Failed to open {}", file_path.display()))?;
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: T = result.with_context(|| format!("Malformed record in {}", file_path.display()))?;
            records.push(record);
        }
        Ok(records)
    }

    /// Replace a collection file with `records`, via a temp file and rename
    pub fn write_records<T: Serialize>(&self, file_name: &str, header: &[&str], records: &[T]) -> Result<()> {
        let file_path = self.file_path(file_name);
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to open {}", temp_path.display()))?;

            let mut csv_writer = WriterBuilder::new()
                .has_headers(false)
                .from_writer(BufWriter::new(file));

            csv_writer.write_record(header)?;
            for record in records {
                csv_writer.serialize(record)?;
            }
            csv_writer.flush()?;
        }

        fs::rename(&temp_path, &file_path)
            .with_context(|| format!("Failed to replace {}", file_path.display()))?;
        debug!("Wrote {} records to {}", records.len(), file_path.display());
        Ok(())
    }

    /// Write a whole text file atomically (used for YAML documents)
    pub fn write_file_atomically(&self, file_name: &str, contents: &str) -> Result<()> {
        let file_path = self.file_path(file_name);
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &file_path)
            .with_context(|| format!("Failed to replace {}", file_path.display()))?;
        Ok(())
    }
}

impl Connection for CsvConnection {
    type TransactionRepository = TransactionRepository;
    type CategoryRepository = CategoryRepository;
    type DebitOrderRepository = DebitOrderRepository;
    type BudgetSettingsRepository = BudgetSettingsRepository;

    fn create_transaction_repository(&self) -> Self::TransactionRepository {
        TransactionRepository::new(self.clone())
    }

    fn create_category_repository(&self) -> Self::CategoryRepository {
        CategoryRepository::new(self.clone())
    }

    fn create_debit_order_repository(&self) -> Self::DebitOrderRepository {
        DebitOrderRepository::new(self.clone())
    }

    fn create_budget_settings_repository(&self) -> Self::BudgetSettingsRepository {
        BudgetSettingsRepository::new(self.clone())
    }

    fn change_feed(&self) -> &ChangeFeed {
        &self.change_feed
    }
}
