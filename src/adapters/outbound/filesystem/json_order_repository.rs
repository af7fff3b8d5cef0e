use crate::order_listing::domain::Order;
use crate::ports::outbound::OrderRepository;
use crate::shared::error::OrderError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonFileOrderRepository adapter reading orders from a JSON file
///
/// The file holds a JSON array of orders. It is re-read on every call, so
/// edits between calls are picked up.
pub struct JsonFileOrderRepository {
    path: PathBuf,
}

impl JsonFileOrderRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file after checking it is a regular, reasonably sized file
    fn safe_read(&self) -> Result<String> {
        self.validate().map_err(|e| -> anyhow::Error {
            OrderError::SecurityError {
                path: self.path.clone(),
                reason: e.to_string(),
                hint: "Point --source at a regular JSON file under 100 MB".to_string(),
            }
            .into()
        })?;

        fs::read_to_string(&self.path).map_err(|e| {
            OrderError::OrderFileParseError {
                path: self.path.clone(),
                details: format!("Failed to read orders file: {}", e),
            }
            .into()
        })
    }

    fn validate(&self) -> Result<()> {
        let file_size = validate_regular_file(&self.path, "orders file")?;
        validate_file_size(file_size, &self.path, MAX_FILE_SIZE)
    }

    fn parse(&self, content: &str) -> Result<Vec<Order>> {
        serde_json::from_str(content).map_err(|e| {
            OrderError::OrderFileParseError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl OrderRepository for JsonFileOrderRepository {
    async fn get_orders(&self) -> Result<Vec<Order>> {
        if fs::symlink_metadata(&self.path).is_err() {
            return Err(OrderError::OrderFileNotFound {
                path: self.path.clone(),
                suggestion: "Create the file or point --source at an existing JSON orders file."
                    .to_string(),
            }
            .into());
        }

        let content = self.safe_read()?;
        self.parse(&content)
    }
}
