//! Engine factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::arrow_engine::ArrowEngine;
use crate::engine::{BenchError, Engine};
use crate::frame::FrameEngine;
use crate::partitioned::PartitionedEngine;

/// Factory trait for creating engines.
pub trait EngineFactory: Send + Sync {
    /// Get or create an engine by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Engine>, BenchError>;

    /// List all available engine names, in display order.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Engine>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_engine(name: &str) -> Result<Arc<dyn Engine>, BenchError> {
        match name {
            "frame" => Ok(Arc::new(FrameEngine::new())),
            "partitioned" => Ok(Arc::new(PartitionedEngine::new())),
            "arrow" => Ok(Arc::new(ArrowEngine::new())),
            _ => Err(BenchError::Config(format!("unknown engine: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Engine>, BenchError> {
        if let Some(engine) = self.cache.read().get(name) {
            return Ok(Arc::clone(engine));
        }

        let engine = Self::create_engine(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&engine));
        Ok(engine)
    }

    fn available(&self) -> Vec<&str> {
        vec!["frame", "partitioned", "arrow"]
    }
}
