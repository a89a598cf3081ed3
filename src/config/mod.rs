//! RAG Configuration Module
//!
//! ## Loading Order
//!
//! 1. `RAG_CONFIG` environment variable (path to TOML file)
//! 2. `rag_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! `RAG_DATA_PATH` and `RAG_TOP_K` override whatever the file provided.
//!
//! ## Usage
//!
//! ```ignore
//! let config = RagConfig::load();
//! let store = Arc::new(VerificationStore::new(&config.data_path));
//! let injector = ContextInjector::new(store).with_top_k(config.top_k);
//! ```

mod rag_config;

pub use rag_config::*;
