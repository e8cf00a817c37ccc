//! Configuration system for the memory hierarchy simulator.
//!
//! This module defines the configuration structures used to set up a
//! simulation. It provides:
//! 1. **Defaults:** Baseline values for the frame allocator and backing store.
//! 2. **Structures:** Hierarchical config for general and memory settings.
//! 3. **Validation:** Rejects settings that could produce frames or addresses
//!    outside the 20-bit physical space.
//!
//! Table geometry (16-entry TLB, 512-entry page table, 32x2 cache) is fixed and
//! deliberately absent here. Configuration is supplied as JSON or built with
//! `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::{FRAME_COUNT, PAGE_TABLE_ENTRIES, PHYS_MEMORY_SIZE};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::PHYS_MEMORY_SIZE;

    /// First frame handed out by the sequential frame allocator.
    pub const FIRST_FRAME: u64 = 0;

    /// Backing store size in bytes (the whole 1 MiB physical space).
    pub const MEMORY_SIZE: usize = PHYS_MEMORY_SIZE;
}

/// Error produced while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for [`Config`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Allocating one frame per virtual page from `first_frame` would run past the last frame.
    #[error("first_frame {first_frame} leaves room for fewer than 512 pages below frame {frames}")]
    FrameRangeExceeded {
        /// Configured first frame.
        first_frame: u64,
        /// Number of addressable frames.
        frames: u64,
    },

    /// The backing store does not cover the physical address space.
    #[error("memory size {0} is smaller than the 1 MiB physical address space")]
    MemorySizeTooSmall(usize),
}

/// Initial contents of the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum FillPattern {
    /// Every byte is zero.
    Zero,
    /// Each byte is derived from its own address, so distinct words differ.
    #[default]
    AddressHash,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use memsim_core::config::{Config, FillPattern};
///
/// let config = Config::from_json(r#"{
///     "general": { "trace_events": true },
///     "memory": { "first_frame": 64, "fill": "Zero" }
/// }"#).unwrap();
/// assert!(config.general.trace_events);
/// assert_eq!(config.memory.first_frame, 64);
/// assert_eq!(config.memory.fill, FillPattern::Zero);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Frame allocator and backing store settings
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// errors of [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that every frame and physical address the settings can produce is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FrameRangeExceeded`] or
    /// [`ConfigError::MemorySizeTooSmall`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let first_frame = self.memory.first_frame;
        if first_frame
            .checked_add(PAGE_TABLE_ENTRIES as u64)
            .is_none_or(|end| end > FRAME_COUNT)
        {
            return Err(ConfigError::FrameRangeExceeded {
                first_frame,
                frames: FRAME_COUNT,
            });
        }
        if self.memory.size_bytes < PHYS_MEMORY_SIZE {
            return Err(ConfigError::MemorySizeTooSmall(self.memory.size_bytes));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every resolution event at debug level.
    #[serde(default)]
    pub trace_events: bool,
}

/// Frame allocator and backing store settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// First frame returned by the sequential allocator.
    #[serde(default = "MemoryConfig::default_first_frame")]
    pub first_frame: u64,

    /// Backing store size in bytes.
    #[serde(default = "MemoryConfig::default_size_bytes")]
    pub size_bytes: usize,

    /// Initial backing store contents.
    #[serde(default)]
    pub fill: FillPattern,
}

impl MemoryConfig {
    const fn default_first_frame() -> u64 {
        defaults::FIRST_FRAME
    }

    const fn default_size_bytes() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            first_frame: defaults::FIRST_FRAME,
            size_bytes: defaults::MEMORY_SIZE,
            fill: FillPattern::default(),
        }
    }
}
