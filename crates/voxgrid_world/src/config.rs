//! World configuration.
//!
//! Loaded once at startup from TOML. Every section is optional; missing
//! values fall back to the defaults below.
//!
//! ```toml
//! chunk_size = 32
//!
//! [atlas]
//! tile_size = 16
//! texture_width = 256
//! texture_height = 64
//!
//! [terrain]
//! seed = 42
//! extent_chunks = 2
//! max_material = 16
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Largest accepted chunk edge length.
pub const MAX_CHUNK_SIZE: u32 = 256;

/// Texture atlas layout used for UV placement.
///
/// Columns are voxel ids (`id - 1`), rows are face groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AtlasConfig {
    /// Edge length of one tile in pixels.
    pub tile_size: u32,
    /// Atlas width in pixels.
    pub texture_width: u32,
    /// Atlas height in pixels.
    pub texture_height: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            tile_size: 16,
            texture_width: 256,
            texture_height: 64,
        }
    }
}

/// Parameters for the rolling-hills seeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerrainConfig {
    /// RNG seed for voxel ids. Same seed, same world.
    pub seed: u64,
    /// Side of the square footprint, in chunks, starting at the origin.
    pub extent_chunks: u32,
    /// Highest voxel id the seeder places.
    pub max_material: u8,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            extent_chunks: 1,
            max_material: 16,
        }
    }
}

/// Top-level world configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// Chunk edge length in voxels.
    pub chunk_size: u32,
    /// Atlas layout.
    pub atlas: AtlasConfig,
    /// Terrain seeding.
    pub terrain: TerrainConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size: 32,
            atlas: AtlasConfig::default(),
            terrain: TerrainConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Config with a different chunk size and everything else default.
    #[must_use]
    pub fn with_chunk_size(chunk_size: u32) -> Self {
        Self {
            chunk_size,
            ..Self::default()
        }
    }

    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`WorldConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(
            "Loaded world config from {}: chunk_size={}, atlas={}x{} (tile {})",
            path.display(),
            config.chunk_size,
            config.atlas.texture_width,
            config.atlas.texture_height,
            config.atlas.tile_size
        );
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(invalid(
                "chunk_size",
                format!("must be in 1..={MAX_CHUNK_SIZE}, got {}", self.chunk_size),
            ));
        }

        let atlas = &self.atlas;
        if atlas.tile_size == 0 {
            return Err(invalid("atlas.tile_size", "must be non-zero".to_owned()));
        }
        if atlas.texture_width < atlas.tile_size {
            return Err(invalid(
                "atlas.texture_width",
                format!(
                    "must hold at least one tile ({} < {})",
                    atlas.texture_width, atlas.tile_size
                ),
            ));
        }
        if atlas.texture_height < atlas.tile_size {
            return Err(invalid(
                "atlas.texture_height",
                format!(
                    "must hold at least one tile ({} < {})",
                    atlas.texture_height, atlas.tile_size
                ),
            ));
        }

        if self.terrain.max_material == 0 {
            return Err(invalid(
                "terrain.max_material",
                "must be at least 1 (0 is air)".to_owned(),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_size, 32);
        assert_eq!(config.atlas.texture_width, 256);
        assert_eq!(config.atlas.texture_height, 64);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = WorldConfig::from_toml_str("chunk_size = 16\n[terrain]\nseed = 7\n")
            .expect("valid config");
        assert_eq!(config.chunk_size, 16);
        assert_eq!(config.terrain.seed, 7);
        assert_eq!(config.terrain.max_material, 16);
        assert_eq!(config.atlas, AtlasConfig::default());
    }

    #[test]
    fn test_rejects_zero_chunk_size() {
        let err = WorldConfig::from_toml_str("chunk_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "chunk_size", .. }));
    }

    #[test]
    fn test_rejects_tile_larger_than_atlas() {
        let err = WorldConfig::from_toml_str("[atlas]\ntile_size = 128\ntexture_height = 64\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "atlas.texture_height", .. }));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = WorldConfig::from_toml_str("chunk_sise = 8").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = WorldConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
