//! Error types for mesh loading and scene configuration

use std::path::PathBuf;

/// Mesh loading failure
///
/// A failed load is fatal for that mesh only; other meshes are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// The mesh source could not be opened or read
    #[error("failed to read mesh {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The line stream failed mid-read
    #[error("failed to read mesh data: {0}")]
    Read(#[source] std::io::Error),

    /// A recognized `v`/`f` line was not UTF-8, or carried a missing,
    /// malformed or surplus number
    #[error("line {line}: invalid {field} value {value:?}")]
    Parse {
        /// 1-based line number in the source
        line: usize,
        /// Field name: `x`, `y`, `z` for vertices, `a`, `b`, `c` for faces,
        /// `extra` for a fourth number, `line` for non-UTF-8 text
        field: &'static str,
        /// The offending token, empty when the field was missing
        value: String,
    },

    /// A triangle references a vertex that does not exist
    #[error("triangle {triangle} references vertex {index}, but mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Zero-based triangle number
        triangle: usize,
        /// Zero-based (already decremented) vertex index
        index: i64,
        vertex_count: usize,
    },
}

/// Invalid scene or animator configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A cycle length was zero
    #[error("{name} must be at least 1 tick (got {value})")]
    ZeroCycle { name: &'static str, value: u32 },

    /// A step or bound was zero, negative or not finite
    #[error("{name} must be a positive finite number (got {value})")]
    NonPositive { name: &'static str, value: f32 },

    /// Tick rate was zero
    #[error("tick_rate must be at least 1 Hz")]
    ZeroTickRate,

    /// Manifest file could not be read
    #[error("failed to read manifest {path:?}: {message}")]
    Read { path: PathBuf, message: String },

    /// Manifest contents are not valid TOML for the scene schema
    #[error("invalid manifest: {0}")]
    Manifest(String),
}
