//! Error types for world data loading.

use thiserror::Error;

/// Errors that can occur when loading or validating level data.
///
/// The first three are I/O faults. The rest describe malformed records; they
/// are reported as warnings and never stop a level from loading.
#[derive(Debug, Error, PartialEq)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A record's box has a non-positive width or height.
    #[error("Entity {id} has invalid bounds {w}x{h}; record dropped")]
    InvalidBounds { id: u32, w: f32, h: f32 },

    /// Two records share an id.
    #[error("Duplicate entity id {id}; later record dropped")]
    DuplicateId { id: u32 },

    /// A link points at nothing usable.
    #[error("Entity {id} links to {linked_id}, which is not a firewall; link is inert")]
    DanglingLink { id: u32, linked_id: u32 },
}
