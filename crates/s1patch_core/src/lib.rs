//! Roland S-1 patch parameter library
//!
//! This crate decodes the `KEY=VALUE` patch files saved by the S-1 into
//! human-readable parameter values. It is a pure library with no file system,
//! terminal, or report concerns. Those belong in the CLI layer.

pub mod codec;
pub mod decoder;
pub mod record;
pub mod schema;

// Re-export commonly used items
pub use codec::{DisplayValue, Notice};
pub use decoder::{
    DEFAULTS_FILE, DecodeOptions, DecodedParameter, DecodedPatch, PatchDecoder, PatchError,
    PatchErrorKind,
};
pub use schema::{ParameterDefinition, Registry, SchemaError, TypeTag};
