//! nfogen is a scriptable NFO and forum description generator.
//! It renders structured release metadata (track summaries, database
//! IDs, preview links) through user-authored text templates with a
//! chainable format-spec mini-language, conditional blocks, and
//! indentation-preserving multi-line substitution.

/// Command-line interface module for the nfogen application
pub mod cli;

/// User data directories and persistent configuration handling
pub mod config;

/// Common constants used throughout the application
pub mod constants;

/// Variable context handling: the name-to-value mapping consumed by
/// a render, loaded from JSON/YAML context files
pub mod context;

/// Error types and handling for the nfogen application
pub mod error;

/// The format-spec dispatcher: boolean tags, `len`, `bbimg`,
/// grid layout, wrap, center, and `:`-chaining
pub mod formatter;

/// User confirmation prompts
pub mod prompt;

/// Rendering orchestration: substitution, artwork wrapping,
/// conditionals, whitespace normalization
pub mod renderer;

/// Placeholder substitution and conditional block passes
pub mod template;

/// The tagged value model for template variables
pub mod value;
