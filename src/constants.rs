//! Common constants used throughout the nfogen application.

/// Name of the fixed placeholder an artwork template wraps the body with
pub const ART_PLACEHOLDER: &str = "nfo";

/// Persistent configuration file name
pub const CONFIG_FILE: &str = "config.yaml";

/// Extension used by NFO templates and artwork files
pub const TEMPLATE_EXT: &str = "nfo";

/// Extension used by description (BBCode) templates
pub const DESCRIPTION_EXT: &str = "txt";
