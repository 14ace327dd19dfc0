//! Common constants used throughout the archetype application.

/// Default name of the transformations spec file
pub const DEFAULT_TRANSFORMATIONS_FILE: &str = "transformations.yml";

/// Variable holding the source directory
pub const SOURCE_VAR: &str = "source";

/// Variable holding the destination directory
pub const DESTINATION_VAR: &str = "destination";

/// Keyword opening a marked region
pub const BEGIN_KEYWORD: &str = "BEGIN";

/// Keyword closing a marked region
pub const END_KEYWORD: &str = "END";

/// Prefix of the staging directory created next to the destination
pub const STAGING_PREFIX: &str = ".archetype-";
