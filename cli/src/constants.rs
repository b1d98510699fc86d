// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "sqlweave";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".sqlweave";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "sqlweave.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "SQLWEAVE_CONFIG";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for the target dialect
pub const ENV_DIALECT: &str = "SQLWEAVE_DIALECT";

/// Environment variable for the output format
pub const ENV_OUTPUT: &str = "SQLWEAVE_OUTPUT";

/// Environment variable for the request size limit
pub const ENV_MAX_REQUEST_BYTES: &str = "SQLWEAVE_MAX_REQUEST_BYTES";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "SQLWEAVE_LOG";

// =============================================================================
// Defaults
// =============================================================================

/// Default maximum request size in bytes
pub const DEFAULT_MAX_REQUEST_BYTES: usize = sqlweave::DEFAULT_MAX_REQUEST_BYTES;

/// Input path that selects standard input
pub const STDIN_PATH: &str = "-";
