pub const INVALID_INPUT: &str = "invalid_input";
pub const INVALID_CREDENTIAL: &str = "invalid_credential";
pub const UPSTREAM_FAILED: &str = "upstream_failed";
pub const INTERNAL_ERROR: &str = "internal_error";

/// JSON-RPC code for methods the server does not handle.
pub const METHOD_NOT_FOUND: i64 = -32601;
