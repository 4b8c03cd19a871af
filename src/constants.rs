/// The `type` attribute given to sources built from a `srcSetWebp`
pub const WEBP_MIME_TYPE: &str = "image/webp";

/// Environment variable read by the binary to configure `env_logger`
pub const LOG_ENV: &str = "ART_DIRECTION_LOG";
