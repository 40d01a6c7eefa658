pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ORIGIN: &str = "Origin";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

pub mod origin {
    /// Allow-list entry that admits every origin.
    pub const WILDCARD: &str = "*";
    /// Separator between entries of the configured allow-list.
    pub const SEPARATOR: char = ',';
}

/// Status forced onto preflight responses that terminate the pipeline.
pub const PREFLIGHT_SUCCESS_STATUS: u16 = 200;

/// Literal value emitted in `Access-Control-Allow-Credentials`.
pub const CREDENTIALS_TRUE: &str = "true";
