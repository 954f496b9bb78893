pub mod method_not_allowed;
pub mod metrics;
pub mod security_headers;
pub mod tracing;

pub use self::method_not_allowed::method_not_allowed_middleware;
pub use self::metrics::metrics_middleware;
pub use self::security_headers::security_headers_middleware;
pub use self::tracing::{REQUEST_ID_HEADER, request_id_middleware};
