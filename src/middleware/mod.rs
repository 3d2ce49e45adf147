pub mod cors;
pub mod error_handler;
pub mod request_id;

pub use cors::build_cors;
pub use error_handler::{json_error_handler, log_error};
pub use request_id::{RequestId, RequestIdValue, REQUEST_ID_HEADER};
