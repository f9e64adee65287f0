mod error;
mod extract;
mod health;
mod root;

pub use error::{ErrorResponse, error_response};
pub use extract::{ExtractTextRequest, ExtractTextResponse, extract_text_handler};
pub use health::{HealthResponse, health_handler};
pub use root::{ServiceInfo, root_handler};
