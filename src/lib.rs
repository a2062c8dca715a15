mod allowed_headers;
mod allowed_methods;
pub mod config;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
mod options;
mod origin;
mod path_pattern;
mod policy;
mod policy_set;
mod result;
pub mod server;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsConfig, PolicyConfig};
pub use context::{RequestContext, RequestKind};
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginDecision};
pub use path_pattern::{PathPattern, PathPatternError, Specificity};
pub use policy::CorsPolicy;
pub use policy_set::PolicySet;
pub use result::{CorsDecision, Verdict};
pub use util::{equals_ignore_case, normalize_lower};
