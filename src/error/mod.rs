mod app;
mod config;
mod http;
mod template;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use template::TemplateError;
pub use validation::ValidationError;
