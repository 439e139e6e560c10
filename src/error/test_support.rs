use super::{ConfigError, TemplateError, ValidationError};

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        ValidationError::TestExpectation { message }
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for TemplateError {
    fn from(message: &'static str) -> Self {
        TemplateError::TestExpectation { message }
    }
}

impl From<String> for TemplateError {
    fn from(value: String) -> Self {
        TemplateError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
