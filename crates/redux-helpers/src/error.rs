use thiserror::Error;

/// Errors raised while binding action creators
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error(
        "bindActionCreators expected an object or a function, instead received {received}. \
         Did you write \"import ActionCreators from\" instead of \"import * as ActionCreators from\"?"
    )]
    InvalidArgument { received: String },
}

pub type Result<T> = std::result::Result<T, BindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message_names_received_type() {
        let err = BindError::InvalidArgument {
            received: "null".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("instead received null."));
        assert!(message.contains("import * as ActionCreators from"));
    }
}
