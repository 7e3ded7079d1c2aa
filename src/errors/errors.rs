use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal syntax error. Parsing stops at the first one.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The rendering of the token that was received instead.
    pub fn get_token(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedKeyword { token, .. }
            | ErrorImpl::ExpectedCharacter { token, .. }
            | ErrorImpl::ExpectedIdentifier { token }
            | ErrorImpl::ExpectedExpression { token }
            | ErrorImpl::ExpectedBody { token }
            | ErrorImpl::UnexpectedToken { token }
            | ErrorImpl::NestingTooDeep { token } => token,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedKeyword { .. } => "ExpectedKeyword",
            ErrorImpl::ExpectedCharacter { .. } => "ExpectedCharacter",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::ExpectedBody { .. } => "ExpectedBody",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedKeyword { keyword, token } => ErrorTip::Suggestion(format!(
                "expected keyword `{}`, received `{}`",
                keyword, token
            )),
            ErrorImpl::ExpectedCharacter { character, token } => ErrorTip::Suggestion(format!(
                "expected `{}`, received `{}`",
                character, token
            )),
            ErrorImpl::ExpectedIdentifier { token } => ErrorTip::Suggestion(format!(
                "expected a variable name after `set`, received `{}`",
                token
            )),
            ErrorImpl::ExpectedExpression { token } => {
                ErrorTip::Suggestion(format!("expected an expression, received `{}`", token))
            }
            ErrorImpl::ExpectedBody { token } => ErrorTip::Suggestion(format!(
                "expected a block or a statement, received `{}`",
                token
            )),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "expressions or bodies are nested too deeply, split them up",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("keyword {keyword:?} expected, received {token:?}")]
    ExpectedKeyword { keyword: String, token: String },
    #[error("{character:?} expected, received {token:?}")]
    ExpectedCharacter { character: char, token: String },
    #[error("identifier expected, received {token:?}")]
    ExpectedIdentifier { token: String },
    #[error("expression expected, received {token:?}")]
    ExpectedExpression { token: String },
    #[error("block or statement expected, received {token:?}")]
    ExpectedBody { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("nesting too deep at {token:?}")]
    NestingTooDeep { token: String },
}
