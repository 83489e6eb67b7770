//! Application Error - Unified error type for the application
//!
//! Defines the [`AppError`] struct.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// Message returned to clients in place of any server-side detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// アプリケーション統一エラー型
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - エラーメッセージ（5xx の場合はログ専用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::BadRequest, "All fields are required");
/// assert_eq!(err.public_message(), "All fields are required");
///
/// let err = AppError::new(ErrorKind::InternalServerError, "provider returned garbage");
/// assert_eq!(err.public_message(), "Internal server error");
/// ```
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl AppError {
    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// Full message, including server-side detail. For logs only.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message safe to send to a client.
    ///
    /// Server errors are collapsed to [`INTERNAL_ERROR_MESSAGE`].
    #[inline]
    pub fn public_message(&self) -> &str {
        if self.kind.is_server_error() {
            INTERNAL_ERROR_MESSAGE
        } else {
            &self.message
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {}
