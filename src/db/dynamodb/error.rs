//! AWS SDK error mapping.
//!
//! Every backend failure surfaces as [`AppError::Database`], except a
//! conditional-write rejection, which maps to [`AppError::Conflict`] so
//! callers can distinguish it if a conditional expression is ever used.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;

use crate::error::AppError;

/// Map a PutItem SDK error.
pub fn map_put_error<R: Debug + Send + Sync + 'static>(err: SdkError<PutItemError, R>) -> AppError {
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => AppError::Conflict {
            code: "conflict",
            message: "Conditional write failed".to_string(),
            details: None,
        },
        err => AppError::Database(format!("PutItem failed: {:?}", err)),
    }
}

/// Map any other SDK error (get, query, scan, delete, batch write).
pub fn map_sdk_error<E: Debug, R: Debug>(operation: &str, err: SdkError<E, R>) -> AppError {
    AppError::Database(format!("{} failed: {:?}", operation, err))
}
