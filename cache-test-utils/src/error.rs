use thiserror::Error;

/// Error returned by test setup, fixtures and tests using them.
///
/// Repository calls in tests return `DbErr`, so `?` works directly in a test returning
/// `Result<(), TestError>`.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
