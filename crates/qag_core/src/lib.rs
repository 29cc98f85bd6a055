pub mod domain;
pub mod error;
pub mod highlight;
pub mod locate;
pub mod normalize;
pub mod report;
pub mod review;
pub mod validate;
pub mod writer;

#[cfg(test)]
mod tests {
    use super::error::AppError;

    #[test]
    fn app_error_is_structured() {
        let err = AppError::new("DATASET_WRITE_FAILED", "write failed").with_retryable(false);
        assert_eq!(err.code, "DATASET_WRITE_FAILED");
        assert_eq!(err.message, "write failed");
        assert_eq!(err.retryable, false);
    }
}
