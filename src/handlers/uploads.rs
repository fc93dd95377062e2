use crate::errors::AppError;

// POST /upload-report
pub async fn upload_report() -> AppError {
    AppError::FeatureDisabled(
        "Health report upload and analysis is disabled in this free deployment to fit platform limitations."
            .to_string(),
    )
}

// POST /upload-smartwatch-data
pub async fn upload_smartwatch_data() -> AppError {
    AppError::FeatureDisabled(
        "Smartwatch data upload and analysis is disabled in this free deployment to fit platform limitations."
            .to_string(),
    )
}
