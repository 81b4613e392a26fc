use demand_forecast::error::ForecastError;
use demand_forecast::models::LinearModel;
use demand_forecast::ForecastConfig;
use demand_math::MathError;
use std::io;

#[test]
fn test_error_conversion() {
    // IO error conversion
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let forecast_error = ForecastError::from(io_error);
    assert!(matches!(forecast_error, ForecastError::Io(_)));

    // Rolling window errors
    let math_error = MathError::InsufficientData("empty window".to_string());
    let forecast_error = ForecastError::from(math_error);
    assert!(matches!(
        forecast_error,
        ForecastError::Math(MathError::InsufficientData(_))
    ));

    // JSON error conversion
    let json_error = serde_json::from_str::<f64>("nope").unwrap_err();
    assert!(matches!(
        ForecastError::from(json_error),
        ForecastError::Json(_)
    ));
}

#[test]
fn test_error_display() {
    let error = ForecastError::InvalidInput("horizon must be at least one hour".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid input: horizon must be at least one hour"
    );

    let error = ForecastError::model_invocation(3, "schema mismatch");
    assert_eq!(
        error.to_string(),
        "Model invocation failed at step 3: schema mismatch"
    );

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error_string = ForecastError::from(io_error).to_string();
    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));
}

#[test]
fn test_missing_files_surface_io_errors() {
    assert!(matches!(
        LinearModel::from_json_file("/nonexistent/model.json"),
        Err(ForecastError::Io(_))
    ));
    assert!(matches!(
        ForecastConfig::from_json_file("/nonexistent/config.json"),
        Err(ForecastError::Io(_))
    ));
}
