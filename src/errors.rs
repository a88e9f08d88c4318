use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    #[error("invalid {name}: {value} (expected a finite positive number)")]
    InvalidParameter {
        name: &'static str,
        value: f32,
    },
}

pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<f32, MetricError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MetricError::InvalidParameter { name, value })
    }
}
