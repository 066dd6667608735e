//! Input validation applied before an input set reaches the evaluator.

/// Validation errors raised at intake.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be between {min} and {max} (found {value})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} is inconsistent with the other measurements: {reason}")]
    Inconsistent {
        field: &'static str,
        reason: &'static str,
    },
}

impl InputError {
    pub fn field(&self) -> &'static str {
        match self {
            InputError::NotFinite { field }
            | InputError::OutOfRange { field, .. }
            | InputError::Inconsistent { field, .. } => field,
        }
    }
}

/// Implemented by every calculator input so intake can reject bad forms.
pub trait Validate {
    fn validate(&self) -> Result<(), InputError>;
}

/// Inclusive numeric range accepted for one form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    pub fn check(&self, value: f64) -> Result<(), InputError> {
        if !value.is_finite() {
            return Err(InputError::NotFinite { field: self.field });
        }

        if value < self.min || value > self.max {
            return Err(InputError::OutOfRange {
                field: self.field,
                min: self.min,
                max: self.max,
                value,
            });
        }

        Ok(())
    }

    pub fn check_optional(&self, value: Option<f64>) -> Result<(), InputError> {
        value.map_or(Ok(()), |value| self.check(value))
    }
}
