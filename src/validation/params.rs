// Request payload validation

use crate::core::error::{AuthError, ResourceError};
use crate::models::api::{
    CreateAppointmentRequest, CreateClientRequest, CreateInvoiceRequest, CreateServiceRequest,
    CreateUserRequest, CreateVehicleRequest, LoginRequest,
};

/// Bcrypt truncates beyond 72 bytes, so longer passwords are rejected
/// instead of silently weakened.
pub const MAX_PASSWORD_LENGTH: usize = 72;
pub const MIN_PASSWORD_LENGTH: usize = 8;

const MIN_VEHICLE_YEAR: u16 = 1900;
const MAX_VEHICLE_YEAR: u16 = 2100;

/// Syntactic email check: one `@`, non-empty local part, dotted domain,
/// no whitespace. Deliverability is not this layer's problem.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() {
            return Err(AuthError::Validation("email is required".to_string()));
        }

        if !is_valid_email(&self.email) {
            return Err(AuthError::Validation("email is not valid".to_string()));
        }

        if self.password.is_empty() {
            return Err(AuthError::Validation("password is required".to_string()));
        }

        Ok(())
    }
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), ResourceError> {
        if !is_valid_email(&self.email) {
            return Err(ResourceError::Validation("email is not valid".to_string()));
        }

        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(ResourceError::Validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        if self.password.len() > MAX_PASSWORD_LENGTH {
            return Err(ResourceError::Validation(format!(
                "password must be at most {} characters",
                MAX_PASSWORD_LENGTH
            )));
        }

        if self.name.trim().is_empty() {
            return Err(ResourceError::Validation("name is required".to_string()));
        }

        Ok(())
    }
}

impl CreateClientRequest {
    pub fn validate(&self) -> Result<(), ResourceError> {
        if self.name.trim().is_empty() {
            return Err(ResourceError::Validation("name is required".to_string()));
        }

        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                return Err(ResourceError::Validation("email is not valid".to_string()));
            }
        }

        Ok(())
    }
}

impl CreateVehicleRequest {
    pub fn validate(&self) -> Result<(), ResourceError> {
        if self.plate.trim().is_empty() {
            return Err(ResourceError::Validation("plate is required".to_string()));
        }

        if self.make.trim().is_empty() || self.model.trim().is_empty() {
            return Err(ResourceError::Validation(
                "make and model are required".to_string(),
            ));
        }

        if !(MIN_VEHICLE_YEAR..=MAX_VEHICLE_YEAR).contains(&self.year) {
            return Err(ResourceError::Validation(format!(
                "year must be between {} and {}",
                MIN_VEHICLE_YEAR, MAX_VEHICLE_YEAR
            )));
        }

        Ok(())
    }
}

impl CreateAppointmentRequest {
    pub fn validate(&self) -> Result<(), ResourceError> {
        if self.notes.len() > 2000 {
            return Err(ResourceError::Validation(
                "notes must be at most 2000 characters".to_string(),
            ));
        }

        Ok(())
    }
}

impl CreateInvoiceRequest {
    pub fn validate(&self) -> Result<(), ResourceError> {
        if self.total_cents < 0 {
            return Err(ResourceError::Validation(
                "total_cents must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

impl CreateServiceRequest {
    pub fn validate(&self) -> Result<(), ResourceError> {
        if self.name.trim().is_empty() {
            return Err(ResourceError::Validation("name is required".to_string()));
        }

        if self.price_cents < 0 {
            return Err(ResourceError::Validation(
                "price_cents must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}
