use url::Url;

use crate::{
    error::AdminError,
    models::{CreateUserRequest, NewUser, UpdatePricesRequest, UpdateUserRequest, UserPatch, UserType},
};

pub const MAX_USERNAME_LEN: usize = 64;

pub fn price(field: &str, value: f64) -> Result<f64, AdminError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AdminError::validation(format!("{field} must be a positive number")));
    }
    Ok(value)
}

pub fn prices(update: &UpdatePricesRequest) -> Result<(), AdminError> {
    let fields = [
        ("gasolinePrice", update.gasoline_price),
        ("dieselPrice", update.diesel_price),
        ("electricityPrice", update.electricity_price),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            price(field, value)?;
        }
    }
    Ok(())
}

pub fn username(value: &str) -> Result<String, AdminError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AdminError::validation("username must not be empty"));
    }
    if trimmed.chars().count() > MAX_USERNAME_LEN {
        return Err(AdminError::validation(format!(
            "username must be at most {MAX_USERNAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

pub fn user_type(value: &str) -> Result<UserType, AdminError> {
    value.parse::<UserType>().map_err(AdminError::Validation)
}

pub fn new_user(payload: CreateUserRequest) -> Result<NewUser, AdminError> {
    Ok(NewUser {
        username: username(&payload.username)?,
        user_type: user_type(&payload.user_type)?,
    })
}

pub fn user_patch(payload: UpdateUserRequest) -> Result<UserPatch, AdminError> {
    Ok(UserPatch {
        username: payload.username.as_deref().map(username).transpose()?,
        user_type: payload.user_type.as_deref().map(user_type).transpose()?,
    })
}

pub fn broker_url(value: &str) -> Result<(), AdminError> {
    let parsed = Url::parse(value.trim())
        .map_err(|_| AdminError::validation("brokerUrl must be a valid URL"))?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(AdminError::validation("brokerUrl must include a host"));
    }
    Ok(())
}
