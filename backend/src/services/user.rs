//! User service: authentication flow and account management

use crate::auth::{PasswordService, TokenService};
use crate::error::ApiError;
use crate::repositories::{UpdateUserFields, UserRepository};
use marina_shared::errors::AuthError;
use marina_shared::types::{CreateUserRequest, UpdateUserRequest, UserProfile};
use marina_shared::validation::{
    validate_email, validate_password, validate_user_name, FieldErrors,
};
use sqlx::PgPool;
use uuid::Uuid;

/// The one login-failure outcome
///
/// Unknown email and wrong password must be indistinguishable to the
/// client, so both paths construct the response from here.
fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized(AuthError::InvalidCredentials.to_string())
}

/// User service for account and authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    pub async fn register(pool: &PgPool, req: CreateUserRequest) -> Result<UserProfile, ApiError> {
        let mut errors = FieldErrors::new();
        errors.check("name", validate_user_name(&req.name));
        errors.check("email", validate_email(&req.email));
        errors.check("password", validate_password(&req.password));
        errors.finish().map_err(ApiError::Validation)?;

        if UserRepository::email_exists(pool, &req.email).await? {
            return Err(ApiError::DuplicateKey("email".to_string()));
        }

        // Hash on the blocking pool; the raw password is dropped here
        let password_hash = PasswordService::hash_async(req.password)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, &req.name, &req.email, &password_hash).await?;

        Ok(profile_of(user))
    }

    /// Authenticate with email and password, issuing a session token
    ///
    /// The lookup is a case-sensitive exact match. A hashing-layer
    /// failure surfaces as an internal error, never as a credential
    /// rejection.
    pub async fn authenticate(
        pool: &PgPool,
        tokens: &TokenService,
        email: &str,
        password: &str,
    ) -> Result<(UserProfile, String), ApiError> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or_else(invalid_credentials)?;

        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash.clone())
                .await
                .map_err(ApiError::Internal)?;

        if !valid {
            return Err(invalid_credentials());
        }

        let profile = profile_of(user);
        let token = tokens.issue(&profile).map_err(ApiError::Internal)?;

        Ok((profile, token))
    }

    /// Get a user profile by ID
    pub async fn get_profile(pool: &PgPool, id: Uuid) -> Result<UserProfile, ApiError> {
        let user = UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(profile_of(user))
    }

    /// List all user profiles
    pub async fn list(pool: &PgPool) -> Result<Vec<UserProfile>, ApiError> {
        let users = UserRepository::find_all(pool).await?;
        Ok(users.into_iter().map(profile_of).collect())
    }

    /// Partial update; the password is re-hashed only when supplied
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: UpdateUserRequest,
    ) -> Result<UserProfile, ApiError> {
        let mut errors = FieldErrors::new();
        if let Some(name) = &req.name {
            errors.check("name", validate_user_name(name));
        }
        if let Some(email) = &req.email {
            errors.check("email", validate_email(email));
        }
        if let Some(password) = &req.password {
            errors.check("password", validate_password(password));
        }
        errors.finish().map_err(ApiError::Validation)?;

        let password_hash = match req.password {
            Some(password) => Some(
                PasswordService::hash_async(password)
                    .await
                    .map_err(ApiError::Internal)?,
            ),
            None => None,
        };

        let fields = UpdateUserFields {
            name: req.name,
            email: req.email,
            password_hash,
        };

        let user = UserRepository::update(pool, id, fields)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(profile_of(user))
    }

    /// Delete a user by ID
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = UserRepository::delete(pool, id).await?;
        if !deleted {
            return Err(ApiError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}

/// Project a stored record onto the public profile, dropping the hash
fn profile_of(user: crate::repositories::user::UserRecord) -> UserProfile {
    UserProfile {
        id: user.id.to_string(),
        name: user.name,
        email: user.email,
        created_at: user.created_at,
    }
}
