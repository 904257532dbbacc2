/**
 * Authentication Handler Types
 *
 * Request and response bodies for the user endpoints. Every body is
 * wrapped in a `user` key. Request fields are optional at the serde level
 * so that missing fields surface as "can't be blank" validation messages
 * rather than deserialization failures.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// `POST /api/users` body
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub user: RegisterUser,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// `POST /api/users/login` body
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub user: LoginUser,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginUser {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// `PUT /api/user` body; absent fields are left unchanged
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub user: UpdateUser,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.bio.is_none()
            && self.image.is_none()
    }
}

/// The authenticated user as returned to its owner
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserBody {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

/// `{"user": {...}}`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub user: UserBody,
}

impl UserResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            user: UserBody {
                email: user.email,
                token,
                username: user.username,
                bio: user.bio,
                image: user.image,
            },
        }
    }
}
