//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Current user read and update handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users
//! - **`login`** - POST /api/users/login
//! - **`get_current_user`** - GET /api/user
//! - **`update_current_user`** - PUT /api/user

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handlers
pub mod me;

pub use login::login;
pub use me::{get_current_user, update_current_user};
pub use register::register;
pub use types::{LoginRequest, RegisterRequest, UpdateUserRequest, UserResponse};
