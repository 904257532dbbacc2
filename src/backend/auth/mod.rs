//! Authentication Module
//!
//! User accounts, session tokens and the `/api/users` and `/api/user`
//! handlers.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Token issuing and verification
//! ├── validation.rs   - Username, email and password rules
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Current user**: `Authorization: Token <jwt>` → middleware resolves the user
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256, signed with the configured secret, 7 days by default
//! - Invalid credentials return 401 without saying which part was wrong

/// User data and database operations
pub mod users;

/// Session token management
pub mod sessions;

/// Account field validation
pub mod validation;

/// HTTP handlers
pub mod handlers;

pub use handlers::{get_current_user, login, register, update_current_user};
pub use sessions::{Claims, TokenService};
pub use users::User;
