//! Route Configuration Module
//!
//! - **`router`** - Router assembly, fallback and layers
//! - **`api_routes`** - The `/api` route table
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - API endpoint table
//! ```

/// Main router creation
pub mod router;

/// API endpoint table
pub mod api_routes;

pub use router::create_router;
