//! # inventory-core: Pure Domain Logic for the Inventory Service
//!
//! This crate holds the entities of the inventory system and the rules that
//! guard them. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Inventory Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Handlers (apps/web)                     │   │
//! │  │     /goods  /providers  /orders  /categories                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ inventory-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │ validation│                  │   │
//! │  │   │  Order    │  │   Money   │  │   email   │                  │   │
//! │  │   │  Good ... │  │  parsing  │  │  required │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 inventory-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities (Category, Provider, Good, Order), drafts and joined views
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::OrderDraft;
//!
//! let draft = OrderDraft {
//!     full_name: "Jane Doe".to_string(),
//!     address: "1 Main St".to_string(),
//!     notes: None,
//!     email: "jane@example.com".to_string(),
//!     status: "pending".to_string(),
//!     good_id: 3,
//! };
//! assert!(draft.validate().is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

/// Email pattern shared by orders and providers.
///
/// `local@domain.tld`, where every part is made of word characters,
/// dots and hyphens.
pub const EMAIL_PATTERN: &str = r"^[-\w.]+@[-\w.]+\.[-\w]+$";
