//! # Domain Types
//!
//! Entities, drafts and joined views used throughout the inventory service.
//!
//! ## Entity Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                        ┌─────────────────┐        │
//! │  │    Category     │                        │    Provider     │        │
//! │  │  ─────────────  │                        │  ─────────────  │        │
//! │  │  id             │                        │  id             │        │
//! │  │  name           │                        │  first_name     │        │
//! │  └────────┬────────┘                        │  last_name      │        │
//! │           │ 1                               │  email          │        │
//! │           │                                 │  company_name   │        │
//! │           │ *     ┌─────────────────┐    * └────────┬────────┘        │
//! │           └──────►│      Good       │◄──────────────┘ 1               │
//! │                   │  ─────────────  │                                  │
//! │                   │  id, name, cost │                                  │
//! │                   │  category_num   │                                  │
//! │                   │  provider_num   │                                  │
//! │                   └────────┬────────┘                                  │
//! │                            │ 1                                          │
//! │                            │ *                                          │
//! │                   ┌────────▼────────┐                                  │
//! │                   │      Order      │                                  │
//! │                   │  full_name ...  │                                  │
//! │                   │  good_num       │                                  │
//! │                   └─────────────────┘                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Three Shapes per Entity
//! - Row (`Order`): exactly what the table stores.
//! - Draft (`OrderDraft`): the mutable fields as submitted, validated before
//!   any insert or update.
//! - Info (`OrderInfo`): the row flattened together with the names of the
//!   rows it references, as returned by lookups and lists.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::{
    validate_cost, validate_email, validate_id, validate_required, ValidationResult,
};

// =============================================================================
// Category
// =============================================================================

/// A category that goods are filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Fields of a category to be inserted or overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
}

impl CategoryDraft {
    /// Validates the draft: the name must not be empty.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("name", &self.name)
    }
}

// =============================================================================
// Provider
// =============================================================================

/// A supplier of goods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Provider {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company_name: String,
}

/// Fields of a provider to be inserted or overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company_name: String,
}

impl ProviderDraft {
    /// Validates the draft.
    ///
    /// ## Rules
    /// - first_name, last_name, email, company_name must not be empty
    /// - email must match [`crate::EMAIL_PATTERN`]
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("first_name", &self.first_name)?;
        validate_required("last_name", &self.last_name)?;
        validate_required("email", &self.email)?;
        validate_required("company_name", &self.company_name)?;
        validate_email(&self.email)
    }
}

// =============================================================================
// Good
// =============================================================================

/// A product kept in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Good {
    pub id: i64,
    pub name: String,
    /// Cost in cents.
    pub cost_cents: Money,
    /// Category this good is filed under.
    pub category_num: i64,
    /// Provider that supplies this good.
    pub provider_num: i64,
}

/// Fields of a good to be inserted or overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodDraft {
    pub name: String,
    pub cost: Money,
    pub category_id: i64,
    pub provider_id: i64,
}

impl GoodDraft {
    /// Validates the draft.
    ///
    /// ## Rules
    /// - name must not be empty
    /// - cost must not be negative
    /// - category and provider ids must be positive
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("name", &self.name)?;
        validate_cost(self.cost)?;
        validate_id("category", self.category_id)?;
        validate_id("provider", self.provider_id)
    }
}

/// A good joined with its category and provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct GoodInfo {
    pub id: i64,
    pub name: String,
    pub cost_cents: Money,
    /// Category name.
    pub category: String,
    pub category_id: i64,
    /// Provider company name.
    pub provider: String,
    pub provider_id: i64,
}

// =============================================================================
// Order
// =============================================================================

/// A customer order for a single good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub full_name: String,
    pub address: String,
    pub notes: Option<String>,
    pub email: String,
    pub status: String,
    /// The ordered good.
    pub good_num: i64,
}

/// Fields of an order to be inserted or overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub full_name: String,
    pub address: String,
    pub notes: Option<String>,
    pub email: String,
    pub status: String,
    pub good_id: i64,
}

impl OrderDraft {
    /// Validates the draft.
    ///
    /// ## Rules
    /// - full_name, address, email, status must not be empty
    /// - email must match [`crate::EMAIL_PATTERN`]
    /// - notes are free text and may be absent
    ///
    /// ## Example
    /// ```rust
    /// use inventory_core::{OrderDraft, ValidationError};
    ///
    /// let draft = OrderDraft {
    ///     full_name: String::new(),
    ///     address: "1 Main St".into(),
    ///     notes: None,
    ///     email: "jane@example.com".into(),
    ///     status: "pending".into(),
    ///     good_id: 3,
    /// };
    /// assert_eq!(draft.validate(), Err(ValidationError::required("full_name")));
    /// ```
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("full_name", &self.full_name)?;
        validate_required("address", &self.address)?;
        validate_required("email", &self.email)?;
        validate_required("status", &self.status)?;
        validate_email(&self.email)?;
        validate_id("good_id", self.good_id)
    }
}

/// An order joined with the good it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderInfo {
    pub id: i64,
    /// Customer full name.
    pub name: String,
    pub address: String,
    pub notes: Option<String>,
    pub email: String,
    pub status: String,
    /// Name of the ordered good.
    pub good: String,
    pub good_id: i64,
}

// =============================================================================
// Summaries
// =============================================================================

/// Goods count and total cost of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CategorySummary {
    pub name: String,
    pub goods_count: i64,
    pub total_cost_cents: Money,
}

/// Number of orders and the summed cost of the ordered goods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderTotals {
    pub orders_count: i64,
    pub total_cost_cents: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
