//! Catalog actions

use coop_client::{Product, ProductInput};

/// Actions for the catalog slice
#[derive(Debug, Clone)]
pub enum CatalogAction {
    // === Fetches (replace the cache wholesale) ===
    /// Public browsing list; backend already filters unavailable products
    FetchPublic,
    /// Unfiltered admin list, bearer-authenticated
    FetchAdmin,
    Loaded(Vec<Product>),
    LoadFailed(String),

    // === Admin mutations (patch the cache by identifier) ===
    Create(ProductInput),
    Update { id: String, input: ProductInput },
    Delete { id: String },
    /// Create/update fulfilled: append if new, replace if existing
    Upserted(Product),
    /// Delete fulfilled
    Removed { id: String },
    MutationFailed(String),

    // === Menu navigation ===
    SelectNext,
    SelectPrevious,
    /// Cycle the menu category filter (all -> each category -> all)
    CycleFilter,

    // === Admin product form ===
    OpenCreateForm,
    /// Open the form prefilled from the selected product
    OpenEditForm,
    CloseForm,
    FormChar(char),
    FormBackspace,
    FormNextField,
    FormCycleCategory,
    FormToggleAvailable,
    FormToggleSpecial,
    /// Validate and submit the form as a create or update
    FormSubmit,
}
