//! Catalog State
//!
//! Local projection of the server-owned product list. Fetches replace the
//! cache wholesale; point mutations patch it by identifier. The admin product
//! form covers both create and edit.

use coop_client::{Category, Product, ProductInput};

/// Focused field of the admin product form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductField {
    #[default]
    Name,
    Price,
    Unit,
    Description,
    Image,
}

impl ProductField {
    pub fn next(self) -> Self {
        match self {
            ProductField::Name => ProductField::Price,
            ProductField::Price => ProductField::Unit,
            ProductField::Unit => ProductField::Description,
            ProductField::Description => ProductField::Image,
            ProductField::Image => ProductField::Name,
        }
    }
}

/// Admin product create/edit form
#[derive(Debug, Clone)]
pub struct ProductFormState {
    /// `Some` when editing an existing product, `None` when creating
    pub editing_id: Option<String>,
    pub name: String,
    pub price: String,
    pub unit: String,
    pub description: String,
    pub image: String,
    pub category: Category,
    pub available: bool,
    pub is_special: bool,
    pub focus: ProductField,
}

impl Default for ProductFormState {
    fn default() -> Self {
        Self {
            editing_id: None,
            name: String::new(),
            price: String::new(),
            unit: "kg".to_string(),
            description: String::new(),
            image: String::new(),
            category: Category::WholeChicken,
            available: true,
            is_special: false,
            focus: ProductField::default(),
        }
    }
}

impl ProductFormState {
    /// Prefill the form from an existing product for editing
    pub fn for_edit(product: &Product) -> Self {
        Self {
            editing_id: Some(product.id.clone()),
            name: product.name.clone(),
            price: format!("{}", product.price),
            unit: product.unit.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category,
            available: product.available,
            is_special: product.is_special,
            focus: ProductField::default(),
        }
    }

    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            ProductField::Name => &mut self.name,
            ProductField::Price => &mut self.price,
            ProductField::Unit => &mut self.unit,
            ProductField::Description => &mut self.description,
            ProductField::Image => &mut self.image,
        }
    }

    /// Cycle to the next category
    pub fn cycle_category(&mut self) {
        let idx = Category::ALL
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);
        self.category = Category::ALL[(idx + 1) % Category::ALL.len()];
    }

    /// Build the mutation body, `None` while required fields are invalid
    pub fn to_input(&self) -> Option<ProductInput> {
        let price: f64 = self.price.trim().parse().ok()?;
        if self.name.trim().is_empty() || price <= 0.0 {
            return None;
        }
        Some(ProductInput {
            name: self.name.trim().to_string(),
            category: self.category,
            price,
            unit: self.unit.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            available: self.available,
            is_special: self.is_special,
        })
    }
}

/// Catalog state
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    /// Cursor position in menu/admin product lists
    pub selected: usize,
    /// Menu category filter, `None` shows everything
    pub filter: Option<Category>,
    /// Admin product form, present while open
    pub form: Option<ProductFormState>,
}

impl CatalogState {
    /// Products visible on the menu under the active category filter
    pub fn filtered(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| self.filter.is_none_or(|f| p.category == f))
            .collect()
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.filtered().get(self.selected).copied()
    }
}
