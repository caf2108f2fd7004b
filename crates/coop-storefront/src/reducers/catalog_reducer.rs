//! Catalog Reducer
//!
//! Fetches replace the product cache wholesale; admin mutations patch it by
//! identifier. Form submission itself is translated into a create/update by
//! the catalog middleware; the reducer only edits form state.

use crate::actions::CatalogAction;
use crate::state::{CatalogState, ProductFormState};
use coop_client::Category;

/// Reduce catalog actions
pub fn reduce_catalog(mut state: CatalogState, action: &CatalogAction) -> CatalogState {
    match action {
        CatalogAction::FetchPublic | CatalogAction::FetchAdmin => {
            state.loading = true;
            state.error = None;
        }

        CatalogAction::Loaded(products) => {
            state.loading = false;
            state.error = None;
            state.products = products.clone();
            clamp_selection(&mut state);
            log::info!("Catalog: loaded {} products", state.products.len());
        }

        CatalogAction::LoadFailed(message) => {
            state.loading = false;
            state.error = Some(message.clone());
        }

        CatalogAction::Upserted(product) => {
            state.loading = false;
            if let Some(existing) = state.products.iter_mut().find(|p| p.id == product.id) {
                *existing = product.clone();
            } else {
                state.products.push(product.clone());
            }
        }

        CatalogAction::Removed { id } => {
            state.loading = false;
            state.products.retain(|p| p.id != *id);
            clamp_selection(&mut state);
        }

        CatalogAction::MutationFailed(message) => {
            state.loading = false;
            state.error = Some(message.clone());
        }

        CatalogAction::SelectNext => {
            let len = state.filtered().len();
            if len > 0 {
                state.selected = (state.selected + 1) % len;
            }
        }

        CatalogAction::SelectPrevious => {
            let len = state.filtered().len();
            if len > 0 {
                state.selected = state.selected.checked_sub(1).unwrap_or(len - 1);
            }
        }

        CatalogAction::CycleFilter => {
            state.filter = match state.filter {
                None => Some(Category::ALL[0]),
                Some(current) => Category::ALL
                    .iter()
                    .position(|c| *c == current)
                    .and_then(|idx| Category::ALL.get(idx + 1))
                    .copied(),
            };
            state.selected = 0;
        }

        CatalogAction::OpenCreateForm => {
            state.form = Some(ProductFormState::default());
        }

        CatalogAction::OpenEditForm => {
            if let Some(product) = state.selected_product() {
                state.form = Some(ProductFormState::for_edit(product));
            }
        }

        CatalogAction::CloseForm => {
            state.form = None;
        }

        CatalogAction::FormChar(c) => {
            if let Some(form) = state.form.as_mut() {
                form.field_mut().push(*c);
            }
        }

        CatalogAction::FormBackspace => {
            if let Some(form) = state.form.as_mut() {
                form.field_mut().pop();
            }
        }

        CatalogAction::FormNextField => {
            if let Some(form) = state.form.as_mut() {
                form.focus = form.focus.next();
            }
        }

        CatalogAction::FormCycleCategory => {
            if let Some(form) = state.form.as_mut() {
                form.cycle_category();
            }
        }

        CatalogAction::FormToggleAvailable => {
            if let Some(form) = state.form.as_mut() {
                form.available = !form.available;
            }
        }

        CatalogAction::FormToggleSpecial => {
            if let Some(form) = state.form.as_mut() {
                form.is_special = !form.is_special;
            }
        }

        // Handled by the catalog middleware
        CatalogAction::Create(_)
        | CatalogAction::Update { .. }
        | CatalogAction::Delete { .. }
        | CatalogAction::FormSubmit => {}
    }

    state
}

fn clamp_selection(state: &mut CatalogState) {
    let len = state.filtered().len();
    if state.selected >= len {
        state.selected = len.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coop_client::Product;

    fn product(id: &str, category: Category) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            category,
            price: 100.0,
            unit: "kg".to_string(),
            description: String::new(),
            image: String::new(),
            available: true,
            is_special: false,
        }
    }

    fn loaded(products: Vec<Product>) -> CatalogState {
        reduce_catalog(CatalogState::default(), &CatalogAction::Loaded(products))
    }

    #[test]
    fn loaded_replaces_the_cache_wholesale() {
        let state = loaded(vec![product("p1", Category::Wings)]);
        let state = reduce_catalog(
            state,
            &CatalogAction::Loaded(vec![
                product("p2", Category::Boneless),
                product("p3", Category::CurryCut),
            ]),
        );
        assert_eq!(state.products.len(), 2);
        assert!(state.products.iter().all(|p| p.id != "p1"));
        assert!(!state.loading);
    }

    #[test]
    fn upsert_replaces_existing_by_id_and_appends_new() {
        let state = loaded(vec![product("p1", Category::Wings)]);

        let mut edited = product("p1", Category::Wings);
        edited.price = 250.0;
        let state = reduce_catalog(state, &CatalogAction::Upserted(edited));
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].price, 250.0);

        let state = reduce_catalog(
            state,
            &CatalogAction::Upserted(product("p2", Category::Boneless)),
        );
        assert_eq!(state.products.len(), 2);
    }

    #[test]
    fn removed_deletes_by_id() {
        let state = loaded(vec![
            product("p1", Category::Wings),
            product("p2", Category::Boneless),
        ]);
        let state = reduce_catalog(
            state,
            &CatalogAction::Removed {
                id: "p1".to_string(),
            },
        );
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].id, "p2");
    }

    #[test]
    fn fetch_enters_loading_and_failure_keeps_old_products() {
        let state = loaded(vec![product("p1", Category::Wings)]);
        let state = reduce_catalog(state, &CatalogAction::FetchPublic);
        assert!(state.loading);

        let state = reduce_catalog(state, &CatalogAction::LoadFailed("down".to_string()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("down"));
        assert_eq!(state.products.len(), 1);
    }

    #[test]
    fn filter_cycles_through_all_categories_back_to_none() {
        let mut state = CatalogState::default();
        assert!(state.filter.is_none());
        for expected in Category::ALL {
            state = reduce_catalog(state, &CatalogAction::CycleFilter);
            assert_eq!(state.filter, Some(expected));
        }
        state = reduce_catalog(state, &CatalogAction::CycleFilter);
        assert!(state.filter.is_none());
    }

    #[test]
    fn filtered_restricts_selection_scope() {
        let mut state = loaded(vec![
            product("p1", Category::Wings),
            product("p2", Category::Boneless),
            product("p3", Category::Wings),
        ]);
        state.filter = Some(Category::Wings);
        assert_eq!(state.filtered().len(), 2);

        state = reduce_catalog(state, &CatalogAction::SelectNext);
        assert_eq!(state.selected_product().map(|p| p.id.as_str()), Some("p3"));
        state = reduce_catalog(state, &CatalogAction::SelectNext);
        assert_eq!(state.selected_product().map(|p| p.id.as_str()), Some("p1"));
    }

    #[test]
    fn edit_form_prefills_from_selected_product() {
        let state = loaded(vec![product("p1", Category::Wings)]);
        let state = reduce_catalog(state, &CatalogAction::OpenEditForm);
        let form = state.form.as_ref().unwrap();
        assert_eq!(form.editing_id.as_deref(), Some("p1"));
        assert_eq!(form.name, "Product p1");
        assert_eq!(form.price, "100");
    }

    #[test]
    fn form_validation_rejects_empty_name_and_bad_price() {
        let mut form = ProductFormState::default();
        form.price = "100".to_string();
        assert!(form.to_input().is_none());

        form.name = "Wings".to_string();
        form.price = "zero".to_string();
        assert!(form.to_input().is_none());

        form.price = "-5".to_string();
        assert!(form.to_input().is_none());

        form.price = "180.5".to_string();
        let input = form.to_input().unwrap();
        assert_eq!(input.price, 180.5);
    }
}
