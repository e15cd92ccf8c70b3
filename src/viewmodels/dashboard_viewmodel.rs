// ============================================================================
// DASHBOARD VIEWMODEL - Paginación, diálogos y coordinación de refrescos
// ============================================================================
// Estado local de la vista (página, diálogo de borrado, diálogo de edición).
// Tras borrar se recarga el listado SIEMPRE, haya ido bien o mal.
// Tras editar se recarga solo si el servidor lo aceptó.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::error::ApiError;
use crate::models::{Product, ProductPayload};
use crate::state::ProductListState;
use crate::utils::constants::PRODUCTS_PER_PAGE;
use crate::viewmodels::ProductViewModel;

/// Qué pinta el listado. `Loading` gana sobre todo lo demás.
#[derive(Clone, PartialEq, Debug)]
pub enum ListDisplay {
    Loading,
    Error(String),
    Empty,
    Populated(Vec<Product>),
}

impl ListDisplay {
    pub fn from_state(state: &ProductListState, pagination: &Pagination) -> Self {
        if state.loading {
            ListDisplay::Loading
        } else if let Some(error) = &state.error {
            ListDisplay::Error(error.clone())
        } else if state.items.is_empty() {
            ListDisplay::Empty
        } else {
            ListDisplay::Populated(pagination.slice(&state.items).to_vec())
        }
    }
}

/// Paginación en cliente, páginas empezando en 1
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PRODUCTS_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn page_count(&self, total: usize) -> usize {
        if self.per_page == 0 {
            return 0;
        }
        (total + self.per_page - 1) / self.per_page
    }

    /// Los elementos de la página actual. Fuera de rango: vacío.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.page.saturating_sub(1).saturating_mul(self.per_page);
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.per_page).min(items.len());
        &items[start..end]
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// La barra se pinta también si la página quedó fuera de rango (p.ej. tras filtrar)
    pub fn shows_navigation(&self, total: usize) -> bool {
        self.page_count(total) > 1 || self.page > 1
    }
}

/// Estado de la vista del dashboard
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DashboardState {
    pub pagination: Pagination,
    pub delete_target: Option<String>,
    pub edit_target: Option<Product>,
}

impl DashboardState {
    pub fn open_delete(&mut self, id: impl Into<String>) {
        self.delete_target = Some(id.into());
    }

    pub fn close_delete(&mut self) {
        self.delete_target = None;
    }

    /// El diálogo de edición trabaja sobre una copia del producto
    pub fn open_edit(&mut self, product: &Product) {
        self.edit_target = Some(product.clone());
    }

    pub fn close_edit(&mut self) {
        self.edit_target = None;
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum DashboardAction {
    GoTo(usize),
    OpenDelete(String),
    CloseDelete,
    OpenEdit(Product),
    CloseEdit,
}

/// Cada acción se aplica sobre el estado vigente, no sobre el del render que la creó
impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: DashboardAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::GoTo(page) => next.pagination.go_to(page),
            DashboardAction::OpenDelete(id) => next.open_delete(id),
            DashboardAction::CloseDelete => next.close_delete(),
            DashboardAction::OpenEdit(product) => next.open_edit(&product),
            DashboardAction::CloseEdit => next.close_edit(),
        }
        Rc::new(next)
    }
}

pub struct DashboardViewModel {
    products: Rc<ProductViewModel>,
}

impl DashboardViewModel {
    pub fn new(products: Rc<ProductViewModel>) -> Self {
        Self { products }
    }

    pub fn image_base_url(&self) -> &str {
        self.products.image_base_url()
    }

    /// Al montar el dashboard
    pub async fn load(&self) {
        if let Err(e) = self.products.fetch_all().await {
            log::warn!("⚠️ Carga inicial del dashboard: {}", e);
        }
    }

    /// Borrar y recargar exactamente una vez
    pub async fn confirm_delete(&self, id: &str) -> Result<String, ApiError> {
        log::info!("🗑️ Eliminando producto {}", id);
        let result = self.products.delete(id).await;
        self.load().await;
        result
    }

    /// Editar; si el servidor rechaza, el diálogo sigue abierto y no se recarga
    pub async fn submit_edit(&self, id: &str, payload: &ProductPayload) -> Result<String, ApiError> {
        let message = self.products.edit(id, payload).await?;
        self.load().await;
        Ok(message)
    }
}
