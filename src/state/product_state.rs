// ============================================================================
// PRODUCT STATE - Store del listado de productos
// ============================================================================
// Único escritor: los fetch (completo y filtrado). Las mutaciones NO lo tocan.
// `items` se reemplaza entero en cada fetch correcto, sin merge.
// ============================================================================

use crate::models::Product;
use crate::state::reactivity::{LifecycleEvent, Reducer};
use crate::utils::constants::UNEXPECTED_ERROR_MESSAGE;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FetchKind {
    All,
    Filtered,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ProductListState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ProductListEvent {
    pub kind: FetchKind,
    pub phase: LifecycleEvent<Vec<Product>>,
}

impl ProductListEvent {
    pub fn new(kind: FetchKind, phase: LifecycleEvent<Vec<Product>>) -> Self {
        Self { kind, phase }
    }
}

impl Reducer for ProductListState {
    type Event = ProductListEvent;

    fn reduce(&mut self, event: ProductListEvent) {
        match event.phase {
            LifecycleEvent::Pending => {
                self.loading = true;
                self.error = None;
            }
            LifecycleEvent::Fulfilled(items) => {
                log::debug!("📋 {:?}: {} productos", event.kind, items.len());
                self.loading = false;
                self.items = items;
            }
            LifecycleEvent::Rejected(message) => {
                self.loading = false;
                self.error = Some(if message.is_empty() {
                    UNEXPECTED_ERROR_MESSAGE.to_string()
                } else {
                    message
                });
            }
        }
    }
}
