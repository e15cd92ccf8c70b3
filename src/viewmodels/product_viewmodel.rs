// ============================================================================
// PRODUCT VIEWMODEL - Fetch y mutaciones de productos
// ============================================================================
// Los fetch escriben en el store de productos. Las mutaciones solo en su propio
// store de mutación: el listado se refresca con un fetch explícito.
// Token obligatorio: sin token no sale ninguna petición.
// ============================================================================

use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{FilterCriteria, Product, ProductPayload};
use crate::services::{ApiClient, SessionRepository};
use crate::state::{AppState, FetchKind, LifecycleEvent, MutationKind, ProductListEvent};

pub struct ProductViewModel {
    api: ApiClient,
    sessions: Rc<dyn SessionRepository>,
    state: AppState,
}

impl ProductViewModel {
    pub fn new(api: ApiClient, sessions: Rc<dyn SessionRepository>, state: AppState) -> Self {
        Self { api, sessions, state }
    }

    pub fn image_base_url(&self) -> &str {
        self.api.base_url()
    }

    /// Listado completo
    pub async fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        self.dispatch_fetch(FetchKind::All, LifecycleEvent::Pending);

        let result = match self.require_token() {
            Ok(token) => self.api.fetch_products(&token).await,
            Err(e) => Err(e),
        };
        self.settle_fetch(FetchKind::All, result)
    }

    /// Listado filtrado; el resultado reemplaza al listado actual
    pub async fn fetch_filtered(&self, criteria: &FilterCriteria) -> Result<Vec<Product>, ApiError> {
        self.dispatch_fetch(FetchKind::Filtered, LifecycleEvent::Pending);

        let result = match criteria.validate().and_then(|_| self.require_token()) {
            Ok(token) => self.api.fetch_filtered_products(&token, criteria).await,
            Err(e) => Err(e),
        };
        self.settle_fetch(FetchKind::Filtered, result)
    }

    pub async fn create(&self, payload: &ProductPayload) -> Result<String, ApiError> {
        self.mutate(MutationKind::Create, |token| async move {
            self.api.create_product(&token, payload).await
        })
        .await
    }

    pub async fn edit(&self, id: &str, payload: &ProductPayload) -> Result<String, ApiError> {
        self.mutate(MutationKind::Edit, |token| async move {
            self.api.update_product(&token, id, payload).await
        })
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<String, ApiError> {
        self.mutate(MutationKind::Delete, |token| async move {
            self.api.delete_product(&token, id).await
        })
        .await
    }

    fn require_token(&self) -> Result<String, ApiError> {
        self.sessions.token().ok_or_else(|| {
            log::warn!("⚠️ Sin token - petición cancelada");
            ApiError::AuthRequired
        })
    }

    fn dispatch_fetch(&self, kind: FetchKind, phase: LifecycleEvent<Vec<Product>>) {
        self.state.products.dispatch(ProductListEvent::new(kind, phase));
    }

    fn settle_fetch(
        &self,
        kind: FetchKind,
        result: Result<Vec<Product>, ApiError>,
    ) -> Result<Vec<Product>, ApiError> {
        match result {
            Ok(products) => {
                self.dispatch_fetch(kind, LifecycleEvent::Fulfilled(products.clone()));
                Ok(products)
            }
            Err(e) => {
                log::error!("❌ Fetch {:?} falló: {}", kind, e);
                self.dispatch_fetch(kind, LifecycleEvent::Rejected(e.user_message()));
                self.state.notify_error(e.user_message());
                Err(e)
            }
        }
    }

    /// pending → petición → fulfilled | rejected sobre el store de la mutación
    async fn mutate<F, Fut>(&self, kind: MutationKind, request: F) -> Result<String, ApiError>
    where
        F: FnOnce(String) -> Fut,
        Fut: std::future::Future<Output = Result<Option<String>, ApiError>>,
    {
        let store = self.state.mutation(kind);
        store.dispatch(LifecycleEvent::Pending);

        let result = match self.require_token() {
            Ok(token) => request(token).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(message) => {
                let message = message.unwrap_or_else(|| kind.success_message().to_string());
                log::info!("✅ {:?}: {}", kind, message);
                store.dispatch(LifecycleEvent::Fulfilled(()));
                self.state.notify_success(message.clone());
                Ok(message)
            }
            Err(e) => {
                log::error!("❌ {:?} falló: {}", kind, e);
                store.dispatch(LifecycleEvent::Rejected(e.user_message()));
                self.state.notify_error(e.user_message());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemorySessionRepository;
    use crate::services::http::HttpMethod;
    use crate::state::ToastKind;
    use crate::testing::{MockTransport, PRODUCTS_JSON};
    use crate::utils::constants::STORAGE_KEY_AUTH_TOKEN;

    struct Fixture {
        transport: Rc<MockTransport>,
        state: AppState,
        vm: ProductViewModel,
    }

    fn fixture(token: Option<&str>) -> Fixture {
        let transport = MockTransport::new();
        let repo = MemorySessionRepository::new();
        if let Some(token) = token {
            repo.set_raw(STORAGE_KEY_AUTH_TOKEN, token);
        }
        let state = AppState::new();
        let vm = ProductViewModel::new(
            ApiClient::new("http://localhost:5000", transport.clone()),
            Rc::new(repo),
            state.clone(),
        );
        Fixture { transport, state, vm }
    }

    fn payload() -> ProductPayload {
        ProductPayload {
            productname: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
            price: "19.99".to_string(),
            stock: 4,
            images: Vec::new(),
        }
    }

    #[tokio::test]
    async fn fetch_all_replaces_items_with_server_response() {
        let f = fixture(Some("t0k"));
        f.transport.respond(200, PRODUCTS_JSON);

        f.vm.fetch_all().await.unwrap();

        let state = f.state.products.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        let ids: Vec<_> = state.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);

        let request = f.transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "http://localhost:5000/api/products/");
        assert_eq!(request.bearer_token.as_deref(), Some("t0k"));
    }

    #[tokio::test]
    async fn fetch_without_token_fails_without_network() {
        let f = fixture(None);

        let err = f.vm.fetch_all().await.unwrap_err();

        assert_eq!(err, ApiError::AuthRequired);
        assert_eq!(f.transport.request_count(), 0);
        let state = f.state.products.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("No token found. Please log in."));
    }

    #[tokio::test]
    async fn fetch_failure_keeps_previous_items() {
        let f = fixture(Some("t0k"));
        f.transport.respond(200, PRODUCTS_JSON);
        f.vm.fetch_all().await.unwrap();

        f.transport.respond(500, "");
        f.vm.fetch_all().await.unwrap_err();

        let state = f.state.products.snapshot();
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.error.as_deref(), Some("Failed to load products"));
    }

    #[tokio::test]
    async fn filtered_fetch_omits_unset_stock() {
        let f = fixture(Some("t0k"));
        f.transport.respond(200, "[]");

        let criteria = FilterCriteria::from_form("Lamp", "", "");
        f.vm.fetch_filtered(&criteria).await.unwrap();

        let request = f.transport.last_request().unwrap();
        assert_eq!(request.url, "http://localhost:5000/api/products/filter");
        assert!(request.has_query_param("productname"));
        assert!(!request.has_query_param("stock"));
        assert!(!request.has_query_param("createdDate"));
        assert!(f.state.products.with(|s| s.items.is_empty()));
    }

    #[tokio::test]
    async fn filtered_fetch_rejects_malformed_date_locally() {
        let f = fixture(Some("t0k"));

        let criteria = FilterCriteria::from_form("", "12/31/2024", "");
        let err = f.vm.fetch_filtered(&criteria).await.unwrap_err();

        assert!(matches!(err, ApiError::Validation { field: "createdDate", .. }));
        assert_eq!(f.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn create_touches_only_creation_store() {
        let f = fixture(Some("t0k"));
        f.transport.respond(200, PRODUCTS_JSON);
        f.vm.fetch_all().await.unwrap();
        let before = f.state.products.snapshot();

        f.transport.respond(201, r#"{"message":"Created"}"#);
        let message = f.vm.create(&payload()).await.unwrap();

        assert_eq!(message, "Created");
        assert_eq!(f.state.products.snapshot(), before);
        assert!(!f.state.creation.with(|s| s.loading));
        assert_eq!(f.transport.last_request().unwrap().method, HttpMethod::Post);
    }

    #[tokio::test]
    async fn edit_uses_default_message_and_id_in_path() {
        let f = fixture(Some("t0k"));
        f.transport.respond(200, "{}");

        let message = f.vm.edit("p1", &payload()).await.unwrap();

        assert_eq!(message, "Product updated successfully!");
        let request = f.transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url, "http://localhost:5000/api/products/update/p1");
    }

    #[tokio::test]
    async fn delete_failure_sets_delete_error_and_toast() {
        let f = fixture(Some("t0k"));
        f.transport.respond(404, r#"{"message":"Product not found"}"#);

        let err = f.vm.delete("nope").await.unwrap_err();

        assert_eq!(err.user_message(), "Product not found");
        assert_eq!(
            f.state.delete.with(|s| s.error.clone()).as_deref(),
            Some("Product not found")
        );
        assert_eq!(f.state.creation.with(|s| s.error.clone()), None);
        let toasts = f.state.toasts.snapshot().toasts;
        assert_eq!(toasts.last().map(|t| t.kind), Some(ToastKind::Error));
    }

    #[tokio::test]
    async fn mutation_without_token_never_hits_network() {
        let f = fixture(None);

        let err = f.vm.delete("p1").await.unwrap_err();

        assert_eq!(err, ApiError::AuthRequired);
        assert_eq!(f.transport.request_count(), 0);
        assert!(f.state.delete.with(|s| s.error.is_some()));
    }
}
