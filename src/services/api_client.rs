// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Construye URLs, cabeceras y cuerpos; decodifica respuestas y errores.
// NO toca stores ni storage: el token lo recibe como parámetro.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    FilterCriteria, LoginRequest, LoginResponse, MessageResponse, Product, ProductPayload,
    RegisterRequest, RegisterResponse,
};
use crate::services::http::{
    ApiRequest, ApiResponse, GlooTransport, HttpMethod, HttpTransport, MultipartForm,
};
use crate::utils::constants::UNEXPECTED_ERROR_MESSAGE;

/// Operación de red; define el mensaje genérico cuando el backend no da uno
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Register,
    Login,
    FetchProducts,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Register | Operation::Login => UNEXPECTED_ERROR_MESSAGE,
            Operation::FetchProducts => "Failed to load products",
            Operation::CreateProduct => "Failed to create product",
            Operation::UpdateProduct => "Failed to update product",
            Operation::DeleteProduct => "Failed to delete product",
        }
    }
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Cliente del navegador contra la URL configurada
    pub fn browser() -> Self {
        Self::new(CONFIG.backend_url(), Rc::new(GlooTransport))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Registrar usuario
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        log::info!("📝 Registrando usuario: {}", request.email);
        let body = to_json(request)?;
        let api_request = ApiRequest::new(HttpMethod::Post, self.url("/api/auth/register")).json(body);
        let response = self.execute(api_request, Operation::Register).await?;
        decode_body(&response)
    }

    /// Login con email + password
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Login para: {}", request.email);
        let body = to_json(request)?;
        let api_request = ApiRequest::new(HttpMethod::Post, self.url("/api/auth/login")).json(body);
        let response = self.execute(api_request, Operation::Login).await?;
        decode_body(&response)
    }

    /// Listado completo de productos
    pub async fn fetch_products(&self, token: &str) -> Result<Vec<Product>, ApiError> {
        let api_request = ApiRequest::new(HttpMethod::Get, self.url("/api/products/")).bearer(token);
        let response = self.execute(api_request, Operation::FetchProducts).await?;
        let products: Vec<Product> = decode_body(&response)?;
        log::info!("📦 Productos obtenidos: {}", products.len());
        Ok(products)
    }

    /// Listado filtrado; los criterios vacíos no se envían
    pub async fn fetch_filtered_products(
        &self,
        token: &str,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Product>, ApiError> {
        let api_request = ApiRequest::new(HttpMethod::Get, self.url("/api/products/filter"))
            .bearer(token)
            .query(criteria.to_query());
        let response = self.execute(api_request, Operation::FetchProducts).await?;
        let products: Vec<Product> = decode_body(&response)?;
        log::info!("🔍 Productos filtrados: {}", products.len());
        Ok(products)
    }

    /// Crear producto (multipart). Devuelve el `message` del backend si lo hay.
    pub async fn create_product(
        &self,
        token: &str,
        payload: &ProductPayload,
    ) -> Result<Option<String>, ApiError> {
        let api_request = ApiRequest::new(HttpMethod::Post, self.url("/api/products/create"))
            .bearer(token)
            .multipart(product_multipart(payload));
        let response = self.execute(api_request, Operation::CreateProduct).await?;
        Ok(decode_message(&response))
    }

    /// Actualizar producto (multipart)
    pub async fn update_product(
        &self,
        token: &str,
        id: &str,
        payload: &ProductPayload,
    ) -> Result<Option<String>, ApiError> {
        let api_request = ApiRequest::new(
            HttpMethod::Put,
            self.url(&format!("/api/products/update/{}", id)),
        )
        .bearer(token)
        .multipart(product_multipart(payload));
        let response = self.execute(api_request, Operation::UpdateProduct).await?;
        Ok(decode_message(&response))
    }

    /// Eliminar producto
    pub async fn delete_product(&self, token: &str, id: &str) -> Result<Option<String>, ApiError> {
        let api_request = ApiRequest::new(
            HttpMethod::Delete,
            self.url(&format!("/api/products/delete/{}", id)),
        )
        .bearer(token);
        let response = self.execute(api_request, Operation::DeleteProduct).await?;
        Ok(decode_message(&response))
    }

    async fn execute(&self, request: ApiRequest, operation: Operation) -> Result<ApiResponse, ApiError> {
        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ {:?}: {}", operation, e);
            ApiError::Backend {
                status: None,
                message: operation.fallback_message().to_string(),
            }
        })?;

        if response.ok() {
            Ok(response)
        } else {
            let error = decode_error(&response, operation);
            log::error!("❌ {:?}: HTTP {} - {}", operation, response.status, error);
            Err(error)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| {
        log::error!("❌ Error serializando petición: {}", e);
        ApiError::Unexpected
    })
}

/// Campos de texto + ficheros bajo `images`
fn product_multipart(payload: &ProductPayload) -> MultipartForm {
    let form = MultipartForm::new()
        .text("productname", payload.productname.as_str())
        .text("description", payload.description.as_str())
        .text("price", payload.price.as_str())
        .text("stock", payload.stock.to_string());
    payload
        .images
        .iter()
        .cloned()
        .fold(form, |form, file| form.file("images", file))
}

fn decode_body<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        log::error!("❌ Parse error: {}", e);
        ApiError::Unexpected
    })
}

/// `{message}` opcional de una respuesta correcta; un cuerpo raro no es error
fn decode_message(response: &ApiResponse) -> Option<String> {
    serde_json::from_str::<MessageResponse>(&response.body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
}

/// Error del backend: `{message}` si viene, si no el genérico de la operación
fn decode_error(response: &ApiResponse, operation: Operation) -> ApiError {
    let message = decode_message(response)
        .unwrap_or_else(|| operation.fallback_message().to_string());
    ApiError::Backend {
        status: Some(response.status),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::RequestBody;
    use crate::testing::MockTransport;

    fn client(transport: &Rc<MockTransport>) -> ApiClient {
        ApiClient::new("http://localhost:5000/", transport.clone())
    }

    fn payload() -> ProductPayload {
        ProductPayload {
            productname: "Lamp".to_string(),
            description: "Desk lamp".to_string(),
            price: "12.50".to_string(),
            stock: 4,
            images: Vec::new(),
        }
    }

    #[tokio::test]
    async fn fetch_sends_bearer_token() {
        let transport = MockTransport::new();
        transport.respond(200, r#"[{"_id":"1","productname":"Lamp","description":"","price":1,"images":[],"stock":2}]"#);

        let products = client(&transport).fetch_products("t0k").await.unwrap();

        assert_eq!(products.len(), 1);
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "http://localhost:5000/api/products/");
        assert_eq!(request.bearer_token.as_deref(), Some("t0k"));
    }

    #[tokio::test]
    async fn filter_without_stock_omits_the_param() {
        let transport = MockTransport::new();
        transport.respond(200, "[]");
        let criteria = FilterCriteria::from_form("lamp", "", "");

        client(&transport)
            .fetch_filtered_products("t0k", &criteria)
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://localhost:5000/api/products/filter");
        assert_eq!(request.query, vec![("productname", "lamp".to_string())]);
        assert!(!request.has_query_param("stock"));
    }

    #[tokio::test]
    async fn backend_message_is_surfaced() {
        let transport = MockTransport::new();
        transport.respond(401, r#"{"message":"Invalid credentials"}"#);

        let err = client(&transport)
            .login(&LoginRequest {
                email: "a@b.c".to_string(),
                password: "nope".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Backend {
                status: Some(401),
                message: "Invalid credentials".to_string()
            }
        );
    }

    #[tokio::test]
    async fn non_json_error_uses_operation_fallback() {
        let transport = MockTransport::new();
        transport.respond(500, "<html>Internal Server Error</html>");

        let err = client(&transport).delete_product("t0k", "p1").await.unwrap_err();

        assert_eq!(err.user_message(), "Failed to delete product");
    }

    #[tokio::test]
    async fn network_failure_uses_operation_fallback() {
        let transport = MockTransport::new();
        transport.fail("connection refused");

        let err = client(&transport).fetch_products("t0k").await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Backend {
                status: None,
                message: "Failed to load products".to_string()
            }
        );
    }

    #[tokio::test]
    async fn malformed_success_body_is_unexpected() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"items":"not a list"}"#);

        let err = client(&transport).fetch_products("t0k").await.unwrap_err();

        assert_eq!(err, ApiError::Unexpected);
    }

    #[tokio::test]
    async fn create_sends_multipart_fields() {
        let transport = MockTransport::new();
        transport.respond(201, r#"{"message":"Product created"}"#);

        let message = client(&transport).create_product("t0k", &payload()).await.unwrap();

        assert_eq!(message.as_deref(), Some("Product created"));
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://localhost:5000/api/products/create");
        match request.body {
            RequestBody::Multipart(form) => {
                assert_eq!(
                    form.field_names(),
                    vec!["productname", "description", "price", "stock"]
                );
                assert_eq!(form.text_value("stock"), Some("4"));
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_and_delete_target_the_product_id() {
        let transport = MockTransport::new();
        transport.respond(200, "");
        transport.respond(200, r#"{"message":"gone"}"#);
        let api = client(&transport);

        let updated = api.update_product("t0k", "p9", &payload()).await.unwrap();
        let deleted = api.delete_product("t0k", "p9").await.unwrap();

        assert_eq!(updated, None);
        assert_eq!(deleted.as_deref(), Some("gone"));
        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Put);
        assert_eq!(requests[0].url, "http://localhost:5000/api/products/update/p9");
        assert_eq!(requests[1].method, HttpMethod::Delete);
        assert_eq!(requests[1].url, "http://localhost:5000/api/products/delete/p9");
    }
}
