// ============================================================================
// HTTP TRANSPORT - Envío de una petición, sin lógica de negocio
// ============================================================================
// El ApiClient construye `ApiRequest` y decodifica `ApiResponse`.
// En el navegador se usa gloo-net; en tests, un transporte que graba peticiones.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, PartialEq, Debug)]
pub enum FormPart {
    Text(String),
    File(web_sys::File),
}

/// Cuerpo multipart: campos de texto + ficheros bajo un nombre compartido
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MultipartForm {
    parts: Vec<(String, FormPart)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push((name.to_string(), FormPart::Text(value.into())));
        self
    }

    pub fn file(mut self, name: &str, file: web_sys::File) -> Self {
        self.parts.push((name.to_string(), FormPart::File(file)));
        self
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(key, part)| match part {
            FormPart::Text(value) if key == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn file_count(&self, name: &str) -> usize {
        self.parts
            .iter()
            .filter(|(key, part)| key == name && matches!(part, FormPart::File(_)))
            .count()
    }

    /// Convierte a `FormData` del navegador (el boundary lo pone el navegador)
    pub fn to_form_data(&self) -> Result<web_sys::FormData, JsValue> {
        let data = web_sys::FormData::new()?;
        for (name, part) in &self.parts {
            match part {
                FormPart::Text(value) => data.append_with_str(name, value)?,
                FormPart::File(file) => {
                    data.append_with_blob_and_filename(name, file, &file.name())?
                }
            }
        }
        Ok(data)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

#[derive(Clone, PartialEq, Debug)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub bearer_token: Option<String>,
    pub query: Vec<(&'static str, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            bearer_token: None,
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer_token = Some(token.to_string());
        self
    }

    pub fn query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn has_query_param(&self, key: &str) -> bool {
        self.query.iter().any(|(k, _)| *k == key)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fallo antes de recibir respuesta (red caída, CORS, petición mal construida)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Network error: {0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Transporte del navegador (fetch vía gloo-net)
#[derive(Clone, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };

        if let Some(token) = &request.bearer_token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        let sent = match &request.body {
            RequestBody::Empty => builder.send().await,
            RequestBody::Json(value) => builder
                .json(value)
                .map_err(|e| TransportError(format!("Serialization error: {}", e)))?
                .send()
                .await,
            RequestBody::Multipart(form) => {
                let data = form
                    .to_form_data()
                    .map_err(|e| TransportError(format!("FormData error: {:?}", e)))?;
                builder
                    .body(data)
                    .map_err(|e| TransportError(format!("Request build error: {}", e)))?
                    .send()
                    .await
            }
        };
        let response = sent.map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::debug!("🌐 {:?} {} → HTTP {}", request.method, request.url, status);

        Ok(ApiResponse { status, body })
    }
}
