//! Dobles de prueba compartidos por los tests de servicios y viewmodels.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::services::http::{ApiRequest, ApiResponse, HttpTransport, TransportError};

/// Transporte que devuelve respuestas encoladas y graba cada petición
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, reason: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(reason.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no response queued".to_string())))
    }
}

pub const PRODUCTS_JSON: &str = r#"[
    {"_id":"p1","productname":"Lamp","description":"Desk lamp","price":12.5,"images":["/uploads/lamp.png"],"stock":4},
    {"_id":"p2","productname":"Mug","description":"Blue mug","price":3,"images":[],"stock":10}
]"#;
