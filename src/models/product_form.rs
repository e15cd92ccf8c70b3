use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::models::Product;

/// Crear exige al menos una imagen; editar no (sin imágenes nuevas se conservan las actuales)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormMode {
    Create,
    Edit,
}

/// Valores crudos del formulario de producto, tal y como los escribe el usuario
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ProductForm {
    pub productname: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub images: Vec<web_sys::File>,
}

/// Datos validados listos para el multipart
#[derive(Clone, PartialEq, Debug)]
pub struct ProductPayload {
    pub productname: String,
    pub description: String,
    pub price: String,
    pub stock: i64,
    pub images: Vec<web_sys::File>,
}

/// Errores por campo; nunca llegan a la red
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn insert(&mut self, error: ApiError) {
        if let ApiError::Validation { field, message } = error {
            self.errors.entry(field).or_insert(message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl ProductForm {
    /// Prefill del formulario de edición con el snapshot del producto
    pub fn from_product(product: &Product) -> Self {
        Self {
            productname: product.productname.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            images: Vec::new(),
        }
    }

    pub fn validate(&self, mode: FormMode) -> Result<ProductPayload, FormErrors> {
        let mut errors = FormErrors::default();

        let productname = self.productname.trim();
        if productname.is_empty() {
            errors.insert(ApiError::validation("productname", "Product name is required"));
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.insert(ApiError::validation("description", "Description is required"));
        }

        let price = self.price.trim();
        if price.is_empty() {
            errors.insert(ApiError::validation("price", "Price is required"));
        } else if !price.parse::<f64>().is_ok_and(|p| p.is_finite() && p >= 0.0) {
            errors.insert(ApiError::validation("price", "Price must be a non-negative number"));
        }

        let stock = self.stock.trim();
        let parsed_stock = if stock.is_empty() {
            errors.insert(ApiError::validation("stock", "Stock is required"));
            None
        } else {
            match stock.parse::<i64>() {
                Ok(value) if value >= 0 => Some(value),
                _ => {
                    errors.insert(ApiError::validation("stock", "Stock must be a non-negative whole number"));
                    None
                }
            }
        };

        if mode == FormMode::Create && self.images.is_empty() {
            errors.insert(ApiError::validation("images", "At least one image is required"));
        }

        match parsed_stock {
            Some(stock) if errors.is_empty() => Ok(ProductPayload {
                productname: productname.to_string(),
                description: description.to_string(),
                price: price.to_string(),
                stock,
                images: self.images.clone(),
            }),
            _ => Err(errors),
        }
    }
}
