use serde::{Deserialize, Serialize};

use crate::utils::resolve_image_url;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub productname: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    // El backend a veces devuelve `imageUrls`
    #[serde(default, alias = "imageUrls")]
    pub images: Vec<String>,
    pub stock: i64,
}

impl Product {
    /// Primera imagen, ya resuelta contra la URL base
    pub fn thumbnail_url(&self, base_url: &str) -> Option<String> {
        self.images
            .first()
            .map(|image| resolve_image_url(base_url, image))
    }

    pub fn image_urls(&self, base_url: &str) -> Vec<String> {
        self.images
            .iter()
            .map(|image| resolve_image_url(base_url, image))
            .collect()
    }

    /// Precio formateado para la tabla: `$12.50`
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}
