use chrono::NaiveDate;

use crate::error::ApiError;

/// Criterios del formulario de filtro. Efímeros: se construyen en cada envío.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterCriteria {
    pub productname: Option<String>,
    pub created_date: Option<String>,
    pub stock: Option<String>,
}

impl FilterCriteria {
    /// Construye los criterios a partir de los valores crudos del formulario
    pub fn from_form(productname: &str, created_date: &str, stock: &str) -> Self {
        Self {
            productname: Some(productname.to_string()),
            created_date: Some(created_date.to_string()),
            stock: Some(stock.to_string()),
        }
    }

    /// Pares de query string. Los campos ausentes o vacíos no se envían nunca.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        [
            ("productname", &self.productname),
            ("createdDate", &self.created_date),
            ("stock", &self.stock),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            let value = value.as_deref()?.trim();
            (!value.is_empty()).then(|| (key, value.to_string()))
        })
        .collect()
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(date) = non_empty(&self.created_date) {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
                ApiError::validation("createdDate", "Created date must be YYYY-MM-DD")
            })?;
        }
        if let Some(stock) = non_empty(&self.stock) {
            stock
                .parse::<u32>()
                .map_err(|_| ApiError::validation("stock", "Stock must be a whole number"))?;
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
