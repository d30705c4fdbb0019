//! Simple financial summaries derived from the catalogs.

use serde::Serialize;

use crate::AppState;

/// Snapshot of catalog value, derived on demand from non-archived records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceSummary {
    pub product_count: usize,
    /// Retail price x quantity on hand, summed.
    pub retail_value: f64,
    /// Cost price x quantity on hand, summed.
    pub cost_value: f64,
    /// Mean cached margin across products, in percent.
    pub average_margin: f64,
    /// Material price x quantity, summed.
    pub material_stock_value: f64,
}

pub fn finance_summary(state: &AppState) -> FinanceSummary {
    let products: Vec<_> = state
        .products
        .all()
        .iter()
        .filter(|p| !matches!(p.status, maisonops_products::ProductStatus::Archived))
        .collect();

    let retail_value = products
        .iter()
        .map(|p| p.retail_price * p.quantity.unwrap_or(0) as f64)
        .sum();
    let cost_value = products
        .iter()
        .map(|p| p.cost_price * p.quantity.unwrap_or(0) as f64)
        .sum();
    let average_margin = if products.is_empty() {
        0.0
    } else {
        products.iter().map(|p| p.margin as f64).sum::<f64>() / products.len() as f64
    };

    let material_stock_value = state
        .materials
        .all()
        .iter()
        .filter(|m| !m.archived)
        .filter_map(|m| Some(m.price? * m.quantity?))
        .sum();

    FinanceSummary {
        product_count: products.len(),
        retail_value,
        cost_value,
        average_margin,
        material_stock_value,
    }
}
