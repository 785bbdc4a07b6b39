//! Project every product in a catalog onto a fixed capital basis

use super::rows::ProductRow;
use crate::data::Product;

/// Projected interest and net gain for each product, annotated for rendering
///
/// Rows keep catalog order. Every row whose net gain equals the maximum is
/// marked best; a product can be best and current at the same time.
pub fn compare_products(capital: f64, products: &[Product], current_name: &str) -> Vec<ProductRow> {
    let projected: Vec<(&Product, f64, f64)> = products
        .iter()
        .map(|product| {
            let projected_interest = capital * product.monthly_rate();
            let net_gain = projected_interest - product.monthly_cost;
            (product, projected_interest, net_gain)
        })
        .collect();

    let max_net_gain = projected
        .iter()
        .map(|&(_, _, net_gain)| net_gain)
        .fold(f64::NEG_INFINITY, f64::max);

    projected
        .into_iter()
        .map(|(product, projected_interest, net_gain)| ProductRow {
            name: product.name.clone(),
            annual_rate: product.annual_rate,
            monthly_cost: product.monthly_cost,
            projected_interest,
            net_gain,
            is_best: net_gain == max_net_gain,
            is_negative_gain: net_gain < 0.0,
            is_current: product.name == current_name,
        })
        .collect()
}
