use maisonops_app::summary::finance_summary;
use maisonops_app::AppState;
use maisonops_products::{ProductCatalog, ProductStatus};

/// Smoke binary: seed the catalogs, run a few representative operations,
/// and log the resulting views. Useful with RUST_LOG=debug to watch the
/// store emit per-mutation events.
fn main() -> anyhow::Result<()> {
    maisonops_observability::init();

    let mut state = AppState::seeded();
    tracing::info!(
        products = state.products.len(),
        materials = state.materials.len(),
        manufacturers = state.manufacturers.len(),
        "catalogs seeded"
    );

    // Duplicate the first product into a draft and archive the original.
    let first = state
        .products
        .all()
        .first()
        .map(|p| p.id)
        .ok_or_else(|| anyhow::anyhow!("seeded product catalog is empty"))?;
    let copy = state.products.duplicate(first)?;
    state.products.archive(first)?;
    tracing::info!(%first, %copy, "duplicated and archived");

    // Default view hides archived rows and drafts stay visible.
    state
        .products
        .set_criteria(|c| c.status = Some(ProductStatus::Draft));
    for product in state.products.filtered() {
        tracing::info!(sku = %product.sku, margin = product.margin, "draft product");
    }
    state.products.clear_criteria();

    let summary = finance_summary(&state);
    tracing::info!(
        product_count = summary.product_count,
        average_margin = summary.average_margin,
        "finance summary"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
