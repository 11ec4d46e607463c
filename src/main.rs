use inventory_actions::lifecycle::{setup_tracing, InventoryConfig, InventorySystem};
use inventory_actions::model::{FormData, User};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = InventoryConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting inventory demo");

    let system = InventorySystem::with_config(config);

    let alice = User::new("user_alice").with_email("alice@example.com");
    let bob = User::new("user_bob");

    // A valid submission from an authenticated user
    let form = FormData::new()
        .with("name", "Widget")
        .with("price", "9.99")
        .with("quantity", "5")
        .with("sku", "")
        .with("lowStockAt", "2");

    let span = tracing::info_span!("create_valid");
    let redirect = async {
        info!("Submitting product form");
        system
            .actions
            .create_product(Some(&alice), &form)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(location = %redirect.location, "Redirecting");

    // Rejected before storage: bad fields, then no identity
    let bad_form = FormData::new()
        .with("name", "")
        .with("price", "-1")
        .with("quantity", "2.5");

    let span = tracing::info_span!("create_rejected");
    async {
        if let Err(e) = system.actions.create_product(Some(&alice), &bad_form).await {
            info!(error = %e, "Submission refused");
        }
        if let Err(e) = system.actions.create_product(None, &form).await {
            info!(error = %e, "Anonymous submission refused");
        }
    }
    .instrument(span)
    .await;

    let owned = system
        .product_client
        .list_owned(&alice.id)
        .await
        .map_err(|e| e.to_string())?;
    let Some(product) = owned.first() else {
        error!("Created product is missing from the listing");
        return Err("created product is missing from the listing".to_string());
    };
    info!(
        product_id = %product.id,
        low_stock = product.is_low_stock(),
        "Listed product"
    );

    // Only the owner's delete removes the row
    let delete_form = FormData::new().with("id", product.id.to_string());

    let span = tracing::info_span!("delete");
    async {
        system
            .actions
            .delete_product(Some(&bob), &delete_form)
            .await
            .map_err(|e| e.to_string())?;
        system
            .actions
            .delete_product(Some(&alice), &delete_form)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let remaining = system
        .product_client
        .list_owned(&alice.id)
        .await
        .map_err(|e| e.to_string())?;
    info!(remaining = remaining.len(), "Inventory after delete");

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
