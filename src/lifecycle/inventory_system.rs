use crate::actions::ProductActions;
use crate::clients::ProductClient;
use crate::lifecycle::InventoryConfig;
use tracing::{error, info};

/// Runtime orchestrator for the inventory.
///
/// Owns the product store task and exposes two ways in:
/// - **`product_client`**: direct storage access (listing, lookups)
/// - **`actions`**: the validated, ownership-scoped mutation handlers
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new();
///
/// let redirect = system.actions.create_product(Some(&user), &form).await?;
/// let mine = system.product_client.list_owned(&user.id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    pub product_client: ProductClient,
    pub actions: ProductActions,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Starts the system with [`InventoryConfig::default`].
    pub fn new() -> Self {
        Self::with_config(InventoryConfig::default())
    }

    /// Spawns the product store and wires the handlers to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_config(config: InventoryConfig) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(config.channel_capacity);
        let handle = tokio::spawn(product_actor.run(()));

        info!(
            channel_capacity = config.channel_capacity,
            listing_path = %config.listing_path,
            "Inventory system started"
        );

        let actions = ProductActions::new(product_client.clone(), config.listing_path);
        Self {
            product_client,
            actions,
            handle,
        }
    }

    /// Drops every client and waits for the store to exit.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the store shut down cleanly
    /// - `Err(String)` if the store task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory system...");

        // The store exits once its last sender is gone.
        drop(self.actions);
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Product store task failed: {:?}", e);
            return Err(format!("Product store task failed: {:?}", e));
        }

        info!("Inventory system shutdown complete.");
        Ok(())
    }
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new()
    }
}
