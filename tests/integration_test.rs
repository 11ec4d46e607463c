use inventory_actions::actions::{ActionError, Redirect};
use inventory_actions::lifecycle::{InventoryConfig, InventorySystem};
use inventory_actions::model::{FormData, LowStockAt, ProductCreate, User, UserId};
use inventory_actions::product_actor::ProductError;
use resource_store::ActorClient;

fn form(name: &str, price: &str, quantity: &str) -> FormData {
    FormData::new()
        .with("name", name)
        .with("price", price)
        .with("quantity", quantity)
}

/// End-to-end: handlers, validation and a real product store.
#[tokio::test]
async fn test_full_inventory_lifecycle() {
    let system = InventorySystem::new();
    let alice = User::new("user_alice");
    let bob = User::new("user_bob");

    let redirect = system
        .actions
        .create_product(Some(&alice), &form("Widget", "9.99", "5").with("lowStockAt", "5"))
        .await
        .expect("Failed to create product");
    assert_eq!(redirect, Redirect::to("/inventory"));

    let owned = system
        .product_client
        .list_owned(&alice.id)
        .await
        .expect("Failed to list products");
    assert_eq!(owned.len(), 1);
    let product = &owned[0];
    assert_eq!(product.name, "Widget");
    assert_eq!(product.price, 9.99);
    assert_eq!(product.quantity, 5);
    assert_eq!(product.sku, None);
    assert_eq!(product.low_stock_at, Some(5));
    assert_eq!(product.user_id, alice.id);
    assert!(product.is_low_stock());

    let fetched = system
        .product_client
        .get(product.id.clone())
        .await
        .expect("Failed to get product")
        .expect("Product not found");
    assert_eq!(&fetched, product);

    // Bob cannot see or delete Alice's product
    assert!(system.product_client.list_owned(&bob.id).await.unwrap().is_empty());
    let delete_form = FormData::new().with("id", product.id.to_string());
    system
        .actions
        .delete_product(Some(&bob), &delete_form)
        .await
        .expect("Foreign delete should be a silent no-op");
    assert_eq!(system.product_client.list_owned(&alice.id).await.unwrap().len(), 1);

    // Alice can
    system
        .actions
        .delete_product(Some(&alice), &delete_form)
        .await
        .expect("Owner delete failed");
    assert!(system.product_client.list_owned(&alice.id).await.unwrap().is_empty());

    // Deleting again matches nothing and still succeeds
    assert_eq!(
        system.actions.delete_product(Some(&alice), &delete_form).await,
        Ok(())
    );

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_rejected_submissions_leave_store_untouched() {
    let system = InventorySystem::new();
    let alice = User::new("user_alice");

    let invalid = system
        .actions
        .create_product(Some(&alice), &form("", "-1", "2.5"))
        .await;
    assert_eq!(invalid, Err(ActionError::ValidationFailed));

    let anonymous = system
        .actions
        .create_product(None, &form("Widget", "1", "1"))
        .await;
    assert_eq!(anonymous, Err(ActionError::Unauthenticated));

    assert!(system.product_client.list_owned(&alice.id).await.unwrap().is_empty());
    assert!(system
        .product_client
        .find_many(Default::default())
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_store_rejects_unowned_product() {
    let system = InventorySystem::new();

    let result = system
        .product_client
        .create_product(ProductCreate {
            name: "Orphan".to_string(),
            price: 1.0,
            quantity: 1,
            sku: None,
            low_stock_at: LowStockAt::Unset,
            user_id: UserId::from(""),
        })
        .await;
    assert_eq!(result, Err(ProductError::MissingOwner));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_listing_is_scoped_and_ordered() {
    let system = InventorySystem::with_config(InventoryConfig {
        channel_capacity: 4,
        listing_path: "/stock".to_string(),
    });
    let alice = User::new("user_alice");
    let bob = User::new("user_bob");

    for name in ["Bolt", "Nut", "Washer"] {
        let redirect = system
            .actions
            .create_product(Some(&alice), &form(name, "0.10", "100").with("sku", name))
            .await
            .unwrap();
        assert_eq!(redirect.location, "/stock");
    }
    system
        .actions
        .create_product(Some(&bob), &form("Hammer", "12", "1"))
        .await
        .unwrap();

    let names: Vec<String> = system
        .product_client
        .list_owned(&alice.id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Bolt", "Nut", "Washer"]);

    let bobs = system.product_client.list_owned(&bob.id).await.unwrap();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].low_stock_at, None);

    system.shutdown().await.expect("Shutdown failed");
}
