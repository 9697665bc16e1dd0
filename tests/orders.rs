//! Order ledger behavior: price snapshots, creation guards, the permissive
//! status policy and deletion.

mod common;

use comanda_server::db::models::{MenuItemInput, OrderCreate, OrderStatus};
use comanda_server::db::repository::{RepoError, menu_item, order};

async fn seed_item(pool: &sqlx::SqlitePool, name: &str, price: f64, available: bool) -> i64 {
    menu_item::create(
        pool,
        MenuItemInput {
            name: name.to_string(),
            description: String::new(),
            price,
            category: "Main Course".to_string(),
            available,
        },
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn total_price_is_a_frozen_snapshot() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();

    let item_id = seed_item(pool, "Paella", 10.0, true).await;
    let placed = order::create(
        pool,
        OrderCreate {
            table_number: 2,
            item_id,
            quantity: 3,
        },
    )
    .await
    .unwrap();
    assert_eq!(placed.total_price, 30.0);
    assert_eq!(placed.status, OrderStatus::Pending);

    // later catalog edit must not rewrite order history
    menu_item::update(
        pool,
        item_id,
        MenuItemInput {
            name: "Paella".to_string(),
            description: String::new(),
            price: 20.0,
            category: "Main Course".to_string(),
            available: true,
        },
    )
    .await
    .unwrap();

    let after = order::find_by_id(pool, placed.id).await.unwrap().unwrap();
    assert_eq!(after.total_price, 30.0);
    // the join still shows the catalog's current price
    assert_eq!(after.item_price, 20.0);
}

#[tokio::test]
async fn create_rejects_missing_and_unavailable_items() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();

    let err = order::create(
        pool,
        OrderCreate {
            table_number: 1,
            item_id: 999_999,
            quantity: 1,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let off_menu = seed_item(pool, "Oysters", 14.0, false).await;
    let err = order::create(
        pool,
        OrderCreate {
            table_number: 1,
            item_id: off_menu,
            quantity: 1,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::Unavailable(_)));

    // neither failure may leave a row behind
    assert!(order::find_all(pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_validates_table_and_quantity() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();
    let item_id = seed_item(pool, "Gnocchi", 9.0, true).await;

    for (table_number, quantity) in [(0, 1), (-3, 1), (1, 0), (1, -2)] {
        let err = order::create(
            pool,
            OrderCreate {
                table_number,
                item_id,
                quantity,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }
    assert!(order::find_all(pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn any_status_may_move_to_any_other() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();

    let item_id = seed_item(pool, "Lasagna", 11.0, true).await;
    let placed = order::create(
        pool,
        OrderCreate {
            table_number: 6,
            item_id,
            quantity: 1,
        },
    )
    .await
    .unwrap();

    // walk through every status, including re-opening a cancelled order
    for status in ["preparing", "served", "cancelled", "pending", "served"] {
        order::update_status(pool, placed.id, status).await.unwrap();
        let current = order::find_by_id(pool, placed.id).await.unwrap().unwrap();
        assert_eq!(current.status.as_str(), status);
    }
}

#[tokio::test]
async fn unknown_status_strings_are_rejected() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();

    let item_id = seed_item(pool, "Curry", 10.0, true).await;
    let placed = order::create(
        pool,
        OrderCreate {
            table_number: 3,
            item_id,
            quantity: 2,
        },
    )
    .await
    .unwrap();

    for bad in ["delivered", "Pending", "", "done"] {
        let err = order::update_status(pool, placed.id, bad).await.unwrap_err();
        assert!(matches!(err, RepoError::InvalidTransition(_)));
    }
    // order untouched
    let current = order::find_by_id(pool, placed.id).await.unwrap().unwrap();
    assert_eq!(current.status, OrderStatus::Pending);
}

#[tokio::test]
async fn status_update_and_delete_of_missing_order_are_not_found() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();

    assert!(matches!(
        order::update_status(pool, 13_371_337, "served").await,
        Err(RepoError::NotFound(_))
    ));
    assert!(matches!(
        order::delete(pool, 13_371_337).await,
        Err(RepoError::NotFound(_))
    ));
}

#[tokio::test]
async fn list_is_newest_first_and_joined_with_item() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();

    let item_id = seed_item(pool, "Ramen", 8.5, true).await;
    let first = order::create(
        pool,
        OrderCreate {
            table_number: 1,
            item_id,
            quantity: 1,
        },
    )
    .await
    .unwrap();
    // ensure a later order_date for the second order
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    let second = order::create(
        pool,
        OrderCreate {
            table_number: 2,
            item_id,
            quantity: 2,
        },
    )
    .await
    .unwrap();

    let listed = order::find_all(pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
    assert_eq!(listed[0].item_name, "Ramen");
    assert_eq!(listed[0].item_price, 8.5);
}

#[tokio::test]
async fn delete_removes_the_order() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();

    let item_id = seed_item(pool, "Tacos", 7.0, true).await;
    let placed = order::create(
        pool,
        OrderCreate {
            table_number: 9,
            item_id,
            quantity: 4,
        },
    )
    .await
    .unwrap();

    order::delete(pool, placed.id).await.unwrap();
    assert!(order::find_by_id(pool, placed.id).await.unwrap().is_none());
    // the item itself is untouched and deletable again
    menu_item::delete(pool, item_id).await.unwrap();
}
