//! Dashboard aggregates: availability counts, pending counts and today's
//! revenue over snapshot totals.

mod common;

use comanda_server::db::models::{MenuItemInput, OrderCreate};
use comanda_server::db::repository::{menu_item, order, stats};
use comanda_server::utils::time::today_bounds_millis;

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
async fn active_items_counts_only_available() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();

    for name in ["A", "B", "C"] {
        seed_item(pool, name, 5.0, true).await;
    }
    for name in ["D", "E"] {
        seed_item(pool, name, 5.0, false).await;
    }

    let (start, end) = today_bounds_millis();
    let dash = stats::dashboard_stats(pool, start, end).await.unwrap();
    assert_eq!(dash.active_items, 3);
    assert_eq!(dash.pending_orders, 0);
    assert_eq!(dash.today_orders, 0);
    assert_eq!(dash.today_revenue, 0.0);
}

#[tokio::test]
async fn todays_orders_and_revenue_sum_snapshot_totals() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();

    let salad = seed_item(pool, "Salad", 10.25, true).await;
    let steak = seed_item(pool, "Steak", 25.0, true).await;

    // 10.25 x 2 + 25.00 x 1 = 45.50
    let first = order::create(
        pool,
        OrderCreate {
            table_number: 1,
            item_id: salad,
            quantity: 2,
        },
    )
    .await
    .unwrap();
    order::create(
        pool,
        OrderCreate {
            table_number: 2,
            item_id: steak,
            quantity: 1,
        },
    )
    .await
    .unwrap();

    let (start, end) = today_bounds_millis();
    let dash = stats::dashboard_stats(pool, start, end).await.unwrap();
    assert_eq!(dash.today_orders, 2);
    assert_eq!(dash.today_revenue, 45.50);
    assert_eq!(dash.pending_orders, 2);

    // serving one order drops the pending count but not today's totals
    order::update_status(pool, first.id, "served").await.unwrap();
    let dash = stats::dashboard_stats(pool, start, end).await.unwrap();
    assert_eq!(dash.pending_orders, 1);
    assert_eq!(dash.today_orders, 2);
    assert_eq!(dash.today_revenue, 45.50);
}

#[tokio::test]
async fn orders_outside_the_window_are_excluded() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();

    let item = seed_item(pool, "Pasta", 9.0, true).await;
    order::create(
        pool,
        OrderCreate {
            table_number: 1,
            item_id: item,
            quantity: 1,
        },
    )
    .await
    .unwrap();

    // a window that ends before any order was placed
    let (start, _) = today_bounds_millis();
    let dash = stats::dashboard_stats(pool, start - 86_400_000, start).await.unwrap();
    assert_eq!(dash.today_orders, 0);
    assert_eq!(dash.today_revenue, 0.0);
    // pending count is window-independent
    assert_eq!(dash.pending_orders, 1);
}

#[tokio::test]
async fn recent_orders_respects_the_limit_and_ordering() {
    let (_dir, state) = common::test_state().await;
    let pool = state.pool();

    let item = seed_item(pool, "Burger", 8.0, true).await;
    let mut last_id = 0;
    for table in 1..=7 {
        last_id = order::create(
            pool,
            OrderCreate {
                table_number: table,
                item_id: item,
                quantity: 1,
            },
        )
        .await
        .unwrap()
        .id;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let recent = order::find_recent(pool, 5).await.unwrap();
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].id, last_id);
}
