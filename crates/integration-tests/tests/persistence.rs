//! State survives a restart: a fresh context over the same data directory
//! sees everything the previous one persisted, including the session slot.

#![allow(clippy::unwrap_used)]

use bamboo_box_core::{OrderStatus, UserRole};
use bamboo_box_integration_tests::TestContext;
use bamboo_box_services::orders::NewOrder;
use bamboo_box_services::seed::ensure_seeded;

#[tokio::test]
async fn reopened_store_sees_users_session_and_orders() {
    let dir = tempfile::tempdir().unwrap();

    let order_id = {
        let ctx = TestContext::on_disk(dir.path());
        ensure_seeded(&ctx.store).unwrap();

        let session = ctx
            .identity
            .register("dana@x.com", "pw", UserRole::User, "dana")
            .await
            .unwrap();

        let shop = ctx
            .catalog
            .list_shops()
            .await
            .unwrap()
            .into_iter()
            .next()
            .unwrap();

        let order = ctx
            .orders
            .create(NewOrder {
                user_id: session.user_id().clone(),
                username: session.user.username.clone(),
                shop_id: shop.id,
                shop_name: shop.name,
                content: "two veggie wraps".to_owned(),
                ai_analysis: None,
            })
            .await
            .unwrap();
        order.id
    };

    // Simulated restart: new services over the same directory.
    let ctx = TestContext::on_disk(dir.path());

    let current = ctx.identity.current_user().unwrap().unwrap();
    assert_eq!(current.user.username.as_str(), "dana");

    let mine = ctx
        .orders
        .list_for(UserRole::User, current.user_id())
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, order_id);
    assert_eq!(mine[0].status, OrderStatus::Pending);
    assert_eq!(mine[0].content, "two veggie wraps");
}

#[tokio::test]
async fn seeding_is_idempotent_across_reopens() {
    let dir = tempfile::tempdir().unwrap();

    {
        let ctx = TestContext::on_disk(dir.path());
        ensure_seeded(&ctx.store).unwrap();
        let session = ctx.identity.login("test", "whatever", UserRole::User).await.unwrap();
        assert_eq!(session.user_id().as_str(), "user-test-1");
    }

    let ctx = TestContext::on_disk(dir.path());
    ensure_seeded(&ctx.store).unwrap();

    // The reseed must not clobber the reissued token or duplicate records.
    let shops = ctx.catalog.list_shops().await.unwrap();
    assert_eq!(shops.len(), 3);
    let current = ctx.identity.current_user().unwrap().unwrap();
    assert_eq!(current.user_id().as_str(), "user-test-1");
}

#[tokio::test]
async fn logout_clears_the_persisted_slot() {
    let dir = tempfile::tempdir().unwrap();

    {
        let ctx = TestContext::on_disk(dir.path());
        ctx.identity
            .register("erin@x.com", "pw", UserRole::Merchant, "erin")
            .await
            .unwrap();
        ctx.identity.logout().unwrap();
    }

    let ctx = TestContext::on_disk(dir.path());
    assert!(ctx.identity.current_user().unwrap().is_none());
}
