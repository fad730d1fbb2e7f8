//! Shop browsing and merchant shop management.

use bamboo_box_core::UserRole;
use bamboo_box_services::models::{Session, Shop};

use crate::Context;

/// List every shop with its menu.
///
/// # Errors
///
/// Returns an error if the shops bucket cannot be read.
pub async fn list(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let shops = ctx.catalog.list_shops().await?;
    if shops.is_empty() {
        println!("no shops yet (run `bb seed` for demo data)");
        return Ok(());
    }
    for shop in &shops {
        print_shop(shop);
    }
    Ok(())
}

/// Show the logged-in merchant's shop.
///
/// # Errors
///
/// Returns an error if nobody is logged in or the session is not a
/// merchant.
pub async fn mine(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let session = require_merchant(ctx)?;
    match ctx.catalog.my_shop(session.user_id()).await? {
        Some(shop) => print_shop(&shop),
        None => println!("you do not own a shop yet (use `bb shop save <file>`)"),
    }
    Ok(())
}

/// Upsert the merchant's shop from a JSON file.
///
/// The file uses the persisted shop layout; `ownerId` is overwritten with
/// the logged-in merchant's id so a shop cannot be saved onto someone else.
///
/// # Errors
///
/// Returns an error if the session is missing or not a merchant, the file
/// cannot be read, or the JSON does not parse as a shop.
pub async fn save(ctx: &Context, file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let session = require_merchant(ctx)?;

    let raw = tokio::fs::read_to_string(file).await?;
    let mut shop: Shop = serde_json::from_str(&raw)?;
    shop.owner_id = session.user_id().clone();

    let saved = ctx.catalog.save_shop(shop).await?;
    println!("saved shop {} ({} dishes)", saved.name, saved.dishes.len());
    Ok(())
}

fn require_merchant(ctx: &Context) -> Result<Session, Box<dyn std::error::Error>> {
    let session = ctx
        .identity
        .current_user()?
        .ok_or("not logged in (use `bb auth login`)")?;
    if session.role() != UserRole::Merchant {
        return Err("this command needs a merchant session".into());
    }
    Ok(session)
}

fn print_shop(shop: &Shop) {
    println!(
        "{} [{}]  rating {:.1}  delivery {}  min order {}",
        shop.name, shop.id, shop.rating, shop.delivery_time, shop.min_price
    );
    println!("  {}", shop.description);
    for dish in &shop.dishes {
        let desc = dish.description.as_deref().unwrap_or("");
        println!("  - {} [{}] {}  {}", dish.name, dish.id, dish.price, desc);
    }
}
