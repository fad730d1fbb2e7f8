//! Order commands.

use bamboo_box_core::{OrderId, OrderStatus, ShopId};
use bamboo_box_services::NewOrder;
use bamboo_box_services::annotator::{GeminiAnnotator, annotate_or_degraded};

use crate::Context;

/// Create an order against `shop_id` for the logged-in user.
///
/// With `--annotate` and a configured API key, the order text is sent to
/// the Gemini collaborator first; any failure there degrades to the
/// fallback annotation instead of blocking the order.
///
/// # Errors
///
/// Returns an error if nobody is logged in or the shop id is unknown.
pub async fn create(
    ctx: &Context,
    shop_id: &str,
    content: &str,
    annotate: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = ctx
        .identity
        .current_user()?
        .ok_or("not logged in (use `bb auth login`)")?;

    let shop_id = ShopId::new(shop_id);
    let shop = ctx
        .catalog
        .list_shops()
        .await?
        .into_iter()
        .find(|s| s.id == shop_id)
        .ok_or_else(|| format!("no shop with id {shop_id}"))?;

    let ai_analysis = if annotate {
        match &ctx.config.gemini {
            Some(gemini) => {
                let annotator = GeminiAnnotator::new(gemini);
                Some(annotate_or_degraded(&annotator, content).await)
            }
            None => {
                tracing::warn!("GEMINI_API_KEY not set; creating order without annotation");
                None
            }
        }
    } else {
        None
    };

    let order = ctx
        .orders
        .create(NewOrder {
            user_id: session.user_id().clone(),
            username: session.user.username.clone(),
            shop_id: shop.id,
            shop_name: shop.name,
            content: content.to_owned(),
            ai_analysis,
        })
        .await?;

    println!("created order {} ({})", order.id, order.status);
    if let Some(analysis) = &order.ai_analysis {
        println!("  summary:   {}", analysis.summary);
        println!("  estimate:  {}", analysis.estimated_price);
        println!("  nutrition: {}", analysis.nutrition_tip);
    }
    Ok(())
}

/// List the orders the logged-in account is allowed to see.
///
/// # Errors
///
/// Returns an error if nobody is logged in.
pub async fn list(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let session = ctx
        .identity
        .current_user()?
        .ok_or("not logged in (use `bb auth login`)")?;

    let orders = ctx
        .orders
        .list_for(session.role(), session.user_id())
        .await?;

    if orders.is_empty() {
        println!("no orders");
        return Ok(());
    }
    for order in &orders {
        println!(
            "{}  [{}]  {}  {}  \"{}\"",
            order.created_at.format("%Y-%m-%d %H:%M"),
            order.status,
            order.id,
            order.shop_name,
            order.content
        );
    }
    Ok(())
}

/// Advance an order through the status table.
///
/// # Errors
///
/// Returns an error if the order does not exist or the transition is not
/// legal from its current status.
pub async fn set_status(
    ctx: &Context,
    order_id: &str,
    status: OrderStatus,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = ctx
        .orders
        .set_status(&OrderId::new(order_id), status)
        .await?;
    println!("order {} is now {}", order.id, order.status);
    Ok(())
}
