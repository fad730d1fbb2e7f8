//! Shop and dish records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bamboo_box_core::{DishId, ShopId, UserId};

/// A merchant-owned storefront.
///
/// Created and replaced wholesale by its owning merchant via the catalog
/// service; there is no deletion path. In practice a merchant owns at most
/// one shop, but nothing enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: ShopId,
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    pub rating: f64,
    /// Display label, e.g. "30 min". Not parsed anywhere.
    pub delivery_time: String,
    /// Minimum order price for delivery.
    pub min_price: Decimal,
    /// Cover image reference.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chef_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chef_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chef_intro: Option<String>,
    /// Menu in display order.
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

/// A named, priced menu item belonging to exactly one shop.
///
/// Dish IDs are unique within their shop only; dishes have no identity
/// across shops and live or die with the owning shop's edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_layout_uses_camel_case() {
        let shop = Shop {
            id: ShopId::new("shop-1"),
            owner_id: UserId::new("merchant-boss-1"),
            name: "Old Zhang Noodle House".to_owned(),
            description: "Hand-pulled noodles".to_owned(),
            rating: 4.8,
            delivery_time: "30 min".to_owned(),
            min_price: Decimal::from(20),
            image: "https://example.com/cover.jpg".to_owned(),
            chef_name: None,
            chef_image: None,
            chef_intro: None,
            dishes: vec![Dish {
                id: DishId::new("d-1-1"),
                name: "House beef noodles".to_owned(),
                price: Decimal::from(28),
                description: Some("Signature broth".to_owned()),
                image: None,
            }],
        };

        let json = serde_json::to_value(&shop).unwrap();
        assert_eq!(json["ownerId"], "merchant-boss-1");
        assert_eq!(json["deliveryTime"], "30 min");
        assert_eq!(json["dishes"][0]["id"], "d-1-1");
        assert!(json.get("chefName").is_none());
    }

    #[test]
    fn test_dish_list_defaults_to_empty() {
        let raw = r#"{"id":"s","ownerId":"o","name":"n","description":"d",
                      "rating":4.5,"deliveryTime":"25 min","minPrice":"30",
                      "image":"img"}"#;
        let shop: Shop = serde_json::from_str(raw).unwrap();
        assert!(shop.dishes.is_empty());
    }
}
