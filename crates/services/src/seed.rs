//! Demo seed data.
//!
//! Seeds two accounts (an end user and a merchant) and three shops with
//! menus, so the demo is browsable immediately. Seeding is idempotent per
//! bucket: an existing users or shops bucket is left alone.

use std::sync::Arc;

use rust_decimal::Decimal;

use bamboo_box_core::{DishId, SessionToken, ShopId, UserId, UserRole, Username};

use crate::models::{Dish, Shop, User};
use crate::store::{Store, StoreError, StoreExt, buckets};

/// What `ensure_seeded` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Whether the users bucket was written.
    pub seeded_users: bool,
    /// Whether the shops bucket was written.
    pub seeded_shops: bool,
}

/// Seed the store's users and shops buckets if they are empty.
///
/// # Errors
///
/// Returns `StoreError` if a bucket cannot be read or written.
pub fn ensure_seeded(store: &Arc<dyn Store>) -> Result<SeedSummary, StoreError> {
    let seeded_users = if store.get_raw(buckets::USERS)?.is_none() {
        store.put(buckets::USERS, &seed_users())?;
        tracing::info!("seeded demo users");
        true
    } else {
        false
    };

    let seeded_shops = if store.get_raw(buckets::SHOPS)?.is_none() {
        store.put(buckets::SHOPS, &seed_shops())?;
        tracing::info!("seeded demo shops");
        true
    } else {
        false
    };

    Ok(SeedSummary {
        seeded_users,
        seeded_shops,
    })
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: UserId::new("user-test-1"),
            username: Username::parse("test").expect("seed username is valid"),
            email: "test@test.com".parse().expect("seed email is valid"),
            role: UserRole::User,
            token: Some(SessionToken::new("token-test")),
            password_hash: None,
        },
        User {
            id: UserId::new("merchant-boss-1"),
            username: Username::parse("boss").expect("seed username is valid"),
            email: "boss@test.com".parse().expect("seed email is valid"),
            role: UserRole::Merchant,
            token: Some(SessionToken::new("token-boss")),
            password_hash: None,
        },
    ]
}

#[allow(clippy::too_many_lines)]
fn seed_shops() -> Vec<Shop> {
    vec![
        Shop {
            id: ShopId::new("shop-1"),
            owner_id: UserId::new("merchant-boss-1"),
            name: "Old Zhang Noodle House".to_owned(),
            description: "Thirty years of hand-pulled noodles and rich, slow broth.".to_owned(),
            rating: 4.8,
            delivery_time: "30 min".to_owned(),
            min_price: Decimal::from(20),
            image: "https://images.unsplash.com/photo-1552611052-33e04de081de?auto=format&fit=crop&q=80&w=800".to_owned(),
            chef_name: Some("Chef Zhang".to_owned()),
            chef_image: Some("https://images.unsplash.com/photo-1583394838336-acd977736f90?auto=format&fit=crop&q=80&w=400".to_owned()),
            chef_intro: Some("Fourth-generation noodle maker, forty years at the board.".to_owned()),
            dishes: vec![
                Dish {
                    id: DishId::new("d-1-1"),
                    name: "House braised beef noodles".to_owned(),
                    price: Decimal::from(28),
                    description: Some("Generous beef chunks, secret-recipe broth".to_owned()),
                    image: Some("https://images.unsplash.com/photo-1554502078-ef0fc409efce?auto=format&fit=crop&q=80&w=400".to_owned()),
                },
                Dish {
                    id: DishId::new("d-1-2"),
                    name: "Pickled greens and pork noodles".to_owned(),
                    price: Decimal::from(22),
                    description: Some("Sharp pickled greens, very moreish".to_owned()),
                    image: None,
                },
                Dish {
                    id: DishId::new("d-1-3"),
                    name: "Scallion oil noodles".to_owned(),
                    price: Decimal::from(15),
                    description: Some("Simple and fragrant".to_owned()),
                    image: None,
                },
                Dish {
                    id: DishId::new("d-1-4"),
                    name: "Pan-fried dumplings (6)".to_owned(),
                    price: Decimal::from(12),
                    description: Some("Thin skin, big filling, fried to order".to_owned()),
                    image: None,
                },
            ],
        },
        Shop {
            id: ShopId::new("shop-2"),
            owner_id: UserId::new("system-placeholder-1"),
            name: "Happy Burger Hut".to_owned(),
            description: "American-style burgers, patties grilled to order.".to_owned(),
            rating: 4.5,
            delivery_time: "25 min".to_owned(),
            min_price: Decimal::from(30),
            image: "https://images.unsplash.com/photo-1550547660-d9450f859349?auto=format&fit=crop&q=80&w=800".to_owned(),
            chef_name: None,
            chef_image: None,
            chef_intro: None,
            dishes: vec![
                Dish {
                    id: DishId::new("d-2-1"),
                    name: "Classic cheeseburger".to_owned(),
                    price: Decimal::from(32),
                    description: Some("Double cheese, grass-fed beef".to_owned()),
                    image: Some("https://images.unsplash.com/photo-1568901346375-23c9450c58cd?auto=format&fit=crop&q=80&w=400".to_owned()),
                },
                Dish {
                    id: DishId::new("d-2-2"),
                    name: "Spicy chicken burger".to_owned(),
                    price: Decimal::from(26),
                    description: Some("Crispy, juicy, properly hot".to_owned()),
                    image: None,
                },
            ],
        },
        Shop {
            id: ShopId::new("shop-3"),
            owner_id: UserId::new("system-placeholder-2"),
            name: "Green Leaf Salad Bar".to_owned(),
            description: "Low-fat bowls with market-fresh vegetables.".to_owned(),
            rating: 4.9,
            delivery_time: "40 min".to_owned(),
            min_price: Decimal::from(35),
            image: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?auto=format&fit=crop&q=80&w=800".to_owned(),
            chef_name: None,
            chef_image: None,
            chef_intro: None,
            dishes: vec![Dish {
                id: DishId::new("d-3-1"),
                name: "Chicken cobb salad".to_owned(),
                price: Decimal::from(38),
                description: Some("Slow-cooked chicken breast, loaded toppings".to_owned()),
                image: Some("https://images.unsplash.com/photo-1546069901-ba9599a7e63c?auto=format&fit=crop&q=80&w=400".to_owned()),
            }],
        },
    ]
}
