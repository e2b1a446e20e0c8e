// ============================================================================
// Storefront Core - Menu Entity
// File: crates/storefront-core/src/domain/menu.rs
// Description: Static restaurant catalog
// ============================================================================

use serde::Serialize;

/// Menu item (read-only catalog entry)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub price: f64,
    pub description: &'static str,
    pub image: &'static str,
}

const MENU: [MenuItem; 6] = [
    MenuItem {
        id: 1,
        name: "Margherita Pizza",
        category: "Pizza",
        price: 12.99,
        description: "Classic tomato sauce, mozzarella, and basil",
        image: "🍕",
    },
    MenuItem {
        id: 2,
        name: "Cheeseburger",
        category: "Burgers",
        price: 9.99,
        description: "Beef patty with cheese, lettuce, and tomato",
        image: "🍔",
    },
    MenuItem {
        id: 3,
        name: "Caesar Salad",
        category: "Salads",
        price: 8.99,
        description: "Romaine lettuce with Caesar dressing and croutons",
        image: "🥗",
    },
    MenuItem {
        id: 4,
        name: "Pepperoni Pizza",
        category: "Pizza",
        price: 14.99,
        description: "Tomato sauce, mozzarella, and pepperoni",
        image: "🍕",
    },
    MenuItem {
        id: 5,
        name: "Pasta Carbonara",
        category: "Pasta",
        price: 13.99,
        description: "Creamy pasta with bacon and parmesan",
        image: "🍝",
    },
    MenuItem {
        id: 6,
        name: "Chicken Wings",
        category: "Appetizers",
        price: 10.99,
        description: "Spicy buffalo wings with ranch dressing",
        image: "🍗",
    },
];

pub fn menu() -> &'static [MenuItem] {
    &MENU
}
