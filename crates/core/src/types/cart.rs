//! Shopping cart record.

use serde::{Deserialize, Serialize};

use super::id::{CartId, ProductId};
use super::record::Record;

/// A shopping cart as persisted in the carts collection file.
///
/// Items keep insertion order for display; a product appears at most once,
/// with repeated adds merged into the item's quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart. The store assigns the real id on insert.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: CartId::new(""),
            items: Vec::new(),
        }
    }

    /// Find the item referencing `product_id`, if present.
    #[must_use]
    pub fn item_for(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }
}

impl Record for Cart {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn set_id(&mut self, id: String) {
        self.id = CartId::new(id);
    }
}

/// One line in a cart: a product reference and how many of it.
///
/// The reference is validated against the catalog once, when the item is
/// added; a later product deletion leaves it dangling (accepted limitation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartItem {
    /// Create a fresh line for `product_id` with quantity 1.
    #[must_use]
    pub fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            quantity: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_item_wire_format() {
        let item = CartItem::new(ProductId::new("64f1a2b3c4d5e6f708192a3b"));
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["productId"], "64f1a2b3c4d5e6f708192a3b");
        assert_eq!(json["quantity"], 1);
    }

    #[test]
    fn test_cart_items_default_when_missing() {
        let cart: Cart = serde_json::from_str(r#"{"id":"abc"}"#).expect("deserialize");
        assert!(cart.items.is_empty());
    }

    #[test]
    fn test_item_for() {
        let pid = ProductId::new("aaaaaaaaaaaaaaaaaaaaaaaa");
        let mut cart = Cart::empty();
        assert!(cart.item_for(&pid).is_none());

        cart.items.push(CartItem::new(pid.clone()));
        assert_eq!(cart.item_for(&pid).map(|i| i.quantity), Some(1));
    }
}
