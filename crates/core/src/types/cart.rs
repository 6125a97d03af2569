//! Read-only cart snapshot as reported by the commerce backend.
//!
//! The storefront never mutates a cart. It only derives a subtotal (trusting
//! the backend's `cart_amount`) and an item count (summing line quantities).

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::price::Price;

/// A cart as returned by the commerce API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Cart total computed upstream.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cart_amount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub line_items: LineItems,
    #[serde(default, deserialize_with = "null_as_default")]
    pub redirect_urls: RedirectUrls,
}

/// Line items grouped by category.
///
/// Every category defaults to empty so partial payloads still deserialize.
/// An explicit `null` counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItems {
    #[serde(default, deserialize_with = "null_as_default")]
    pub physical_items: Vec<LineItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_items: Vec<LineItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub digital_items: Vec<LineItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gift_certificates: Vec<LineItem>,
}

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Gift certificates carry no quantity upstream; each counts as one.
    #[serde(default = "one")]
    pub quantity: u32,
    /// Gift certificates report their value as `amount`.
    #[serde(default, alias = "amount")]
    pub sale_price: Decimal,
}

/// Where the shopper continues with this cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectUrls {
    #[serde(default)]
    pub cart_url: Option<String>,
    #[serde(default)]
    pub checkout_url: Option<String>,
}

impl CartSnapshot {
    /// All line items, in category order: physical, custom, digital, gift certificates.
    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        let lines = &self.line_items;
        lines
            .physical_items
            .iter()
            .chain(&lines.custom_items)
            .chain(&lines.digital_items)
            .chain(&lines.gift_certificates)
    }

    /// Sum of quantities across every category.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items().map(|item| u64::from(item.quantity)).sum()
    }

    /// The upstream cart total.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        Price::from_amount(self.cart_amount)
    }
}

impl LineItem {
    /// Unit sale price.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        Price::from_amount(self.sale_price)
    }
}

const fn one() -> u32 {
    1
}

/// Treats `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Line ids are UUID strings for products but numeric for some gift certificates.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn line(id: &str, quantity: u32) -> LineItem {
        LineItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            image_url: None,
            quantity,
            sale_price: Decimal::ONE,
        }
    }

    #[test]
    fn test_item_count_sums_across_categories() {
        let cart = CartSnapshot {
            cart_amount: Decimal::from(3),
            line_items: LineItems {
                physical_items: vec![line("a", 2)],
                digital_items: vec![line("b", 1)],
                ..LineItems::default()
            },
            redirect_urls: RedirectUrls::default(),
        };

        assert_eq!(cart.item_count(), 3);
        let ids: Vec<_> = cart.items().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_missing_categories_default_to_empty() {
        let cart: CartSnapshot = serde_json::from_value(json!({
            "cart_amount": 12.5,
            "line_items": {
                "physical_items": [
                    {"id": "p1", "name": "Mug", "image_url": "https://cdn/x.png", "quantity": 4, "sale_price": 3.125}
                ],
                "gift_certificates": null
            }
        }))
        .unwrap();

        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.subtotal().formatted_amount(), "12.50");
        assert!(cart.redirect_urls.cart_url.is_none());
    }

    #[test]
    fn test_category_order_is_stable() {
        let cart: CartSnapshot = serde_json::from_value(json!({
            "cart_amount": 0,
            "line_items": {
                "gift_certificates": [{"id": 7, "name": "Gift", "amount": 25}],
                "custom_items": [{"id": "c", "name": "Engraving", "quantity": 1, "sale_price": 5}],
                "physical_items": [{"id": "p", "name": "Pen", "quantity": 2, "sale_price": 1}]
            }
        }))
        .unwrap();

        let ids: Vec<_> = cart.items().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["p", "c", "7"]);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_gift_certificate_uses_amount_as_price() {
        let item: LineItem =
            serde_json::from_value(json!({"id": "g", "name": "Gift", "amount": 25})).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price().formatted_amount(), "25.00");
    }

    #[test]
    fn test_null_parent_objects_keep_the_rest_of_the_cart() {
        let cart: CartSnapshot = serde_json::from_value(json!({
            "cart_amount": 9,
            "line_items": {
                "physical_items": [{"id": "p", "name": "Pack", "quantity": 2, "sale_price": 3}]
            },
            "redirect_urls": null
        }))
        .unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.subtotal().formatted_amount(), "9.00");
        assert_eq!(cart.redirect_urls, RedirectUrls::default());

        let cart: CartSnapshot = serde_json::from_value(json!({
            "cart_amount": null,
            "line_items": null,
            "redirect_urls": {"cart_url": "https://shop/cart.php", "checkout_url": null}
        }))
        .unwrap();

        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal().formatted_amount(), "0.00");
        assert_eq!(cart.redirect_urls.cart_url.as_deref(), Some("https://shop/cart.php"));
        assert!(cart.redirect_urls.checkout_url.is_none());
    }

    #[test]
    fn test_empty_payload_is_an_empty_cart() {
        let cart: CartSnapshot = serde_json::from_value(json!({})).unwrap();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal().formatted_amount(), "0.00");
    }
}
