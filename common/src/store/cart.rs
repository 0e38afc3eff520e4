use serde::{Deserialize, Serialize};

use super::{Broadcast, CART_KEY, KeyValueStore, StoreEvent, read_json, write_json};
use crate::model::product::Product;
use crate::requests::{NewOrder, NewOrderItem};

/// A cart line: the product copy as it was when added, plus the quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("a quantidade deve ser pelo menos 1")]
    InvalidQuantity,
    #[error("o produto {0} não está no carrinho")]
    NotInCart(String),
}

/// The `cart` entry of local storage.
pub struct Cart<'a, S, B> {
    storage: &'a S,
    broadcast: &'a B,
}

impl<'a, S: KeyValueStore, B: Broadcast> Cart<'a, S, B> {
    pub fn new(storage: &'a S, broadcast: &'a B) -> Self {
        Self { storage, broadcast }
    }

    pub fn items(&self) -> Vec<CartItem> {
        read_json(self.storage, CART_KEY).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Sum of quantities, the number on the navbar badge.
    pub fn item_count(&self) -> u32 {
        self.items().iter().map(|item| item.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        total(&self.items())
    }

    /// Adds `quantity` units, merging into the existing line for the same
    /// product id. New lines pin the product's primary image.
    pub fn add(&self, product: &Product, quantity: u32) -> Result<u32, CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity);
        }
        let mut items = self.items();
        let merged = match items.iter_mut().find(|item| item.product.id == product.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
                existing.quantity
            }
            None => {
                let mut copy = product.clone();
                copy.image = Some(product.primary_image());
                items.push(CartItem { product: copy, quantity });
                quantity
            }
        };
        self.save(&items);
        Ok(merged)
    }

    /// Sets the quantity of a line. Anything below 1 is refused without
    /// touching storage, so the decrement button stops at 1.
    pub fn update_quantity(&self, product_id: &str, quantity: u32) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity);
        }
        let mut items = self.items();
        let line = items
            .iter_mut()
            .find(|item| item.product.id == product_id)
            .ok_or_else(|| CartError::NotInCart(product_id.to_string()))?;
        line.quantity = quantity;
        self.save(&items);
        Ok(())
    }

    pub fn remove(&self, product_id: &str) {
        let items: Vec<CartItem> = self
            .items()
            .into_iter()
            .filter(|item| item.product.id != product_id)
            .collect();
        self.save(&items);
    }

    pub fn clear(&self) {
        self.storage.remove(CART_KEY);
        self.broadcast.publish(StoreEvent::CartUpdated);
    }

    /// Order body for the current cart, `None` when the cart is empty.
    pub fn checkout_order(&self, note: &str) -> Option<NewOrder> {
        checkout_order(&self.items(), note)
    }

    fn save(&self, items: &[CartItem]) {
        write_json(self.storage, CART_KEY, &items);
        self.broadcast.publish(StoreEvent::CartUpdated);
    }
}

pub fn total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::subtotal).sum()
}

pub fn checkout_order(items: &[CartItem], note: &str) -> Option<NewOrder> {
    if items.is_empty() {
        return None;
    }
    Some(NewOrder {
        items: items
            .iter()
            .map(|item| NewOrderItem {
                product: item.product.id.clone(),
                quantity: item.quantity,
                price: item.product.price,
                name: item.product.name.clone(),
                brand: item.product.brand.clone(),
                sku: item.product.sku.clone(),
            })
            .collect(),
        total_amount: total(items),
        customer_note: note.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{MemoryStore, RecordingBroadcast};

    fn product(id: &str, price: f64) -> Product {
        Product { id: id.into(), name: format!("Produto {id}"), price, ..Product::default() }
    }

    #[test]
    fn adding_same_product_merges_quantity() {
        let storage = MemoryStore::default();
        let events = RecordingBroadcast::default();
        let cart = Cart::new(&storage, &events);

        assert_eq!(cart.add(&product("p1", 10.0), 1), Ok(1));
        assert_eq!(cart.add(&product("p1", 10.0), 2), Ok(3));
        assert_eq!(cart.add(&product("p2", 5.0), 1), Ok(1));

        let items = cart.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 3);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(events.take(), vec![StoreEvent::CartUpdated; 3]);
    }

    #[test]
    fn new_line_pins_primary_image() {
        let storage = MemoryStore::default();
        let events = RecordingBroadcast::default();
        let cart = Cart::new(&storage, &events);
        let mut motor = product("p1", 1.0);
        motor.category = "Motores".into();
        cart.add(&motor, 1).unwrap();
        assert_eq!(cart.items()[0].product.image.as_deref(), Some("/images/slide1.jpg"));
    }

    #[test]
    fn quantity_never_drops_below_one() {
        let storage = MemoryStore::default();
        let events = RecordingBroadcast::default();
        let cart = Cart::new(&storage, &events);
        cart.add(&product("p1", 10.0), 1).unwrap();
        events.take();
        let before = storage.raw(CART_KEY);

        assert_eq!(cart.update_quantity("p1", 0), Err(CartError::InvalidQuantity));
        assert_eq!(cart.add(&product("p1", 10.0), 0), Err(CartError::InvalidQuantity));
        assert_eq!(storage.raw(CART_KEY), before);
        assert!(events.take().is_empty());

        cart.update_quantity("p1", 4).unwrap();
        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(
            cart.update_quantity("nope", 2),
            Err(CartError::NotInCart("nope".into()))
        );
    }

    #[test]
    fn checkout_totals_price_times_quantity() {
        let storage = MemoryStore::default();
        let events = RecordingBroadcast::default();
        let cart = Cart::new(&storage, &events);
        cart.add(&product("p1", 10.0), 2).unwrap();

        let order = cart.checkout_order("entregar de manhã").unwrap();
        assert_eq!(order.total_amount, 20.0);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product, "p1");
        assert_eq!(order.items[0].quantity, 2);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["totalAmount"], 20.0);
        assert_eq!(json["customerNote"], "entregar de manhã");

        cart.clear();
        assert!(storage.raw(CART_KEY).is_none());
        assert!(cart.checkout_order("").is_none());
    }

    #[test]
    fn remove_drops_only_that_line() {
        let storage = MemoryStore::default();
        let events = RecordingBroadcast::default();
        let cart = Cart::new(&storage, &events);
        cart.add(&product("p1", 1.0), 1).unwrap();
        cart.add(&product("p2", 2.0), 1).unwrap();
        cart.remove("p1");
        let ids: Vec<String> = cart.items().into_iter().map(|i| i.product.id).collect();
        assert_eq!(ids, vec!["p2".to_string()]);
    }

    #[test]
    fn corrupt_storage_reads_as_empty() {
        let storage = MemoryStore::default();
        let events = RecordingBroadcast::default();
        storage.set(CART_KEY, "{not json");
        let cart = Cart::new(&storage, &events);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn stored_lines_keep_backend_id_key() {
        let storage = MemoryStore::default();
        let events = RecordingBroadcast::default();
        Cart::new(&storage, &events).add(&product("p7", 3.0), 1).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&storage.raw(CART_KEY).unwrap()).unwrap();
        assert_eq!(raw[0]["_id"], "p7");
        assert_eq!(raw[0]["quantity"], 1);
    }
}
