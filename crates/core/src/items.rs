//! Requested Items

use rustc_hash::FxHashMap;
use thiserror::Error;
use uuid::Uuid;

/// A single product line requested by the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedItem {
    /// The product the shopper wants.
    pub product_id: Uuid,

    /// Number of units requested. Must be at least 1.
    pub quantity: u32,
}

impl RequestedItem {
    /// Creates a new requested item.
    pub fn new(product_id: Uuid, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Errors related to cart request construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartRequestError {
    /// The request contained no items.
    #[error("cart must contain at least one item")]
    Empty,

    /// An item carried a zero quantity.
    #[error("quantity must be at least 1 for product {0}")]
    ZeroQuantity(Uuid),
}

/// A validated cart request: the quantity of each distinct product the
/// shopper wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRequest {
    quantities: FxHashMap<Uuid, u32>,
}

impl CartRequest {
    /// Builds a request from the shopper's item lines.
    ///
    /// Lines naming the same product accumulate their quantities, so a cart
    /// built one tap at a time keeps every unit.
    ///
    /// # Errors
    ///
    /// - [`CartRequestError::Empty`]: no items were provided.
    /// - [`CartRequestError::ZeroQuantity`]: an item had quantity 0.
    pub fn new(items: &[RequestedItem]) -> Result<Self, CartRequestError> {
        if items.is_empty() {
            return Err(CartRequestError::Empty);
        }

        let mut quantities = FxHashMap::default();

        for item in items {
            if item.quantity == 0 {
                return Err(CartRequestError::ZeroQuantity(item.product_id));
            }

            let entry = quantities.entry(item.product_id).or_insert(0_u32);
            *entry = entry.saturating_add(item.quantity);
        }

        Ok(Self { quantities })
    }

    /// The number of distinct products requested.
    pub fn distinct_items(&self) -> usize {
        self.quantities.len()
    }

    /// The requested quantity for a product, if it is in the cart.
    pub fn quantity(&self, product_id: Uuid) -> Option<u32> {
        self.quantities.get(&product_id).copied()
    }

    /// The distinct product ids in the cart, in a stable order.
    pub fn product_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self.quantities.keys().copied().collect();
        ids.sort_unstable();

        ids
    }
}
