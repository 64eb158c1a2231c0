use std::sync::Arc;

use crate::models::{CartLine, CartState, Product};
use crate::storage::{CART_KEY, SnapshotStore};

/// Authoritative in-memory cart with a durable mirror.
///
/// Every command is a synchronous reduction over the current state; after
/// each mutation the totals are recomputed from scratch and the full
/// serialized state overwrites the `cart` snapshot. Persistence is never
/// allowed to block a command: if the write fails the in-memory state stays
/// authoritative for the session and a warning is logged.
pub struct CartStore {
    state: CartState,
    storage: Arc<dyn SnapshotStore>,
}

impl CartStore {
    /// Hydrates from a prior snapshot if one exists; a missing or corrupted
    /// snapshot yields the empty cart.
    pub fn new(storage: Arc<dyn SnapshotStore>) -> Self {
        let state = hydrate(storage.as_ref());
        Self { state, storage }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Adds one unit of `product`: increments the existing line's quantity,
    /// or appends a new line snapshotting the product's current
    /// price/discount. Stock limits are the caller's concern.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .state
            .items
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity += 1;
        } else {
            self.state.items.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
        self.commit();
    }

    /// Removes one unit: decrements the line's quantity, or removes the line
    /// entirely when it would drop to zero. No-op when absent.
    pub fn decrease(&mut self, product_id: u32) {
        let Some(pos) = self
            .state
            .items
            .iter()
            .position(|line| line.product.id == product_id)
        else {
            return;
        };
        if self.state.items[pos].quantity > 1 {
            self.state.items[pos].quantity -= 1;
        } else {
            self.state.items.remove(pos);
        }
        self.commit();
    }

    /// Removes the line for `product_id` regardless of quantity. No-op when
    /// absent.
    pub fn delete(&mut self, product_id: u32) {
        let before = self.state.items.len();
        self.state.items.retain(|line| line.product.id != product_id);
        if self.state.items.len() == before {
            return;
        }
        self.commit();
    }

    /// Resets to the empty cart.
    pub fn clear(&mut self) {
        self.state = CartState::default();
        self.persist();
    }

    fn commit(&mut self) {
        recompute_totals(&mut self.state);
        self.persist();
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.state) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(error = %err, "cart snapshot encode failed");
                return;
            }
        };
        if let Err(err) = self.storage.save(CART_KEY, &json) {
            tracing::warn!(error = %err, "cart snapshot write failed, in-memory cart stays authoritative");
        }
    }
}

fn recompute_totals(state: &mut CartState) {
    state.total_items = state.items.iter().map(|line| line.quantity).sum();
    state.total_price = state.items.iter().map(CartLine::line_total).sum();
}

fn hydrate(storage: &dyn SnapshotStore) -> CartState {
    let text = match storage.load(CART_KEY) {
        Ok(Some(text)) => text,
        Ok(None) => return CartState::default(),
        Err(err) => {
            tracing::warn!(error = %err, "cart snapshot unreadable, starting empty");
            return CartState::default();
        }
    };
    match serde_json::from_str::<CartState>(&text) {
        Ok(mut state) => {
            // Totals are derived; restore the invariant in case the snapshot
            // was written with stale ones.
            recompute_totals(&mut state);
            state
        }
        Err(err) => {
            tracing::warn!(error = %err, "cart snapshot corrupted, starting empty");
            CartState::default()
        }
    }
}
