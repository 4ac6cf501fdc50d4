use std::sync::{Arc, Mutex, MutexGuard};

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::payments::StripeClient;

#[derive(Clone)]
pub struct AppState {
    cart: Arc<Mutex<CartStore>>,
    pub catalog: Arc<Catalog>,
    pub payments: Arc<StripeClient>,
}

impl AppState {
    pub fn new(cart: CartStore, catalog: Catalog, payments: StripeClient) -> Self {
        Self {
            cart: Arc::new(Mutex::new(cart)),
            catalog: Arc::new(catalog),
            payments: Arc::new(payments),
        }
    }

    /// Exclusive access to the cart store. Each operation holds the lock for
    /// the duration of one synchronous transition and never across an await,
    /// so mutations cannot interleave mid-update.
    pub fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.cart
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
