use crate::models::CartItem;
use crate::storage::CartStorage;

/// Pure cart state. Every transition is a plain synchronous method so the
/// merge/removal semantics can be tested without any persistence attached.
#[derive(Debug, Default, Clone)]
pub struct CartState {
    items: Vec<CartItem>,
    is_open: bool,
}

impl CartState {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self {
            items,
            is_open: false,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Adds a line, merging by id: an existing line's quantity grows by the
    /// requested amount instead of a duplicate entry appearing. New lines
    /// append, so insertion order is the order items were first added.
    /// A requested quantity of 0 counts as 1.
    pub fn add_item(&mut self, item: CartItem) {
        let requested = item.quantity.max(1);
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(requested),
            None => self.items.push(CartItem {
                quantity: requested,
                ..item
            }),
        }
    }

    /// Removing an id that is not in the cart is a no-op, not an error.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Absolute set. Zero or negative means "take it out", identical to
    /// [`remove_item`](Self::remove_item). Unknown ids are ignored. Values
    /// beyond the line capacity saturate rather than wrap.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Raw sum, no currency rounding; rounding happens at display time.
    pub fn total_price(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    pub fn item_count(&self, id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }
}

/// The cart store: pure state plus a persistence adapter. Every mutating
/// operation runs the state transition and then flushes the item list (and
/// only the item list) to storage, so cart contents survive a restart until
/// explicitly cleared. Persistence is best effort: a failed write is logged
/// and never surfaces to the caller.
pub struct CartStore {
    state: CartState,
    storage: Box<dyn CartStorage>,
}

impl CartStore {
    /// Rehydrates from storage. An unreadable snapshot degrades to an empty
    /// cart rather than refusing to start.
    pub fn open(storage: Box<dyn CartStorage>) -> Self {
        let items = match storage.load() {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(error = %err, "cart storage load failed, starting empty");
                Vec::new()
            }
        };
        Self {
            state: CartState::new(items),
            storage,
        }
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(self.state.items()) {
            tracing::warn!(error = %err, "cart storage write failed");
        }
    }

    pub fn add_item(&mut self, item: CartItem) {
        self.state.add_item(item);
        self.persist();
    }

    pub fn remove_item(&mut self, id: &str) {
        self.state.remove_item(id);
        self.persist();
    }

    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        self.state.update_quantity(id, quantity);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.state.clear();
        self.persist();
    }

    // Visibility toggles are UI state, not business data, and do not persist.

    pub fn open_cart(&mut self) {
        self.state.open();
    }

    pub fn close_cart(&mut self) {
        self.state.close();
    }

    pub fn toggle_cart(&mut self) {
        self.state.toggle();
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn items(&self) -> &[CartItem] {
        self.state.items()
    }

    pub fn total_items(&self) -> u32 {
        self.state.total_items()
    }

    pub fn total_price(&self) -> f64 {
        self.state.total_price()
    }

    pub fn item_count(&self, id: &str) -> u32 {
        self.state.item_count(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalizedText;

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: LocalizedText::new("Organic Chocolate Cake", "有机巧克力蛋糕"),
            price,
            image: "/api/placeholder/300/300".to_string(),
            quantity,
            category: "Birthday Cakes".to_string(),
            dietary_info: vec!["organic".to_string()],
            customization: None,
            allergens: None,
        }
    }

    #[test]
    fn add_item_merges_by_id() {
        let mut cart = CartState::default();
        cart.add_item(item("cake-1", 45.0, 1));
        cart.add_item(item("cake-1", 45.0, 2));
        cart.add_item(item("cake-1", 45.0, 1));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count("cake-1"), 4);
    }

    #[test]
    fn add_item_zero_quantity_counts_as_one() {
        let mut cart = CartState::default();
        cart.add_item(item("cake-1", 45.0, 0));
        assert_eq!(cart.item_count("cake-1"), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = CartState::default();
        cart.add_item(item("a", 10.0, 1));
        cart.add_item(item("b", 20.0, 1));
        cart.add_item(item("a", 10.0, 1));
        cart.add_item(item("c", 30.0, 1));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn update_quantity_sets_absolute_value() {
        let mut cart = CartState::default();
        cart.add_item(item("cake-1", 45.0, 3));
        cart.update_quantity("cake-1", 7);
        assert_eq!(cart.item_count("cake-1"), 7);
    }

    #[test]
    fn update_quantity_zero_or_negative_removes() {
        let mut cart = CartState::default();
        cart.add_item(item("cake-1", 45.0, 3));
        cart.update_quantity("cake-1", 0);
        assert!(cart.items().is_empty());

        cart.add_item(item("cake-2", 38.0, 2));
        cart.update_quantity("cake-2", -5);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn update_quantity_saturates_instead_of_truncating() {
        let mut cart = CartState::default();
        cart.add_item(item("cake-1", 45.0, 1));

        // u32::MAX + 6; a plain narrowing cast would leave quantity 5.
        cart.update_quantity("cake-1", 4_294_967_301);
        assert_eq!(cart.item_count("cake-1"), u32::MAX);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn merging_adds_saturates_at_capacity() {
        let mut cart = CartState::default();
        cart.add_item(item("cake-1", 45.0, u32::MAX - 1));
        cart.add_item(item("cake-1", 45.0, 5));
        assert_eq!(cart.item_count("cake-1"), u32::MAX);
    }

    #[test]
    fn update_quantity_unknown_id_is_noop() {
        let mut cart = CartState::default();
        cart.add_item(item("cake-1", 45.0, 1));
        cart.update_quantity("missing", 4);
        assert_eq!(cart.item_count("cake-1"), 1);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut cart = CartState::default();
        cart.add_item(item("cake-1", 45.0, 1));
        cart.remove_item("missing");
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn totals_sum_over_all_lines() {
        let mut cart = CartState::default();
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);

        cart.add_item(item("a", 45.0, 2));
        cart.add_item(item("b", 38.0, 1));
        assert_eq!(cart.total_items(), 3);
        assert!((cart.total_price() - 128.0).abs() < 1e-9);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = CartState::default();
        cart.add_item(item("a", 45.0, 2));
        cart.add_item(item("b", 38.0, 1));
        cart.clear();
        assert_eq!(cart.total_items(), 0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn visibility_toggles() {
        let mut cart = CartState::default();
        assert!(!cart.is_open());
        cart.open();
        assert!(cart.is_open());
        cart.toggle();
        assert!(!cart.is_open());
        cart.toggle();
        assert!(cart.is_open());
        cart.close();
        assert!(!cart.is_open());
    }
}
