//! The cart store: state container, persistence write-through, notices.

use crate::cart::{CartState, LineItem};
use crate::catalog::{Product, SelectedSize};
use crate::ids::ProductId;
use crate::money::Money;
use crate::notify::{NoticeKind, Notifier};
use std::rc::Rc;
use std::sync::{Arc, PoisonError, RwLock};
use storefront_kv::{KeyValue, KeyValueExt};

/// Storage slot the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "cart-storage";

type Subscriber = Rc<dyn Fn(&CartState)>;

/// The single owner of the cart state.
///
/// Every UI component reads through [`CartStore::snapshot`] and mutates only
/// via the operations here; each mutation swaps in a complete new snapshot,
/// writes it through to storage, and fans it out to subscribers. Operations
/// never fail toward the caller: rejected actions (stock ceiling, missing
/// line) surface as a notice and leave the state unchanged.
pub struct CartStore {
    state: RwLock<CartState>,
    storage: Arc<dyn KeyValue>,
    notifier: Arc<dyn Notifier>,
    subscribers: RwLock<Vec<Subscriber>>,
}

impl CartStore {
    /// Hydrate the cart from its storage slot.
    ///
    /// A missing or unreadable snapshot degrades to an empty cart; shopping
    /// is never blocked by a corrupt slot.
    pub fn load(storage: Arc<dyn KeyValue>, notifier: Arc<dyn Notifier>) -> Self {
        let state = match storage.get::<CartState>(CART_STORAGE_KEY) {
            Ok(Some(state)) => state,
            Ok(None) => CartState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not restore cart snapshot, starting empty");
                CartState::default()
            }
        };
        Self {
            state: RwLock::new(state),
            storage,
            notifier,
            subscribers: RwLock::new(Vec::new()),
        }
    }

    /// Register a callback invoked with every new snapshot.
    ///
    /// A callback may itself call [`CartStore::subscribe`]; the new
    /// subscriber starts receiving snapshots from the next mutation on.
    pub fn subscribe(&self, subscriber: impl Fn(&CartState) + 'static) {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Rc::new(subscriber));
    }

    /// A copy of the current snapshot.
    pub fn snapshot(&self) -> CartState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The current line items, oldest first.
    pub fn items(&self) -> Vec<LineItem> {
        self.snapshot().items
    }

    /// Sum of discounted line subtotals.
    pub fn subtotal(&self) -> Money {
        self.snapshot().subtotal()
    }

    /// Add one unit of `product` in the given size.
    ///
    /// An existing line below the product's stock ceiling is incremented;
    /// a line at the ceiling is left unchanged and an error notice is
    /// emitted; an unknown (product, size) key appends a quantity-1 line
    /// carrying the product's current price and offer.
    ///
    /// Size selection rules ("pick a size first") are the caller's job;
    /// the store trusts what it is handed.
    pub fn add_item(&self, product: &Product, selected_size: Option<&SelectedSize>) {
        let size_value = selected_size.map(|s| s.value.as_str());
        tracing::debug!(product = %product.id, size = ?size_value, "adding item");

        let current = self.snapshot();
        match current.find(&product.id, size_value) {
            Some(existing) if existing.quantity < product.stock => {
                let items = current
                    .items
                    .iter()
                    .map(|item| {
                        if item.matches(&product.id, size_value) {
                            let mut bumped = item.clone();
                            bumped.quantity += 1;
                            bumped
                        } else {
                            item.clone()
                        }
                    })
                    .collect();
                self.replace(CartState { items });
                self.notifier
                    .notify(NoticeKind::Success, "Item quantity increased.");
            }
            Some(_) => {
                self.notifier
                    .notify(NoticeKind::Error, "Maximum stock reached.");
            }
            None => {
                let mut next = current;
                next.items
                    .push(LineItem::from_product(product, selected_size.cloned()));
                self.replace(next);
                self.notifier
                    .notify(NoticeKind::Success, "Item added to cart.");
            }
        }
    }

    /// Take one unit off the matching line.
    ///
    /// At quantity 1 the line is removed entirely. A missing key is a
    /// silent no-op.
    pub fn reduce_item(&self, product_id: &ProductId, selected_size: Option<&SelectedSize>) {
        let size_value = selected_size.map(|s| s.value.as_str());
        tracing::debug!(product = %product_id, size = ?size_value, "reducing item");

        let current = self.snapshot();
        let Some(existing) = current.find(product_id, size_value) else {
            return;
        };

        if existing.quantity > 1 {
            let items = current
                .items
                .iter()
                .map(|item| {
                    if item.matches(product_id, size_value) {
                        let mut reduced = item.clone();
                        reduced.quantity -= 1;
                        reduced
                    } else {
                        item.clone()
                    }
                })
                .collect();
            self.replace(CartState { items });
        } else {
            self.remove_matching(&current, product_id, size_value);
        }
    }

    /// Remove the matching line regardless of quantity.
    ///
    /// A missing key leaves the state unchanged; the removal notice is
    /// emitted either way, exactly like the storefront always toasted.
    pub fn remove_item(&self, product_id: &ProductId, selected_size: Option<&SelectedSize>) {
        let size_value = selected_size.map(|s| s.value.as_str());
        tracing::debug!(product = %product_id, size = ?size_value, "removing item");

        let current = self.snapshot();
        self.remove_matching(&current, product_id, size_value);
    }

    /// Empty the cart. Used after checkout completion; emits no notice.
    pub fn remove_all(&self) {
        tracing::debug!("removing all items");
        self.replace(CartState::default());
    }

    /// Quantity held for the compound key; 0 when absent.
    pub fn item_quantity(&self, product_id: &ProductId, selected_size: Option<&SelectedSize>) -> u32 {
        let size_value = selected_size.map(|s| s.value.as_str());
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .find(product_id, size_value)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// The size of whichever line for this product comes first.
    ///
    /// Matches by product id alone, ignoring the size half of the compound
    /// key: when the same product sits in the cart in several sizes the
    /// earliest entry wins. Kept bug-for-bug with the storefront pending
    /// product-owner confirmation.
    pub fn item_selected_size(&self, product_id: &ProductId) -> Option<SelectedSize> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .items
            .iter()
            .find(|item| item.product_id == *product_id)
            .and_then(|item| item.selected_size.clone())
    }

    fn remove_matching(&self, current: &CartState, product_id: &ProductId, size_value: Option<&str>) {
        let items = current
            .items
            .iter()
            .filter(|item| !item.matches(product_id, size_value))
            .cloned()
            .collect();
        self.replace(CartState { items });
        self.notifier
            .notify(NoticeKind::Success, "Item removed from the cart.");
    }

    /// Swap in a new snapshot, write it through, and fan it out.
    ///
    /// The write-through is best effort: a storage failure is logged and
    /// the in-memory state stays authoritative for the session.
    fn replace(&self, next: CartState) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            *state = next.clone();
        }
        if let Err(e) = self.storage.set(CART_STORAGE_KEY, &next) {
            tracing::warn!(error = %e, "cart write-through failed");
        }
        // The lock is released before delivery so a callback can subscribe.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for subscriber in &subscribers {
            subscriber(&next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SizeOption;
    use crate::money::Currency;
    use std::cell::Cell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use storefront_kv::{MemoryStore, StoreError};

    /// Notifier double that records every notice in order.
    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<(NoticeKind, String)>>,
    }

    impl RecordingNotifier {
        fn taken(&self) -> Vec<(NoticeKind, String)> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NoticeKind, message: &str) {
            self.notices.lock().unwrap().push((kind, message.to_string()));
        }
    }

    fn product(id: &str, stock: u32, price_cents: i64, offer: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: None,
            price: Money::new(price_cents, Currency::BDT),
            offer_percent: offer,
            stock,
            images: Vec::new(),
            sizes: vec![SizeOption {
                name: "Medium".to_string(),
                value: "M".to_string(),
            }],
            category: None,
        }
    }

    fn size(value: &str) -> SelectedSize {
        SelectedSize::new(format!("Size {value}"), value)
    }

    fn store() -> (CartStore, Arc<MemoryStore>, Arc<RecordingNotifier>) {
        let storage = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let cart = CartStore::load(storage.clone(), notifier.clone());
        (cart, storage, notifier)
    }

    #[test]
    fn test_add_item_appends_new_line() {
        let (cart, _, notifier) = store();
        cart.add_item(&product("p1", 5, 10000, 0.0), Some(&size("M")));

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
        assert_eq!(
            notifier.taken(),
            vec![(NoticeKind::Success, "Item added to cart.".to_string())]
        );
    }

    #[test]
    fn test_repeat_add_keeps_one_line_per_key() {
        let (cart, _, _) = store();
        let p = product("p1", 5, 10000, 0.0);
        let m = size("M");
        cart.add_item(&p, Some(&m));
        cart.add_item(&p, Some(&m));
        cart.add_item(&p, Some(&m));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_quantity(&p.id, Some(&m)), 3);
    }

    #[test]
    fn test_sizes_are_distinct_identities() {
        let (cart, _, _) = store();
        let p = product("p1", 5, 10000, 0.0);
        cart.add_item(&p, Some(&size("M")));
        cart.add_item(&p, Some(&size("L")));
        cart.add_item(&p, None);

        let items = cart.items();
        assert_eq!(items.len(), 3);
        assert_eq!(cart.item_quantity(&p.id, Some(&size("M"))), 1);
        assert_eq!(cart.item_quantity(&p.id, Some(&size("L"))), 1);
        assert_eq!(cart.item_quantity(&p.id, None), 1);
    }

    #[test]
    fn test_stock_ceiling_rejects_add() {
        let (cart, _, notifier) = store();
        let p = product("p1", 2, 10000, 0.0);
        let m = size("M");
        cart.add_item(&p, Some(&m));
        cart.add_item(&p, Some(&m));
        cart.add_item(&p, Some(&m));

        assert_eq!(cart.item_quantity(&p.id, Some(&m)), 2);
        assert_eq!(
            notifier.taken(),
            vec![
                (NoticeKind::Success, "Item added to cart.".to_string()),
                (NoticeKind::Success, "Item quantity increased.".to_string()),
                (NoticeKind::Error, "Maximum stock reached.".to_string()),
            ]
        );
    }

    #[test]
    fn test_reduce_decrements_then_removes() {
        let (cart, _, notifier) = store();
        let p = product("p1", 2, 10000, 0.0);
        let m = size("M");
        cart.add_item(&p, Some(&m));
        cart.add_item(&p, Some(&m));

        cart.reduce_item(&p.id, Some(&m));
        assert_eq!(cart.item_quantity(&p.id, Some(&m)), 1);

        cart.reduce_item(&p.id, Some(&m));
        assert_eq!(cart.item_quantity(&p.id, Some(&m)), 0);
        assert!(cart.items().is_empty());

        let notices = notifier.taken();
        // No notice for the plain decrement, one for the removal.
        assert_eq!(
            notices[2..],
            [(NoticeKind::Success, "Item removed from the cart.".to_string())]
        );
    }

    #[test]
    fn test_reduce_missing_item_is_silent_noop() {
        let (cart, _, notifier) = store();
        cart.add_item(&product("p1", 5, 10000, 0.0), Some(&size("M")));

        cart.reduce_item(&ProductId::new("ghost"), None);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(notifier.taken().len(), 1); // only the add notice
    }

    #[test]
    fn test_remove_item_drops_whole_line() {
        let (cart, _, _) = store();
        let p = product("p1", 5, 10000, 0.0);
        let m = size("M");
        cart.add_item(&p, Some(&m));
        cart.add_item(&p, Some(&m));
        cart.add_item(&p, Some(&m));

        cart.remove_item(&p.id, Some(&m));
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_remove_missing_key_keeps_contents_but_still_notices() {
        let (cart, _, notifier) = store();
        let p = product("p1", 5, 10000, 0.0);
        cart.add_item(&p, Some(&size("M")));
        let before = cart.snapshot();

        cart.remove_item(&p.id, Some(&size("XL")));
        assert_eq!(cart.snapshot(), before);
        // The removal toast fires whether or not anything matched.
        assert_eq!(
            notifier.taken()[1..],
            [(NoticeKind::Success, "Item removed from the cart.".to_string())]
        );
    }

    #[test]
    fn test_remove_all_empties_cart() {
        let (cart, _, _) = store();
        let p1 = product("p1", 5, 10000, 0.0);
        let p2 = product("p2", 5, 5000, 0.0);
        cart.add_item(&p1, Some(&size("M")));
        cart.add_item(&p2, None);

        cart.remove_all();
        assert!(cart.items().is_empty());
        assert_eq!(cart.item_quantity(&p1.id, Some(&size("M"))), 0);
        assert_eq!(cart.item_quantity(&p2.id, None), 0);
    }

    #[test]
    fn test_quantity_zero_when_absent() {
        let (cart, _, _) = store();
        assert_eq!(cart.item_quantity(&ProductId::new("nope"), None), 0);
    }

    #[test]
    fn test_selected_size_first_match_wins() {
        let (cart, _, _) = store();
        let p = product("p1", 5, 10000, 0.0);
        cart.add_item(&p, Some(&size("M")));
        cart.add_item(&p, Some(&size("L")));

        let found = cart.item_selected_size(&p.id).unwrap();
        assert_eq!(found.value, "M");
        assert_eq!(cart.item_selected_size(&ProductId::new("nope")), None);
    }

    #[test]
    fn test_price_snapshot_is_fixed_at_add_time() {
        let (cart, _, _) = store();
        let mut p = product("p1", 5, 10000, 0.0);
        cart.add_item(&p, Some(&size("M")));

        // Catalog price moves; the line keeps the price it was added at.
        p.price = Money::new(12000, Currency::BDT);
        cart.add_item(&p, Some(&size("M")));

        let items = cart.items();
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].unit_price.amount_cents, 10000);
    }

    #[test]
    fn test_hydration_restores_persisted_items() {
        let storage = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::default());

        let cart = CartStore::load(storage.clone(), notifier.clone());
        let p1 = product("p1", 5, 10000, 10.0);
        let p2 = product("p2", 5, 5000, 0.0);
        cart.add_item(&p1, Some(&size("M")));
        cart.add_item(&p1, Some(&size("M")));
        cart.add_item(&p2, None);
        let before = cart.snapshot();

        let restored = CartStore::load(storage, notifier);
        assert_eq!(restored.snapshot(), before);
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_empty() {
        let storage = Arc::new(MemoryStore::new());
        storage
            .set_raw(CART_STORAGE_KEY, b"{ not json")
            .unwrap();

        let cart = CartStore::load(storage, Arc::new(RecordingNotifier::default()));
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_subscribers_observe_every_snapshot() {
        let (cart, _, _) = store();
        let seen = Arc::new(AtomicUsize::new(0));
        let last_len = Arc::new(AtomicUsize::new(usize::MAX));
        {
            let seen = seen.clone();
            let last_len = last_len.clone();
            cart.subscribe(move |state| {
                seen.fetch_add(1, Ordering::SeqCst);
                last_len.store(state.items.len(), Ordering::SeqCst);
            });
        }

        let p = product("p1", 5, 10000, 0.0);
        cart.add_item(&p, Some(&size("M")));
        cart.add_item(&p, Some(&size("M")));
        cart.remove_all();

        assert_eq!(seen.load(Ordering::SeqCst), 3);
        assert_eq!(last_len.load(Ordering::SeqCst), 0);
    }

    /// Store double whose writes always fail.
    struct BrokenStore;

    impl KeyValue for BrokenStore {
        fn get_raw(&self, _key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            Ok(None)
        }

        fn set_raw(&self, _key: &str, _value: &[u8]) -> Result<(), StoreError> {
            Err(StoreError::StoreError("kv unavailable".to_string()))
        }

        fn delete(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::StoreError("kv unavailable".to_string()))
        }
    }

    #[test]
    fn test_write_failure_keeps_memory_state_authoritative() {
        let notifier = Arc::new(RecordingNotifier::default());
        let cart = CartStore::load(Arc::new(BrokenStore), notifier.clone());

        let seen = Arc::new(AtomicUsize::new(0));
        {
            let seen = seen.clone();
            cart.subscribe(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }

        let p = product("p1", 5, 10000, 0.0);
        cart.add_item(&p, Some(&size("M")));

        assert_eq!(cart.item_quantity(&p.id, Some(&size("M"))), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(
            notifier.taken(),
            vec![(NoticeKind::Success, "Item added to cart.".to_string())]
        );
    }

    #[test]
    fn test_subscriber_can_register_another_subscriber() {
        let (cart, _, _) = store();
        let cart = Rc::new(cart);

        let late_calls = Rc::new(Cell::new(0_usize));
        {
            let cart_ref = cart.clone();
            let late_calls = late_calls.clone();
            let registered = Cell::new(false);
            cart.subscribe(move |_| {
                if !registered.get() {
                    registered.set(true);
                    let late_calls = late_calls.clone();
                    cart_ref.subscribe(move |_| {
                        late_calls.set(late_calls.get() + 1);
                    });
                }
            });
        }

        let p = product("p1", 5, 10000, 0.0);
        cart.add_item(&p, Some(&size("M"))); // registers the late subscriber
        cart.add_item(&p, Some(&size("M"))); // first snapshot it observes

        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn test_rejected_add_does_not_fan_out() {
        let (cart, _, _) = store();
        let p = product("p1", 1, 10000, 0.0);
        cart.add_item(&p, None);

        let seen = Arc::new(AtomicUsize::new(0));
        {
            let seen = seen.clone();
            cart.subscribe(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }

        cart.add_item(&p, None); // at ceiling, state unchanged
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_subtotal_uses_discounted_prices() {
        let (cart, _, _) = store();
        let discounted = product("p1", 5, 10000, 20.0);
        let plain = product("p2", 5, 5000, 0.0);
        cart.add_item(&discounted, None);
        cart.add_item(&discounted, None);
        cart.add_item(&plain, None);

        // 2 x 80.00 + 1 x 50.00
        assert_eq!(cart.subtotal().amount_cents, 21000);
    }
}
