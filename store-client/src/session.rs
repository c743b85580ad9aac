//! Application session state
//!
//! One struct owns everything the storefront keeps in memory for the
//! lifetime of a session: the loaded catalog, the cart, the active sort,
//! the product being viewed and the last acknowledged order id. State
//! changes go through the documented operations, and every cart mutation
//! refreshes the rendered cart projection before returning. Nothing is
//! persisted; the next session starts clean.

use shared::models::{Customer, OrderRecord, Product};

use crate::catalog::{self, CatalogOutcome, SearchOutcome, SortKey};
use crate::{Cart, Fetch, StoreConfig, StoreError, StoreResult, orders, view};

#[derive(Debug, Default)]
pub struct StoreSession {
    config: StoreConfig,
    products: Vec<Product>,
    cart: Cart,
    sort: SortKey,
    current_product: Option<i64>,
    last_order_id: Option<String>,
    loading: bool,
    /// Rendered cart panel, kept in sync with every mutation
    cart_panel: String,
    notices: Vec<String>,
}

impl StoreSession {
    pub fn new(config: StoreConfig) -> Self {
        let mut session = Self {
            config,
            ..Default::default()
        };
        session.refresh_cart_panel();
        session
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The active catalog, in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn last_order_id(&self) -> Option<&str> {
        self.last_order_id.as_deref()
    }

    /// True only while a catalog fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The rendered cart panel (items, badge count, totals).
    pub fn cart_panel(&self) -> &str {
        &self.cart_panel
    }

    /// Queued user-visible notices, drained oldest first.
    pub fn drain_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    fn refresh_cart_panel(&mut self) {
        self.cart_panel = view::cart_panel(&self.cart);
    }

    // ========== Catalog ==========

    /// Load (or reload) the catalog, replacing it wholesale.
    ///
    /// Failure falls back to the built-in sample list and queues a
    /// notice; browsing keeps working either way.
    pub async fn load_catalog(&mut self, fetch: &dyn Fetch) {
        self.loading = true;
        let CatalogOutcome { products, fallback } =
            catalog::load_catalog(fetch, &self.config).await;
        self.loading = false;
        self.products = products;
        if fallback {
            self.notify("Error loading products. Using sample data.");
        }
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Catalog in the active sort order.
    pub fn visible_products(&self) -> Vec<Product> {
        catalog::sort_products(&self.products, self.sort)
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        catalog::search_products(&self.products, query)
    }

    /// Open the detail view. An unknown id is a silent no-op.
    pub fn view_product(&mut self, id: i64) -> Option<&Product> {
        let product = catalog::find_product(&self.products, id)?;
        self.current_product = Some(id);
        Some(product)
    }

    pub fn current_product(&self) -> Option<&Product> {
        self.current_product
            .and_then(|id| catalog::find_product(&self.products, id))
    }

    // ========== Cart ==========

    pub fn add_to_cart(&mut self, id: i64) {
        if self.cart.add(&self.products, id) {
            let name = catalog::find_product(&self.products, id)
                .map(|p| p.name.clone())
                .unwrap_or_default();
            self.notify(format!("{name} added!"));
        } else {
            self.notify("Product not found!");
        }
        self.refresh_cart_panel();
    }

    pub fn change_quantity(&mut self, id: i64, delta: i64) {
        self.cart.change_quantity(id, delta);
        self.refresh_cart_panel();
    }

    pub fn remove_from_cart(&mut self, id: i64) {
        self.cart.remove(id);
        self.notify("Item removed");
        self.refresh_cart_panel();
    }

    // ========== Checkout ==========

    /// Submit the cart as an order.
    ///
    /// Input problems (empty cart, missing fields, implausible email)
    /// queue a notice and return before any request is issued. On
    /// success the cart is cleared and the acknowledged id recorded; on
    /// failure cart and form state stay intact so the user can retry.
    pub async fn checkout(
        &mut self,
        fetch: &dyn Fetch,
        customer: &Customer,
    ) -> StoreResult<String> {
        if self.cart.is_empty() {
            self.notify("Your cart is empty!");
            return Err(StoreError::Validation("cart is empty".into()));
        }
        if let Err(reason) = validate_customer(customer) {
            self.notify(reason.clone());
            return Err(StoreError::Validation(reason));
        }

        let draft = orders::build_order(&self.cart, customer)?;
        match orders::submit_order(fetch, &self.config, &draft).await {
            Ok(order_id) => {
                self.cart.clear();
                self.refresh_cart_panel();
                self.last_order_id = Some(order_id.clone());
                Ok(order_id)
            }
            Err(err) => {
                self.notify("Error submitting order. Please try again.");
                Err(err)
            }
        }
    }

    // ========== Order tracking ==========

    /// Look up prior orders by exact phone match.
    ///
    /// A blank phone queues a notice without issuing a request. Zero
    /// matches is an Ok(empty) state; fetch/decode failures queue a
    /// generic error notice.
    pub async fn track_orders(
        &mut self,
        fetch: &dyn Fetch,
        phone: &str,
    ) -> StoreResult<Vec<OrderRecord>> {
        let phone = phone.trim();
        if phone.is_empty() {
            self.notify("Please enter a phone number");
            return Ok(Vec::new());
        }

        match orders::track_orders(fetch, &self.config, phone).await {
            Ok(orders) => Ok(orders),
            Err(err) => {
                self.notify("Failed to load orders. Please try again.");
                Err(err)
            }
        }
    }
}

fn validate_customer(customer: &Customer) -> Result<(), String> {
    let fields = [
        &customer.name,
        &customer.email,
        &customer.phone,
        &customer.address,
        &customer.payment_method,
    ];
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err("Please fill all fields!".to_string());
    }
    if !is_plausible_email(&customer.email) {
        return Err("Please enter a valid email!".to_string());
    }
    Ok(())
}

/// The shape check the checkout form applies: something@domain.tld with
/// no whitespace. Not RFC-complete on purpose.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && domain.split('.').all(|segment| !segment.is_empty())
}
