// store-client/examples/storefront_session.rs
// Drive one storefront session from the terminal

use store_client::{HttpFetch, SortKey, StoreConfig, StoreSession, view};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = StoreConfig::from_env();
    let fetch = HttpFetch::new(&config)?;
    let mut session = StoreSession::new(config);

    session.load_catalog(&fetch).await;
    for notice in session.drain_notices() {
        println!("! {notice}");
    }

    session.set_sort(SortKey::PriceLow);
    for product in session.visible_products() {
        println!("{}", view::product_card(&product));
        println!("---");
    }

    // Put one of everything visible in the cart, then bump the first line
    let ids: Vec<i64> = session.visible_products().iter().map(|p| p.id).collect();
    for id in &ids {
        session.add_to_cart(*id);
    }
    if let Some(first) = ids.first() {
        session.change_quantity(*first, 1);
    }
    println!("{}", session.cart_panel());
    for notice in session.drain_notices() {
        println!("! {notice}");
    }

    // Track prior orders when a phone number is supplied
    if let Some(phone) = std::env::args().nth(1) {
        match session.track_orders(&fetch, &phone).await {
            Ok(orders) if orders.is_empty() => println!("{}", view::NO_ORDERS),
            Ok(orders) => {
                for order in &orders {
                    println!("{}", view::order_card(order));
                    println!("---");
                }
            }
            Err(e) => tracing::error!("tracking failed: {e}"),
        }
    }

    Ok(())
}
