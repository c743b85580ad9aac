//! Catalog pipeline
//!
//! Fetches the published products export, normalizes rows into
//! [`Product`] entities and keeps only active ones. Also hosts the pure
//! view operations over the loaded list: sorting and search.

use shared::models::{DEFAULT_DESCRIPTION, DEFAULT_IMAGE_URL, Product, STATUS_ACTIVE};

use crate::csv::{CsvDocument, Record};
use crate::{Fetch, StoreConfig};

/// Normalize one export row into a fixed-shape product.
///
/// Header-alias fallback is evaluated exactly once here. `id` is the
/// 1-based row position in the export.
pub fn product_from_record(id: i64, record: &Record<'_>) -> Product {
    Product {
        id,
        name: record.get_or(&["name", "Name"], "").to_string(),
        category: record.get_or(&["category", "Category"], "").to_string(),
        price: record.get_or(&["price", "Price"], "0").to_string(),
        original_price: record
            .get(&["originalPrice", "OriginalPrice"])
            .map(str::to_string),
        image: record
            .get_or(&["imageUrl", "Image", "image"], DEFAULT_IMAGE_URL)
            .to_string(),
        badge: record.get(&["badge", "Badge"]).map(str::to_string),
        rating: record
            .get(&["rating", "Rating"])
            .and_then(|v| v.parse().ok())
            .unwrap_or(4.0),
        reviews: record
            .get(&["reviews", "Reviews"])
            .and_then(|v| v.parse().ok())
            .unwrap_or(0),
        description: record
            .get_or(&["description", "Description"], DEFAULT_DESCRIPTION)
            .to_string(),
        stock: record
            .get(&["stock", "Stock"])
            .and_then(|v| v.parse().ok())
            .unwrap_or(0),
        status: record.get_or(&["status", "Status"], STATUS_ACTIVE).to_string(),
    }
}

/// Decode a products export into the active catalog.
///
/// Rows with a mismatched field count are dropped by the decoder; rows
/// that decode but are out of stock or not `Active` are filtered here.
pub fn decode_catalog(text: &str) -> Vec<Product> {
    let doc = CsvDocument::parse(text);
    doc.records()
        .map(|record| product_from_record(record.index(), &record))
        .filter(Product::is_active)
        .collect()
}

/// Built-in fallback list used when the export cannot be loaded.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Classic Denim Jacket".to_string(),
            category: "men".to_string(),
            price: "89.99".to_string(),
            original_price: Some("129.99".to_string()),
            image: "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=500".to_string(),
            badge: Some("Sale".to_string()),
            rating: 4.5,
            reviews: 128,
            description: "Premium quality denim jacket with classic fit.".to_string(),
            stock: 50,
            status: STATUS_ACTIVE.to_string(),
        },
        Product {
            id: 2,
            name: "Elegant Summer Dress".to_string(),
            category: "women".to_string(),
            price: "59.99".to_string(),
            original_price: Some("79.99".to_string()),
            image: "https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=500".to_string(),
            badge: Some("New".to_string()),
            rating: 4.8,
            reviews: 256,
            description: "Beautiful summer dress with floral pattern.".to_string(),
            stock: 75,
            status: STATUS_ACTIVE.to_string(),
        },
    ]
}

/// Outcome of a catalog load
#[derive(Debug, Clone)]
pub struct CatalogOutcome {
    pub products: Vec<Product>,
    /// True when the built-in sample list replaced a failed load
    pub fallback: bool,
}

/// Fetch the export and build the active catalog.
///
/// A single GET, no retry. Any failure — transport, non-success status,
/// or an export that decodes to zero products — falls back to the sample
/// list so browsing still works. Replacement is wholesale; there is no
/// merge with the previous catalog.
pub async fn load_catalog(fetch: &dyn Fetch, config: &StoreConfig) -> CatalogOutcome {
    match fetch.get_text(&config.catalog_url).await {
        Ok(body) => {
            let products = decode_catalog(&body);
            if products.is_empty() {
                tracing::warn!("catalog export decoded to zero products, using sample data");
                CatalogOutcome {
                    products: sample_catalog(),
                    fallback: true,
                }
            } else {
                tracing::info!(count = products.len(), "catalog loaded");
                CatalogOutcome {
                    products,
                    fallback: false,
                }
            }
        }
        Err(err) => {
            tracing::error!("catalog load failed: {err}, using sample data");
            CatalogOutcome {
                products: sample_catalog(),
                fallback: true,
            }
        }
    }
}

/// Catalog sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Load order
    #[default]
    Featured,
    /// Ascending parsed price
    PriceLow,
    /// Descending parsed price
    PriceHigh,
    /// Reverse load order (stand-in until the export carries a real
    /// recency field)
    Newest,
}

impl SortKey {
    /// Parse the UI sort token; unknown tokens fall back to `Featured`.
    pub fn parse(token: &str) -> Self {
        match token {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "newest" => Self::Newest,
            _ => Self::Featured,
        }
    }
}

/// Pure sort over the loaded catalog.
///
/// Price comparison parses the exported text; non-numeric values compare
/// as NaN and their relative order is unspecified.
pub fn sort_products(products: &[Product], sort: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match sort {
        SortKey::Featured => {}
        SortKey::PriceLow => sorted.sort_by(|a, b| {
            a.price_value()
                .partial_cmp(&b.price_value())
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortKey::PriceHigh => sorted.sort_by(|a, b| {
            b.price_value()
                .partial_cmp(&a.price_value())
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortKey::Newest => sorted.reverse(),
    }
    sorted
}

/// Result of a catalog search
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Blank query: prompt the user, not an error
    Prompt,
    /// Query matched nothing (distinct from the prompt state)
    NoMatches,
    Matches(Vec<Product>),
}

/// Case-insensitive substring search over name, category and description.
pub fn search_products(products: &[Product], query: &str) -> SearchOutcome {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return SearchOutcome::Prompt;
    }

    let matches: Vec<Product> = products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&query)
                || p.category.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();

    if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(matches)
    }
}

/// Look up a product by id.
pub fn find_product(products: &[Product], id: i64) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(prices: &[&str]) -> Vec<Product> {
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| Product {
                id: i as i64 + 1,
                name: format!("P{}", i + 1),
                category: "misc".to_string(),
                price: price.to_string(),
                original_price: None,
                image: DEFAULT_IMAGE_URL.to_string(),
                badge: None,
                rating: 4.0,
                reviews: 0,
                description: DEFAULT_DESCRIPTION.to_string(),
                stock: 1,
                status: STATUS_ACTIVE.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_decode_catalog_filters_inactive() {
        let csv = "name,price,stock,status\n\
                   Red Shirt,19.99,10,Active\n\
                   Gone,9.99,0,Active\n\
                   Paused,9.99,5,Draft";
        let products = decode_catalog(csv);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Red Shirt");
    }

    #[test]
    fn test_decode_catalog_row_defaults() {
        let csv = "name,price,stock\nHat,12.50,3";
        let products = decode_catalog(csv);
        assert_eq!(products.len(), 1);
        let hat = &products[0];
        assert_eq!(hat.rating, 4.0);
        assert_eq!(hat.reviews, 0);
        assert_eq!(hat.description, DEFAULT_DESCRIPTION);
        assert_eq!(hat.image, DEFAULT_IMAGE_URL);
        assert_eq!(hat.status, STATUS_ACTIVE);
    }

    #[test]
    fn test_decode_catalog_quoted_name() {
        let csv = "name,price,stock,status\n\"Shirt, Red\",19.99,10,Active";
        let products = decode_catalog(csv);
        assert_eq!(products[0].name, "Shirt, Red");
    }

    #[test]
    fn test_decode_catalog_header_only() {
        assert!(decode_catalog("name,price,stock,status").is_empty());
        assert!(decode_catalog("").is_empty());
    }

    #[test]
    fn test_sort_price_low_is_non_decreasing() {
        let sorted = sort_products(&catalog(&["9.50", "2.00", "7.25", "2.00"]), SortKey::PriceLow);
        let prices: Vec<f64> = sorted.iter().map(Product::price_value).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_price_high_is_non_increasing() {
        let sorted = sort_products(&catalog(&["9.50", "2.00", "7.25"]), SortKey::PriceHigh);
        let prices: Vec<f64> = sorted.iter().map(Product::price_value).collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_featured_and_newest() {
        let products = catalog(&["1", "2", "3"]);
        let featured: Vec<i64> = sort_products(&products, SortKey::Featured)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(featured, vec![1, 2, 3]);

        let newest: Vec<i64> = sort_products(&products, SortKey::Newest)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(newest, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(SortKey::parse("price-low"), SortKey::PriceLow);
        assert_eq!(SortKey::parse("price-high"), SortKey::PriceHigh);
        assert_eq!(SortKey::parse("newest"), SortKey::Newest);
        assert_eq!(SortKey::parse("featured"), SortKey::Featured);
        assert_eq!(SortKey::parse("garbage"), SortKey::Featured);
    }

    #[test]
    fn test_search_states() {
        let products = catalog(&["1", "2"]);
        assert_eq!(search_products(&products, "  "), SearchOutcome::Prompt);
        assert_eq!(
            search_products(&products, "zzz"),
            SearchOutcome::NoMatches
        );
        match search_products(&products, "p1") {
            SearchOutcome::Matches(found) => assert_eq!(found.len(), 1),
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn test_search_covers_category_and_description() {
        let mut products = catalog(&["1"]);
        products[0].category = "Outerwear".to_string();
        products[0].description = "Waxed canvas shell".to_string();
        assert!(matches!(
            search_products(&products, "outer"),
            SearchOutcome::Matches(_)
        ));
        assert!(matches!(
            search_products(&products, "CANVAS"),
            SearchOutcome::Matches(_)
        ));
    }

    #[test]
    fn test_find_product() {
        let products = catalog(&["1", "2"]);
        assert!(find_product(&products, 2).is_some());
        assert!(find_product(&products, 99).is_none());
    }
}
