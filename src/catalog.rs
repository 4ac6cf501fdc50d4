use crate::models::Product;
use crate::routes::params::{ProductQuery, ProductSortBy, SortOrder};

const SEED_PRODUCTS: &str = include_str!("../data/products.json");

/// The storefront catalog. Loaded once at startup from the embedded seed
/// data; the CMS that would edit it lives outside this service.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn load() -> anyhow::Result<Self> {
        let products: Vec<Product> = serde_json::from_str(SEED_PRODUCTS)?;
        Ok(Self { products })
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Filtered, sorted page of the catalog plus the total match count.
    pub fn search(&self, query: &ProductQuery) -> (Vec<Product>, i64) {
        let needle = query
            .q
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| {
                let text_ok = needle
                    .as_deref()
                    .is_none_or(|needle| matches_text(product, needle));
                let category_ok = query
                    .category
                    .as_deref()
                    .filter(|category| !category.is_empty())
                    .is_none_or(|category| product.category == category);
                let min_ok = query.min_price.is_none_or(|min| product.price >= min);
                let max_ok = query.max_price.is_none_or(|max| product.price <= max);
                text_ok && category_ok && min_ok && max_ok
            })
            .collect();

        if let Some(sort_by) = query.sort_by {
            matches.sort_by(|a, b| {
                let ordering = match sort_by {
                    ProductSortBy::Price => a.price.total_cmp(&b.price),
                    ProductSortBy::Name => a.name.for_locale("en").cmp(b.name.for_locale("en")),
                };
                match query.sort_order.unwrap_or(SortOrder::Asc) {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        let total = matches.len() as i64;
        let (_, per_page, offset) = query.pagination.normalize();
        let page = matches
            .into_iter()
            .skip(offset as usize)
            .take(per_page as usize)
            .cloned()
            .collect();
        (page, total)
    }
}

fn matches_text(product: &Product, needle: &str) -> bool {
    let name_hit = product
        .name
        .0
        .values()
        .any(|text| text.to_lowercase().contains(needle));
    let description_hit = product.description.as_ref().is_some_and(|description| {
        description
            .0
            .values()
            .any(|text| text.to_lowercase().contains(needle))
    });
    name_hit || description_hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::params::Pagination;

    #[test]
    fn seed_catalog_loads() {
        let catalog = Catalog::load().expect("seed data parses");
        assert!(!catalog.products.is_empty());
        assert!(catalog.get("organic-chocolate-cake").is_some());
        assert!(catalog.get("no-such-cake").is_none());
    }

    #[test]
    fn search_filters_by_text_and_price() {
        let catalog = Catalog::load().unwrap();

        let query = ProductQuery {
            q: Some("chocolate".into()),
            ..Default::default()
        };
        let (hits, total) = catalog.search(&query);
        assert_eq!(total, 1);
        assert_eq!(hits[0].id, "organic-chocolate-cake");

        let query = ProductQuery {
            min_price: Some(41.0),
            max_price: Some(46.0),
            ..Default::default()
        };
        let (hits, _) = catalog.search(&query);
        assert!(hits.iter().all(|p| p.price >= 41.0 && p.price <= 46.0));
    }

    #[test]
    fn search_sorts_and_paginates() {
        let catalog = Catalog::load().unwrap();
        let query = ProductQuery {
            pagination: Pagination {
                page: Some(1),
                per_page: Some(2),
            },
            sort_by: Some(ProductSortBy::Price),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        let (hits, total) = catalog.search(&query);
        assert_eq!(hits.len(), 2);
        assert!(total >= 2);
        assert!(hits[0].price >= hits[1].price);
    }
}
