//! schema.org JSON-LD documents embedded in the page.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::CatalogError;
use crate::reviews::{Review, ReviewStats, MAX_STARS};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// `Product` document with the aggregate rating and every review.
pub fn product_reviews(collection_name: &str, stats: &ReviewStats, reviews: &[Review]) -> Value {
    let review_items: Vec<Value> = reviews
        .iter()
        .map(|review| {
            json!({
                "@type": "Review",
                "reviewRating": {
                    "@type": "Rating",
                    "ratingValue": review.rating,
                },
                "author": {
                    "@type": "Person",
                    "name": review.name,
                },
                "datePublished": review.date,
                "reviewBody": review.text,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Product",
        "name": collection_name,
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": format!("{:.1}", stats.average_rating),
            "reviewCount": stats.review_count.to_string(),
            "bestRating": MAX_STARS.to_string(),
        },
        "review": review_items,
    })
}

/// `BreadcrumbList` document, positions starting at 1.
pub fn breadcrumb_list(crumbs: &[Breadcrumb]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": crumb.url,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// Serialize a document for a `<script type="application/ld+json">` body.
///
/// `<` is escaped so review text can never close the script element.
pub fn to_script_body(document: &Value) -> Result<String, CatalogError> {
    let body = serde_json::to_string(document)?;
    Ok(body.replace('<', "\\u003c"))
}
