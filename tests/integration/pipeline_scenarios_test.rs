// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use pagewatch::domain::services::match_pipeline::MatchPipeline;

const LISTING: &str = r#"
<!DOCTYPE html>
<html>
<head><title>Shop</title></head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/collections/all">All products</a>
    </nav>
    <main>
        <h1>Widgets</h1>
        <ul class="grid">
            <li class="grid-item">
                <a href="/products/red-widget"><img src="red.png" alt=""></a>
                <h3 class="title">Red Widget</h3>
                <span class="badge">Sold out</span>
            </li>
            <li class="grid-item">
                <a href="/products/blue-widget?variant=2"><img src="blue.png" alt=""></a>
                <h3 class="title">Blue Widget</h3>
                <span class="badge">In stock</span>
            </li>
            <li class="grid-item">
                <h3 class="title"><a href="./products/green-widget">Green Widget</a></h3>
                <p>Back in stock soon</p>
            </li>
        </ul>
        <p>Questions? <a href="/pages/contact">Contact us</a> about stock.</p>
    </main>
</body>
</html>
"#;

#[test]
fn test_listing_page_links_each_matching_card() {
    let result = MatchPipeline::check(
        LISTING.as_bytes(),
        Some("text/html"),
        "https://shop.test/collections/widgets",
        "in stock",
    )
    .unwrap();

    assert!(result.matched);
    assert_eq!(
        result.links,
        vec![
            "https://shop.test/products/blue-widget?variant=2".to_string(),
            "https://shop.test/collections/products/green-widget".to_string(),
        ]
    );
}

#[test]
fn test_listing_page_without_phrase() {
    let result = MatchPipeline::check(
        LISTING.as_bytes(),
        Some("text/html"),
        "https://shop.test/collections/widgets",
        "pre-order",
    )
    .unwrap();

    assert!(!result.matched);
    assert!(result.links.is_empty());
}

#[test]
fn test_product_detail_page_links_to_itself() {
    let result = MatchPipeline::check(
        LISTING.as_bytes(),
        None,
        "https://shop.test/products/blue-widget",
        "IN STOCK",
    )
    .unwrap();

    assert_eq!(
        result.links,
        vec!["https://shop.test/products/blue-widget".to_string()]
    );
}

#[test]
fn test_generic_links_when_no_product_link() {
    let html = r#"<html><body>
        <div class="news-item"><a href="/blog/restock">Restock update</a><p>Widgets are in stock</p></div>
        <p>All in stock items ship today. <a href="/shipping">Shipping</a></p>
    </body></html>"#;

    let result =
        MatchPipeline::check(html.as_bytes(), None, "https://shop.test/", "in stock").unwrap();

    assert_eq!(
        result.links,
        vec![
            "https://shop.test/blog/restock".to_string(),
            "https://shop.test/shipping".to_string(),
        ]
    );
}
