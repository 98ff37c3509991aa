//! URL paths as keys: list one site section with prefix iteration.
use ternary_map::Tst;
use url::Url;

fn main() {
    let pages = [
        ("https://example.com/blog/2023/tst-basics", "TST basics"),
        ("https://example.com/blog/2024/pruning", "Pruning removal"),
        ("https://example.com/about", "About"),
        ("https://example.com/blog/2024/iterators", "Lazy iterators"),
        ("https://example.com/contact", "Contact"),
    ];

    // Index every page under its URL path
    let mut routes = Tst::new();
    for (page, title) in pages {
        let url = Url::parse(page).unwrap();
        routes.insert(url.path(), title).unwrap();
    }

    println!("all pages:");
    for (path, title) in &routes {
        println!("  {} -> {}", path, title);
    }

    // One section of the site is a prefix listing
    println!("blog section:");
    for (path, title) in routes.iter_prefix("/blog/") {
        println!("  {} -> {}", path, title);
    }

    // The router forgets a page like any map
    routes.remove("/contact").unwrap();
    assert!(!routes.contains_key("/contact"));
    println!("pages left after dropping /contact: {}", routes.len());
}
