#![allow(clippy::unwrap_used, clippy::print_stdout)]

/// Basic `Collection` usage example
use queryset::Collection;

fn main() {
    let mut headers: Collection<String> = Collection::new();

    headers.add("accept", "text/html".to_string()).unwrap();
    headers.set_element("user-agent", "demo/1.0".to_string());

    // A second strict add of the same key is rejected
    if let Err(err) = headers.add("accept", "application/json".to_string()) {
        println!("add failed: {err}");
    }

    println!("count: {}", headers.count());
    for (key, value) in &headers {
        println!("  {key}: {value}");
    }
}
