#![allow(clippy::unwrap_used, clippy::print_stdout)]

/// `QueryParams` usage example
use queryset::QueryParams;

fn main() {
    // Parse a query string
    let mut params = QueryParams::parse_query_string("name=John&age=30&tags[]=a&tags[]=b");

    // Typed reads
    println!("name: {}", params.get_as_string("name", "")); // John
    println!("age: {}", params.get_as_integer("age", 0)); // 30
    println!("admin: {}", params.get_as_bool("admin", false)); // false
    println!("tags: {:?}", params.get_as_array("tags", Default::default()));
    println!();

    // Add a new parameter
    params.add("city", "Tokyo").unwrap();
    println!("After add: {params}"); // name=John&age=30&tags[0]=a&tags[1]=b&city=Tokyo
    println!();

    // Set replaces in place
    params.set("age", 31);
    println!("After set: {params}"); // name=John&age=31&tags[0]=a&tags[1]=b&city=Tokyo
    println!();

    // Remove a parameter
    params.remove("tags").unwrap();
    println!("After remove: {}", params.serialize()); // ?name=John&age=31&city=Tokyo
    println!();

    println!("All parameters:");
    for (key, value) in &params {
        println!("  {key} = {value}");
    }
}
