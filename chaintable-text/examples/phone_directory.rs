//! Phone directory walkthrough
//!
//! Demonstrates:
//! - Building a directory from `name:number` lines
//! - Membership checks and removal
//! - Dumping the bucket layout (run with RUST_LOG=info)
//! - Anagram grouping and word counting on the same table type

use chaintable_text::{group_anagrams, word_instance_count, DirectoryError, PhoneDirectory};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DirectoryError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Chained Hash Table Directory Demo ===\n");

    let mut directory = PhoneDirectory::parse([
        "Jonny:555-444-78787",
        "Antonio:555-344-78789",
        "Deepak:533-364-79700",
        "Sara:523-564-79900",
        "Simon:123-766-89000",
    ])?;

    println!("Entries: {}", directory.len());
    println!("has(\"Simon\") = {}", directory.contains("Simon"));

    directory.remove("Simon");
    println!("after remove, has(\"Simon\") = {}", directory.contains("Simon"));

    println!("\nBucket layout:");
    directory.print_table();

    let lengths = directory.table().bucket_lengths();
    println!("\nChain lengths: {:?}", lengths);
    println!("Load factor: {:.2}", directory.table().load_factor());

    println!("\nAnagram groups:");
    for group in group_anagrams(["cat", "dog", "act", "god", "tac", "map", "amp"]) {
        println!("  {:?}", group);
    }

    let text = "The cat sat. The cat ran. A dog watched the cat.";
    println!("\n\"cat\" appears {} times", word_instance_count(text, "cat"));

    Ok(())
}
