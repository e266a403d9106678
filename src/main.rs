//! contest-kit - Binary Entry Point
//!
//! Walks through the sorted collection with a small record set.

use contest_kit::sorted::{Relation, SortedCollection};

type Record = (&'static str, &'static str, u32);

fn main() {
    println!("===========================================");
    println!("  contest-kit - SortedCollection walkthrough");
    println!("===========================================");
    println!();

    let records: Vec<Record> = vec![
        ("a", "foo", 30),
        ("b", "bar", 28),
        ("c", "baz", 22),
        ("d", "hogehoge", 32),
    ];

    println!("Building collection keyed by third field...");
    let mut people = SortedCollection::new(records, |r: &Record| r.2);
    for (i, item) in people.iter().enumerate() {
        println!("  [{}] {:?}", i, item);
    }
    println!("  Keys: {:?}", people.keys());
    println!();

    println!("Directional queries:");
    for (relation, key) in [
        (Relation::Lt, 31),
        (Relation::Le, 32),
        (Relation::Gt, 22),
        (Relation::Eq, 21),
    ] {
        match people.find(relation, &key) {
            Ok(item) => println!("  find({} {}) -> {:?}", relation, key, item),
            Err(e) => println!("  find({} {}) -> {}", relation, key, e),
        }
    }
    println!();

    match people.index(&30) {
        Ok(i) => println!("index(30) = {}", i),
        Err(e) => println!("index(30) failed: {}", e),
    }

    println!("Removing keys 22 and 28...");
    for key in [22, 28] {
        if let Err(e) = people.remove(&key) {
            println!("  ERROR: {}", e);
        }
    }
    println!("  Remaining: {:?}", people.items());
    println!("  Keys: {:?}", people.keys());
}
