//! Build a small dictionary, remove a branch and dump the tree.
use std::io;

use ternary_map::Tst;

fn main() {
    // Create a new tree and load the dictionary
    let mut tst = Tst::new();
    tst.insert("SPACE", 10).unwrap();
    tst.insert("APPLE", 20).unwrap();
    tst.insert("TIGER", 70).unwrap();
    tst.insert("SPACES", 30).unwrap();
    tst.insert("APPS", 80).unwrap();

    // Check values
    assert_eq!(tst.get("SPACE"), Some(&10));
    assert_eq!(tst.get("SPACER"), None);

    println!("{} entries in key order:", tst.len());
    tst.write_ordered(&mut io::stdout()).unwrap();

    println!("tree shape, pre-order:");
    tst.write_structure(&mut io::stdout()).unwrap();

    // Remove a whole branch and dump again
    assert_eq!(tst.remove("TIGER"), Ok(true));

    println!("after removing TIGER:");
    tst.write_ordered(&mut io::stdout()).unwrap();

    println!("tree shape, pre-order:");
    tst.write_structure(&mut io::stdout()).unwrap();
}
