//! Bounded registry
//!
//! A capability registry capped at a fixed number of entries, declared with
//! `define_set_config!`, plus a lenient import that reports what it skipped.

use kindset::prelude::*;

define_set_config! {
    name: RegistryConfig,
    initial_capacity: 4,
    max_elements: 4,
    shrink_on_clear: false,
}

fn main() -> Result<(), SetError> {
    let incoming = vec![
        Value::from("gps"),
        Value::from("wifi"),
        Value::from(42),
        Value::from("bluetooth"),
        Value::from("lte"),
        Value::from("nfc"),
    ];

    let (registry, skipped) = Set::<Value, RegistryConfig>::with_items_lenient(Kind::String, incoming);
    println!("registered: {registry}");
    for item in &skipped {
        println!("skipped:    {item} ({})", item.kind());
    }

    match registry.add(["uwb"]) {
        Ok(()) => println!("added uwb"),
        Err(err) => println!("cannot add uwb: {err}"),
    }

    let retired = Set::<Value, RegistryConfig>::with_items(Kind::String, ["wifi", "lte"])?;
    registry.separate(&retired)?;
    registry.add(["uwb"])?;
    println!("after swap: {registry}");

    Ok(())
}
