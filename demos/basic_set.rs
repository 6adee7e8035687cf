//! Basic set usage
//!
//! Builds two integer sets, combines them, and shows what happens when kinds
//! do not line up.

use kindset::prelude::*;

fn main() -> Result<(), SetError> {
    let primes = Set::<Value>::with_items(Kind::Int, [2, 3, 5, 7])?;
    let odds = Set::<Value>::with_items(Kind::Int, [1, 3, 5, 7, 9])?;

    println!("primes:                 {primes}");
    println!("odds:                   {odds}");
    println!("union:                  {}", primes.union(&odds)?);
    println!("intersection:           {}", primes.intersection(&odds)?);
    println!("primes - odds:          {}", primes.difference(&odds)?);
    println!("symmetric difference:   {}", primes.symmetric_difference(&odds)?);

    primes.add([11, 13])?;
    println!("primes after add:       {} ({} elements)", primes, primes.len());

    // A string cannot enter an integer set...
    if let Err(err) = primes.add(["seventeen"]) {
        println!("rejected element:       {err}");
    }

    // ...and an integer set cannot be combined with a string set
    let words = Set::<Value>::with_items(Kind::String, ["two", "three"])?;
    if let Err(err) = primes.union(&words) {
        println!("rejected union:         {err}");
    }

    Ok(())
}
