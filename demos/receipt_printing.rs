//! Receipt Printing
//!
//! This example records a handful of computations and prints a receipt:
//! configurable header label, timestamp, entries oldest-first, and a
//! total-count footer.
//!
//! Run with: cargo run --example receipt_printing

use shopcalc::keypad::{Key, Session};

fn main() {
    println!("=== Receipt Printing Example ===\n");

    let mut session = Session::new();
    session.set_label("Corner Shop");

    // Printing before anything is recorded is a user-facing error.
    if let Err(err) = session.print_receipt() {
        println!("alert: {err}\n");
    }

    for sequence in ["150+35=", "0.1+0.2=", "5÷2="] {
        for c in sequence.chars() {
            let key = Key::from_char(c).expect("key on the input surface");
            session.press(key).expect("no division by zero here");
        }
    }

    let receipt = session.print_receipt().expect("ledger is non-empty");
    println!("{receipt}");

    println!("=== Example Complete ===");
}
