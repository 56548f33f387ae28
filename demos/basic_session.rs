//! Basic Session
//!
//! This example drives the calculator through a full entry cycle with
//! discrete key presses, the way a UI would.
//!
//! Key concepts:
//! - Keypad dispatch onto the pure core
//! - Chained evaluation, left to right
//! - The two display rows
//!
//! Run with: cargo run --example basic_session

use shopcalc::keypad::{Key, Session};

fn main() {
    println!("=== Basic Session Example ===\n");

    let mut session = Session::new();

    // 12 × 3 + 4 =
    for c in "12×3+4=".chars() {
        let key = Key::from_char(c).expect("key on the input surface");
        if let Err(err) = session.press(key) {
            println!("alert: {err}");
        }
        println!(
            "pressed {c}  |  upper: {:<12}  lower: {}",
            session.pending_display(),
            session.current_display()
        );
    }

    println!("\nPhase: {}", session.calculator().phase().name());
    println!("Ledger records: {}", session.ledger().len());
    for record in session.ledger().newest_first() {
        println!("  {} {}", record.expression, record.result);
    }

    println!("\n=== Example Complete ===");
}
