//! DOM Calculator Demo
//!
//! Clicks through the mock calculator page, prints what the two display
//! elements show, then runs the shared behaviour checks against the page.
//!
//! Run with: cargo run --example dom_driver_demo

use keypad_calculator::driver::{
    run_full_suite, verify_chaining, verify_clearing, verify_decimal_guard,
    verify_digit_grouping, verify_division_by_zero, verify_exponential, verify_percent,
    CalculatorDriver,
};
use keypad_calculator::error::KeypadResult;
use keypad_calculator::web::{DomDriver, DATA_DIGIT, DATA_OPERATOR};

fn main() -> KeypadResult<()> {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║            Keypad Calculator - Mock DOM Demo                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut driver = DomDriver::new();

    println!("📦 Page buttons:");
    println!("   [{DATA_DIGIT}]    {:?}", driver.dom().query_selector_all(DATA_DIGIT));
    println!("   [{DATA_OPERATOR}] {:?}", driver.dom().query_selector_all(DATA_OPERATOR));
    println!();

    println!("🧮 Clicking: 1 2 3 4 + 5 6 % =");
    println!("─────────────────────────────────");
    for id in [
        "btn-1", "btn-2", "btn-3", "btn-4", "btn-plus", "btn-5", "btn-6", "btn-percent",
        "btn-equals",
    ] {
        driver.click(id)?;
        println!(
            "   {id:<12} previous: {:>10}   current: {}",
            driver.previous_display_text(),
            driver.current_display_text()
        );
    }

    println!("\n📜 Click history:");
    for (i, event) in driver.dom().event_history().iter().enumerate() {
        println!("   [{i}] {event:?}");
    }

    println!("\n🚫 Clicking an element that is not a button:");
    match driver.click("btn-sqrt") {
        Ok(()) => println!("   unexpectedly accepted"),
        Err(e) => println!("   {e}"),
    }

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Running the shared behaviour checks on the DOM driver");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    driver.reset();
    let checks: [(&str, fn(&mut DomDriver)); 7] = [
        ("verify_digit_grouping", verify_digit_grouping),
        ("verify_decimal_guard", verify_decimal_guard),
        ("verify_chaining", verify_chaining),
        ("verify_percent", verify_percent),
        ("verify_division_by_zero", verify_division_by_zero),
        ("verify_exponential", verify_exponential),
        ("verify_clearing", verify_clearing),
    ];
    for (name, check) in checks {
        print!("  ✓ {name} ... ");
        check(&mut driver);
        println!("PASSED");
    }

    print!("\n  Running run_full_suite() ... ");
    run_full_suite(&mut DomDriver::new());
    println!("PASSED");

    Ok(())
}
