//! Whole-session tests: scripted operator input in, transcript out.

use std::io::Cursor;

use stockroom_cli::{run_session, AppConfig};

fn session(input: &str) -> String {
    session_with(input, &AppConfig::default())
}

fn session_with(input: &str, config: &AppConfig) -> String {
    let mut output = Vec::new();
    run_session(Cursor::new(input), &mut output, config).unwrap();
    String::from_utf8(output).unwrap()
}

/// Record lines between a "Current Inventory:" header and the next blank line.
fn inventory_listings(transcript: &str) -> Vec<Vec<&str>> {
    transcript
        .split("Current Inventory:\n")
        .skip(1)
        .map(|chunk| chunk.lines().take_while(|line| !line.is_empty()).collect())
        .collect()
}

#[test]
fn test_selling_out_lettuce_removes_it() {
    let out = session("7\nlettuce\n50\ndone\n3\n1\n8\n");

    assert!(out.contains("Added 50 of lettuce to purchase (Cost: 500 RS)."));
    assert!(out.contains("Total bill (rounded): 500 RS"));
    assert!(out.contains("Removing lettuce from inventory as it is sold out."));
    assert!(out.contains("Total number of products remaining: 9"));

    let listings = inventory_listings(&out);
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].len(), 9);
    assert!(listings[0].iter().all(|line| !line.starts_with("lettuce ")));
    assert!(out.contains("Total number of products: 9\n"));
}

#[test]
fn test_added_kale_shows_in_leafy_green() {
    let out = session("2\nKale\n15\n5\nLeafy green\n4\nleafy green\n8\n");

    let section = out
        .split("Products in category 'leafy green':\n")
        .nth(1)
        .unwrap();
    let records: Vec<&str> = section.lines().take_while(|l| !l.is_empty()).collect();
    assert_eq!(
        records,
        vec![
            "lettuce | 10 RS | 50 | Leafy green",
            "spinach | 10 RS | 100 | Leafy green",
            "garlic | 30 RS | 20 | Leafy green",
            "Kale | 15 RS | 5 | Leafy green",
        ]
    );
}

#[test]
fn test_invalid_integers_reprompt_until_valid() {
    let out = session("2\nKale\n-5\nabc\n5\n3\nLeafy green\n8\n");

    assert_eq!(out.matches("Price in Rs: ").count(), 3);
    assert!(out.contains("Value must be a positive integer!"));
    assert!(out.contains("Invalid input. Please enter a whole number."));
    assert!(out.contains("Kale | 5 RS | 3 | Leafy green"));
}

#[test]
fn test_unknown_remove_leaves_inventory_identical() {
    let out = session("3\n5\nkale\n3\n8\n");

    assert!(out.contains("Product not found!\nTotal products remaining: 10\n"));
    let listings = inventory_listings(&out);
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0], listings[1]);
}

#[test]
fn test_restock_then_partial_purchase() {
    let out = session("6\nGarlic\n10\n7\ngarlic\n25\ngarlic\n6\ndone\n3\n8\n");

    assert!(out.contains("Updated garlic quantity: 30"));
    assert!(out.contains("Added 25 of garlic to purchase (Cost: 750 RS)."));
    assert!(out.contains("Insufficient stock for garlic. Available: 5"));
    assert!(out.contains("Total bill (rounded): 750 RS"));
    assert!(out.contains("garlic | 30 RS | 5 | Leafy green"));
}

#[test]
fn test_bill_above_u64_prints_exact_total() {
    let out = session("2\nGold\n18446744073709551615\n2\nBullion\n7\ngold\n2\ndone\n8\n");

    assert!(out.contains("Added 2 of Gold to purchase (Cost: 36893488147419103230 RS)."));
    assert!(out.contains("Total bill (rounded): 36893488147419103230 RS"));
    assert!(out.contains("Total number of products remaining: 11"));
}

#[test]
fn test_invalid_menu_choice_then_exit() {
    let out = session("0\n8\n");
    assert!(out.contains("Invalid choice, please try again."));
    assert!(out.ends_with("Exiting the program.\n"));
}

#[test]
fn test_closed_input_ends_session_cleanly() {
    let out = session("1\n");
    assert!(out.contains("Total number of products: 10"));
    assert!(!out.contains("Exiting the program."));
}

#[test]
fn test_empty_start() {
    let config = AppConfig {
        empty: true,
        ..AppConfig::default()
    };
    let out = session_with("1\n4\nroot\n8\n", &config);
    assert!(out.contains("Total number of products: 0"));
    assert!(out.contains("No products found in this category."));
}
