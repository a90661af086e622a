//! # Seed Data Generator
//!
//! Populates the database with sample inventory for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 goods (default)
//! cargo run -p inventory-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p inventory-db --bin seed -- --goods 1000
//!
//! # Specify database path
//! cargo run -p inventory-db --bin seed -- --db ./data/inventory.db
//! ```
//!
//! ## Generated Data
//! - One category per entry in `CATEGORIES`
//! - One provider per entry in `PROVIDERS`
//! - `--goods` goods spread round-robin over categories and providers
//! - One order for every tenth good

use std::env;

use inventory_core::{CategoryDraft, GoodDraft, Money, OrderDraft, ProviderDraft};
use inventory_db::{Database, DbConfig};

/// Categories and the item names generated under each
const CATEGORIES: &[(&str, &[&str])] = &[
    ("Hand Tools", &["Hammer", "Screwdriver", "Wrench", "Pliers", "Chisel"]),
    ("Power Tools", &["Drill", "Jigsaw", "Sander", "Angle Grinder"]),
    ("Fasteners", &["Wood Screws", "Bolts", "Nails", "Anchors", "Washers"]),
    ("Garden", &["Rake", "Shovel", "Hose", "Pruner"]),
    ("Paint", &["Primer", "Roller", "Brush", "Masking Tape"]),
];

/// (first name, last name, company)
const PROVIDERS: &[(&str, &str, &str)] = &[
    ("Ann", "Smith", "Acme Supply"),
    ("Bob", "Stone", "Quarry Ltd"),
    ("Carla", "Reyes", "Northwind Hardware"),
];

const STATUSES: &[&str] = &["pending", "paid", "shipped", "delivered"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut goods: usize = 200;
    let mut db_path = String::from("./inventory_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--goods" | "-g" => {
                if i + 1 < args.len() {
                    goods = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -g, --goods <N>    Number of goods to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./inventory_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Inventory Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Goods:    {}", goods);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database, migrations applied");

    let mut session = db.begin().await?;

    let existing = session.goods().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} goods", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for (name, _) in CATEGORIES {
        let id = session
            .categories()
            .add(&CategoryDraft {
                name: name.to_string(),
            })
            .await?;
        category_ids.push(id);
    }

    let mut provider_ids = Vec::with_capacity(PROVIDERS.len());
    for (first_name, last_name, company) in PROVIDERS {
        let id = session
            .providers()
            .add(&ProviderDraft {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: format!("{}@{}.com", first_name.to_lowercase(), company_slug(company)),
                company_name: company.to_string(),
            })
            .await?;
        provider_ids.push(id);
    }

    let mut orders = 0;
    for seed in 0..goods {
        let category_idx = seed % CATEGORIES.len();
        let (_, items) = CATEGORIES[category_idx];
        let item = items[(seed / CATEGORIES.len()) % items.len()];

        let good_id = session
            .goods()
            .add(&GoodDraft {
                name: format!("{} #{:04}", item, seed),
                // $1.99 - $99.99
                cost: Money::from_cents(199 + ((seed * 37) % 9801) as i64),
                category_id: category_ids[category_idx],
                provider_id: provider_ids[seed % provider_ids.len()],
            })
            .await?;

        if seed % 10 == 0 {
            session
                .orders()
                .add(&OrderDraft {
                    full_name: format!("Customer {}", seed),
                    address: format!("{} Main St", 100 + seed),
                    notes: (seed % 20 == 0).then(|| "Leave at the door".to_string()),
                    email: format!("customer{}@example.com", seed),
                    status: STATUSES[(seed / 10) % STATUSES.len()].to_string(),
                    good_id,
                })
                .await?;
            orders += 1;
        }

        if (seed + 1) % 100 == 0 {
            println!("  Generated {} goods...", seed + 1);
        }
    }

    session.commit().await?;

    let elapsed = start.elapsed();
    println!();
    println!(
        "✓ Generated {} categories, {} providers, {} goods and {} orders in {:?}",
        category_ids.len(),
        provider_ids.len(),
        goods,
        orders,
        elapsed
    );

    // Verify aggregates
    let mut session = db.begin().await?;
    let totals = session.summaries().order_totals().await?;
    println!("  Orders total: {} ({} orders)", totals.total_cost_cents, totals.orders_count);
    session.rollback().await?;

    db.close().await;
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// "Northwind Hardware" -> "northwindhardware"
fn company_slug(company: &str) -> String {
    company
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
