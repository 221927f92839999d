//! Seeds the brands and products collections with starter catalog data.
//! Each collection is only seeded when it is empty.

use mongodb::bson::{doc, DateTime, Document};

use catalog_api::config::AppConfig;
use catalog_api::models::{STATUS_AVAILABLE, STATUS_COMING_SOON};
use catalog_api::store::{Store, StoreError, BRANDS, PRODUCTS};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let store = match Store::connect(&config.store).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("failed to configure store client: {}", e);
            std::process::exit(1);
        }
    };

    println!("Seeding database {}...", config.store.database);

    if let Err(e) = seed_brands(&store).await {
        eprintln!("seeding brands failed: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = seed_products(&store).await {
        eprintln!("seeding products failed: {}", e);
        std::process::exit(1);
    }

    println!("Seeding completed.");
}

async fn seed_brands(store: &Store) -> Result<(), StoreError> {
    let existing = store.count(BRANDS, None).await?;
    if existing > 0 {
        println!("Brands collection already has {} documents. Skipping seed.", existing);
        return Ok(());
    }

    let brands = vec![
        brand("BEST", "best", "Premium PU Slippers Collection", 1),
        brand("Walkaroo", "walkaroo", "Comfortable PU Slippers for Every Occasion", 2),
        brand("Action", "action", "EVA Footwear, School Shoes & Sneakers", 3),
        brand("Brilliant", "brilliant", "Quality Footwear for Everyone", 4),
        brand("Chinese", "chinese", "Affordable and Stylish Footwear", 5),
    ];

    let inserted = store.insert_many(BRANDS, brands).await?;
    println!("Inserted {} brands", inserted);
    Ok(())
}

async fn seed_products(store: &Store) -> Result<(), StoreError> {
    let existing = store.count(PRODUCTS, None).await?;
    if existing > 0 {
        println!("Products collection already has {} documents. Skipping seed.", existing);
        return Ok(());
    }

    let adult_sizes = vec!["7", "8", "9", "10", "11"];
    let products = vec![
        product(
            "Comfort PU Slippers",
            "best",
            "mens",
            "Premium quality PU material with enhanced comfort",
            adult_sizes.clone(),
            STATUS_AVAILABLE,
        ),
        product(
            "Elite PU Slippers",
            "best",
            "womens",
            "Stylish design with superior comfort technology",
            vec!["6", "7", "8", "9", "10"],
            STATUS_AVAILABLE,
        ),
        product(
            "Walkaroo Comfort",
            "walkaroo",
            "mens",
            "Enhanced comfort with premium PU construction",
            adult_sizes.clone(),
            STATUS_AVAILABLE,
        ),
        product(
            "Action EVA Sports",
            "action",
            "mens",
            "Lightweight EVA material for active lifestyle",
            adult_sizes.clone(),
            STATUS_AVAILABLE,
        ),
        product(
            "Action School Shoes",
            "action",
            "kids",
            "Durable and comfortable for daily school wear",
            vec!["1", "2", "3", "4", "5", "6"],
            STATUS_AVAILABLE,
        ),
        product(
            "Action Sneakers",
            "action",
            "unisex",
            "Premium sneakers launching soon",
            adult_sizes,
            STATUS_COMING_SOON,
        ),
    ];

    let inserted = store.insert_many(PRODUCTS, products).await?;
    println!("Inserted {} products", inserted);
    Ok(())
}

fn brand(name: &str, slug: &str, description: &str, order: i32) -> Document {
    let now = DateTime::now();
    doc! {
        "name": name,
        "slug": slug,
        "logo_url": format!("https://via.placeholder.com/150x50.png?text={}+Logo", name),
        "banner_url": format!("https://via.placeholder.com/1200x400.png?text={}+Banner", name),
        "description": description,
        "visible": true,
        "in_navbar": true,
        "order": order,
        "created_at": now,
        "updated_at": now,
    }
}

fn product(
    name: &str,
    brand: &str,
    category: &str,
    description: &str,
    sizes: Vec<&str>,
    status: &str,
) -> Document {
    let now = DateTime::now();
    doc! {
        "name": name,
        "brand": brand,
        "category": category,
        "description": description,
        "images": [format!(
            "https://via.placeholder.com/600x600.png?text={}",
            name.replace(' ', "+")
        )],
        "sizes": sizes.into_iter().map(String::from).collect::<Vec<_>>(),
        "status": status,
        "featured": true,
        "created_at": now,
        "updated_at": now,
    }
}
