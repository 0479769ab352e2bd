use clap::Args;
use storefront_app::{
    database::{self, Db},
    domain::{
        categories::{CategoriesService, PgCategoriesService},
        products::{PgProductsService, ProductsService, defaults::starter_catalog},
    },
};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let catalog = starter_catalog().map_err(|error| format!("invalid starter catalog: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let db = Db::new(pool);
    let categories = PgCategoriesService::new(db.clone());
    let products = PgProductsService::new(db);

    for name in &catalog.categories {
        categories
            .ensure_category(name)
            .await
            .map_err(|error| format!("failed to create category {name}: {error}"))?;
    }

    let existing = products
        .count_products()
        .await
        .map_err(|error| format!("failed to count products: {error}"))?;

    if existing > 0 {
        println!("catalog already has {existing} products; skipping product seed");

        return Ok(());
    }

    let count = catalog.products.len();

    for product in catalog.products {
        let name = product.name.clone();

        products
            .create_product(product)
            .await
            .map_err(|error| format!("failed to create product {name}: {error}"))?;
    }

    println!("seeded {count} products");

    Ok(())
}
