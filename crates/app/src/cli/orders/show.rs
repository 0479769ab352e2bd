use clap::Args;
use storefront_app::{
    database::{self, Db},
    domain::orders::{OrdersService, PgOrdersService, records::OrderUuid},
};

#[derive(Debug, Args)]
pub(crate) struct ShowOrderArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Order UUID
    #[arg(long)]
    order: OrderUuid,
}

pub(crate) async fn run(args: ShowOrderArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let order = PgOrdersService::new(Db::new(pool))
        .get_order(args.order)
        .await
        .map_err(|error| format!("failed to load order {}: {error}", args.order))?;

    let address = &order.shipping_address;

    println!("order_uuid: {}", order.uuid);
    println!("order_number: {}", order.order_number);
    println!("status: {}", order.status);
    println!("created_at: {}", order.created_at);
    println!(
        "ship_to: {}, {}, {}, {} {}, {}",
        address.full_name, address.address, address.city, address.state, address.zip_code,
        address.country
    );

    for item in &order.items {
        println!(
            "item: {} x{} @ {} ({})",
            item.name, item.quantity, item.price, item.product_uuid
        );
    }

    println!("total: {}", order.total);

    Ok(())
}
