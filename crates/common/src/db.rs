use mongodb::bson::doc;
use mongodb::{Client, Database};

/// Connect to MongoDB and verify the deployment answers a `ping`.
pub async fn connect(database_uri: &str, database_name: &str) -> anyhow::Result<Database> {
    let client = Client::with_uri_str(database_uri).await?;
    let database = client.database(database_name);
    database.run_command(doc! { "ping": 1 }).await?;

    tracing::info!(database = database_name, "Connected to MongoDB");
    Ok(database)
}
