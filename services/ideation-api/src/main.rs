use std::sync::Arc;

use resterize::prelude::*;

use ideation_api::app::{app, IDEAS_COLLECTION};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load_for_service("ideation-api")?;

    init_tracing(&config)?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // resolve the store before serving; request handlers never touch
    // connection state
    let router = match &config.store {
        Some(store) => {
            let database = mongo::connect(store).await?;
            app(MongoCollection::new(&database, IDEAS_COLLECTION), clock)
        }
        None => {
            warn!("no [store] configured, serving from an in-memory collection");
            app(MemoryCollection::new(), clock)
        }
    };

    Server::new(config).serve(router).await?;

    Ok(())
}
