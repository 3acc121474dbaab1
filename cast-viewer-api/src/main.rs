use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use cast_mints::{AlchemyClient, MintScanner, OwnedTokenFetcher};
use cast_viewer_api::api_doc;
use cast_viewer_api::handlers::default_handler;
use cast_viewer_api::routes::{mints, tokens};
use dotenv::dotenv;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Initializes the logging, ensuring that the `RUST_LOG` environment
/// variable is always considered first.
fn init_logging() {
    const DEFAULT_LOG_FILTER: &str = "info";

    tracing::subscriber::set_global_default(
        fmt::Subscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .or(EnvFilter::try_new(DEFAULT_LOG_FILTER))
                    .expect("Invalid RUST_LOG filters"),
            )
            .finish(),
    )
    .expect("Failed to set the global tracing subscriber");
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_logging();

    let port = std::env::var("HTTP_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let client = AlchemyClient::new();
    let scanner = web::Data::new(MintScanner::new(client.clone()));
    let owned_fetcher = web::Data::new(OwnedTokenFetcher::new(client));

    // Warm the recent-mints store so the first page load has data. A
    // missing API key surfaces here as the scanner's error state, not as a
    // startup crash.
    {
        let scanner = scanner.clone();
        tokio::spawn(async move { scanner.refetch().await });
    }

    tracing::info!(port, "starting cast-viewer-api");
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(scanner.clone())
            .app_data(owned_fetcher.clone())
            .service(default_handler::root)
            .service(default_handler::health_check)
            .route("/openapi.json", web::get().to(api_doc::serve))
            .configure(mints::config)
            .configure(tokens::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
