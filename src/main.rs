use actix_web::{middleware::Logger, web, App, HttpServer};
use blog_service::middleware::VisitorSessionMiddleware;
use blog_service::services::PostService;
use blog_service::store::PostStore;
use blog_service::{assets, handlers, AppState, Config};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Load the default post image up front; without it every imageless
    // submission would fail, so treat a read failure as fatal.
    let default_image = match assets::encode_image_base64(&config.assets.default_image) {
        Ok(encoded) => encoded,
        Err(e) => {
            tracing::error!(
                "Default image loading failed ({}): {}",
                config.assets.default_image,
                e
            );
            eprintln!("ERROR: Failed to load default image: {}", e);
            std::process::exit(1);
        }
    };

    let state = web::Data::new(AppState {
        posts: PostService::new(PostStore::seeded()),
        default_image,
    });

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(VisitorSessionMiddleware)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/", web::get().to(handlers::index))
            .route("/list", web::get().to(handlers::list))
            .route("/create", web::get().to(handlers::create))
            .route("/view", web::get().to(handlers::view))
            .route("/edit", web::get().to(handlers::edit))
            .route("/submit", web::post().to(handlers::submit))
            .route("/submit-edit", web::post().to(handlers::submit_edit))
            .route("/log-click", web::post().to(handlers::log_click))
    })
    .bind(&bind_address)?
    .run()
    .await
}
