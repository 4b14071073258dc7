//! Hobbies API HTTP server.
//!
//! Settings are read from `config/default.yaml`, an optional
//! `config/{APP_ENV}.yaml`, and `APP__*` environment variables (a `.env` file
//! is loaded first). `RUST_LOG` controls logging and defaults to `info`.

use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::{App, HttpServer, web};
use env_logger::Env;

use hobbies_api::db::{establish_connection_pool, run_migrations};
use hobbies_api::models::config::ServerConfig;
use hobbies_api::repository::DieselRepository;
use hobbies_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to run database migrations: {e}");
        std::process::exit(1);
    }

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting server on http://{}:{}",
        server_config.address,
        server_config.port
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .wrap(Logger::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    });
    if let Some(workers) = server_config.workers {
        server = server.workers(workers);
    }

    server.bind(bind_address)?.run().await
}
