use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::env;

use rust_symphony::config::ServiceConfig;
use rust_symphony::solve::{configure, json_config, AppState};

// ---------- Server bootstrap ----------
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Error reporting is only enabled when a DSN is configured
    let _sentry = env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let config = ServiceConfig::from_env();
    let port = config.port;
    let json_limit = config.json_limit;
    log::info!(
        "using solver {} writing to {}",
        config.solver.solver_path.display(),
        config.solver.output_dir.display()
    );

    let state = web::Data::new(AppState::new(config.solver, config.cache_capacity));

    log::info!("Starting server on http://127.0.0.1:{}", port);
    HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(json_config(json_limit))
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
