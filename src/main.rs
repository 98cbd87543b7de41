use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use studygen_server::{app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match Config::from_env().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to initialise application state: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "starting HTTP server on {}:{} (model {})",
        config.web_server_host,
        config.web_server_port,
        config.completion_model
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new("%a \"%r\" %s %b %T %{x-request-id}o"))
            .wrap(Cors::permissive())
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
