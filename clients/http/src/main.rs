use actix_cors::Cors;
use actix_web::{
    middleware::{self, Condition},
    web::Data,
    App, HttpServer,
};
use clap::Parser;
use database::persistence::StorageEngine;
use std::io;

mod error;
mod info;
mod routes;

/// 📇 Phonebook server, CRUD over a collection of contacts backed by a document store
#[derive(Parser, Debug)]
struct Cli {
    /// Port the http server will run on
    #[clap(short, long, env = "PORT", default_value = "3001")]
    port: u16,

    /// Address the http server will run on
    #[clap(short, long, env = "ADDRESS", default_value = "0.0.0.0")]
    address: String,

    /// Postgres connection string for the document store, e.g. "host=localhost user=postgres".
    /// Documents are kept in memory when not set
    #[clap(short, long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Logs every http request
    #[clap(long, env = "LOG_HTTP")]
    log_http: bool,

    #[clap(long, env = "HTTP_WORKERS", default_value_t = 2)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let storage_engine = match args.database_url {
        Some(connection_string) => StorageEngine::Postgres(connection_string),
        None => {
            log::warn!("DATABASE_URL is not set, documents will not outlive the process");
            StorageEngine::Memory
        }
    };

    log::info!("Using {} storage engine", storage_engine.name());

    // Shared by every worker for the lifetime of the process
    let store = storage_engine.connect().await.map_err(|e| {
        log::error!("Unable to connect to the document store: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;

    let log_http = args.log_http;

    log::info!(
        "starting HTTP server on http://{}:{}/",
        args.address,
        args.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::from(store.clone()))
            .configure(routes::configure)
            .wrap(Cors::permissive())
            .wrap(Condition::new(log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}
