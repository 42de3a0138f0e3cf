use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use roster_cards::args;
use roster_cards::controller::cards::{AppState, cards, index};
use roster_cards::controller::faceit::HttpFaceitClient;
use roster_cards::model::AggregationOptions;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    tracing::debug!(?args, "configuration loaded");

    let api = HttpFaceitClient::new(&args.api_base, &args.api_key, args.request_timeout)?;
    let options = AggregationOptions {
        headshot_basis: args.headshot_basis,
    };
    let state = Data::new(AppState::new(
        Arc::new(api),
        args.roster.clone(),
        options,
        args.title.clone(),
    ));

    tracing::info!(
        players = args.roster.len(),
        bind = %args.bind,
        port = args.port,
        headshot_basis = ?args.headshot_basis,
        "starting roster cards server"
    );

    let static_dir = args.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(index))
            .route("/cards", web::get().to(cards))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
