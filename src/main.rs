use std::sync::Arc;

use apphandler::AppHandler;
use axum::{ routing::{ get, options, post }, Extension, Router };
use tokio::net::TcpListener;

mod apphandler;
mod util;
mod api;
mod structs;


#[tokio::main]
async fn main() -> anyhow::Result<()>{
  // a missing .env is fine, the variables may come from the environment
  dotenvy::dotenv().ok();
  util::logger::init()?;

  let handler = AppHandler::new()?;
  let addr = handler.config.bind_addr();

  log::info!("IP info endpoint: {}", handler.config.ipinfo_url);
  log::info!("Speed test client: {}", handler.config.speedtest_command.join(" "));

  let listener = TcpListener::bind(&addr).await?;
  log::info!("Listening on http://{}/", addr);

  axum::serve(listener, router(handler)).await?;

  Ok(())
}

pub fn router( handler: Arc<AppHandler> ) -> Router{
  Router::new()
    .route("/", get(api::home::get))

    .route("/api/speedtest", options(util::cors::options))
    .route("/api/speedtest", get(api::speedtest::get))

    .route("/api/networkinfo", options(util::cors::options))
    .route("/api/networkinfo", get(api::networkinfo::get))

    .route("/api/ping", options(util::cors::options))
    .route("/api/ping", post(api::ping::post))

    .route("/api/traceroute", options(util::cors::options))
    .route("/api/traceroute", post(api::traceroute::post))

    .route("/api/portscan", options(util::cors::options))
    .route("/api/portscan", post(api::portscan::post))

    .route("/api/dns", options(util::cors::options))
    .route("/api/dns", post(api::dns::post))

    .route("/api/website", options(util::cors::options))
    .route("/api/website", post(api::website::post))

    .layer(Extension(handler))
}
