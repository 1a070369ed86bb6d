use crate::configuration::Settings;
use crate::routes;
use crate::services::InferenceClient;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::http::{header, Method};
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

/// Build the relay server: static files for the web app, CORS for the
/// browser, and the /api/chat forwarder in between.
pub async fn run_relay(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    let static_dir = settings.relay.static_dir.clone();
    let settings = web::Data::new(settings);

    // One client for the whole process; forwarding reuses pooled connections.
    let http_client = reqwest::Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let http_client = web::Data::new(http_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .send_wildcard()
                    .allowed_methods(vec!["POST", "OPTIONS"])
                    .allowed_header(header::CONTENT_TYPE),
            )
            .route("/health_check", web::get().to(routes::health_check))
            .service(routes::chat::forward)
            .route(
                "/{path:.*}",
                web::method(Method::OPTIONS).to(routes::chat::preflight),
            )
            .route("/{path:.*}", web::post().to(routes::chat::not_found))
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
            .app_data(http_client.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Build the handler service: a single catch-all that feeds every request
/// through the invocation pipeline, the way the managed platform would.
pub async fn run_handler(
    listener: TcpListener,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let inference_client = InferenceClient::try_new(&settings.inference)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let inference_client = web::Data::new(inference_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .default_service(web::to(routes::invoke::invoke))
            .app_data(inference_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
