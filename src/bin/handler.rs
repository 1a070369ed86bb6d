use chat_bridge::banner::print_banner;
use chat_bridge::configuration::get_configuration;
use chat_bridge::startup::run_handler;
use chat_bridge::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("chat-bridge-handler".into(), "info".into());
    init_subscriber(subscriber);

    print_banner("handler");

    let settings = get_configuration().expect("Failed to read configuration.");

    let address = settings.handler.address();
    tracing::info!(
        endpoint = %settings.inference.endpoint,
        model_id = %settings.inference.model_id,
        "Start handler at {:?}",
        &address
    );
    let listener =
        TcpListener::bind(&address).unwrap_or_else(|_| panic!("failed to bind to {}", address));

    run_handler(listener, settings).await?.await
}
