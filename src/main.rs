use chat_bridge::banner::print_banner;
use chat_bridge::configuration::get_configuration;
use chat_bridge::startup::run_relay;
use chat_bridge::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("chat-bridge-relay".into(), "info".into());
    init_subscriber(subscriber);

    print_banner("relay");

    let settings = get_configuration().expect("Failed to read configuration.");

    let address = settings.relay.address();
    tracing::info!(
        static_dir = %settings.relay.static_dir,
        function_url = %settings.relay.function_url,
        "Start relay at {:?}",
        &address
    );
    let listener =
        TcpListener::bind(&address).unwrap_or_else(|_| panic!("failed to bind to {}", address));

    run_relay(listener, settings).await?.await
}
