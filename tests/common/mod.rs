use chat_bridge::configuration::get_configuration;
use chat_bridge::startup::{run_handler, run_relay};

pub struct TestApp {
    pub address: String,
}

/// Start a relay instance on a random port, pointed at the given function
/// endpoint (usually a wiremock server) and static directory.
pub async fn spawn_relay(function_url: String, static_dir: String) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.relay.function_url = function_url;
    configuration.relay.static_dir = static_dir;

    let server = run_relay(listener, configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Relay port: {}", port);

    TestApp { address }
}

/// Start a handler instance on a random port, pointed at the given model
/// runtime endpoint (usually a wiremock server).
pub async fn spawn_handler(endpoint: String, api_token: Option<String>) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.inference.endpoint = endpoint;
    configuration.inference.api_token = api_token;

    let server = run_handler(listener, configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Handler port: {}", port);

    TestApp { address }
}
