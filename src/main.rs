//! # Todo Server - Entry Point
//! src/main.rs

use todo_server::config::Config;
use todo_server::logging;
use todo_server::server::Server;

fn main() {
    let config = Config::new();
    logging::init(&config);
    config.print_summary();

    let result = Server::bind(config).and_then(|server| server.run());

    if let Err(e) = result {
        tracing::error!(error = %e, "fatal error");
        std::process::exit(1);
    }
}
