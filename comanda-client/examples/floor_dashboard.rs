// comanda-client/examples/floor_dashboard.rs
// Floor dashboard example: login, load the roster, follow push events.

use comanda_client::view::tables::TableBoard;
use comanda_client::{ClientConfig, PushClient, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <base_url> <email> <password>", args[0]);
        println!(
            "  Example: {} http://localhost:5000 cashier@example.com secret",
            args[0]
        );
        return Ok(());
    }

    let base_url = &args[1];
    let email = &args[2];
    let password = &args[3];

    let config = ClientConfig::new(base_url);
    let http = config.build_http_client();

    let login = match http.login(email, password).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Failed to login: {}", e);
            return Err(e.into());
        }
    };
    let session = Session::from_login(&login, email)?;
    tracing::info!("Logged in as {} ({})", session.email, session.role);

    let http = http.with_token(session.token.clone());
    let mut board = TableBoard::new(http);
    board.refresh().await;
    print_roster(&board);

    // Follow push events when a channel address is configured
    let push_addr =
        std::env::var("COMANDA_PUSH_ADDR").unwrap_or_else(|_| "localhost:5001".to_string());
    let push = match PushClient::connect(&push_addr, config.reconnect).await {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("No push channel at {}: {}", push_addr, e);
            return Ok(());
        }
    };

    let mut events = push.event_queue(64);
    while let Some(event) = events.recv().await {
        tracing::info!("Push event: {:?}", event);
        board.handle_event(event).await;
        print_roster(&board);
    }

    Ok(())
}

fn print_roster<A: comanda_client::api::TableApi>(board: &TableBoard<A>) {
    for entry in board.tables() {
        println!(
            "Table #{:<4} {:<12}{}",
            entry.table.table_number,
            entry.table.status.to_string(),
            if entry.has_new_order { "  [new order]" } else { "" }
        );
    }
}
