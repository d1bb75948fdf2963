use dotenvy::dotenv;
use fundboard::router::init_router;
use fundboard::state::init_app_state;
use fundboard_config::{JwtConfig, ServerConfig};
use fundboard_models::{Role, User};
use fundboard_session::create_session_token;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Check if this is a CLI command
    if args.len() > 1 && args[1] == "issue-token" {
        handle_issue_token(args);
        return;
    }

    // Normal server startup
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state();
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let listener = tokio::net::TcpListener::bind(server_config.bind_addr())
        .await
        .unwrap();
    println!("🚀 Server running on http://{}", server_config.bind_addr());
    axum::serve(listener, app).await.unwrap();
}

fn handle_issue_token(args: Vec<String>) {
    if args.len() != 5 {
        eprintln!("Usage: {} issue-token <email> <name> <role>", args[0]);
        std::process::exit(1);
    }

    let email = &args[2];
    let name = &args[3];
    let role: Role = match args[4].parse() {
        Ok(role) => role,
        Err(err) => {
            eprintln!("❌ {}", err);
            std::process::exit(1);
        }
    };

    let user = User {
        id: uuid::Uuid::new_v4(),
        email: email.clone(),
        name: name.clone(),
        image: None,
        role,
    };

    match create_session_token(&user, &JwtConfig::from_env()) {
        Ok(token) => {
            println!("✅ Session token issued for {}", email);
            println!("   Role: {}", role);
            println!("   {}", token);
        }
        Err(err) => {
            eprintln!("❌ Error issuing token: {}", err);
            std::process::exit(1);
        }
    }
}
