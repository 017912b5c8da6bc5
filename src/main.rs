//! Matrimony Platform CLI - Entry Point
//!
//! Thin command-line front over the client SDK. Every command runs through
//! the same session plumbing the views use: awaited boot restore, guarded
//! calls, coordinator-driven invalidation on 401.

use anyhow::Result;
use matrimony_client::models::{LoginPayload, ProfileQuery, UploadPurpose};
use matrimony_client::{
    Api, Config, HttpClient, Route, SessionCoordinator, SessionStore, TokenStore,
};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

fn print_help() {
    println!("Matrimony Platform CLI v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: matrimony-client <COMMAND> [ARGS]");
    println!();
    println!("Commands:");
    println!("  login <email> <password>          Authenticate and persist the session");
    println!("  logout                            Revoke and clear the session");
    println!("  me                                Show the current user");
    println!("  profiles [page]                   List profiles (paginated)");
    println!("  profile <id>                      Show one profile");
    println!("  upload-photo <profile-id> <path>  Presign, upload, register a photo");
    println!("  tenants [page]                    List tenants (super-admin)");
    println!();
    println!("Environment variables:");
    println!("  MATRIMONY_API_URL     Explicit API base URL");
    println!("  MATRIMONY_API_HOST    Derivation host when no URL is set (default: localhost)");
    println!("  MATRIMONY_TOKEN_PATH  Token file override (default: ~/.matrimony/tokens.json)");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let log_level = std::env::var("RUST_LOG")
        .map(|s| match s.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env()?;
    let tokens = Arc::new(TokenStore::open(config.token_path.clone())?);
    let http = Arc::new(HttpClient::new(&config, tokens.clone()));
    let api = Api::new(http);
    let session = Arc::new(SessionStore::new(Arc::new(api.auth.clone()), tokens));
    let coordinator = SessionCoordinator::new(session.clone());

    // Boot restore is awaited before any command runs
    session.restore().await;

    let command = args[1].as_str();
    match command {
        "login" => {
            let (email, password) = match (args.get(2), args.get(3)) {
                (Some(e), Some(p)) => (e.clone(), p.clone()),
                _ => {
                    eprintln!("Usage: matrimony-client login <email> <password>");
                    std::process::exit(2);
                }
            };
            match session.login(&LoginPayload { email, password }).await {
                Ok(()) => {
                    if let Some(user) = session.current_user().await {
                        println!("Logged in as {} ({})", user.full_name, user.email);
                    } else {
                        println!("Logged in, but the identity fetch failed; session cleared.");
                    }
                }
                Err(_) => {
                    let message = session
                        .last_error()
                        .await
                        .unwrap_or_else(|| "Login failed. Check your credentials.".to_string());
                    eprintln!("{message}");
                    std::process::exit(1);
                }
            }
        }
        "logout" => {
            session.logout().await;
            println!("Logged out.");
        }
        "me" => {
            let outcome = coordinator.intercept(api.auth.me().await).await;
            finish_navigation(&coordinator).await;
            let user = outcome?;
            println!("{:#?}", user);
        }
        "profiles" => {
            let page = args.get(2).and_then(|p| p.parse().ok());
            let query = ProfileQuery {
                page,
                ..Default::default()
            };
            let outcome = coordinator.intercept(api.profiles.list(&query).await).await;
            finish_navigation(&coordinator).await;
            let listing = outcome?;
            println!(
                "Page {}/{} ({} total)",
                listing.page,
                listing.pages.unwrap_or(0),
                listing.total
            );
            for item in listing.items {
                println!(
                    "  {}  {:?}  {}  {}",
                    item.id,
                    item.status,
                    item.city.as_deref().unwrap_or("-"),
                    item.profession.as_deref().unwrap_or("-"),
                );
            }
        }
        "profile" => {
            let id: Uuid = parse_arg(&args, 2, "profile id")?;
            let outcome = coordinator.intercept(api.profiles.get(id).await).await;
            finish_navigation(&coordinator).await;
            println!("{:#?}", outcome?);
        }
        "upload-photo" => {
            let id: Uuid = parse_arg(&args, 2, "profile id")?;
            let path = args.get(3).cloned().unwrap_or_else(|| {
                eprintln!("Usage: matrimony-client upload-photo <profile-id> <path>");
                std::process::exit(2);
            });
            let bytes = std::fs::read(&path)?;
            let file_name = std::path::Path::new(&path)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.clone());
            info!("Uploading {} ({} bytes)", file_name, bytes.len());
            let outcome = coordinator
                .intercept(
                    api.files
                        .upload_media(id, &file_name, bytes, UploadPurpose::ProfilePhoto)
                        .await,
                )
                .await;
            finish_navigation(&coordinator).await;
            println!("Registered object key: {}", outcome?);
        }
        "tenants" => {
            let page = args.get(2).and_then(|p| p.parse().ok()).unwrap_or(1);
            let outcome = coordinator
                .intercept(api.tenants.list(page, 20, None).await)
                .await;
            finish_navigation(&coordinator).await;
            let listing = outcome?;
            println!("{} tenants", listing.total);
            for tenant in listing.items {
                println!(
                    "  {}  {}  {:?}  active={}",
                    tenant.id, tenant.slug, tenant.plan, tenant.is_active
                );
            }
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_help();
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Surface a coordinator-recorded redirect the way the views would
async fn finish_navigation(coordinator: &SessionCoordinator) {
    if let Some(route) = coordinator.take_navigation().await {
        if route == Route::Login {
            eprintln!("Session expired. Please log in again.");
        }
    }
}

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str) -> Result<T> {
    args.get(index)
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("missing or invalid {name}"))
}
