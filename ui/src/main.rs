use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use client::transport::{
    ApiClient, AuthInterceptor, LogNavigator, LogNotifier, Method, MockTransport, Response,
    StatusInterceptor,
};
use client::storage::slots;
use client::{LocalStore, Role, SessionStore, UserProfile};
use serde_json::json;

use pulseboard::config::get_config_or_panic;
use pulseboard::menu;
use pulseboard::theme::ThemeManager;

/// Console walkthrough of the PulseBoard presentation layer: configuration,
/// themes, role-filtered navigation and an authenticated mock API round trip.
#[derive(Parser)]
#[command(name = "pulseboard", version, about)]
struct Cli {
    /// Role tag to browse the navigation as (admin, operation, user).
    #[arg(long, default_value = "admin")]
    role: String,

    /// Theme to switch to before printing the style summary.
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    pulseboard::logger::setup_logger()?;
    let config = get_config_or_panic();

    let store = LocalStore::open_default();
    if store.get(slots::THEME).is_none() {
        store.set(slots::THEME, config.theme().default_theme());
    }
    let session = SessionStore::new(store.clone());
    ThemeManager::init_global(store)?;
    if let Some(key) = &cli.theme {
        ThemeManager::global_switch_theme(key);
    }

    println!("{}", config.system().title());
    println!();

    println!("Themes:");
    let current = ThemeManager::global_current_theme();
    for (key, display_name) in ThemeManager::global_available_themes() {
        let marker = if key == current { "*" } else { " " };
        println!("  {marker} {key:<10} {display_name}");
    }
    println!();

    println!("Navigation for role '{}':", cli.role);
    let items = menu::filter_by_role(&menu::admin_menu(), &cli.role);
    if items.is_empty() {
        println!("  (no entries visible)");
    }
    for item in &items {
        println!("  {}", item.title);
        for child in &item.children {
            println!("    {}", child.title);
        }
    }
    println!();

    // Mock round trip: log in, fetch the profile with the bearer token
    // attached, then hit an endpoint that answers 401 to show the teardown.
    let transport = Arc::new(MockTransport::with_latency(Duration::from_millis(10)));
    transport.route(
        Method::Get,
        "/user/profile",
        Response::ok(json!({
            "code": 200,
            "message": "OK",
            "data": {"username": "demo", "role": "admin"}
        })),
    );
    transport.route(
        Method::Get,
        "/admin/secrets",
        Response::with_status(401, json!({"message": "token expired"})),
    );

    let api = ApiClient::new(transport)
        .with_request_interceptor(Arc::new(AuthInterceptor::new(session.clone())))
        .with_response_interceptor(Arc::new(StatusInterceptor::new(
            session.clone(),
            Arc::new(LogNavigator),
            Arc::new(LogNotifier),
            config.routes().login(),
        )));

    session.set_token("demo-token");
    session.set_user_profile(&UserProfile::new("demo", Role::Admin));

    let profile = api.get("/user/profile").await?;
    println!("GET /user/profile -> {}", profile.envelope()?.message);

    if let Err(err) = api.get("/admin/secrets").await {
        println!("GET /admin/secrets -> {err}");
    }
    println!(
        "logged in after 401: {}",
        if session.is_logged_in() { "yes" } else { "no" }
    );

    Ok(())
}
