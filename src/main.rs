#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let (app, addr) = router().expect("router assembly failed");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "chatbox listening");
    axum::serve(listener, app).await.expect("server failed");
}

/// Assemble the router: Leptos SSR pages plus static assets under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
#[cfg(feature = "ssr")]
fn router() -> Result<(axum::Router, std::net::SocketAddr), String> {
    use std::path::PathBuf;

    use axum::Router;
    use axum::routing::get;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    use chatbox::app::{App, shell};

    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let app = leptos_router
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(TraceLayer::new_for_http());

    Ok((app, addr))
}

#[cfg(feature = "ssr")]
async fn healthz() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The binary only exists for the `ssr` build; the browser entry point
    // is `chatbox::hydrate`.
}
