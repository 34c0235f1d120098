use gatehouse_host::bootstrap;

#[tokio::main]
async fn main() {
    gatehouse_observability::init();

    // Fail fast: any binding failure means no socket is ever bound.
    let (config, app) = match bootstrap::boot() {
        Ok(boot) => boot,
        Err(err) => {
            tracing::error!(error = %err, "startup failed; not serving");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!(
        server_name = %config.server_name,
        "listening on {}",
        listener.local_addr().unwrap()
    );

    axum::serve(listener, app).await.unwrap();
}
