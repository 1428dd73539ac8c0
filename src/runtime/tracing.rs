/// Initializes the tracing/logging infrastructure for the application.
///
/// Filtering comes from the `RUST_LOG` environment variable:
/// - `RUST_LOG=info` - state changes (created, renewed, refunded)
/// - `RUST_LOG=debug` - payloads and lookups as well
/// - `RUST_LOG=gym_records::catalog=debug` - debug only for the book catalog
///
/// Passwords and password hashes are redacted from every payload.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
