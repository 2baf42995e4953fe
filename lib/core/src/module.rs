use axum::Router;

/// A service module that contributes HTTP routes.
///
/// Each business module (jobsheet today, more later) implements this
/// trait to register its API endpoints. The server binary collects all
/// modules and merges their routers into the application router.
pub trait Module: Send + Sync {
    /// Module name, used for logging.
    fn name(&self) -> &str;

    /// Return the module's routes. The router is self-contained: it has
    /// already nested itself under its public path prefix and bound its
    /// own state.
    fn routes(&self) -> Router;
}
