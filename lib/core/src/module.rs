use axum::Router;

/// A service module that contributes HTTP routes.
///
/// Each feature module implements this trait to register its API
/// endpoints. The binary entry point collects all modules and merges
/// their routes into a single Router. Routes are merged at the root:
/// the card endpoints are public paths, not namespaced per module.
pub trait Module: Send + Sync {
    /// Module name, used for logging.
    fn name(&self) -> &str;

    /// Return the module's routes, merged into the root router.
    fn routes(&self) -> Router;
}
