use crate::upstream::Upstream;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
}
