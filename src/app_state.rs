use std::sync::Arc;

use crate::{
    catalog::ProviderCatalog,
    config::Config,
    reviews::ReviewStore,
    session::SessionStore,
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProviderCatalog>,
    pub reviews: Arc<ReviewStore>,
    pub sessions: Arc<SessionStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let catalog = Arc::new(ProviderCatalog::seeded());
        let reviews = Arc::new(ReviewStore::seeded(catalog.clone()));
        let sessions = Arc::new(SessionStore::open(
            config.session.store_path.clone(),
            catalog.clone(),
        ));

        Self {
            catalog,
            reviews,
            sessions,
            config,
        }
    }
}
