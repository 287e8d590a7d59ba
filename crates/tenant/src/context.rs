// Request-scoped tenant context

use shipping_models::{Language, MerchantStore};

/// Store and language resolved for one request; handlers receive it explicitly.
#[derive(Debug, Clone)]
pub struct StoreContext {
    pub store: MerchantStore,
    pub language: Language,
}

impl StoreContext {
    pub fn new(store: MerchantStore, language: Language) -> Self {
        Self { store, language }
    }
}
