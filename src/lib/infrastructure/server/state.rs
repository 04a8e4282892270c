use crate::application::Translator;
use std::sync::Arc;

pub(crate) struct ServerState<T: Translator> {
    translator: Arc<T>,
}

impl<T: Translator> ServerState<T> {
    pub(crate) fn new(translator: Arc<T>) -> Self {
        Self { translator }
    }

    pub(crate) fn translator(&self) -> Arc<T> {
        Arc::clone(&self.translator)
    }
}
