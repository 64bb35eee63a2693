use std::sync::Arc;

use kojilab_core::application::KojilabService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: KojilabService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: KojilabService) -> Self {
        Self { args, service }
    }
}
