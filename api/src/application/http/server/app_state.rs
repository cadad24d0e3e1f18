use std::sync::Arc;

use sibra_core::application::SibraService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SibraService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SibraService) -> Self {
        Self { args, service }
    }
}
