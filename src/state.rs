use std::sync::Arc;

use crate::config::Config;
use crate::submission::hooks::HookRegistry;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub hooks: HookRegistry,
}
