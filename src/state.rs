use crate::controller::Controller;
use crate::data::Dataset;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Dataset>,
    pub session: Arc<Mutex<Controller>>,
}

impl AppState {
    pub fn new(data: Dataset) -> Self {
        Self {
            data: Arc::new(data),
            session: Arc::new(Mutex::new(Controller::new())),
        }
    }
}
