use crate::client::ShareItClient;

#[derive(Clone)]
pub struct AppState {
    pub client: ShareItClient,
}

impl AppState {
    pub fn new(client: ShareItClient) -> Self {
        Self { client }
    }
}
