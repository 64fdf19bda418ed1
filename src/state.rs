use crate::relay::Relay;
// app's shared state

pub struct AppState {
    pub relay: Option<Relay>, // None -> serve the mock payload
}

impl AppState {
    pub fn mock() -> Self {
        Self { relay: None }
    }

    pub fn relaying(relay: Relay) -> Self {
        Self { relay: Some(relay) }
    }
}
