use crate::routes::DoorApi;
use crate::store_models::{Door, DoorId};

/// What the root component renders while it waits for the initial door.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded(Door),
}

/// The single read issued on mount. Failures are final; there is no retry.
pub async fn load_door<A: DoorApi>(api: &A, id: &DoorId) -> LoadState {
    log::debug!("Loading door {}", id);
    match api.fetch_door(id).await {
        Ok(door) => {
            log::debug!("Loaded door {:?}", door);
            LoadState::Loaded(door)
        }
        Err(e) => {
            log::error!("Loading door {} failed: {}", id, e);
            LoadState::Failed(e.to_string())
        }
    }
}
