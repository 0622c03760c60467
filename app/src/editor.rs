//! Request lifecycle of the door editor.

use crate::error::{ApiError, EditorError};
use crate::store_models::{Door, DoorId, Draft, DraftEdit};

/// Identifies one successful submission, so a timer started for it can only
/// clear that success and not a later one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SuccessTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Loading,
    Failed(String),
    Succeeded(SuccessTicket),
}

/// What the editor shows in place of (or around) the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Panel {
    Loading,
    Failed(String),
    Empty,
    Ready,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateRequest {
    pub id: DoorId,
    pub draft: Draft,
}

#[derive(Clone, Debug)]
pub struct Editor {
    door_id: Option<DoorId>,
    door: Option<Door>,
    draft: Draft,
    state: RequestState,
    fetched: bool,
    submissions: u64,
}

impl Editor {
    pub fn new(door: Option<Door>, door_id: Option<DoorId>) -> Self {
        let draft = door.as_ref().map(Draft::from).unwrap_or_default();
        Editor {
            door_id,
            door,
            draft,
            state: RequestState::Idle,
            fetched: false,
            submissions: 0,
        }
    }

    pub fn door(&self) -> Option<&Door> {
        self.door.as_ref()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.state == RequestState::Loading
    }

    pub fn is_success(&self) -> bool {
        matches!(self.state, RequestState::Succeeded(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn panel(&self) -> Panel {
        if self.door.is_some() {
            return Panel::Ready;
        }
        match &self.state {
            RequestState::Loading => Panel::Loading,
            RequestState::Failed(message) => Panel::Failed(message.clone()),
            _ => Panel::Empty,
        }
    }

    /// Starts the editor's own read when it was not handed a door. Runs at
    /// most once per editor.
    pub fn begin_fetch(&mut self) -> Option<DoorId> {
        if self.door.is_some() || self.fetched || self.is_loading() {
            return None;
        }
        let id = self.door_id.clone().filter(|id| !id.is_blank())?;
        self.fetched = true;
        self.state = RequestState::Loading;
        Some(id)
    }

    pub fn finish_fetch(&mut self, result: Result<Door, ApiError>) {
        match result {
            Ok(door) => {
                log::debug!("Fetched door {:?}", door);
                self.replace_door(door);
                self.state = RequestState::Idle;
            }
            Err(e) => {
                log::warn!("Fetching door failed: {}", e);
                self.fail(EditorError::from(e));
            }
        }
    }

    pub fn edit(&mut self, edit: DraftEdit) {
        self.draft.apply(edit);
    }

    /// Validates the draft and, if it is fit to send, returns the request.
    /// Validation failures end in [`RequestState::Failed`] without a request.
    /// Ignored while another operation is still loading.
    pub fn begin_submit(&mut self) -> Option<UpdateRequest> {
        if self.is_loading() {
            log::debug!("Submit ignored, a request is already in flight");
            return None;
        }
        self.state = RequestState::Loading;
        match self.validate() {
            Ok(id) => Some(UpdateRequest {
                id,
                draft: self.draft.clone(),
            }),
            Err(e) => {
                log::warn!("Submit rejected: {}", e);
                self.fail(e);
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<Door, ApiError>) -> Option<SuccessTicket> {
        match result {
            Ok(door) => {
                log::info!("Door {} updated", door.id);
                self.replace_door(door);
                self.submissions += 1;
                let ticket = SuccessTicket(self.submissions);
                self.state = RequestState::Succeeded(ticket);
                Some(ticket)
            }
            Err(e) => {
                log::warn!("Updating door failed: {}", e);
                self.fail(EditorError::from(e));
                None
            }
        }
    }

    pub fn expire_success(&mut self, ticket: SuccessTicket) {
        if self.state == RequestState::Succeeded(ticket) {
            self.state = RequestState::Idle;
        }
    }

    fn validate(&self) -> Result<DoorId, EditorError> {
        if !self.draft.has_name() {
            return Err(EditorError::NameRequired);
        }
        self.door_id
            .iter()
            .chain(self.door.as_ref().map(|door| &door.id))
            .find(|id| !id.is_blank())
            .cloned()
            .ok_or(EditorError::MissingId)
    }

    fn replace_door(&mut self, door: Door) {
        self.draft = Draft::from(&door);
        self.door = Some(door);
    }

    fn fail(&mut self, error: EditorError) {
        self.state = RequestState::Failed(error.to_string());
    }
}
