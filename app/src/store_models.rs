use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// Identifier of a door as handed out by the API. Kept opaque: the server may
/// send either a number or a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DoorId {
    Number(u64),
    Text(String),
}

impl DoorId {
    pub fn is_blank(&self) -> bool {
        match self {
            DoorId::Number(_) => false,
            DoorId::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoorId::Number(id) => write!(f, "{}", id),
            DoorId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<&str> for DoorId {
    fn from(id: &str) -> Self {
        DoorId::Text(id.to_string())
    }
}

impl From<u64> for DoorId {
    fn from(id: u64) -> Self {
        DoorId::Number(id)
    }
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DoorStatus {
    Open,
    #[default]
    Closed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub id: DoorId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: DoorStatus,
}

/// Unsaved edits of a door. Doubles as the PUT body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub status: DoorStatus,
}

/// A single field change coming from the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftEdit {
    Name(String),
    Status(DoorStatus),
}

impl Draft {
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Name(name) => self.name = name,
            DraftEdit::Status(status) => self.status = status,
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl From<&Door> for Draft {
    fn from(door: &Door) -> Self {
        Draft {
            name: door.name.clone(),
            status: door.status,
        }
    }
}
