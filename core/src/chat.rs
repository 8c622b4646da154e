//! Wire types of the room chat service.
use serde::{Deserialize, Serialize};

/// Question about the patient in a room.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ChatRequest {
    pub room_number: String,
    pub message: String,
}

impl ChatRequest {
    pub fn new(room_number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            room_number: room_number.into(),
            message: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
#[path = "./chat_test.rs"]
mod chat_test;
