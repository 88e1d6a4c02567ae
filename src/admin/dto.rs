use serde::{Deserialize, Serialize};

pub const RESET_MESSAGE: &str = "System reset successful";

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ResetDto {
    pub message: String,
}

impl ResetDto {
    pub fn new() -> Self {
        Self {
            message: RESET_MESSAGE.to_string(),
        }
    }
}

impl Default for ResetDto {
    fn default() -> Self {
        Self::new()
    }
}
