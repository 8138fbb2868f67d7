use serde::Serialize;

/// Single-field JSON payload, e.g. `{"message":"..."}`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub message: &'static str,
}
