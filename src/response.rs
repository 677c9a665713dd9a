//! Response bodies that are not entity rows.

use serde::Serialize;

/// Body returned by the delete endpoints.
#[derive(Serialize)]
pub struct Confirmation {
    pub message: &'static str,
}

pub const BRAND_DELETED: &str = "Car brand deleted";
pub const MODEL_DELETED: &str = "Car model deleted";
