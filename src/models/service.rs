//! Service catalog model.

use serde::{Deserialize, Serialize};

/// A service offered on the public booking form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
}
