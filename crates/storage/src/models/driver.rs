use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{Division, DriverStatus};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Driver {
    pub driver_id: String,
    pub name: String,
    pub aliases: Vec<String>,
    /// Current division. Past rounds resolve through the division change history.
    pub division: Division,
    pub status: DriverStatus,
    pub created_at: chrono::NaiveDateTime,
}
