//! `unit/` endpoint.

use pantry_core::entities::Unit;
use pantry_core::units::Units;

use crate::http::read_json;
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// The unit catalog, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn fetch_units(&self) -> Result<Units, ApiError> {
        let units: Vec<Unit> = read_json(self.get("unit/").send().await?).await?;
        Ok(Units::new(units))
    }
}
