use serde::Serialize;

use crate::domain::models::class::Class;
use crate::domain::services::capacity::Occupancy;

#[derive(Serialize)]
pub struct ClassWithOccupancy {
    #[serde(flatten)]
    pub class: Class,
    pub occupancy: Occupancy,
}
