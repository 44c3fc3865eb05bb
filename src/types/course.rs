use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct REnrollment {
    pub course_id: i32,
}
