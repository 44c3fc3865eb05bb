use entity::course::{Entity as Course, Model as CourseModel};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;

impl PostgresService {
    /// Unfiltered catalogue scan. Courses come from seed tooling only,
    /// so this stays small.
    pub async fn list_courses(&self) -> Result<Vec<CourseModel>, AppError> {
        Ok(Course::find().all(&self.db).await?)
    }

    pub async fn course_exists(&self, course_id: i32) -> Result<bool, AppError> {
        Ok(Course::find_by_id(course_id).count(&self.db).await? > 0)
    }

    pub async fn count_courses(&self) -> Result<u64, AppError> {
        Ok(Course::find().count(&self.db).await?)
    }
}
