use entity::course::{Entity as Course, Model as CourseModel};
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, NotSet, PaginatorTrait, QueryFilter, Set,
    TransactionTrait, Value,
};

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    /// Login lookup: name and email must both match.
    pub async fn find_user_by_credentials(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Name.eq(name))
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    /// Signup: create user, unenrolled.
    pub async fn register_user(&self, name: String, email: String) -> Result<i32, AppError> {
        if self.user_exists_by_email(&email).await? {
            return Err(AppError::AlreadyExists);
        }
        let txn = self.db.begin().await?;

        let res = User::insert(UserActive {
            id: NotSet,
            name: Set(name),
            email: Set(email),
            course_id: Set(None),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;
        Ok(res.last_insert_id)
    }

    /// The 0-or-1 courses the user is currently enrolled in.
    pub async fn enrolled_courses(&self, user_id: i32) -> Result<Vec<CourseModel>, AppError> {
        let Some(user) = User::find_by_id(user_id).one(&self.db).await? else {
            return Ok(Vec::new());
        };
        match user.course_id {
            Some(course_id) => Ok(Course::find_by_id(course_id)
                .one(&self.db)
                .await?
                .into_iter()
                .collect()),
            None => Ok(Vec::new()),
        }
    }

    /// Point the user at `course_id`, replacing any other enrollment. The
    /// precondition lives in the WHERE clause so concurrent requests cannot
    /// race between check and write.
    pub async fn enroll_user(&self, user_id: i32, course_id: i32) -> Result<(), AppError> {
        if !self.course_exists(course_id).await? {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        let res = User::update_many()
            .col_expr(entity::user::Column::CourseId, Expr::value(course_id))
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(
                Condition::any()
                    .add(entity::user::Column::CourseId.is_null())
                    .add(entity::user::Column::CourseId.ne(course_id)),
            )
            .exec(&self.db)
            .await?;

        if res.rows_affected == 0 {
            // Zero rows: the caller already holds exactly this enrollment,
            // or their row is gone and the cookie is stale.
            return match User::find_by_id(user_id).one(&self.db).await? {
                Some(_) => Err(AppError::Conflict(
                    "Already enrolled in this course".to_string(),
                )),
                None => Err(AppError::Unauthenticated),
            };
        }
        Ok(())
    }

    /// Clear the enrollment, but only if it currently names `course_id`.
    pub async fn unenroll_user(&self, user_id: i32, course_id: i32) -> Result<(), AppError> {
        let res = User::update_many()
            .col_expr(entity::user::Column::CourseId, Expr::value(Value::Int(None)))
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::CourseId.eq(course_id))
            .exec(&self.db)
            .await?;

        if res.rows_affected == 0 {
            return Err(AppError::NotFound(
                "You are not enrolled in this course".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn count_users(&self) -> Result<u64, AppError> {
        Ok(User::find().count(&self.db).await?)
    }
}
