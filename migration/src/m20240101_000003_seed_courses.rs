use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_course_table::Course;

const SEED_COURSES: [(&str, &str); 4] = [
    ("OOPs", "Learn object-oriented programming basics"),
    ("Networks", "Introduction to computer networking"),
    ("Database System", "Core principles of database design"),
    ("Comp Architecture", "Study of computer internal structure"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (title, description) in SEED_COURSES {
            manager
                .exec_stmt(
                    Query::insert()
                        .into_table(Course::Table)
                        .columns([Course::Title, Course::Description])
                        .values_panic([title.into(), description.into()])
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (title, _) in SEED_COURSES {
            manager
                .exec_stmt(
                    Query::delete()
                        .from_table(Course::Table)
                        .and_where(Expr::col(Course::Title).eq(title))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}
