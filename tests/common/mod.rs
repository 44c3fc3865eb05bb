use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

use course_registry::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use course_registry::types::user::RUserRegister;

    pub fn sample_user() -> RUserRegister {
        RUserRegister {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    pub fn sample_user_with_email(email: &str) -> RUserRegister {
        RUserRegister {
            name: "Test User".to_string(),
            email: email.to_string(),
        }
    }
}
