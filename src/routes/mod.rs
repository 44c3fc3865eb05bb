use actix_web::web;

pub mod courses;
pub mod enroll;
pub mod health;
pub mod login;
pub mod my_courses;
pub mod register;
pub mod status;
pub mod unenroll;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register::register)
        .service(login::login)
        .service(my_courses::my_courses)
        .service(courses::courses)
        .service(enroll::enroll)
        .service(unenroll::unenroll)
        .service(status::status)
        .service(health::health);
}
