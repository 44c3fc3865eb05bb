//! Inline HTML for the relay's handful of pages. Small enough that a
//! templating engine would be overkill.

use entity::course::Model as CourseModel;

pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn register_page() -> String {
    layout(
        "Register",
        r#"<h1>Register</h1>
<form method="post" action="/register">
  <input name="name" placeholder="Name" required>
  <input name="email" type="email" placeholder="Email" required>
  <button type="submit">Register</button>
</form>
<p><a href="/login">Already registered? Log in</a></p>"#,
    )
}

pub fn login_page(error: Option<&str>) -> String {
    let banner = match error {
        Some(e) => format!("<p style=\"color:red\">{}</p>\n", escape(e)),
        None => String::new(),
    };
    layout(
        "Login",
        &format!(
            r#"<h1>Login</h1>
{banner}<form method="post" action="/login">
  <input name="name" placeholder="Name" required>
  <input name="email" type="email" placeholder="Email" required>
  <button type="submit">Login</button>
</form>
<p><a href="/register">New here? Register</a></p>"#
        ),
    )
}

pub fn dashboard_page(courses: &[CourseModel]) -> String {
    let body = if courses.is_empty() {
        "<p>You are not enrolled in any course. <a href=\"/courses\">Browse courses</a></p>".to_string()
    } else {
        let rows: String = courses.iter().map(enrolled_row).collect();
        format!("<ul>\n{rows}</ul>")
    };
    layout(
        "Dashboard",
        &format!(
            r#"<h1>My Courses</h1>
{body}
<p><a href="/courses">All courses</a> | <a href="/logout">Log out</a></p>"#
        ),
    )
}

pub fn courses_page(courses: &[CourseModel]) -> String {
    let rows: String = courses.iter().map(catalogue_row).collect();
    layout(
        "Courses",
        &format!(
            r#"<h1>Courses</h1>
<ul>
{rows}</ul>
<p><a href="/dashboard">Dashboard</a> | <a href="/logout">Log out</a></p>"#
        ),
    )
}

fn enrolled_row(course: &CourseModel) -> String {
    format!(
        "<li>{} &mdash; {}\n<form method=\"post\" action=\"/unenroll\"><input type=\"hidden\" name=\"course_id\" value=\"{}\"><button type=\"submit\">Unenroll</button></form></li>\n",
        escape(&course.title),
        escape(course.description.as_deref().unwrap_or("")),
        course.id
    )
}

fn catalogue_row(course: &CourseModel) -> String {
    format!(
        "<li>{} &mdash; {}\n<form method=\"post\" action=\"/enroll\"><input type=\"hidden\" name=\"course_id\" value=\"{}\"><button type=\"submit\">Enroll</button></form></li>\n",
        escape(&course.title),
        escape(course.description.as_deref().unwrap_or("")),
        course.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>"a&b"</script>"#),
            "&lt;script&gt;&quot;a&amp;b&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn course_titles_are_escaped() {
        let course = CourseModel {
            id: 1,
            title: "<b>OOPs</b>".to_string(),
            description: None,
        };
        let page = courses_page(std::slice::from_ref(&course));
        assert!(page.contains("&lt;b&gt;OOPs&lt;/b&gt;"));
        assert!(!page.contains("<b>OOPs</b>"));
    }
}
