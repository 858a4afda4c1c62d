use askama::Template;
use askama_web::WebTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "navigation.html")]
pub struct NavigationTemplate {
    pub navigation: String,
    pub waypoint_count: usize,
}
