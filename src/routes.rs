use crate::config::RouteConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Edit(String),
    Delete(String),
}

impl Route {
    /// Plain prefix concatenation. The name is not escaped.
    pub fn to_url(&self, routes: &RouteConfig) -> String {
        match self {
            Route::Edit(name) => format!("{}{}", routes.edit_prefix, name),
            Route::Delete(name) => format!("{}{}", routes.delete_prefix, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_default_routes() {
        let routes = RouteConfig::default();
        assert_eq!(Route::Edit("a.md".into()).to_url(&routes), "/edit/a.md");
        assert_eq!(Route::Delete("a.md".into()).to_url(&routes), "/delete/a.md");
        assert_eq!(Route::Edit(String::new()).to_url(&routes), "/edit/");
    }

    #[test]
    fn names_are_passed_through_verbatim() {
        let routes = RouteConfig::default();
        assert_eq!(
            Route::Edit("my notes/q?.md".into()).to_url(&routes),
            "/edit/my notes/q?.md"
        );
    }
}
