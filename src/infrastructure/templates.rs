// HTML rendering with embedded minijinja templates
use anyhow::Context;
use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: [(&str, &str); 4] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
    ("auth_control.html", include_str!("../../templates/auth_control.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
];

/// Template environment shared by all requests.
/// Templates ending in `.html` are auto-escaped.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> anyhow::Result<Self> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .with_context(|| format!("Invalid template {name}"))?;
        }
        Ok(Self { env })
    }

    pub fn render<C: Serialize>(&self, name: &str, ctx: C) -> anyhow::Result<String> {
        let template = self.env.get_template(name)?;
        template
            .render(ctx)
            .with_context(|| format!("Failed to render {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_not_found_page() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render("not_found.html", context! { theme => "light" })
            .unwrap();
        assert!(html.contains("404"));
        assert!(html.contains("<title>Conversation Dashboard</title>"));
    }

    #[test]
    fn test_auth_control_escapes_user_name() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer
            .render(
                "auth_control.html",
                context! {
                    user_name => "<script>",
                    signed_in => true,
                    return_to => "",
                    theme => "light",
                },
            )
            .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Sign out"));
    }

    #[test]
    fn test_unknown_template() {
        let renderer = PageRenderer::new().unwrap();
        assert!(renderer.render("missing.html", ()).is_err());
    }
}
