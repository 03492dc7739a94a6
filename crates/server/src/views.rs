//! Server-side HTML views.
//!
//! Templates are compiled into the binary; `.html` names get HTML
//! auto-escaping from minijinja.

use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("crear.html", include_str!("../templates/crear.html")),
    ("detalles.html", include_str!("../templates/detalles.html")),
    ("editar.html", include_str!("../templates/editar.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        env.add_filter("score", format_score);
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

/// Integral scores print without a fractional part: 18, 12.5.
fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;
    use models::record::StudentRecord;

    #[test]
    fn score_filter() {
        assert_eq!(format_score(18.0), "18");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(12.5), "12.5");
    }

    #[test]
    fn every_template_renders() {
        let views = Views::new().unwrap();
        let alumno = StudentRecord { id: 3, name: "Ana Maria".into(), subject: Some("Math".into()), score: Some(18.0) };
        let index = views.render("index.html", context! { datos => vec![alumno.clone()] }).unwrap();
        assert!(index.contains("Ana Maria"));
        assert!(index.contains("/eliminar/3"));
        assert!(views.render("crear.html", context! {}).unwrap().contains("nuevoDato"));
        let detail = views.render("detalles.html", context! { alumno => alumno.clone() }).unwrap();
        assert!(detail.contains("18"));
        let edit = views.render("editar.html", context! { alumno => alumno }).unwrap();
        assert!(edit.contains("value=\"Ana Maria\""));
        assert!(views.render("not_found.html", context! { id => 9 }).unwrap().contains('9'));
    }

    #[test]
    fn student_without_grade_renders_placeholders() {
        let views = Views::new().unwrap();
        let alumno = StudentRecord { id: 1, name: "Juan".into(), subject: None, score: None };
        let html = views.render("detalles.html", context! { alumno => alumno }).unwrap();
        assert!(html.contains("Juan"));
        assert!(!html.contains("none"));
    }
}
