//! Page chrome and small HTML helpers

use axum::http::StatusCode;

use super::{RenderContext, View};
use crate::{client::path_segment, models::Collection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// One-shot notice shown above the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
    body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; background: #f4f6f9; color: #212529; }
    .sidebar { position: fixed; top: 0; bottom: 0; width: 220px; background: #1f2937; padding: 20px 0; }
    .sidebar h2 { color: #fff; margin: 0 20px 24px; }
    .sidebar a, .sidebar button { display: block; width: 100%; text-align: left; padding: 10px 20px; color: #cbd5e1; text-decoration: none; background: none; border: 0; font: inherit; cursor: pointer; }
    .sidebar a.active { background: #4361ee; color: #fff; }
    main { margin-left: 220px; padding: 24px; }
    main.public { margin: 80px auto; max-width: 420px; }
    .banner { padding: 12px 16px; border-radius: 4px; margin-bottom: 16px; display: flex; justify-content: space-between; }
    .banner.success { background: #d4edda; color: #155724; }
    .banner.error { background: #f8d7da; color: #721c24; }
    .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; margin-bottom: 24px; }
    .stat-card { background: #fff; border-radius: 6px; padding: 16px; }
    .stat-number { font-size: 28px; font-weight: bold; }
    table { width: 100%; border-collapse: collapse; background: #fff; }
    th, td { padding: 8px 10px; border-bottom: 1px solid #e5e7eb; text-align: left; }
    form.inline { display: inline; }
    .btn { padding: 6px 12px; border: 0; border-radius: 4px; background: #6c757d; color: #fff; cursor: pointer; text-decoration: none; }
    .btn-success { background: #28a745; }
    .btn-danger { background: #dc3545; }
    .btn-warning { background: #ffc107; color: #212529; }
    .form-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 12px; margin-bottom: 16px; }
    label { display: flex; flex-direction: column; font-size: 14px; gap: 4px; }
    input, select, textarea { padding: 8px 10px; border: 1px solid #ddd; border-radius: 4px; }
    .loading { padding: 40px; text-align: center; color: #6c757d; }
"#;

/// Wrap a view body in the document, sidebar, and banner
pub fn page(view: View, ctx: &RenderContext<'_>, body: &str) -> String {
    let banner = ctx.banner.map(render_banner).unwrap_or_default();
    let (sidebar, main_class) = if view.requires_auth() {
        (sidebar(view, ctx), "")
    } else {
        (String::new(), " class=\"public\"")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | AssetHub</title>
<style>{STYLE}</style>
</head>
<body>
{sidebar}
<main{main_class}>
{banner}
{body}
</main>
</body>
</html>"#,
        title = view.title(),
    )
}

fn sidebar(current: View, ctx: &RenderContext<'_>) -> String {
    let links: String = View::NAV
        .iter()
        .map(|view| {
            let class = if *view == current { " class=\"active\"" } else { "" };
            format!(
                r#"<a href="{}"{} >{}</a>"#,
                view.path(),
                class,
                view.title()
            )
        })
        .collect();
    let account = ctx
        .profile
        .map(|p| format!(r#"<p style="color:#94a3b8;margin:24px 20px 0">{}</p>"#, escape(&p.email)))
        .unwrap_or_default();

    format!(
        r#"<nav class="sidebar">
<h2>AssetHub</h2>
{links}
<form method="post" action="/logout"><button type="submit">Sign Out</button></form>
{account}
</nav>"#
    )
}

fn render_banner(banner: &Banner) -> String {
    let class = match banner.kind {
        BannerKind::Success => "success",
        BannerKind::Error => "error",
    };
    format!(
        r#"<div class="banner {class}" role="alert"><span>{}</span><a href="" aria-label="Dismiss">&times;</a></div>"#,
        escape(&banner.text)
    )
}

/// Standalone page for failures that have no view to land on
pub fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Request failed | AssetHub</title><style>{STYLE}</style></head>
<body>
<main class="public">
<h1>Request failed</h1>
<p><strong>{}</strong></p>
<p>{}</p>
<p><a class="btn" href="/">Back to AssetHub</a></p>
</main>
</body>
</html>"#,
        status,
        escape(message)
    )
}

pub fn text_input(label: &str, name: &str, value: &str, kind: &str, required: bool) -> String {
    format!(
        r#"<label>{label}<input type="{kind}" name="{name}" value="{}"{}></label>"#,
        escape(value),
        if required { " required" } else { "" }
    )
}

/// `<select>` with a leading empty choice when `placeholder` is given
pub fn select<'a, I>(label: &str, name: &str, options: I, selected: &str, placeholder: Option<&str>) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut html = format!(r#"<label>{label}<select name="{name}">"#);
    if let Some(placeholder) = placeholder {
        html.push_str(&format!(r#"<option value="">{}</option>"#, escape(placeholder)));
    }
    for (value, text) in options {
        let attr = if value == selected { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{}"{attr}>{}</option>"#,
            escape(value),
            escape(text)
        ));
    }
    html.push_str("</select></label>");
    html
}

/// Row button posting to the action table
pub fn action_button(collection: Collection, action: &str, id: &str, label: &str, class: &str) -> String {
    format!(
        r#"<form class="inline" method="post" action="/actions/{}/{}/{}"><button class="btn {class}" type="submit">{label}</button></form>"#,
        collection.slug(),
        action,
        path_segment(id)
    )
}

pub fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_select_marks_selected_option() {
        let html = select("Status", "status", [("A", "A"), ("B", "B")], "B", Some("All"));
        assert!(html.contains(r#"<option value="">All</option>"#));
        assert!(html.contains(r#"<option value="B" selected>B</option>"#));
        assert!(!html.contains(r#"<option value="A" selected>"#));
    }

    #[test]
    fn test_action_button_keeps_id_in_one_segment() {
        let html = action_button(Collection::Assets, "delete", "LAB#7", "Delete", "danger");
        assert!(html.contains(r#"action="/actions/assets/delete/LAB%237""#));

        let html = action_button(Collection::Departments, "edit", "a/b?c", "Edit", "");
        assert!(html.contains(r#"action="/actions/departments/edit/a%2Fb%3Fc""#));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = error_page(StatusCode::BAD_GATEWAY, "<boom>");
        assert!(html.contains("502 Bad Gateway"));
        assert!(html.contains("&lt;boom&gt;"));
    }
}
