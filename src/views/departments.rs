//! Departments, with inline edit

use super::{
    layout::{action_button, escape, text_input},
    RenderContext,
};
use crate::models::Collection;

pub fn render(ctx: &RenderContext<'_>) -> String {
    let draft = &ctx.drafts.department;
    let (heading, submit, cancel) = match ctx.drafts.editing_department.as_deref() {
        Some(id) => (
            format!("Edit Department #{}", escape(id)),
            "Save Changes",
            r#"<form class="inline" method="post" action="/departments/cancel"><button class="btn" type="submit">Cancel</button></form>"#,
        ),
        None => ("Add Department".to_string(), "Add Department", ""),
    };

    let form = format!(
        r#"<h2>{heading}</h2>
<form method="post" action="/departments">
<div class="form-grid">
{}
<label>Code<input name="code" value="{}" placeholder="IT, HR, FIN" pattern="[A-Z]{{2,4}}" required></label>
{}
{}
{}
{}
</div>
<button class="btn btn-success" type="submit">{submit}</button>
</form>
{cancel}"#,
        text_input("Department Name", "name", &draft.name, "text", true),
        escape(&draft.code),
        text_input("Location", "location", &draft.location, "text", false),
        text_input("Head of Department", "head_of_department", &draft.head_of_department, "text", false),
        text_input("Contact Email", "contact_email", &draft.contact_email, "email", false),
        text_input("Contact Phone", "contact_phone", &draft.contact_phone, "tel", false),
    );

    let departments = &ctx.snapshot.departments;
    let table = if ctx.snapshot.is_loading(Collection::Departments) {
        r#"<div class="loading">Loading departments...</div>"#.to_string()
    } else if departments.is_empty() {
        r#"<div class="loading">No departments yet</div>"#.to_string()
    } else {
        let rows: String = departments
            .iter()
            .map(|d| {
                let id = d.id.to_string();
                let assets = ctx
                    .snapshot
                    .assets
                    .iter()
                    .filter(|a| {
                        a.department
                            .as_deref()
                            .is_some_and(|dep| dep == d.name || dep == d.code)
                    })
                    .count();
                format!(
                    "<tr><td>{}</td><td><code>{}</code></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}{}</td></tr>",
                    escape(&d.name),
                    escape(&d.code),
                    escape(d.location.as_deref().unwrap_or("")),
                    escape(d.head_of_department.as_deref().unwrap_or("")),
                    escape(d.contact_email.as_deref().unwrap_or("")),
                    escape(d.contact_phone.as_deref().unwrap_or("")),
                    assets,
                    action_button(Collection::Departments, "edit", &id, "Edit", ""),
                    action_button(Collection::Departments, "delete", &id, "Delete", "btn-danger"),
                )
            })
            .collect();
        format!(
            r#"<table>
<thead><tr><th>Name</th><th>Code</th><th>Location</th><th>Head</th><th>Email</th><th>Phone</th><th>Assets</th><th></th></tr></thead>
<tbody>{rows}</tbody>
</table>"#
        )
    };

    format!(
        r#"<h1>Departments</h1>
{form}
<h2>All Departments</h2>
<p>
<form class="inline" method="post" action="/refresh/departments"><button class="btn" type="submit">Refresh</button></form>
<a class="btn" href="/export/departments">Export CSV</a>
</p>
{table}"#
    )
}
