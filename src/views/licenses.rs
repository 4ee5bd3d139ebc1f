//! Software licenses

use super::{
    layout::{action_button, escape, money, select, text_input},
    RenderContext,
};
use crate::{
    models::{Collection, LicenseStatus},
    services::stats,
};

pub fn render(ctx: &RenderContext<'_>) -> String {
    let draft = &ctx.drafts.license;
    let statuses: Vec<&str> = LicenseStatus::ALL.iter().map(|s| s.label()).collect();
    let departments: Vec<(&str, &str)> = ctx
        .snapshot
        .departments
        .iter()
        .map(|d| (d.name.as_str(), d.name.as_str()))
        .collect();

    let form = format!(
        r#"<form method="post" action="/licenses">
<div class="form-grid">
{}
{}
{}
{}
{}
{}
{}
{}
{}
</div>
<button class="btn btn-success" type="submit">Add License</button>
</form>"#,
        text_input("Software Name", "name", &draft.name, "text", true),
        text_input("Vendor", "vendor", &draft.vendor, "text", true),
        text_input("License Key", "license_key", &draft.license_key, "text", true),
        text_input("Purchase Date", "purchase_date", &draft.purchase_date, "date", true),
        text_input("Expiry Date", "expiry_date", &draft.expiry_date, "date", true),
        text_input("Cost", "cost", &draft.cost, "text", false),
        text_input("Assigned To", "assigned_to", &draft.assigned_to, "text", false),
        select("Department", "department", departments, &draft.department, Some("None")),
        select("Status", "status", statuses.iter().map(|s| (*s, *s)), &draft.status, None),
    );

    let licenses = &ctx.snapshot.licenses;
    let today = ctx.today.format("%Y-%m-%d").to_string();
    let table = if ctx.snapshot.is_loading(Collection::Licenses) {
        r#"<div class="loading">Loading licenses...</div>"#.to_string()
    } else if licenses.is_empty() {
        r#"<div class="loading">No licenses tracked yet</div>"#.to_string()
    } else {
        let rows: String = licenses
            .iter()
            .map(|l| {
                let id = l.id.to_string();
                let expiry = if l.expiry_date.as_str() < today.as_str() {
                    format!("<strong>{}</strong>", escape(&l.expiry_date))
                } else {
                    escape(&l.expiry_date)
                };
                format!(
                    "<tr><td>{}</td><td>{}</td><td><code>{}</code></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&l.name),
                    escape(&l.vendor),
                    escape(&l.license_key),
                    escape(&l.purchase_date),
                    expiry,
                    money(l.cost),
                    escape(l.assigned_to.as_deref().unwrap_or("")),
                    l.status,
                    action_button(Collection::Licenses, "delete", &id, "Delete", "btn-danger"),
                )
            })
            .collect();
        format!(
            r#"<table>
<thead><tr><th>Software</th><th>Vendor</th><th>Key</th><th>Purchased</th><th>Expires</th><th>Cost</th><th>Assigned To</th><th>Status</th><th></th></tr></thead>
<tbody>{rows}</tbody>
</table>"#
        )
    };

    format!(
        r#"<h1>Software Licenses</h1>
{form}
<h2>Licenses</h2>
<p>
<form class="inline" method="post" action="/refresh/licenses"><button class="btn" type="submit">Refresh</button></form>
<a class="btn" href="/export/licenses">Export CSV</a>
Expired: {expired} &middot; Total spend: {spend}
</p>
{table}"#,
        expired = stats::expired_licenses(licenses, ctx.today),
        spend = money(stats::total_license_cost(licenses)),
    )
}
