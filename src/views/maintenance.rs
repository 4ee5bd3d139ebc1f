//! Maintenance log

use super::{
    layout::{action_button, escape, money, select, text_input},
    RenderContext,
};
use crate::{models::Collection, services::stats};

pub fn render(ctx: &RenderContext<'_>) -> String {
    let draft = &ctx.drafts.maintenance;
    let assets: Vec<(String, String)> = ctx
        .snapshot
        .assets
        .iter()
        .map(|a| (a.id.clone(), format!("{} - {} {}", a.id, a.brand, a.model)))
        .collect();

    let form = format!(
        r#"<form method="post" action="/maintenance">
<div class="form-grid">
{}
{}
{}
{}
{}
<label>Notes<textarea name="notes">{}</textarea></label>
</div>
<button class="btn btn-success" type="submit">Log Maintenance</button>
</form>"#,
        select(
            "Asset",
            "asset_id",
            assets.iter().map(|(v, l)| (v.as_str(), l.as_str())),
            &draft.asset_id,
            Some("Select asset"),
        ),
        text_input("Activity", "activity", &draft.activity, "text", true),
        text_input("Date", "date", &draft.date, "date", false),
        text_input("Cost", "cost", &draft.cost, "text", false),
        text_input("Technician", "technician", &draft.technician, "text", false),
        escape(&draft.notes),
    );

    let records = &ctx.snapshot.maintenance;
    let table = if ctx.snapshot.is_loading(Collection::Maintenance) {
        r#"<div class="loading">Loading maintenance records...</div>"#.to_string()
    } else if records.is_empty() {
        r#"<div class="loading">No maintenance records yet</div>"#.to_string()
    } else {
        let rows: String = records
            .iter()
            .map(|r| {
                let id = r.id.to_string();
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&r.asset_id),
                    escape(&r.activity),
                    escape(r.date.as_deref().unwrap_or("")),
                    money(r.cost),
                    escape(r.technician.as_deref().unwrap_or("")),
                    escape(r.notes.as_deref().unwrap_or("")),
                    action_button(Collection::Maintenance, "delete", &id, "Delete", "btn-danger"),
                )
            })
            .collect();
        format!(
            r#"<table>
<thead><tr><th>Asset</th><th>Activity</th><th>Date</th><th>Cost</th><th>Technician</th><th>Notes</th><th></th></tr></thead>
<tbody>{rows}</tbody>
</table>"#
        )
    };

    format!(
        r#"<h1>Maintenance</h1>
{form}
<h2>History</h2>
<p>
<form class="inline" method="post" action="/refresh/maintenance"><button class="btn" type="submit">Refresh</button></form>
<a class="btn" href="/export/maintenance">Export CSV</a>
Upcoming: {upcoming} &middot; Total spend: {spend}
</p>
{table}"#,
        upcoming = stats::upcoming_maintenance(records, ctx.today),
        spend = money(stats::total_maintenance_cost(records)),
    )
}
