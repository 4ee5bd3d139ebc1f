//! Asset inventory with search, filters, row actions, and assignment

use super::{
    layout::{action_button, escape, select, text_input},
    RenderContext,
};
use crate::{
    models::{enums::ASSET_TYPES, Asset, AssetStatus, Collection},
    services::search::filter_assets,
};

pub fn render(ctx: &RenderContext<'_>) -> String {
    if ctx.snapshot.is_loading(Collection::Assets) {
        return r#"<h1>Asset Inventory</h1><div class="loading">Loading assets...</div>"#.to_string();
    }

    let query = ctx.query;
    let statuses: Vec<&str> = AssetStatus::ALL.iter().map(|s| s.label()).collect();
    let filters = format!(
        r#"<form method="get" action="/assets" class="form-grid">
<label>Search<input type="search" name="search" placeholder="Search assets..." value="{}"></label>
{}
{}
<div><button class="btn" type="submit">Filter</button></div>
</form>"#,
        escape(&query.search),
        select("Type", "type", ASSET_TYPES.iter().map(|t| (*t, *t)), &query.asset_type, Some("All Types")),
        select("Status", "status", statuses.iter().map(|s| (*s, *s)), &query.status, Some("All Status")),
    );

    let assets = filter_assets(&ctx.snapshot.assets, query);
    let table = if assets.is_empty() {
        r#"<div class="loading">No assets found</div>"#.to_string()
    } else {
        let rows: String = assets.iter().copied().map(row).collect();
        format!(
            r#"<table>
<thead><tr><th>Asset ID</th><th>Type</th><th>Brand</th><th>Model</th><th>Serial</th><th>Status</th><th>Assignee</th><th>Department</th><th>Actions</th></tr></thead>
<tbody>{rows}</tbody>
</table>"#
        )
    };

    format!(
        r#"<h1>Asset Inventory</h1>
<p>
<form class="inline" method="post" action="/refresh/assets"><button class="btn" type="submit">Refresh</button></form>
<a class="btn btn-success" href="/assets/new">New Asset</a>
<a class="btn" href="/export/assets">Export CSV</a>
</p>
{filters}
<p>Showing {shown} of {total} assets</p>
{table}
{assign}
{users}"#,
        shown = assets.len(),
        total = ctx.snapshot.assets.len(),
        assign = assignment_section(ctx),
        users = users_section(ctx),
    )
}

fn row(asset: &Asset) -> String {
    let mut actions = action_button(Collection::Assets, "edit", &asset.id, "Edit", "");
    if !matches!(asset.status, AssetStatus::Retired | AssetStatus::UnderMaintenance) {
        actions.push_str(&action_button(Collection::Assets, "maintain", &asset.id, "Maintain", "btn-warning"));
    }
    if asset.status != AssetStatus::Retired {
        actions.push_str(&action_button(Collection::Assets, "retire", &asset.id, "Retire", "btn-warning"));
    }
    actions.push_str(&action_button(Collection::Assets, "delete", &asset.id, "Delete", "btn-danger"));

    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape(&asset.id),
        escape(&asset.asset_type),
        escape(&asset.brand),
        escape(&asset.model),
        escape(&asset.serial),
        asset.status.label(),
        escape(asset.assignee.as_deref().unwrap_or("Unassigned")),
        escape(asset.department.as_deref().unwrap_or("")),
        actions
    )
}

fn assignment_section(ctx: &RenderContext<'_>) -> String {
    let draft = &ctx.drafts.assignment;
    let assignable: Vec<(&str, &str)> = ctx
        .snapshot
        .assets
        .iter()
        .filter(|a| a.status != AssetStatus::Retired)
        .map(|a| (a.id.as_str(), a.id.as_str()))
        .collect();
    let people: String = ctx
        .snapshot
        .users
        .iter()
        .map(|u| format!(r#"<option value="{}">"#, escape(&u.name)))
        .collect();
    let places: String = ctx
        .snapshot
        .locations
        .iter()
        .map(|l| format!(r#"<option value="{}">"#, escape(l)))
        .collect();
    let history: String = ctx
        .snapshot
        .assignments
        .iter()
        .rev()
        .map(|a| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&a.asset_id),
                escape(&a.assignee),
                escape(a.location.as_deref().unwrap_or("")),
                escape(&a.date)
            )
        })
        .collect();

    format!(
        r#"<h2>Assign Asset</h2>
<form method="post" action="/assignments" class="form-grid">
{}
<label>Assignee<input name="assignee" list="people" value="{}" required></label>
<label>Location<input name="location" list="places" value="{}"></label>
<div><button class="btn btn-success" type="submit">Assign</button></div>
</form>
<datalist id="people">{people}</datalist>
<datalist id="places">{places}</datalist>
<table><thead><tr><th>Asset</th><th>Assignee</th><th>Location</th><th>Date</th></tr></thead><tbody>{history}</tbody></table>"#,
        select("Asset", "asset_id", assignable, &draft.asset_id, Some("Select asset")),
        escape(&draft.assignee),
        escape(&draft.location),
    )
}

fn users_section(ctx: &RenderContext<'_>) -> String {
    let draft = &ctx.drafts.user;
    let departments: Vec<(&str, &str)> = ctx
        .snapshot
        .departments
        .iter()
        .map(|d| (d.name.as_str(), d.name.as_str()))
        .collect();
    let users: String = ctx
        .snapshot
        .users
        .iter()
        .map(|u| {
            format!(
                "<li>{} <small>{}</small></li>",
                escape(&u.name),
                escape(u.department.as_deref().unwrap_or(""))
            )
        })
        .collect();

    format!(
        r#"<h2>Users</h2>
<form method="post" action="/users" class="form-grid">
{}
{}
<div><button class="btn btn-success" type="submit">Add User</button></div>
</form>
<ul>{users}</ul>"#,
        text_input("Name", "name", &draft.name, "text", true),
        select("Department", "department", departments, &draft.department, Some("None")),
    )
}
