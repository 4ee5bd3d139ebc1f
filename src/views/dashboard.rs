//! Dashboard: headline counts and costs

use super::{
    layout::{escape, money},
    RenderContext, View,
};
use crate::services::stats;

pub fn render(ctx: &RenderContext<'_>) -> String {
    let summary = stats::summarize(ctx.snapshot, ctx.today);

    let mut cards = vec![(
        "Total Assets".to_string(),
        summary.total_assets.to_string(),
        View::Inventory,
    )];
    for (status, count) in &summary.assets_by_status {
        cards.push((status.clone(), count.to_string(), View::Inventory));
    }
    cards.extend([
        ("Asset Value".to_string(), money(summary.total_asset_cost), View::Inventory),
        (
            "Maintenance Spend".to_string(),
            money(summary.total_maintenance_cost),
            View::Maintenance,
        ),
        (
            "Upcoming Maintenance".to_string(),
            summary.upcoming_maintenance.to_string(),
            View::Maintenance,
        ),
        ("Licenses".to_string(), summary.total_licenses.to_string(), View::Licenses),
        ("License Spend".to_string(), money(summary.total_license_cost), View::Licenses),
        (
            "Expired Licenses".to_string(),
            summary.expired_licenses.to_string(),
            View::Licenses,
        ),
    ]);

    let cards: String = cards
        .iter()
        .map(|(title, value, target)| {
            format!(
                r#"<div class="stat-card"><h3>{}</h3><div class="stat-number">{}</div><a href="{}">More info &rarr;</a></div>"#,
                escape(title),
                escape(value),
                target.path()
            )
        })
        .collect();

    let intro = if summary.total_assets == 0 {
        r#"<p>No assets yet. Get started by adding your first one.</p>
<p><a class="btn btn-success" href="/assets/new">New Asset</a></p>"#
            .to_string()
    } else {
        format!(
            r#"<p>You have {} assets in your inventory.</p>
<p><a class="btn btn-success" href="/assets/new">New Asset</a> <a class="btn" href="/assets">View All Assets</a></p>"#,
            summary.total_assets
        )
    };

    let activity: String = ctx
        .snapshot
        .activity
        .iter()
        .take(10)
        .map(|entry| {
            format!(
                "<li>{} <small>{}</small></li>",
                escape(&entry.text),
                entry.date.format("%Y-%m-%d %H:%M")
            )
        })
        .collect();
    let activity = if activity.is_empty() {
        "<p>No recent activity.</p>".to_string()
    } else {
        format!("<ul>{activity}</ul>")
    };

    format!(
        r#"<h1>Dashboard</h1>
<div class="stats">{cards}</div>
{intro}
<h2>Recent Activity</h2>
{activity}"#
    )
}
