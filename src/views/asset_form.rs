//! New/edit asset form

use super::{
    layout::{escape, select, text_input},
    RenderContext,
};
use crate::models::{
    enums::{ASSET_TYPES, WARRANTY_STATUSES},
    AssetStatus,
};

pub fn render(ctx: &RenderContext<'_>) -> String {
    let draft = &ctx.drafts.asset;
    let editing = ctx.drafts.editing_asset.as_deref();

    let department_labels: Vec<(String, String)> = ctx
        .snapshot
        .departments
        .iter()
        .map(|d| (d.name.clone(), format!("{} ({})", d.name, d.code)))
        .collect();
    let statuses: Vec<&str> = AssetStatus::ALL.iter().map(|s| s.label()).collect();

    let (heading, id_field, submit) = match editing {
        Some(id) => (
            format!("Edit Asset {}", escape(id)),
            format!(
                r#"<label>Asset ID<input name="id" value="{}" readonly></label>"#,
                escape(id)
            ),
            "Save Changes",
        ),
        None => (
            "New Asset".to_string(),
            format!(
                r#"<label>Asset ID<input name="id" value="{}" placeholder="Generated from department code"></label>"#,
                escape(&draft.id)
            ),
            "Create Asset",
        ),
    };

    format!(
        r#"<h1>{heading}</h1>
<form method="post" action="/assets">
<div class="form-grid">
{id_field}
{asset_type}
{brand}
{model}
{serial}
{purchase_date}
{cost}
{warranty}
{status}
{assignee}
{department}
{location}
</div>
<button class="btn btn-success" type="submit">{submit}</button>
<a class="btn" href="/assets">Cancel</a>
</form>"#,
        asset_type = select(
            "Type",
            "type",
            ASSET_TYPES.iter().map(|t| (*t, *t)),
            &draft.asset_type,
            Some("Select type"),
        ),
        brand = text_input("Brand", "brand", &draft.brand, "text", true),
        model = text_input("Model", "model", &draft.model, "text", true),
        serial = text_input("Serial Number", "serial", &draft.serial, "text", true),
        purchase_date = text_input("Purchase Date", "purchase_date", &draft.purchase_date, "date", true),
        cost = text_input("Cost", "cost", &draft.cost, "text", true),
        warranty = select(
            "Warranty Status",
            "warranty_status",
            WARRANTY_STATUSES.iter().map(|w| (*w, *w)),
            &draft.warranty_status,
            Some("Select warranty status"),
        ),
        status = select(
            "Status",
            "status",
            statuses.iter().map(|s| (*s, *s)),
            &draft.status,
            Some("Select status"),
        ),
        assignee = text_input("Assignee", "assignee", &draft.assignee, "text", false),
        department = select(
            "Department",
            "department",
            department_labels.iter().map(|(v, l)| (v.as_str(), l.as_str())),
            &draft.department,
            Some("None"),
        ),
        location = text_input("Location", "location", &draft.location, "text", false),
    )
}
