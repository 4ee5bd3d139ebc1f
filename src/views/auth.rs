//! Sign-in and sign-up pages

use super::{
    layout::{select, text_input},
    RenderContext,
};
use crate::models::enums::ACCOUNT_ROLES;

pub fn render_login(ctx: &RenderContext<'_>) -> String {
    let draft = &ctx.drafts.login;
    format!(
        r#"<h1>AssetHub</h1>
<p>Sign in to manage your IT assets.</p>
<form method="post" action="/login">
{}
<label>Password<input type="password" name="password" required></label>
<p><button class="btn btn-success" type="submit">Sign In</button></p>
</form>
<p>No account yet? <a href="/signup">Create one</a></p>"#,
        text_input("Email", "email", &draft.email, "email", true),
    )
}

pub fn render_signup(ctx: &RenderContext<'_>) -> String {
    let draft = &ctx.drafts.signup;
    format!(
        r#"<h1>Create Account</h1>
<form method="post" action="/signup">
{}
{}
{}
<label>Password<input type="password" name="password" minlength="6" required></label>
<p><button class="btn btn-success" type="submit">Sign Up</button></p>
</form>
<p>Already registered? <a href="/login">Sign in</a></p>"#,
        text_input("Company", "company", &draft.company, "text", true),
        select(
            "Role",
            "role",
            ACCOUNT_ROLES.iter().map(|r| (*r, *r)),
            &draft.role,
            None,
        ),
        text_input("Email", "email", &draft.email, "email", true),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        forms::FormDrafts,
        services::{search::InventoryQuery, StoreSnapshot},
        views::{render, View},
    };
    use chrono::NaiveDate;

    #[test]
    fn test_login_keeps_email_but_never_password() {
        let snapshot = StoreSnapshot::default();
        let mut drafts = FormDrafts::default();
        drafts.login.email = "admin@company.com".into();
        drafts.login.password = "hunter22".into();
        let query = InventoryQuery::default();
        let ctx = RenderContext {
            snapshot: &snapshot,
            drafts: &drafts,
            query: &query,
            banner: None,
            profile: None,
            today: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };

        let html = render(View::Login, &ctx);
        assert!(html.contains(r#"value="admin@company.com""#));
        assert!(!html.contains("hunter22"));
        assert!(!html.contains("Sign Out"));
    }
}
