//! Row action dispatch
//!
//! Buttons in table rows post to `/actions/{collection}/{action}/{id}`. The
//! action name is looked up here instead of being matched in the handler, so
//! each view only has to name the actions it offers.

use std::{collections::HashMap, future::Future, pin::Pin};

use super::View;
use crate::{
    error::{AppError, AppResult},
    forms::{AssetDraft, DepartmentDraft, MaintenanceDraft},
    models::Collection,
    session::Session,
};

/// Completes with the view to switch to, if any
pub type ActionFuture<'a> = Pin<Box<dyn Future<Output = AppResult<Option<View>>> + Send + 'a>>;

pub type ActionHandler = for<'a> fn(&'a Session, Collection, &'a str) -> ActionFuture<'a>;

pub struct ActionTable {
    handlers: HashMap<&'static str, ActionHandler>,
}

impl Default for ActionTable {
    fn default() -> Self {
        let mut handlers: HashMap<&'static str, ActionHandler> = HashMap::new();
        handlers.insert("edit", edit);
        handlers.insert("delete", delete);
        handlers.insert("retire", retire);
        handlers.insert("maintain", maintain);
        Self { handlers }
    }
}

impl ActionTable {
    pub async fn dispatch(
        &self,
        session: &Session,
        action: &str,
        collection: Collection,
        id: &str,
    ) -> AppResult<Option<View>> {
        let handler = self
            .handlers
            .get(action)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown action '{}'", action)))?;
        tracing::debug!("Dispatching {} on {} {}", action, collection, id);
        handler(session, collection, id).await
    }
}

fn assets_only(collection: Collection, action: &str) -> AppResult<()> {
    if collection != Collection::Assets {
        return Err(AppError::BadRequest(format!(
            "Cannot {} a {}",
            action,
            collection.noun()
        )));
    }
    Ok(())
}

fn edit<'a>(session: &'a Session, collection: Collection, id: &'a str) -> ActionFuture<'a> {
    Box::pin(async move {
        let snapshot = session.store.snapshot().await;
        match collection {
            Collection::Assets => {
                let asset = snapshot
                    .asset(id)
                    .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))?;
                let mut drafts = session.drafts.lock().await;
                drafts.asset = AssetDraft::from_asset(asset);
                drafts.editing_asset = Some(id.to_string());
                Ok(Some(View::CreateAsset))
            }
            Collection::Departments => {
                let department = snapshot
                    .department(id)
                    .ok_or_else(|| AppError::NotFound(format!("Department {} not found", id)))?;
                let mut drafts = session.drafts.lock().await;
                drafts.department = DepartmentDraft::from_department(department);
                drafts.editing_department = Some(id.to_string());
                Ok(Some(View::Departments))
            }
            other => Err(AppError::BadRequest(format!(
                "Cannot edit a {}",
                other.noun()
            ))),
        }
    })
}

fn delete<'a>(session: &'a Session, collection: Collection, id: &'a str) -> ActionFuture<'a> {
    Box::pin(async move {
        session.store.delete(collection, id).await?;
        {
            // A record being edited is gone now
            let mut drafts = session.drafts.lock().await;
            if collection == Collection::Assets && drafts.editing_asset.as_deref() == Some(id) {
                drafts.cancel_asset_edit();
            }
            if collection == Collection::Departments
                && drafts.editing_department.as_deref() == Some(id)
            {
                drafts.cancel_department_edit();
            }
        }
        session
            .notify(format!("Deleted {} {}", collection.noun(), id))
            .await;
        Ok(None)
    })
}

fn retire<'a>(session: &'a Session, collection: Collection, id: &'a str) -> ActionFuture<'a> {
    Box::pin(async move {
        assets_only(collection, "retire")?;
        session.store.retire_asset(id).await?;
        session.notify(format!("Asset {} retired", id)).await;
        Ok(None)
    })
}

fn maintain<'a>(session: &'a Session, collection: Collection, id: &'a str) -> ActionFuture<'a> {
    Box::pin(async move {
        assets_only(collection, "maintain")?;
        session.store.begin_maintenance(id).await?;
        session.drafts.lock().await.maintenance = MaintenanceDraft {
            asset_id: id.to_string(),
            ..Default::default()
        };
        session
            .notify(format!("Asset {} is under maintenance; log the work below", id))
            .await;
        Ok(Some(View::Maintenance))
    })
}
