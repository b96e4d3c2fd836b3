//! Generic CRUD handler factory
//!
//! [`router`] wires one [`Collection`] and one [`EntityConfig`] into the
//! five standard handlers. Each handler body is a straight line: validate
//! and prepare for writes, one storage call, publicize on the way out — the
//! `?` boundary forwards any failure to the [`ResourceError`] mapper, and
//! side effects only happen after validation has passed.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing, Json, Router,
};

use crate::store::{Collection, Filter};

use super::entity::EntityConfig;
use super::error::ResourceError;

/// Shared state for one resource: the collection and entity configuration
pub struct Resource<C, E> {
    collection: Arc<C>,
    entity: Arc<E>,
}

impl<C, E> Clone for Resource<C, E> {
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
            entity: Arc::clone(&self.entity),
        }
    }
}

/// Build the CRUD router for one entity over one collection
///
/// Routes relative to the mount point:
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET | / | list |
/// | POST | / | create |
/// | GET | /{id} | get |
/// | PUT | /{id} | update |
/// | DELETE | /{id} | remove |
///
/// Nest the result wherever the entity should live:
///
/// ```rust,ignore
/// let app = Router::new().nest("/ideas", resource::router(collection, config));
/// ```
pub fn router<C, E>(collection: C, entity: E) -> Router
where
    C: Collection + 'static,
    E: EntityConfig,
{
    let resource = Resource {
        collection: Arc::new(collection),
        entity: Arc::new(entity),
    };

    Router::new()
        .route("/", routing::get(list::<C, E>).post(create::<C, E>))
        .route(
            "/{id}",
            routing::get(fetch::<C, E>)
                .put(update::<C, E>)
                .delete(remove::<C, E>),
        )
        .with_state(resource)
}

/// GET / — publicize every record, in stored order
async fn list<C, E>(
    State(resource): State<Resource<C, E>>,
) -> Result<Json<Vec<E::Public>>, ResourceError>
where
    C: Collection,
    E: EntityConfig,
{
    let records = resource.collection.list(Filter::all()).await?;
    let views = records
        .into_iter()
        .map(|record| resource.entity.publicize(record))
        .collect();

    Ok(Json(views))
}

/// POST / — validate, prepare, insert, publicize
async fn create<C, E>(
    State(resource): State<Resource<C, E>>,
    Json(input): Json<E::Input>,
) -> Result<Json<E::Public>, ResourceError>
where
    C: Collection,
    E: EntityConfig,
{
    let errors = resource.entity.validate(&input, true);
    if !errors.is_empty() {
        return Err(ResourceError::Validation(errors));
    }

    let fields = resource.entity.prepare(input, true);
    let record = resource.collection.create(fields).await?;

    Ok(Json(resource.entity.publicize(record)))
}

/// GET /{id}
async fn fetch<C, E>(
    State(resource): State<Resource<C, E>>,
    Path(id): Path<String>,
) -> Result<Json<E::Public>, ResourceError>
where
    C: Collection,
    E: EntityConfig,
{
    let record = resource
        .collection
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ResourceError::not_found(resource.entity.name(), &id))?;

    Ok(Json(resource.entity.publicize(record)))
}

/// PUT /{id} — validate, prepare, merge-update, publicize
async fn update<C, E>(
    State(resource): State<Resource<C, E>>,
    Path(id): Path<String>,
    Json(input): Json<E::Input>,
) -> Result<Json<E::Public>, ResourceError>
where
    C: Collection,
    E: EntityConfig,
{
    let errors = resource.entity.validate(&input, false);
    if !errors.is_empty() {
        return Err(ResourceError::Validation(errors));
    }

    let fields = resource.entity.prepare(input, false);
    let record = resource
        .collection
        .update_by_id(&id, fields)
        .await?
        .ok_or_else(|| ResourceError::not_found(resource.entity.name(), &id))?;

    Ok(Json(resource.entity.publicize(record)))
}

/// DELETE /{id} — publicize the just-deleted record
async fn remove<C, E>(
    State(resource): State<Resource<C, E>>,
    Path(id): Path<String>,
) -> Result<Json<E::Public>, ResourceError>
where
    C: Collection,
    E: EntityConfig,
{
    let record = resource
        .collection
        .delete_by_id(&id)
        .await?
        .ok_or_else(|| ResourceError::not_found(resource.entity.name(), &id))?;

    Ok(Json(resource.entity.publicize(record)))
}
