//! Composite reads: a parent entity merged with its child rows.
//!
//! Parents are fetched once and children are fetched per parent, each as its
//! own statement. A composite therefore has no snapshot guarantee across the
//! parent and child reads, and any failing child fetch fails the whole read.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use showcase_core::types::DbId;

use crate::executor::{Db, QueryError};
use crate::repositories::Repo;
use crate::resource::Resource;

/// A one-to-many relationship expressed by a foreign key on the child table.
pub trait Relation: Send + Sync + 'static {
    type Parent: Resource;
    type Child: Resource;
    /// Column on the child table holding the parent id.
    const FOREIGN_KEY: &'static str;
    /// Key under which children appear in the serialized composite.
    const FIELD: &'static str;
}

/// A parent with its children, serialized as the parent's own fields plus
/// `Rel::FIELD: [...]`. The child list is empty, never absent, when the
/// parent has no children.
pub struct Composite<Rel: Relation> {
    pub parent: Rel::Parent,
    pub children: Vec<Rel::Child>,
}

impl<Rel: Relation> Serialize for Composite<Rel> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut value = serde_json::to_value(&self.parent).map_err(S::Error::custom)?;
        let children = serde_json::to_value(&self.children).map_err(S::Error::custom)?;
        let Some(fields) = value.as_object_mut() else {
            return Err(S::Error::custom(format!(
                "{} must serialize as an object",
                <Rel::Parent as Resource>::NAME
            )));
        };
        fields.insert(Rel::FIELD.to_string(), children);
        value.serialize(serializer)
    }
}

/// Children of one parent, in the child's display order.
pub async fn children_of<Rel: Relation>(
    db: &Db,
    parent_id: DbId,
) -> Result<Vec<Rel::Child>, QueryError> {
    Repo::<Rel::Child>::list_by(db, Rel::FOREIGN_KEY, parent_id).await
}

/// One parent by id with its children, or `None` if the parent is absent.
pub async fn load_one<Rel: Relation>(
    db: &Db,
    id: DbId,
) -> Result<Option<Composite<Rel>>, QueryError> {
    let Some(parent) = Repo::<Rel::Parent>::find_by_id(db, id).await? else {
        return Ok(None);
    };
    let children = children_of::<Rel>(db, id).await?;
    Ok(Some(Composite { parent, children }))
}

/// Every parent with its children, in the parent's display order.
pub async fn load_all<Rel: Relation>(db: &Db) -> Result<Vec<Composite<Rel>>, QueryError> {
    let parents = Repo::<Rel::Parent>::list(db).await?;
    let mut composites = Vec::with_capacity(parents.len());
    for parent in parents {
        let children = children_of::<Rel>(db, parent.id()).await?;
        composites.push(Composite { parent, children });
    }
    Ok(composites)
}
