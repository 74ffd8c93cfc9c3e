use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter, sea_query::IntoCondition,
};

/// Generic persistence access for any entity keyed by an `i32` primary key.
///
/// Every call is a single statement committed immediately against the
/// borrowed connection; there is no caching and no retry.
pub struct Repository<'a, E, C: ConnectionTrait> {
    db: &'a C,
    _entity: PhantomData<E>,
}

impl<'a, E, C> Repository<'a, E, C>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    /// Creates a new instance of [`Repository`]
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Inserts a new row and returns it as stored
    pub async fn create<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    pub async fn list_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.db).await
    }

    pub async fn find_all_where<F>(&self, condition: F) -> Result<Vec<E::Model>, DbErr>
    where
        F: IntoCondition,
    {
        E::find().filter(condition).all(self.db).await
    }

    /// Returns the first row matching `condition`, if any
    pub async fn find_one_where<F>(&self, condition: F) -> Result<Option<E::Model>, DbErr>
    where
        F: IntoCondition,
    {
        E::find().filter(condition).one(self.db).await
    }

    /// Writes the changed columns of an existing row
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(self.db).await
    }

    /// Deletes a row by primary key
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        E::delete_by_id(id).exec(self.db).await
    }
}
