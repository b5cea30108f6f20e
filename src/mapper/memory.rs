use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::autofill::{MapperOperation, Statement};
use crate::mapper::{Mapper, MapperError};

/// Entities stored by primary key
pub trait Keyed {
    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: i64);
}

/// In-process table standing in for the real persistence layer.
/// Inserts assign ids, updates replace the stored row, deletes remove it.
pub struct InMemoryMapper<E> {
    table: &'static str,
    rows: RwLock<HashMap<i64, E>>,
    next_id: AtomicI64,
}

impl<E> InMemoryMapper<E>
where
    E: Keyed + Clone + Send + Sync,
{
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub async fn find_by_id(&self, id: i64) -> Option<E> {
        self.rows.read().await.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }

    async fn insert(&self, entity: &mut E) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.set_id(id);
        self.rows.write().await.insert(id, entity.clone());
        tracing::debug!("Inserted {} row {}", self.table, id);
        1
    }

    async fn update(&self, op: &MapperOperation, entity: &E) -> Result<u64, MapperError> {
        let id = entity.id().ok_or(MapperError::MissingId(op.name))?;
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) => {
                *row = entity.clone();
                tracing::debug!("Updated {} row {}", self.table, id);
                Ok(1)
            }
            None => Err(MapperError::NotFound { operation: op.name, id }),
        }
    }

    async fn delete(&self, op: &MapperOperation, entity: &E) -> Result<u64, MapperError> {
        let id = entity.id().ok_or(MapperError::MissingId(op.name))?;
        let removed = self.rows.write().await.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}

#[async_trait]
impl<E> Mapper<E> for InMemoryMapper<E>
where
    E: Keyed + Clone + Send + Sync,
{
    async fn execute(&self, op: &MapperOperation, entity: Option<&mut E>) -> Result<u64, MapperError> {
        let entity = entity.ok_or(MapperError::MissingEntity(op.name))?;
        match op.statement {
            Statement::Insert => Ok(self.insert(entity).await),
            Statement::Update => self.update(op, entity).await,
            Statement::Delete => self.delete(op, entity).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autofill::MAPPER_NAMESPACE;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Row {
        id: Option<i64>,
        name: String,
    }

    impl Keyed for Row {
        fn id(&self) -> Option<i64> {
            self.id
        }
        fn set_id(&mut self, id: i64) {
            self.id = Some(id);
        }
    }

    const INSERT: MapperOperation = MapperOperation::new(MAPPER_NAMESPACE, "row.insert", Statement::Insert);
    const UPDATE: MapperOperation = MapperOperation::new(MAPPER_NAMESPACE, "row.update", Statement::Update);
    const DELETE: MapperOperation = MapperOperation::new(MAPPER_NAMESPACE, "row.delete", Statement::Delete);

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let mapper = InMemoryMapper::new("rows");
        let mut first = Row { name: "a".into(), ..Default::default() };
        let mut second = Row { name: "b".into(), ..Default::default() };

        mapper.execute(&INSERT, Some(&mut first)).await.unwrap();
        mapper.execute(&INSERT, Some(&mut second)).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(mapper.find_by_id(2).await, Some(second));
        assert_eq!(mapper.count().await, 2);
    }

    #[tokio::test]
    async fn test_update_replaces_existing_row() {
        let mapper = InMemoryMapper::new("rows");
        let mut row = Row { name: "a".into(), ..Default::default() };
        mapper.execute(&INSERT, Some(&mut row)).await.unwrap();

        row.name = "renamed".into();
        let affected = mapper.execute(&UPDATE, Some(&mut row)).await.unwrap();

        assert_eq!(affected, 1);
        assert_eq!(mapper.find_by_id(1).await.unwrap().name, "renamed");
    }

    #[tokio::test]
    async fn test_update_unknown_row_is_not_found() {
        let mapper = InMemoryMapper::new("rows");
        let mut row = Row { id: Some(99), name: "ghost".into() };

        let error = mapper.execute(&UPDATE, Some(&mut row)).await.unwrap_err();
        assert!(matches!(error, MapperError::NotFound { id: 99, .. }));
    }

    #[tokio::test]
    async fn test_missing_entity_and_id_are_rejected() {
        let mapper: InMemoryMapper<Row> = InMemoryMapper::new("rows");

        let error = mapper.execute(&INSERT, None).await.unwrap_err();
        assert!(matches!(error, MapperError::MissingEntity("row.insert")));

        let mut row = Row::default();
        let error = mapper.execute(&DELETE, Some(&mut row)).await.unwrap_err();
        assert!(matches!(error, MapperError::MissingId("row.delete")));
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let mapper = InMemoryMapper::new("rows");
        let mut row = Row::default();
        mapper.execute(&INSERT, Some(&mut row)).await.unwrap();

        assert_eq!(mapper.execute(&DELETE, Some(&mut row)).await.unwrap(), 1);
        assert_eq!(mapper.execute(&DELETE, Some(&mut row)).await.unwrap(), 0);
    }
}
