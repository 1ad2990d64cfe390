use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::Expr,
};

use crate::{
    entity,
    error::ProductResult,
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes the whole row back and returns what the store holds.
    async fn save(&self, product: &Product) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = product.into();
        let model = active_model.update(&self.db).await?;
        Ok(model.into())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Product::from))
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let Some(mut product) = self.get_by_id(id).await? else {
            return Ok(None);
        };
        product.apply_update(input);
        let updated = self.save(&product).await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(updated))
    }

    /// One `UPDATE ... SET availability = NOT availability RETURNING *`, so
    /// concurrent toggles never read the same value.
    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let mut models = entity::Entity::update_many()
            .col_expr(entity::Column::Availability, Expr::cust("NOT availability"))
            .col_expr(entity::Column::UpdatedAt, Expr::current_timestamp())
            .filter(entity::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await?;

        let Some(model) = models.pop() else {
            return Ok(None);
        };

        tracing::info!(
            product_id = id,
            availability = model.availability,
            "Toggled product availability"
        );
        Ok(Some(model.into()))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str, availability: bool) -> entity::Model {
        let now = chrono::Utc::now().fixed_offset();
        entity::Model {
            id,
            name: name.to_string(),
            price: 300.0,
            availability,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Monitor", true), model(2, "Mouse", false)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let products = repo.list().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Monitor");
        assert!(!products[1].availability);
    }

    #[tokio::test]
    async fn test_get_by_id_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(7, "Monitor", true)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo
            .create(CreateProduct {
                name: "Monitor".to_string(),
                price: 300.0,
            })
            .await
            .unwrap();
        assert_eq!(product.id, 7);
        assert!(product.availability);
    }

    #[tokio::test]
    async fn test_toggle_availability_is_a_single_statement() {
        // Only one result is queued: a read-then-write would run out of results.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "Monitor", false)]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let product = repo.toggle_availability(3).await.unwrap().unwrap();
        assert!(!product.availability);
    }

    #[tokio::test]
    async fn test_toggle_availability_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.toggle_availability(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_absent_skips_write() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.update(3, UpdateProduct::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, ProductError::Database(_)));
    }
}
