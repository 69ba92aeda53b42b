use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectOptions, Database, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, SqlErr,
    sea_query::{Expr, Func, LikeExpr},
};
use tracing::{debug, error, info};

use async_trait::async_trait;

use crate::errors::{LinkletError, Result};
use crate::repository::{Link, LinkStore};

use migration::{Migrator, MigratorTrait, entities::link};

#[derive(Clone)]
pub struct SeaOrmRepository {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmRepository {
    pub async fn new(database_url: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(LinkletError::database_config("DATABASE_URL is not set"));
        }

        let backend_name = Self::backend_name_from_url(database_url)?;

        let db = if backend_name == "sqlite" {
            Self::connect_sqlite(database_url).await?
        } else {
            Self::connect_generic(database_url, &backend_name).await?
        };

        let repository = SeaOrmRepository {
            db,
            backend_name: backend_name.to_string(),
        };

        repository.run_migrations().await?;

        info!(
            "{} repository initialized",
            repository.backend_name.to_uppercase()
        );
        Ok(repository)
    }

    fn backend_name_from_url(database_url: &str) -> Result<String> {
        let scheme = database_url.split(':').next().unwrap_or_default();
        match scheme {
            "sqlite" => Ok("sqlite".to_string()),
            "postgres" | "postgresql" => Ok("postgres".to_string()),
            "mysql" => Ok("mysql".to_string()),
            other => Err(LinkletError::database_config(format!(
                "Unsupported database scheme: {}",
                other
            ))),
        }
    }

    /// SQLite connection with auto-create and WAL tuning.
    async fn connect_sqlite(database_url: &str) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::SqlitePool;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                LinkletError::database_config(format!("Failed to parse SQLite URL: {}", e))
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePool::connect_with(opt).await.map_err(|e| {
            LinkletError::database_connection(format!("Failed to connect to SQLite: {}", e))
        })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Pooled connection for MySQL/PostgreSQL.
    async fn connect_generic(database_url: &str, backend_name: &str) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(database_url.to_owned());
        opt.max_connections(100)
            .min_connections(5)
            .connect_timeout(std::time::Duration::from_secs(8))
            .acquire_timeout(std::time::Duration::from_secs(8))
            .sqlx_logging(false);

        Database::connect(opt).await.map_err(|e| {
            LinkletError::database_connection(format!(
                "Failed to connect to {}: {}",
                backend_name.to_uppercase(),
                e
            ))
        })
    }

    async fn run_migrations(&self) -> Result<()> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| LinkletError::database_operation(format!("Migration failed: {}", e)))?;

        info!("Database migrations completed");
        Ok(())
    }

    fn model_to_link(model: link::Model) -> Link {
        Link {
            code: model.code,
            target_url: model.target_url,
            total_clicks: model.total_clicks.max(0),
            last_clicked: model.last_clicked,
            created_at: model.created_at,
        }
    }

    /// Unique-constraint violation, via SeaORM's backend-agnostic
    /// classification of the driver error.
    fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
        matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }
}

#[async_trait]
impl LinkStore for SeaOrmRepository {
    async fn create(&self, code: &str, target_url: &str) -> Result<Link> {
        use sea_orm::ActiveValue::Set;

        let active_model = link::ActiveModel {
            code: Set(code.to_string()),
            target_url: Set(target_url.to_string()),
            total_clicks: Set(0),
            last_clicked: Set(None),
            created_at: Set(Utc::now()),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => {
                info!("Link created: {}", code);
                Ok(Self::model_to_link(model))
            }
            Err(e) if Self::is_unique_violation(&e) => {
                debug!("Insert conflict for code: {}", code);
                Err(LinkletError::duplicate_code(format!(
                    "Code already exists: {}",
                    code
                )))
            }
            Err(e) => Err(LinkletError::database_operation(format!(
                "Failed to insert link: {}",
                e
            ))),
        }
    }

    async fn get(&self, code: &str) -> Result<Link> {
        let model = link::Entity::find_by_id(code)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to query link {}: {}", code, e);
                LinkletError::database_operation(format!("Failed to query link: {}", e))
            })?;

        match model {
            Some(model) => Ok(Self::model_to_link(model)),
            None => Err(LinkletError::not_found(format!("No such code: {}", code))),
        }
    }

    async fn list(&self, filter: Option<&str>) -> Result<Vec<Link>> {
        use sea_orm::ExprTrait;

        let mut query = link::Entity::find().order_by_desc(link::Column::CreatedAt);

        if let Some(q) = filter.filter(|q| !q.is_empty()) {
            // LIKE metacharacters in the query are literal text, not
            // wildcards; '_' and '%' both occur in real URLs.
            let escaped = q
                .to_lowercase()
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            let pattern = LikeExpr::new(format!("%{}%", escaped)).escape('\\');
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(link::Column::Code)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(link::Column::TargetUrl))).like(pattern),
                    ),
            );
        }

        let models = query.all(&self.db).await.map_err(|e| {
            error!("Failed to list links: {}", e);
            LinkletError::database_operation(format!("Failed to list links: {}", e))
        })?;

        Ok(models.into_iter().map(Self::model_to_link).collect())
    }

    async fn record_click(&self, code: &str) -> Result<()> {
        use sea_orm::ExprTrait;

        // Single-statement increment-and-set; this is the only place
        // total_clicks or last_clicked change.
        let result = link::Entity::update_many()
            .col_expr(
                link::Column::TotalClicks,
                Expr::col(link::Column::TotalClicks).add(1),
            )
            .col_expr(link::Column::LastClicked, Expr::value(Utc::now()))
            .filter(link::Column::Code.eq(code))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to record click for {}: {}", code, e);
                LinkletError::database_operation(format!("Failed to record click: {}", e))
            })?;

        if result.rows_affected == 0 {
            return Err(LinkletError::not_found(format!("No such code: {}", code)));
        }

        Ok(())
    }

    async fn delete(&self, code: &str) -> Result<()> {
        let result = link::Entity::delete_by_id(code)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete link {}: {}", code, e);
                LinkletError::database_operation(format!("Failed to delete link: {}", e))
            })?;

        if result.rows_affected == 0 {
            return Err(LinkletError::not_found(format!("No such code: {}", code)));
        }

        info!("Link deleted: {}", code);
        Ok(())
    }
}
