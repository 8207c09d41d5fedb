use async_trait::async_trait;
use tokio_postgres::{types::Json, Client, NoTls, Row};
use uuid::Uuid;

use crate::{
    consts::consts::EntityId,
    error::{persistence_error, DatabaseError, DatabaseResult},
    model::person::{Person, PersonData},
};

use super::PersonStore;

/// Stores each person as a JSON document keyed by its id
pub struct PgStore {
    client: Client,
}

impl PgStore {
    pub async fn connect(connection_string: &str) -> DatabaseResult<Self> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
            .await
            .map_err(persistence_error)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("Postgres connection error: {}", e);
            }
        });

        // Idempotent, safe to run on every start-up
        let data_table = r#"
            CREATE TABLE IF NOT EXISTS "public"."persons" (
                "id" uuid NOT NULL,
                "data" jsonb NOT NULL,
                "created_at" timestamptz NOT NULL DEFAULT now(),
                PRIMARY KEY ("id")
            );
        "#;

        client
            .batch_execute(data_table)
            .await
            .map_err(persistence_error)?;

        log::info!("Connected to postgres document store");

        Ok(Self { client })
    }

    async fn query_optional(
        &self,
        statement: &str,
        id: &Uuid,
        data: Option<&PersonData>,
    ) -> DatabaseResult<Option<Person>> {
        let row = match data {
            Some(data) => self.client.query_opt(statement, &[id, &Json(data)]).await,
            None => self.client.query_opt(statement, &[id]).await,
        }
        .map_err(log_persistence_error)?;

        row.as_ref().map(row_to_person).transpose()
    }
}

fn row_to_person(row: &Row) -> DatabaseResult<Person> {
    let id: Uuid = row.try_get("id").map_err(persistence_error)?;
    let Json(data): Json<PersonData> = row.try_get("data").map_err(persistence_error)?;

    Ok(Person::from_data(EntityId(id), data))
}

fn log_persistence_error(err: tokio_postgres::Error) -> DatabaseError {
    log::error!("Postgres query failed: {}", err);
    persistence_error(err)
}

#[async_trait]
impl PersonStore for PgStore {
    async fn create(&self, data: PersonData) -> DatabaseResult<Person> {
        data.validate()?;

        let insert = r#"
            INSERT INTO "public"."persons" ("id", "data") VALUES ($1, $2) RETURNING "id", "data";
        "#;

        let id = EntityId::new();

        self.query_optional(insert, id.as_uuid(), Some(&data))
            .await?
            .ok_or_else(|| persistence_error(format!("Insert of {} returned no row", id)))
    }

    async fn find_all(&self) -> DatabaseResult<Vec<Person>> {
        let select = r#"
            SELECT "id", "data" FROM "public"."persons" ORDER BY "created_at";
        "#;

        let rows = self
            .client
            .query(select, &[])
            .await
            .map_err(log_persistence_error)?;

        rows.iter().map(row_to_person).collect()
    }

    async fn find_by_id(&self, id: &str) -> DatabaseResult<Option<Person>> {
        let id = EntityId::try_from(id)?;

        let select = r#"
            SELECT "id", "data" FROM "public"."persons" WHERE "id" = $1;
        "#;

        self.query_optional(select, id.as_uuid(), None).await
    }

    async fn update_by_id(&self, id: &str, data: PersonData) -> DatabaseResult<Option<Person>> {
        let id = EntityId::try_from(id)?;
        data.validate()?;

        let update = r#"
            UPDATE "public"."persons" SET "data" = $2 WHERE "id" = $1 RETURNING "id", "data";
        "#;

        self.query_optional(update, id.as_uuid(), Some(&data)).await
    }

    async fn delete_by_id(&self, id: &str) -> DatabaseResult<Option<Person>> {
        let id = EntityId::try_from(id)?;

        let delete = r#"
            DELETE FROM "public"."persons" WHERE "id" = $1 RETURNING "id", "data";
        "#;

        self.query_optional(delete, id.as_uuid(), None).await
    }

    async fn count(&self) -> DatabaseResult<u64> {
        let count = r#"
            SELECT COUNT(*) AS "count" FROM "public"."persons";
        "#;

        let row = self
            .client
            .query_one(count, &[])
            .await
            .map_err(log_persistence_error)?;

        let count: i64 = row.try_get("count").map_err(persistence_error)?;

        u64::try_from(count).map_err(persistence_error)
    }
}
