//! Storage side of the form.
//!
//! [`DataSink`] is the only suspending collaborator: the controller awaits a
//! single `insert` per accepted submission, with no retry and no timeout.
//! [`SeaOrmSink`] is the database-backed implementation.

use std::future::Future;

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, QueryOrder, QuerySelect, prelude::*};

use crate::{EngineError, ResultEngine, record};

/// Durable storage for accepted registrations.
pub trait DataSink {
    fn insert(
        &self,
        record: &record::PersistedRecord,
    ) -> impl Future<Output = ResultEngine<()>>;
}

/// Writes registrations to the `Cadastro_Alunos_Mod_lll` table.
#[derive(Debug, Clone)]
pub struct SeaOrmSink {
    database: DatabaseConnection,
}

impl SeaOrmSink {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &DatabaseConnection {
        &self.database
    }

    /// Stored registrations, newest first.
    pub async fn list(&self, limit: u64) -> ResultEngine<Vec<record::Model>> {
        record::Entity::find()
            .order_by_desc(record::Column::IdAluno)
            .limit(limit)
            .all(&self.database)
            .await
            .map_err(EngineError::from)
    }
}

impl DataSink for SeaOrmSink {
    async fn insert(&self, record: &record::PersistedRecord) -> ResultEngine<()> {
        let mut model = record::ActiveModel::try_from(record)?;
        model.criado_em = ActiveValue::Set(Some(Utc::now().to_rfc3339()));
        let stored = model.insert(&self.database).await?;
        tracing::info!(id = stored.id_aluno, "registration stored");
        Ok(())
    }
}
