//! The module contains `PersistedRecord`, the row shape the storage expects,
//! and the `Cadastro_Alunos_Mod_lll` entity it is written to.

use sea_orm::entity::{ActiveValue, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    EngineError, ResultEngine,
    draft::RegistrationDraft,
    normalize::digits,
};

/// A registration ready to be stored.
///
/// Field names match the storage columns. `cpf` and `telefone` are digits
/// only. `treinamento_id` links to a training session that this form never
/// sets; it is always `None` and left out when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub nome_completo: String,
    pub telefone: String,
    pub email: String,
    pub cpf: String,
    pub idade: String,
    pub cidade_residencia: String,
    pub estado_residencia: String,
    pub escolaridade: String,
    pub funcao: String,
    pub empresa: String,
    pub cidade_treinamento: String,
    pub estado_treinamento: String,
    pub estado_emocional: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treinamento_id: Option<String>,
}

impl From<&RegistrationDraft> for PersistedRecord {
    fn from(draft: &RegistrationDraft) -> Self {
        let funcao = if draft.wants_role_other() {
            draft.role_other.clone()
        } else {
            draft.role.clone()
        };

        Self {
            nome_completo: draft.full_name.clone(),
            telefone: digits(&draft.phone),
            email: draft.email.clone(),
            cpf: digits(&draft.cpf),
            idade: draft.age.clone(),
            cidade_residencia: draft.residence_city.clone(),
            estado_residencia: draft.residence_state.clone(),
            escolaridade: draft.education_level.clone(),
            funcao,
            empresa: draft.employer.clone(),
            cidade_treinamento: draft.training_city.clone(),
            estado_treinamento: draft.training_state.clone(),
            estado_emocional: draft.emotional_state.clone(),
            treinamento_id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "Cadastro_Alunos_Mod_lll")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_aluno: i32,
    pub nome_completo: Option<String>,
    pub telefone: Option<i64>,
    pub email: Option<String>,
    pub cpf: Option<i64>,
    pub idade: Option<i32>,
    pub cidade_residencia: Option<String>,
    pub estado_residencia: Option<String>,
    pub escolaridade: Option<String>,
    pub funcao: Option<String>,
    pub empresa: Option<String>,
    pub cidade_treinamento: Option<String>,
    pub estado_treinamento: Option<String>,
    pub estado_emocional: Option<String>,
    pub criado_em: Option<String>,
    pub treinamento_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn numeric<T: std::str::FromStr>(value: &str, label: &str) -> ResultEngine<T> {
    value
        .parse()
        .map_err(|_| EngineError::InvalidRecord(format!("{label} is not numeric: {value:?}")))
}

impl TryFrom<&PersistedRecord> for ActiveModel {
    type Error = EngineError;

    fn try_from(value: &PersistedRecord) -> ResultEngine<Self> {
        Ok(Self {
            id_aluno: ActiveValue::NotSet,
            nome_completo: ActiveValue::Set(Some(value.nome_completo.clone())),
            telefone: ActiveValue::Set(Some(numeric(&value.telefone, "telefone")?)),
            email: ActiveValue::Set(Some(value.email.clone())),
            cpf: ActiveValue::Set(Some(numeric(&value.cpf, "cpf")?)),
            idade: ActiveValue::Set(Some(numeric(value.idade.trim(), "idade")?)),
            cidade_residencia: ActiveValue::Set(Some(value.cidade_residencia.clone())),
            estado_residencia: ActiveValue::Set(Some(value.estado_residencia.clone())),
            escolaridade: ActiveValue::Set(Some(value.escolaridade.clone())),
            funcao: ActiveValue::Set(Some(value.funcao.clone())),
            empresa: ActiveValue::Set(Some(value.empresa.clone())),
            cidade_treinamento: ActiveValue::Set(Some(value.cidade_treinamento.clone())),
            estado_treinamento: ActiveValue::Set(Some(value.estado_treinamento.clone())),
            estado_emocional: ActiveValue::Set(Some(value.estado_emocional.clone())),
            criado_em: ActiveValue::NotSet,
            treinamento_id: ActiveValue::NotSet,
        })
    }
}
