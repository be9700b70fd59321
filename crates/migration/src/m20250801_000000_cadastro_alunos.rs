//! Creates the registration table.
//!
//! Column names and types follow the table the hosted form wrote to:
//! `cpf`, `telefone` and `idade` are numeric, every data column is nullable,
//! and `treinamento_id` is reserved for a training-session link that the
//! form never fills.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum CadastroAlunos {
    #[iden = "Cadastro_Alunos_Mod_lll"]
    Table,
    IdAluno,
    NomeCompleto,
    Telefone,
    Email,
    Cpf,
    Idade,
    CidadeResidencia,
    EstadoResidencia,
    Escolaridade,
    Funcao,
    Empresa,
    CidadeTreinamento,
    EstadoTreinamento,
    EstadoEmocional,
    CriadoEm,
    TreinamentoId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CadastroAlunos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CadastroAlunos::IdAluno)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CadastroAlunos::NomeCompleto).string())
                    .col(ColumnDef::new(CadastroAlunos::Telefone).big_integer())
                    .col(ColumnDef::new(CadastroAlunos::Email).string())
                    .col(ColumnDef::new(CadastroAlunos::Cpf).big_integer())
                    .col(ColumnDef::new(CadastroAlunos::Idade).integer())
                    .col(ColumnDef::new(CadastroAlunos::CidadeResidencia).string())
                    .col(ColumnDef::new(CadastroAlunos::EstadoResidencia).string())
                    .col(ColumnDef::new(CadastroAlunos::Escolaridade).string())
                    .col(ColumnDef::new(CadastroAlunos::Funcao).string())
                    .col(ColumnDef::new(CadastroAlunos::Empresa).string())
                    .col(ColumnDef::new(CadastroAlunos::CidadeTreinamento).string())
                    .col(ColumnDef::new(CadastroAlunos::EstadoTreinamento).string())
                    .col(ColumnDef::new(CadastroAlunos::EstadoEmocional).string())
                    .col(ColumnDef::new(CadastroAlunos::CriadoEm).string())
                    .col(ColumnDef::new(CadastroAlunos::TreinamentoId).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-cadastro_alunos-cpf")
                    .table(CadastroAlunos::Table)
                    .col(CadastroAlunos::Cpf)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CadastroAlunos::Table).to_owned())
            .await
    }
}
