//! Domain entities and request payloads.
//!
//! Field names follow the Portuguese wire contract the services have
//! always exposed. Every entity carries a store-assigned `i64` id;
//! create payloads omit it, update payloads are merge-patches in which
//! only supplied fields change.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::traits::Record;

/// Store-assigned identifier for every entity.
pub type EntityId = i64;

/// Deserializer distinguishing "field absent" (outer `None`) from
/// "field: null" (inner `None`) in merge-patch payloads. Pair with
/// `#[serde(default)]` so a missing field stays `None`.
pub fn patch_field<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

fn default_true() -> bool {
    true
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {$(
        impl Record for $ty {
            fn id(&self) -> EntityId {
                self.id
            }

            fn assign_id(&mut self, id: EntityId) {
                self.id = id;
            }
        }
    )+};
}

// ---------------------------------------------------------------------------
// Professor

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    pub id: EntityId,
    pub nome: String,
    pub idade: Option<i32>,
    pub materia: String,
    pub observacoes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfessorRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nome: String,
    pub idade: Option<i32>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub materia: String,
    #[serde(default)]
    pub observacoes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfessorRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "patch_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idade: Option<Option<i32>>,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

impl From<CreateProfessorRequest> for Professor {
    fn from(req: CreateProfessorRequest) -> Self {
        Self {
            id: 0,
            nome: req.nome,
            idade: req.idade,
            materia: req.materia,
            observacoes: req.observacoes,
        }
    }
}

impl Professor {
    pub fn apply(&mut self, patch: UpdateProfessorRequest) {
        if let Some(nome) = patch.nome {
            self.nome = nome;
        }
        if let Some(idade) = patch.idade {
            self.idade = idade;
        }
        if let Some(materia) = patch.materia {
            self.materia = materia;
        }
        if let Some(observacoes) = patch.observacoes {
            self.observacoes = observacoes;
        }
    }
}

// ---------------------------------------------------------------------------
// Turma

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turma {
    pub id: EntityId,
    pub descricao: String,
    pub professor_id: EntityId,
    pub ativo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTurmaRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub descricao: String,
    pub professor_id: EntityId,
    #[serde(default = "default_true")]
    pub ativo: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTurmaRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ativo: Option<bool>,
}

impl From<CreateTurmaRequest> for Turma {
    fn from(req: CreateTurmaRequest) -> Self {
        Self {
            id: 0,
            descricao: req.descricao,
            professor_id: req.professor_id,
            ativo: req.ativo,
        }
    }
}

impl Turma {
    pub fn apply(&mut self, patch: UpdateTurmaRequest) {
        if let Some(descricao) = patch.descricao {
            self.descricao = descricao;
        }
        if let Some(professor_id) = patch.professor_id {
            self.professor_id = professor_id;
        }
        if let Some(ativo) = patch.ativo {
            self.ativo = ativo;
        }
    }
}

// ---------------------------------------------------------------------------
// Aluno

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aluno {
    pub id: EntityId,
    pub nome: String,
    pub idade: Option<i32>,
    pub turma_id: Option<EntityId>,
    pub data_nascimento: Option<NaiveDate>,
    pub nota_primeiro_semestre: Option<f64>,
    pub nota_segundo_semestre: Option<f64>,
    pub media_final: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAlunoRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nome: String,
    pub idade: Option<i32>,
    pub turma_id: Option<EntityId>,
    pub data_nascimento: Option<NaiveDate>,
    pub nota_primeiro_semestre: Option<f64>,
    pub nota_segundo_semestre: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAlunoRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "patch_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idade: Option<Option<i32>>,
    #[serde(default, deserialize_with = "patch_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turma_id: Option<Option<EntityId>>,
    #[serde(default, deserialize_with = "patch_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_nascimento: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "patch_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nota_primeiro_semestre: Option<Option<f64>>,
    #[serde(default, deserialize_with = "patch_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nota_segundo_semestre: Option<Option<f64>>,
}

impl From<CreateAlunoRequest> for Aluno {
    fn from(req: CreateAlunoRequest) -> Self {
        let mut aluno = Self {
            id: 0,
            nome: req.nome,
            idade: req.idade,
            turma_id: req.turma_id,
            data_nascimento: req.data_nascimento,
            nota_primeiro_semestre: req.nota_primeiro_semestre,
            nota_segundo_semestre: req.nota_segundo_semestre,
            media_final: None,
        };
        aluno.recompute_media();
        aluno
    }
}

impl Aluno {
    /// Mean of the two term grades, defined only when both are present.
    pub fn recompute_media(&mut self) {
        self.media_final = match (self.nota_primeiro_semestre, self.nota_segundo_semestre) {
            (Some(n1), Some(n2)) => Some((n1 + n2) / 2.0),
            _ => None,
        };
    }

    pub fn apply(&mut self, patch: UpdateAlunoRequest) {
        if let Some(nome) = patch.nome {
            self.nome = nome;
        }
        if let Some(idade) = patch.idade {
            self.idade = idade;
        }
        if let Some(turma_id) = patch.turma_id {
            self.turma_id = turma_id;
        }
        if let Some(data_nascimento) = patch.data_nascimento {
            self.data_nascimento = data_nascimento;
        }
        if let Some(nota) = patch.nota_primeiro_semestre {
            self.nota_primeiro_semestre = nota;
        }
        if let Some(nota) = patch.nota_segundo_semestre {
            self.nota_segundo_semestre = nota;
        }
        self.recompute_media();
    }
}

// ---------------------------------------------------------------------------
// Tarefa

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tarefa {
    pub id: EntityId,
    pub nome_tarefa: String,
    pub descricao: Option<String>,
    pub peso_porcento: f64,
    pub data_entrega: NaiveDate,
    pub turma_id: EntityId,
    pub professor_id: EntityId,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTarefaRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nome_tarefa: String,
    pub descricao: Option<String>,
    #[validate(range(min = 0.0, max = 100.0, message = "must be a percentage"))]
    pub peso_porcento: f64,
    pub data_entrega: NaiveDate,
    pub turma_id: EntityId,
    pub professor_id: EntityId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTarefaRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_tarefa: Option<String>,
    #[serde(default, deserialize_with = "patch_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<Option<String>>,
    #[validate(range(min = 0.0, max = 100.0, message = "must be a percentage"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peso_porcento: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_entrega: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turma_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor_id: Option<EntityId>,
}

impl From<CreateTarefaRequest> for Tarefa {
    fn from(req: CreateTarefaRequest) -> Self {
        Self {
            id: 0,
            nome_tarefa: req.nome_tarefa,
            descricao: req.descricao,
            peso_porcento: req.peso_porcento,
            data_entrega: req.data_entrega,
            turma_id: req.turma_id,
            professor_id: req.professor_id,
        }
    }
}

impl Tarefa {
    pub fn apply(&mut self, patch: UpdateTarefaRequest) {
        if let Some(nome_tarefa) = patch.nome_tarefa {
            self.nome_tarefa = nome_tarefa;
        }
        if let Some(descricao) = patch.descricao {
            self.descricao = descricao;
        }
        if let Some(peso_porcento) = patch.peso_porcento {
            self.peso_porcento = peso_porcento;
        }
        if let Some(data_entrega) = patch.data_entrega {
            self.data_entrega = data_entrega;
        }
        if let Some(turma_id) = patch.turma_id {
            self.turma_id = turma_id;
        }
        if let Some(professor_id) = patch.professor_id {
            self.professor_id = professor_id;
        }
    }
}

// ---------------------------------------------------------------------------
// Nota

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nota {
    pub id: EntityId,
    pub nota: f64,
    pub aluno_id: EntityId,
    pub tarefa_id: EntityId,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNotaRequest {
    pub nota: f64,
    pub aluno_id: EntityId,
    pub tarefa_id: EntityId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateNotaRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nota: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aluno_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tarefa_id: Option<EntityId>,
}

impl From<CreateNotaRequest> for Nota {
    fn from(req: CreateNotaRequest) -> Self {
        Self {
            id: 0,
            nota: req.nota,
            aluno_id: req.aluno_id,
            tarefa_id: req.tarefa_id,
        }
    }
}

impl Nota {
    pub fn apply(&mut self, patch: UpdateNotaRequest) {
        if let Some(nota) = patch.nota {
            self.nota = nota;
        }
        if let Some(aluno_id) = patch.aluno_id {
            self.aluno_id = aluno_id;
        }
        if let Some(tarefa_id) = patch.tarefa_id {
            self.tarefa_id = tarefa_id;
        }
    }
}

// ---------------------------------------------------------------------------
// Reserva

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reserva {
    pub id: EntityId,
    pub num_sala: i32,
    pub lab: bool,
    pub data: NaiveDate,
    pub turma_id: EntityId,
    pub hora_inicio: Option<String>,
    pub hora_fim: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReservaRequest {
    pub num_sala: i32,
    #[serde(default)]
    pub lab: bool,
    pub data: NaiveDate,
    pub turma_id: EntityId,
    pub hora_inicio: Option<String>,
    pub hora_fim: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateReservaRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_sala: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turma_id: Option<EntityId>,
    #[serde(default, deserialize_with = "patch_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hora_inicio: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch_field")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hora_fim: Option<Option<String>>,
}

impl From<CreateReservaRequest> for Reserva {
    fn from(req: CreateReservaRequest) -> Self {
        Self {
            id: 0,
            num_sala: req.num_sala,
            lab: req.lab,
            data: req.data,
            turma_id: req.turma_id,
            hora_inicio: req.hora_inicio,
            hora_fim: req.hora_fim,
        }
    }
}

impl Reserva {
    pub fn apply(&mut self, patch: UpdateReservaRequest) {
        if let Some(num_sala) = patch.num_sala {
            self.num_sala = num_sala;
        }
        if let Some(lab) = patch.lab {
            self.lab = lab;
        }
        if let Some(data) = patch.data {
            self.data = data;
        }
        if let Some(turma_id) = patch.turma_id {
            self.turma_id = turma_id;
        }
        if let Some(hora_inicio) = patch.hora_inicio {
            self.hora_inicio = hora_inicio;
        }
        if let Some(hora_fim) = patch.hora_fim {
            self.hora_fim = hora_fim;
        }
    }
}

impl_record!(Professor, Turma, Aluno, Tarefa, Nota, Reserva);

// ---------------------------------------------------------------------------
// Error body

/// JSON error body returned by every failing handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub r#type: String,
    pub message: String,
}
