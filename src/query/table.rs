use std::str::FromStr;

use thiserror::Error;

use crate::validation::schema::{FieldKind, TableSchema};

pub const CATEGORIAS_SCHEMA: TableSchema = TableSchema {
    fields: &[
        ("id", FieldKind::Integer),
        ("nome", FieldKind::Text),
        ("status", FieldKind::Integer),
        ("descricao", FieldKind::Text),
        ("parente", FieldKind::Integer),
    ],
};

pub const LOCAL_SCHEMA: TableSchema = TableSchema {
    fields: &[
        ("id", FieldKind::Integer),
        ("nome", FieldKind::Text),
        ("descricao", FieldKind::Text),
        ("bairro", FieldKind::Text),
        ("cidade", FieldKind::Text),
        ("estado", FieldKind::Text),
        ("status", FieldKind::Integer),
        ("categorias", FieldKind::IntArray),
        ("pais", FieldKind::Text),
    ],
};

pub const FAIXA_ETARIA_SCHEMA: TableSchema = TableSchema {
    fields: &[
        ("id", FieldKind::Integer),
        ("nome", FieldKind::Text),
        ("minIdade", FieldKind::Integer),
        ("status", FieldKind::Integer),
        ("maxIdade", FieldKind::Integer),
    ],
};

pub const CONTRATO_SCHEMA: TableSchema = TableSchema {
    fields: &[
        ("id", FieldKind::Integer),
        ("prestadorId", FieldKind::Integer),
        ("produtorId", FieldKind::Integer),
        ("evento", FieldKind::Integer),
        ("status", FieldKind::Integer),
        ("criadoEm", FieldKind::Text),
    ],
};

pub const EVENTOS_SCHEMA: TableSchema = TableSchema {
    fields: &[
        ("id", FieldKind::Integer),
        ("nome", FieldKind::Text),
        ("produtor", FieldKind::Integer),
        ("status", FieldKind::Integer),
        ("local", FieldKind::Integer),
        ("faixa_etaria", FieldKind::Integer),
        ("categorias", FieldKind::IntArray),
        ("comeca", FieldKind::Text),
        ("termina", FieldKind::Text),
    ],
};

pub const USUARIOS_SCHEMA: TableSchema = TableSchema {
    fields: &[
        ("id", FieldKind::Integer),
        ("nome", FieldKind::Text),
        ("prestador", FieldKind::Bool),
        ("produtor", FieldKind::Bool),
        ("data_nascimento", FieldKind::Text),
        ("status", FieldKind::Integer),
        ("categorias", FieldKind::IntArray),
        ("cnpj", FieldKind::Text),
        ("nacionalidade", FieldKind::Text),
        ("genero", FieldKind::Text),
    ],
};

/// The closed set of queryable tables. Each variant resolves its schema at
/// compile time, so there is no run-time registry to fall out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Categorias,
    Local,
    FaixaEtaria,
    Contrato,
    Eventos,
    Usuarios,
}

impl Table {
    pub fn schema(self) -> &'static TableSchema {
        match self {
            Table::Categorias => &CATEGORIAS_SCHEMA,
            Table::Local => &LOCAL_SCHEMA,
            Table::FaixaEtaria => &FAIXA_ETARIA_SCHEMA,
            Table::Contrato => &CONTRATO_SCHEMA,
            Table::Eventos => &EVENTOS_SCHEMA,
            Table::Usuarios => &USUARIOS_SCHEMA,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Table::Categorias => "categorias",
            Table::Local => "local",
            Table::FaixaEtaria => "faixa_etaria",
            Table::Contrato => "contrato",
            Table::Eventos => "eventos",
            Table::Usuarios => "usuarios",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no query context registered for table `{0}`")]
pub struct UnknownTable(pub String);

impl FromStr for Table {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "categorias" => Ok(Table::Categorias),
            "local" => Ok(Table::Local),
            "faixa_etaria" => Ok(Table::FaixaEtaria),
            "contrato" => Ok(Table::Contrato),
            "eventos" => Ok(Table::Eventos),
            "usuarios" => Ok(Table::Usuarios),
            other => Err(UnknownTable(other.to_string())),
        }
    }
}
