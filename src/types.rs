//! The closed set of type labels used on both axes of the chart.

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TYPE_COUNT: usize = 30;

/// Labels go through [`Type::from_label`] wherever they are parsed, serde
/// included, so `"Agua"` and `"agua"` name the same type everywhere.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Type {
    Normal,
    Planta,
    Inseto,
    Venenoso,
    Fera,
    Zumbi,
    Marinho,
    Voador,
    Subterraneo,
    Terrestre,
    Fogo,
    Gelo,
    Agua,
    Vento,
    Eletrico,
    Pedra,
    Luz,
    Trevas,
    Nostalgico,
    Mistico,
    Dragao,
    Alien,
    Docrates,
    Fantasma,
    Psiquico,
    Magico,
    Tecnologia,
    Tempo,
    Desconhecido,
    Deus,
}

static TYPE_NAMES: phf::Map<&'static str, Type> = phf::phf_map! {
    "normal" => Type::Normal,
    "planta" => Type::Planta,
    "inseto" => Type::Inseto,
    "venenoso" => Type::Venenoso,
    "fera" => Type::Fera,
    "zumbi" => Type::Zumbi,
    "marinho" => Type::Marinho,
    "voador" => Type::Voador,
    "subterraneo" => Type::Subterraneo,
    "terrestre" => Type::Terrestre,
    "fogo" => Type::Fogo,
    "gelo" => Type::Gelo,
    "agua" => Type::Agua,
    "vento" => Type::Vento,
    "eletrico" => Type::Eletrico,
    "pedra" => Type::Pedra,
    "luz" => Type::Luz,
    "trevas" => Type::Trevas,
    "nostalgico" => Type::Nostalgico,
    "mistico" => Type::Mistico,
    "dragao" => Type::Dragao,
    "alien" => Type::Alien,
    "docrates" => Type::Docrates,
    "fantasma" => Type::Fantasma,
    "psiquico" => Type::Psiquico,
    "magico" => Type::Magico,
    "tecnologia" => Type::Tecnologia,
    "tempo" => Type::Tempo,
    "desconhecido" => Type::Desconhecido,
    "deus" => Type::Deus,
};

impl Type {
    /// Every type in the order rows list their defending entries.
    pub const ALL: [Type; TYPE_COUNT] = [
        Type::Normal,
        Type::Planta,
        Type::Inseto,
        Type::Venenoso,
        Type::Fera,
        Type::Zumbi,
        Type::Marinho,
        Type::Voador,
        Type::Subterraneo,
        Type::Terrestre,
        Type::Fogo,
        Type::Gelo,
        Type::Agua,
        Type::Vento,
        Type::Eletrico,
        Type::Pedra,
        Type::Luz,
        Type::Trevas,
        Type::Nostalgico,
        Type::Mistico,
        Type::Dragao,
        Type::Alien,
        Type::Docrates,
        Type::Fantasma,
        Type::Psiquico,
        Type::Magico,
        Type::Tecnologia,
        Type::Tempo,
        Type::Desconhecido,
        Type::Deus,
    ];

    /// Position of this type in [`Type::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Planta => "planta",
            Type::Inseto => "inseto",
            Type::Venenoso => "venenoso",
            Type::Fera => "fera",
            Type::Zumbi => "zumbi",
            Type::Marinho => "marinho",
            Type::Voador => "voador",
            Type::Subterraneo => "subterraneo",
            Type::Terrestre => "terrestre",
            Type::Fogo => "fogo",
            Type::Gelo => "gelo",
            Type::Agua => "agua",
            Type::Vento => "vento",
            Type::Eletrico => "eletrico",
            Type::Pedra => "pedra",
            Type::Luz => "luz",
            Type::Trevas => "trevas",
            Type::Nostalgico => "nostalgico",
            Type::Mistico => "mistico",
            Type::Dragao => "dragao",
            Type::Alien => "alien",
            Type::Docrates => "docrates",
            Type::Fantasma => "fantasma",
            Type::Psiquico => "psiquico",
            Type::Magico => "magico",
            Type::Tecnologia => "tecnologia",
            Type::Tempo => "tempo",
            Type::Desconhecido => "desconhecido",
            Type::Deus => "deus",
        }
    }

    /// Case-insensitive label lookup; surrounding whitespace is ignored.
    pub fn from_label(label: &str) -> Option<Type> {
        let key = label.trim().to_ascii_lowercase();
        TYPE_NAMES.get(key.as_str()).copied()
    }
}

impl FromStr for Type {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_label(s).ok_or_else(|| ChartError::UnknownType(s.to_string()))
    }
}

impl TryFrom<String> for Type {
    type Error = ChartError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<Type> for &'static str {
    fn from(ty: Type) -> Self {
        ty.as_str()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
