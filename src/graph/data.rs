use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Race {
    Men,
    Elves,
    Hobbit,
    Dwarf,
    Ainur,
    Ents,
    Orcs,
    Animal,
}

impl Race {
    pub fn base_color(self) -> &'static str {
        match self {
            Self::Men => "#7A84DD",
            Self::Elves => "#8ACAE5",
            Self::Hobbit => "#BD9267",
            Self::Dwarf => "#B15B60",
            Self::Ainur => "#3A7575",
            Self::Ents => "#E3845D",
            Self::Orcs => "#020104",
            Self::Animal => "#8ACAE5",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Elves => "Elves",
            Self::Hobbit => "Hobbit",
            Self::Dwarf => "Dwarf",
            Self::Ainur => "Ainur",
            Self::Ents => "Ents",
            Self::Orcs => "Orcs",
            Self::Animal => "Animal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub race: Race,
    pub gender: Option<Gender>,
    pub weight: u64,
    pub recorded_connections: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: u64,
}
