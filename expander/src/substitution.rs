use serde::Serialize;

use crate::arity::ArityDescriptor;

/// Placeholder tokens recognised inside a skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Params,
    NParam,
    Args,
    Classes0,
    Classes1,
    Asserts,
}

impl Placeholder {
    pub const ALL: [Placeholder; 6] = [
        Placeholder::Params,
        Placeholder::NParam,
        Placeholder::Args,
        Placeholder::Classes0,
        Placeholder::Classes1,
        Placeholder::Asserts,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::Params => "%PARAMS%",
            Placeholder::NParam => "%NPARAM%",
            Placeholder::Args => "%ARGS%",
            Placeholder::Classes0 => "%CLASSES0%",
            Placeholder::Classes1 => "%CLASSES1%",
            Placeholder::Asserts => "%ASSERTS%",
        }
    }

    pub fn from_token(token: &str) -> Option<Placeholder> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }
}

/// Rendered text for every placeholder at one arity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionTable {
    #[serde(rename = "PARAMS")]
    params: String,
    #[serde(rename = "NPARAM")]
    nparam: String,
    #[serde(rename = "ARGS")]
    args: String,
    #[serde(rename = "CLASSES0")]
    classes0: String,
    #[serde(rename = "CLASSES1")]
    classes1: String,
    #[serde(rename = "ASSERTS")]
    asserts: String,
}

impl SubstitutionTable {
    pub fn for_arity(arity: &ArityDescriptor) -> Self {
        Self {
            params: arity.parameter_list(),
            nparam: arity.count().to_string(),
            args: arity.argument_list(),
            classes0: arity.bare_clause(),
            classes1: arity.extended_clause_tail(),
            asserts: arity.check_sequence(),
        }
    }

    // Exhaustive: a new placeholder does not compile until it
    // has an entry here.
    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Params => &self.params,
            Placeholder::NParam => &self.nparam,
            Placeholder::Args => &self.args,
            Placeholder::Classes0 => &self.classes0,
            Placeholder::Classes1 => &self.classes1,
            Placeholder::Asserts => &self.asserts,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        Placeholder::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}
