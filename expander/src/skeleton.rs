//! Fixed text of the generated unit and the single-pass placeholder fill.

use crate::substitution::{Placeholder, SubstitutionTable};

/// Return shape of the native function a specialization binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecializationVariant {
    Void,
    Value,
}

impl SpecializationVariant {
    pub const ALL: [SpecializationVariant; 2] =
        [SpecializationVariant::Void, SpecializationVariant::Value];

    pub fn skeleton(self) -> &'static str {
        match self {
            SpecializationVariant::Void => VOID_SKELETON,
            SpecializationVariant::Value => VALUE_SKELETON,
        }
    }
}

const VOID_SKELETON: &str = "\
// void f(%PARAMS%);
template<%CLASSES0%>
struct Binder<void (*)(%PARAMS%)> {
  typedef void (*FuncType)(%PARAMS%);
  static const int NPARAM = %NPARAM%;
  static yalp::Value call(yalp::State* state) {
    %ASSERTS%
    FuncType funcPtr = reinterpret_cast<FuncType>(getBindedFuncPtr(state));
    (*funcPtr)(%ARGS%);
    return yalp::Value::NIL;
  }
};

";

const VALUE_SKELETON: &str = "\
// R f(%PARAMS%);
template<class R%CLASSES1%>
struct Binder<R (*)(%PARAMS%)> {
  typedef R (*FuncType)(%PARAMS%);
  static const int NPARAM = %NPARAM%;
  static yalp::Value call(yalp::State* state) {
    %ASSERTS%
    FuncType funcPtr = reinterpret_cast<FuncType>(getBindedFuncPtr(state));
    R result = (*funcPtr)(%ARGS%);
    return Type<R>::ret(state, result);
  }
};

";

const HEADER_BODY: &str = "\
#define ARG(i)  Type<P##i>::get(state, state->getArg(i))
#define CHECK(i)  {if (!Type<P##i>::check(state->getArg(i))) return RAISE(i);}
#define RAISE(i)  raiseTypeError(state, i, Type<P##i>::TYPE_NAME, state->getArg(i))

// Template class for Binder.
// Binder template class is specialized with type.
template <class T>
struct Binder {
  // Template specialization.
  //static Value call(State* state) = 0;
};

";

pub const FOOTER: &str = "\
#undef ARG
#undef CHECK
";

/// Banner line followed by the macro definitions and the primary template.
pub fn header(origin: &str) -> String {
    format!("// This file is generated from {origin}\n{HEADER_BODY}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Slot(Placeholder),
}

/// Split a skeleton into literal runs and recognised placeholders.
///
/// A `%...%` span that is not a known placeholder stays literal text.
pub fn segments(skeleton: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(open) = skeleton[cursor..].find('%').map(|i| cursor + i) {
        let Some(close) = skeleton[open + 1..].find('%').map(|i| open + 1 + i) else {
            break;
        };
        match Placeholder::from_token(&skeleton[open..=close]) {
            Some(placeholder) => {
                if literal_start < open {
                    out.push(Segment::Text(&skeleton[literal_start..open]));
                }
                out.push(Segment::Slot(placeholder));
                cursor = close + 1;
                literal_start = cursor;
            }
            // The closing `%` may open the next token.
            None => cursor = close,
        }
    }

    if literal_start < skeleton.len() {
        out.push(Segment::Text(&skeleton[literal_start..]));
    }
    out
}

/// Substitute every placeholder of `skeleton` from `table`.
///
/// Substituted text is never rescanned.
pub fn fill(skeleton: &str, table: &SubstitutionTable) -> String {
    let mut out = String::with_capacity(skeleton.len() * 2);
    for segment in segments(skeleton) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Slot(placeholder) => out.push_str(table.get(placeholder)),
        }
    }
    out
}

/// `%NAME%` tokens (uppercase letters, digits, underscores) left in `text`.
pub fn unexpanded_tokens(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(open) = text[cursor..].find('%').map(|i| cursor + i) {
        let Some(close) = text[open + 1..].find('%').map(|i| open + 1 + i) else {
            break;
        };
        let name = &text[open + 1..close];
        let is_token = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_');
        if is_token {
            found.push(&text[open..=close]);
            cursor = close + 1;
        } else {
            cursor = close;
        }
    }
    found
}
