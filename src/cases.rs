use crate::text::tokenize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier case conventions built from [`tokenize`] output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    /// `getHttpResponse`
    Camel,
    /// `GetHttpResponse`
    Pascal,
    /// `get_http_response`
    #[default]
    Snake,
    /// `GET_HTTP_RESPONSE`
    #[serde(alias = "screaming_snake", alias = "upper_snake")]
    Constant,
    /// `get-http-response`
    #[serde(alias = "dash")]
    Kebab,
    /// `Get-Http-Response`
    Train,
    /// `Get Http Response`
    Title,
}

impl Case {
    pub const ALL: [Case; 7] = [
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::Constant,
        Case::Kebab,
        Case::Train,
        Case::Title,
    ];

    /// Convert `text` into this case.
    pub fn apply(self, text: &str) -> String {
        let words = tokenize(text);
        match self {
            Case::Camel => words
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { w.to_ascii_lowercase() } else { capitalize(w) })
                .collect(),
            Case::Pascal => words.iter().map(|w| capitalize(w)).collect(),
            Case::Snake => join(&words, "_", str::to_ascii_lowercase),
            Case::Constant => join(&words, "_", str::to_ascii_uppercase),
            Case::Kebab => join(&words, "-", str::to_ascii_lowercase),
            Case::Train => join(&words, "-", capitalize),
            Case::Title => join(&words, " ", capitalize),
        }
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" => Ok(Case::Camel),
            "pascal" => Ok(Case::Pascal),
            "snake" => Ok(Case::Snake),
            "constant" | "screaming_snake" | "upper_snake" => Ok(Case::Constant),
            "kebab" | "dash" => Ok(Case::Kebab),
            "train" => Ok(Case::Train),
            "title" => Ok(Case::Title),
            _ => Err(format!("Unknown case: {}", s)),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::Constant => "constant",
            Case::Kebab => "kebab",
            Case::Train => "train",
            Case::Title => "title",
        };
        write!(f, "{}", name)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}

fn join(words: &[String], sep: &str, transform: impl Fn(&str) -> String) -> String {
    words.iter().map(|w| transform(w)).collect::<Vec<_>>().join(sep)
}

pub fn to_camel(text: &str) -> String {
    Case::Camel.apply(text)
}

pub fn to_pascal(text: &str) -> String {
    Case::Pascal.apply(text)
}

pub fn to_snake(text: &str) -> String {
    Case::Snake.apply(text)
}

pub fn to_constant(text: &str) -> String {
    Case::Constant.apply(text)
}

pub fn to_kebab(text: &str) -> String {
    Case::Kebab.apply(text)
}

pub fn to_train(text: &str) -> String {
    Case::Train.apply(text)
}

pub fn to_title(text: &str) -> String {
    Case::Title.apply(text)
}
