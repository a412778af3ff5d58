//! Record types backing the listing pages.
//!
//! Every record kind is a flat, fixed-schema structure that is loaded once from a
//! JSON fixture and never mutated afterwards.

mod lenient;
mod news;
mod person;
mod project;
mod publication;

use std::{fmt, str::FromStr};

pub use news::{NewsArticle, NewsCategory};
pub use person::{Person, PersonType};
pub use project::{Project, ProjectStatus};
pub use publication::{Publication, PublicationType};
use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

/// Declares a closed enumeration whose variants are spelled in fixtures exactly as
/// given, with `Display`/`FromStr` using the same spelling.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Spelling used in fixtures and selector values.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| $crate::error::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

pub(crate) use labelled_enum;

/// The four kinds of listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    News,
    Publications,
    Projects,
    People,
}

impl RecordKind {
    /// Every kind, in the order the site lists them.
    pub const ALL: [Self; 4] = [Self::News, Self::Publications, Self::Projects, Self::People];

    /// Plural noun, also the key of the records array in the fixture file.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Publications => "publications",
            Self::Projects => "projects",
            Self::People => "people",
        }
    }

    /// Singular noun used in count lines ("1 publication found").
    pub fn singular(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Publications => "publication",
            Self::Projects => "project",
            Self::People => "person",
        }
    }

    /// Noun for a given number of records.
    pub fn noun_for(&self, count: usize) -> &'static str {
        if count == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

impl FromStr for RecordKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.plural().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "record kind",
                value: s.to_string(),
                expected: "news, publications, projects, people".to_string(),
            })
    }
}
