use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::Serialize;

use super::{NotFound, Result};

pub const GALLERY_ROOT: &str = "/gallery";

/// Bytes escaped inside one path segment: the address delimiters, `%`
/// itself, and what a browser would escape anyway.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Every addressable page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    Home,
    Category {
        category: String,
    },
    Subcategory {
        category: String,
        subcategory: String,
    },
    Image {
        category: String,
        subcategory: String,
        position: usize,
    },
}

impl Route {
    /// Parses an address such as `/gallery/photos/abstracts/2`.
    ///
    /// Query strings, fragments and one trailing slash are ignored. Segments
    /// are percent-decoded. Empty segments, invalid UTF-8 and unknown
    /// prefixes are rejected. Whether the named category or image exists is
    /// left to the catalog lookups.
    pub fn parse(address: &str) -> Result<Self> {
        let unknown = || NotFound::UnknownRoute(address.to_string());

        let path = address
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let Some(path) = path.strip_prefix('/') else {
            return Err(unknown());
        };
        let path = path.strip_suffix('/').unwrap_or(path);
        if path.is_empty() {
            return Ok(Self::Home);
        }

        let segments = path
            .split('/')
            .map(|segment| {
                if segment.is_empty() {
                    return None;
                }
                percent_decode_str(segment)
                    .decode_utf8()
                    .ok()
                    .map(|decoded| decoded.into_owned())
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(unknown)?;

        match segments.as_slice() {
            [root, category] if root == "gallery" => Ok(Self::Category {
                category: category.clone(),
            }),
            [root, category, subcategory] if root == "gallery" => Ok(Self::Subcategory {
                category: category.clone(),
                subcategory: subcategory.clone(),
            }),
            [root, category, subcategory, position] if root == "gallery" => Ok(Self::Image {
                category: category.clone(),
                subcategory: subcategory.clone(),
                position: parse_position(position)?,
            }),
            _ => Err(unknown()),
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Home => None,
            Self::Category { category }
            | Self::Subcategory { category, .. }
            | Self::Image { category, .. } => Some(category),
        }
    }

    /// The page one level up: image → subcategory → category → home.
    pub fn parent(&self) -> Self {
        match self {
            Self::Home | Self::Category { .. } => Self::Home,
            Self::Subcategory { category, .. } => Self::Category {
                category: category.clone(),
            },
            Self::Image {
                category,
                subcategory,
                ..
            } => Self::Subcategory {
                category: category.clone(),
                subcategory: subcategory.clone(),
            },
        }
    }

    pub fn address(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Category { category } => write!(f, "{GALLERY_ROOT}/{}", segment(category)),
            Self::Subcategory {
                category,
                subcategory,
            } => write!(
                f,
                "{GALLERY_ROOT}/{}/{}",
                segment(category),
                segment(subcategory)
            ),
            Self::Image {
                category,
                subcategory,
                position,
            } => write!(
                f,
                "{GALLERY_ROOT}/{}/{}/{position}",
                segment(category),
                segment(subcategory)
            ),
        }
    }
}

fn segment(name: &str) -> impl fmt::Display + '_ {
    utf8_percent_encode(name, SEGMENT)
}

impl FromStr for Route {
    type Err = NotFound;

    fn from_str(address: &str) -> Result<Self> {
        Self::parse(address)
    }
}

/// A position segment is a non-empty run of ASCII digits that fits `usize`.
/// Signs, whitespace and fractions are all rejected.
pub fn parse_position(text: &str) -> Result<usize> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(NotFound::InvalidPosition(text.to_string()));
    }
    text.parse::<usize>()
        .map_err(|_| NotFound::InvalidPosition(text.to_string()))
}
