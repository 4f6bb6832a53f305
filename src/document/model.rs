//! Normalized document tree extracted from Javadoc pages.

use serde::{Deserialize, Serialize};

/// Declared kind of a Java type, as stated in the class page title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

/// Title prefixes used by the different doclet generations, longest first
const TITLE_PREFIXES: &[(&str, ClassKind)] = &[
    ("Annotation Interface ", ClassKind::Annotation),
    ("Annotation Type ", ClassKind::Annotation),
    ("Enum Class ", ClassKind::Enum),
    ("Record Class ", ClassKind::Record),
    ("Interface ", ClassKind::Interface),
    ("Class ", ClassKind::Class),
    ("Enum ", ClassKind::Enum),
    ("Record ", ClassKind::Record),
];

impl ClassKind {
    /// Heading label used in the rendered document
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Interface => "Interface",
            Self::Enum => "Enum",
            Self::Annotation => "Annotation",
            Self::Record => "Record",
        }
    }

    /// Split a page title such as `"Enum Class Color"` into kind and name.
    ///
    /// Type parameters are dropped from the name (`"Class Box<T>"` → `Box`).
    #[must_use]
    pub fn parse_title(title: &str) -> Option<(Self, String)> {
        let title = title.trim();
        TITLE_PREFIXES.iter().find_map(|(prefix, kind)| {
            let rest = title.strip_prefix(prefix)?;
            let name = rest.split('<').next().unwrap_or(rest).trim();
            (!name.is_empty()).then(|| (*kind, name.to_string()))
        })
    }

    /// Interpret a summary-table link title such as `"interface in com.example"`
    #[must_use]
    pub fn from_link_title(title: &str) -> Option<Self> {
        let lowered = title.trim().to_ascii_lowercase();
        let word = lowered.split(" in ").next()?.trim();
        match word {
            "class" | "exception class" | "error class" => Some(Self::Class),
            "interface" => Some(Self::Interface),
            "enum" | "enum class" => Some(Self::Enum),
            "annotation" | "annotation interface" | "annotation type" => Some(Self::Annotation),
            "record" | "record class" => Some(Self::Record),
            _ => None,
        }
    }
}

/// One formal parameter of a constructor or method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
    /// Text of the matching "Parameters:" note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Constructor,
    Method,
}

/// Reference to an inherited member, matched by name only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    pub member: String,
    /// Declaring ancestor when the page names it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// A constructor or method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDoc {
    pub kind: MemberKind,
    pub name: String,
    /// Full declaration line as shown on the page
    pub signature: String,
    pub parameters: Vec<Parameter>,
    /// Always `None` for constructors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
    /// Text of the "Returns:" note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub throws: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<MemberRef>,
}

impl MemberDoc {
    /// `name(Type, Type)`, used as the member heading
    #[must_use]
    pub fn display_name(&self) -> String {
        let types: Vec<&str> = self
            .parameters
            .iter()
            .map(|p| p.type_name.as_str())
            .collect();
        format!("{}({})", self.name, types.join(", "))
    }
}

/// A field or enum constant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDoc {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Everything extracted from one class page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDoc {
    pub name: String,
    pub kind: ClassKind,
    /// Name of the owning package (back-reference only)
    pub package: String,
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ancestor type names, root first, ending with this type
    pub inheritance: Vec<String>,
    pub fields: Vec<FieldDoc>,
    pub constructors: Vec<MemberDoc>,
    pub methods: Vec<MemberDoc>,
}

impl ClassDoc {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ClassKind, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            package: package.into(),
            source_url: String::new(),
            description: None,
            inheritance: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }
}

/// A package and its classes in navigation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub classes: Vec<ClassDoc>,
}

impl Package {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: Vec::new(),
        }
    }
}

/// A class page that could not be fetched or parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedClass {
    pub package: String,
    pub class: String,
    pub url: String,
    pub reason: String,
}

/// Table-of-contents node; packages at the top level, classes below
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub text: String,
    pub anchor: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents {
    pub entries: Vec<TocEntry>,
}

impl TableOfContents {
    /// Every anchor in document order, packages before their classes
    pub fn anchors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().flat_map(|entry| {
            std::iter::once(entry.anchor.as_str())
                .chain(entry.children.iter().map(|child| child.anchor.as_str()))
        })
    }
}

/// The assembled document, immutable once built
///
/// `toc.entries[i]` describes `packages[i]` and its `children[j]` describe
/// `packages[i].classes[j]`; [`assemble`](super::assemble) is the only way
/// to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub(crate) title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) source_url: Option<String>,
    pub(crate) packages: Vec<Package>,
    pub(crate) toc: TableOfContents,
    pub(crate) skipped: Vec<SkippedClass>,
}

impl Document {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    #[must_use]
    pub fn toc(&self) -> &TableOfContents {
        &self.toc
    }

    #[must_use]
    pub fn skipped(&self) -> &[SkippedClass] {
        &self.skipped
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.packages.iter().map(|p| p.classes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_prefixes_cover_all_doclet_generations() {
        assert_eq!(
            ClassKind::parse_title("Class Foo"),
            Some((ClassKind::Class, "Foo".into()))
        );
        assert_eq!(
            ClassKind::parse_title("Enum Class Color"),
            Some((ClassKind::Enum, "Color".into()))
        );
        assert_eq!(
            ClassKind::parse_title("Annotation Type Marker"),
            Some((ClassKind::Annotation, "Marker".into()))
        );
        assert_eq!(
            ClassKind::parse_title("Interface Repository<T, ID>"),
            Some((ClassKind::Interface, "Repository".into()))
        );
        assert_eq!(ClassKind::parse_title("Package com.example"), None);
        assert_eq!(ClassKind::parse_title("Class "), None);
    }

    #[test]
    fn link_titles_give_kind_hints() {
        assert_eq!(
            ClassKind::from_link_title("interface in com.example"),
            Some(ClassKind::Interface)
        );
        assert_eq!(
            ClassKind::from_link_title("enum class in com.example"),
            Some(ClassKind::Enum)
        );
        assert_eq!(ClassKind::from_link_title("package"), None);
    }

    #[test]
    fn display_name_lists_parameter_types() {
        let member = MemberDoc {
            kind: MemberKind::Method,
            name: "put".into(),
            signature: "public V put(K key, V value)".into(),
            parameters: vec![
                Parameter {
                    name: "key".into(),
                    type_name: "K".into(),
                    description: None,
                },
                Parameter {
                    name: "value".into(),
                    type_name: "V".into(),
                    description: None,
                },
            ],
            return_type: Some("V".into()),
            returns: None,
            throws: Vec::new(),
            description: None,
            overrides: None,
        };
        assert_eq!(member.display_name(), "put(K, V)");
    }
}
