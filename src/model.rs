//! Data structures describing the classified content of a source document.
//!
//! The types in this module form the intermediate representation between the
//! line classifier and the document renderer.  They intentionally avoid
//! referencing the rendering crate so classification stays a pure text
//! transformation that can be inspected and tested without touching any PDF
//! machinery.

/// Tag assigned to a source line by the classifier.
///
/// The set is closed: every line of input maps to exactly one of these
/// variants, and the renderer has a fixed treatment for each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    /// Blank line; rendered as a small vertical gap.
    Spacer,
    /// Document title (`# ` prefix).
    Title,
    /// Section heading (`## ` prefix).
    Section,
    /// Subsection heading (`### ` prefix).
    Subsection,
    /// Horizontal rule (`---` prefix); rendered as an underscore run.
    Separator,
    /// Bulleted list entry (`- ` prefix).
    ListItem,
    /// Whole-line bold text.
    ///
    /// The classifier never produces this kind: lines that open with `**`
    /// markup classify as [`ContentKind::Normal`] and rely on inline
    /// formatting instead.  The renderer still accepts it for items built
    /// by hand.
    Bold,
    /// Body text, including lines carrying inline `**` markup.
    Normal,
}

/// A single classified unit of document content.
///
/// Items carry their payload text except for the two purely visual kinds
/// ([`ContentKind::Spacer`] and [`ContentKind::Separator`]), which have none.
/// The constructors enforce that split so a payload can never be attached to
/// a kind that ignores it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentItem {
    kind: ContentKind,
    text: Option<String>,
}

impl ContentItem {
    /// Creates a spacer item for a blank source line.
    pub fn spacer() -> Self {
        Self {
            kind: ContentKind::Spacer,
            text: None,
        }
    }

    /// Creates a separator item for a horizontal rule line.
    pub fn separator() -> Self {
        Self {
            kind: ContentKind::Separator,
            text: None,
        }
    }

    /// Creates a document title item.
    pub fn title(text: impl Into<String>) -> Self {
        Self::tagged(ContentKind::Title, text)
    }

    /// Creates a section heading item.
    pub fn section(text: impl Into<String>) -> Self {
        Self::tagged(ContentKind::Section, text)
    }

    /// Creates a subsection heading item.
    pub fn subsection(text: impl Into<String>) -> Self {
        Self::tagged(ContentKind::Subsection, text)
    }

    /// Creates a bulleted list entry item.
    pub fn list_item(text: impl Into<String>) -> Self {
        Self::tagged(ContentKind::ListItem, text)
    }

    /// Creates a whole-line bold item.
    ///
    /// See [`ContentKind::Bold`] for why classification never takes this
    /// path.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::tagged(ContentKind::Bold, text)
    }

    /// Creates a body text item.
    pub fn normal(text: impl Into<String>) -> Self {
        Self::tagged(ContentKind::Normal, text)
    }

    fn tagged(kind: ContentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
        }
    }

    /// Returns the tag assigned to this item.
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Returns the payload text, if this kind carries one.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
