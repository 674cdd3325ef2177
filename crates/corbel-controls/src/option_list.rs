//! Option-list model for the select box.
//!
//! The option list is immutable input owned by the host: the select box only
//! reads it, and the host replaces it wholesale when the options change. The
//! [`OptionModel`] trait is the seam for hosts that back their options with
//! custom storage; [`OptionList`] is the plain `Vec`-backed implementation.

use thiserror::Error;

/// A single selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Identifier, unique within a list.
    pub id: String,
    /// Display string.
    pub label: String,
    /// Disabled options are shown but cannot be selected.
    pub disabled: bool,
}

impl SelectOption {
    /// Create an enabled option.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Set the disabled flag using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Errors from [`OptionList::validated`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionListError {
    /// Two options share an id.
    #[error("duplicate option id `{0}`")]
    DuplicateId(String),
    /// An option has an empty id.
    #[error("option id must not be empty")]
    EmptyId,
}

/// Trait for providing options to a select box.
///
/// Implement this to back the option list with a custom data source. All
/// lookup methods have order-preserving defaults over
/// [`option_at`](Self::option_at).
pub trait OptionModel: Send + Sync {
    /// Number of options in the model.
    fn len(&self) -> usize;

    /// The option at `index`, or `None` past the end.
    fn option_at(&self, index: usize) -> Option<&SelectOption>;

    /// Whether the model holds no options.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find an option by id. First match wins when ids collide.
    fn find(&self, id: &str) -> Option<&SelectOption> {
        self.position_of(id).and_then(|i| self.option_at(i))
    }

    /// The index of the option with the given id.
    fn position_of(&self, id: &str) -> Option<usize> {
        (0..self.len()).find(|&i| self.option_at(i).is_some_and(|o| o.id == id))
    }

    /// Whether the option exists and is enabled.
    fn is_selectable(&self, id: &str) -> bool {
        self.find(id).is_some_and(|o| !o.disabled)
    }
}

/// An ordered, immutable list of options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    options: Vec<SelectOption>,
}

impl OptionList {
    /// Create a list from the given options.
    ///
    /// Lenient: duplicate ids are kept and lookups resolve to the first
    /// match. Use [`validated`](Self::validated) to reject them instead.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options }
    }

    /// Create an empty list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a list, rejecting empty and duplicate ids.
    pub fn validated(options: Vec<SelectOption>) -> Result<Self, OptionListError> {
        for (i, option) in options.iter().enumerate() {
            if option.id.is_empty() {
                return Err(OptionListError::EmptyId);
            }
            if options[..i].iter().any(|o| o.id == option.id) {
                return Err(OptionListError::DuplicateId(option.id.clone()));
            }
        }
        Ok(Self { options })
    }

    /// The options in order.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }
}

impl OptionModel for OptionList {
    fn len(&self) -> usize {
        self.options.len()
    }

    fn option_at(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|o| o.id == id)
    }
}

impl From<Vec<SelectOption>> for OptionList {
    fn from(options: Vec<SelectOption>) -> Self {
        Self::new(options)
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for OptionList {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(pairs: T) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(id, label)| SelectOption::new(id, label))
                .collect(),
        )
    }
}
