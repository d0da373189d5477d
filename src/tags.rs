//! Tag vocabulary extension: aliased tags bound to existing digesters, plus
//! the class-namespacing and yield-accumulating overrides.

use std::collections::BTreeMap;

use crate::types::ParamDescriptor;

/// Every alias installed by [`TagRegistry::register_aliases`].
const ALIASES: &[(&str, TagHandler)] = &[
    ("accessor", TagHandler::Property),
    ("action", TagHandler::Method),
    ("argument", TagHandler::Method),
    ("class", TagHandler::Class),
    ("computed", TagHandler::Property),
    ("const", TagHandler::Property),
    ("constant", TagHandler::Property),
    ("export", TagHandler::Recognized),
    ("field", TagHandler::Property),
    ("function", TagHandler::Method),
    ("variable", TagHandler::Property),
    ("yield", TagHandler::Yield),
];

/// The partially-built entry an engine hands to a digester.
#[derive(Debug, Clone, Default)]
pub struct DigestTarget {
    /// Class identifier the surrounding block belongs to, once digested.
    pub current_class: Option<String>,
    /// Path of the file the comment block originates from.
    pub file: String,
    /// Kind of member the block documents, once digested.
    pub itemtype: Option<ItemType>,
    /// Name of the member the block documents, once digested.
    pub name: Option<String>,
    /// Accumulated yield descriptors, in order of appearance.
    /// Distinct from any return-value field.
    pub yields: Vec<ParamDescriptor>,
}

impl DigestTarget {
    /// A fresh target for a comment block in the given file.
    pub fn for_file(file: impl Into<String>) -> Self {
        return Self { file: file.into(), ..Self::default() };
    }
}

/// Kind of documented member a digester records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    /// A callable member.
    Method,
    /// A value member.
    Property,
}

/// Semantic digester a recognized tag is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagHandler {
    /// Namespaces the declared class by its originating file, then records
    /// it as the current class.
    Class,
    /// Records a callable member.
    Method,
    /// Records a value member.
    Property,
    /// Tag is accepted without recording anything.
    Recognized,
    /// Appends one parameter-shaped descriptor onto the target's yields.
    Yield,
}

impl TagHandler {
    /// Apply this digester to a tag's value against the given target.
    /// Never fails: digestion is a pure write into the target.
    pub fn digest(self, value: &str, target: &mut DigestTarget) {
        match self {
            // Two same-named classes declared in different files must stay
            // distinct entities, so the declared value is namespaced by its
            // originating file before the default class behavior.
            TagHandler::Class => {
                target.current_class = Some(format!("{}~{value}", target.file));
            },
            TagHandler::Method => {
                target.itemtype = Some(ItemType::Method);
                target.name = Some(value.to_string());
            },
            TagHandler::Property => {
                target.itemtype = Some(ItemType::Property);
                target.name = Some(value.to_string());
            },
            TagHandler::Recognized => {},
            // Delegates to the param digest against the yields sequence.
            TagHandler::Yield => digest_param_into(&mut target.yields, value),
        }
    }
}

/// Recognized-tag list and tag-to-digester bindings, handed to the engine
/// through [`crate::engine::ExtractOptions`]. An owned value — nothing
/// process-wide is mutated.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    handlers: BTreeMap<String, TagHandler>,
}

impl TagRegistry {
    /// An empty registry. The engine's builtin vocabulary is merged on its
    /// side; this only carries the extension.
    pub fn new() -> Self {
        return Self::default();
    }

    /// The digester bound to a tag, if the tag is registered here.
    pub fn handler_for(&self, tag: &str) -> Option<TagHandler> {
        return self.handlers.get(tag).copied();
    }

    /// Whether a tag is in the extended recognized list. Unrecognized tags
    /// surface as engine "unknown tag:" warnings, which the warning filter
    /// suppresses downstream.
    pub fn is_recognized(&self, tag: &str) -> bool {
        return self.handlers.contains_key(tag);
    }

    /// Install the alias table. Idempotent — safe to call more than once.
    pub fn register_aliases(&mut self) {
        for (tag, handler) in ALIASES {
            self.handlers.insert((*tag).to_string(), *handler);
        }
    }
}

/// Parse a tag value and append the resulting descriptor.
/// Value syntax: optional braced `{Type}`, then a name token, then
/// free-text description.
fn digest_param_into(params: &mut Vec<ParamDescriptor>, value: &str) {
    let trimmed = value.trim();

    let (param_type, rest) = match trimmed.strip_prefix('{') {
        Some(after_brace) => match after_brace.split_once('}') {
            Some((ty, rest)) => (Some(ty.trim().to_string()), rest.trim_start()),
            None => (None, trimmed),
        },
        None => (None, trimmed),
    };

    let (name, description) = match rest.split_once(char::is_whitespace) {
        Some((name, description)) => (name.to_string(), description.trim().to_string()),
        None => (rest.to_string(), String::new()),
    };

    params.push(ParamDescriptor { description, name, param_type });
}
