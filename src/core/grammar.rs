/// Chapter-title grammar: template parsing, slot resolution and
/// position-keyed template groups.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::core::prng::Lcg;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("template parse error: {0}")]
    TemplateParse(String),
    #[error("template '{template}' uses unknown slot '{slot}'")]
    UnknownSlot { template: String, slot: String },
    #[error("slot '{0}' has no candidates")]
    EmptySlot(String),
    #[error("template group {0} is empty")]
    EmptyGroup(usize),
    #[error("no template group 0 to fall back to")]
    MissingDefaultGroup,
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// Placeholder filled from the slot table of the same name: `{NOUN}`.
    Slot(String),
}

/// A parsed template: a sequence of segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parse a template string into a sequence of segments.
    ///
    /// Syntax:
    /// - `{NAME}` → `Slot`
    /// - `{{` → literal `{`, `}}` → literal `}`
    /// - Everything else → `Literal`
    pub fn parse(input: &str) -> Result<Template, GrammarError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            if chars[i] == '{' {
                if i + 1 < len && chars[i + 1] == '{' {
                    literal_buf.push('{');
                    i += 2;
                    continue;
                }

                if !literal_buf.is_empty() {
                    segments.push(TemplateSegment::Literal(std::mem::take(&mut literal_buf)));
                }

                let start = i + 1;
                let mut end = start;
                while end < len && chars[end] != '}' {
                    if chars[end] == '{' {
                        return Err(GrammarError::TemplateParse(format!(
                            "nested braces in '{input}'"
                        )));
                    }
                    end += 1;
                }

                if end == len {
                    return Err(GrammarError::TemplateParse(format!(
                        "unclosed brace in '{input}'"
                    )));
                }

                let name: String = chars[start..end].iter().collect();
                if name.is_empty() {
                    return Err(GrammarError::TemplateParse(format!(
                        "empty braces in '{input}'"
                    )));
                }
                if name.chars().any(char::is_whitespace) {
                    return Err(GrammarError::TemplateParse(format!(
                        "whitespace in slot name '{{{name}}}' in '{input}'"
                    )));
                }

                segments.push(TemplateSegment::Slot(name));
                i = end + 1;
            } else if chars[i] == '}' {
                if i + 1 < len && chars[i + 1] == '}' {
                    literal_buf.push('}');
                    i += 2;
                    continue;
                }
                return Err(GrammarError::TemplateParse(format!(
                    "unmatched closing brace in '{input}'"
                )));
            } else {
                literal_buf.push(chars[i]);
                i += 1;
            }
        }

        if !literal_buf.is_empty() {
            segments.push(TemplateSegment::Literal(literal_buf));
        }

        Ok(Template { segments })
    }

    /// Slot names in order of appearance, repeats included.
    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            TemplateSegment::Slot(name) => Some(name.as_str()),
            TemplateSegment::Literal(_) => None,
        })
    }
}

/// Template segment with its slot resolved to an index into the slot tables.
#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Slot(usize),
}

/// Chapter-title templates grouped by chapter position.
///
/// Construction resolves every slot, so rendering can never leave a
/// placeholder behind.
#[derive(Debug, Clone)]
pub struct ChapterTitleGrammar {
    groups: BTreeMap<usize, Vec<Vec<Piece>>>,
    fallback: Vec<Vec<Piece>>,
    slots: Vec<Vec<String>>,
}

impl ChapterTitleGrammar {
    pub fn new(
        groups: &BTreeMap<usize, Vec<String>>,
        slots: &BTreeMap<String, Vec<String>>,
    ) -> Result<Self, GrammarError> {
        let mut slot_index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut slot_tables = Vec::with_capacity(slots.len());
        for (name, candidates) in slots {
            if candidates.is_empty() {
                return Err(GrammarError::EmptySlot(name.clone()));
            }
            slot_index.insert(name.as_str(), slot_tables.len());
            slot_tables.push(candidates.clone());
        }

        let mut compiled = BTreeMap::new();
        for (&position, templates) in groups {
            if templates.is_empty() {
                return Err(GrammarError::EmptyGroup(position));
            }
            let mut group = Vec::with_capacity(templates.len());
            for text in templates {
                let template = Template::parse(text)?;
                let mut pieces = Vec::with_capacity(template.segments.len());
                for segment in template.segments {
                    pieces.push(match segment {
                        TemplateSegment::Literal(s) => Piece::Text(s),
                        TemplateSegment::Slot(name) => match slot_index.get(name.as_str()) {
                            Some(&index) => Piece::Slot(index),
                            None => {
                                return Err(GrammarError::UnknownSlot {
                                    template: text.clone(),
                                    slot: name,
                                })
                            }
                        },
                    });
                }
                group.push(pieces);
            }
            compiled.insert(position, group);
        }

        let fallback = compiled
            .get(&0)
            .cloned()
            .ok_or(GrammarError::MissingDefaultGroup)?;

        Ok(Self {
            groups: compiled,
            fallback,
            slots: slot_tables,
        })
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Group key for a chapter position: `chapter mod group_count`.
    pub fn group_key(&self, chapter: usize) -> usize {
        chapter % self.groups.len()
    }

    /// Templates for a chapter position, falling back to group 0 when the
    /// computed key is not present (sparse group maps).
    fn group_for(&self, chapter: usize) -> &[Vec<Piece>] {
        self.groups
            .get(&self.group_key(chapter))
            .unwrap_or(&self.fallback)
    }

    /// Pick a template for `chapter` and fill its slots left to right, each
    /// occurrence drawing independently.
    pub fn render(&self, chapter: usize, rng: &mut Lcg) -> String {
        let template = rng.pick(self.group_for(chapter));
        let mut out = String::new();
        for piece in template {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Slot(index) => out.push_str(rng.pick::<String>(self.slots[*index].as_slice())),
            }
        }
        out
    }
}
