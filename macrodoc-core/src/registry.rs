use std::collections::HashMap;
use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::Deserialize;

/// Explicit registry of macro-capable classes.
///
/// Nothing here reflects the host project at runtime: classes that support
/// dynamically-attached methods (Laravel's `Macroable` and friends) are
/// declared to the registry, each with its ordered macro table. The
/// capability query is [`class_macros`](Self::class_macros); a class absent
/// from the registry is simply not macro-capable.
///
/// The registry is populated programmatically (embedders) or from the JSON
/// macro manifest (the CLI path, see [`crate::manifest`]).
#[derive(Debug, Default)]
pub struct MacroRegistry {
    classes: HashMap<String, ClassMacros>,
}

impl MacroRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a class as macro-capable. Its macro table starts empty; a class
    /// registered but never given macros is skipped silently when the
    /// helper is built.
    pub fn register(&mut self, class: impl Into<String>) -> &mut Self {
        self.classes.entry(class.into()).or_default();
        self
    }

    /// Append a macro to a class's table, marking the class capable if it
    /// was not already. Macros keep insertion order.
    pub fn add_macro(&mut self, class: impl Into<String>, def: MacroDef) -> &mut Self {
        self.classes.entry(class.into()).or_default().push(def);
        self
    }

    /// The capability query: `Some` iff the class was registered.
    pub fn class_macros(&self, class: &str) -> Option<&ClassMacros> {
        self.classes.get(class)
    }

    /// Whether the class was registered as macro-capable.
    pub fn is_macroable(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Number of registered (macro-capable) classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// One registered class's macro table, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ClassMacros {
    macros: Vec<MacroDef>,
}

impl ClassMacros {
    pub fn macros(&self) -> &[MacroDef] {
        &self.macros
    }

    pub fn push(&mut self, def: MacroDef) {
        self.macros.push(def);
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }
}

/// Everything the generator needs to know about one macro: the signature to
/// format and the definition site for the `@see` tags.
#[derive(Debug, Clone, Deserialize)]
pub struct MacroDef {
    /// Macro name, i.e. the method name the IDE should offer.
    pub name: String,
    /// Declared parameters, in declaration order.
    #[serde(rename = "parameters", default)]
    pub params: Vec<ParamDef>,
    /// The macro closure's own doc comment, if any. Scanned for `@return`.
    #[serde(default)]
    pub doc: Option<String>,
    /// Class in whose scope the closure was defined.
    pub defined_by: String,
    /// File defining the closure. Absolute paths are made relative to the
    /// project root when the doc block is built.
    pub file: String,
    pub start_line: u32,
    pub end_line: u32,
}

/// One declared parameter of a macro.
#[derive(Debug, Clone, Deserialize)]
pub struct ParamDef {
    pub name: String,
    /// Declared type hint, or `None` for an untyped parameter.
    #[serde(rename = "type", default)]
    pub type_hint: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub variadic: bool,
    /// Declared default value. `None` means "no default recorded", which is
    /// distinct from an explicit `null` default.
    #[serde(default, deserialize_with = "some_default_value")]
    pub default: Option<DefaultValue>,
}

/// The closed set of default-value literals the formatter can render.
///
/// Deliberately narrower than "format any runtime value": anything outside
/// this set is a malformed manifest entry, not something to stringify.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    EmptyArray,
}

impl<'de> Deserialize<'de> for DefaultValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DefaultValueVisitor;

        impl<'de> Visitor<'de> for DefaultValueVisitor {
            type Value = DefaultValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("null, a boolean, a number, a string, or an empty sequence")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(DefaultValue::Null)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(DefaultValue::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(DefaultValue::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i64::try_from(v)
                    .map(DefaultValue::Int)
                    .map_err(|_| de::Error::custom("integer default out of range"))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(DefaultValue::Float(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(DefaultValue::Str(v.to_string()))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom(
                        "only the empty sequence is a supported default",
                    ));
                }
                Ok(DefaultValue::EmptyArray)
            }
        }

        deserializer.deserialize_any(DefaultValueVisitor)
    }
}

/// Force a present JSON value through [`DefaultValue`]'s deserializer.
///
/// With plain `Option<DefaultValue>`, serde would map a present `null` to
/// `None`; routing through this keeps "field absent" (no default) distinct
/// from "field is null" (an explicit `null` default).
fn some_default_value<'de, D>(deserializer: D) -> Result<Option<DefaultValue>, D::Error>
where
    D: Deserializer<'de>,
{
    DefaultValue::deserialize(deserializer).map(Some)
}
