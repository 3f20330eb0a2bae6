//! The universal decoded-entity representation.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// Default indentation unit for [`ResponseObject::render`].
const RENDER_SEP: &str = "    ";

/// Default line separator for [`ResponseObject::render`].
const RENDER_NL: &str = "\n";

/// One decoded field of a [`ResponseObject`].
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// A scalar, null, or a structure the shape did not declare, kept
    /// exactly as received.
    Raw(Value),
    /// A nested object decoded with its declared shape.
    Object(ResponseObject),
    /// An ordered list of objects decoded with their declared shape.
    Objects(Vec<ResponseObject>),
}

impl FieldValue {
    /// The raw JSON value, when this field was passed through undecoded.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Raw(value) => Some(value),
            _ => None,
        }
    }

    /// The nested decoded object, when this field holds one.
    pub fn as_object(&self) -> Option<&ResponseObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The decoded object list, when this field holds one.
    pub fn as_objects(&self) -> Option<&[ResponseObject]> {
        match self {
            Self::Objects(objects) => Some(objects),
            _ => None,
        }
    }
}

/// A decoded JSON object: the fixed set of fields its shape declares plus
/// an ordered sidecar of anything the vendor sent that the shape did not
/// declare.
///
/// Vendor APIs grow fields over time, so undeclared keys are preserved
/// rather than dropped, and [`get`](Self::get) reads declared and extra
/// fields through the same accessor, so callers cannot tell them apart.
///
/// A missing declared field is absent (`get` returns `None`), which is
/// observable as distinct from a field present with `null` or with an
/// empty list. Objects are immutable once decoded.
#[derive(Debug, Clone)]
pub struct ResponseObject {
    shape_name: &'static str,
    success: bool,
    declared: IndexMap<&'static str, FieldValue>,
    extra: IndexMap<String, FieldValue>,
}

impl ResponseObject {
    pub(crate) fn new(shape_name: &'static str) -> Self {
        Self {
            shape_name,
            success: true,
            declared: IndexMap::new(),
            extra: IndexMap::new(),
        }
    }

    pub(crate) fn set_success(&mut self, success: bool) {
        self.success = success;
    }

    pub(crate) fn insert_declared(&mut self, name: &'static str, value: FieldValue) {
        self.declared.insert(name, value);
    }

    pub(crate) fn insert_extra(&mut self, name: String, value: FieldValue) {
        self.extra.insert(name, value);
    }

    pub(crate) fn take_field(&mut self, name: &str) -> Option<FieldValue> {
        self.declared
            .shift_remove(name)
            .or_else(|| self.extra.shift_remove(name))
    }

    /// Name of the shape this object was decoded with.
    pub fn shape_name(&self) -> &'static str {
        self.shape_name
    }

    /// The success flag: honored from a boolean `success` key in the raw
    /// payload, true otherwise. The key itself never appears as a field.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Look up a field by its JSON key, declared or not.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.declared.get(name).or_else(|| self.extra.get(name))
    }

    /// Raw value of a passthrough field.
    pub fn get_value(&self, name: &str) -> Option<&Value> {
        self.get(name)?.as_value()
    }

    /// String field, when present and a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get_value(name)?.as_str()
    }

    /// Integer field, when present and representable as `i64`.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get_value(name)?.as_i64()
    }

    /// Floating-point field, when present and numeric.
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get_value(name)?.as_f64()
    }

    /// Boolean field, when present and a boolean.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get_value(name)?.as_bool()
    }

    /// Nested decoded object field.
    pub fn get_object(&self, name: &str) -> Option<&ResponseObject> {
        self.get(name)?.as_object()
    }

    /// Nested decoded object-list field.
    pub fn get_objects(&self, name: &str) -> Option<&[ResponseObject]> {
        self.get(name)?.as_objects()
    }

    /// All present field names, declared first, then extras, in decode
    /// order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.declared
            .keys()
            .copied()
            .chain(self.extra.keys().map(String::as_str))
    }

    /// Canonical indented rendering: shape name and each present field on
    /// its own line, recursing into nested objects and lists. A pure
    /// function of current state, intended for logs and test assertions.
    ///
    /// `level` is the starting indentation depth; `sep` the indentation
    /// unit; `nl` the line separator. [`Display`](fmt::Display) uses
    /// level 0, four spaces and `\n`.
    pub fn render(&self, level: usize, sep: &str, nl: &str) -> String {
        let fields: Vec<String> = self
            .declared
            .iter()
            .map(|(name, value)| (*name, value))
            .chain(self.extra.iter().map(|(name, value)| (name.as_str(), value)))
            .map(|(name, value)| {
                format!(
                    "{}{name} = {}",
                    sep.repeat(level + 1),
                    render_value(value, level + 1, sep, nl)
                )
            })
            .collect();
        if fields.is_empty() {
            return format!("{}()", self.shape_name);
        }
        format!(
            "{}({nl}{}{nl}{})",
            self.shape_name,
            fields.join(&format!(",{nl}")),
            sep.repeat(level)
        )
    }
}

fn render_value(value: &FieldValue, level: usize, sep: &str, nl: &str) -> String {
    match value {
        FieldValue::Raw(raw) => raw.to_string(),
        FieldValue::Object(object) => object.render(level, sep, nl),
        FieldValue::Objects(objects) => {
            if objects.is_empty() {
                return "[]".to_owned();
            }
            let inner = sep.repeat(level + 1);
            let rendered: Vec<String> = objects
                .iter()
                .map(|object| format!("{inner}{}", object.render(level + 1, sep, nl)))
                .collect();
            format!(
                "[{nl}{}{nl}{}]",
                rendered.join(&format!(",{nl}")),
                sep.repeat(level)
            )
        }
    }
}

impl fmt::Display for ResponseObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0, RENDER_SEP, RENDER_NL))
    }
}
