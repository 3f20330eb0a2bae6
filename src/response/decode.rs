//! Recursive shape-driven decoding of response bodies.
//!
//! [`decode`] walks a [`serde_json::Value`] against a [`Shape`],
//! producing [`ResponseObject`]s for declared nested fields and keeping
//! everything else as raw JSON. [`materialize`] is the status-aware
//! front door: non-2xx statuses become [`Error::Api`] before any shape
//! decoding happens.

use serde_json::Value;

use super::object::{FieldValue, ResponseObject};
use super::shape::{FieldKind, Shape};
use crate::error::{Error, ErrorResult, Result};

/// Outcome of decoding a JSON value against an optional shape.
#[derive(Debug)]
pub enum Decoded {
    /// A single decoded object.
    Object(ResponseObject),
    /// A top-level array of decoded objects.
    Objects(Vec<ResponseObject>),
    /// The body was not shaped (no shape supplied, or a scalar body).
    Raw(Value),
}

/// Decode a JSON value against `shape`. `item_shape` is threaded down to
/// any [`FieldKind::Items`] field encountered along the way.
///
/// With no shape the value passes through untouched. A top-level array is
/// decoded element-wise, each element against `shape`.
pub fn decode(
    value: Value,
    shape: Option<&'static Shape>,
    item_shape: Option<&'static Shape>,
) -> Result<Decoded> {
    let Some(shape) = shape else {
        return Ok(Decoded::Raw(value));
    };
    match value {
        Value::Object(map) => Ok(Decoded::Object(decode_object(map, shape, item_shape)?)),
        Value::Array(elements) => {
            let mut objects = Vec::with_capacity(elements.len());
            for element in elements {
                objects.push(decode_element(element, shape, item_shape)?);
            }
            Ok(Decoded::Objects(objects))
        }
        other => Ok(Decoded::Raw(other)),
    }
}

fn decode_object(
    map: serde_json::Map<String, Value>,
    shape: &'static Shape,
    item_shape: Option<&'static Shape>,
) -> Result<ResponseObject> {
    let mut object = ResponseObject::new(shape.name);
    for (key, value) in map {
        if key == "success" {
            if let Value::Bool(flag) = value {
                object.set_success(flag);
                continue;
            }
        }
        match shape.field(&key) {
            Some((field, FieldKind::Nested(nested))) => match value {
                Value::Object(inner) => {
                    let decoded = decode_object(inner, nested, item_shape)?;
                    object.insert_declared(field, FieldValue::Object(decoded));
                }
                Value::Null => object.insert_declared(field, FieldValue::Raw(Value::Null)),
                other => return Err(field_mismatch(shape, field, "object", &other)),
            },
            Some((field, FieldKind::NestedList(nested))) => match value {
                Value::Array(elements) => {
                    let decoded = decode_object_list(elements, nested, item_shape)?;
                    object.insert_declared(field, FieldValue::Objects(decoded));
                }
                Value::Null => object.insert_declared(field, FieldValue::Raw(Value::Null)),
                other => return Err(field_mismatch(shape, field, "array", &other)),
            },
            Some((field, FieldKind::Items)) => match item_shape {
                Some(items) => match value {
                    Value::Array(elements) => {
                        let decoded = decode_object_list(elements, items, None)?;
                        object.insert_declared(field, FieldValue::Objects(decoded));
                    }
                    Value::Null => object.insert_declared(field, FieldValue::Raw(Value::Null)),
                    other => return Err(field_mismatch(shape, field, "array", &other)),
                },
                None => object.insert_declared(field, FieldValue::Raw(value)),
            },
            Some((field, FieldKind::Scalar | FieldKind::ScalarList)) => {
                object.insert_declared(field, FieldValue::Raw(value));
            }
            None => object.insert_extra(key, FieldValue::Raw(value)),
        }
    }
    Ok(object)
}

fn decode_object_list(
    elements: Vec<Value>,
    shape: &'static Shape,
    item_shape: Option<&'static Shape>,
) -> Result<Vec<ResponseObject>> {
    let mut objects = Vec::with_capacity(elements.len());
    for element in elements {
        objects.push(decode_element(element, shape, item_shape)?);
    }
    Ok(objects)
}

fn decode_element(
    element: Value,
    shape: &'static Shape,
    item_shape: Option<&'static Shape>,
) -> Result<ResponseObject> {
    match element {
        Value::Object(map) => decode_object(map, shape, item_shape),
        other => Err(Error::decode(format!(
            "expected object element for {}, got {}",
            shape.name,
            json_kind(&other)
        ))),
    }
}

fn field_mismatch(shape: &Shape, field: &str, expected: &str, got: &Value) -> Error {
    Error::decode(format!(
        "field {}.{field}: expected {expected}, got {}",
        shape.name,
        json_kind(got)
    ))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Turn a raw HTTP outcome into a decoded result.
///
/// Statuses outside `200..=299` short-circuit into [`Error::Api`] with
/// the body decoded as an [`ErrorResult`]; success statuses are decoded
/// against `shape`. An absent body decodes as JSON null.
pub fn materialize(
    status: u16,
    body: Option<Value>,
    shape: Option<&'static Shape>,
    item_shape: Option<&'static Shape>,
) -> Result<Decoded> {
    if !(200..=299).contains(&status) {
        return Err(Error::Api(ErrorResult::from_response(status, body)));
    }
    decode(body.unwrap_or(Value::Null), shape, item_shape)
}
