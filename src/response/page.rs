//! Generic pagination wrapper for list endpoints.

use serde_json::Value;

use super::decode::{decode, Decoded};
use super::object::{FieldValue, ResponseObject};
use super::shape::{Entity, FieldKind, Shape};
use crate::error::{Error, Result};

/// Shape of a paginated list body: an `items` array decoded with the
/// caller's item shape, plus the vendor's opaque `paging` block.
pub static PAGE_SHAPE: Shape = Shape {
    name: "Page",
    fields: &[("items", FieldKind::Items), ("paging", FieldKind::Scalar)],
};

/// One page of results from a list endpoint.
///
/// `items` is `None` when the key was absent from the body, `Some(vec![])`
/// when the vendor returned an empty list. The `paging` block is kept as
/// the vendor sent it; its cursors are opaque tokens meant only to be fed
/// back via a page request.
#[derive(Debug, Clone)]
pub struct Page<T: Entity> {
    items: Option<Vec<T>>,
    paging: Option<Value>,
}

impl<T: Entity> Page<T> {
    /// Decode a full page body, threading the item shape into the `items`
    /// array.
    pub fn decode(value: Value) -> Result<Self> {
        match decode(value, Some(&PAGE_SHAPE), Some(T::SHAPE))? {
            Decoded::Object(object) => Self::from_object(object),
            Decoded::Objects(_) => Err(Error::decode("expected page object, got array")),
            Decoded::Raw(_) => Err(Error::decode("expected page object, got scalar")),
        }
    }

    pub(crate) fn from_object(mut object: ResponseObject) -> Result<Self> {
        let items = match object.take_field("items") {
            Some(FieldValue::Objects(objects)) => {
                Some(objects.into_iter().map(T::from_object).collect())
            }
            Some(FieldValue::Raw(Value::Null)) | None => None,
            Some(_) => return Err(Error::decode("page items did not decode as an object list")),
        };
        let paging = match object.take_field("paging") {
            Some(FieldValue::Raw(value)) => Some(value),
            Some(_) => return Err(Error::decode("page paging did not stay a raw value")),
            None => None,
        };
        Ok(Self { items, paging })
    }

    /// Decoded items, if the body carried an `items` key.
    pub fn items(&self) -> Option<&[T]> {
        self.items.as_deref()
    }

    /// Consume the page, yielding its items. Absent items yield an empty
    /// vector.
    pub fn into_items(self) -> Vec<T> {
        self.items.unwrap_or_default()
    }

    /// The vendor's `paging` block, untouched.
    pub fn paging(&self) -> Option<&Value> {
        self.paging.as_ref()
    }

    /// Cursor for the page after this one, when the vendor advertised one.
    pub fn cursor_after(&self) -> Option<&str> {
        self.cursor("after")
    }

    /// Cursor for the page before this one, when the vendor advertised one.
    pub fn cursor_before(&self) -> Option<&str> {
        self.cursor("before")
    }

    fn cursor(&self, direction: &str) -> Option<&str> {
        self.paging
            .as_ref()?
            .get("cursors")?
            .get(direction)?
            .as_str()
    }
}
