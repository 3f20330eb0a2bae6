//! The generic JSON-to-object materialization layer.
//!
//! Everything a vendor endpoint returns flows through here: a raw
//! `(status, JSON)` pair is routed by [`materialize`] either into the
//! error path ([`crate::ErrorResult`]) or through the recursive
//! [`decode`] into a [`ResponseObject`] graph, a list of objects, a
//! [`Page`], or a raw passthrough value.
//!
//! # Overview
//!
//! - [`Shape`] / [`FieldKind`]: the static field registry the decoder
//!   dispatches on, one descriptor per entity kind.
//! - [`ResponseObject`]: the open-record runtime instance holding
//!   declared fields plus any undeclared vendor fields, all preserved.
//! - [`Page`]: the uniform `{ items, paging }` wrapper, generic over the
//!   item entity; cursors stay vendor-opaque.
//! - [`Entity`]: the trait tying a newtype to its shape, implemented via
//!   the [`entity!`](crate::entity) macro.

mod decode;
mod object;
mod page;
mod shape;

pub use decode::{decode, materialize, Decoded};
pub use object::{FieldValue, ResponseObject};
pub use page::{Page, PAGE_SHAPE};
pub use shape::{Entity, FieldKind, Shape};
