//! Shape descriptors: the static field registry the decoder dispatches on.
//!
//! Each entity kind declares, statically, its list of (JSON key, kind)
//! pairs. The decoder branches on the kind tag instead of inspecting
//! runtime type information. Shapes form a strict tree; a nested shape
//! never references an ancestor.

use super::object::ResponseObject;

/// Statically declared decode shape: the entity name plus its field
/// descriptors.
#[derive(Debug)]
pub struct Shape {
    /// Entity name, used in rendering and decode error messages.
    pub name: &'static str,
    /// Declared (JSON key, kind) pairs.
    pub fields: &'static [(&'static str, FieldKind)],
}

impl Shape {
    /// Look up a declared field by its JSON key, returning the canonical
    /// key and its kind.
    pub fn field(&self, name: &str) -> Option<(&'static str, FieldKind)> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(field, kind)| (*field, *kind))
    }
}

/// How one declared field is decoded.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Scalar or vendor-opaque structure; passed through raw.
    Scalar,
    /// List of scalars; passed through raw.
    ScalarList,
    /// A nested object decoded with the referenced shape.
    Nested(&'static Shape),
    /// A list of objects decoded element-wise with the referenced shape.
    NestedList(&'static Shape),
    /// The pagination `items` slot: decoded element-wise as the item shape
    /// threaded through [`decode`](super::decode::decode), or passed
    /// through raw when none is supplied.
    Items,
}

/// A typed response entity: a newtype over [`ResponseObject`] tied to a
/// static [`Shape`]. Implemented by the [`entity!`](crate::entity) macro.
pub trait Entity: Sized {
    /// The shape this entity decodes with.
    const SHAPE: &'static Shape;

    /// Wrap an already-decoded object.
    fn from_object(object: ResponseObject) -> Self;

    /// Borrow the underlying decoded object.
    fn object(&self) -> &ResponseObject;

    /// Unwrap into the underlying decoded object.
    fn into_object(self) -> ResponseObject;
}

/// Declares a response entity: its shape descriptor and a newtype wrapper
/// around [`ResponseObject`](crate::response::ResponseObject).
///
/// Field kinds are `scalar`, `scalar_list`, `object(Other)` and
/// `object_list(Other)`, where `Other` is another declared entity.
///
/// ```
/// use supercell_api::entity;
///
/// entity! {
///     /// A chat language.
///     pub struct Language {
///         "name" => scalar,
///         "id" => scalar,
///         "languageCode" => scalar,
///     }
/// }
/// ```
#[macro_export]
macro_rules! entity {
    ($(#[$meta:meta])* $vis:vis struct $name:ident {
        $( $field:literal => $kind:ident $( ( $nested:ty ) )? ),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name($crate::response::ResponseObject);

        impl $crate::response::Entity for $name {
            const SHAPE: &'static $crate::response::Shape = &$crate::response::Shape {
                name: stringify!($name),
                fields: &[
                    $( ($field, $crate::field_kind!($kind $( ( $nested ) )?)) ),*
                ],
            };

            fn from_object(object: $crate::response::ResponseObject) -> Self {
                Self(object)
            }

            fn object(&self) -> &$crate::response::ResponseObject {
                &self.0
            }

            fn into_object(self) -> $crate::response::ResponseObject {
                self.0
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::response::ResponseObject;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! field_kind {
    (scalar) => {
        $crate::response::FieldKind::Scalar
    };
    (scalar_list) => {
        $crate::response::FieldKind::ScalarList
    };
    (object($nested:ty)) => {
        $crate::response::FieldKind::Nested(<$nested as $crate::response::Entity>::SHAPE)
    };
    (object_list($nested:ty)) => {
        $crate::response::FieldKind::NestedList(<$nested as $crate::response::Entity>::SHAPE)
    };
}
