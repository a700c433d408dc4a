//! csst: class string transforms.
//!
//! A class string is a whitespace-separated list of tokens, as found in an
//! HTML `class` attribute. This crate provides pure functions that add and
//! remove tokens, transforms that derive tokens from a value, composition of
//! transforms, and adapters that apply a transform to a mutable target.
//!
//! ```
//! use csst::{Element, Transform, compose, cardinality, lift, toggle};
//!
//! let items = compose![toggle("has-items"), cardinality("items")];
//! assert_eq!(items.apply(2, "list").1, "list has-items items-n");
//!
//! let mut node = Element::new("list");
//! let update = lift(items);
//! update(0, &mut node);
//! assert_eq!(node.as_str(), "list items-0");
//! ```

pub mod config;
pub mod func;
pub mod logger;
pub mod pipeline;
pub mod target;
pub mod tokens;
pub mod transform;
pub mod value;

pub use config::{ConfigError, CsstConfig};
pub use func::flip;
pub use pipeline::{Pipeline, compose};
pub use target::{ClassTarget, Element, lift, run, with_node, with_value};
pub use tokens::{TokenError, TokenSet, add_tokens, remove_tokens};
pub use transform::{
    Cardinality, Custom, DirectMap, Range, Toggle, Transform, cardinality, custom, direct_map,
    range, toggle,
};
pub use value::{MapKey, Numeric, Truthy, Value};
