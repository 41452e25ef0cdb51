pub mod attributes;
pub mod error;
pub mod field;
pub mod filter;
pub mod form;
pub mod group;
pub mod path;
pub mod select;
pub mod snapshot;
pub mod tree;

pub mod prelude {
    pub use crate::attributes::AttributeMap;
    pub use crate::error::FormError;
    pub use crate::field::{Field, FieldBuilder};
    pub use crate::filter::Filter;
    pub use crate::form::{Form, FormChild};
    pub use crate::group::FieldGroup;
    pub use crate::select::{OptGroup, Select, SelectItem, SelectOption};
    pub use crate::snapshot::{ChildSnapshot, FieldSnapshot, FormSnapshot, GroupSnapshot};

    pub use formwork_validator::prelude::*;
}
