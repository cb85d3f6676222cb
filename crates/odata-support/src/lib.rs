//! OData protocol primitives shared by Bookshelf endpoints.
//!
//! The crate covers the thin slice of OData v4 the service speaks:
//!
//! - [`QueryOptions`]: parsing of the `$top`, `$skip`, and `$count` system
//!   query options, rejecting every other `$`-prefixed option
//! - [`ODataCollection`] and [`ODataEntity`]: JSON response envelopes carrying
//!   `@odata.context` annotations
//! - [`EdmModel`]: an entity data model that renders the `$metadata` CSDL
//!   document and the service document
//!
//! It holds no query engine: filtering, ordering, and projection are out of
//! scope and reported as unsupported.
//!
//! # Example
//!
//! ```
//! use odata_support::{ODataCollection, QueryOptions};
//!
//! let options = QueryOptions::parse("$skip=1&$count=true").expect("valid options");
//! let page = options.apply(vec!["a", "b", "c"]);
//! let envelope = ODataCollection::new("/odata/$metadata#Books", page);
//!
//! let json = serde_json::to_value(&envelope).expect("serializable");
//! assert_eq!(json["@odata.count"], 3);
//! assert_eq!(json["value"], serde_json::json!(["b", "c"]));
//! ```

mod edm;
mod envelope;
mod error;
mod options;

pub use edm::{
    ComplexType, EdmModel, EdmType, EntitySetRef, EntityType, EnumType, Property, ServiceDocument,
};
pub use envelope::{ODataCollection, ODataEntity, context_url};
pub use error::{CsdlError, QueryOptionError};
pub use options::{Page, QueryOptions};
