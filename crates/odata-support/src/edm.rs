//! Entity data model description and its CSDL rendering.
//!
//! The model is assembled once at startup and rendered on demand for the
//! `$metadata` endpoint and the service document. Only the constructs the
//! service exposes are modelled: entity types with a single key, complex
//! types, enum types, and entity sets.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use serde::Serialize;

use crate::error::CsdlError;

const EDMX_NS: &str = "http://docs.oasis-open.org/odata/ns/edmx";
const EDM_NS: &str = "http://docs.oasis-open.org/odata/ns/edm";

/// Primitive or named type of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdmType {
    /// `Edm.Int32`.
    Int32,
    /// `Edm.Int64`.
    Int64,
    /// `Edm.String`.
    String,
    /// A complex type declared in the same schema.
    Complex(String),
    /// An enum type declared in the same schema.
    Enum(String),
}

impl EdmType {
    fn qualified(&self, namespace: &str) -> String {
        match self {
            Self::Int32 => "Edm.Int32".to_owned(),
            Self::Int64 => "Edm.Int64".to_owned(),
            Self::String => "Edm.String".to_owned(),
            Self::Complex(name) | Self::Enum(name) => format!("{namespace}.{name}"),
        }
    }
}

/// Structural property of an entity or complex type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    edm_type: EdmType,
    nullable: bool,
}

impl Property {
    /// A property that must always carry a value.
    #[must_use]
    pub fn required(name: impl Into<String>, edm_type: EdmType) -> Self {
        Self {
            name: name.into(),
            edm_type,
            nullable: false,
        }
    }

    /// A property that may be `null`.
    #[must_use]
    pub fn optional(name: impl Into<String>, edm_type: EdmType) -> Self {
        Self {
            name: name.into(),
            edm_type,
            nullable: true,
        }
    }
}

/// Entity type keyed by a single property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    name: String,
    key: String,
    properties: Vec<Property>,
}

impl EntityType {
    /// Declares an entity type; `key` must name one of `properties`.
    #[must_use]
    pub fn new(name: impl Into<String>, key: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            properties,
        }
    }
}

/// Complex (keyless) type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
    name: String,
    properties: Vec<Property>,
}

impl ComplexType {
    /// Declares a complex type.
    #[must_use]
    pub fn new(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }
}

/// Enum type whose members take their declaration index as value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    name: String,
    members: Vec<String>,
}

impl EnumType {
    /// Declares an enum type.
    #[must_use]
    pub fn new(name: impl Into<String>, members: &[&str]) -> Self {
        Self {
            name: name.into(),
            members: members.iter().map(|member| (*member).to_owned()).collect(),
        }
    }
}

/// Entity set entry in the service document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySetRef {
    /// Entity set name.
    pub name: String,
    /// Always `EntitySet`.
    pub kind: &'static str,
    /// URL relative to the service root.
    pub url: String,
}

/// Service document listing the entity sets under a service root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDocument {
    /// Metadata document URL.
    #[serde(rename = "@odata.context")]
    pub context: String,
    /// Exposed entity sets.
    pub value: Vec<EntitySetRef>,
}

/// Entity data model for one schema and its entity container.
///
/// # Example
///
/// ```
/// use odata_support::{EdmModel, EdmType, EntityType, Property};
///
/// let model = EdmModel::new("Shop", "Container").with_entity_set(
///     "Items",
///     EntityType::new("Item", "id", vec![Property::required("id", EdmType::Int32)]),
/// );
/// let xml = model.to_csdl_xml().expect("CSDL renders");
/// assert!(xml.contains(r#"<EntitySet Name="Items" EntityType="Shop.Item"/>"#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdmModel {
    namespace: String,
    container: String,
    entity_sets: Vec<(String, EntityType)>,
    complex_types: Vec<ComplexType>,
    enum_types: Vec<EnumType>,
}

impl EdmModel {
    /// Starts an empty model.
    #[must_use]
    pub fn new(namespace: impl Into<String>, container: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            container: container.into(),
            entity_sets: Vec::new(),
            complex_types: Vec::new(),
            enum_types: Vec::new(),
        }
    }

    /// Adds an entity type exposed through an entity set of the given name.
    #[must_use]
    pub fn with_entity_set(mut self, set_name: impl Into<String>, entity: EntityType) -> Self {
        self.entity_sets.push((set_name.into(), entity));
        self
    }

    /// Adds a complex type.
    #[must_use]
    pub fn with_complex_type(mut self, complex: ComplexType) -> Self {
        self.complex_types.push(complex);
        self
    }

    /// Adds an enum type.
    #[must_use]
    pub fn with_enum_type(mut self, enum_type: EnumType) -> Self {
        self.enum_types.push(enum_type);
        self
    }

    /// Names of the exposed entity sets in declaration order.
    pub fn entity_set_names(&self) -> impl Iterator<Item = &str> {
        self.entity_sets.iter().map(|(name, _)| name.as_str())
    }

    /// Builds the service document for a service root such as `/odata`.
    #[must_use]
    pub fn service_document(&self, service_root: &str) -> ServiceDocument {
        let root = service_root.trim_end_matches('/');
        ServiceDocument {
            context: format!("{root}/$metadata"),
            value: self
                .entity_set_names()
                .map(|name| EntitySetRef {
                    name: name.to_owned(),
                    kind: "EntitySet",
                    url: name.to_owned(),
                })
                .collect(),
        }
    }

    /// Renders the model as an OData v4 CSDL XML document.
    ///
    /// # Errors
    ///
    /// Returns [`CsdlError`] when the XML writer fails.
    pub fn to_csdl_xml(&self) -> Result<String, CsdlError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new("edmx:Edmx")
                .with_attributes([("Version", "4.0"), ("xmlns:edmx", EDMX_NS)]),
        ))?;
        writer.write_event(Event::Start(BytesStart::new("edmx:DataServices")))?;
        writer.write_event(Event::Start(
            BytesStart::new("Schema")
                .with_attributes([("Namespace", self.namespace.as_str()), ("xmlns", EDM_NS)]),
        ))?;

        for (_, entity) in &self.entity_sets {
            writer.write_event(Event::Start(named("EntityType", &entity.name)))?;
            writer.write_event(Event::Start(BytesStart::new("Key")))?;
            writer.write_event(Event::Empty(named("PropertyRef", &entity.key)))?;
            writer.write_event(Event::End(BytesEnd::new("Key")))?;
            self.write_properties(&mut writer, &entity.properties)?;
            writer.write_event(Event::End(BytesEnd::new("EntityType")))?;
        }

        for complex in &self.complex_types {
            writer.write_event(Event::Start(named("ComplexType", &complex.name)))?;
            self.write_properties(&mut writer, &complex.properties)?;
            writer.write_event(Event::End(BytesEnd::new("ComplexType")))?;
        }

        for enum_type in &self.enum_types {
            writer.write_event(Event::Start(named("EnumType", &enum_type.name)))?;
            for (value, member) in enum_type.members.iter().enumerate() {
                let value = value.to_string();
                writer.write_event(Event::Empty(
                    named("Member", member).with_attributes([("Value", value.as_str())]),
                ))?;
            }
            writer.write_event(Event::End(BytesEnd::new("EnumType")))?;
        }

        writer.write_event(Event::Start(named("EntityContainer", &self.container)))?;
        for (set_name, entity) in &self.entity_sets {
            let entity_type = format!("{}.{}", self.namespace, entity.name);
            writer.write_event(Event::Empty(
                named("EntitySet", set_name).with_attributes([("EntityType", entity_type.as_str())]),
            ))?;
        }
        writer.write_event(Event::End(BytesEnd::new("EntityContainer")))?;
        writer.write_event(Event::End(BytesEnd::new("Schema")))?;
        writer.write_event(Event::End(BytesEnd::new("edmx:DataServices")))?;
        writer.write_event(Event::End(BytesEnd::new("edmx:Edmx")))?;

        Ok(String::from_utf8(writer.into_inner())?)
    }

    fn write_properties(
        &self,
        writer: &mut Writer<Vec<u8>>,
        properties: &[Property],
    ) -> Result<(), CsdlError> {
        for property in properties {
            let edm_type = property.edm_type.qualified(&self.namespace);
            let nullable = if property.nullable { "true" } else { "false" };
            writer.write_event(Event::Empty(named("Property", &property.name).with_attributes(
                [("Type", edm_type.as_str()), ("Nullable", nullable)],
            )))?;
        }
        Ok(())
    }
}

fn named<'a>(element: &'a str, name: &'a str) -> BytesStart<'a> {
    BytesStart::new(element).with_attributes([("Name", name)])
}
