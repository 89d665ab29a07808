//! # CMCI Request Bodies
//!
//! File: lib/src/common/xml/request.rs
//!
//! ## Overview
//!
//! Mutating actions send a `<request>` document with exactly one child:
//!
//! ```xml
//! <request><action name="CSDADD"><parameter name="TO_CSDLIST" value="LIST1"/></action></request>
//! <request><update><attributes ENABLESTATUS="ENABLED"/></update></request>
//! <request><create><parameter name="CSD"/><attributes name="PGM1" csdgroup="GRP1"/></create></request>
//! ```
//!
//! Attribute order is preserved as given; values are XML-escaped by the writer.
//!
use crate::core::constants::{
    ActionName, CSD, DISABLED, ENABLED, ENABLESTATUS, TO_CSDLIST,
};
use crate::core::error::{CmciError, Result};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// `<parameter name="..." value="..."/>`; `value` is omitted when `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionParameter {
    pub name: String,
    pub value: Option<String>,
}

impl ActionParameter {
    pub fn new(name: &str, value: Option<&str>) -> Self {
        ActionParameter {
            name: name.to_string(),
            value: value.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Perform a named operation on the selected records.
    Action {
        name: String,
        parameters: Vec<ActionParameter>,
    },
    /// Set attributes on the selected records.
    Update { attributes: Vec<(String, String)> },
    /// Create a new definition.
    Create {
        parameters: Vec<ActionParameter>,
        attributes: Vec<(String, String)>,
    },
}

impl RequestBody {
    pub fn action(name: ActionName) -> Self {
        RequestBody::Action {
            name: name.as_str().to_string(),
            parameters: Vec::new(),
        }
    }

    pub fn action_with(name: ActionName, parameter: ActionParameter) -> Self {
        RequestBody::Action {
            name: name.as_str().to_string(),
            parameters: vec![parameter],
        }
    }

    pub fn update(attributes: &[(&str, &str)]) -> Self {
        RequestBody::Update {
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn enable() -> Self {
        Self::update(&[(ENABLESTATUS, ENABLED)])
    }

    pub fn disable() -> Self {
        Self::update(&[(ENABLESTATUS, DISABLED)])
    }

    pub fn install() -> Self {
        Self::action(ActionName::CsdInstall)
    }

    pub fn newcopy() -> Self {
        Self::action(ActionName::NewCopy)
    }

    pub fn csd_add(list: &str) -> Self {
        Self::action_with(
            ActionName::CsdAdd,
            ActionParameter::new(TO_CSDLIST, Some(list)),
        )
    }

    pub fn csd_remove(list: &str) -> Self {
        Self::action_with(
            ActionName::CsdRemove,
            ActionParameter::new(TO_CSDLIST, Some(list)),
        )
    }

    /// `create` body targeting the CSD with the given definition attributes.
    pub fn define(attributes: Vec<(String, String)>) -> Self {
        RequestBody::Create {
            parameters: vec![ActionParameter::new(CSD, None)],
            attributes,
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        write(&mut writer, Event::Start(BytesStart::new("request")))?;
        match self {
            RequestBody::Action { name, parameters } => {
                let mut action = BytesStart::new("action");
                action.push_attribute(("name", name.as_str()));
                if parameters.is_empty() {
                    write(&mut writer, Event::Empty(action))?;
                } else {
                    write(&mut writer, Event::Start(action))?;
                    write_parameters(&mut writer, parameters)?;
                    write(&mut writer, Event::End(BytesEnd::new("action")))?;
                }
            }
            RequestBody::Update { attributes } => {
                write(&mut writer, Event::Start(BytesStart::new("update")))?;
                write_attributes(&mut writer, attributes)?;
                write(&mut writer, Event::End(BytesEnd::new("update")))?;
            }
            RequestBody::Create {
                parameters,
                attributes,
            } => {
                write(&mut writer, Event::Start(BytesStart::new("create")))?;
                write_parameters(&mut writer, parameters)?;
                write_attributes(&mut writer, attributes)?;
                write(&mut writer, Event::End(BytesEnd::new("create")))?;
            }
        }
        write(&mut writer, Event::End(BytesEnd::new("request")))?;
        String::from_utf8(writer.into_inner()).map_err(|e| CmciError::Serialize(e.to_string()))
    }
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| CmciError::Serialize(e.to_string()))
}

fn write_parameters(writer: &mut Writer<Vec<u8>>, parameters: &[ActionParameter]) -> Result<()> {
    for parameter in parameters {
        let mut element = BytesStart::new("parameter");
        element.push_attribute(("name", parameter.name.as_str()));
        if let Some(value) = &parameter.value {
            element.push_attribute(("value", value.as_str()));
        }
        write(writer, Event::Empty(element))?;
    }
    Ok(())
}

fn write_attributes(writer: &mut Writer<Vec<u8>>, attributes: &[(String, String)]) -> Result<()> {
    let mut element = BytesStart::new("attributes");
    for (key, value) in attributes {
        element.push_attribute((key.as_str(), value.as_str()));
    }
    write(writer, Event::Empty(element))
}
