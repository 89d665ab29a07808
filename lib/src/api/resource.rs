//! # Generic Resource Read
//!
//! File: lib/src/api/resource.rs
//!
//! `GET` against any CMCI resource table by name, with optional caller-supplied
//! criteria and parameter expressions passed through untouched.
//!
use super::parms::{present, required, ResourceParms};
use crate::common::path::{Criteria, ResourcePath};
use crate::common::rest::CmciTransport;
use crate::common::xml::CmciResponse;
use crate::core::error::Result;
use crate::core::validation::{check_required, require, Field, Requirement};
use tracing::debug;

const REQUIRED: &[Requirement] = &[
    require(Field::Name, "CICS resource name"),
    require(Field::RegionName, "CICS Region name"),
];

pub async fn get_resource<T: CmciTransport + ?Sized>(
    transport: &T,
    parms: &ResourceParms,
) -> Result<CmciResponse> {
    check_required(parms, REQUIRED)?;
    let mut path = ResourcePath::for_table(required(&parms.name), required(&parms.region_name))
        .plex(parms.cics_plex.as_deref());
    if let Some(criteria) = present(&parms.criteria) {
        path = path.criteria(Criteria::raw(criteria));
    }
    if let Some(parameter) = present(&parms.parameter) {
        path = path.parameter(parameter);
    }
    let resource = path.build();
    debug!("get resource: GET {}", resource);
    transport.get_expect_parsed_xml(&resource, &[]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::rest::fake::FakeTransport;

    #[tokio::test]
    async fn test_get_resource_with_criteria_and_parameter() {
        let fake = FakeTransport::new();
        let parms = ResourceParms {
            name: Some("CICSDefinitionProgram".into()),
            criteria: Some("NAME=PGM*".into()),
            parameter: Some("CSDGROUP(GRP1)".into()),
            region_name: Some("REGION1".into()),
            cics_plex: Some("PLEX1".into()),
        };
        let response = get_resource(&fake, &parms).await.unwrap();
        assert_eq!(response, fake.response);
        let call = fake.only_call();
        assert_eq!(call.verb, "GET");
        assert_eq!(
            call.resource,
            "/CICSSystemManagement/CICSDefinitionProgram/PLEX1/REGION1?CRITERIA=(NAME=PGM*)&PARAMETER=CSDGROUP(GRP1)"
        );
    }

    #[tokio::test]
    async fn test_get_resource_minimal() {
        let fake = FakeTransport::new();
        let parms = ResourceParms {
            name: Some("CICSRegion".into()),
            region_name: Some("REGION1".into()),
            ..Default::default()
        };
        get_resource(&fake, &parms).await.unwrap();
        assert_eq!(
            fake.only_call().resource,
            "/CICSSystemManagement/CICSRegion/REGION1"
        );

        let missing = ResourceParms {
            region_name: Some("REGION1".into()),
            ..Default::default()
        };
        let err = get_resource(&fake, &missing).await.unwrap_err();
        assert!(err.to_string().contains("CICS resource name"));
    }
}
