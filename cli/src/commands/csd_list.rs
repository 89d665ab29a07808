//! # cicsrs CSD List Commands
//!
//! File: cli/src/commands/csd_list.rs
//!
//! `cicsrs add-to-list csdgroup <NAME> <CSD_LIST>` and
//! `cicsrs remove-from-list csdgroup <NAME> <CSD_LIST>` manage which CSD
//! lists a group belongs to.
//!
use super::Context;
use crate::common::connection::{self, Target};
use crate::common::output;
use crate::core::error::Result;
use cicsrs_cmci::api::{self, CsdGroupParms};
use clap::{Args, Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Add a CSD group to a CSD list")]
pub struct AddToListArgs {
    #[command(subcommand)]
    resource: ListResource,
}

#[derive(Parser, Debug)]
#[command(about = "Remove a CSD group from a CSD list")]
pub struct RemoveFromListArgs {
    #[command(subcommand)]
    resource: ListResource,
}

#[derive(Subcommand, Debug)]
enum ListResource {
    /// A CSD group.
    Csdgroup(GroupListArgs),
}

#[derive(Args, Debug)]
struct GroupListArgs {
    /// Name of the CSD group.
    name: String,
    /// Name of the CSD list.
    csd_list: String,
}

fn group_parms(args: &GroupListArgs, target: &Target) -> CsdGroupParms {
    CsdGroupParms {
        name: Some(args.name.clone()),
        csd_list: Some(args.csd_list.clone()),
        region_name: target.region_name.clone(),
        cics_plex: target.cics_plex.clone(),
    }
}

pub async fn handle_add_to_list(args: AddToListArgs, ctx: &Context) -> Result<()> {
    let ListResource::Csdgroup(group) = args.resource;
    info!("Adding CSD group '{}' to list '{}'", group.name, group.csd_list);
    let target = connection::connect(&ctx.connection)?;
    let response = api::add_csd_group_to_list(&target.session, &group_parms(&group, &target)).await?;
    let verb = format!("added to CSD list '{}'", group.csd_list);
    output::report(&response, ctx.json, &output::success("CSD group", &group.name, &verb))
}

pub async fn handle_remove_from_list(args: RemoveFromListArgs, ctx: &Context) -> Result<()> {
    let ListResource::Csdgroup(group) = args.resource;
    info!("Removing CSD group '{}' from list '{}'", group.name, group.csd_list);
    let target = connection::connect(&ctx.connection)?;
    let response =
        api::remove_csd_group_from_list(&target.session, &group_parms(&group, &target)).await?;
    let verb = format!("removed from CSD list '{}'", group.csd_list);
    output::report(&response, ctx.json, &output::success("CSD group", &group.name, &verb))
}
