//! Query command: dispatch a single request.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use diablo_interface::{LegacyRequest, LiveCharacters, Request, Response};

use crate::config::Config;
use crate::state;

/// Request to send, as given on the command line
pub enum QueryTarget {
    Resource {
        resource: String,
        arguments: Vec<String>,
    },
    EquipmentSlot(String),
}

impl QueryTarget {
    pub fn into_request(self) -> Result<Request> {
        Ok(match self {
            Self::Resource {
                resource,
                arguments,
            } => Request::new(resource, arguments)?,
            Self::EquipmentSlot(slot) => LegacyRequest::new(slot).into_request(),
        })
    }
}

pub fn run(config: &Config, state_path: &Path, target: QueryTarget) -> Result<()> {
    let response = execute(config, state_path, target)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Load the state file, dispatch the request and return the response
pub fn execute(config: &Config, state_path: &Path, target: QueryTarget) -> Result<Response> {
    let live = Arc::new(LiveCharacters::new());
    state::load_into(state_path, &live)?;

    let dispatcher = super::build_dispatcher(config, live)?;
    let request = target.into_request()?;
    Ok(dispatcher.dispatch(&request))
}
