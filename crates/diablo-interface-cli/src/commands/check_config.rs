//! Check-config command: show what `serve` would do with the current setup.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use diablo_interface::{CharacterSource, LiveCharacters};

use crate::config::Config;
use crate::state;

pub fn run(config: &Config, config_path: &Path, state_path: &Path) -> Result<()> {
    println!("Config:      {}", config_path.display());

    let live = Arc::new(LiveCharacters::new());
    let dispatcher = super::build_dispatcher(config, Arc::clone(&live))?;
    println!("Resources:   {}", dispatcher.registry().roots().join(", "));
    println!("Log filter:  {}", config.log_filter());
    println!("Poll every:  {:?}", config.poll_interval());

    println!("State file:  {}", state_path.display());
    match state::load_into(state_path, &live) {
        Ok(()) => {
            let tracked = live.tracked()?;
            let name = |handle: Option<&diablo_interface::CharacterHandle>| {
                handle
                    .map(|h| format!("{} (level {} {})", h.name, h.level, h.char_class))
                    .unwrap_or_else(|| "-".to_string())
            };
            println!("  current:   {}", name(tracked.current()));
            println!("  active:    {}", name(tracked.active()));
        }
        Err(e) => println!("  not loaded: {:#}", e),
    }

    Ok(())
}
