//! `initwiz generate <url>` – run the whole wizard flow headlessly.

use crate::cli::host::TerminalHost;
use anyhow::{anyhow, Result};
use initwiz_core::config::WizardConfig;
use initwiz_core::wizard::WizardFlow;
use std::path::Path;
use std::sync::Arc;

pub fn run_generate(cfg: &WizardConfig, url: &str, dest: Option<&Path>) -> Result<()> {
    let flow = WizardFlow::new(cfg, Arc::new(TerminalHost));
    let download = flow.observe_request(url).ok_or_else(|| {
        anyhow!(
            "not a generate request: expected path {} with a name parameter",
            cfg.generate_path
        )
    })?;
    let project_name = download.project_name().to_string();
    download.wait();

    let target_dir = match dest {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?.join(&project_name),
    };

    let host = TerminalHost;
    let project = flow.commit(&target_dir, &host, &host)?;

    println!(
        "Project '{}' ready at {}",
        project.project_name,
        project.root.display()
    );
    match project.build_system {
        Some(system) => println!("Build system: {system}"),
        None => println!("Build system: none recognized"),
    }
    Ok(())
}
