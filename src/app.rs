//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the interrupt handler, then runs
//! one rename session: validate -> edit -> validate edits -> plan -> check -> execute -> log.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use gmv::cli::Args;
use gmv::config::{load_config_from_xml, CONFIG_ENV};
use gmv::editor::{launch_editor, resolve_editor};
use gmv::listing::{read_listing, survives_listing, write_listing};
use gmv::man::render_man;
use gmv::output as out;
use gmv::{
    build_plan, check_overwrites, default_config_path, execute_plan, shutdown, validate_edits,
    validate_paths, write_audit_log, Config, GmvError,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        print_config_location();
        return Ok(());
    }
    if args.generate_man {
        return render_man(&mut std::io::stdout().lock()).context("write man page");
    }

    // Config file first, then CLI flags on top.
    let mut cfg = load_config_from_xml()?.unwrap_or_default();
    args.apply_overrides(&mut cfg);

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;

    // Guard is dropped on exit (or interrupt) to flush the file appender.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; stopping before any file is renamed...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .context("install interrupt handler")?;
    }

    debug!(?args, "Starting gmv");

    let result = session(&args.files, &cfg);
    if let Err(e) = &result {
        match e.downcast_ref::<GmvError>() {
            Some(ge) => debug!(kind = ge.kind(), input = ge.is_input_error(), "Run failed: {ge}"),
            None => debug!(error = ?e, "Run failed"),
        }
    }

    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }
    result
}

fn print_config_location() {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        out::print_info(&format!(
            "Using {CONFIG_ENV} (explicit):\n  {}",
            PathBuf::from(explicit).display()
        ));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default gmv config path:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there; built-in defaults apply.");
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
}

fn session(files: &[PathBuf], cfg: &Config) -> Result<()> {
    if files.is_empty() {
        return Err(GmvError::NoFiles.into());
    }
    validate_paths(files)?;
    for path in files.iter().filter(|p| !survives_listing(p)) {
        warn!(path = %path.display(), "Name changes when read back from the listing");
        out::print_warn(&format!(
            "{} has surrounding whitespace or a line break; it will be renamed even if left untouched",
            path.display()
        ));
    }

    let editor = resolve_editor(cfg.editor.as_deref())?;
    let listing = write_listing(files)?;
    launch_editor(&editor, &listing)?;
    let edited = read_listing(&listing)?;
    drop(listing);

    if shutdown::is_requested() {
        return Err(GmvError::Interrupted.into());
    }

    validate_edits(files, &edited)?;
    let plan = build_plan(files, &edited);
    if plan.is_empty() {
        out::print_info("No names changed; nothing to rename.");
        return Ok(());
    }

    let hazards = check_overwrites(&plan, files);
    if !hazards.is_empty() {
        out::print_warn(&format!(
            "{} file(s) outside the list would be overwritten:",
            hazards.len()
        ));
        for path in &hazards {
            out::print_warn(&format!("  {}", path.display()));
        }
        if !cfg.dry_run && !cfg.force {
            let proceed = out::confirm(&format!(
                "Proceed and overwrite {} file(s)?",
                hazards.len()
            ))
            .context("read confirmation")?;
            if !proceed {
                return Err(GmvError::Aborted(hazards.len()).into());
            }
        }
    }

    // Last point where an interrupt can stop the run cleanly.
    if shutdown::is_requested() {
        return Err(GmvError::Interrupted.into());
    }

    execute_plan(&plan, cfg.dry_run)?;
    if cfg.dry_run {
        return Ok(());
    }

    out::print_success("Successfully renamed files.");
    if cfg.audit_log {
        match write_audit_log(&plan, &cfg.audit_dir()) {
            Ok(path) => out::print_info(&format!("A log file is saved at {}", path.display())),
            Err(e) => {
                warn!(error = %e, "Audit log not written");
                out::print_warn(&format!("failed to write log: {e}"));
            }
        }
    }
    Ok(())
}
