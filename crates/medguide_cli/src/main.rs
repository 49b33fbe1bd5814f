//! `medguide` command-line frontend.
//!
//! # Responsibility
//! - Map every navigation view to a subcommand.
//! - Print rendered text pages, or the underlying (filtered) data as JSON.
//!
//! # Invariants
//! - A search with no hits is a normal result, never an error exit.
//! - Logging is opt-in through `--log-dir` / `MEDGUIDE_LOG_DIR`.

use clap::{Parser, Subcommand};
use log::info;
use medguide_core::content::{
    emergency_checklist, emergency_contacts, emergency_scenarios, home_page, interaction_catalog,
    medication_tips, medicine_catalog, prevention_tips, resource_catalog, side_effect_catalog,
};
use medguide_core::render::{
    render_emergency, render_home, render_interactions, render_medicines, render_resources,
    render_side_effects,
};
use medguide_core::{
    core_version, default_log_level, filter, init_logging, InteractionTab, SideEffectTab, Tab,
    TabSelection, View,
};
use serde_json::{json, Value};
use std::error::Error;
use std::process::ExitCode;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "medguide")]
#[command(about = "Medication reference for seniors and their caregivers", long_about = None)]
#[command(version)]
struct Cli {
    /// Print the page data as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "MEDGUIDE_LOG_LEVEL", global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging stays off when unset
    #[arg(long, env = "MEDGUIDE_LOG_DIR", global = true, value_name = "DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every page and its path
    Views,

    /// Open the page mounted at PATH (e.g. `/side-effects`)
    Open { path: String },

    /// Home page
    Home,

    /// Medicine guide
    Medicines {
        /// Case-insensitive text matched against names and purposes
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Side effects by category
    SideEffects {
        /// common|serious|interactions
        #[arg(short, long)]
        tab: Option<String>,

        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Drug, food and timing interactions
    Interactions {
        /// drug-drug|drug-food|timing
        #[arg(short, long)]
        tab: Option<String>,

        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Contacts, educational material and support organizations
    Resources {
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Emergency procedures and contacts
    Emergency,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        // A failed logging setup never blocks page output.
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<String> {
    let command = match &cli.command {
        Commands::Views => return views(cli.json),
        Commands::Open { path } => resolve_path(path)?,
        Commands::Home => PageCommand::Home,
        Commands::Medicines { search } => PageCommand::Medicines {
            search: search.clone(),
        },
        Commands::SideEffects { tab, search } => PageCommand::SideEffects {
            tab: tab.clone(),
            search: search.clone(),
        },
        Commands::Interactions { tab, search } => PageCommand::Interactions {
            tab: tab.clone(),
            search: search.clone(),
        },
        Commands::Resources { search } => PageCommand::Resources {
            search: search.clone(),
        },
        Commands::Emergency => PageCommand::Emergency,
    };
    info!(
        "event=cli_command module=cli status=ok command={} json={}",
        command.name(),
        cli.json
    );

    if cli.json {
        Ok(serde_json::to_string_pretty(&page_json(&command)?)?)
    } else {
        page_text(&command)
    }
}

/// Page to show, with `open` paths already resolved.
enum PageCommand {
    Home,
    Medicines { search: String },
    SideEffects { tab: Option<String>, search: String },
    Interactions { tab: Option<String>, search: String },
    Resources { search: String },
    Emergency,
}

impl PageCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Medicines { .. } => "medicines",
            Self::SideEffects { .. } => "side_effects",
            Self::Interactions { .. } => "interactions",
            Self::Resources { .. } => "resources",
            Self::Emergency => "emergency",
        }
    }
}

fn resolve_path(path: &str) -> CliResult<PageCommand> {
    let command = match View::from_path(path)? {
        View::Home => PageCommand::Home,
        View::Medicines => PageCommand::Medicines {
            search: String::new(),
        },
        View::SideEffects => PageCommand::SideEffects {
            tab: None,
            search: String::new(),
        },
        View::Interactions => PageCommand::Interactions {
            tab: None,
            search: String::new(),
        },
        View::Resources => PageCommand::Resources {
            search: String::new(),
        },
        View::Emergency => PageCommand::Emergency,
    };
    Ok(command)
}

fn select_tab<T: Tab>(key: Option<&str>) -> CliResult<T> {
    let mut selection = TabSelection::<T>::new();
    if let Some(key) = key {
        selection.select_key(key)?;
    }
    Ok(selection.selected())
}

fn page_text(command: &PageCommand) -> CliResult<String> {
    let text = match command {
        PageCommand::Home => render_home(),
        PageCommand::Medicines { search } => render_medicines(search),
        PageCommand::SideEffects { tab, search } => {
            render_side_effects(select_tab::<SideEffectTab>(tab.as_deref())?, search)
        }
        PageCommand::Interactions { tab, search } => {
            render_interactions(select_tab::<InteractionTab>(tab.as_deref())?, search)
        }
        PageCommand::Resources { search } => render_resources(search),
        PageCommand::Emergency => render_emergency(),
    };
    Ok(text)
}

fn page_json(command: &PageCommand) -> CliResult<Value> {
    let value = match command {
        PageCommand::Home => serde_json::to_value(home_page())?,
        PageCommand::Medicines { search } => json!({
            "search": search,
            "categories": filter(medicine_catalog(), search),
        }),
        PageCommand::SideEffects { tab, search } => {
            let tab = select_tab::<SideEffectTab>(tab.as_deref())?;
            let filtered = filter(side_effect_catalog(), search);
            json!({
                "search": search,
                "tab": tab.key(),
                "category": filtered.category(tab.key()),
            })
        }
        PageCommand::Interactions { tab, search } => {
            let tab = select_tab::<InteractionTab>(tab.as_deref())?;
            let filtered = filter(interaction_catalog(), search);
            json!({
                "search": search,
                "tab": tab.key(),
                "category": filtered.category(tab.key()),
                "prevention_tips": prevention_tips(),
            })
        }
        PageCommand::Resources { search } => json!({
            "search": search,
            "categories": filter(resource_catalog(), search),
            "medication_tips": medication_tips(),
        }),
        PageCommand::Emergency => json!({
            "scenarios": emergency_scenarios(),
            "contacts": emergency_contacts(),
            "checklist": emergency_checklist(),
        }),
    };
    Ok(value)
}

fn views(as_json: bool) -> CliResult<String> {
    if as_json {
        let views = View::ALL
            .iter()
            .map(|view| {
                json!({
                    "view": view,
                    "label": view.label(),
                    "path": view.path(),
                    "searchable": view.is_searchable(),
                })
            })
            .collect::<Vec<_>>();
        return Ok(serde_json::to_string_pretty(&views)?);
    }

    let mut lines = vec![format!("MedGuide {}", core_version())];
    for view in View::ALL {
        let search = if view.is_searchable() { " (search)" } else { "" };
        lines.push(format!("  {:<18} {}{search}", view.label(), view.path()));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{page_json, page_text, resolve_path, select_tab, Cli, PageCommand};
    use clap::CommandFactory;
    use medguide_core::{InteractionTab, SideEffectTab};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tab_defaults_apply_without_key() {
        assert_eq!(
            select_tab::<SideEffectTab>(None).unwrap(),
            SideEffectTab::Common
        );
        assert_eq!(
            select_tab::<InteractionTab>(Some("timing")).unwrap(),
            InteractionTab::Timing
        );
    }

    #[test]
    fn unknown_tab_is_an_error() {
        let err = select_tab::<SideEffectTab>(Some("rare")).unwrap_err();
        assert!(err.to_string().contains("unknown tab `rare`"));
    }

    #[test]
    fn unknown_path_is_an_error() {
        assert!(resolve_path("/pharmacy").is_err());
        assert!(matches!(
            resolve_path("/medicines/").unwrap(),
            PageCommand::Medicines { .. }
        ));
    }

    #[test]
    fn medicines_json_lists_filtered_categories() {
        let value = page_json(&PageCommand::Medicines {
            search: "press".to_string(),
        })
        .unwrap();
        let categories = value["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0]["id"], "heart");
        assert_eq!(categories[0]["records"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn zero_hit_search_is_not_an_error() {
        let text = page_text(&PageCommand::Medicines {
            search: "xyz".to_string(),
        })
        .unwrap();
        assert!(text.contains("No medications found"));
    }
}
