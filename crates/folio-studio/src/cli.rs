//! Command-line surface
//!
//! Entries are addressed by position: ids are regenerated on every load, so
//! they mean nothing across invocations.

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use folio_layout::MoveDirection;
use std::path::PathBuf;

/// One studio action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List every registered section type
    Catalog,
    /// List the current layout
    Show,
    /// List types that can still be added
    Available,
    /// Append a section
    Add {
        /// Section type
        type_id: String,
    },
    /// Remove the section at a position
    Remove {
        /// 0-based position
        index: usize,
    },
    /// Move the section at a position one step
    Move {
        /// 0-based position
        index: usize,
        /// Step direction
        direction: MoveDirection,
    },
    /// Set one text field of an editable section
    Set {
        /// 0-based position
        index: usize,
        /// Content key
        field: String,
        /// New text
        value: String,
    },
    /// Render the page
    Render {
        /// Emit JSON instead of text
        json: bool,
    },
}

/// Parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// `--config`
    pub config: Option<PathBuf>,
    /// `--layout`, overrides the config file
    pub layout: Option<PathBuf>,
    /// `--site-data`, overrides the config file
    pub site_data: Option<PathBuf>,
    /// Requested action
    pub action: Action,
}

fn index_arg() -> Arg {
    Arg::new("index")
        .required(true)
        .value_parser(value_parser!(usize))
        .help("0-based position in the layout")
}

/// Build the `folio` command
#[must_use]
pub fn command() -> Command {
    Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Edit and preview the portfolio page layout")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("layout")
                .long("layout")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Layout JSON file"),
        )
        .arg(
            Arg::new("site-data")
                .long("site-data")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Site data JSON file for static sections"),
        )
        .subcommand(Command::new("catalog").about("List registered section types"))
        .subcommand(Command::new("show").about("List the sections on the page"))
        .subcommand(Command::new("available").about("List section types that can be added"))
        .subcommand(
            Command::new("add")
                .about("Append a section")
                .arg(Arg::new("type").required(true).help("Section type id")),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a section")
                .arg(index_arg()),
        )
        .subcommand(
            Command::new("move")
                .about("Move a section one step up or down")
                .arg(index_arg())
                .arg(
                    Arg::new("direction")
                        .required(true)
                        .value_parser(value_parser!(MoveDirection))
                        .help("up or down"),
                ),
        )
        .subcommand(
            Command::new("set")
                .about("Set a text field of an editable section")
                .arg(index_arg())
                .arg(Arg::new("field").required(true).help("Content key"))
                .arg(Arg::new("value").required(true).help("New text")),
        )
        .subcommand(
            Command::new("render").about("Render the page").arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Output as JSON"),
            ),
        )
}

impl Invocation {
    /// Parse from process arguments, exiting on usage errors
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_matches(&command().get_matches()).unwrap_or_else(|e| e.exit())
    }

    /// Parse from explicit arguments
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::from_matches(&command().try_get_matches_from(args)?)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let path = |name: &str| matches.get_one::<PathBuf>(name).cloned();
        let string = |args: &ArgMatches, name: &str| {
            args.get_one::<String>(name).cloned().unwrap_or_default()
        };
        let index = |args: &ArgMatches| args.get_one::<usize>("index").copied().unwrap_or_default();

        let action = match matches.subcommand() {
            Some(("catalog", _)) => Action::Catalog,
            Some(("available", _)) => Action::Available,
            Some(("show", _)) => Action::Show,
            Some(("add", args)) => Action::Add {
                type_id: string(args, "type"),
            },
            Some(("remove", args)) => Action::Remove { index: index(args) },
            Some(("move", args)) => Action::Move {
                index: index(args),
                direction: args
                    .get_one::<MoveDirection>("direction")
                    .copied()
                    .unwrap_or(MoveDirection::Down),
            },
            Some(("set", args)) => Action::Set {
                index: index(args),
                field: string(args, "field"),
                value: string(args, "value"),
            },
            Some(("render", args)) => Action::Render {
                json: args.get_flag("json"),
            },
            Some((name, _)) => {
                return Err(command().error(
                    ErrorKind::InvalidSubcommand,
                    format!("unsupported subcommand `{name}`"),
                ))
            }
            None => {
                return Err(command().error(
                    ErrorKind::MissingSubcommand,
                    "a subcommand is required",
                ))
            }
        };

        Ok(Self {
            config: path("config"),
            layout: path("layout"),
            site_data: path("site-data"),
            action,
        })
    }
}
