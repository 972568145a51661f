use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rschedule
/// Weekly class timetable kept in a local SQLite file
#[derive(Parser)]
#[command(
    name = "rschedule",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple weekly class timetable: one column per school day, stored locally in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the week, or a single day
    List {
        #[arg(long, short, help = "Day to show: monday..saturday or its display name")]
        day: Option<String>,
    },

    /// Add a class to a day
    Add {
        /// Day of the class (monday..saturday or Dushanba..Shanba)
        day: String,

        #[arg(long, short, help = "Subject name (required)")]
        subject: String,

        #[arg(long = "start", help = "Start time (HH:MM), defaults to the configured start")]
        start: Option<String>,

        #[arg(long = "end", help = "End time (HH:MM), defaults to the configured end")]
        end: Option<String>,

        #[arg(long, short)]
        teacher: Option<String>,

        #[arg(long, short)]
        room: Option<String>,

        #[arg(long, short, help = "Palette label (see `colors`) or a raw color tag")]
        color: Option<String>,
    },

    /// Edit a class; only the given fields change
    Edit {
        /// Class id (any unique prefix)
        id: String,

        #[arg(long, short)]
        subject: Option<String>,

        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(long, short, help = "Teacher (empty string clears it)")]
        teacher: Option<String>,

        #[arg(long, short, help = "Room (empty string clears it)")]
        room: Option<String>,

        #[arg(long, short, help = "Palette label (see `colors`) or a raw color tag")]
        color: Option<String>,
    },

    /// Delete a class
    Del {
        /// Class id (any unique prefix)
        id: String,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show or change the light/dark preference
    Theme {
        #[arg(value_enum)]
        mode: Option<ThemeArg>,
    },

    /// List the color palette
    Colors,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the week as a JSON document
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}
