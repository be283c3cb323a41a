//! Campus subcommands

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CampusCommands {
    /// List buildings by short name
    Buildings,

    /// Shortest walking route between two buildings
    Route {
        /// Short name of the starting building
        start: String,

        /// Short name of the destination building
        end: String,
    },
}
