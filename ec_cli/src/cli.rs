use clap::Parser;
use clap::Subcommand;
use ec_core::server::default_config::DEFAULT_SERVER_BACKEND_URL;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base url of the chatbot server
    #[arg(long, global = true, env = "CHATBOT_SERVER_URL", default_value = DEFAULT_SERVER_BACKEND_URL)]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one scenario and print the reply
    Ask {
        #[arg()]
        text: Option<String>,
        /// Use the built-in sample scenario
        #[arg(short, long, conflicts_with = "text")]
        sample: bool,
    },
    /// Type scenarios one per line
    Chat,
    /// Check that the server is up
    Ping,
}
