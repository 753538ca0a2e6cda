use clap::{Args, Parser, Subcommand};
use cupid::BirthData;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cupidctl", version, about = "Natal chart and compatibility calculator")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to cupid.toml (defaults to the usual search paths)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Pretty-print JSON output")]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble one natal chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Score two birth records against each other
    Match {
        #[arg(long = "a-date")]
        a_date: String,
        #[arg(long = "a-time")]
        a_time: Option<String>,
        #[arg(long = "a-place", default_value = "")]
        a_place: String,
        #[arg(long = "b-date")]
        b_date: String,
        #[arg(long = "b-time")]
        b_time: Option<String>,
        #[arg(long = "b-place", default_value = "")]
        b_place: String,
    },
}

#[derive(Args, Debug)]
pub struct BirthArgs {
    #[arg(long, help = "Birth date, YYYY-MM-DD")]
    pub date: String,
    #[arg(long, help = "Birth time, HH:MM (24-hour)")]
    pub time: Option<String>,
    #[arg(long, default_value = "", help = "Birth place identifier")]
    pub place: String,
}

impl From<BirthArgs> for BirthData {
    fn from(args: BirthArgs) -> Self {
        BirthData {
            birth_date: args.date,
            birth_time: args.time,
            birth_place: args.place,
        }
    }
}
