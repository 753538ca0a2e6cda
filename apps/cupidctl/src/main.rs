mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use cupid::{BirthData, ChartAssembler, SynastryScorer};
use serde::Serialize;

#[derive(Serialize)]
struct MatchOut {
    score: cupid::CompatibilityScore,
    /// overall(a, b) - overall(b, a)
    #[serde(rename = "symmetryGap")]
    symmetry_gap: i32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cupid_config::load_config(cli.config.as_deref())?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    match &config.source {
        Some(path) => log::debug!("loaded config from {}", path.display()),
        None => log::debug!("no config file found, using defaults"),
    }

    let assembler = ChartAssembler::new(config.chart.clone());
    let out = match cli.command {
        Commands::Chart { birth } => {
            let birth: BirthData = birth.into();
            let chart = assembler
                .assemble_birth(&birth)
                .with_context(|| format!("could not assemble chart for {}", birth.birth_date))?;
            to_json(&chart, cli.pretty)?
        }
        Commands::Match {
            a_date,
            a_time,
            a_place,
            b_date,
            b_time,
            b_place,
        } => {
            let a = BirthData {
                birth_date: a_date,
                birth_time: a_time,
                birth_place: a_place,
            };
            let b = BirthData {
                birth_date: b_date,
                birth_time: b_time,
                birth_place: b_place,
            };
            let chart_a = assembler.assemble_birth(&a).context("could not assemble chart A")?;
            let chart_b = assembler.assemble_birth(&b).context("could not assemble chart B")?;

            let scorer = SynastryScorer::new();
            let score = scorer.score(&chart_a, &chart_b);
            let symmetry_gap = scorer.symmetry_gap(&chart_a, &chart_b);
            if symmetry_gap != 0 {
                log::info!(
                    "score is direction dependent: swapping charts moves it by {}",
                    -symmetry_gap
                );
            }
            to_json(&MatchOut { score, symmetry_gap }, cli.pretty)?
        }
    };

    println!("{}", out);
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}
