use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use percept_classifiers::config::{self, TrainConfig};
use percept_classifiers::pipeline;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default().filter_or("PERCEPT_LOG", "error,percept_classifiers=info"),
        )
        .init();

    let matches = Command::new("percept-train")
        .version(clap::crate_version!())
        .about("Train a linear SVM classifier from extracted perception feature vectors")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("train")
                .about("Train, cross-validate, and persist the classifier")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .help("Path to a JSON training configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help(
                            "Path to the serialized training set (.bin or .csv). \
                             Overrides the input path in the configuration file.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(
                            "File path the fitted model bundle will be written to. \
                             Overrides the output path in the configuration file.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("no_show")
                        .long("no-show")
                        .help("Do not open the confusion-matrix figures after training")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("train", sub_m)) => handle_train(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_train(matches: &ArgMatches) -> Result<()> {
    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("[Percept] Training from config: {:?}", config_path);
        config::load_config(config_path)?
    } else {
        TrainConfig::default()
    };

    if let Some(input) = matches.get_one::<PathBuf>("input") {
        config.input = input.clone();
    }
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output = output.clone();
    }

    match pipeline::train_from_config(&config) {
        Ok(outcome) => {
            outcome.report.print_summary();

            let report_dir = config
                .output
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            let (counts, normalized) = outcome.report.write_html(&report_dir)?;
            eprintln!(
                "[Percept] Confusion matrix figures: {}, {}",
                counts.display(),
                normalized.display()
            );

            if !matches.get_flag("no_show") {
                outcome.report.count_plot()?.show();
                outcome.report.normalized_plot()?.show();
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Training failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
