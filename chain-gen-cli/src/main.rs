use std::path::PathBuf;

use chain_gen_core::model::generation_input::{GenerationInput, SeedMode};
use chain_gen_core::model::generator::SentenceGenerator;
use chain_gen_core::model::printer::ModelReport;
use chain_gen_core::model::word_model::Model;
use clap::{Parser, Subcommand};
use log::info;

/// Word-transition sentence generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the model of a text file and print it
    Model {
        /// Source text file
        file: PathBuf,

        /// Print a JSON report instead of the text dump
        #[arg(long)]
        json: bool,
    },

    /// Build the model of a text file and print random sentences from it
    Sentence {
        /// Source text file
        file: PathBuf,

        /// Number of words in each sentence
        words: usize,

        /// Number of sentences to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible output (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Model { file, json } => {
            let model = Model::from_file(&file)?;
            if json {
                println!("{}", ModelReport::new(&model).to_json()?);
            } else {
                print!("{}", model.dump());
            }
        }
        Commands::Sentence { file, words, count, seed } => {
            // Validate arguments before reading the source
            let mut input = GenerationInput::new(words, count)?;
            input.seed = seed.map_or(SeedMode::Entropy, SeedMode::Fixed);

            info!("loading model from {}", file.display());
            let mut app = SentenceGenerator::from_file(&file, input.seed)?;

            for sentence in app.generate_batch(&input) {
                match sentence {
                    Some(s) => println!("Random sentence of {} words: \"{}\"", input.length(), s),
                    None => println!("No sentences of selected length possible from this model."),
                }
            }
        }
    }

    Ok(())
}
