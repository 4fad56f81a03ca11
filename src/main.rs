use clap::{Parser, Subcommand};
use crossterm::style::Stylize;

use conv_evolution::convolution::{Bias, ConvolutionNetworkFactory, FunctionBias, Neuron, Pipes};
use conv_evolution::trainer::{Trainer, TrainerSettings, TrainingData};

#[derive(Parser)]
#[command(name = "conv-evolution")]
#[command(version)]
#[command(about = "Convolution-style pipe networks with genetically evolved biases")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a 3 layer network of 5 neurons and run it once
    Construct {
        /// Fraction of the previous layer each neuron reads
        #[arg(short, long, default_value = "0.5")]
        interconnectivity: f64,
    },

    /// Evaluate every catalog bias on one value
    Biases {
        #[arg(default_value = "2.0", allow_negative_numbers = true)]
        value: f64,
    },

    /// Train a 2x2 network to output zeros
    Train {
        #[arg(short, long, default_value = "20")]
        generations: usize,

        #[arg(short, long, default_value = "20")]
        population: usize,

        #[arg(short, long, default_value = "0.2")]
        mutation_rate: f64,

        #[arg(short, long, default_value = "0.7")]
        crossover_rate: f64,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Construct { interconnectivity } => construct(interconnectivity),
        Commands::Biases { value } => biases(value),
        Commands::Train {
            generations,
            population,
            mutation_rate,
            crossover_rate,
            seed,
        } => {
            let settings = TrainerSettings {
                population_size: population,
                mutation_rate,
                crossover_rate,
                seed: Some(seed),
                ..TrainerSettings::standard()
            };
            train(settings, generations)
        }
    }
}

fn heading(title: &str) {
    println!("{}", title.bold().cyan());
    println!("{}", "-".repeat(title.len()).dark_grey());
}

fn construct(interconnectivity: f64) -> Result<(), Box<dyn std::error::Error>> {
    heading("Network construction");

    let factory = ConvolutionNetworkFactory::new(interconnectivity, 3, 5)?;
    let mut pipes = Pipes::new();
    let inputs = pipes.create_many(5);
    let outputs = pipes.create_many(5);
    let mut network = factory.construct(pipes, &inputs, &outputs)?;

    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    network.set_inputs(&values);
    network.calculate();

    println!("Input values: {:?}", values);
    println!("Output values:");
    for (i, &pipe) in outputs.iter().enumerate() {
        println!("  Output[{}]: {:.4}", i, network.pipes().get(pipe));
    }
    Ok(())
}

fn biases(value: f64) -> Result<(), Box<dyn std::error::Error>> {
    heading("Bias functions");

    println!("Input value: {}", value);
    for bias in Bias::CATALOG.iter() {
        println!("  {:<12} {:>10.4}  {}", bias.name(), bias.evaluate(value, None), bias.to_string().dark_grey());
    }

    let square = Bias::Function(FunctionBias::new(
        |x: f64, _: Option<&Neuron>| x * x,
        "Square",
        Some("Square(x) = x^2".into()),
    ));
    println!("  {:<12} {:>10.4}  {}", square.name(), square.evaluate(value, None), square.to_string().dark_grey());
    Ok(())
}

fn train(settings: TrainerSettings, generations: usize) -> Result<(), Box<dyn std::error::Error>> {
    heading("Genetic training");

    let factory = ConvolutionNetworkFactory::new(1.0, 2, 2)?;
    let mut pipes = Pipes::new();
    let inputs = pipes.create_many(2);
    let outputs = pipes.create_many(2);
    let mut network = factory.construct(pipes, &inputs, &outputs)?;

    let training_set = vec![
        TrainingData::new(vec![1.0, 2.0], vec![0.0, 0.0]),
        TrainingData::new(vec![3.0, 4.0], vec![0.0, 0.0]),
        TrainingData::new(vec![-1.0, -2.0], vec![0.0, 0.0]),
    ];

    let mut trainer = Trainer::new(settings)?;
    let initial = trainer.fitness(&mut network, &training_set)?;
    println!("Initial fitness (MSE): {:.4}", initial);

    println!("Training for {} generations...", generations);
    trainer.train(&mut network, &training_set, generations)?;

    let last = trainer.fitness(&mut network, &training_set)?;
    println!("Final fitness (MSE): {}", format!("{:.4}", last).green());
    if initial > 0.0 {
        println!("Improvement: {:.2}%", (initial - last) / initial * 100.0);
    }

    println!();
    println!("{}", "Trained network:".bold());
    for example in training_set.iter() {
        network.set_inputs(example.inputs());
        network.calculate();
        let produced: Vec<String> = network.read_outputs().iter().map(|v| format!("{:.4}", v)).collect();
        println!("  {:?} -> [{}] (expected {:?})", example.inputs(), produced.join(", "), example.expected_outputs());
    }
    Ok(())
}
