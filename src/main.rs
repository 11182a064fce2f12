use clap::{Parser, Subcommand};
use itertools::Itertools;

use swinglab::SwingLabError;
use swinglab::drills::DrillCatalog;
use swinglab::metrics::sample_trends;
use swinglab::session::sample_sessions;
use swinglab::ui::config::AppConfig;
use swinglab::ui::performance::PerformanceApp;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the performance analytics window
    Performance,
    /// Print the practice drill catalog
    Drills {
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn performance() -> Result<(), SwingLabError> {
    let app_config = AppConfig::from_local_file().unwrap_or_default();
    let window_position = app_config.performance_window_position.clone();
    let window_size = app_config.performance_window_size.clone();

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(window_size)
        .with_position(window_position);

    eframe::run_native(
        "Swinglab",
        native_options,
        Box::new(|cc| {
            Ok(Box::new(PerformanceApp::new(
                sample_sessions(),
                sample_trends(),
                app_config,
                cc,
            )))
        }),
    )
    .expect("could not start app");
    Ok(())
}

fn drills(category: Option<&str>) -> Result<(), SwingLabError> {
    let catalog = DrillCatalog::new();
    let categories = match category {
        Some(id) => vec![catalog.category(id)?],
        None => catalog.categories().iter().collect_vec(),
    };

    for category in categories {
        println!("{} ({})", category.title, category.id);
        for drill in &category.drills {
            println!(
                "  {} — {} [{} | {}]",
                drill.title, drill.focus, drill.kind, drill.duration
            );
            println!("    {}", drill.description);
            for step in &drill.setup {
                println!("    setup: {step}");
            }
            for target in &drill.targets {
                println!("    target: {target}");
            }
        }
        println!();
    }
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    match &cli.command {
        Commands::Performance => performance().expect("Error while running performance window"),
        Commands::Drills { category } => {
            drills(category.as_deref()).expect("Error while printing drill catalog")
        }
    };
}
