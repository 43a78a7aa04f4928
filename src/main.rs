//! Breed Viewer - web server entry point

use breed_viewer::{BreedCache, DogApi};
use clap::Parser;
use std::path::PathBuf;

/// Dog breed catalog server with cached API proxying
#[derive(Parser, Debug)]
#[command(name = "breed_viewer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 5050)]
    port: u16,

    /// Directory containing the 3D model files
    #[arg(long, default_value = "models")]
    models_dir: PathBuf,

    /// Base URL of the dog breed API
    #[arg(long, default_value = breed_viewer::dogapi::DOG_API_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting breed_viewer...");
    log::info!("Models directory: {}", args.models_dir.display());

    let cache = BreedCache::new(DogApi::new(args.api_url.as_str()));

    if let Err(e) = breed_viewer::web::serve(cache, args.models_dir, args.port).await {
        log::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
