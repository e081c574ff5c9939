use std::env;
use std::path::Path;
use std::process::ExitCode;

use log::error;

use recipe_box::{AppConfig, MemoryStorage, Uploader};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(file) = args.get(1) else {
        eprintln!("Usage: recipe-box <recipe.txt>");
        return ExitCode::FAILURE;
    };

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load configuration: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let storage = MemoryStorage::with_subfolder(&config.user_id, &config.preferred_folder);
    let uploader = Uploader::new(&storage, &config.user_id, &config.preferred_folder);

    println!("Reading file...");
    match uploader.upload_file(Some(Path::new(file))).await {
        Ok(receipt) => {
            println!("{}", receipt.success_message());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
