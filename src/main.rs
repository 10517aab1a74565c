//! filegate - Entry Point
//!
//! Stores local files through a named upload policy:
//!
//! ```text
//! filegate <policy> <file>...
//! ```

use log::{error, info, warn};
use std::path::Path;
use std::process::ExitCode;

use filegate::storage::filesystem::{create_directory, directory_exists};
use filegate::utils::logging::setup_logging;
use filegate::{PolicyRegistry, StorageConfig, StorageEngine, StorageService, Upload};

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let config = match StorageConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let registry = config.registry();
    if let Err(message) = prepare_storage(&config, &registry) {
        error!("{}", message);
        return ExitCode::FAILURE;
    }

    let mut args = std::env::args().skip(1);
    let Some(policy_name) = args.next() else {
        eprintln!("usage: filegate <policy> <file>...");
        eprintln!("policies: {}", registry.names().join(", "));
        return ExitCode::FAILURE;
    };
    let Some(policy) = registry.get(&policy_name) else {
        error!("Unknown policy '{}'", policy_name);
        return ExitCode::FAILURE;
    };

    let service = StorageService::new(StorageEngine::from_config(&config));
    let mut failed = false;

    for file in args {
        let path = Path::new(&file);
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Cannot read {}: {}", file, e);
                failed = true;
                continue;
            }
        };

        let filename = path.file_name().map(|name| name.to_string_lossy().to_string());
        let upload = Upload::new(bytes, filename.as_deref());

        match service
            .write_with_policy(upload, policy.clone())
            .await
            .into_result()
        {
            Ok(written) => println!("{} -> {}", file, written.relative_path.display()),
            Err(errors) => {
                eprintln!("{}: {}", file, errors.join("; "));
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Make sure the root (and, when asked, every policy folder) exists.
fn prepare_storage(config: &StorageConfig, registry: &PolicyRegistry) -> Result<(), String> {
    let root = config.storage_root_path();

    if !directory_exists(&root) {
        if !config.create_root {
            return Err(format!("Storage root {} does not exist", root.display()));
        }
        create_directory(&root)
            .map_err(|e| format!("Failed to create storage root {}: {}", root.display(), e))?;
    }
    info!("Storage root directory: {}", root.display());

    if config.prepare_policy_folders {
        for policy in registry.iter() {
            let folder = root.join(policy.relative_path());
            match create_directory(&folder) {
                Ok(()) => info!("Policy '{}' stores into {}", policy.name, folder.display()),
                Err(e) => warn!("Failed to create {}: {}", folder.display(), e),
            }
        }
    }

    Ok(())
}
