//! `parley doctor` — Diagnose configuration and provider health.

use std::path::Path;
use std::sync::Arc;

use parley_config::AppConfig;
use parley_core::{Provider, ProviderError};

/// Run every check; fails when any of them reported an issue.
pub async fn run(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Parley Doctor — System Diagnostics");
    println!("==================================\n");

    let issues = diagnose(config_path).await;

    println!();
    if issues == 0 {
        println!("  All checks passed!");
        Ok(())
    } else {
        println!("  {issues} issue(s) found. See above for details.");
        Err(format!("doctor found {issues} issue(s)").into())
    }
}

/// Print each check and return the number of issues found.
async fn diagnose(config_path: &Path) -> usize {
    if !config_path.exists() {
        println!("  [warn] No config file at {} — using defaults (run `parley init`)", config_path.display());
    }

    let config = match AppConfig::load_with_env(config_path) {
        Ok(config) => {
            println!("  [ok]   Configuration valid");
            config
        }
        Err(e) => {
            println!("  [fail] Configuration invalid: {e}");
            return 1;
        }
    };

    let mut issues = 0;
    println!("  [ok]   Provider: {} / model: {}", config.default_provider, config.default_model);

    if config.has_api_key() {
        println!("  [ok]   API key configured");
    } else {
        println!("  [warn] No API key configured — set PARLEY_API_KEY or add api_key to the config");
        issues += 1;
    }

    let router = match parley_providers::build_from_config(&config) {
        Ok(router) => router,
        Err(e) => {
            println!("  [fail] {e}");
            return issues + 1;
        }
    };

    let Some(provider) = router.default() else {
        println!("  [fail] Provider '{}' is not registered", router.default_name());
        return issues + 1;
    };

    match provider.health_check().await {
        Ok(true) => {
            println!("  [ok]   Provider '{}' reachable", provider.name());
            issues += check_model(&provider, &config.default_model).await;
        }
        Ok(false) => {
            println!("  [fail] Provider '{}' answered with an error status", provider.name());
            issues += 1;
        }
        Err(ProviderError::Timeout(_)) => {
            println!(
                "  [fail] Provider '{}' timed out after {}s",
                provider.name(),
                config.request_timeout_secs
            );
            issues += 1;
        }
        Err(e) => {
            println!("  [fail] Provider '{}' unreachable: {e}", provider.name());
            issues += 1;
        }
    }

    issues
}

/// Check that the provider serves `model`. Providers that don't list their
/// models are given the benefit of the doubt.
async fn check_model(provider: &Arc<dyn Provider>, model: &str) -> usize {
    match provider.list_models().await {
        Ok(models) if models.is_empty() => {
            println!("  [warn] Provider '{}' did not list its models", provider.name());
            0
        }
        Ok(models) if models.iter().any(|m| m == model) => {
            println!("  [ok]   Model '{model}' available ({} models listed)", models.len());
            0
        }
        Ok(models) => {
            println!(
                "  [fail] Model '{model}' not offered by '{}' ({} models listed)",
                provider.name(),
                models.len()
            );
            1
        }
        Err(e) => {
            println!("  [fail] Could not list models: {e}");
            1
        }
    }
}
