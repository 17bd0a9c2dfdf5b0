//! Domain Scout - AI-powered domain name brainstorming and evaluation
//!
//! A simple CLI that generates creative domain names for a business
//! description, evaluates them in parallel and prints a ranked report.

use domain_scout::{
    agent::{DRIVER_MODEL, SWARM_MODEL},
    filter_worth_checking, rank_evaluations, DriverAgent, DriverOptions, LlmConfig, Result,
    SwarmAgent, SwarmOptions,
};
use rand::Rng;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = domain_scout::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Get command line arguments
    let args: Vec<String> = env::args().collect();

    // Check for help
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    // Determine if user provided a description
    let description = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        String::new()
    };

    // Run the main flow
    if let Err(e) = run_domain_scout(&description).await {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }

    Ok(())
}

/// Main domain scout workflow
async fn run_domain_scout(description: &str) -> Result<()> {
    println!("🔭 Domain Scout - AI-powered domain name brainstorming");
    println!("═════════════════════════════════════════════════════");
    println!();

    let api_key = env::var("ANTHROPIC_API_KEY").map_err(|_| {
        domain_scout::DomainScoutError::config(
            "No API key configured. Please set the ANTHROPIC_API_KEY environment variable."
                .to_string(),
        )
    })?;

    let business_name = if description.is_empty() {
        random_business_description()
    } else {
        description.to_string()
    };
    let vibe = env::var("VIBE").unwrap_or_else(|_| "modern and memorable".to_string());

    let driver = DriverAgent::new(&LlmConfig {
        api_key: api_key.clone(),
        model: env::var("DRIVER_MODEL").unwrap_or_else(|_| DRIVER_MODEL.to_string()),
        base_url: None,
    })?;

    let swarm = SwarmAgent::new(&LlmConfig {
        api_key,
        model: env::var("SWARM_MODEL").unwrap_or_else(|_| SWARM_MODEL.to_string()),
        base_url: None,
    })?;

    println!("🎯 Brainstorming domains for: \"{}\"", business_name);
    println!("🤖 Generating candidates with AI...");

    let generated = driver
        .generate(&DriverOptions {
            business_name: business_name.clone(),
            tld_preferences: vec![
                "com".to_string(),
                "io".to_string(),
                "co".to_string(),
                "dev".to_string(),
            ],
            vibe: vibe.clone(),
            batch_num: 1,
            count: Some(20),
            ..Default::default()
        })
        .await?;

    if generated.candidates.is_empty() {
        println!("❌ No domains were generated. Please try a different description.");
        return Ok(());
    }

    display_candidates(&generated.candidates);

    println!("⚖️  Evaluating candidates...");
    println!();

    let domains: Vec<String> = generated
        .candidates
        .iter()
        .map(|c| c.domain.clone())
        .collect();

    let evaluated = swarm
        .evaluate(&SwarmOptions {
            domains,
            vibe,
            business_name,
            ..Default::default()
        })
        .await;

    let worth_checking = filter_worth_checking(
        &evaluated.evaluations,
        domain_scout::agent::DEFAULT_MIN_SCORE,
    );
    let ranked = rank_evaluations(&worth_checking);

    display_ranked(&ranked, evaluated.evaluations.len());

    // Token usage summary
    println!("📈 Summary:");
    println!("   🎨 Candidates generated: {}", generated.candidates.len());
    println!("   ⚖️  Worth checking: {}", ranked.len());
    println!(
        "   🪙 Tokens: {} in / {} out",
        generated.input_tokens + evaluated.input_tokens,
        generated.output_tokens + evaluated.output_tokens,
    );

    Ok(())
}

/// Pick a sample business description when none is provided
fn random_business_description() -> String {
    let samples = vec![
        "innovative tech startup",
        "creative digital agency",
        "modern e-commerce platform",
        "AI-powered productivity tool",
        "sustainable lifestyle brand",
        "next-generation mobile app",
        "revolutionary fintech service",
    ];

    let mut rng = rand::thread_rng();
    let sample = samples[rng.gen_range(0..samples.len())];
    println!("🎲 No description given, brainstorming for: \"{}\"", sample);
    sample.to_string()
}

/// Display generated candidates in a compact grid
fn display_candidates(candidates: &[domain_scout::DomainCandidate]) {
    println!();
    println!("🎨 Generated Candidates ({}):", candidates.len());
    println!("═══════════════════════");

    let mut count = 0;
    for candidate in candidates {
        count += 1;
        print!("{:2}. {:<22}", count, candidate.domain);

        // New line every 3 domains for readability
        if count % 3 == 0 {
            println!();
        }
    }

    if candidates.len() % 3 != 0 {
        println!();
    }
    println!();
}

/// Display ranked evaluations with their flags
fn display_ranked(ranked: &[domain_scout::DomainEvaluation], total: usize) {
    println!("🏆 Ranked Domains ({} of {} worth checking):", ranked.len(), total);
    println!("─────────────────────────────────────────");

    for (index, evaluation) in ranked.iter().enumerate() {
        print!("{:2}. {:<22} {:.2}", index + 1, evaluation.domain, evaluation.score);
        if !evaluation.flags.is_empty() {
            print!("  ⚠️  {}", evaluation.flags.join(", "));
        }
        println!();
        if !evaluation.notes.is_empty() {
            println!("    💭 {}", evaluation.notes);
        }
    }
    println!();
}

/// Print help information
fn print_help() {
    println!("🔭 Domain Scout - AI-powered domain name brainstorming");
    println!("═════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    domain-scout [DESCRIPTION]");
    println!();
    println!("EXAMPLES:");
    println!("    domain-scout                           # Brainstorm for a random idea");
    println!("    domain-scout \"AI productivity app\"     # Brainstorm for a description");
    println!("    domain-scout \"cozy coffee roastery\"    # Brainstorm for a business");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    ANTHROPIC_API_KEY  Anthropic API key (required)");
    println!("    DRIVER_MODEL       Generation model (default: {})", DRIVER_MODEL);
    println!("    SWARM_MODEL        Evaluation model (default: {})", SWARM_MODEL);
    println!("    VIBE               Brand vibe to aim for");
    println!();
    println!("FEATURES:");
    println!("    • AI-powered domain generation tuned by business vibe");
    println!("    • Fast parallel evaluation with heuristic fallback");
    println!("    • Ranked report with pronounceability and brand-fit flags");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
