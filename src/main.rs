use std::path::Path;

use anyhow::Context;
use clap::Parser;
use wardrobe_advisor::adapters::uploads::UploadArchive;
use wardrobe_advisor::adapters::weather::resolve_temperature;
use wardrobe_advisor::config::{Cli, Command, RecommendArgs, WardrobeCommand};
use wardrobe_advisor::core::bands::{band_spec, rules_for};
use wardrobe_advisor::domain::model::{GarmentItem, NewGarment};
use wardrobe_advisor::domain::ports::ItemStore;
use wardrobe_advisor::utils::error::ErrorSeverity;
use wardrobe_advisor::utils::{logger, validation};
use wardrobe_advisor::{
    band_of, AppConfig, CsvStore, ImageAnalyzer, OutfitRecommender, RngSource, WardrobeError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config file '{}'", cli.config))?;
    if let Some(store) = &cli.store {
        config.store.path = store.clone();
    }

    logger::init_logger(config.logging.format, cli.verbose);

    if let Err(e) = validation::Validate::validate(&config) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,
            ErrorSeverity::Medium => 3,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 4,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(command: Command, config: &AppConfig) -> Result<(), WardrobeError> {
    match command {
        Command::Band { temperature } => {
            let band = band_of(temperature);
            let spec = band_spec(band);
            println!("{:.1}°C -> {} ({})", temperature, band, spec.label);
            println!("{}", rules_for(band).tips);
        }
        Command::Recommend(args) => recommend(args, config).await?,
        Command::Analyze { image, add_as } => {
            let size = std::fs::metadata(&image)?.len();
            validation::validate_upload(
                &image,
                size,
                &config.upload.allowed_extensions,
                config.upload.max_bytes,
            )?;

            let inference = ImageAnalyzer::default().analyze_file(&image);
            println!("{}", serde_json::to_string_pretty(&inference)?);

            if let Some(name) = add_as {
                if !inference.is_usable() {
                    tracing::warn!("adding garment from a zero-confidence analysis, defaults were used");
                }
                let mut garment = inference.into_new_garment(name);
                let archive = UploadArchive::new(&config.upload.dir);
                let archived = archive.store(Path::new(&image), garment.category)?;
                garment.image_path = Some(archived.to_string_lossy().into_owned());

                let store = CsvStore::open(&config.store.path)?;
                match store.add(garment) {
                    Ok(item) => println!("✅ Added #{} {}", item.id, item.name),
                    Err(e) => {
                        archive.discard(&archived)?;
                        return Err(e);
                    }
                }
            }
        }
        Command::Wardrobe(sub) => wardrobe(sub, config)?,
        Command::Summary => {
            let store = CsvStore::open(&config.store.path)?;
            let summary = OutfitRecommender::new(store).wardrobe_summary()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

async fn recommend(args: RecommendArgs, config: &AppConfig) -> Result<(), WardrobeError> {
    let temperature = resolve_temperature(config, args.temperature, args.city.as_deref()).await;

    let style = args.style.or_else(|| config.recommend.default_style.clone());
    let count = args.count.unwrap_or(config.recommend.default_count);

    let mut rng = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    let store = CsvStore::open(&config.store.path)?;
    let outfits = OutfitRecommender::new(store).recommend(temperature, style.as_deref(), count, &mut rng)?;

    if let Some(first) = outfits.first() {
        println!("{:.1}°C, {}: {}", temperature, first.band, first.tips);
    }
    for outfit in &outfits {
        println!("\nOutfit #{} (score {})", outfit.id, outfit.score);
        for (category, item) in &outfit.items {
            println!("  {:<12} {}", category.label(), describe(item));
        }
        if !outfit.missing.is_empty() {
            println!("  missing: {}", outfit.missing.join(", "));
        }
    }
    Ok(())
}

fn wardrobe(command: WardrobeCommand, config: &AppConfig) -> Result<(), WardrobeError> {
    let store = CsvStore::open(&config.store.path)?;
    match command {
        WardrobeCommand::List { category } => {
            for item in store.list(category)? {
                println!(
                    "#{:<4} {:<12} {} [{}..{}°C]",
                    item.id,
                    item.category.label(),
                    describe(&item),
                    item.temp_min,
                    item.temp_max
                );
            }
        }
        WardrobeCommand::Add {
            name,
            category,
            color,
            style,
            temp_min,
            temp_max,
            image,
            description,
        } => {
            let garment = NewGarment {
                name,
                category,
                color,
                style,
                temp_min,
                temp_max,
                image_path: image,
                description,
            };
            let item = store.add(garment)?;
            println!("✅ Added #{} {}", item.id, item.name);
        }
        WardrobeCommand::Remove { id } => {
            let item = store.get(id)?.ok_or(WardrobeError::NotFound { id })?;
            store.remove(id)?;
            if let Some(photo) = &item.image_path {
                if UploadArchive::new(&config.upload.dir).discard(photo)? {
                    tracing::info!("deleted photo {}", photo);
                }
            }
            println!("🗑️  Removed #{}", id);
        }
    }
    Ok(())
}

fn describe(item: &GarmentItem) -> String {
    let mut text = item.name.clone();
    if let Some(color) = item.color {
        text.push_str(&format!(" ({})", color));
    }
    if let Some(style) = &item.style {
        text.push_str(&format!(" [{}]", style));
    }
    text
}
