use anyhow::Result;
use wardrobe_advisor::adapters::random::ScriptedRandom;
use wardrobe_advisor::core::bands::rules_for;
use wardrobe_advisor::domain::model::{ColorCategory, GarmentCategory, NewGarment, TemperatureBand};
use wardrobe_advisor::domain::ports::ItemStore;
use wardrobe_advisor::{band_of, InMemoryStore, OutfitRecommender, RngSource};

fn cold_wardrobe() -> Result<InMemoryStore> {
    let store = InMemoryStore::new();
    store.add(NewGarment::new("Thermal top", GarmentCategory::Tops, -5, 12).with_color(ColorCategory::Gray))?;
    store.add(NewGarment::new("Wool trousers", GarmentCategory::Bottoms, -10, 15).with_color(ColorCategory::Navy))?;
    store.add(NewGarment::new("Parka", GarmentCategory::Outerwear, -20, 10).with_color(ColorCategory::Black))?;
    store.add(NewGarment::new("Boots", GarmentCategory::Shoes, -15, 12).with_color(ColorCategory::Brown))?;
    store.add(NewGarment::new("Scarf", GarmentCategory::Accessories, -20, 8).with_color(ColorCategory::Red))?;
    Ok(store)
}

#[test]
fn test_cold_day_with_full_wardrobe() -> Result<()> {
    assert_eq!(band_of(5.0), TemperatureBand::Cold);

    let recommender = OutfitRecommender::new(cold_wardrobe()?);
    let mut rng = RngSource::seeded(2024);
    let outfits = recommender.recommend(5.0, None, 3, &mut rng)?;

    assert_eq!(outfits.len(), 3);
    for outfit in &outfits {
        assert!(outfit.missing.is_empty());
        assert!(outfit.score >= 50);
        assert_eq!(outfit.band, TemperatureBand::Cold);
        for category in rules_for(TemperatureBand::Cold).required {
            assert!(outfit.items.contains_key(category));
        }
    }
    Ok(())
}

#[test]
fn test_empty_wardrobe_reports_everything_missing() -> Result<()> {
    let recommender = OutfitRecommender::new(InMemoryStore::new());
    let mut rng = RngSource::seeded(1);
    let outfits = recommender.recommend(5.0, None, 4, &mut rng)?;

    assert_eq!(outfits.len(), 4);
    for outfit in &outfits {
        assert_eq!(outfit.missing, vec!["Tops", "Bottoms", "Outerwear", "Shoes"]);
        assert_eq!(outfit.score, 0);
        assert_eq!(outfit.total_items(), 0);
    }
    Ok(())
}

#[test]
fn test_out_of_range_garments_are_ignored() -> Result<()> {
    let store = cold_wardrobe()?;
    store.add(NewGarment::new("Linen shirt", GarmentCategory::Tops, 22, 38))?;

    let recommender = OutfitRecommender::new(store);
    let mut rng = RngSource::seeded(9);
    for outfit in recommender.recommend(30.0, None, 5, &mut rng)? {
        // Only the linen shirt suits 30°C.
        assert_eq!(outfit.items[&GarmentCategory::Tops].name, "Linen shirt");
        assert_eq!(outfit.missing, vec!["Bottoms", "Shoes"]);
    }
    Ok(())
}

#[test]
fn test_style_filter_keeps_untagged_items() -> Result<()> {
    let store = InMemoryStore::new();
    store.add(NewGarment::new("Dress shirt", GarmentCategory::Tops, 10, 30).with_style("formal"))?;
    store.add(NewGarment::new("Jersey", GarmentCategory::Tops, 10, 30).with_style("sporty"))?;
    store.add(NewGarment::new("Chinos", GarmentCategory::Bottoms, 10, 30))?;
    store.add(NewGarment::new("Oxfords", GarmentCategory::Shoes, 10, 30).with_style("formal"))?;

    let recommender = OutfitRecommender::new(store);
    let mut rng = RngSource::seeded(77);
    let outfits = recommender.recommend(20.0, Some("formal"), 10, &mut rng)?;

    for outfit in &outfits {
        assert_eq!(outfit.items[&GarmentCategory::Tops].name, "Dress shirt");
        assert_eq!(outfit.items[&GarmentCategory::Bottoms].name, "Chinos");
        assert!(outfit.missing.is_empty());
    }

    let sporty = recommender.recommend(20.0, Some("sporty"), 1, &mut rng)?;
    assert_eq!(sporty[0].missing, vec!["Shoes"]);
    Ok(())
}

#[test]
fn test_duplicate_candidates_are_kept() -> Result<()> {
    let recommender = OutfitRecommender::new(cold_wardrobe()?);
    // Every pick lands on the only item and every optional roll succeeds.
    let mut rng = ScriptedRandom::new(vec![0], vec![0.99]);
    let outfits = recommender.recommend(0.0, None, 3, &mut rng)?;

    assert_eq!(outfits.len(), 3);
    let first: Vec<u64> = outfits[0].items.values().map(|i| i.id).collect();
    for outfit in &outfits[1..] {
        let ids: Vec<u64> = outfit.items.values().map(|i| i.id).collect();
        assert_eq!(ids, first);
    }
    Ok(())
}

#[test]
fn test_sorted_best_first() -> Result<()> {
    let store = InMemoryStore::new();
    store.add(NewGarment::new("Tee", GarmentCategory::Tops, 10, 30).with_color(ColorCategory::White))?;
    store.add(NewGarment::new("Jeans", GarmentCategory::Bottoms, 10, 30).with_color(ColorCategory::Blue))?;
    store.add(NewGarment::new("Jacket", GarmentCategory::Outerwear, 10, 20).with_color(ColorCategory::Green))?;
    store.add(NewGarment::new("Beanie", GarmentCategory::Accessories, 10, 20).with_color(ColorCategory::Red))?;

    let recommender = OutfitRecommender::new(store);
    let mut rng = RngSource::seeded(5);
    let outfits = recommender.recommend(15.0, None, 8, &mut rng)?;

    assert!(outfits.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(outfits.iter().all(|o| o.missing == vec!["Shoes"]));
    Ok(())
}

#[test]
fn test_wardrobe_summary() -> Result<()> {
    let store = cold_wardrobe()?;
    store.add(NewGarment::new("Tee", GarmentCategory::Tops, 15, 35))?;

    let summary = OutfitRecommender::new(store).wardrobe_summary()?;
    assert_eq!(summary.statistics.total, 6);
    assert_eq!(summary.statistics.by_category[&GarmentCategory::Tops], 2);
    assert_eq!(summary.coverage.len(), 6);
    assert_eq!(summary.recent_items.len(), 5);
    assert_eq!(summary.recent_items[0].name, "Tee");

    let cold = summary
        .coverage
        .iter()
        .find(|c| c.band == TemperatureBand::Cold)
        .unwrap();
    // Midpoint 5°C: everything except the tee.
    assert_eq!(cold.count, 5);
    assert!(cold.has_complete_outfit);

    let hot = summary.coverage.iter().find(|c| c.band == TemperatureBand::Hot).unwrap();
    assert!(!hot.has_complete_outfit);
    Ok(())
}
