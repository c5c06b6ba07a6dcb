mod shooter;

use anyhow::Context as _;
use log::LevelFilter;
use survivor_app::{logging, App};
use survivor_assets::{load_assets, AssetManifest};
use survivor_game::{AnimationSet, GameConfig, GameState};

use shooter::Shooter;

fn main() -> anyhow::Result<()> {
    logging::init(LevelFilter::Info)?;

    let manifest = AssetManifest::default();
    let assets = load_assets(&manifest)
        .with_context(|| format!("failed to load assets from {}", manifest.root.display()))?;

    let config = GameConfig::default();
    let (width, height) = (config.world_size.x as u32, config.world_size.y as u32);
    let animations = AnimationSet::new(assets.moving, assets.idle, assets.reloading);
    let state = GameState::new(config, animations, assets.background);

    App::new(Shooter::new(state, assets.store))
        .with_title("Survivor")
        .with_size(width, height)
        .run()
}
