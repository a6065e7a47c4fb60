use anyhow::bail;
use clap::{Parser, Subcommand};
use kagura::{perform_ritual, CreaturePatch, ItemId, ProfilePersistence};
use kagura_core::{CreatureId, Rarity, SensorSnapshot, WorldState, WorldStateRegistry};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Profile to load
    #[arg(long, default_value = "default")]
    profile: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Perform a summoning ritual
    Summon {
        /// Battery charge fraction in [0, 1]
        #[arg(long)]
        battery: Option<f32>,
        /// Ambient light in lux
        #[arg(long)]
        light: Option<f32>,
        /// Capture latitude (requires --lon)
        #[arg(long)]
        lat: Option<f64>,
        /// Capture longitude (requires --lat)
        #[arg(long)]
        lon: Option<f64>,
        /// Override the scheduled world state (e.g. "echo-rift")
        #[arg(long)]
        world: Option<String>,
    },
    /// List the collection
    List,
    /// Show one creature in full
    Show { id: String },
    /// Rename a creature
    Rename { id: String, name: String },
    /// Release a creature from the collection
    Release { id: String },
    /// Buy a shop item
    Buy { item: String },
    /// Current world state, collection and shop status
    Status,
    /// Delete the profile and start over
    Reset,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if matches!(args.command, Command::Reset) {
        ProfilePersistence::delete_profile(&args.profile)?;
        println!("Profile '{}' deleted", args.profile);
        return Ok(());
    }

    let persistence = ProfilePersistence::new(&args.profile)?;
    let (mut collection, settings, mut shop) = persistence.load();

    match args.command {
        Command::Summon {
            battery,
            light,
            lat,
            lon,
            world,
        } => {
            let world_state = match world {
                Some(name) => match WorldState::parse(&name) {
                    Some(state) => state,
                    None => bail!("Unknown world state: {}", name),
                },
                None => kagura::current_world_state(),
            };

            let mut snapshot = SensorSnapshot::empty();
            if let Some(level) = battery {
                snapshot = snapshot.with_battery_level(level);
            }
            if let Some(lux) = light {
                snapshot = snapshot.with_light_level(lux);
            }
            if let (Some(latitude), Some(longitude)) = (lat, lon) {
                snapshot = snapshot.with_location(latitude, longitude);
            }

            let id = perform_ritual(&snapshot, &settings, world_state, &mut collection);
            let creature = collection.get(&id).expect("just summoned");
            println!(
                "The {} stirs... you summoned {} [{}]",
                world_state, creature.name, creature.rarity
            );
            println!("  id:   {}", creature.id);
            println!("  lore: {}", creature.lore);
        }
        Command::List => {
            if collection.is_empty() {
                println!("The codex is empty. Try `kagura summon`.");
            }
            for creature in collection.iter() {
                println!(
                    "{}  {:<16} [{:<9}] {}",
                    creature.id, creature.name, creature.rarity, creature.world_state
                );
            }
        }
        Command::Show { id } => {
            let id = CreatureId::from_string(id);
            let Some(creature) = collection.get(&id) else {
                bail!("No creature with id {}", id);
            };
            println!("{} [{}]", creature.name, creature.rarity);
            println!("World state: {}", creature.world_state);
            println!("Summoned at: {}", creature.summoned_at);
            if let Some(location) = creature.location {
                println!(
                    "Location:    {:.4}, {:.4}",
                    location.latitude, location.longitude
                );
            }
            println!("Image:       {}", creature.image_url);
            println!();
            println!("{}", creature.description);
            println!();
            println!("{}", creature.lore);
            println!();
            for attribute in &creature.attributes {
                println!("  {:<20} {:.2}", attribute.name, attribute.value);
            }
        }
        Command::Rename { id, name } => {
            let id = CreatureId::from_string(id);
            let patch = CreaturePatch {
                name: Some(name),
                ..Default::default()
            };
            if !collection.update(&id, patch) {
                bail!("No creature with id {}", id);
            }
            println!("Renamed {}", id);
        }
        Command::Release { id } => {
            let id = CreatureId::from_string(id);
            if !collection.remove(&id) {
                bail!("No creature with id {}", id);
            }
            println!("Released {}", id);
        }
        Command::Buy { item } => {
            let Some(item) = ItemId::parse(&item) else {
                bail!(
                    "Unknown item. Catalog: {}",
                    ItemId::ALL.map(|i| i.slug()).join(", ")
                );
            };
            shop.purchase(item)?;
            println!("Bought {} ({} left)", item, shop.currency());
        }
        Command::Status => {
            let registry = WorldStateRegistry::new();
            let state = kagura::current_world_state();
            let info = registry.get(state);
            println!("World state: {}", info.name);
            println!("  {}", info.description);
            println!("  affinity: {}", info.affinity.join(", "));
            println!("  odds:");
            for tier in Rarity::ALL {
                println!("    {:<9} {:>5.1}%", tier, info.rarity_weight(tier) * 100.0);
            }
            println!();
            println!(
                "Collection: {} creatures ({} lifetime summons)",
                collection.len(),
                collection.summon_count()
            );
            if let Some(last) = collection.last_summon() {
                println!("Last summon: {}", last);
            }
            println!("Currency: {}", shop.currency());
            if let Some(end) = shop.subscription_end() {
                println!("Subscription until: {}", end);
            }
        }
        Command::Reset => unreachable!("handled above"),
    }

    persistence.save(&collection, &settings, &shop)?;
    Ok(())
}
