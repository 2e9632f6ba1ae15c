use anyhow::Context;
use pokepin::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
commands:
  zoom <z>            camera moved to zoom z
  tap <lat> <lng>     tap the map
  show <marker id>    tap a marker directly
  more                load the next picker page
  search <query>      filter the picker (empty query clears)
  pick <n>            place picker entry n at the last tapped spot
  cancel              dismiss the picker without placing
  markers             list placed markers
  remove <marker id>  delete a marker
  browse              load the next browse page
  favorite <n>        make browse entry n the favorite
  unfavorite          clear the favorite
  quit";

/// Headless stand-in for the map and home screens
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => PokepinConfig::load(&path).with_context(|| format!("loading config {}", path))?,
        None => PokepinConfig::default(),
    };

    let mut app = App::new(config)?;
    app.start().await?;
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match app.handle(line.trim()).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => eprintln!("error: {:#}", e),
        }
    }

    Ok(())
}

struct App {
    catalog: HttpCatalog,
    store: FileStore,
    icons: PassthroughIcons,
    map: MapSession,
    favorites: FavoriteSession,
    browse: Pager,
    picker: Pager,
    query: String,
}

impl App {
    fn new(config: PokepinConfig) -> anyhow::Result<Self> {
        let catalog = HttpCatalog::new(config.catalog.clone()).context("building catalog client")?;
        Ok(Self {
            catalog,
            store: FileStore::new(config.storage.path.clone()),
            icons: PassthroughIcons {
                size: config.map.icon_size,
            },
            map: MapSession::new(config.map.clone(), &config.storage),
            favorites: FavoriteSession::new(&config.storage),
            browse: Pager::new(config.catalog_for(CatalogProfile::Browse).page_size),
            picker: Pager::new(config.catalog_for(CatalogProfile::MapPicker).page_size),
            query: String::new(),
        })
    }

    async fn start(&mut self) -> anyhow::Result<()> {
        let loaded = self.map.load(&self.store, &self.icons).await?;
        let center = self.map.center();
        println!(
            "map at ({:.6}, {:.6}) zoom {}, {} markers",
            center.latitude,
            center.longitude,
            self.map.zoom(),
            loaded
        );
        match self.favorites.load(&self.store)? {
            Some(favorite) => println!("favorite: #{} {}", favorite.id, favorite.name),
            None => println!("favorite: none selected"),
        }
        Ok(())
    }

    /// Runs one command; `Ok(false)` ends the session
    async fn handle(&mut self, line: &str) -> anyhow::Result<bool> {
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => {}
            "quit" | "exit" => return Ok(false),
            "help" => println!("{}", HELP),
            "zoom" => {
                let zoom: f64 = rest.parse().context("zoom <z>")?;
                if let EventOutcome::ZoomChanged(zoom) = self.map.handle_event(MapEvent::camera_move(zoom)) {
                    println!("zoom {}", zoom);
                }
            }
            "tap" => {
                let coordinate = parse_coordinate(rest)?;
                let opens_picker = match self.map.on_map_click(coordinate) {
                    TapOutcome::MarkerHit(marker) => {
                        print_entry(marker.entry());
                        false
                    }
                    TapOutcome::PlacementStarted(at) => {
                        println!("empty spot at ({:.6}, {:.6}); pick an entry", at.latitude, at.longitude);
                        true
                    }
                };
                if opens_picker {
                    self.query.clear();
                    if self.picker.is_empty() {
                        self.picker.next_page(&self.catalog).await?;
                    }
                    self.print_picker();
                }
            }
            "show" => match self.map.on_marker_click(rest) {
                Some(marker) => print_entry(marker.entry()),
                None => println!("no marker {}", rest),
            },
            "more" => {
                match self.picker.next_page(&self.catalog).await? {
                    Some(added) => println!("{} more entries", added),
                    None => println!("nothing more to load"),
                }
                self.print_picker();
            }
            "search" => {
                self.query = rest.to_string();
                self.print_picker();
            }
            "pick" => {
                let index: usize = rest.parse().context("pick <n>")?;
                let entry = self
                    .picker
                    .search(&self.query)
                    .get(index)
                    .map(|entry| (*entry).clone())
                    .with_context(|| format!("no picker entry {}", index))?;
                let marker = self.map.create_marker(entry, &self.icons, &self.store).await?;
                println!("placed {} ({})", marker.id(), marker.title());
            }
            "cancel" => match self.map.pending_placement() {
                Some(_) => {
                    self.map.cancel_placement();
                    self.query.clear();
                    println!("placement cancelled");
                }
                None => println!("no placement in progress"),
            },
            "markers" => {
                for marker in self.map.markers() {
                    match marker.coordinates() {
                        Some(at) => println!("{}  {}  ({:.6}, {:.6})", marker.id(), marker.title(), at.latitude, at.longitude),
                        None => println!("{}  {}  (not placed)", marker.id(), marker.title()),
                    }
                }
            }
            "remove" => match self.map.remove_marker(rest, &self.store)? {
                Some(marker) => println!("removed {}", marker.id()),
                None => println!("no marker {}", rest),
            },
            "browse" => {
                self.browse.next_page(&self.catalog).await?;
                for (index, entry) in self.browse.entries().iter().enumerate() {
                    println!("{:>3}  #{} {}", index, entry.id, entry.name);
                }
            }
            "favorite" => {
                let index: usize = rest.parse().context("favorite <n>")?;
                let entry = self
                    .browse
                    .entries()
                    .get(index)
                    .cloned()
                    .with_context(|| format!("no browse entry {}", index))?;
                if !self.favorites.offers_favorite_button(&entry) {
                    println!("{} is already the favorite", entry.name);
                } else {
                    self.favorites.set(entry, &self.store)?;
                }
            }
            "unfavorite" => self.favorites.clear(&self.store)?,
            other => println!("unknown command {:?}; try help", other),
        }

        Ok(true)
    }

    fn print_picker(&self) {
        for (index, entry) in self.picker.search(&self.query).iter().enumerate() {
            println!("{:>3}  #{} {} [{}]", index, entry.id, entry.name, entry.types.join(", "));
        }
    }
}

fn parse_coordinate(text: &str) -> anyhow::Result<Coordinate> {
    let mut parts = text.split_whitespace().map(str::parse::<f64>);
    match (parts.next(), parts.next()) {
        (Some(Ok(latitude)), Some(Ok(longitude))) => {
            let coordinate = Coordinate::new(latitude, longitude);
            anyhow::ensure!(coordinate.is_valid(), "coordinate out of range");
            Ok(coordinate)
        }
        _ => anyhow::bail!("tap <lat> <lng>"),
    }
}

fn print_entry(entry: &CatalogEntry) {
    println!("#{} {} [{}]", entry.id, entry.name, entry.types.join(", "));
    for (label, value) in entry.stats.labelled() {
        println!("  {:<16}{}", label, value);
    }
}
