use std::collections::HashMap;
use std::time::Duration;

use gamedeck_lib::loader::{site_url, transform_document};
use gamedeck_lib::{
    Fetcher, GalleryError, GameDraft, HandlerError, HandlerRegistry, load_catalog,
};
use serde_json::{Value, json};
use tokio::sync::Barrier;
use url::Url;

/// Serves JSON documents from memory; unknown URLs answer 404.
struct MemoryFetcher {
    docs: HashMap<String, Value>,
}

impl MemoryFetcher {
    fn new() -> Self {
        Self {
            docs: HashMap::new(),
        }
    }

    fn with(mut self, url: &str, doc: Value) -> Self {
        self.docs.insert(url.to_string(), doc);
        self
    }
}

impl Fetcher for MemoryFetcher {
    async fn get_json(&self, url: &Url) -> Result<Value, GalleryError> {
        self.docs
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| GalleryError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// Holds every data-file request until `barrier` has seen all of them, so a
/// loader that fetched sources one at a time would never finish.
struct RendezvousFetcher {
    site: MemoryFetcher,
    barrier: Barrier,
}

impl Fetcher for RendezvousFetcher {
    async fn get_json(&self, url: &Url) -> Result<Value, GalleryError> {
        if url.path().starts_with("/data/") {
            self.barrier.wait().await;
        }
        self.site.get_json(url).await
    }
}

const BASE: &str = "http://localhost:5500/";

fn base() -> Url {
    Url::parse(BASE).unwrap()
}

fn manifest() -> Value {
    json!([
        {
            "location": "consoles.json",
            "handler": "grouped",
            "groups": [["nes", "#c00", "Consoles"], ["snes", "#60c", "Consoles"]],
            "name": "consoles"
        },
        {
            "location": "jams.json",
            "handler": "flat",
            "groups": [["jam", "teal"]],
            "name": "jams"
        }
    ])
}

fn consoles() -> Value {
    json!([
        {"type": "nes", "games": [
            {"title": "Chess", "url": "/g/chess-nes", "img": "/i/chess.png"},
            {"title": "Zelda", "url": "/g/zelda"}
        ]},
        {"type": "snes", "games": [
            {"title": "Aladdin", "url": "/g/aladdin"}
        ]}
    ])
}

fn jams() -> Value {
    json!([
        {"games": [
            {"title": "CHESS", "url": "/g/chess-jam", "type": "jam"},
            {"title": "Bloom", "url": "/g/bloom", "type": "jam"}
        ]}
    ])
}

fn full_site() -> MemoryFetcher {
    MemoryFetcher::new()
        .with("http://localhost:5500/data.json", manifest())
        .with("http://localhost:5500/data/consoles.json", consoles())
        .with("http://localhost:5500/data/jams.json", jams())
}

fn titles(games: &[gamedeck_lib::Game]) -> Vec<&str> {
    games.iter().map(|g| g.title.as_str()).collect()
}

#[tokio::test]
async fn loads_dedups_and_sorts() {
    let catalog = load_catalog(&full_site(), &base(), &HandlerRegistry::with_builtins())
        .await
        .unwrap();

    assert_eq!(catalog.total_loaded, 5);
    assert_eq!(titles(&catalog.games), vec!["Aladdin", "Bloom", "Chess", "Zelda"]);

    // The first-loaded Chess wins over the jam entry
    let chess = catalog.games.iter().find(|g| g.title_key() == "chess").unwrap();
    assert_eq!(chess.title, "Chess");
    assert_eq!(chess.section, "consoles");
    assert_eq!(chess.url, "/g/chess-nes");
    assert_eq!(chess.index, 0);
    assert_eq!(chess.image_url, "/i/chess.png");
}

#[tokio::test]
async fn sources_are_fetched_concurrently() {
    let site = RendezvousFetcher {
        site: full_site(),
        barrier: Barrier::new(2),
    };
    let handlers = HandlerRegistry::with_builtins();
    let catalog = tokio::time::timeout(
        Duration::from_secs(5),
        load_catalog(&site, &base(), &handlers),
    )
    .await
    .expect("source fetches did not overlap")
    .unwrap();

    assert_eq!(catalog.failed_sources().count(), 0);
    assert_eq!(titles(&catalog.games), vec!["Aladdin", "Bloom", "Chess", "Zelda"]);
}

#[tokio::test]
async fn indexes_follow_manifest_order() {
    let catalog = load_catalog(&full_site(), &base(), &HandlerRegistry::with_builtins())
        .await
        .unwrap();
    let bloom = catalog.games.iter().find(|g| g.title == "Bloom").unwrap();
    assert_eq!(bloom.index, 4);
    assert_eq!(bloom.section, "jams");
    assert_eq!(bloom.badge_type, "jam");
}

#[tokio::test]
async fn failed_source_contributes_nothing_but_keeps_badges() {
    let site = MemoryFetcher::new()
        .with("http://localhost:5500/data.json", manifest())
        .with("http://localhost:5500/data/jams.json", jams());
    let catalog = load_catalog(&site, &base(), &HandlerRegistry::with_builtins())
        .await
        .unwrap();

    assert_eq!(titles(&catalog.games), vec!["Bloom", "CHESS"]);
    assert_eq!(catalog.failed_sources().count(), 1);
    assert!(catalog.registry.contains("nes"));
    assert_eq!(catalog.registry.all_ids(), vec!["nes", "snes", "jam"]);
}

#[tokio::test]
async fn handler_error_drops_whole_source() {
    let broken = json!([
        {"type": "nes", "games": [
            {"title": "Fine", "url": "/g/fine"},
            {"url": "/g/untitled"}
        ]}
    ]);
    let site = full_site().with("http://localhost:5500/data/consoles.json", broken);
    let catalog = load_catalog(&site, &base(), &HandlerRegistry::with_builtins())
        .await
        .unwrap();

    assert_eq!(titles(&catalog.games), vec!["Bloom", "CHESS"]);
    let failed: Vec<_> = catalog.failed_sources().collect();
    assert_eq!(failed.len(), 1);
    assert!(matches!(
        failed[0].result,
        Err(GalleryError::Handler {
            error: HandlerError::MissingField("title"),
            ..
        })
    ));
}

#[tokio::test]
async fn unknown_handler_fails_only_that_source() {
    let site = full_site().with(
        "http://localhost:5500/data.json",
        json!([
            {"location": "consoles.json", "handler": "mystery", "groups": [], "name": "consoles"},
            {"location": "jams.json", "handler": "flat", "groups": [], "name": "jams"}
        ]),
    );
    let catalog = load_catalog(&site, &base(), &HandlerRegistry::with_builtins())
        .await
        .unwrap();
    assert_eq!(catalog.games.len(), 2);
    assert!(matches!(
        catalog.sources[0].result,
        Err(GalleryError::UnknownHandler(_))
    ));
}

#[tokio::test]
async fn handler_falls_back_to_source_name() {
    let mut handlers = HandlerRegistry::new();
    handlers.register(
        "jams",
        |game: &Value, _group: &Value, _i: usize, _j: usize| -> Result<GameDraft, HandlerError> {
            let title = game["title"].as_str().ok_or(HandlerError::MissingField("title"))?;
            Ok(GameDraft::new(title, "/jam", "jam"))
        },
    );
    let site = full_site().with(
        "http://localhost:5500/data.json",
        json!([{"location": "jams.json", "groups": [["jam", "teal"]], "name": "jams"}]),
    );
    let catalog = load_catalog(&site, &base(), &handlers).await.unwrap();
    assert_eq!(titles(&catalog.games), vec!["Bloom", "CHESS"]);
    assert!(catalog.games.iter().all(|g| g.url == "/jam"));
}

#[tokio::test]
async fn manifest_failure_is_fatal() {
    let err = load_catalog(&MemoryFetcher::new(), &base(), &HandlerRegistry::with_builtins())
        .await
        .unwrap_err();
    assert!(matches!(err, GalleryError::Status { status: 404, .. }));
}

#[test]
fn malformed_documents_are_rejected() {
    let handler = HandlerRegistry::with_builtins();
    let flat = handler.get("flat").unwrap();
    assert!(matches!(
        transform_document("x", &json!({"games": []}), flat),
        Err(GalleryError::Malformed { .. })
    ));
    assert!(matches!(
        transform_document("x", &json!([{"items": []}]), flat),
        Err(GalleryError::Malformed { .. })
    ));
    assert_eq!(transform_document("x", &json!([]), flat).unwrap().len(), 0);
}

#[test]
fn site_url_treats_base_as_directory() {
    let nested = Url::parse("http://example.com/arcade").unwrap();
    assert_eq!(
        site_url(&nested, "data.json").unwrap().as_str(),
        "http://example.com/arcade/data.json"
    );
    assert_eq!(
        site_url(&base(), "data/jams.json").unwrap().as_str(),
        "http://localhost:5500/data/jams.json"
    );
}
