#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::mpsc,
    time::Duration,
};

use serde::Deserialize;
use vsm_classifier::{Context, Document, NormalizeError, Normalizer, Vsm};

pub const TIMEOUT: Duration = Duration::from_millis(500);

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn gold_documents() -> Vec<Document> {
    vec![
        Document::new("Shipment of gold damaged in a fire.", "d1"),
        Document::new("Delivery of silver arrived in a silver truck.", "d2"),
        Document::new("Shipment-of-gold-arrived in a truck.", "d3"),
    ]
}

/// Streams `docs` through `Vsm::train` and fails the test on any error or stall.
pub fn train_all(vsm: &Vsm, docs: &[Document]) {
    let (tx, input) = mpsc::sync_channel(docs.len());
    for doc in docs {
        tx.send(doc.clone()).unwrap();
    }
    drop(tx);

    let results = vsm.train(Context::background(), input);
    for doc in docs {
        match results.recv_timeout(TIMEOUT) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => panic!("training {:?} failed: {err}", doc.class),
            Err(_) => panic!("training timed out"),
        }
    }
}

/// Replaces every char of `runes` with the first char of `to`.
pub struct RuneMap {
    runes: String,
    to: Option<char>,
}

impl RuneMap {
    pub fn new(runes: &str, to: &str) -> Self {
        Self {
            runes: runes.to_owned(),
            to: to.chars().next(),
        }
    }
}

impl Normalizer for RuneMap {
    fn normalize(&self, text: &str) -> Result<String, NormalizeError> {
        Ok(text
            .chars()
            .map(|c| match self.to {
                Some(to) if self.runes.contains(c) => to,
                _ => c,
            })
            .collect())
    }
}

/// Maps the Unicode hyphen characters to spaces.
pub fn hyphen_to_space(text: &str) -> Result<String, NormalizeError> {
    const HYPHENS: &[char] = &[
        '\u{002D}', '\u{00AD}', '\u{058A}', '\u{1806}', '\u{2010}', '\u{2011}', '\u{2E17}',
        '\u{30FB}', '\u{FE63}', '\u{FF0D}', '\u{FF65}',
    ];
    Ok(text.chars().map(|c| if HYPHENS.contains(&c) { ' ' } else { c }).collect())
}

pub fn always_fails(_: &str) -> Result<String, NormalizeError> {
    Err(NormalizeError::new("Testing Error"))
}

#[derive(Debug, Deserialize)]
pub struct Fixture {
    #[serde(rename = "documents")]
    pub docs: Vec<Document>,
    pub transform: Option<Transform>,
    pub tests: Vec<FixtureCase>,
}

#[derive(Debug, Deserialize)]
pub struct Transform {
    pub map: Option<RuneMapSpec>,
}

#[derive(Debug, Deserialize)]
pub struct RuneMapSpec {
    pub runes: String,
    pub to: String,
}

#[derive(Debug, Deserialize)]
pub struct FixtureCase {
    pub query: String,
    #[serde(rename = "wantClass")]
    pub want: String,
}

impl Fixture {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// A classifier configured with the fixture's transform, if any.
    pub fn classifier(&self) -> Vsm {
        match self.transform.as_ref().and_then(|t| t.map.as_ref()) {
            Some(map) => Vsm::with_normalizer(RuneMap::new(&map.runes, &map.to)),
            None => Vsm::new(),
        }
    }
}

pub fn testdata(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
}
