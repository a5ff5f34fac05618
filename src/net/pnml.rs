//! Import of place/transition nets from PNML documents.
//!
//! This is a best-effort reader for the subset of PNML used by common net editors:
//!
//! - `<place id="..">` with optional `<name><text>` and `<initialMarking><text>`,
//! - `<transition id="..">` with optional `<name><text>`,
//! - `<arc source=".." target="..">` with optional `<inscription><text>` weight (default 1).
//!
//! Pages are flattened, tool-specific and graphics elements are ignored. Elements without
//! a name use their identifier as a label.

use crate::net::{IncidenceMatrix, Marking, NetError, PetriNet};
use log::{debug, warn};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

/// Errors encountered while reading a PNML document.
#[derive(Debug, Error)]
pub enum PnmlError {
    #[error("cannot read PNML file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("document has no <pnml> root element")]
    NoPnmlTag,
    #[error("element is missing the `{0}` attribute")]
    MissingAttribute(&'static str),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("arc from `{from}` to `{to}` does not connect a place and a transition")]
    InvalidArc { from: String, to: String },
    #[error(transparent)]
    Net(#[from] NetError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Outside,
    Net,
    Place,
    PlaceName,
    InitialMarking,
    Transition,
    TransitionName,
    Arc,
    ArcInscription,
}

struct Node {
    id: String,
    label: Option<String>,
}

struct Arc {
    source: String,
    target: String,
    weight: u32,
}

impl PetriNet {
    /// Read a net from a PNML document stored in a string.
    pub fn from_pnml_str(document: &str) -> Result<PetriNet, PnmlError> {
        import_pnml(&mut Reader::from_str(document))
    }

    /// Read a net from a buffered reader producing a PNML document.
    pub fn from_pnml_reader<R: BufRead>(reader: R) -> Result<PetriNet, PnmlError> {
        import_pnml(&mut Reader::from_reader(reader))
    }

    /// Read a net from a PNML file.
    pub fn from_pnml_file<P: AsRef<Path>>(path: P) -> Result<PetriNet, PnmlError> {
        let document = std::fs::read_to_string(path)?;
        PetriNet::from_pnml_str(&document)
    }
}

fn import_pnml<R: BufRead>(reader: &mut Reader<R>) -> Result<PetriNet, PnmlError> {
    reader.config_mut().trim_text(true);
    reader.config_mut().expand_empty_elements = true;

    let mut buf: Vec<u8> = Vec::new();
    let mut mode = Mode::Outside;
    let mut encountered_pnml_tag = false;

    let mut places: Vec<Node> = Vec::new();
    let mut tokens: Vec<u32> = Vec::new();
    let mut transitions: Vec<Node> = Vec::new();
    let mut arcs: Vec<Arc> = Vec::new();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(element) => match element.name().as_ref() {
                b"pnml" => encountered_pnml_tag = true,
                b"net" => mode = Mode::Net,
                b"place" if mode == Mode::Net => {
                    places.push(Node {
                        id: attribute(&element, "id")?,
                        label: None,
                    });
                    tokens.push(0);
                    mode = Mode::Place;
                }
                b"transition" if mode == Mode::Net => {
                    transitions.push(Node {
                        id: attribute(&element, "id")?,
                        label: None,
                    });
                    mode = Mode::Transition;
                }
                b"arc" if mode == Mode::Net => {
                    arcs.push(Arc {
                        source: attribute(&element, "source")?,
                        target: attribute(&element, "target")?,
                        weight: 1,
                    });
                    mode = Mode::Arc;
                }
                b"name" => match mode {
                    Mode::Place => mode = Mode::PlaceName,
                    Mode::Transition => mode = Mode::TransitionName,
                    _ => {}
                },
                b"initialMarking" if mode == Mode::Place => mode = Mode::InitialMarking,
                b"inscription" if mode == Mode::Arc => mode = Mode::ArcInscription,
                _ => {}
            },
            Event::End(element) => match element.name().as_ref() {
                b"place" | b"transition" | b"arc" => mode = Mode::Net,
                b"net" => mode = Mode::Outside,
                b"name" => match mode {
                    Mode::PlaceName => mode = Mode::Place,
                    Mode::TransitionName => mode = Mode::Transition,
                    _ => {}
                },
                b"initialMarking" if mode == Mode::InitialMarking => mode = Mode::Place,
                b"inscription" if mode == Mode::ArcInscription => mode = Mode::Arc,
                _ => {}
            },
            Event::Text(text) => {
                let text = text.unescape()?.trim().to_string();
                if text.is_empty() {
                    continue;
                }
                match mode {
                    Mode::PlaceName => {
                        if let Some(place) = places.last_mut() {
                            place.label = Some(text);
                        }
                    }
                    Mode::TransitionName => {
                        if let Some(transition) = transitions.last_mut() {
                            transition.label = Some(text);
                        }
                    }
                    Mode::InitialMarking => {
                        if let Some(count) = tokens.last_mut() {
                            *count = parse_number(&text)?;
                        }
                    }
                    Mode::ArcInscription => {
                        if let Some(arc) = arcs.last_mut() {
                            arc.weight = parse_number(&text)?;
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !encountered_pnml_tag {
        return Err(PnmlError::NoPnmlTag);
    }

    let place_index: HashMap<&str, usize> = places
        .iter()
        .enumerate()
        .map(|(i, it)| (it.id.as_str(), i))
        .collect();
    let transition_index: HashMap<&str, usize> = transitions
        .iter()
        .enumerate()
        .map(|(i, it)| (it.id.as_str(), i))
        .collect();

    let mut input = IncidenceMatrix::zeros(transitions.len(), places.len());
    let mut output = IncidenceMatrix::zeros(transitions.len(), places.len());
    for arc in &arcs {
        let source = arc.source.as_str();
        let target = arc.target.as_str();
        if let (Some(p), Some(t)) = (place_index.get(source), transition_index.get(target)) {
            input.add(*t, *p, arc.weight);
        } else if let (Some(t), Some(p)) = (transition_index.get(source), place_index.get(target))
        {
            output.add(*t, *p, arc.weight);
        } else {
            return Err(PnmlError::InvalidArc {
                from: arc.source.clone(),
                to: arc.target.clone(),
            });
        }
    }

    let initial = Marking::from(tokens);
    if !initial.is_safe() {
        warn!("Initial marking {initial} is not 1-safe.");
    }

    debug!(
        "Imported PNML net with {} places, {} transitions and {} arcs.",
        places.len(),
        transitions.len(),
        arcs.len()
    );

    let (place_ids, place_labels) = split_labels(places);
    let (transition_ids, transition_labels) = split_labels(transitions);
    Ok(PetriNet::new(
        place_ids,
        transition_ids,
        place_labels,
        transition_labels,
        input,
        output,
        initial,
    )?)
}

fn attribute(element: &BytesStart, key: &'static str) -> Result<String, PnmlError> {
    let value = element
        .try_get_attribute(key)
        .ok()
        .flatten()
        .ok_or(PnmlError::MissingAttribute(key))?;
    Ok(String::from_utf8_lossy(value.value.as_ref()).to_string())
}

fn parse_number(text: &str) -> Result<u32, PnmlError> {
    text.parse::<u32>()
        .map_err(|_| PnmlError::InvalidNumber(text.to_string()))
}

fn split_labels(nodes: Vec<Node>) -> (Vec<String>, Vec<String>) {
    nodes
        .into_iter()
        .map(|it| {
            let label = it.label.unwrap_or_else(|| it.id.clone());
            (it.id, label)
        })
        .unzip()
}
