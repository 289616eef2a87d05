//! Shared test fixtures: a small hand-weighted role model and in-memory PDFs.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::prediction::classifier::LinearClassifier;
use crate::prediction::labels::{label_index, ROLE_LABELS};
use crate::prediction::model::TfidfLinearModel;
use crate::prediction::predictor::ModelArtifacts;
use crate::prediction::vectorizer::{Norm, TfidfVectorizer};

/// Terms as `normalize` emits them ("learning", "statistics" and "sales" are
/// lexicon words and are kept whole).
pub const VOCABULARY: [&str; 20] = [
    "python", "django", "rest", "api", "postgresql", "backend", "engineer", "developer", "java",
    "spring", "data", "machine", "learning", "model", "statistics", "account", "audit", "tax",
    "sales", "customer",
];

const ROLE_WEIGHTS: &[(&str, &[(&str, f64)])] = &[
    (
        "Python Developer",
        &[
            ("python", 3.0),
            ("django", 3.0),
            ("rest", 1.0),
            ("api", 1.5),
            ("postgresql", 1.0),
            ("backend", 1.5),
            ("engineer", 0.5),
            ("developer", 1.0),
        ],
    ),
    (
        "Java Developer",
        &[
            ("java", 3.0),
            ("spring", 3.0),
            ("api", 1.0),
            ("backend", 1.0),
            ("developer", 1.0),
            ("engineer", 0.5),
        ],
    ),
    (
        "Data Science",
        &[
            ("data", 3.0),
            ("machine", 2.0),
            ("learning", 2.0),
            ("model", 2.0),
            ("statistics", 2.0),
            ("python", 1.0),
        ],
    ),
    ("Accountant", &[("account", 3.0), ("audit", 2.0), ("tax", 2.0)]),
    ("Sales", &[("sales", 3.0), ("customer", 2.0)]),
];

fn term_index(term: &str) -> usize {
    VOCABULARY
        .iter()
        .position(|t| *t == term)
        .unwrap_or_else(|| panic!("fixture term {term} not in vocabulary"))
}

pub fn vectorizer() -> TfidfVectorizer {
    TfidfVectorizer {
        vocabulary: VOCABULARY
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect(),
        idf: (0..VOCABULARY.len()).map(|i| 1.0 + i as f64 / 10.0).collect(),
        ngram_range: (1, 1),
        sublinear_tf: false,
        norm: Norm::L2,
    }
}

pub fn classifier() -> LinearClassifier {
    let mut coef = vec![vec![0.0; VOCABULARY.len()]; ROLE_LABELS.len()];
    for (role, weights) in ROLE_WEIGHTS {
        let row = label_index(role).expect("fixture role is a known label");
        for (term, weight) in weights.iter() {
            coef[row][term_index(term)] = *weight;
        }
    }
    LinearClassifier {
        classes: Some(ROLE_LABELS.iter().map(|l| l.to_string()).collect()),
        coef,
        intercept: vec![-1.0; ROLE_LABELS.len()],
    }
}

pub fn model() -> TfidfLinearModel {
    TfidfLinearModel::new(vectorizer(), classifier()).expect("fixture model is consistent")
}

/// Writes the fixture pair as JSON artifacts under `dir`.
pub fn write_artifacts(dir: &Path) -> ModelArtifacts {
    let artifacts = ModelArtifacts {
        vectorizer_path: dir.join("tfidf_vectorizer.json"),
        model_path: dir.join("model.json"),
    };
    std::fs::write(
        &artifacts.vectorizer_path,
        serde_json::to_vec(&vectorizer()).unwrap(),
    )
    .unwrap();
    std::fs::write(
        &artifacts.model_path,
        serde_json::to_vec(&classifier()).unwrap(),
    )
    .unwrap();
    artifacts
}

/// Builds a PDF with one page per entry of `pages`, each line set in Helvetica.
/// `title`, when given, is stored in the document information dictionary.
pub fn pdf(pages: &[&str], title: Option<&str>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 11.into()]),
            Operation::new("Td", vec![72.into(), 760.into()]),
        ];
        for line in text.lines() {
            operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
            operations.push(Operation::new("Td", vec![0.into(), (-16).into()]));
        }
        operations.push(Operation::new("ET", vec![]));
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages.len() as i64,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if let Some(title) = title {
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(title),
            "Producer" => Object::string_literal("fixture writer"),
        });
        doc.trailer.set("Info", info_id);
    }

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
